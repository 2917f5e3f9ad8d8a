/*!
 * Trace Types
 * Strongly-typed per-request decision records
 */

use crate::core::types::{BlockIndex, Label, Pid, Size};
use serde::{Deserialize, Serialize};

/// One recorded decision
///
/// `seq` is the append position; events replay in `seq` order and that
/// order is the request processing order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceEvent {
    pub seq: u32,
    pub payload: Payload,
}

/// Decision payload - one variant per row shape the engine can produce
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Payload {
    /// Contiguous placement succeeded; `block` is the pool index at the
    /// time of the grant
    BlockPlaced {
        pid: Pid,
        size: Size,
        block: BlockIndex,
        fragment: Option<Size>,
    },

    /// No free block could hold the request
    BlockRejected { pid: Pid, size: Size },

    /// One page→frame assignment; emitted once per page of a granted
    /// process, in page order
    PageAssigned { pid: Pid, page: usize, frame: usize },

    /// Paging rejected the whole process; no frames were touched
    ProcessRejected {
        pid: Pid,
        size: Size,
        pages_needed: usize,
        frames_free: usize,
    },

    /// Named segment placed at `base`
    SegmentPlaced {
        name: Label,
        size: Size,
        base: Size,
        fragment: Option<Size>,
    },

    /// No memory segment could hold the named request
    SegmentRejected { name: Label, size: Size },
}

impl Payload {
    /// Whether this event records a per-request failure
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Payload::BlockRejected { .. }
                | Payload::ProcessRejected { .. }
                | Payload::SegmentRejected { .. }
        )
    }
}
