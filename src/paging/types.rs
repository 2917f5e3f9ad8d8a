/*!
 * Paging Types
 * Frame metadata and the per-process shortage outcome
 */

use crate::core::types::Pid;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fixed-size physical frame
///
/// `index` is assigned at table creation and never changes. Frames are
/// fungible: a process claims free frames in index order with no
/// contiguity constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    pub index: usize,
    pub allocated: bool,
    pub owner: Option<Pid>,
}

impl Frame {
    pub fn free(index: usize) -> Self {
        Self {
            index,
            allocated: false,
            owner: None,
        }
    }
}

/// Not enough free frames for the whole process
///
/// Recovered per process: the run records the rejection and continues.
/// Partial grants are never made.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{pages_needed} pages needed, only {frames_free} frames free")]
pub struct InsufficientFrames {
    pub pages_needed: usize,
    pub frames_free: usize,
}
