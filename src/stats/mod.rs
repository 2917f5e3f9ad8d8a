/*!
 * Fragmentation Accounting
 * Scalar summaries derived from final pool or frame state
 */

use crate::core::types::Size;
use crate::paging::FrameTable;
use crate::pool::Span;
use serde::{Deserialize, Serialize};

/// The run's single scalar summary, in KB
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "kb", rename_all = "snake_case")]
pub enum Fragmentation {
    /// Free capacity scattered across the pool, split fragments included
    External(Size),
    /// Capacity granted in whole frames but unused by the requesters
    Internal(Size),
}

impl Fragmentation {
    pub fn kb(&self) -> Size {
        match *self {
            Fragmentation::External(kb) | Fragmentation::Internal(kb) => kb,
        }
    }
}

/// Sum of capacities still free at end of run
pub fn external_fragmentation<S: Span>(spans: &[S]) -> Size {
    spans
        .iter()
        .filter(|s| s.is_free())
        .map(|s| s.capacity())
        .sum()
}

/// Allocated frame capacity minus successfully placed demand
///
/// Rejected processes do not enter the baseline: they hold no frames, so
/// they waste none.
pub fn internal_fragmentation(table: &FrameTable) -> Size {
    let granted = table.allocated_frames() * table.page_size();
    granted.saturating_sub(table.placed_demand())
}
