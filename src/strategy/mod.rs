/*!
 * Allocation Strategies
 * Polymorphic placement selection over a block pool
 */

pub mod scan;
mod types;

pub use types::{NextFitCursor, Strategy};

use crate::core::types::{BlockIndex, Size};
use crate::pool::Span;

impl Strategy {
    /// Select a span for a request of `size` KB, or `None` when nothing fits
    ///
    /// No-fit is a normal outcome, not an error; the caller records it and
    /// moves on to the next request. The cursor belongs to the run: only
    /// next-fit reads it, and only a successful next-fit placement moves it.
    pub fn select<S: Span>(
        self,
        spans: &[S],
        size: Size,
        cursor: &mut NextFitCursor,
    ) -> Option<BlockIndex> {
        match self {
            Strategy::FirstFit => scan::first_fit(spans, size),
            Strategy::BestFit => scan::best_fit(spans, size),
            Strategy::WorstFit => scan::worst_fit(spans, size),
            Strategy::NextFit => {
                let found = scan::next_fit(spans, size, cursor.position());
                if let Some(index) = found {
                    cursor.move_to(index);
                }
                found
            }
        }
    }
}
