/*!
 * Placement Scans
 * The four fit scans over a span sequence
 *
 * All scans are read-only; the caller mutates the pool after the decision.
 * Ties in best-fit and worst-fit resolve to the earliest index: the strict
 * comparisons keep the first candidate seen at equal capacity.
 */

use crate::core::types::{BlockIndex, Size};
use crate::pool::Span;

/// First free span with enough capacity, ascending index order
pub fn first_fit<S: Span>(spans: &[S], size: Size) -> Option<BlockIndex> {
    spans
        .iter()
        .position(|s| s.is_free() && s.capacity() >= size)
}

/// Smallest free span with enough capacity; earliest wins ties
pub fn best_fit<S: Span>(spans: &[S], size: Size) -> Option<BlockIndex> {
    let mut best: Option<(BlockIndex, Size)> = None;
    for (index, span) in spans.iter().enumerate() {
        if !span.is_free() || span.capacity() < size {
            continue;
        }
        match best {
            Some((_, found)) if span.capacity() < found => best = Some((index, span.capacity())),
            None => best = Some((index, span.capacity())),
            _ => {}
        }
    }
    best.map(|(index, _)| index)
}

/// Largest free span with enough capacity; earliest wins ties
pub fn worst_fit<S: Span>(spans: &[S], size: Size) -> Option<BlockIndex> {
    let mut worst: Option<(BlockIndex, Size)> = None;
    for (index, span) in spans.iter().enumerate() {
        if !span.is_free() || span.capacity() < size {
            continue;
        }
        match worst {
            Some((_, found)) if span.capacity() > found => worst = Some((index, span.capacity())),
            None => worst = Some((index, span.capacity())),
            _ => {}
        }
    }
    worst.map(|(index, _)| index)
}

/// Circular scan of exactly `spans.len()` probes starting at `start`
pub fn next_fit<S: Span>(spans: &[S], size: Size, start: BlockIndex) -> Option<BlockIndex> {
    let count = spans.len();
    if count == 0 {
        return None;
    }

    let mut index = start % count;
    for _ in 0..count {
        let span = &spans[index];
        if span.is_free() && span.capacity() >= size {
            return Some(index);
        }
        index = (index + 1) % count;
    }
    None
}
