/*!
 * Segmentation Types
 * Named segment requests and based memory regions
 */

use crate::core::types::{Label, Size};
use crate::pool::Span;
use serde::{Deserialize, Serialize};

/// Segment name; not required to be unique across requests
pub type SegmentName = Label;

/// One named allocation request
///
/// Requests travel as an explicit ordered list, never a map: processing
/// order is part of the contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentRequest {
    pub name: SegmentName,
    pub size: Size,
}

/// A memory segment with its base offset
///
/// `base` is fixed when the region is created: at pool initialization from
/// the prefix sum of the original sizes, or at a split from the parent's
/// base plus the granted size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentRegion {
    pub base: Size,
    pub capacity: Size,
    pub allocated: bool,
    pub owner: Option<SegmentName>,
}

impl SegmentRegion {
    pub fn free(base: Size, capacity: Size) -> Self {
        Self {
            base,
            capacity,
            allocated: false,
            owner: None,
        }
    }
}

impl Span for SegmentRegion {
    fn capacity(&self) -> Size {
        self.capacity
    }

    fn is_free(&self) -> bool {
        !self.allocated
    }
}

/// Result of a successful segment placement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentGrant {
    /// Index of the granted region (unchanged by the split)
    pub index: usize,
    pub base: Size,
    /// Capacity of the free remainder region, absent on an exact fit
    pub fragment: Option<Size>,
}
