/*!
 * Segmentation Engine
 * First-fit placement over named segments with base/limit bookkeeping
 */

mod types;

pub use types::{SegmentGrant, SegmentName, SegmentRegion, SegmentRequest};

use crate::core::types::Size;
use crate::strategy::scan;
use log::{debug, info, warn};

/// Segment pool for one segmentation run
///
/// Bases come from a single prefix-sum pass over the original sizes;
/// later splits derive the fragment's base from the split point instead
/// of recomputing the prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentPool {
    regions: Vec<SegmentRegion>,
}

impl SegmentPool {
    /// Build free segments with bases at the running prefix sum of `sizes`
    pub fn new(sizes: &[Size]) -> Self {
        let mut base = 0;
        let regions: Vec<SegmentRegion> = sizes
            .iter()
            .map(|&size| {
                let region = SegmentRegion::free(base, size);
                base += size;
                region
            })
            .collect();
        debug!(
            "segment pool initialized: {} segments, {} KB total",
            regions.len(),
            base
        );
        Self { regions }
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn regions(&self) -> &[SegmentRegion] {
        &self.regions
    }

    /// Sum of all capacities, constant across splits
    pub fn total_capacity(&self) -> Size {
        self.regions.iter().map(|r| r.capacity).sum()
    }

    /// Sum of free capacities (external fragmentation)
    pub fn free_capacity(&self) -> Size {
        self.regions
            .iter()
            .filter(|r| !r.allocated)
            .map(|r| r.capacity)
            .sum()
    }

    /// Place a named request into the earliest free segment that holds it
    ///
    /// `None` means no segment fits; the pool is left untouched and the
    /// run records the rejection. Names are processed independently, so a
    /// repeated name simply claims another segment.
    pub fn allocate(&mut self, name: &SegmentName, size: Size) -> Option<SegmentGrant> {
        let index = match scan::first_fit(&self.regions, size) {
            Some(index) => index,
            None => {
                warn!("segment '{}' ({} KB) rejected: no fit", name, size);
                return None;
            }
        };

        let (base, capacity) = (self.regions[index].base, self.regions[index].capacity);
        let remainder = capacity - size;

        self.regions[index] = SegmentRegion {
            base,
            capacity: size,
            allocated: true,
            owner: Some(name.clone()),
        };
        if remainder > 0 {
            self.regions
                .insert(index + 1, SegmentRegion::free(base + size, remainder));
        }

        info!(
            "segment '{}' placed: {} KB at base {} (remainder {} KB)",
            name, size, base, remainder
        );
        Some(SegmentGrant {
            index,
            base,
            fragment: (remainder > 0).then_some(remainder),
        })
    }
}
