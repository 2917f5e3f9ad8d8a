/*!
 * Paging Engine
 * Fixed-size frame pool with all-or-nothing process grants
 */

mod types;

pub use types::{Frame, InsufficientFrames};

use crate::core::types::{Pid, Size};
use log::{info, warn};

/// Fixed frame pool for one paging run
///
/// Callers construct it through the validated run layer: `page_size` is
/// positive and at most `total_memory` by that contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameTable {
    frames: Vec<Frame>,
    page_size: Size,
    /// Sum of requested sizes over processes actually granted frames;
    /// baseline for internal fragmentation
    placed_demand: Size,
}

impl FrameTable {
    /// Create `floor(total_memory / page_size)` free frames
    pub fn new(total_memory: Size, page_size: Size) -> Self {
        debug_assert!(page_size > 0, "page_size is validated positive upstream");
        let frame_count = total_memory / page_size;
        info!(
            "frame table initialized: {} frames of {} KB ({} KB total)",
            frame_count, page_size, total_memory
        );
        Self {
            frames: (0..frame_count).map(Frame::free).collect(),
            page_size,
            placed_demand: 0,
        }
    }

    pub fn page_size(&self) -> Size {
        self.page_size
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn free_frames(&self) -> usize {
        self.frames.iter().filter(|f| !f.allocated).count()
    }

    pub fn allocated_frames(&self) -> usize {
        self.frames.iter().filter(|f| f.allocated).count()
    }

    /// Demand successfully placed so far, in KB
    pub fn placed_demand(&self) -> Size {
        self.placed_demand
    }

    /// Pages a request of `size` KB occupies
    pub fn pages_needed(&self, size: Size) -> usize {
        size.div_ceil(self.page_size)
    }

    /// Claim frames for a whole process, or none at all
    ///
    /// Takes the first `pages_needed` free frames in index order and
    /// returns the claimed indices, one per page. On shortage the table is
    /// left untouched.
    pub fn allocate(&mut self, pid: Pid, size: Size) -> Result<Vec<usize>, InsufficientFrames> {
        let pages_needed = self.pages_needed(size);
        let free: Vec<usize> = self
            .frames
            .iter()
            .filter(|f| !f.allocated)
            .map(|f| f.index)
            .collect();

        if free.len() < pages_needed {
            warn!(
                "pid {} rejected: {} pages needed, {} frames free",
                pid,
                pages_needed,
                free.len()
            );
            return Err(InsufficientFrames {
                pages_needed,
                frames_free: free.len(),
            });
        }

        let claimed: Vec<usize> = free.into_iter().take(pages_needed).collect();
        for &index in &claimed {
            self.frames[index].allocated = true;
            self.frames[index].owner = Some(pid);
        }
        self.placed_demand += size;

        info!(
            "pid {} granted {} pages for {} KB (frames {:?})",
            pid, pages_needed, size, claimed
        );
        Ok(claimed)
    }
}
