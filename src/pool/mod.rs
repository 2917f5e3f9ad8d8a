/*!
 * Block Pool
 * Ordered block sequence with split-on-allocate
 *
 * The pool never merges adjacent free blocks. Coalescing is deliberately
 * absent from the model: a fragment stays where the split created it.
 */

mod traits;
mod types;

pub use traits::Span;
pub use types::{Block, PoolError, PoolResult, SplitGrant};

use crate::core::types::{BlockIndex, Pid, Size};
use log::debug;

/// Ordered, mutable sequence of memory blocks
///
/// Built once per simulation run; strategies select over it read-only and
/// mutation happens afterwards through [`split_allocate`](Self::split_allocate).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockPool {
    blocks: Vec<Block>,
}

impl BlockPool {
    /// Build one free block per size, in input order
    pub fn new(sizes: &[Size]) -> Self {
        let blocks: Vec<Block> = sizes.iter().map(|&size| Block::free(size)).collect();
        debug!(
            "pool initialized: {} blocks, {} KB total",
            blocks.len(),
            blocks.iter().map(|b| b.capacity).sum::<Size>()
        );
        Self { blocks }
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Read-only view for placement scans
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn get(&self, index: BlockIndex) -> Option<&Block> {
        self.blocks.get(index)
    }

    /// Sum of all capacities, free and allocated
    ///
    /// Constant across any number of splits.
    pub fn total_capacity(&self) -> Size {
        self.blocks.iter().map(|b| b.capacity).sum()
    }

    /// Sum of free capacities (the pool's external fragmentation)
    pub fn free_capacity(&self) -> Size {
        self.blocks
            .iter()
            .filter(|b| b.is_free())
            .map(|b| b.capacity)
            .sum()
    }

    /// Grant `size` KB of the block at `index` to `pid`
    ///
    /// The block's capacity becomes the granted size; a positive remainder
    /// is inserted as a new free block immediately after it, so the sum of
    /// capacities is preserved.
    pub fn split_allocate(
        &mut self,
        index: BlockIndex,
        size: Size,
        pid: Pid,
    ) -> PoolResult<SplitGrant> {
        let block = self
            .blocks
            .get(index)
            .ok_or(PoolError::InvalidIndex(index))?;

        if block.allocated {
            return Err(PoolError::AlreadyAllocated(index));
        }
        if block.capacity < size {
            return Err(PoolError::UndersizedBlock {
                index,
                capacity: block.capacity,
                requested: size,
            });
        }

        let remainder = block.capacity - size;
        self.blocks[index] = Block {
            capacity: size,
            allocated: true,
            owner: Some(pid),
        };
        if remainder > 0 {
            self.blocks.insert(index + 1, Block::free(remainder));
        }

        debug!(
            "granted {} KB at block {} to pid {} (remainder {} KB)",
            size, index, pid, remainder
        );

        Ok(SplitGrant {
            index,
            fragment: (remainder > 0).then_some(remainder),
        })
    }
}
