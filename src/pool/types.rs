/*!
 * Pool Types
 * Block metadata and pool errors
 */

use crate::core::types::{BlockIndex, Pid, Size};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Pool operation result
pub type PoolResult<T> = Result<T, PoolError>;

/// Pool errors
///
/// These guard against caller misuse; a placement produced by a strategy
/// scan over the same pool never triggers them.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum PoolError {
    #[error("block index {0} out of range")]
    InvalidIndex(BlockIndex),

    #[error("block {0} is already allocated")]
    AlreadyAllocated(BlockIndex),

    #[error("block {index} holds {capacity} KB, cannot grant {requested} KB")]
    UndersizedBlock {
        index: BlockIndex,
        capacity: Size,
        requested: Size,
    },
}

/// Memory block metadata
///
/// Order within a pool is significant: it is the scan order for the
/// contiguous strategies and the basis of base-address computation for
/// segmentation. An allocated block's capacity is the granted size and is
/// never re-split or merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub capacity: Size,
    pub allocated: bool,
    pub owner: Option<Pid>,
}

impl Block {
    /// Create a free block of the given capacity
    pub fn free(capacity: Size) -> Self {
        Self {
            capacity,
            allocated: false,
            owner: None,
        }
    }

    pub fn is_free(&self) -> bool {
        !self.allocated
    }
}

/// Result of a successful split-allocate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitGrant {
    /// Index of the granted block (unchanged by the split)
    pub index: BlockIndex,
    /// Capacity of the free remainder inserted after the granted block,
    /// absent when the fit was exact
    pub fragment: Option<Size>,
}
