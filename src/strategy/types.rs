/*!
 * Strategy Types
 * Placement policy variants and next-fit cursor state
 */

use crate::core::types::BlockIndex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Contiguous placement policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    FirstFit,
    BestFit,
    NextFit,
    WorstFit,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Strategy::FirstFit => write!(f, "first-fit"),
            Strategy::BestFit => write!(f, "best-fit"),
            Strategy::NextFit => write!(f, "next-fit"),
            Strategy::WorstFit => write!(f, "worst-fit"),
        }
    }
}

/// Next-fit scan start position
///
/// Scoped to one simulation run and threaded explicitly through every
/// placement call; never module-level state. Advances only on a successful
/// placement, to the index of the block just granted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextFitCursor(BlockIndex);

impl NextFitCursor {
    /// Cursor at the start of a run, pointing at block 0
    pub fn new() -> Self {
        Self(0)
    }

    pub fn position(&self) -> BlockIndex {
        self.0
    }

    pub(crate) fn move_to(&mut self, index: BlockIndex) {
        self.0 = index;
    }
}
