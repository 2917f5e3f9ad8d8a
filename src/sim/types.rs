/*!
 * Simulation Types
 * Validated run inputs and the finished report
 */

use crate::core::types::{Label, Size};
use crate::segmentation::SegmentRequest;
use crate::stats::Fragmentation;
use crate::strategy::Strategy;
use crate::trace::TraceEvent;
use serde::{Deserialize, Serialize};

/// Variable-partition run: one of the four contiguous strategies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContiguousInput {
    pub strategy: Strategy,
    pub block_sizes: Vec<Size>,
    /// Request sizes in processing order; process ids are positional (P1..)
    pub requests: Vec<Size>,
}

/// Paging run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagingInput {
    pub total_memory: Size,
    pub page_size: Size,
    pub process_sizes: Vec<Size>,
}

/// Segmentation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentationInput {
    pub segment_sizes: Vec<Size>,
    pub requests: Vec<SegmentRequest>,
}

/// One run description; the mode tag selects the engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum RunInput {
    Contiguous(ContiguousInput),
    Paging(PagingInput),
    Segmentation(SegmentationInput),
}

/// One row of the final memory layout
///
/// `label` is a positional or name tag for display, not load-bearing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub label: Label,
    pub capacity: Size,
    pub allocated: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<Label>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<Size>,
}

/// Everything a presentation layer needs to replay one run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    pub fragmentation: Fragmentation,
    pub layout: Vec<Region>,
    pub trace: Vec<TraceEvent>,
}
