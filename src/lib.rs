/*!
 * Memory Allocation Simulator
 * Decision engine for contiguous, paged, and segmented allocation
 *
 * The engine is the pure input→outcome part of a memory-management
 * teaching tool: placement decisions, pool mutation, fragmentation
 * accounting, and a replayable trace. Rendering and pacing belong to
 * whatever consumes the trace.
 */

pub mod core;
pub mod paging;
pub mod pool;
pub mod segmentation;
pub mod sim;
pub mod stats;
pub mod strategy;
pub mod trace;

// Re-exports
pub use crate::core::types::{BlockIndex, Label, Pid, Size};
pub use paging::{Frame, FrameTable, InsufficientFrames};
pub use pool::{Block, BlockPool, PoolError, PoolResult, Span, SplitGrant};
pub use segmentation::{SegmentGrant, SegmentName, SegmentPool, SegmentRegion, SegmentRequest};
pub use sim::{
    run, run_contiguous, run_paging, run_segmentation, ContiguousInput, InputError, PagingInput,
    Region, RunInput, RunReport, SegmentationInput, SimResult,
};
pub use stats::Fragmentation;
pub use strategy::{NextFitCursor, Strategy};
pub use trace::{Payload, TraceEvent, TraceRecorder};
