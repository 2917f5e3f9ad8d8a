/*!
 * Simulation Runs
 * Validated inputs in, complete replayable report out
 *
 * Each run owns its pool exclusively and executes synchronously: the full
 * trace exists before the caller sees any of it. Identical inputs produce
 * identical reports.
 */

mod input;
mod types;

pub use input::{InputError, SimResult};
pub use types::{
    ContiguousInput, PagingInput, Region, RunInput, RunReport, SegmentationInput,
};

use crate::core::types::{Label, Pid};
use crate::paging::FrameTable;
use crate::pool::BlockPool;
use crate::segmentation::SegmentPool;
use crate::stats::{self, Fragmentation};
use crate::strategy::NextFitCursor;
use crate::trace::{Payload, TraceRecorder};
use log::{info, warn};

/// Execute one run of whichever mode the input selects
pub fn run(input: &RunInput) -> SimResult<RunReport> {
    match input {
        RunInput::Contiguous(input) => run_contiguous(input),
        RunInput::Paging(input) => run_paging(input),
        RunInput::Segmentation(input) => run_segmentation(input),
    }
}

/// Variable partitioning under one of the four contiguous strategies
pub fn run_contiguous(input: &ContiguousInput) -> SimResult<RunReport> {
    input::validate_sizes("memory blocks", &input.block_sizes)?;
    input::validate_sizes("processes", &input.requests)?;

    info!(
        "starting {} run: {} blocks, {} requests",
        input.strategy,
        input.block_sizes.len(),
        input.requests.len()
    );

    let mut pool = BlockPool::new(&input.block_sizes);
    let mut labels: Vec<Label> = (1..=pool.len())
        .map(|n| format!("Block {n}").into())
        .collect();
    let mut cursor = NextFitCursor::new();
    let mut recorder = TraceRecorder::new();

    for (position, &size) in input.requests.iter().enumerate() {
        let pid = (position + 1) as Pid;
        let chosen = input.strategy.select(pool.blocks(), size, &mut cursor);

        let Some(index) = chosen else {
            warn!("pid {} ({} KB) not allocated: no fit", pid, size);
            recorder.record(Payload::BlockRejected { pid, size });
            continue;
        };

        match pool.split_allocate(index, size, pid) {
            Ok(grant) => {
                if grant.fragment.is_some() {
                    labels.insert(index + 1, "Fragment".into());
                }
                recorder.record(Payload::BlockPlaced {
                    pid,
                    size,
                    block: index,
                    fragment: grant.fragment,
                });
            }
            Err(err) => {
                // selection and grant disagree only on a scan bug; recover
                // as a rejection rather than abort the run
                warn!("pid {} grant at block {} refused: {}", pid, index, err);
                recorder.record(Payload::BlockRejected { pid, size });
            }
        }
    }

    let fragmentation = Fragmentation::External(stats::external_fragmentation(pool.blocks()));
    info!("run complete: external fragmentation {} KB", fragmentation.kb());

    let layout = pool
        .blocks()
        .iter()
        .zip(labels)
        .map(|(block, label)| Region {
            label,
            capacity: block.capacity,
            allocated: block.allocated,
            owner: block.owner.map(|pid| format!("P{pid}").into()),
            base: None,
        })
        .collect();

    Ok(RunReport {
        fragmentation,
        layout,
        trace: recorder.into_events(),
    })
}

/// Fixed-size frame allocation
pub fn run_paging(input: &PagingInput) -> SimResult<RunReport> {
    input::validate_scalar("total memory", input.total_memory)?;
    input::validate_scalar("page size", input.page_size)?;
    input::validate_sizes("processes", &input.process_sizes)?;

    info!(
        "starting paging run: {} KB total, {} KB pages, {} processes",
        input.total_memory,
        input.page_size,
        input.process_sizes.len()
    );

    let mut table = FrameTable::new(input.total_memory, input.page_size);
    let mut recorder = TraceRecorder::new();

    for (position, &size) in input.process_sizes.iter().enumerate() {
        let pid = (position + 1) as Pid;
        match table.allocate(pid, size) {
            Ok(frames) => {
                for (page, &frame) in frames.iter().enumerate() {
                    recorder.record(Payload::PageAssigned { pid, page, frame });
                }
            }
            Err(shortage) => {
                recorder.record(Payload::ProcessRejected {
                    pid,
                    size,
                    pages_needed: shortage.pages_needed,
                    frames_free: shortage.frames_free,
                });
            }
        }
    }

    let fragmentation = Fragmentation::Internal(stats::internal_fragmentation(&table));
    info!("run complete: internal fragmentation {} KB", fragmentation.kb());

    let layout = table
        .frames()
        .iter()
        .map(|frame| Region {
            label: format!("Frame {}", frame.index + 1).into(),
            capacity: table.page_size(),
            allocated: frame.allocated,
            owner: frame.owner.map(|pid| format!("P{pid}").into()),
            base: None,
        })
        .collect();

    Ok(RunReport {
        fragmentation,
        layout,
        trace: recorder.into_events(),
    })
}

/// Named segments over first-fit placement with base reporting
pub fn run_segmentation(input: &SegmentationInput) -> SimResult<RunReport> {
    input::validate_sizes("memory segments", &input.segment_sizes)?;
    input::validate_requests("process segments", &input.requests)?;

    info!(
        "starting segmentation run: {} segments, {} requests",
        input.segment_sizes.len(),
        input.requests.len()
    );

    let mut pool = SegmentPool::new(&input.segment_sizes);
    let mut labels: Vec<Label> = (1..=pool.len())
        .map(|n| format!("Segment {n}").into())
        .collect();
    let mut recorder = TraceRecorder::new();

    for request in &input.requests {
        match pool.allocate(&request.name, request.size) {
            Some(grant) => {
                if grant.fragment.is_some() {
                    labels.insert(grant.index + 1, "Fragment".into());
                }
                recorder.record(Payload::SegmentPlaced {
                    name: request.name.clone(),
                    size: request.size,
                    base: grant.base,
                    fragment: grant.fragment,
                });
            }
            None => {
                recorder.record(Payload::SegmentRejected {
                    name: request.name.clone(),
                    size: request.size,
                });
            }
        }
    }

    let fragmentation = Fragmentation::External(pool.free_capacity());
    info!("run complete: external fragmentation {} KB", fragmentation.kb());

    let layout = pool
        .regions()
        .iter()
        .zip(labels)
        .map(|(region, label)| Region {
            label,
            capacity: region.capacity,
            allocated: region.allocated,
            owner: region.owner.clone(),
            base: Some(region.base),
        })
        .collect();

    Ok(RunReport {
        fragmentation,
        layout,
        trace: recorder.into_events(),
    })
}
