/*!
 * Property Tests
 * Conservation, determinism, and fragmentation arithmetic over random runs
 */

use memsim::{run_contiguous, run_paging, ContiguousInput, Fragmentation, PagingInput, Payload};
use proptest::prelude::*;

fn any_strategy() -> impl Strategy<Value = memsim::Strategy> {
    prop_oneof![
        Just(memsim::Strategy::FirstFit),
        Just(memsim::Strategy::BestFit),
        Just(memsim::Strategy::NextFit),
        Just(memsim::Strategy::WorstFit),
    ]
}

proptest! {
    #[test]
    fn prop_capacity_is_conserved_across_splits(
        strategy in any_strategy(),
        block_sizes in prop::collection::vec(1usize..=1000, 1..8),
        requests in prop::collection::vec(1usize..=600, 1..8),
    ) {
        let input = ContiguousInput {
            strategy,
            block_sizes: block_sizes.clone(),
            requests,
        };
        let report = run_contiguous(&input).unwrap();

        let layout_total: usize = report.layout.iter().map(|r| r.capacity).sum();
        prop_assert_eq!(layout_total, block_sizes.iter().sum::<usize>());
    }

    #[test]
    fn prop_identical_inputs_replay_identically(
        strategy in any_strategy(),
        block_sizes in prop::collection::vec(1usize..=1000, 1..8),
        requests in prop::collection::vec(1usize..=600, 1..8),
    ) {
        let input = ContiguousInput { strategy, block_sizes, requests };
        let first = run_contiguous(&input).unwrap();
        let second = run_contiguous(&input).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_external_fragmentation_is_unplaced_capacity(
        strategy in any_strategy(),
        block_sizes in prop::collection::vec(1usize..=1000, 1..8),
        requests in prop::collection::vec(1usize..=600, 1..8),
    ) {
        let input = ContiguousInput {
            strategy,
            block_sizes: block_sizes.clone(),
            requests,
        };
        let report = run_contiguous(&input).unwrap();

        let placed: usize = report
            .trace
            .iter()
            .filter_map(|event| match event.payload {
                Payload::BlockPlaced { size, .. } => Some(size),
                _ => None,
            })
            .sum();
        let total: usize = block_sizes.iter().sum();
        prop_assert_eq!(report.fragmentation, Fragmentation::External(total - placed));
    }

    #[test]
    fn prop_paging_grants_whole_processes_only(
        page_size in 1usize..=256,
        frame_budget in 1usize..=16,
        process_sizes in prop::collection::vec(1usize..=600, 1..8),
    ) {
        let input = PagingInput {
            total_memory: page_size * frame_budget,
            page_size,
            process_sizes: process_sizes.clone(),
        };
        let report = run_paging(&input).unwrap();

        for (position, &size) in process_sizes.iter().enumerate() {
            let pid = (position + 1) as u32;
            let pages_needed = size.div_ceil(page_size);

            let assigned = report
                .trace
                .iter()
                .filter(|event| {
                    matches!(event.payload, Payload::PageAssigned { pid: p, .. } if p == pid)
                })
                .count();
            let rejected = report
                .trace
                .iter()
                .filter(|event| {
                    matches!(event.payload, Payload::ProcessRejected { pid: p, .. } if p == pid)
                })
                .count();

            // Exactly one of: a full set of page rows, or one rejection
            prop_assert!(
                (assigned == pages_needed && rejected == 0)
                    || (assigned == 0 && rejected == 1)
            );
        }
    }
}
