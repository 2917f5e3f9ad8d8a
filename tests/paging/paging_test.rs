/*!
 * Paging Tests
 * Frame table sizing, all-or-nothing grants, internal fragmentation
 */

use memsim::{run_paging, Fragmentation, FrameTable, PagingInput, Payload};
use pretty_assertions::assert_eq;

#[test]
fn test_frame_count_is_floor_of_total_over_page_size() {
    let table = FrameTable::new(1024, 128);
    assert_eq!(table.frame_count(), 8);
    assert_eq!(table.free_frames(), 8);
}

#[test]
fn test_process_takes_one_frame_per_page() {
    let input = PagingInput {
        total_memory: 1024,
        page_size: 128,
        process_sizes: vec![300],
    };
    let report = run_paging(&input).unwrap();

    // 300 KB at 128 KB pages is 3 pages, one trace row each
    let rows: Vec<(usize, usize)> = report
        .trace
        .iter()
        .map(|event| match event.payload {
            Payload::PageAssigned { page, frame, .. } => (page, frame),
            ref other => panic!("unexpected event: {other:?}"),
        })
        .collect();
    assert_eq!(rows, vec![(0, 0), (1, 1), (2, 2)]);

    assert_eq!(report.fragmentation, Fragmentation::Internal(3 * 128 - 300));
}

#[test]
fn test_shortage_rejects_the_whole_process() {
    // 8 frames; P1 takes 6, P2 needs 3 with only 2 free
    let input = PagingInput {
        total_memory: 1024,
        page_size: 128,
        process_sizes: vec![700, 300, 200],
    };
    let report = run_paging(&input).unwrap();

    let rejected: Vec<_> = report
        .trace
        .iter()
        .filter(|event| event.payload.is_rejection())
        .collect();
    assert_eq!(rejected.len(), 1);
    assert_eq!(
        rejected[0].payload,
        Payload::ProcessRejected {
            pid: 2,
            size: 300,
            pages_needed: 3,
            frames_free: 2,
        }
    );

    // P3 still gets the two remaining frames after P2's rejection
    let p3_frames: Vec<usize> = report
        .trace
        .iter()
        .filter_map(|event| match event.payload {
            Payload::PageAssigned { pid: 3, frame, .. } => Some(frame),
            _ => None,
        })
        .collect();
    assert_eq!(p3_frames, vec![6, 7]);

    // All 8 frames granted; rejected P2 is absent from the baseline
    assert_eq!(
        report.fragmentation,
        Fragmentation::Internal(8 * 128 - (700 + 200))
    );
}

#[test]
fn test_layout_reports_every_frame_with_owner() {
    let input = PagingInput {
        total_memory: 512,
        page_size: 128,
        process_sizes: vec![130],
    };
    let report = run_paging(&input).unwrap();

    assert_eq!(report.layout.len(), 4);
    assert_eq!(report.layout[0].label.as_str(), "Frame 1");
    assert_eq!(report.layout[0].capacity, 128);
    assert!(report.layout[0].allocated);
    assert_eq!(report.layout[0].owner.as_ref().unwrap().as_str(), "P1");
    assert!(!report.layout[2].allocated);
    assert_eq!(report.layout[2].owner, None);
}

#[test]
fn test_exact_page_multiple_wastes_nothing() {
    let input = PagingInput {
        total_memory: 512,
        page_size: 128,
        process_sizes: vec![256, 128],
    };
    let report = run_paging(&input).unwrap();
    assert_eq!(report.fragmentation, Fragmentation::Internal(0));
}
