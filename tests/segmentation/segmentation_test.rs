/*!
 * Segmentation Tests
 * Base computation, first-fit placement, per-name independence
 */

use memsim::{
    run_segmentation, Fragmentation, Payload, SegmentName, SegmentPool, SegmentRequest,
    SegmentationInput,
};
use pretty_assertions::assert_eq;

fn request(name: &str, size: usize) -> SegmentRequest {
    SegmentRequest {
        name: SegmentName::from(name),
        size,
    }
}

#[test]
fn test_initial_bases_follow_input_order() {
    let pool = SegmentPool::new(&[100, 500, 200]);
    let bases: Vec<usize> = pool.regions().iter().map(|r| r.base).collect();
    assert_eq!(bases, vec![0, 100, 600]);
}

#[test]
fn test_split_leaves_fragment_at_granted_end() {
    let input = SegmentationInput {
        segment_sizes: vec![100, 500, 200],
        requests: vec![request("Stack", 80)],
    };
    let report = run_segmentation(&input).unwrap();

    assert_eq!(
        report.trace[0].payload,
        Payload::SegmentPlaced {
            name: SegmentName::from("Stack"),
            size: 80,
            base: 0,
            fragment: Some(20),
        }
    );

    let fragment = &report.layout[1];
    assert_eq!(fragment.label.as_str(), "Fragment");
    assert_eq!(fragment.capacity, 20);
    assert_eq!(fragment.base, Some(80));
    assert!(!fragment.allocated);
}

#[test]
fn test_rejection_reports_no_base_and_continues() {
    let input = SegmentationInput {
        segment_sizes: vec![100, 200],
        requests: vec![request("Heap", 900), request("Code", 150)],
    };
    let report = run_segmentation(&input).unwrap();

    assert_eq!(
        report.trace[0].payload,
        Payload::SegmentRejected {
            name: SegmentName::from("Heap"),
            size: 900,
        }
    );
    // The rejected request did not consume the segment Code needs
    assert_eq!(
        report.trace[1].payload,
        Payload::SegmentPlaced {
            name: SegmentName::from("Code"),
            size: 150,
            base: 100,
            fragment: Some(50),
        }
    );
}

#[test]
fn test_requests_process_in_given_order() {
    // Same name twice: each claim is independent and ordered
    let input = SegmentationInput {
        segment_sizes: vec![300, 300],
        requests: vec![request("Data", 300), request("Data", 300)],
    };
    let report = run_segmentation(&input).unwrap();

    let bases: Vec<usize> = report
        .trace
        .iter()
        .map(|event| match event.payload {
            Payload::SegmentPlaced { base, .. } => base,
            ref other => panic!("unexpected event: {other:?}"),
        })
        .collect();
    assert_eq!(bases, vec![0, 300]);
}

#[test]
fn test_layout_carries_owner_names_and_fragmentation() {
    let input = SegmentationInput {
        segment_sizes: vec![100, 500, 200],
        requests: vec![request("Stack", 80), request("Heap", 450)],
    };
    let report = run_segmentation(&input).unwrap();

    assert_eq!(
        report.layout[0].owner.as_ref().unwrap().as_str(),
        "Stack"
    );
    assert_eq!(report.layout[2].owner.as_ref().unwrap().as_str(), "Heap");

    // Free: 20 (Stack fragment) + 50 (Heap fragment) + 200 (untouched)
    assert_eq!(report.fragmentation, Fragmentation::External(270));
}
