//! Fuzzes the walk engine with arbitrary byte buffers: scan, then walk both
//! strictly and as a stream. The engine must never panic, every accepted walk
//! must emit balanced events, and streaming walks must always make progress.
#![no_main]

use arbitrary::Arbitrary;
use jsonwalk::{scan, EventLog, StructuralIndex, StructuralValidator, WalkEvent, Walker};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    buf: &'a [u8],
    streaming: bool,
}

fn assert_balanced(events: &[WalkEvent]) {
    let mut depth = 0usize;
    for event in events {
        match event {
            WalkEvent::StartObject | WalkEvent::StartArray => depth += 1,
            WalkEvent::EndObject | WalkEvent::EndArray => {
                depth = depth.checked_sub(1).expect("close without open");
            }
            _ => {}
        }
    }
    assert_eq!(depth, 0, "unclosed containers in accepted walk");
}

fuzz_target!(|input: Input<'_>| {
    let offsets = scan(input.buf);
    let index = StructuralIndex::new(input.buf, &offsets);

    if input.streaming {
        let mut walker = Walker::streaming(index, 0);
        while !walker.at_end() {
            let before = walker.next_structural_index();
            let mut log = EventLog::new();
            let outcome = walker.walk_document(&mut log);
            if outcome.is_err() {
                break;
            }
            assert_balanced(log.events());
            assert!(walker.next_structural_index() > before, "no progress");
        }
    } else {
        let mut log = EventLog::new();
        if Walker::new(index).walk_document(&mut log).is_ok() {
            assert_balanced(log.events());
            let mut validator = StructuralValidator::with_max_depth(usize::MAX);
            Walker::new(index)
                .walk_document(&mut validator)
                .expect("validator disagrees with event log");
        }
    }
});
