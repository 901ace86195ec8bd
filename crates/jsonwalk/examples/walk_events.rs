//! Walks a JSON document and prints every semantic event the engine emits.
//!
//! The two-stage flow is visible end to end: the reference scanner stands in
//! for a SIMD stage 1 and produces the structural index, then the walker
//! drives an [`EventLog`] through the document. Pass a document as the first
//! argument, or a stream of concatenated documents with `--stream`.
//!
//! Run with
//!
//! ```bash
//! cargo run -p jsonwalk --example walk_events -- '{"a":[1,2]}'
//! cargo run -p jsonwalk --example walk_events -- --stream '{"a":1} [2,3] 42'
//! ```

use jsonwalk::{scan, EventLog, StructuralIndex, Walker};

fn main() {
    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let streaming = args.first().map(String::as_str) == Some("--stream");
    if streaming {
        args.remove(0);
    }
    let input = args
        .first()
        .cloned()
        .unwrap_or_else(|| r#"{"id":7,"tags":["a","b"],"nested":{"empty":[]}}"#.to_string());

    let buf = input.as_bytes();
    let offsets = scan(buf);
    let index = StructuralIndex::new(buf, &offsets);
    println!("{} bytes, {} structurals", buf.len(), offsets.len());

    let mut walker = if streaming {
        Walker::streaming(index, 0)
    } else {
        Walker::new(index)
    };

    let mut document = 0;
    loop {
        let mut log = EventLog::new();
        let outcome = walker.walk_document(&mut log);
        document += 1;

        println!("--- document {document} ---");
        for event in log.events() {
            println!("{event:?}");
        }
        match outcome {
            Ok(()) => {}
            Err(err) => {
                eprintln!("error: {err}");
                std::process::exit(1);
            }
        }
        if !streaming || walker.at_end() {
            break;
        }
    }
}
