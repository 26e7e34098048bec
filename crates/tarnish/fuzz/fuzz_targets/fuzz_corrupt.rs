//! Fuzz target for parsing and corrupting arbitrary CSV input.
//!
//! This fuzzer checks that:
//! 1. The parser never panics on malformed input
//! 2. The pipeline never panics and never changes the dataset shape
//! 3. Corrupted output can always be written back out

#![no_main]

use libfuzzer_sys::fuzz_target;
use tarnish::{CorruptionConfig, CorruptionPipeline, Parser, Writer};

fuzz_target!(|data: &[u8]| {
    // Only process reasonable-sized inputs to avoid OOM
    if data.len() > 100_000 {
        return;
    }

    let Ok(dataset) = Parser::new().parse_bytes(data) else {
        return;
    };

    let pipeline = CorruptionPipeline::with_config(CorruptionConfig::new().with_seed(0));
    let corrupted = pipeline.corrupt(&dataset);
    assert_eq!(corrupted.shape(), dataset.shape());

    let _ = Writer::new().write_string(&corrupted);
});
