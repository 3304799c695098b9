//! Fuzz target for loading and rendering.
//!
//! Arbitrary bytes must either fail to load with an error or produce a report
//! whose counts agree with each other, never a panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use datadesc::Describer;
use std::io::Write;

fuzz_target!(|data: &[u8]| {
    // Only process reasonable-sized inputs to avoid OOM
    if data.len() > 100_000 {
        return;
    }

    if let Ok(mut temp_file) = tempfile::NamedTempFile::new() {
        if temp_file.write_all(data).is_ok() {
            if let Ok(describer) = Describer::open(temp_file.path()) {
                let rendered = describer.render();
                assert!(rendered.contains(&format!(
                    "Number of Instances: {}",
                    describer.instance_count()
                )));
            }
        }
    }
});
