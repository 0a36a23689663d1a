#![no_main]

use libfuzzer_sys::fuzz_target;
use transform_lab_engine::{parse_projects, serialize_projects};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    // Erfolgreich gelesene Sammlungen müssen sich wieder schreiben lassen
    if let Ok(projects) = parse_projects(text) {
        let _ = serialize_projects(&projects);
    }
});
