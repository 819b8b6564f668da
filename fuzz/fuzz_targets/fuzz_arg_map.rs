#![no_main]

use libfuzzer_sys::fuzz_target;
use optemplate::{render_all, ArgMap, GenerationRequest};

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // Parse errors are fine, panics are not
        if let Ok(arg_map) = ArgMap::parse(input) {
            let request = GenerationRequest::builder("Foo")
                .operators(optemplate::all_tokens())
                .arg_map(arg_map)
                .build();
            if let Ok(request) = request {
                let _ = render_all(&request);
            }
        }
    }
});
