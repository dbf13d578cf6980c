#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let encoded = docsearch::query::encode_key(data);
    assert_eq!(docsearch::query::decode_key(&encoded), data.to_lowercase());
});
