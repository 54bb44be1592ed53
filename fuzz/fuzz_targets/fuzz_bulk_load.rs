#![no_main]
use file_catalog::{BulkLoader, FileCatalog};
use libfuzzer_sys::fuzz_target;
use std::io::Cursor;

// Arbitrary bytes as a source file: loading may fail on bad UTF-8 but must
// never panic, and whatever loads must be reachable from both indices
fuzz_target!(|data: &[u8]| {
    let mut catalog = FileCatalog::new();
    if BulkLoader::default()
        .load_reader(&mut catalog, Cursor::new(data))
        .is_err()
    {
        return;
    }

    for name in catalog.find_all_names() {
        for record in catalog.find_files_by_name(&name).unwrap() {
            let by_date = catalog
                .find_files_by_date(record.last_modified_date())
                .unwrap();
            assert!(by_date.contains(&record));
        }
    }
});
