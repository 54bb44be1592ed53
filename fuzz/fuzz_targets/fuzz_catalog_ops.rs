#![no_main]
use arbitrary::Arbitrary;
use file_catalog::FileCatalog;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum Op {
    Add { name: u8, dir: u8, date: u8 },
    RemoveFile { name: u8, dir: u8 },
    RemoveByName { name: u8 },
}

fuzz_target!(|ops: Vec<Op>| {
    let mut catalog = FileCatalog::new();

    for op in ops {
        match op {
            Op::Add { name, dir, date } => {
                let _ = catalog.add(
                    &format!("n{}", name % 8),
                    &format!("/d{}", dir % 4),
                    &format!("t{}", date % 4),
                );
            }
            Op::RemoveFile { name, dir } => {
                let _ = catalog.remove_file(&format!("n{}", name % 8), &format!("/d{}", dir % 4));
            }
            Op::RemoveByName { name } => {
                let _ = catalog.remove_by_name(&format!("n{}", name % 8));
            }
        }

        // No key may survive with an empty list
        let by_name: usize = catalog
            .find_all_names()
            .iter()
            .map(|n| catalog.find_files_by_name(n).unwrap().len())
            .sum();
        let by_date: usize = catalog
            .find_all_dates()
            .iter()
            .map(|d| catalog.find_files_by_date(d).unwrap().len())
            .sum();
        assert_eq!(by_name, catalog.len());
        assert_eq!(by_date, catalog.len());
        assert!(catalog.find_all_names().len() <= catalog.len());
        assert!(catalog.find_all_dates().len() <= catalog.len());
    }
});
