//! End-to-end catalog scenarios through the public API

use file_catalog::{BulkLoader, CatalogError, FileCatalog, FileRecord, HashTable};
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

/// Helper to build the four-file catalog used across scenarios
fn sample_catalog() -> FileCatalog {
    let mut catalog = FileCatalog::new();
    catalog.add("mySample.txt", "/home", "02/01/2021").unwrap();
    catalog.add("notes.txt", "/tmp", "02/01/2021").unwrap();
    catalog.add("project.pdf", "/a", "03/03/2021").unwrap();
    catalog.add("project.pdf", "/b", "03/03/2021").unwrap();
    catalog
}

#[test]
fn test_end_to_end_queries() {
    let catalog = sample_catalog();

    assert_eq!(catalog.find_files_by_date("02/01/2021").unwrap().len(), 2);
    assert_eq!(catalog.find_files_by_name("project.pdf").unwrap().len(), 2);

    let multi = catalog
        .find_files_in_multiple_directories("03/03/2021")
        .unwrap();
    assert_eq!(multi.len(), 2);
    let mut dirs: Vec<&str> = multi.iter().map(|r| r.directory()).collect();
    dirs.sort();
    assert_eq!(dirs, vec!["/a", "/b"]);
    assert!(multi.iter().all(|r| r.name() == "project.pdf"));

    // Different names on one date are not "multiple directories"
    assert!(catalog
        .find_files_in_multiple_directories("02/01/2021")
        .unwrap()
        .is_empty());
}

#[test]
fn test_same_file_different_date_rejected() {
    let mut catalog = FileCatalog::new();
    assert!(catalog.add("a", "/d", "d1").unwrap());
    assert!(!catalog.add("a", "/d", "d2").unwrap());

    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.find_files_by_name("a").unwrap().len(), 1);
    assert_eq!(catalog.find_files_by_date("d1").unwrap().len(), 1);
    assert!(catalog.find_files_by_date("d2").unwrap().is_empty());
}

#[test]
fn test_remove_file_prunes_name_and_date() {
    let mut catalog = FileCatalog::new();
    catalog.add("x", "/d", "01/01/2021").unwrap();

    assert!(catalog.remove_file("x", "/d").unwrap());

    assert!(!catalog.find_all_names().contains(&"x".to_string()));
    assert!(catalog.find_files_by_date("01/01/2021").unwrap().is_empty());
    assert!(!catalog.remove_file("x", "/d").unwrap());
}

#[test]
fn test_query_results_are_detached() {
    let mut catalog = sample_catalog();

    let mut by_name = catalog.find_files_by_name("project.pdf").unwrap();
    by_name.pop();
    by_name.push(FileRecord::new("project.pdf", "/c", "03/03/2021"));

    assert_eq!(catalog.find_files_by_name("project.pdf").unwrap().len(), 2);
    assert!(catalog.find_file("project.pdf", "/c").unwrap().is_none());

    // And later catalog changes do not reach an earlier result
    let snapshot = catalog.find_files_by_date("03/03/2021").unwrap();
    catalog.remove_by_name("project.pdf").unwrap();
    assert_eq!(snapshot.len(), 2);
}

#[test]
fn test_display_template() {
    let catalog = sample_catalog();
    let record = catalog.find_file("notes.txt", "/tmp").unwrap().unwrap();
    assert_eq!(
        record.to_string(),
        "{Name: notes.txt, Directory: /tmp, Modified Date: 02/01/2021}"
    );
}

#[test]
fn test_bulk_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "mySample.txt, /home, 02/01/2021").unwrap();
    writeln!(file, "notes.txt, /tmp, 02/01/2021").unwrap();
    writeln!(file, "project.pdf, /a, 03/03/2021").unwrap();
    writeln!(file, "project.pdf, /b, 03/03/2021").unwrap();
    file.flush().unwrap();

    let catalog = FileCatalog::from_source(file.path());
    assert_eq!(catalog.len(), 4);
    assert_eq!(catalog.find_files_by_date("02/01/2021").unwrap().len(), 2);
    assert_eq!(
        catalog
            .find_files_in_multiple_directories("03/03/2021")
            .unwrap()
            .len(),
        2
    );
}

#[test]
fn test_bulk_load_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("input.txt");

    // Constructor form: not fatal, catalog starts empty
    let catalog = FileCatalog::from_source(&missing);
    assert!(catalog.is_empty());

    // Loader form: the I/O failure is reported to the caller
    let mut catalog = FileCatalog::new();
    let result = BulkLoader::default().load_path(&mut catalog, &missing);
    assert!(matches!(result, Err(CatalogError::Io(_))));
    assert!(catalog.is_empty());
}

#[test]
fn test_absent_table_key_is_an_error_not_a_miss() {
    let mut table: HashTable<Option<&str>, u32> = HashTable::new();
    table.insert(Some("present"), 1).unwrap();

    let missing: Option<&str> = Some("missing");
    let absent: Option<&str> = None;

    assert_eq!(table.get(&missing).unwrap(), None);
    assert!(!table.remove(&missing).unwrap());
    assert!(matches!(table.get(&absent), Err(CatalogError::InvalidKey)));
    assert!(matches!(table.remove(&absent), Err(CatalogError::InvalidKey)));
    assert_eq!(table.len(), 1);
}
