use contactbook_core::storage::csv::{export_roster, import_roster};
use contactbook_core::{
    import_roster_file, load_roster, CatalogService, FieldValue, LoadError, MemoryRosterStore,
    Phone, TransferError,
};
use std::fs;

const HEADER: &str = "name,phone,email,address,telegram,github,tags,assignment,score";

fn write_csv(dir: &tempfile::TempDir, name: &str, body: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, body).unwrap();
    path
}

fn seeded_service() -> CatalogService<MemoryRosterStore> {
    let seed = br#"{"contacts": [{
        "name": "Carl Kurz",
        "phone": "95352563",
        "email": "heinz@example.com",
        "address": "wall street",
        "telegram": "carl_kurz",
        "tags": [],
        "github": "carlkurz"
    }]}"#;
    CatalogService::open(MemoryRosterStore::with_bytes(seed.to_vec())).unwrap()
}

#[test]
fn imports_valid_rows_with_quoted_cells() {
    let text = format!(
        "{HEADER}\n\
         Amy Bee,11111111,amy@example.com,\"Block 312, Amy Street 1\",amy_bee,amybee,friend;tutor,,\n\
         Bob Choo,22222222,bob@example.com,Block 123,bob_choo,bobchoo,,Lab 1,90\n"
    );
    let roster = import_roster(&text).unwrap();

    assert_eq!(roster.len(), 2);
    let amy = roster.get(0).unwrap();
    assert_eq!(amy.address.as_str(), "Block 312, Amy Street 1");
    assert_eq!(amy.tags.len(), 2);
    assert!(amy.assessment.is_none());
    let bob = roster.get(1).unwrap();
    assert!(bob.tags.is_empty());
    assert_eq!(bob.assessment.as_ref().unwrap().score.value(), 90.0);
}

#[test]
fn header_order_is_free() {
    let text = "github,name,telegram,phone,address,email\n\
                amybee,Amy Bee,amy_bee,11111111,Block 312,amy@example.com\n";
    let roster = import_roster(text).unwrap();
    assert_eq!(roster.get(0).unwrap().github.as_str(), "amybee");
}

#[test]
fn invalid_phone_rejects_file_with_phone_message() {
    let text = format!(
        "{HEADER}\n\
         Amy Bee,11111111,amy@example.com,Block 312,amy_bee,amybee,,,\n\
         Bob Choo,+651234,bob@example.com,Block 123,bob_choo,bobchoo,,,\n"
    );
    let err = import_roster(&text).unwrap_err();
    assert!(matches!(err, LoadError::Record { position: 1, .. }));
    assert_eq!(err.to_string(), Phone::MESSAGE_CONSTRAINTS);
}

#[test]
fn unknown_or_repeated_column_is_structural() {
    let unknown = "name,phone,nickname\nAmy,1234,amy\n";
    assert!(matches!(
        import_roster(unknown).unwrap_err(),
        LoadError::Structural(_)
    ));

    let repeated = "name,phone,name\nAmy,1234,Amy\n";
    assert!(matches!(
        import_roster(repeated).unwrap_err(),
        LoadError::Structural(_)
    ));
}

#[test]
fn missing_column_reports_missing_field() {
    let text = "name,phone,email,address,telegram\n\
                Amy Bee,11111111,amy@example.com,Block 312,amy_bee\n";
    let err = import_roster(text).unwrap_err();
    assert_eq!(err.to_string(), "Contact's Github field is missing!");
}

#[test]
fn exported_csv_imports_back_unchanged() {
    let seed = br#"{"contacts": [
        {"name": "Amy Bee", "phone": "11111111", "email": "amy@example.com",
         "address": "Block 312, \"Amy\" Street 1", "telegram": "amy_bee",
         "tags": ["friend", "tutor"], "github": "amybee",
         "assignment": "Lab 1", "score": 88.5},
        {"name": "Bob Choo", "phone": "22222222", "email": "bob@example.com",
         "address": "Block 123", "telegram": "bob_choo", "tags": [], "github": "bobchoo"}
    ]}"#;
    let roster = load_roster(seed).unwrap();
    assert_eq!(import_roster(&export_roster(&roster)).unwrap(), roster);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = import_roster_file(&dir.path().join("absent.csv")).unwrap_err();
    assert!(matches!(err, TransferError::Io { .. }));
    assert!(err.load_error().is_none());
}

#[test]
fn failed_import_command_keeps_current_roster() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(
        &dir,
        "bad.csv",
        &format!("{HEADER}\nBob Choo,+651234,bob@example.com,Block 123,bob_choo,bobchoo,,,\n"),
    );
    let mut service = seeded_service();
    let before = service.roster().clone();

    let outcome = service.run(&format!("import f/{}", path.display()));

    assert!(!outcome.ok);
    assert!(outcome.message.contains(Phone::MESSAGE_CONSTRAINTS));
    assert!(outcome.message.contains("row 1"));
    assert_eq!(service.roster(), &before);
}

#[test]
fn import_command_replaces_roster_and_persists() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(
        &dir,
        "good.csv",
        &format!("{HEADER}\nAmy Bee,11111111,amy@example.com,Block 312,amy_bee,amybee,,,\n"),
    );
    let mut service = seeded_service();

    let outcome = service.run(&format!("import f/{}", path.display()));

    assert!(outcome.ok, "{}", outcome.message);
    assert_eq!(service.roster().len(), 1);
    assert_eq!(service.roster().get(0).unwrap().name.as_str(), "Amy Bee");
    let stored = load_roster(service.store().bytes().unwrap()).unwrap();
    assert_eq!(&stored, service.roster());
}

#[test]
fn export_command_writes_file_into_new_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("exports").join("contacts.csv");
    let mut service = seeded_service();

    let outcome = service.run(&format!("export f/{}", path.display()));

    assert!(outcome.ok, "{}", outcome.message);
    let roster = import_roster_file(&path).unwrap();
    assert_eq!(&roster, service.roster());
}

#[test]
fn leading_byte_order_mark_is_ignored() {
    let text = format!(
        "\u{feff}{HEADER}\nAmy Bee,11111111,amy@example.com,Block 312,amy_bee,amybee,,,\n"
    );
    let roster = import_roster(&text).unwrap();
    assert_eq!(roster.get(0).unwrap().name.as_str(), "Amy Bee");

    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, "excel.csv", &text);
    assert_eq!(import_roster_file(&path).unwrap(), roster);
}
