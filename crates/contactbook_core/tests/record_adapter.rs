use contactbook_core::{
    Address, Assessment, Assignment, Contact, Email, FieldError, FieldKind, FieldValue, Github,
    Name, Phone, RawContactRecord, RawScore, Score, Tag, Telegram, MESSAGE_ASSESSMENT_PAIR,
};

const INVALID_NAME: &str = "R@chel";
const INVALID_PHONE: &str = "+651234";
const INVALID_ADDRESS: &str = " ";
const INVALID_EMAIL: &str = "example.com";
const INVALID_TELEGRAM: &str = " ";
const INVALID_TAG: &str = "#friend";
const INVALID_GITHUB: &str = "James123-;?";

fn benson() -> Contact {
    Contact::new(
        Name::parse("Benson Meier").unwrap(),
        Phone::parse("98765432").unwrap(),
        Email::parse("johnd@example.com").unwrap(),
        Address::parse("311, Clementi Ave 2, #02-25").unwrap(),
        Telegram::parse("benson_meier").unwrap(),
        Github::parse("benson-meier").unwrap(),
        Tag::validate_all(["owesMoney", "friends"]).unwrap(),
    )
}

fn graded_benson() -> Contact {
    benson().with_assessment(Some(Assessment::new(
        Assignment::parse("Lab 1").unwrap(),
        Score::parse("85.5").unwrap(),
    )))
}

fn valid_record() -> RawContactRecord {
    RawContactRecord::from_contact(&graded_benson())
}

fn assert_invalid(record: &RawContactRecord, field: FieldKind, message: &str) {
    let err = record.to_contact().unwrap_err();
    assert_eq!(err.field(), field);
    assert!(!err.is_missing(), "expected constraint error, got {err:?}");
    assert_eq!(err.to_string(), message);
}

fn assert_missing(record: &RawContactRecord, field: FieldKind) {
    let err = record.to_contact().unwrap_err();
    assert_eq!(err, FieldError::Missing { field });
    assert_eq!(
        err.to_string(),
        format!("Contact's {} field is missing!", field.type_name())
    );
}

#[test]
fn valid_record_returns_contact() {
    let contact = graded_benson();
    let record = RawContactRecord::from_contact(&contact);
    assert_eq!(record.to_contact().unwrap(), contact);
}

#[test]
fn round_trip_preserves_contact_without_assessment() {
    let contact = benson();
    let record = RawContactRecord::from_contact(&contact);
    assert_eq!(record.assignment, None);
    assert_eq!(record.score, None);
    assert_eq!(record.to_contact().unwrap(), contact);
}

#[test]
fn round_trip_survives_json_serialization() {
    for contact in [benson(), graded_benson()] {
        let json = serde_json::to_string(&RawContactRecord::from_contact(&contact)).unwrap();
        let decoded: RawContactRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.to_contact().unwrap(), contact);
    }
}

#[test]
fn invalid_name_reports_name_constraint() {
    let mut record = valid_record();
    record.name = Some(INVALID_NAME.to_string());
    assert_invalid(&record, FieldKind::Name, Name::MESSAGE_CONSTRAINTS);
}

#[test]
fn null_name_reports_missing_name() {
    let mut record = valid_record();
    record.name = None;
    assert_missing(&record, FieldKind::Name);
}

#[test]
fn invalid_phone_reports_phone_constraint() {
    let mut record = valid_record();
    record.phone = Some(INVALID_PHONE.to_string());
    assert_invalid(&record, FieldKind::Phone, Phone::MESSAGE_CONSTRAINTS);
}

#[test]
fn null_phone_reports_missing_phone() {
    let mut record = valid_record();
    record.phone = None;
    assert_missing(&record, FieldKind::Phone);
}

#[test]
fn empty_phone_is_invalid_not_missing() {
    let mut record = valid_record();
    record.phone = Some(String::new());
    assert_invalid(&record, FieldKind::Phone, Phone::MESSAGE_CONSTRAINTS);
}

#[test]
fn invalid_email_reports_email_constraint() {
    let mut record = valid_record();
    record.email = Some(INVALID_EMAIL.to_string());
    assert_invalid(&record, FieldKind::Email, Email::MESSAGE_CONSTRAINTS);
}

#[test]
fn null_email_reports_missing_email() {
    let mut record = valid_record();
    record.email = None;
    assert_missing(&record, FieldKind::Email);
}

#[test]
fn invalid_address_reports_address_constraint() {
    let mut record = valid_record();
    record.address = Some(INVALID_ADDRESS.to_string());
    assert_invalid(&record, FieldKind::Address, Address::MESSAGE_CONSTRAINTS);
}

#[test]
fn null_address_reports_missing_address() {
    let mut record = valid_record();
    record.address = None;
    assert_missing(&record, FieldKind::Address);
}

#[test]
fn invalid_telegram_reports_telegram_constraint() {
    let mut record = valid_record();
    record.telegram = Some(INVALID_TELEGRAM.to_string());
    assert_invalid(&record, FieldKind::Telegram, Telegram::MESSAGE_CONSTRAINTS);
}

#[test]
fn null_telegram_reports_missing_telegram() {
    let mut record = valid_record();
    record.telegram = None;
    assert_missing(&record, FieldKind::Telegram);
}

#[test]
fn invalid_github_reports_github_constraint() {
    let mut record = valid_record();
    record.github = Some(INVALID_GITHUB.to_string());
    assert_invalid(&record, FieldKind::Github, Github::MESSAGE_CONSTRAINTS);
}

#[test]
fn null_github_reports_missing_github() {
    let mut record = valid_record();
    record.github = None;
    assert_missing(&record, FieldKind::Github);
}

#[test]
fn one_invalid_tag_among_valid_ones_fails_the_record() {
    let mut record = valid_record();
    record.tags = vec![
        "friends".to_string(),
        "colleagues".to_string(),
        INVALID_TAG.to_string(),
        "neighbours".to_string(),
        "cs2103".to_string(),
        "family".to_string(),
    ];
    assert_invalid(&record, FieldKind::Tag, Tag::MESSAGE_CONSTRAINTS);
}

#[test]
fn score_without_assignment_fails_co_presence() {
    let mut record = valid_record();
    record.assignment = None;
    assert_invalid(&record, FieldKind::Assignment, MESSAGE_ASSESSMENT_PAIR);
}

#[test]
fn assignment_without_score_fails_co_presence() {
    let mut record = valid_record();
    record.score = None;
    assert_invalid(&record, FieldKind::Score, MESSAGE_ASSESSMENT_PAIR);
}

#[test]
fn out_of_range_score_reports_score_constraint() {
    let mut record = valid_record();
    record.score = Some(RawScore::Number(serde_json::Number::from_f64(100.5).unwrap()));
    assert_invalid(&record, FieldKind::Score, Score::MESSAGE_CONSTRAINTS);
}

#[test]
fn invalid_assignment_reports_assignment_constraint() {
    let mut record = valid_record();
    record.assignment = Some("#lab".to_string());
    assert_invalid(&record, FieldKind::Assignment, Assignment::MESSAGE_CONSTRAINTS);
}

#[test]
fn missing_tags_key_means_no_tags() {
    let value = serde_json::json!({
        "name": "Amy Bee",
        "phone": "11111111",
        "email": "amy@example.com",
        "address": "Block 312, Amy Street 1",
        "telegram": "amy_bee",
        "github": "amybee"
    });
    let record: RawContactRecord = serde_json::from_value(value).unwrap();
    let contact = record.to_contact().unwrap();
    assert!(contact.tags.is_empty());
    assert!(contact.assessment.is_none());
}
