use contactbook_core::{
    parse_command, Command, CommandKind, Email, FieldError, FieldKind, FieldValue, Name,
    ParseError, Phone, Score, Tag,
};
use std::path::PathBuf;

const VALID_ADD: &str = "add n/Amy Bee p/11111111 e/amy@example.com a/Block 312, Amy Street 1 \
                         tele/amy_bee g/amybee t/friend";

fn malformed(kind: CommandKind) -> ParseError {
    ParseError::MalformedCommand {
        usage: kind.usage(),
    }
}

#[test]
fn add_with_all_fields_builds_contact() {
    let Command::Add(contact) = parse_command(VALID_ADD).unwrap() else {
        panic!("expected add command");
    };
    assert_eq!(contact.name.as_str(), "Amy Bee");
    assert_eq!(contact.phone.as_str(), "11111111");
    assert_eq!(contact.address.as_str(), "Block 312, Amy Street 1");
    assert_eq!(contact.telegram.as_str(), "amy_bee");
    assert_eq!(contact.github.as_str(), "amybee");
    assert_eq!(contact.tags.len(), 1);
    assert!(contact.assessment.is_none());
}

#[test]
fn add_collects_repeated_tags() {
    let input = format!("{VALID_ADD} t/Colleague t/FRIEND");
    let Command::Add(contact) = parse_command(&input).unwrap() else {
        panic!("expected add command");
    };
    let tags: Vec<&str> = contact.tags.iter().map(Tag::as_str).collect();
    assert_eq!(tags, vec!["colleague", "friend"]);
}

#[test]
fn add_missing_marker_is_malformed() {
    let input = "add n/Amy Bee p/11111111 e/amy@example.com a/Block 312 tele/amy_bee";
    assert_eq!(parse_command(input).unwrap_err(), malformed(CommandKind::Add));
}

#[test]
fn add_with_preamble_is_malformed() {
    let input = VALID_ADD.replacen("add ", "add some preamble ", 1);
    assert_eq!(parse_command(&input).unwrap_err(), malformed(CommandKind::Add));
}

#[test]
fn add_duplicate_singular_marker_is_malformed_in_any_order() {
    for input in [
        format!("{VALID_ADD} p/22222222"),
        VALID_ADD.replacen("add ", "add p/22222222 ", 1),
    ] {
        assert_eq!(
            parse_command(&input).unwrap_err(),
            malformed(CommandKind::Add),
            "input: {input}"
        );
    }
}

#[test]
fn malformed_message_includes_usage() {
    let err = parse_command("add n/Amy").unwrap_err();
    let message = err.to_string();
    assert!(message.starts_with("Invalid command format! \n"));
    assert!(message.ends_with(CommandKind::Add.usage()));
}

#[test]
fn add_reports_field_specific_constraint() {
    let input = VALID_ADD.replace("p/11111111", "p/+651234");
    assert_eq!(
        parse_command(&input).unwrap_err(),
        ParseError::Field(FieldError::Invalid {
            field: FieldKind::Phone,
            message: Phone::MESSAGE_CONSTRAINTS,
        })
    );

    let input = VALID_ADD.replace("e/amy@example.com", "e/amy");
    let err = parse_command(&input).unwrap_err();
    assert_eq!(err.to_string(), Email::MESSAGE_CONSTRAINTS);
}

#[test]
fn add_validates_fields_in_fixed_order() {
    let input = VALID_ADD
        .replace("n/Amy Bee", "n/Amy*")
        .replace("p/11111111", "p/1");
    let err = parse_command(&input).unwrap_err();
    assert_eq!(err.to_string(), Name::MESSAGE_CONSTRAINTS);
}

#[test]
fn add_with_empty_required_value_reports_constraint() {
    let input = VALID_ADD.replace("n/Amy Bee", "n/");
    let err = parse_command(&input).unwrap_err();
    assert_eq!(err.to_string(), Name::MESSAGE_CONSTRAINTS);
}

#[test]
fn import_with_path_builds_command() {
    assert_eq!(
        parse_command("import f/data/contacts.csv").unwrap(),
        Command::Import {
            path: PathBuf::from("data/contacts.csv"),
        }
    );
}

#[test]
fn import_with_empty_path_differs_from_missing_marker() {
    let empty = parse_command("import f/").unwrap_err();
    assert_eq!(empty.to_string(), "File path cannot be empty.");
    assert!(matches!(empty, ParseError::EmptyValue { .. }));

    let empty_spaces = parse_command("import f/   ").unwrap_err();
    assert_eq!(empty_spaces, empty);

    let missing = parse_command("import").unwrap_err();
    assert_eq!(missing, malformed(CommandKind::Import));
    assert_ne!(missing.to_string(), empty.to_string());
}

#[test]
fn import_rejects_preamble_and_duplicate_paths() {
    assert_eq!(
        parse_command("import contacts.csv f/a.csv").unwrap_err(),
        malformed(CommandKind::Import)
    );
    assert_eq!(
        parse_command("import f/a.csv f/b.csv").unwrap_err(),
        malformed(CommandKind::Import)
    );
}

#[test]
fn export_shares_path_rules() {
    assert_eq!(
        parse_command("export f/out.csv").unwrap(),
        Command::Export {
            path: PathBuf::from("out.csv"),
        }
    );
    assert!(matches!(
        parse_command("export f/").unwrap_err(),
        ParseError::EmptyValue { .. }
    ));
}

#[test]
fn edit_requires_index_and_a_field() {
    assert_eq!(
        parse_command("edit n/Bob").unwrap_err(),
        malformed(CommandKind::Edit)
    );
    assert_eq!(
        parse_command("edit 0 n/Bob").unwrap_err(),
        ParseError::InvalidIndex
    );
    assert_eq!(parse_command("edit 1").unwrap_err(), ParseError::NothingToEdit);
}

#[test]
fn edit_with_fields_builds_partial_edit() {
    let Command::Edit { index, edit } = parse_command("edit 2 p/91234567 e/bob@example.com").unwrap()
    else {
        panic!("expected edit command");
    };
    assert_eq!(index.get(), 2);
    assert_eq!(edit.phone.unwrap().as_str(), "91234567");
    assert_eq!(edit.email.unwrap().as_str(), "bob@example.com");
    assert!(edit.name.is_none());
    assert!(edit.tags.is_none());
}

#[test]
fn edit_with_bare_tag_marker_clears_tags() {
    let Command::Edit { edit, .. } = parse_command("edit 1 t/").unwrap() else {
        panic!("expected edit command");
    };
    assert_eq!(edit.tags, Some(Default::default()));
}

#[test]
fn edit_rejects_duplicate_singular_marker() {
    assert_eq!(
        parse_command("edit 1 n/Amy n/Bob").unwrap_err(),
        malformed(CommandKind::Edit)
    );
}

#[test]
fn grade_requires_both_markers() {
    let Command::Grade { index, assessment } = parse_command("grade 1 as/Lab 1 s/85.5").unwrap()
    else {
        panic!("expected grade command");
    };
    assert_eq!(index.get(), 1);
    assert_eq!(assessment.assignment.as_str(), "Lab 1");
    assert_eq!(assessment.score.value(), 85.5);

    assert_eq!(
        parse_command("grade 1 s/85").unwrap_err(),
        malformed(CommandKind::Grade)
    );
    assert_eq!(
        parse_command("grade 1 as/Lab 1").unwrap_err(),
        malformed(CommandKind::Grade)
    );
}

#[test]
fn grade_rejects_out_of_range_score() {
    let err = parse_command("grade 1 as/Lab 1 s/120").unwrap_err();
    assert_eq!(err.to_string(), Score::MESSAGE_CONSTRAINTS);
}

#[test]
fn index_commands_parse_positive_indexes() {
    assert!(matches!(
        parse_command("delete 3").unwrap(),
        Command::Delete { index } if index.get() == 3
    ));
    assert!(matches!(
        parse_command("view 1").unwrap(),
        Command::View { .. }
    ));
    assert!(matches!(
        parse_command("ungrade 1").unwrap(),
        Command::Ungrade { .. }
    ));
    assert_eq!(
        parse_command("delete").unwrap_err(),
        malformed(CommandKind::Delete)
    );
    assert_eq!(
        parse_command("delete abc").unwrap_err(),
        ParseError::InvalidIndex
    );
}

#[test]
fn find_requires_keywords() {
    assert_eq!(
        parse_command("find  alice   bob ").unwrap(),
        Command::Find {
            keywords: vec!["alice".to_string(), "bob".to_string()],
        }
    );
    assert_eq!(
        parse_command("find").unwrap_err(),
        malformed(CommandKind::Find)
    );
}

#[test]
fn command_words_are_case_sensitive() {
    assert!(matches!(
        parse_command("LIST").unwrap_err(),
        ParseError::UnknownCommand(_)
    ));
}
