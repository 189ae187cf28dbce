//! Per-command builders and the command-word lookup table.
//!
//! # Responsibility
//! - Tokenize the argument text with each command's declared markers.
//! - Run preamble/presence/duplicate checks, then field validators in a fixed
//!   order, short-circuiting on the first failure.
//!
//! # Invariants
//! - Structural violations report `MalformedCommand` with the usage string.
//! - Field violations report that field's own constraint message.
//! - An empty payload after a present marker is `EmptyValue`, never
//!   `MalformedCommand`.

use crate::command::{Command, CommandKind, ContactEdit};
use crate::model::contact::{Assessment, Contact};
use crate::model::fields::{
    Address, Assignment, Email, FieldValue, Github, Name, Phone, Score, Telegram,
};
use crate::model::tag::Tag;
use crate::parser::arguments::{
    has_empty_preamble, reject_duplicates, require_present, value_of, ParsedArguments,
};
use crate::parser::error::{ParseError, ParseResult, MESSAGE_EMPTY_PATH};
use crate::parser::syntax::{
    Marker, MARKER_ADDRESS, MARKER_ASSIGNMENT, MARKER_EMAIL, MARKER_GITHUB, MARKER_NAME,
    MARKER_PATH, MARKER_PHONE, MARKER_SCORE, MARKER_TAG, MARKER_TELEGRAM,
};
use crate::parser::tokenizer::tokenize;
use std::collections::BTreeSet;
use std::num::NonZeroUsize;
use std::path::PathBuf;

const CONTACT_MARKERS: [Marker; 7] = [
    MARKER_NAME,
    MARKER_PHONE,
    MARKER_EMAIL,
    MARKER_ADDRESS,
    MARKER_TELEGRAM,
    MARKER_GITHUB,
    MARKER_TAG,
];
const CONTACT_SINGULAR_MARKERS: [Marker; 6] = [
    MARKER_NAME,
    MARKER_PHONE,
    MARKER_EMAIL,
    MARKER_ADDRESS,
    MARKER_TELEGRAM,
    MARKER_GITHUB,
];
const GRADE_MARKERS: [Marker; 2] = [MARKER_ASSIGNMENT, MARKER_SCORE];
const PATH_MARKERS: [Marker; 1] = [MARKER_PATH];

type BuildFn = fn(&str) -> ParseResult<Command>;

/// One entry of the command-word lookup table.
struct CommandBuilder {
    kind: CommandKind,
    build: BuildFn,
}

static BUILDERS: [CommandBuilder; 13] = [
    CommandBuilder {
        kind: CommandKind::Add,
        build: build_add,
    },
    CommandBuilder {
        kind: CommandKind::Edit,
        build: build_edit,
    },
    CommandBuilder {
        kind: CommandKind::Delete,
        build: |args| Ok(Command::Delete {
            index: index_only(args, CommandKind::Delete)?,
        }),
    },
    CommandBuilder {
        kind: CommandKind::Find,
        build: build_find,
    },
    CommandBuilder {
        kind: CommandKind::List,
        build: |_| Ok(Command::List),
    },
    CommandBuilder {
        kind: CommandKind::Clear,
        build: |_| Ok(Command::Clear),
    },
    CommandBuilder {
        kind: CommandKind::Grade,
        build: build_grade,
    },
    CommandBuilder {
        kind: CommandKind::Ungrade,
        build: |args| Ok(Command::Ungrade {
            index: index_only(args, CommandKind::Ungrade)?,
        }),
    },
    CommandBuilder {
        kind: CommandKind::View,
        build: |args| Ok(Command::View {
            index: index_only(args, CommandKind::View)?,
        }),
    },
    CommandBuilder {
        kind: CommandKind::Import,
        build: |args| Ok(Command::Import {
            path: file_path(args, CommandKind::Import)?,
        }),
    },
    CommandBuilder {
        kind: CommandKind::Export,
        build: |args| Ok(Command::Export {
            path: file_path(args, CommandKind::Export)?,
        }),
    },
    CommandBuilder {
        kind: CommandKind::Help,
        build: |_| Ok(Command::Help),
    },
    CommandBuilder {
        kind: CommandKind::Exit,
        build: |_| Ok(Command::Exit),
    },
];

/// Parses one line of user input into a validated command.
pub fn parse_command(raw: &str) -> ParseResult<Command> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ParseError::malformed(CommandKind::Help.usage()));
    }

    let (word, args) = match trimmed.find(char::is_whitespace) {
        Some(split) => trimmed.split_at(split),
        None => (trimmed, ""),
    };

    let builder = BUILDERS
        .iter()
        .find(|builder| builder.kind.word() == word)
        .ok_or_else(|| ParseError::UnknownCommand(word.to_string()))?;
    (builder.build)(args)
}

/// Parses a one-based list index.
pub fn parse_index(raw: &str) -> ParseResult<NonZeroUsize> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(ParseError::InvalidIndex);
    }
    trimmed
        .parse::<NonZeroUsize>()
        .map_err(|_| ParseError::InvalidIndex)
}

fn build_add(args: &str) -> ParseResult<Command> {
    let usage = CommandKind::Add.usage();
    let parsed = tokenize(args, &CONTACT_MARKERS);
    if !has_empty_preamble(&parsed)
        || !require_present(&parsed, &CONTACT_SINGULAR_MARKERS)
        || !reject_duplicates(&parsed, &CONTACT_SINGULAR_MARKERS)
    {
        return Err(ParseError::malformed(usage));
    }

    let name = Name::validate(value_of(&parsed, MARKER_NAME))?;
    let phone = Phone::validate(value_of(&parsed, MARKER_PHONE))?;
    let email = Email::validate(value_of(&parsed, MARKER_EMAIL))?;
    let address = Address::validate(value_of(&parsed, MARKER_ADDRESS))?;
    let telegram = Telegram::validate(value_of(&parsed, MARKER_TELEGRAM))?;
    let github = Github::validate(value_of(&parsed, MARKER_GITHUB))?;
    let tags = Tag::validate_all(parsed.all_values(MARKER_TAG))?;

    Ok(Command::Add(Contact::new(
        name, phone, email, address, telegram, github, tags,
    )))
}

fn build_edit(args: &str) -> ParseResult<Command> {
    let usage = CommandKind::Edit.usage();
    let parsed = tokenize(args, &CONTACT_MARKERS);
    let index = preamble_index(&parsed, usage)?;
    if !reject_duplicates(&parsed, &CONTACT_SINGULAR_MARKERS) {
        return Err(ParseError::malformed(usage));
    }

    let edit = ContactEdit {
        name: Name::validate_optional(value_of(&parsed, MARKER_NAME))?,
        phone: Phone::validate_optional(value_of(&parsed, MARKER_PHONE))?,
        email: Email::validate_optional(value_of(&parsed, MARKER_EMAIL))?,
        address: Address::validate_optional(value_of(&parsed, MARKER_ADDRESS))?,
        telegram: Telegram::validate_optional(value_of(&parsed, MARKER_TELEGRAM))?,
        github: Github::validate_optional(value_of(&parsed, MARKER_GITHUB))?,
        tags: edited_tags(parsed.all_values(MARKER_TAG))?,
    };
    if !edit.is_any_field_edited() {
        return Err(ParseError::NothingToEdit);
    }

    Ok(Command::Edit { index, edit })
}

fn build_find(args: &str) -> ParseResult<Command> {
    let keywords: Vec<String> = args.split_whitespace().map(str::to_string).collect();
    if keywords.is_empty() {
        return Err(ParseError::malformed(CommandKind::Find.usage()));
    }
    Ok(Command::Find { keywords })
}

fn build_grade(args: &str) -> ParseResult<Command> {
    let usage = CommandKind::Grade.usage();
    let parsed = tokenize(args, &GRADE_MARKERS);
    let index = preamble_index(&parsed, usage)?;
    if !require_present(&parsed, &GRADE_MARKERS) || !reject_duplicates(&parsed, &GRADE_MARKERS) {
        return Err(ParseError::malformed(usage));
    }

    let assignment = Assignment::validate(value_of(&parsed, MARKER_ASSIGNMENT))?;
    let score = Score::validate(value_of(&parsed, MARKER_SCORE))?;
    Ok(Command::Grade {
        index,
        assessment: Assessment::new(assignment, score),
    })
}

fn index_only(args: &str, kind: CommandKind) -> ParseResult<NonZeroUsize> {
    preamble_index(&tokenize(args, &[]), kind.usage())
}

fn file_path(args: &str, kind: CommandKind) -> ParseResult<PathBuf> {
    let usage = kind.usage();
    let parsed = tokenize(args, &PATH_MARKERS);
    if !has_empty_preamble(&parsed)
        || !require_present(&parsed, &PATH_MARKERS)
        || !reject_duplicates(&parsed, &PATH_MARKERS)
    {
        return Err(ParseError::malformed(usage));
    }

    let path = value_of(&parsed, MARKER_PATH).unwrap_or_default().trim();
    if path.is_empty() {
        return Err(ParseError::EmptyValue {
            message: MESSAGE_EMPTY_PATH,
        });
    }
    Ok(PathBuf::from(path))
}

fn preamble_index(parsed: &ParsedArguments, usage: &'static str) -> ParseResult<NonZeroUsize> {
    if has_empty_preamble(parsed) {
        return Err(ParseError::malformed(usage));
    }
    parse_index(parsed.preamble())
}

/// `t/` given once with no text clears the tag set.
fn edited_tags(raw_tags: &[String]) -> ParseResult<Option<BTreeSet<Tag>>> {
    match raw_tags {
        [] => Ok(None),
        [only] if only.trim().is_empty() => Ok(Some(BTreeSet::new())),
        tags => Ok(Some(Tag::validate_all(tags)?)),
    }
}
