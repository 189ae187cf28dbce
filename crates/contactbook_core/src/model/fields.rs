//! Scalar contact fields and their validators.
//!
//! # Responsibility
//! - Define one validated newtype per contact field.
//! - Own the constraint message for every field, shared by command parsing
//!   and persisted-record loading.
//!
//! # Invariants
//! - A field value can only be constructed through `FieldValue::parse`, so
//!   every instance has passed its validator.
//! - Input is trimmed before validation; nothing else is coerced.
//! - Absent input is reported as `FieldError::Missing`, never as `Invalid`.

use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Template used when a required field is absent.
pub const MISSING_FIELD_MESSAGE_FORMAT: &str = "Contact's {} field is missing!";

const GITHUB_MAX_CHARS: usize = 39;
const ASSIGNMENT_MAX_CHARS: usize = 50;
const SCORE_MAX: f64 = 100.0;

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 ]*$").expect("valid name regex"));
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{3,}$").expect("valid phone regex"));
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    let alnum = r"[A-Za-z0-9]+";
    let local = format!("{alnum}([+_.-]{alnum})*");
    let label = format!("{alnum}(-{alnum})*");
    let pattern = format!(r"^{local}@({label}\.)*({label}){{2,}}$");
    Regex::new(&pattern).expect("valid email regex")
});
static TELEGRAM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_]{5,32}$").expect("valid telegram regex"));
static GITHUB_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9]+(-[A-Za-z0-9]+)*$").expect("valid github regex"));
static ASSIGNMENT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 _-]*$").expect("valid assignment regex")
});
static SCORE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{1,3}(\.[0-9]{1,2})?$").expect("valid score regex"));

/// Semantic type of a contact field, used to name the field in errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Name,
    Phone,
    Email,
    Address,
    Telegram,
    Github,
    Tag,
    Assignment,
    Score,
}

impl FieldKind {
    /// Type name used in the missing-field message.
    pub fn type_name(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Phone => "Phone",
            Self::Email => "Email",
            Self::Address => "Address",
            Self::Telegram => "Telegram",
            Self::Github => "Github",
            Self::Tag => "Tag",
            Self::Assignment => "Assignment",
            Self::Score => "Score",
        }
    }
}

impl Display for FieldKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.type_name())
    }
}

/// Single-field validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// Value present but violates the field constraint.
    Invalid {
        field: FieldKind,
        message: &'static str,
    },
    /// Required value absent.
    Missing { field: FieldKind },
}

impl FieldError {
    pub fn invalid(field: FieldKind, message: &'static str) -> Self {
        Self::Invalid { field, message }
    }

    pub fn missing(field: FieldKind) -> Self {
        Self::Missing { field }
    }

    /// Field that failed.
    pub fn field(&self) -> FieldKind {
        match self {
            Self::Invalid { field, .. } | Self::Missing { field } => *field,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing { .. })
    }
}

impl Display for FieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invalid { message, .. } => f.write_str(message),
            Self::Missing { field } => write!(
                f,
                "{}",
                MISSING_FIELD_MESSAGE_FORMAT.replace("{}", field.type_name())
            ),
        }
    }
}

impl Error for FieldError {}

/// Validation capability shared by every scalar contact field.
pub trait FieldValue: Sized {
    /// Field identity reported in errors.
    const KIND: FieldKind;
    /// Constraint description reported when a present value is rejected.
    const MESSAGE_CONSTRAINTS: &'static str;

    /// Accepts an already-trimmed value, or returns `None` when it violates
    /// the constraint.
    fn accept(trimmed: &str) -> Option<Self>;

    /// Validates a present raw value.
    fn parse(raw: &str) -> Result<Self, FieldError> {
        Self::accept(raw.trim())
            .ok_or_else(|| FieldError::invalid(Self::KIND, Self::MESSAGE_CONSTRAINTS))
    }

    /// Validates an optional raw value that is required to be present.
    fn validate(raw: Option<&str>) -> Result<Self, FieldError> {
        match raw {
            Some(value) => Self::parse(value),
            None => Err(FieldError::missing(Self::KIND)),
        }
    }

    /// Validates an optional raw value that may legitimately be absent.
    fn validate_optional(raw: Option<&str>) -> Result<Option<Self>, FieldError> {
        raw.map(Self::parse).transpose()
    }
}

macro_rules! text_field {
    ($(#[$meta:meta])* $name:ident, $kind:expr, $message:expr, $check:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(String);

        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl FieldValue for $name {
            const KIND: FieldKind = $kind;
            const MESSAGE_CONSTRAINTS: &'static str = $message;

            fn accept(trimmed: &str) -> Option<Self> {
                let check: fn(&str) -> bool = $check;
                check(trimmed).then(|| Self(trimmed.to_string()))
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

text_field!(
    /// Contact display name; also the roster identity key.
    Name,
    FieldKind::Name,
    "Names should only contain alphanumeric characters and spaces, and it should not be blank",
    |value| NAME_RE.is_match(value)
);

text_field!(
    Phone,
    FieldKind::Phone,
    "Phone numbers should only contain numbers, and it should be at least 3 digits long",
    |value| PHONE_RE.is_match(value)
);

text_field!(
    Email,
    FieldKind::Email,
    "Emails should be of the format local-part@domain and adhere to the following constraints:\n\
     1. The local-part should only contain alphanumeric characters and these special characters, \
     excluding the parentheses, (+_.-). The local-part may not start or end with any special \
     characters.\n\
     2. This is followed by a '@' and then a domain name. The domain name is made up of domain \
     labels separated by periods.\n\
     The domain name must:\n    \
     - end with a domain label at least 2 characters long\n    \
     - have each domain label start and end with alphanumeric characters\n    \
     - have each domain label consist of alphanumeric characters, separated only by hyphens, if any.",
    |value| EMAIL_RE.is_match(value)
);

text_field!(
    Address,
    FieldKind::Address,
    "Addresses can take any values, and it should not be blank",
    |value| !value.is_empty()
);

text_field!(
    /// Messaging handle.
    Telegram,
    FieldKind::Telegram,
    "Telegram handles should be 5 to 32 characters long and only contain letters, digits and underscores",
    |value| TELEGRAM_RE.is_match(value)
);

text_field!(
    /// Code-hosting username.
    Github,
    FieldKind::Github,
    "GitHub usernames should only contain alphanumeric characters or single hyphens, \
     cannot begin or end with a hyphen, and be at most 39 characters long",
    |value| value.len() <= GITHUB_MAX_CHARS && GITHUB_RE.is_match(value)
);

text_field!(
    Assignment,
    FieldKind::Assignment,
    "Assignment names should start with an alphanumeric character, only contain alphanumeric \
     characters, spaces, hyphens and underscores, and be at most 50 characters long",
    |value| value.chars().count() <= ASSIGNMENT_MAX_CHARS && ASSIGNMENT_RE.is_match(value)
);

/// Numeric score in `0..=100` with at most two decimal places.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Score(f64);

impl Score {
    pub fn value(self) -> f64 {
        self.0
    }
}

impl FieldValue for Score {
    const KIND: FieldKind = FieldKind::Score;
    const MESSAGE_CONSTRAINTS: &'static str =
        "Scores should be a number from 0 to 100 with at most two decimal places";

    fn accept(trimmed: &str) -> Option<Self> {
        if !SCORE_RE.is_match(trimmed) {
            return None;
        }
        let value = trimmed.parse::<f64>().ok()?;
        (value <= SCORE_MAX).then_some(Self(value))
    }
}

impl Display for Score {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
