use crate::model::fields::FieldError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const MESSAGE_INVALID_COMMAND_FORMAT: &str = "Invalid command format! \n";
pub const MESSAGE_INVALID_INDEX: &str = "Index is not a non-zero unsigned integer.";
pub const MESSAGE_UNKNOWN_COMMAND: &str = "Unknown command";
pub const MESSAGE_NOT_EDITED: &str = "At least one field to edit must be provided.";
pub const MESSAGE_EMPTY_PATH: &str = "File path cannot be empty.";

pub type ParseResult<T> = Result<T, ParseError>;

/// Failure to turn command text into a validated command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Missing marker, duplicate marker or unexpected preamble.
    MalformedCommand { usage: &'static str },
    /// Marker present but its payload is empty.
    EmptyValue { message: &'static str },
    /// Preamble is present but is not a positive index.
    InvalidIndex,
    /// No builder is registered for the command word.
    UnknownCommand(String),
    /// Edit command names no field to change.
    NothingToEdit,
    /// A field value failed its validator.
    Field(FieldError),
}

impl ParseError {
    pub fn malformed(usage: &'static str) -> Self {
        Self::MalformedCommand { usage }
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedCommand { usage } => {
                write!(f, "{MESSAGE_INVALID_COMMAND_FORMAT}{usage}")
            }
            Self::EmptyValue { message } => f.write_str(message),
            Self::InvalidIndex => f.write_str(MESSAGE_INVALID_INDEX),
            Self::UnknownCommand(_) => f.write_str(MESSAGE_UNKNOWN_COMMAND),
            Self::NothingToEdit => f.write_str(MESSAGE_NOT_EDITED),
            Self::Field(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Field(err) => Some(err),
            _ => None,
        }
    }
}

impl From<FieldError> for ParseError {
    fn from(value: FieldError) -> Self {
        Self::Field(value)
    }
}
