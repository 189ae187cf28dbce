//! Raw persisted contact record and its adapter to the domain model.
//!
//! # Responsibility
//! - Mirror the on-disk contact shape with every field optional.
//! - Convert `Contact` to a record (total) and back (validated).
//!
//! # Invariants
//! - `to_contact` uses the same validators as command parsing.
//! - Fields are validated in a fixed order and the first failure is reported.
//! - A single invalid tag fails the whole record.
//! - `to_contact(from_contact(c)) == c` for every contact `c`.

use crate::model::contact::{Assessment, Contact};
use crate::model::fields::{
    Address, Email, FieldError, FieldValue, Github, Name, Phone, Telegram,
};
use crate::model::tag::Tag;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};

/// Score as found in storage. Numbers keep their literal JSON text so the
/// score validator sees exactly what was written.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RawScore {
    Number(Number),
    Text(String),
}

impl RawScore {
    fn as_text(&self) -> String {
        match self {
            Self::Number(value) => value.to_string(),
            Self::Text(value) => value.clone(),
        }
    }
}

/// Unvalidated serialized shape of one contact.
///
/// Scalar fields accept any JSON scalar; numbers and booleans are kept as
/// their text and left to the field validators.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawContactRecord {
    #[serde(default, deserialize_with = "scalar_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub telegram: Option<String>,
    #[serde(default, deserialize_with = "scalar_texts")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub github: Option<String>,
    #[serde(
        default,
        deserialize_with = "scalar_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub assignment: Option<String>,
    #[serde(
        default,
        deserialize_with = "raw_score",
        skip_serializing_if = "Option::is_none"
    )]
    pub score: Option<RawScore>,
}

impl RawContactRecord {
    /// Copies a validated contact into its serialized shape.
    pub fn from_contact(contact: &Contact) -> Self {
        let (assignment, score) = match &contact.assessment {
            Some(assessment) => (
                Some(assessment.assignment.to_string()),
                Some(score_number(assessment.score.value())),
            ),
            None => (None, None),
        };

        Self {
            name: Some(contact.name.to_string()),
            phone: Some(contact.phone.to_string()),
            email: Some(contact.email.to_string()),
            address: Some(contact.address.to_string()),
            telegram: Some(contact.telegram.to_string()),
            tags: contact.tags.iter().map(|tag| tag.as_str().to_string()).collect(),
            github: Some(contact.github.to_string()),
            assignment,
            score,
        }
    }

    /// Validates every field and builds the domain contact.
    pub fn to_contact(&self) -> Result<Contact, FieldError> {
        let name = Name::validate(self.name.as_deref())?;
        let phone = Phone::validate(self.phone.as_deref())?;
        let email = Email::validate(self.email.as_deref())?;
        let address = Address::validate(self.address.as_deref())?;
        let telegram = Telegram::validate(self.telegram.as_deref())?;
        let tags = Tag::validate_all(&self.tags)?;
        let github = Github::validate(self.github.as_deref())?;
        let score_text = self.score.as_ref().map(RawScore::as_text);
        let assessment =
            Assessment::validate_pair(self.assignment.as_deref(), score_text.as_deref())?;

        Ok(Contact::new(name, phone, email, address, telegram, github, tags)
            .with_assessment(assessment))
    }
}

fn score_number(value: f64) -> RawScore {
    Number::from_f64(value)
        .map(RawScore::Number)
        .unwrap_or_else(|| RawScore::Text(value.to_string()))
}

fn scalar_to_text(value: Value) -> Result<Option<String>, String> {
    match value {
        Value::Null => Ok(None),
        Value::String(text) => Ok(Some(text)),
        Value::Number(number) => Ok(Some(number.to_string())),
        Value::Bool(flag) => Ok(Some(flag.to_string())),
        Value::Array(_) => Err("expected a scalar field value, found an array".to_string()),
        Value::Object(_) => Err("expected a scalar field value, found an object".to_string()),
    }
}

fn scalar_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    scalar_to_text(Value::deserialize(deserializer)?).map_err(D::Error::custom)
}

fn scalar_texts<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    values
        .into_iter()
        .map(|value| match scalar_to_text(value) {
            Ok(Some(text)) => Ok(text),
            Ok(None) => Err(D::Error::custom("tag list contains null")),
            Err(message) => Err(D::Error::custom(message)),
        })
        .collect()
}

fn raw_score<'de, D>(deserializer: D) -> Result<Option<RawScore>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Number(number) => Ok(Some(RawScore::Number(number))),
        other => Ok(scalar_to_text(other)
            .map_err(D::Error::custom)?
            .map(RawScore::Text)),
    }
}
