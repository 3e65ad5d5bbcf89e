use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::ServiceError;

pub const MSG_FIELDS_REQUIRED: &str = "All fields are required";
pub const MSG_INDEX_REQUIRED: &str = "Index query parameter is required";
pub const MSG_EMAIL_REQUIRED: &str = "Email query parameter is required";
pub const MSG_INVALID_ID: &str = "Invalid ID";
pub const MSG_NOT_FOUND: &str = "Submission not found";
pub const MSG_NO_EMAIL_MATCH: &str = "No submissions found for the provided email";

/// A stored form submission. Field names on the wire and on disk are camelCase.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub github_link: String,
    pub stopwatch_time: String,
}

impl Submission {
    pub fn from_input(id: i64, input: SubmissionInput) -> Self {
        Self {
            id,
            name: input.name,
            email: input.email,
            phone: input.phone,
            github_link: input.github_link,
            stopwatch_time: input.stopwatch_time,
        }
    }
}

/// Create/update input after validation: every field present and non-empty.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub github_link: String,
    pub stopwatch_time: String,
}

/// Request body as received. Any field may be absent or of the wrong type.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub email: Option<Value>,
    #[serde(default)]
    pub phone: Option<Value>,
    #[serde(default)]
    pub github_link: Option<Value>,
    #[serde(default)]
    pub stopwatch_time: Option<Value>,
}

impl SubmissionPayload {
    /// Presence check: each field must be a non-empty string.
    pub fn validate(&self) -> Result<SubmissionInput, ServiceError> {
        let required = |v: &Option<Value>| -> Result<String, ServiceError> {
            match v {
                Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
                _ => Err(ServiceError::validation(MSG_FIELDS_REQUIRED)),
            }
        };
        Ok(SubmissionInput {
            name: required(&self.name)?,
            email: required(&self.email)?,
            phone: required(&self.phone)?,
            github_link: required(&self.github_link)?,
            stopwatch_time: required(&self.stopwatch_time)?,
        })
    }
}

impl From<SubmissionInput> for SubmissionPayload {
    fn from(input: SubmissionInput) -> Self {
        Self {
            name: Some(Value::String(input.name)),
            email: Some(Value::String(input.email)),
            phone: Some(Value::String(input.phone)),
            github_link: Some(Value::String(input.github_link)),
            stopwatch_time: Some(Value::String(input.stopwatch_time)),
        }
    }
}

/// Next id: last element's id plus one, or 1 for an empty collection.
/// Uses the last element, not the maximum.
pub fn next_id(items: &[Submission]) -> Result<i64, ServiceError> {
    match items.last() {
        None => Ok(1),
        Some(last) => last.id.checked_add(1).ok_or_else(|| {
            ServiceError::CorruptData(format!("last id {} cannot be incremented", last.id))
        }),
    }
}

/// Result of a leading-integer parse.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeadingInt {
    InRange(i64),
    /// Well-formed digits that do not fit in an `i64`; matches no stored id.
    OutOfRange,
}

impl LeadingInt {
    pub fn value(self) -> Option<i64> {
        match self {
            Self::InRange(v) => Some(v),
            Self::OutOfRange => None,
        }
    }
}

/// Lenient leading-integer parse: optional leading whitespace,
/// optional sign, at least one digit; anything after the digits is ignored.
pub fn parse_int_prefix(raw: &str) -> Option<LeadingInt> {
    let s = raw.trim_start();
    let sign_len = usize::from(matches!(s.as_bytes().first(), Some(b'-' | b'+')));
    let digits_len = s[sign_len..].bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    Some(match s[..sign_len + digits_len].parse::<i64>() {
        Ok(v) => LeadingInt::InRange(v),
        Err(_) => LeadingInt::OutOfRange,
    })
}
