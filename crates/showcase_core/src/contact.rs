//! Contact submissions: payload shape and the checks the endpoint applies.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email pattern compiles"));

pub const MISSING_FIELDS_MESSAGE: &str = "Name, email and message are required.";
pub const INVALID_EMAIL_MESSAGE: &str = "Invalid email.";
pub const ACCEPTED_MESSAGE: &str =
    "Thanks! Your request has been received. We'll reply within 24 hours.";

/// Loose email shape check: `something@something.something`, no whitespace.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("{}", MISSING_FIELDS_MESSAGE)]
    MissingFields,
    #[error("{}", INVALID_EMAIL_MESSAGE)]
    InvalidEmail,
}

/// A file the visitor attached, carried inline as base64.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub name: String,
    pub size: u64,
    #[serde(rename = "type", default)]
    pub mime_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base64: Option<String>,
}

/// JSON body accepted by `POST /api/contact`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactSubmission {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urgency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<Attachment>,
}

impl ContactSubmission {
    /// Reads a posted body without rejecting odd field types.
    ///
    /// A null or non-object body reads as empty. Required fields count only
    /// when they are strings; optional scalars are kept as text, a budget may
    /// be a number or a numeric string, and an unreadable file is dropped.
    pub fn from_body(body: &Value) -> Self {
        let Value::Object(fields) = body else {
            return Self::default();
        };
        let string = |key: &str| match fields.get(key) {
            Some(Value::String(value)) => Some(value.clone()),
            _ => None,
        };
        let text = |key: &str| match fields.get(key) {
            Some(Value::String(value)) => Some(value.clone()),
            Some(value @ (Value::Number(_) | Value::Bool(_))) => Some(value.to_string()),
            _ => None,
        };
        let budget = match fields.get("budget") {
            Some(Value::Number(n)) => n
                .as_u64()
                .or_else(|| n.as_f64().filter(|f| f.is_finite() && *f >= 0.0).map(|f| f as u64)),
            Some(Value::String(s)) => s.trim().parse().ok(),
            _ => None,
        };
        let file = fields
            .get("file")
            .and_then(|value| serde_json::from_value(value.clone()).ok());

        Self {
            name: string("name"),
            email: string("email"),
            message: string("message"),
            phone: text("phone"),
            service: text("service"),
            budget,
            deadline: text("deadline"),
            urgency: text("urgency"),
            file,
        }
    }

    /// Required fields present and non-empty, then email shape.
    pub fn validate(&self) -> Result<(), ContactError> {
        let present = |field: &Option<String>| field.as_deref().is_some_and(|v| !v.is_empty());
        if !present(&self.name) || !present(&self.email) || !present(&self.message) {
            return Err(ContactError::MissingFields);
        }
        if !self.email.as_deref().is_some_and(is_valid_email) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }

    /// One-line summary for logs. Attachment contents are never included.
    pub fn log_summary(&self) -> String {
        let field = |value: &Option<String>| value.clone().unwrap_or_default();
        let mut line = format!(
            "name={:?} email={:?} phone={:?} service={:?} budget={} deadline={:?} urgency={:?} message_len={}",
            field(&self.name),
            field(&self.email),
            field(&self.phone),
            field(&self.service),
            self.budget.map(|b| b.to_string()).unwrap_or_default(),
            field(&self.deadline),
            field(&self.urgency),
            self.message.as_deref().map(str::len).unwrap_or(0),
        );
        if let Some(file) = &self.file {
            line.push_str(&format!(
                " attachment={:?} size={} type={:?}",
                file.name, file.size, file.mime_type
            ));
        }
        line
    }
}

/// Quick-apply form on a job card.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JobApplication {
    pub name: String,
    pub email: String,
    pub resume: Option<String>,
}

impl JobApplication {
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() || self.email.trim().is_empty() {
            return Err(ContactError::MissingFields);
        }
        if !is_valid_email(self.email.trim()) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shape() {
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.de"));
        assert!(!is_valid_email("@."));
    }

    #[test]
    fn loose_body_fields_are_coerced() {
        let submission = ContactSubmission::from_body(&serde_json::json!({
            "name": "Asha",
            "email": "asha@example.com",
            "message": "hi",
            "phone": 5550100,
            "budget": "50000",
            "urgency": null,
            "file": "not-an-object"
        }));
        assert_eq!(submission.phone.as_deref(), Some("5550100"));
        assert_eq!(submission.budget, Some(50_000));
        assert_eq!(submission.urgency, None);
        assert_eq!(submission.file, None);
        assert_eq!(submission.validate(), Ok(()));
    }

    #[test]
    fn non_object_body_reads_as_empty() {
        for body in [Value::Null, serde_json::json!([1, 2]), serde_json::json!("text")] {
            assert_eq!(
                ContactSubmission::from_body(&body).validate(),
                Err(ContactError::MissingFields)
            );
        }
        let numeric_name = serde_json::json!({ "name": 7, "email": "a@b.co", "message": "hi" });
        assert_eq!(
            ContactSubmission::from_body(&numeric_name).validate(),
            Err(ContactError::MissingFields)
        );
    }
}
