//! Field schemas for the write paths that reject malformed input.
//!
//! Only three paths are checked: partial updates of achievements and
//! features, and contact form submissions. Every other write decodes its
//! body straight into a draft and lets default injection fill the gaps.
//! Fields not named by a schema are ignored.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldType {
    Text,
    Integer,
    Boolean,
}

impl FieldType {
    fn accepts(self, value: &Value) -> bool {
        match self {
            FieldType::Text => value.is_string(),
            FieldType::Integer => value.as_i64().is_some_and(|n| i32::try_from(n).is_ok()),
            FieldType::Boolean => value.is_boolean(),
        }
    }

    fn expected(self) -> &'static str {
        match self {
            FieldType::Text => "Expected string",
            FieldType::Integer => "Expected integer",
            FieldType::Boolean => "Expected boolean",
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct FieldRule {
    /// JSON field name as submitted (camelCase)
    pub name: &'static str,
    pub field_type: FieldType,
    pub required: bool,
    pub nullable: bool,
}

impl FieldRule {
    const fn optional(name: &'static str, field_type: FieldType) -> Self {
        FieldRule {
            name,
            field_type,
            required: false,
            nullable: false,
        }
    }

    const fn required(name: &'static str, field_type: FieldType) -> Self {
        FieldRule {
            name,
            field_type,
            required: true,
            nullable: false,
        }
    }

    const fn nullable(name: &'static str, field_type: FieldType) -> Self {
        FieldRule {
            name,
            field_type,
            required: false,
            nullable: true,
        }
    }
}

/// A named list of field rules checked against a JSON object.
#[derive(Debug)]
pub struct Schema {
    pub name: &'static str,
    pub rules: &'static [FieldRule],
}

pub const ACHIEVEMENT_PATCH: Schema = Schema {
    name: "achievement update",
    rules: &[
        FieldRule::optional("year", FieldType::Text),
        FieldRule::optional("title", FieldType::Text),
        FieldRule::optional("description", FieldType::Text),
        FieldRule::optional("isActive", FieldType::Boolean),
    ],
};

pub const FEATURE_PATCH: Schema = Schema {
    name: "feature update",
    rules: &[
        FieldRule::optional("title", FieldType::Text),
        FieldRule::optional("description", FieldType::Text),
        FieldRule::optional("iconSvg", FieldType::Text),
        FieldRule::optional("sortOrder", FieldType::Integer),
        FieldRule::optional("isActive", FieldType::Boolean),
    ],
};

pub const CONTACT_SUBMISSION: Schema = Schema {
    name: "contact submission",
    rules: &[
        FieldRule::required("name", FieldType::Text),
        FieldRule::required("email", FieldType::Text),
        FieldRule::nullable("phone", FieldType::Text),
        FieldRule::required("eventDate", FieldType::Text),
        FieldRule::required("eventType", FieldType::Text),
        FieldRule::required("performanceType", FieldType::Text),
        FieldRule::nullable("message", FieldType::Text),
    ],
};

/// One rejected field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    pub field: String,
    pub message: String,
}

impl FieldIssue {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        FieldIssue {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("Validation error: {}", summarize(.issues))]
pub struct ValidationError {
    pub issues: Vec<FieldIssue>,
}

impl ValidationError {
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationError {
            issues: vec![FieldIssue::new(field, message)],
        }
    }
}

fn summarize(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(|issue| format!("{} at \"{}\"", issue.message, issue.field))
        .collect::<Vec<_>>()
        .join("; ")
}

impl Schema {
    /// Check `body` against every rule, collecting all issues.
    pub fn check(&self, body: &Value) -> Result<(), ValidationError> {
        let Some(object) = body.as_object() else {
            return Err(ValidationError::single("", "Expected object"));
        };

        let mut issues = Vec::new();
        for rule in self.rules {
            match object.get(rule.name) {
                None if rule.required => issues.push(FieldIssue::new(rule.name, "Required")),
                None => {}
                Some(Value::Null) if rule.nullable => {}
                Some(Value::Null) => issues.push(FieldIssue::new(rule.name, rule.field_type.expected())),
                Some(value) if !rule.field_type.accepts(value) => {
                    issues.push(FieldIssue::new(rule.name, rule.field_type.expected()))
                }
                Some(_) => {}
            }
        }

        if issues.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { issues })
        }
    }
}

/// Decode a request body into a typed partial record. A missing body is an
/// empty partial; a body of the wrong shape is malformed input.
pub fn decode<D: DeserializeOwned + Default>(body: Option<Value>) -> Result<D, ValidationError> {
    match body {
        None | Some(Value::Null) => Ok(D::default()),
        Some(value) => serde_json::from_value(value).map_err(|e| ValidationError::single("body", e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_contact_submission_requires_fields() {
        let err = CONTACT_SUBMISSION.check(&json!({ "name": "Anna", "phone": null })).unwrap_err();
        let fields: Vec<&str> = err.issues.iter().map(|i| i.field.as_str()).collect();
        assert_eq!(fields, vec!["email", "eventDate", "eventType", "performanceType"]);
    }

    #[test]
    fn test_patch_rejects_null_and_wrong_types() {
        let err = ACHIEVEMENT_PATCH.check(&json!({ "title": null, "isActive": "yes" })).unwrap_err();
        assert_eq!(err.issues.len(), 2);
        assert_eq!(err.issues[0], FieldIssue::new("title", "Expected string"));
        assert_eq!(err.issues[1], FieldIssue::new("isActive", "Expected boolean"));

        assert!(FEATURE_PATCH.check(&json!({ "sortOrder": 4, "extra": true })).is_ok());
        assert!(FEATURE_PATCH.check(&json!({ "sortOrder": 1.5 })).is_err());
        assert!(FEATURE_PATCH.check(&json!([1, 2])).is_err());
    }
}
