//! Core member types for roster.
//!
//! A [`Member`] is the single managed entity. [`MemberFields`] carries every
//! attribute except the store-assigned `id` and is the payload of create and
//! update. Incoming JSON bodies are checked by [`MemberFields::from_json`],
//! which reports every missing or mistyped field at once.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// A stored member record.
///
/// Serialized with camelCase keys (`userName`, `isActive`), which is also the
/// format of the seed file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    /// Unique identifier assigned by the store. Never changes after creation.
    pub id: u64,
    pub name: String,
    pub user_name: String,
    /// Avatar URI or opaque token.
    pub avatar: String,
    pub is_active: bool,
    pub role: String,
    pub email: String,
    /// Team names in display order. May be empty.
    pub teams: Vec<String>,
}

impl Member {
    /// Builds a member from a validated field set and an assigned id.
    pub fn from_fields(id: u64, fields: MemberFields) -> Self {
        Self {
            id,
            name: fields.name,
            user_name: fields.user_name,
            avatar: fields.avatar,
            is_active: fields.is_active,
            role: fields.role,
            email: fields.email,
            teams: fields.teams,
        }
    }

    /// Replaces every field except `id` with `fields`.
    pub fn replace_fields(&mut self, fields: MemberFields) {
        *self = Self::from_fields(self.id, fields);
    }
}

/// Every mutable attribute of a member, all required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberFields {
    pub name: String,
    pub user_name: String,
    pub avatar: String,
    pub is_active: bool,
    pub role: String,
    pub email: String,
    pub teams: Vec<String>,
}

/// What is wrong with a single field of a member payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Problem {
    Missing,
    ExpectedObject,
    ExpectedString,
    ExpectedBoolean,
    ExpectedStringArray,
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Problem::Missing => "missing",
            Problem::ExpectedObject => "expected a JSON object",
            Problem::ExpectedString => "expected a string",
            Problem::ExpectedBoolean => "expected a boolean",
            Problem::ExpectedStringArray => "expected an array of strings",
        };
        f.write_str(text)
    }
}

/// A field name paired with the problem found in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    pub field: &'static str,
    pub problem: Problem,
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.problem)
    }
}

/// A member payload failed validation. Lists every offending field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid member payload: {}", join_issues(.issues))]
pub struct ValidationError {
    pub issues: Vec<FieldIssue>,
}

fn join_issues(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl MemberFields {
    /// Validates a raw JSON body and extracts the member fields.
    ///
    /// `null` counts as missing. Unknown keys, including a client-supplied
    /// `id`, are ignored.
    pub fn from_json(value: &Value) -> Result<Self, ValidationError> {
        let Some(obj) = value.as_object() else {
            return Err(ValidationError {
                issues: vec![FieldIssue {
                    field: "body",
                    problem: Problem::ExpectedObject,
                }],
            });
        };

        let mut issues = Vec::new();
        let name = string_field(obj, "name", &mut issues);
        let user_name = string_field(obj, "userName", &mut issues);
        let avatar = string_field(obj, "avatar", &mut issues);
        let is_active = bool_field(obj, "isActive", &mut issues);
        let role = string_field(obj, "role", &mut issues);
        let email = string_field(obj, "email", &mut issues);
        let teams = string_array_field(obj, "teams", &mut issues);

        match (name, user_name, avatar, is_active, role, email, teams) {
            (
                Some(name),
                Some(user_name),
                Some(avatar),
                Some(is_active),
                Some(role),
                Some(email),
                Some(teams),
            ) => Ok(Self {
                name,
                user_name,
                avatar,
                is_active,
                role,
                email,
                teams,
            }),
            _ => Err(ValidationError { issues }),
        }
    }
}

fn lookup<'a>(
    obj: &'a Map<String, Value>,
    field: &'static str,
    issues: &mut Vec<FieldIssue>,
) -> Option<&'a Value> {
    match obj.get(field) {
        None | Some(Value::Null) => {
            issues.push(FieldIssue {
                field,
                problem: Problem::Missing,
            });
            None
        }
        Some(v) => Some(v),
    }
}

fn string_field(
    obj: &Map<String, Value>,
    field: &'static str,
    issues: &mut Vec<FieldIssue>,
) -> Option<String> {
    match lookup(obj, field, issues)? {
        Value::String(s) => Some(s.clone()),
        _ => {
            issues.push(FieldIssue {
                field,
                problem: Problem::ExpectedString,
            });
            None
        }
    }
}

fn bool_field(
    obj: &Map<String, Value>,
    field: &'static str,
    issues: &mut Vec<FieldIssue>,
) -> Option<bool> {
    match lookup(obj, field, issues)? {
        Value::Bool(b) => Some(*b),
        _ => {
            issues.push(FieldIssue {
                field,
                problem: Problem::ExpectedBoolean,
            });
            None
        }
    }
}

fn string_array_field(
    obj: &Map<String, Value>,
    field: &'static str,
    issues: &mut Vec<FieldIssue>,
) -> Option<Vec<String>> {
    let items = match lookup(obj, field, issues)? {
        Value::Array(items) => items,
        _ => {
            issues.push(FieldIssue {
                field,
                problem: Problem::ExpectedStringArray,
            });
            return None;
        }
    };
    let strings: Option<Vec<String>> = items
        .iter()
        .map(|v| v.as_str().map(str::to_string))
        .collect();
    if strings.is_none() {
        issues.push(FieldIssue {
            field,
            problem: Problem::ExpectedStringArray,
        });
    }
    strings
}
