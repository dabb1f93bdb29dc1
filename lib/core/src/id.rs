//! Opaque identifiers shared with the backend.
//!
//! The backend hands out integer primary keys for projects, groups and
//! skills, and string USNs for users. Both shapes are kept as-is: integer
//! `1` and string `"1"` never compare equal.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

macro_rules! identifier {
    ($(#[$meta:meta])* $name:ident, $what:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(untagged)]
        pub enum $name {
            Integer(u64),
            String(String),
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $name::Integer(i) => write!(f, "{}", i),
                    $name::String(s) => write!(f, "{}", s),
                }
            }
        }

        impl From<u64> for $name {
            fn from(i: u64) -> Self {
                $name::Integer(i)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                $name::String(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                $name::String(s.to_string())
            }
        }

        impl TryFrom<&Value> for $name {
            type Error = Error;

            /// Accepts unsigned integers and strings only. Floats, booleans,
            /// null and containers are rejected rather than coerced.
            fn try_from(value: &Value) -> Result<Self> {
                match value {
                    Value::Number(n) => n.as_u64().map($name::Integer).ok_or_else(|| {
                        Error::InvalidInput(format!(
                            "{} must be an unsigned integer or a string, got {}",
                            $what, n
                        ))
                    }),
                    Value::String(s) => Ok($name::String(s.clone())),
                    other => Err(Error::InvalidInput(format!(
                        "{} must be an unsigned integer or a string, got {}",
                        $what,
                        kind_of(other)
                    ))),
                }
            }
        }
    };
}

identifier!(
    /// Identifier of a project, study group or user profile
    EntityId,
    "entity id"
);

identifier!(
    /// Identifier of a skill taxonomy entry
    SkillId,
    "skill id"
);

pub(crate) fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
