// ABOUTME: The Student record exchanged over HTTP and stored as one table row.
// ABOUTME: Input keys match case-insensitively and absent fields decode as empty strings.

use serde::{Deserialize, Deserializer, Serialize};

use crate::fields::decode_string_fields;

/// Input field names, in `Student` field order.
pub const STUDENT_FIELDS: [&str; 3] = ["code", "name", "program"];

/// A single student as sent by clients and returned by listings.
/// The autoincrement row id is a storage detail and is not part of the payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Student {
    pub code: String,
    pub name: String,
    pub program: String,
}

impl Student {
    pub fn new(code: impl Into<String>, name: impl Into<String>, program: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            program: program.into(),
        }
    }

    /// Build from decoded `[code, name, program]` slots; missing ones become empty.
    pub fn from_fields([code, name, program]: [Option<String>; 3]) -> Self {
        Self {
            code: code.unwrap_or_default(),
            name: name.unwrap_or_default(),
            program: program.unwrap_or_default(),
        }
    }
}

impl<'de> Deserialize<'de> for Student {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        decode_string_fields(deserializer, STUDENT_FIELDS).map(Self::from_fields)
    }
}
