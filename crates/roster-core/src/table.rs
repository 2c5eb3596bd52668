// ABOUTME: Table naming for the roster: the TableInfo request body and the validated TableName.
// ABOUTME: Only a TableName can be interpolated into SQL, so every name passes the allow-list first.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::fields::decode_string_fields;

/// Longest table name accepted.
pub const MAX_TABLE_NAME_LEN: usize = 64;

/// Reasons a requested table name is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableNameError {
    #[error("table name must not be empty")]
    Empty,

    #[error("table name is longer than {max} characters")]
    TooLong { max: usize },

    #[error("table name must not start with a digit: {0}")]
    LeadingDigit(String),

    #[error("table name may only contain ASCII letters, digits and '_': {0}")]
    InvalidCharacter(String),
}

/// A table name that is safe to place in a SQL statement.
///
/// Allowed: ASCII letters, digits and underscore, not starting with a digit,
/// at most [`MAX_TABLE_NAME_LEN`] characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TableName(String);

impl TableName {
    pub fn parse(raw: &str) -> Result<Self, TableNameError> {
        if raw.is_empty() {
            return Err(TableNameError::Empty);
        }
        if raw.len() > MAX_TABLE_NAME_LEN {
            return Err(TableNameError::TooLong {
                max: MAX_TABLE_NAME_LEN,
            });
        }
        if !raw.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(TableNameError::InvalidCharacter(raw.to_string()));
        }
        if raw.starts_with(|c: char| c.is_ascii_digit()) {
            return Err(TableNameError::LeadingDigit(raw.to_string()));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The name wrapped in double quotes for use as a SQL identifier.
    pub fn quoted(&self) -> String {
        format!("\"{}\"", self.0)
    }
}

impl FromStr for TableName {
    type Err = TableNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Request body for creating a table. The name is unvalidated until
/// [`TableInfo::table_name`] is called; a missing `tableName` decodes as empty.
#[derive(Debug, Clone)]
pub struct TableInfo {
    pub table_name: String,
}

impl<'de> Deserialize<'de> for TableInfo {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let [table_name] = decode_string_fields(deserializer, ["tableName"])?;
        Ok(Self {
            table_name: table_name.unwrap_or_default(),
        })
    }
}

impl TableInfo {
    pub fn table_name(&self) -> Result<TableName, TableNameError> {
        TableName::parse(&self.table_name)
    }
}
