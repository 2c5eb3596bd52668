// ABOUTME: Domain types for the student roster service.
// ABOUTME: Exposes the Student record, the TableInfo request body, and the validated TableName identifier.

pub mod fields;
pub mod student;
pub mod table;

pub use fields::decode_string_fields;
pub use student::{STUDENT_FIELDS, Student};
pub use table::{MAX_TABLE_NAME_LEN, TableInfo, TableName, TableNameError};
