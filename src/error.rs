use thiserror::Error;

/// Errors raised by the grade engine's data types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GradeError {
    /// A course type string did not match any known evaluation scheme.
    #[error("unrecognized course type `{0}` (expected exam, td_exam or tp_td_exam)")]
    UnrecognizedCourseType(String),
}
