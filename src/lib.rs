//! Weighted course grade and GPA computation on the 0-20 scale.
//!
//! [`compute_course_grade`] applies the fixed weighting of a course's
//! evaluation scheme, [`compute_gpa`] folds an ordered list of courses into a
//! coefficient-weighted average, and [`CourseFactory`] hands out blank courses.

pub mod check;
pub mod error;
pub mod factory;
pub mod grade;
pub mod import;
pub mod models;
pub mod report;

pub use error::GradeError;
pub use factory::{create_blank_course, CourseFactory, IdSource, SequentialIds, UuidIds};
pub use grade::{compute_course_grade, compute_gpa, PASSING_GRADE};
pub use models::{Course, CourseResult, CourseType, GpaResult};
