use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GradeError;

/// Evaluation scheme of a course, deciding which sub-scores count and how.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CourseType {
    /// Final exam only.
    Exam,
    /// Tutorial (TD) work plus final exam.
    TdExam,
    /// Lab (TP) work, tutorial (TD) work and final exam.
    TpTdExam,
}

impl CourseType {
    pub const ALL: [CourseType; 3] = [CourseType::Exam, CourseType::TdExam, CourseType::TpTdExam];

    pub fn as_str(self) -> &'static str {
        match self {
            CourseType::Exam => "exam",
            CourseType::TdExam => "td_exam",
            CourseType::TpTdExam => "tp_td_exam",
        }
    }

    pub fn uses_td(self) -> bool {
        matches!(self, CourseType::TdExam | CourseType::TpTdExam)
    }

    pub fn uses_tp(self) -> bool {
        matches!(self, CourseType::TpTdExam)
    }
}

impl fmt::Display for CourseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CourseType {
    type Err = GradeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "exam" => Ok(CourseType::Exam),
            "td_exam" => Ok(CourseType::TdExam),
            "tp_td_exam" => Ok(CourseType::TpTdExam),
            other => Err(GradeError::UnrecognizedCourseType(other.to_string())),
        }
    }
}

impl TryFrom<String> for CourseType {
    type Error = GradeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CourseType> for String {
    fn from(value: CourseType) -> Self {
        value.as_str().to_string()
    }
}

/// One weighted course with its optional sub-scores on a 0-20 scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub coefficient: f64,
    pub course_type: CourseType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exam_grade: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub td_grade: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tp_grade: Option<f64>,
}

impl Course {
    /// Switches the evaluation scheme, dropping sub-scores the new scheme ignores.
    ///
    /// The exam grade is always kept.
    pub fn with_course_type(mut self, course_type: CourseType) -> Self {
        self.course_type = course_type;
        if !course_type.uses_td() {
            self.td_grade = None;
        }
        if !course_type.uses_tp() {
            self.tp_grade = None;
        }
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseResult {
    pub id: String,
    pub name: String,
    pub coefficient: f64,
    pub final_grade: f64,
    pub is_passing: bool,
}

/// Aggregate outcome over an ordered sequence of courses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GpaResult {
    pub total_gpa: f64,
    pub total_coefficients: f64,
    pub is_passing: bool,
    pub course_results: Vec<CourseResult>,
}

impl GpaResult {
    pub fn empty() -> Self {
        Self {
            total_gpa: 0.0,
            total_coefficients: 0.0,
            is_passing: false,
            course_results: Vec::new(),
        }
    }
}
