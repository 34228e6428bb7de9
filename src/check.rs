use std::collections::HashSet;
use std::fmt;

use crate::models::Course;

pub const MIN_GRADE: f64 = 0.0;
pub const MAX_GRADE: f64 = 20.0;

#[derive(Debug, Clone, PartialEq)]
pub enum IssueKind {
    GradeOutOfRange { field: &'static str, value: f64 },
    NonPositiveCoefficient(f64),
    DuplicateId,
    UnusedGrade { field: &'static str },
}

/// Advisory finding about one input row. Grading never depends on these.
#[derive(Debug, Clone, PartialEq)]
pub struct InputIssue {
    pub row: usize,
    pub course_id: String,
    pub kind: IssueKind,
}

impl fmt::Display for InputIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {} ({}): ", self.row + 1, self.course_id)?;
        match &self.kind {
            IssueKind::GradeOutOfRange { field, value } => {
                write!(f, "{field} {value} is outside {MIN_GRADE}-{MAX_GRADE}")
            }
            IssueKind::NonPositiveCoefficient(value) => {
                write!(f, "coefficient {value} is not positive")
            }
            IssueKind::DuplicateId => write!(f, "id is used by an earlier course"),
            IssueKind::UnusedGrade { field } => {
                write!(f, "{field} is set but ignored by this course type")
            }
        }
    }
}

pub fn check_courses(courses: &[Course]) -> Vec<InputIssue> {
    let mut issues = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();

    for (row, course) in courses.iter().enumerate() {
        let mut push = |kind| {
            issues.push(InputIssue {
                row,
                course_id: course.id.clone(),
                kind,
            })
        };

        if !seen.insert(course.id.as_str()) {
            push(IssueKind::DuplicateId);
        }

        if course.coefficient.is_nan() || course.coefficient <= 0.0 {
            push(IssueKind::NonPositiveCoefficient(course.coefficient));
        }

        let grades = [
            ("examGrade", course.exam_grade, true),
            ("tdGrade", course.td_grade, course.course_type.uses_td()),
            ("tpGrade", course.tp_grade, course.course_type.uses_tp()),
        ];
        for (field, grade, used) in grades {
            let Some(value) = grade else { continue };
            if !(MIN_GRADE..=MAX_GRADE).contains(&value) {
                push(IssueKind::GradeOutOfRange { field, value });
            }
            if !used {
                push(IssueKind::UnusedGrade { field });
            }
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CourseType;

    fn course(id: &str, coefficient: f64, course_type: CourseType) -> Course {
        Course {
            id: id.to_string(),
            name: String::new(),
            coefficient,
            course_type,
            exam_grade: Some(12.0),
            td_grade: None,
            tp_grade: None,
        }
    }

    #[test]
    fn clean_input_has_no_issues() {
        let courses = vec![course("a", 2.0, CourseType::Exam), course("b", 1.0, CourseType::TdExam)];
        assert!(check_courses(&courses).is_empty());
    }

    #[test]
    fn flags_out_of_range_grades() {
        let mut c = course("a", 1.0, CourseType::TpTdExam);
        c.exam_grade = Some(21.0);
        c.tp_grade = Some(-1.0);
        c.td_grade = Some(20.0);

        let issues = check_courses(&[c]);
        assert_eq!(issues.len(), 2);
        assert_eq!(
            issues[0].kind,
            IssueKind::GradeOutOfRange { field: "examGrade", value: 21.0 }
        );
        assert_eq!(
            issues[1].kind,
            IssueKind::GradeOutOfRange { field: "tpGrade", value: -1.0 }
        );
    }

    #[test]
    fn flags_non_positive_coefficients_and_duplicates() {
        let courses = vec![
            course("a", 1.0, CourseType::Exam),
            course("a", 0.0, CourseType::Exam),
        ];
        let issues = check_courses(&courses);
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].row, 1);
        assert_eq!(issues[0].kind, IssueKind::DuplicateId);
        assert_eq!(issues[1].kind, IssueKind::NonPositiveCoefficient(0.0));
    }

    #[test]
    fn flags_nan_coefficient() {
        let issues = check_courses(&[course("a", f64::NAN, CourseType::Exam)]);
        assert_eq!(issues.len(), 1);
        assert!(matches!(
            issues[0].kind,
            IssueKind::NonPositiveCoefficient(value) if value.is_nan()
        ));
        assert_eq!(issues[0].to_string(), "row 1 (a): coefficient NaN is not positive");
    }

    #[test]
    fn flags_grades_ignored_by_course_type() {
        let mut c = course("a", 1.0, CourseType::TdExam);
        c.tp_grade = Some(15.0);
        let issues = check_courses(&[c]);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::UnusedGrade { field: "tpGrade" });
        assert_eq!(
            issues[0].to_string(),
            "row 1 (a): tpGrade is set but ignored by this course type"
        );
    }
}
