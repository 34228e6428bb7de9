use crate::models::{Course, CourseResult, CourseType, GpaResult};

/// Minimum grade, on the 0-20 scale, that counts as passing.
pub const PASSING_GRADE: f64 = 10.0;

const TD_EXAM_TD_WEIGHT: f64 = 0.4;
const TD_EXAM_EXAM_WEIGHT: f64 = 0.6;
const TP_TD_EXAM_TD_WEIGHT: f64 = 0.2;
const TP_TD_EXAM_TP_WEIGHT: f64 = 0.2;
const TP_TD_EXAM_EXAM_WEIGHT: f64 = 0.6;

/// Final grade of one course. Absent sub-scores count as 0; no range checks.
pub fn compute_course_grade(course: &Course) -> f64 {
    let exam = course.exam_grade.unwrap_or(0.0);
    let td = course.td_grade.unwrap_or(0.0);
    let tp = course.tp_grade.unwrap_or(0.0);

    match course.course_type {
        CourseType::Exam => exam,
        CourseType::TdExam => td * TD_EXAM_TD_WEIGHT + exam * TD_EXAM_EXAM_WEIGHT,
        CourseType::TpTdExam => {
            td * TP_TD_EXAM_TD_WEIGHT + tp * TP_TD_EXAM_TP_WEIGHT + exam * TP_TD_EXAM_EXAM_WEIGHT
        }
    }
}

pub fn is_passing(grade: f64) -> bool {
    grade >= PASSING_GRADE
}

/// Coefficient-weighted average over `courses`, keeping one result per course in input order.
pub fn compute_gpa(courses: &[Course]) -> GpaResult {
    if courses.is_empty() {
        return GpaResult::empty();
    }

    let mut total_weighted_grade = 0.0;
    let mut total_coefficients = 0.0;
    let mut course_results = Vec::with_capacity(courses.len());

    for course in courses {
        let final_grade = compute_course_grade(course);

        total_weighted_grade += final_grade * course.coefficient;
        total_coefficients += course.coefficient;

        course_results.push(CourseResult {
            id: course.id.clone(),
            name: course.name.clone(),
            coefficient: course.coefficient,
            final_grade,
            is_passing: is_passing(final_grade),
        });
    }

    let total_gpa = if total_coefficients > 0.0 {
        total_weighted_grade / total_coefficients
    } else {
        0.0
    };

    tracing::debug!(
        courses = courses.len(),
        total_coefficients,
        total_gpa,
        "computed weighted average"
    );

    GpaResult {
        total_gpa,
        total_coefficients,
        is_passing: is_passing(total_gpa),
        course_results,
    }
}
