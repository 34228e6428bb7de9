use std::fmt::Write;

use chrono::NaiveDate;

use crate::models::{CourseResult, GpaResult};

const UNNAMED_COURSE: &str = "Unnamed Course";

/// Two-decimal presentation of a grade. Results keep full precision.
pub fn format_grade(grade: f64) -> String {
    format!("{grade:.2}")
}

pub fn status_label(is_passing: bool) -> &'static str {
    if is_passing {
        "Passing"
    } else {
        "Not Passing"
    }
}

fn display_name(result: &CourseResult) -> &str {
    if result.name.trim().is_empty() {
        UNNAMED_COURSE
    } else {
        &result.name
    }
}

pub fn render_text(result: &GpaResult) -> String {
    let mut output = String::new();

    let _ = writeln!(
        output,
        "GPA {}/20 ({})",
        format_grade(result.total_gpa),
        status_label(result.is_passing)
    );
    let _ = writeln!(output, "Total coefficient: {}", result.total_coefficients);

    if result.course_results.is_empty() {
        let _ = writeln!(output, "No courses entered.");
        return output;
    }

    let _ = writeln!(output);
    for course in result.course_results.iter() {
        let _ = writeln!(
            output,
            "- {} (coef {}) {} {}",
            display_name(course),
            course.coefficient,
            format_grade(course.final_grade),
            status_label(course.is_passing)
        );
    }

    output
}

pub fn render_markdown(title: Option<&str>, generated_on: NaiveDate, result: &GpaResult) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "# {}", title.unwrap_or("GPA Report"));
    let _ = writeln!(output, "Generated on {}", generated_on);
    let _ = writeln!(output);
    let _ = writeln!(output, "## Overall");
    let _ = writeln!(
        output,
        "- GPA: **{}/20** ({})",
        format_grade(result.total_gpa),
        status_label(result.is_passing)
    );
    let _ = writeln!(output, "- Total coefficient: {}", result.total_coefficients);

    let _ = writeln!(output);
    let _ = writeln!(output, "## Course Results");

    if result.course_results.is_empty() {
        let _ = writeln!(output, "No courses entered.");
        return output;
    }

    let _ = writeln!(output, "| Course | Coefficient | Grade | Status |");
    let _ = writeln!(output, "|---|---|---|---|");
    for course in result.course_results.iter() {
        let _ = writeln!(
            output,
            "| {} | {} | {} | {} |",
            display_name(course),
            course.coefficient,
            format_grade(course.final_grade),
            status_label(course.is_passing)
        );
    }

    let failing = result.course_results.iter().filter(|c| !c.is_passing).count();
    if failing > 0 {
        let _ = writeln!(output);
        let _ = writeln!(output, "{failing} of {} courses below 10/20.", result.course_results.len());
    }

    output
}

pub fn render_json(result: &GpaResult) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> GpaResult {
        GpaResult {
            total_gpa: 13.8,
            total_coefficients: 5.0,
            is_passing: true,
            course_results: vec![
                CourseResult {
                    id: "a".to_string(),
                    name: "Algebra".to_string(),
                    coefficient: 3.0,
                    final_grade: 14.6,
                    is_passing: true,
                },
                CourseResult {
                    id: "b".to_string(),
                    name: String::new(),
                    coefficient: 2.0,
                    final_grade: 9.4,
                    is_passing: false,
                },
            ],
        }
    }

    #[test]
    fn grades_round_to_two_decimals() {
        assert_eq!(format_grade(13.8), "13.80");
        assert_eq!(format_grade(12.345678), "12.35");
        assert_eq!(format_grade(0.0), "0.00");
    }

    #[test]
    fn text_report_lists_courses_in_order() {
        let text = render_text(&sample_result());
        assert!(text.starts_with("GPA 13.80/20 (Passing)"));
        assert!(text.contains("Total coefficient: 5"));
        let algebra = text.find("- Algebra (coef 3) 14.60 Passing").unwrap();
        let unnamed = text.find("- Unnamed Course (coef 2) 9.40 Not Passing").unwrap();
        assert!(algebra < unnamed);
    }

    #[test]
    fn text_report_handles_empty_result() {
        let text = render_text(&GpaResult::empty());
        assert!(text.contains("GPA 0.00/20 (Not Passing)"));
        assert!(text.contains("No courses entered."));
    }

    #[test]
    fn markdown_report_has_table_and_failing_count() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        let markdown = render_markdown(Some("Semester 1"), date, &sample_result());
        assert!(markdown.starts_with("# Semester 1\nGenerated on 2026-01-15"));
        assert!(markdown.contains("- GPA: **13.80/20** (Passing)"));
        assert!(markdown.contains("| Algebra | 3 | 14.60 | Passing |"));
        assert!(markdown.contains("| Unnamed Course | 2 | 9.40 | Not Passing |"));
        assert!(markdown.contains("1 of 2 courses below 10/20."));
    }

    #[test]
    fn json_report_keeps_full_precision() {
        let mut result = sample_result();
        result.total_gpa = 13.799999999999999;
        let json = render_json(&result).unwrap();
        assert!(json.contains("\"totalGpa\": 13.799999999999999"));
        assert!(json.contains("\"finalGrade\": 9.4"));

        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["courseResults"][1]["isPassing"], false);
    }
}
