use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{Course, CourseType};

/// Calculator export: the course list plus optional template metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDocument {
    pub courses: Vec<Course>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_description: Option<String>,
}

pub fn load_courses(path: &Path) -> anyhow::Result<Vec<Course>> {
    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

    let courses = if is_csv {
        let reader = csv::Reader::from_path(path)
            .with_context(|| format!("failed to open {}", path.display()))?;
        read_csv(reader)?
    } else {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        parse_courses_json(&raw).with_context(|| format!("invalid course file {}", path.display()))?
    };

    tracing::info!(count = courses.len(), path = %path.display(), "loaded courses");
    Ok(courses)
}

/// Accepts a bare course array or an exported [`CourseDocument`].
pub fn parse_courses_json(raw: &str) -> anyhow::Result<Vec<Course>> {
    let value: serde_json::Value = serde_json::from_str(raw).context("malformed JSON")?;

    if value.is_array() {
        Ok(serde_json::from_value(value)?)
    } else if value.get("courses").is_some() {
        let document: CourseDocument = serde_json::from_value(value)?;
        Ok(document.courses)
    } else {
        anyhow::bail!("expected a course array or an object with a `courses` field")
    }
}

pub fn export_document(
    courses: &[Course],
    template_name: Option<&str>,
    template_description: Option<&str>,
) -> anyhow::Result<String> {
    let document = CourseDocument {
        courses: courses.to_vec(),
        template_name: template_name.map(str::to_string),
        template_description: template_description.map(str::to_string),
    };
    Ok(serde_json::to_string_pretty(&document)?)
}

pub fn read_csv<R: std::io::Read>(mut reader: csv::Reader<R>) -> anyhow::Result<Vec<Course>> {
    #[derive(serde::Deserialize)]
    struct CsvRow {
        id: Option<String>,
        #[serde(default)]
        name: String,
        coefficient: f64,
        course_type: String,
        exam_grade: Option<f64>,
        td_grade: Option<f64>,
        tp_grade: Option<f64>,
    }

    let mut courses = Vec::new();

    for (index, result) in reader.deserialize::<CsvRow>().enumerate() {
        let row_number = index + 1;
        let row = result.with_context(|| format!("invalid CSV row {row_number}"))?;
        let course_type: CourseType = row
            .course_type
            .trim()
            .parse()
            .with_context(|| format!("invalid CSV row {row_number}"))?;

        let id = row
            .id
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        courses.push(Course {
            id,
            name: row.name,
            coefficient: row.coefficient,
            course_type,
            exam_grade: row.exam_grade,
            td_grade: row.td_grade,
            tp_grade: row.tp_grade,
        });
    }

    Ok(courses)
}
