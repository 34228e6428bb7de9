use uuid::Uuid;

use crate::models::{Course, CourseType};

/// Source of fresh course identifiers.
pub trait IdSource {
    fn next_id(&mut self) -> String;
}

/// Random v4 UUIDs.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIds;

impl IdSource for UuidIds {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic `prefix-1`, `prefix-2`, ... identifiers.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> String {
        let id = format!("{}-{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

/// Builds blank courses for an "add course" action.
#[derive(Debug, Default)]
pub struct CourseFactory<I: IdSource = UuidIds> {
    ids: I,
}

impl<I: IdSource> CourseFactory<I> {
    pub fn new(ids: I) -> Self {
        Self { ids }
    }

    /// Unnamed exam-only course with coefficient 1 and no grades entered.
    pub fn blank_course(&mut self) -> Course {
        Course {
            id: self.ids.next_id(),
            name: String::new(),
            coefficient: 1.0,
            course_type: CourseType::Exam,
            exam_grade: None,
            td_grade: None,
            tp_grade: None,
        }
    }
}

pub fn create_blank_course() -> Course {
    CourseFactory::new(UuidIds).blank_course()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn blank_course_has_defaults() {
        let course = CourseFactory::new(SequentialIds::new("course")).blank_course();
        assert_eq!(course.id, "course-1");
        assert_eq!(course.name, "");
        assert_eq!(course.coefficient, 1.0);
        assert_eq!(course.course_type, CourseType::Exam);
        assert_eq!(course.exam_grade, None);
        assert_eq!(course.td_grade, None);
        assert_eq!(course.tp_grade, None);
    }

    #[test]
    fn sequential_ids_are_deterministic() {
        let mut factory = CourseFactory::new(SequentialIds::new("row"));
        let ids: Vec<String> = (0..3).map(|_| factory.blank_course().id).collect();
        assert_eq!(ids, vec!["row-1", "row-2", "row-3"]);
    }

    #[test]
    fn uuid_ids_do_not_collide() {
        let mut factory = CourseFactory::<UuidIds>::default();
        let ids: HashSet<String> = (0..500).map(|_| factory.blank_course().id).collect();
        assert_eq!(ids.len(), 500);
    }

    #[test]
    fn convenience_constructor_uses_uuids() {
        let course = create_blank_course();
        assert!(Uuid::parse_str(&course.id).is_ok());
        assert_ne!(course.id, create_blank_course().id);
    }
}
