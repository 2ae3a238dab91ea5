//! Entity rule sets
//!
//! Field constraints are declared on the entities with `#[derive(Validate)]`;
//! this module runs them and flattens the result into violations ordered the
//! way the rules are declared. The student enrollment rules depend on two
//! fields at once and are evaluated here.

use crate::entities::{ClassRoom, School, Student, Teacher};
use crate::value_objects::Violation;
use validator::{Validate, ValidationError, ValidationErrors};

const SCHOOL_FIELDS: &[&str] = &["name"];
const CLASSROOM_FIELDS: &[&str] = &["school_id", "name"];
const STUDENT_FIELDS: &[&str] = &["name"];
const TEACHER_FIELDS: &[&str] = &["name"];

const NOT_BLANK_CODE: &str = "not_blank";

/// Presence rules report before shape rules on the same field
fn rule_rank(code: &str) -> u8 {
    match code {
        "required" | NOT_BLANK_CODE => 0,
        _ => 1,
    }
}

/// School: name required and not blank, 3 to 100 characters
pub fn school_rules(school: &School) -> Vec<Violation> {
    ordered_violations(Validate::validate(school), SCHOOL_FIELDS)
}

/// Classroom: school id greater than 0, name required and not blank, 3 to 50 characters
pub fn classroom_rules(class_room: &ClassRoom) -> Vec<Violation> {
    ordered_violations(Validate::validate(class_room), CLASSROOM_FIELDS)
}

/// Student: name required and not blank, 3 to 100 characters; school and classroom set together
///
/// Each direction of the enrollment rule reports its own violation.
pub fn student_rules(student: &Student) -> Vec<Violation> {
    let mut violations = ordered_violations(Validate::validate(student), STUDENT_FIELDS);

    if student.school_id().is_some() && !is_positive(student.class_room_id()) {
        violations.push(Violation::new(
            "class_room_id",
            "Class room id must be set and greater than 0 when school id is set",
        ));
    }
    if student.class_room_id().is_some() && !is_positive(student.school_id()) {
        violations.push(Violation::new(
            "school_id",
            "School id must be set and greater than 0 when class room id is set",
        ));
    }
    violations
}

/// Teacher: name required and not blank, 3 to 100 characters
pub fn teacher_rules(teacher: &Teacher) -> Vec<Violation> {
    ordered_violations(Validate::validate(teacher), TEACHER_FIELDS)
}

/// Name presence rule: rejects empty and whitespace-only values
pub(crate) fn not_blank(value: &str) -> std::result::Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(NOT_BLANK_CODE));
    }
    Ok(())
}

fn is_positive(value: Option<i32>) -> bool {
    value.is_some_and(|v| v > 0)
}

/// Flatten `validator` output using the declared field order
fn ordered_violations(
    result: std::result::Result<(), ValidationErrors>,
    field_order: &[&str],
) -> Vec<Violation> {
    let Err(errors) = result else {
        return Vec::new();
    };
    let field_errors = errors.field_errors();

    field_order
        .iter()
        .filter_map(|field| field_errors.get(*field).map(|errs| (*field, errs)))
        .flat_map(|(field, errs)| {
            let mut errs: Vec<&ValidationError> = errs.iter().collect();
            errs.sort_by_key(|err| rule_rank(&err.code));
            errs.into_iter().map(move |err| {
                let message = err
                    .message
                    .as_ref()
                    .map_or_else(|| err.code.to_string(), ToString::to_string);
                Violation::new(field, message)
            })
        })
        .collect()
}
