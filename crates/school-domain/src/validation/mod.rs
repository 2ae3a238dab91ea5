//! Validation Engine
//!
//! Entity kinds are closed, so rule set dispatch is a plain `match` over
//! [`ValidationTarget`] instead of a validator object per entity. Rule sets
//! are re-evaluated on every call because aggregates are mutable.
//!
//! ```text
//! aggregate → ValidationTarget::from(&self) → rules::*_rules → Vec<Violation>
//!                                                  ↓ (non-empty, throw)
//!                                           Error::NotValid
//! ```

/// Per-entity rule sets
pub mod rules;

use crate::entities::{ClassRoom, School, Student, Teacher};
use crate::error::{Error, Result};
use crate::value_objects::Violation;
use std::sync::Arc;

/// An entity that carries a rule set
#[derive(Debug, Clone, Copy)]
pub enum ValidationTarget<'a> {
    /// School aggregate root
    School(&'a School),
    /// Classroom owned by a school
    ClassRoom(&'a ClassRoom),
    /// Student aggregate root
    Student(&'a Student),
    /// Teacher aggregate root
    Teacher(&'a Teacher),
}

impl ValidationTarget<'_> {
    /// Run the target's rule set
    pub fn violations(&self) -> Vec<Violation> {
        match self {
            Self::School(school) => rules::school_rules(school),
            Self::ClassRoom(class_room) => rules::classroom_rules(class_room),
            Self::Student(student) => rules::student_rules(student),
            Self::Teacher(teacher) => rules::teacher_rules(teacher),
        }
    }

    /// Whether the rule set passes
    pub fn is_valid(&self) -> bool {
        self.violations().is_empty()
    }
}

impl<'a> From<&'a School> for ValidationTarget<'a> {
    fn from(value: &'a School) -> Self {
        Self::School(value)
    }
}

impl<'a> From<&'a ClassRoom> for ValidationTarget<'a> {
    fn from(value: &'a ClassRoom) -> Self {
        Self::ClassRoom(value)
    }
}

impl<'a> From<&'a Student> for ValidationTarget<'a> {
    fn from(value: &'a Student) -> Self {
        Self::Student(value)
    }
}

impl<'a> From<&'a Teacher> for ValidationTarget<'a> {
    fn from(value: &'a Teacher) -> Self {
        Self::Teacher(value)
    }
}

/// Port: rule set evaluation
///
/// # Example
///
/// ```
/// use school_domain::validation::{ValidationEngine, ValidationEngineInterface};
/// use school_domain::School;
///
/// let engine = ValidationEngine::new();
/// let school = School::new(None, Some("ab".to_string()), None);
///
/// let violations = engine.validate(Some((&school).into()), false).unwrap();
/// assert_eq!(violations.len(), 1);
/// assert!(engine.validate(Some((&school).into()), true).is_err());
/// ```
pub trait ValidationEngineInterface: Send + Sync {
    /// Validate `target` against its rule set
    ///
    /// An absent target is skipped and yields no violations. A valid target
    /// yields no violations. An invalid target fails with
    /// [`Error::NotValid`] when `throw_on_failure` is set, otherwise the
    /// ordered violation list is returned.
    fn validate(
        &self,
        target: Option<ValidationTarget<'_>>,
        throw_on_failure: bool,
    ) -> Result<Vec<Violation>>;

    /// Validate and fail on any violation
    fn ensure_valid(&self, target: ValidationTarget<'_>) -> Result<()> {
        self.validate(Some(target), true).map(|_| ())
    }
}

/// Default validation engine
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidationEngine;

impl ValidationEngine {
    /// Create a new validation engine
    pub fn new() -> Self {
        Self
    }
}

impl ValidationEngineInterface for ValidationEngine {
    fn validate(
        &self,
        target: Option<ValidationTarget<'_>>,
        throw_on_failure: bool,
    ) -> Result<Vec<Violation>> {
        let Some(target) = target else {
            return Ok(Vec::new());
        };

        let violations = target.violations();
        if violations.is_empty() || !throw_on_failure {
            return Ok(violations);
        }
        Err(Error::not_valid(violations))
    }
}

/// Shared validation engine for dependency injection
pub type SharedValidationEngine = Arc<dyn ValidationEngineInterface>;
