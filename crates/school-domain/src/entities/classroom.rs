use crate::constants::UNSAVED_ID;
use crate::validation::rules::not_blank;
use validator::Validate;

/// Classroom owned by exactly one school
///
/// `school_id` is a lookup key back to the owning [`crate::School`], not an
/// ownership link.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct ClassRoom {
    id: i32,

    #[validate(range(min = 1, message = "School id must be greater than 0"))]
    school_id: i32,

    #[validate(
        required(message = "Name must not be empty"),
        custom(function = "not_blank", message = "Name must not be empty"),
        length(min = 3, max = 50, message = "Name must be between 3 and 50 characters")
    )]
    name: Option<String>,
}

impl ClassRoom {
    /// Create a classroom; `None` id means not yet persisted
    pub fn new(id: Option<i32>, name: Option<String>, school_id: Option<i32>) -> Self {
        Self {
            id: id.unwrap_or(UNSAVED_ID),
            school_id: school_id.unwrap_or(UNSAVED_ID),
            name,
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn school_id(&self) -> i32 {
        self.school_id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: Option<String>) {
        if self.name == name {
            return;
        }
        self.name = name;
    }

    /// Persistence hook: record the identity assigned by the store
    pub fn assign_id(&mut self, id: i32) {
        self.id = id;
    }
}
