//! Domain layer constants
//!
//! Contains constants that are part of the domain logic and are used by
//! the application layer. Transport-specific values (routes, headers) are
//! not defined here.

// ============================================================================
// IDENTITY CONSTANTS
// ============================================================================

/// Identity carried by an aggregate that has not been persisted yet
pub const UNSAVED_ID: i32 = 0;

// ============================================================================
// EXISTENCE PROBE CONSTANTS
// ============================================================================

/// Page number used by existence probes
pub const PROBE_PAGE_NUMBER: u32 = 1;

/// Page size used by existence probes; only `total_count`/`data` emptiness is read
pub const PROBE_PAGE_SIZE: u32 = 1;

// ============================================================================
// FAILURE STATUS CODES
// ============================================================================

/// Status code for missing entities
pub const STATUS_DATA_NOT_FOUND: u16 = 404;

/// Status code for business rule violations
pub const STATUS_BUSINESS: u16 = 405;

/// Status code for uniqueness violations
pub const STATUS_DATA_DUPLICATED: u16 = 409;

/// Status code for rule set violations
pub const STATUS_DATA_NOT_VALID: u16 = 422;

/// Status code for unexpected failures
pub const STATUS_INTERNAL: u16 = 500;

// ============================================================================
// FAILURE MESSAGES
// ============================================================================

/// Default message for [`crate::Error::NotFound`]
pub const MSG_DATA_NOT_FOUND: &str = "The data was not found";

/// Default message for [`crate::Error::Duplicate`]
pub const MSG_DATA_DUPLICATED: &str = "The data was duplicated";

/// Default message for [`crate::Error::NotValid`]
pub const MSG_DATA_NOT_VALID: &str = "The data not valid";

pub const MSG_SCHOOL_HAS_CLASSES: &str = "School has classes";
pub const MSG_SCHOOL_HAS_TEACHERS: &str = "School has teachers";
pub const MSG_SCHOOL_HAS_STUDENTS: &str = "School has students";
pub const MSG_CLASS_HAS_TEACHERS: &str = "Class has teachers";
pub const MSG_CLASS_HAS_STUDENTS: &str = "Class has students";
pub const MSG_TEACHER_HAS_CLASSROOMS: &str = "Teacher has classrooms";
pub const MSG_STUDENT_CLASS_NOT_FOUND: &str = "Class is not found";
pub const MSG_TEACHER_CLASS_NOT_FOUND: &str = "Class doesn't found";
pub const MSG_TEACHER_NOT_ASSIGNED: &str = "Teacher is not assigned to this class";
