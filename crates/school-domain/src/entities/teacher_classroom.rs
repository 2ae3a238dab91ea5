use crate::constants::UNSAVED_ID;

/// One teacher's assignment to one classroom within one school
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeacherClassroom {
    id: i32,
    teacher_id: i32,
    classroom_id: i32,
    school_id: i32,
}

impl TeacherClassroom {
    /// Create an assignment; `None` id means not yet persisted
    pub fn new(id: Option<i32>, teacher_id: i32, classroom_id: i32, school_id: i32) -> Self {
        Self {
            id: id.unwrap_or(UNSAVED_ID),
            teacher_id,
            classroom_id,
            school_id,
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn teacher_id(&self) -> i32 {
        self.teacher_id
    }

    pub fn classroom_id(&self) -> i32 {
        self.classroom_id
    }

    pub fn school_id(&self) -> i32 {
        self.school_id
    }

    pub(crate) fn assign_identity(&mut self, id: i32, teacher_id: i32) {
        self.id = id;
        self.teacher_id = teacher_id;
    }
}
