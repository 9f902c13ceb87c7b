//! Classroom Entity

use kernel::id::ClassroomId;
use uuid::Uuid;

use crate::domain::value_object::class_session::ClassSession;

/// Classroom as seen by the registration flow
#[derive(Debug, Clone)]
pub struct Classroom {
    pub classroom_id: ClassroomId,
    /// Owning teacher's user id
    pub teacher_id: Uuid,
    /// Join code students register against
    pub class_code: String,
    pub name: String,
    pub session: ClassSession,
    pub school_year: String,
    /// Hard enrollment cap
    pub max_students: i32,
    pub archived: bool,
}

impl Classroom {
    /// Archived classrooms do not accept registrations
    pub fn is_open(&self) -> bool {
        !self.archived
    }

    /// Whether one more student fits under the cap
    pub fn has_room(&self, enrolled: i64) -> bool {
        enrolled < i64::from(self.max_students)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classroom(max_students: i32, archived: bool) -> Classroom {
        Classroom {
            classroom_id: ClassroomId::new(),
            teacher_id: Uuid::new_v4(),
            class_code: "MATH-7A".to_string(),
            name: "Mathematics 7".to_string(),
            session: ClassSession::Morning,
            school_year: "2025-2026".to_string(),
            max_students,
            archived,
        }
    }

    #[test]
    fn test_capacity_is_strict() {
        let room = classroom(40, false);
        assert!(room.has_room(39));
        assert!(!room.has_room(40));
        assert!(!room.has_room(41));
    }

    #[test]
    fn test_archived_is_closed() {
        assert!(classroom(40, true).is_open() == false);
        assert!(classroom(40, false).is_open());
    }
}
