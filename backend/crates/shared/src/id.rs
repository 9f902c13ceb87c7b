//! Common ID Types
//!
//! Type-safe ID wrappers for domain entities.

use std::fmt;
use std::marker::PhantomData;
use uuid::Uuid;

/// Generic typed ID wrapper
///
/// Usage:
/// ```
/// use kernel::id::{Id, markers};
/// type ClassroomId = Id<markers::Classroom>;
/// ```
pub struct Id<T> {
    value: uuid::Uuid,
    _marker: PhantomData<T>,
}

// Manual impls without a `T` bound: markers are trait-less unit structs,
// and derives would demand `T: Clone` etc. that they never satisfy.
impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> std::hash::Hash for Id<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> Id<T> {
    /// Create a new random ID (UUID v4)
    pub fn new() -> Self {
        Self {
            value: Uuid::new_v4(),
            _marker: PhantomData,
        }
    }

    /// Create from an existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self {
            value: uuid,
            _marker: PhantomData,
        }
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.value
    }

    /// Convert to UUID
    pub fn into_uuid(self) -> Uuid {
        self.value
    }
}

impl<T> Default for Id<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<Uuid> for Id<T> {
    fn from(uuid: Uuid) -> Self {
        Self::from_uuid(uuid)
    }
}

impl<T> From<Id<T>> for Uuid {
    fn from(id: Id<T>) -> Self {
        id.value
    }
}

/// Marker types for different entity IDs
pub mod markers {
    /// Marker for Classroom IDs
    pub struct Classroom;

    /// Marker for StudentInfo (enrollment) IDs
    pub struct StudentInfo;

    /// Marker for pending StudentRegistration IDs
    pub struct Registration;

    /// Marker for FileRecord IDs
    pub struct FileRecord;
}

/// Type aliases for common IDs
pub type ClassroomId = Id<markers::Classroom>;
pub type StudentInfoId = Id<markers::StudentInfo>;
pub type RegistrationId = Id<markers::Registration>;
pub type FileRecordId = Id<markers::FileRecord>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_type_safety() {
        let classroom_id: ClassroomId = Id::new();
        let file_id: FileRecordId = Id::new();

        // These are different types, cannot be mixed
        let _c: Uuid = classroom_id.into_uuid();
        let _f: Uuid = file_id.into_uuid();
    }

    #[test]
    fn test_id_from_uuid() {
        let uuid = Uuid::new_v4();
        let id: ClassroomId = Id::from_uuid(uuid);
        assert_eq!(id.as_uuid(), &uuid);
    }

    #[test]
    fn test_id_is_copy_eq_hash_regardless_of_marker() {
        // Markers implement nothing themselves; Id must not inherit bounds
        // from them.
        struct Bare;
        let id: Id<Bare> = Id::new();
        let copied = id;
        assert_eq!(id, copied);
        assert_eq!(id.clone(), copied);

        let mut set = std::collections::HashSet::new();
        set.insert(id);
        assert!(set.contains(&copied));
    }
}
