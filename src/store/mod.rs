//! Student document store.
//!
//! The durable store is an external collaborator; this module defines the
//! repository seam the engine works against and an in-memory
//! implementation used by the binary and the test suites. Every read goes
//! to the store — the engine holds no cache of its own.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::{EngineError, EngineResult};
use crate::models::{AuditRecord, Student};

/// Per-student document repository.
///
/// The store's per-document write atomicity is the only serialization
/// point for concurrent writes to the same student; the engine layers a
/// version stamp on results for callers that want stale-write detection.
pub trait StudentStore: Send + Sync {
    /// Fetches a student document by id, if it exists.
    fn get(&self, student_id: &str) -> EngineResult<Option<Student>>;

    /// Fetches the student document linked to a user account, if any.
    fn find_by_user(&self, user_id: &str) -> EngineResult<Option<Student>>;

    /// Writes a student document, replacing any existing document with
    /// the same id.
    fn put(&self, student: Student) -> EngineResult<()>;

    /// Appends an entry to the audit trail.
    fn record_audit(&self, record: AuditRecord) -> EngineResult<()>;
}

/// An in-memory [`StudentStore`] backed by a `RwLock`ed map.
///
/// # Example
///
/// ```
/// use results_engine::models::{SchoolLevel, Student};
/// use results_engine::store::{InMemoryStudentStore, StudentStore};
///
/// let store = InMemoryStudentStore::new();
/// store.put(Student::new("STU-0042", "Ada Obi", "JSS 2A", SchoolLevel::Secondary)).unwrap();
/// assert!(store.get("STU-0042").unwrap().is_some());
/// assert!(store.get("STU-9999").unwrap().is_none());
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStudentStore {
    students: RwLock<HashMap<String, Student>>,
    audit: RwLock<Vec<AuditRecord>>,
}

impl InMemoryStudentStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the audit trail, oldest first.
    pub fn audit_trail(&self) -> Vec<AuditRecord> {
        self.audit
            .read()
            .map(|trail| trail.clone())
            .unwrap_or_default()
    }
}

impl StudentStore for InMemoryStudentStore {
    fn get(&self, student_id: &str) -> EngineResult<Option<Student>> {
        let students = self.students.read().map_err(|_| EngineError::Store {
            message: "student map lock poisoned".to_string(),
        })?;
        Ok(students.get(student_id).cloned())
    }

    fn find_by_user(&self, user_id: &str) -> EngineResult<Option<Student>> {
        let students = self.students.read().map_err(|_| EngineError::Store {
            message: "student map lock poisoned".to_string(),
        })?;
        Ok(students
            .values()
            .find(|s| s.user_id.as_deref() == Some(user_id))
            .cloned())
    }

    fn put(&self, student: Student) -> EngineResult<()> {
        let mut students = self.students.write().map_err(|_| EngineError::Store {
            message: "student map lock poisoned".to_string(),
        })?;
        students.insert(student.student_id.clone(), student);
        Ok(())
    }

    fn record_audit(&self, record: AuditRecord) -> EngineResult<()> {
        let mut audit = self.audit.write().map_err(|_| EngineError::Store {
            message: "audit trail lock poisoned".to_string(),
        })?;
        audit.push(record);
        Ok(())
    }
}
