use crate::{
    data::{
        StudentStore,
        student::{SchoolCount, Student, StudentForm},
    },
    error::ApiResult,
};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

/// Keeps students in process memory. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryStudentStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    students: BTreeMap<i32, Student>,
    last_id: i32,
}

impl MemoryStudentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StudentStore for MemoryStudentStore {
    async fn find_all(&self) -> ApiResult<Vec<Student>> {
        Ok(self.inner.read().await.students.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> ApiResult<Option<Student>> {
        Ok(self.inner.read().await.students.get(&id).cloned())
    }

    async fn add(&self, to_be_added: StudentForm) -> ApiResult<Student> {
        let mut inner = self.inner.write().await;
        // ids only ever go up, so a deleted id is never handed out again
        inner.last_id += 1;
        let student = Student::from_form(inner.last_id, to_be_added);
        inner.students.insert(student.id, student.clone());
        Ok(student)
    }

    async fn update(&self, id: i32, replacement: StudentForm) -> ApiResult<Option<Student>> {
        let mut inner = self.inner.write().await;
        Ok(inner.students.get_mut(&id).map(|student| {
            student.apply(replacement);
            student.clone()
        }))
    }

    async fn remove(&self, id: i32) -> ApiResult<Option<Student>> {
        Ok(self.inner.write().await.students.remove(&id))
    }

    async fn count_by_school(&self) -> ApiResult<Vec<SchoolCount>> {
        let inner = self.inner.read().await;

        let mut counts: BTreeMap<&str, i64> = BTreeMap::new();
        for student in inner.students.values() {
            *counts.entry(student.school.as_str()).or_default() += 1;
        }

        Ok(counts
            .into_iter()
            .map(|(school, student_count)| SchoolCount {
                school: school.to_string(),
                student_count,
            })
            .collect())
    }
}
