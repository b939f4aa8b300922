use crate::error::ApiResult;
use async_trait::async_trait;
use student::{SchoolCount, Student, StudentForm};

pub mod memory;
pub mod postgres;
pub mod student;

/// The persistence collaborator behind every handler.
///
/// Writes are committed before the call returns. Lookups hand back `None` rather than
/// erroring when the id is unknown, so callers decide what absence means.
#[async_trait]
pub trait StudentStore: Send + Sync + std::fmt::Debug {
    async fn find_all(&self) -> ApiResult<Vec<Student>>;
    async fn find_by_id(&self, id: i32) -> ApiResult<Option<Student>>;
    async fn add(&self, to_be_added: StudentForm) -> ApiResult<Student>;
    async fn update(&self, id: i32, replacement: StudentForm) -> ApiResult<Option<Student>>;
    async fn remove(&self, id: i32) -> ApiResult<Option<Student>>;
    async fn count_by_school(&self) -> ApiResult<Vec<SchoolCount>>;

    async fn close(&self) {}
}
