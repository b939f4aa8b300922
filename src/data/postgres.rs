use crate::{
    data::{
        StudentStore,
        student::{SchoolCount, Student, StudentForm},
    },
    error::{ApiResult, CommitTransactionSnafu, GetDatabaseConnectionSnafu, MakeQuerySnafu},
};
use async_trait::async_trait;
use snafu::ResultExt;
use sqlx::{Pool, Postgres, Transaction};

#[derive(Clone, Debug)]
pub struct PostgresStudentStore {
    pool: Pool<Postgres>,
}

impl PostgresStudentStore {
    pub const fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    async fn get_transaction(&self) -> ApiResult<Transaction<'static, Postgres>> {
        self.pool.begin().await.context(GetDatabaseConnectionSnafu)
    }

    async fn lock_by_id(
        transaction: &mut Transaction<'static, Postgres>,
        id: i32,
    ) -> ApiResult<Option<Student>> {
        sqlx::query_as::<_, Student>(
            "SELECT id, first_name, last_name, school FROM public.students WHERE id = $1 FOR UPDATE",
        )
        .bind(id)
        .fetch_optional(&mut **transaction)
        .await
        .context(MakeQuerySnafu)
    }
}

#[async_trait]
impl StudentStore for PostgresStudentStore {
    async fn find_all(&self) -> ApiResult<Vec<Student>> {
        sqlx::query_as::<_, Student>(
            "SELECT id, first_name, last_name, school FROM public.students ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .context(MakeQuerySnafu)
    }

    async fn find_by_id(&self, id: i32) -> ApiResult<Option<Student>> {
        sqlx::query_as::<_, Student>(
            "SELECT id, first_name, last_name, school FROM public.students WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context(MakeQuerySnafu)
    }

    async fn add(&self, to_be_added: StudentForm) -> ApiResult<Student> {
        let StudentForm {
            first_name,
            last_name,
            school,
        } = to_be_added;

        sqlx::query_as::<_, Student>(
            "INSERT INTO public.students (first_name, last_name, school) VALUES ($1, $2, $3) RETURNING id, first_name, last_name, school",
        )
        .bind(first_name)
        .bind(last_name)
        .bind(school)
        .fetch_one(&self.pool)
        .await
        .context(MakeQuerySnafu)
    }

    async fn update(&self, id: i32, replacement: StudentForm) -> ApiResult<Option<Student>> {
        let mut transaction = self.get_transaction().await?;

        let Some(mut student) = Self::lock_by_id(&mut transaction, id).await? else {
            // dropping the transaction rolls it back
            return Ok(None);
        };
        student.apply(replacement);

        sqlx::query(
            "UPDATE public.students SET first_name = $2, last_name = $3, school = $4 WHERE id = $1",
        )
        .bind(student.id)
        .bind(&student.first_name)
        .bind(&student.last_name)
        .bind(&student.school)
        .execute(&mut *transaction)
        .await
        .context(MakeQuerySnafu)?;

        transaction.commit().await.context(CommitTransactionSnafu)?;
        Ok(Some(student))
    }

    async fn remove(&self, id: i32) -> ApiResult<Option<Student>> {
        let mut transaction = self.get_transaction().await?;

        let Some(student) = Self::lock_by_id(&mut transaction, id).await? else {
            return Ok(None);
        };

        sqlx::query("DELETE FROM public.students WHERE id = $1")
            .bind(id)
            .execute(&mut *transaction)
            .await
            .context(MakeQuerySnafu)?;

        transaction.commit().await.context(CommitTransactionSnafu)?;
        Ok(Some(student))
    }

    async fn count_by_school(&self) -> ApiResult<Vec<SchoolCount>> {
        sqlx::query_as::<_, SchoolCount>(
            "SELECT school, COUNT(*) AS student_count FROM public.students GROUP BY school ORDER BY school",
        )
        .fetch_all(&self.pool)
        .await
        .context(MakeQuerySnafu)
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
