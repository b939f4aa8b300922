use crate::{
    data::student::{Student, StudentForm},
    error::{
        ApiResult, InvalidStudentBodySnafu, MissingStudentSnafu, ParseStudentIdSnafu,
        ReadBodySnafu,
    },
    state::ApiState,
};
use axum::{
    Json,
    body::Bytes,
    extract::{Path, State, rejection::BytesRejection},
};
use serde_json::{Map, Value};
use snafu::{OptionExt, ResultExt};

// path segment and body are parsed by hand so bad input gets the same JSON error shape as
// every other failure, not axum's plain-text rejections
fn parse_id(raw: String) -> ApiResult<i32> {
    raw.parse().context(ParseStudentIdSnafu { original: raw })
}

// only a JSON object is a student, arrays would otherwise fill the fields positionally
fn parse_form(body: Result<Bytes, BytesRejection>) -> ApiResult<StudentForm> {
    let body = body.context(ReadBodySnafu)?;
    let object: Map<String, Value> =
        serde_json::from_slice(&body).context(InvalidStudentBodySnafu)?;
    serde_json::from_value(Value::Object(object)).context(InvalidStudentBodySnafu)
}

pub async fn get_students(State(state): State<ApiState>) -> ApiResult<Json<Vec<Student>>> {
    info!("Processed a request in get_students");

    let students = state.find_all().await?;
    Ok(Json(students))
}

/// An unknown id is not an error here: the body is `null` and the status stays 200.
pub async fn get_student_by_id(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Option<Student>>> {
    info!(%id, "Processed a request in get_student_by_id");

    let id = parse_id(id)?;
    let student = state.find_by_id(id).await?;
    if student.is_none() {
        debug!(id, "No student found");
    }
    Ok(Json(student))
}

pub async fn post_student(
    State(state): State<ApiState>,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<Json<Student>> {
    info!("Processed a request in post_student");

    let form = parse_form(body)?;
    let student = state.add(form).await?;
    debug!(id = student.id, "Added student");
    Ok(Json(student))
}

pub async fn put_student(
    State(state): State<ApiState>,
    Path(id): Path<String>,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<Json<Student>> {
    info!(%id, "Processed a request in put_student");

    let id = parse_id(id)?;
    let form = parse_form(body)?;
    let student = state
        .update(id, form)
        .await?
        .context(MissingStudentSnafu { id })?;
    Ok(Json(student))
}

pub async fn delete_student(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Student>> {
    info!(%id, "Processed a request in delete_student");

    let id = parse_id(id)?;
    let student = state
        .remove(id)
        .await?
        .context(MissingStudentSnafu { id })?;
    Ok(Json(student))
}
