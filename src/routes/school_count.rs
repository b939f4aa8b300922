use crate::{
    data::student::SchoolCount,
    error::ApiResult,
    state::ApiState,
};
use axum::{Json, extract::State};

pub async fn get_school_count(State(state): State<ApiState>) -> ApiResult<Json<Vec<SchoolCount>>> {
    info!("Processed a request in get_school_count");

    let counts = state.count_by_school().await?;
    Ok(Json(counts))
}
