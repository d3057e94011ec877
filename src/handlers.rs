use axum::{
    Json,
    extract::{Path, Query, State},
};
use axum_extra::extract::WithRejection;
use serde_json::Value;
use tracing::info;

use crate::{
    error::ServiceError,
    guard::{ValidId, require_valid_parameter},
    models::{IdQuery, IdResponse, PingQuery, PingResponse, ValidationResponse},
    state::AppState,
};

pub async fn get_by_id(ValidId(id): ValidId) -> Json<IdResponse> {
    info!(%id, "Identifier accepted from path");
    Json(IdResponse { id: id.into_inner() })
}

pub async fn get_by_query(
    WithRejection(Query(query), _): WithRejection<Query<IdQuery>, ServiceError>,
) -> Result<Json<IdResponse>, ServiceError> {
    let id = require_valid_parameter(query.id.as_deref())?;
    info!(%id, "Identifier accepted from query");
    Ok(Json(IdResponse { id: id.into_inner() }))
}

pub async fn validate_dto(
    State(state): State<AppState>,
    WithRejection(Path(schema_name), _): WithRejection<Path<String>, ServiceError>,
    WithRejection(Json(body), _): WithRejection<Json<Value>, ServiceError>,
) -> Result<Json<ValidationResponse>, ServiceError> {
    let schema = state
        .schemas
        .get(&schema_name)
        .ok_or_else(|| ServiceError::UnknownSchema(schema_name.clone()))?;

    schema.validate(&body)?;

    info!(schema = %schema.name(), rules = schema.rules().len(), "Input object accepted");
    Ok(Json(ValidationResponse {
        valid: true,
        schema: schema_name,
    }))
}

pub async fn ping(Query(query): Query<PingQuery>) -> Json<PingResponse> {
    let message = query.message.unwrap_or_else(|| "pong".to_string());

    Json(PingResponse {
        ok: true,
        message,
    })
}
