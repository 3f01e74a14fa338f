//! Handlers CRM: repassam a requisição ao `CrmClient` com o token do chamador

use axum::{
    extract::{Path, Query, State},
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    response::Json,
};
use hubspot::crm::{AssociationInput, CrmObject, ObjectQuery, Owner};
use serde::Deserialize;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::time::Instant;

use crate::utils::logging::*;
use crate::utils::{AppError, AppResult};
use crate::AppState;

/// Query string de `GET /crm/objects/:type/:id`
#[derive(Debug, Default, Deserialize)]
pub struct ObjectQueryParams {
    #[serde(rename = "idProperty")]
    pub id_property: Option<String>,
    pub properties: Option<String>,
    pub associations: Option<String>,
}

impl ObjectQueryParams {
    pub fn into_query(self) -> ObjectQuery {
        ObjectQuery {
            id_property: self.id_property,
            properties: self.properties.as_deref().map(split_list),
            associations: self.associations.as_deref().map(split_list),
        }
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Default, Deserialize)]
pub struct IdPropertyParams {
    #[serde(rename = "idProperty")]
    pub id_property: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateObjectBody {
    pub properties: HashMap<String, Value>,
    #[serde(default)]
    pub associations: Vec<AssociationInput>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateObjectBody {
    pub properties: HashMap<String, Value>,
}

#[derive(Debug, Deserialize)]
pub struct BatchReadBody {
    pub ids: Vec<String>,
    #[serde(default)]
    pub properties: Vec<String>,
}

/// Extrai o token do header `Authorization: Bearer <token>`
///
/// Ausente é válido (modo token estático); formato inválido é erro 400.
pub fn bearer_token(headers: &HeaderMap) -> AppResult<Option<String>> {
    let Some(value) = headers.get(AUTHORIZATION) else {
        return Ok(None);
    };

    let value = value
        .to_str()
        .map_err(|_| AppError::ValidationError("Authorization header is not valid UTF-8".to_string()))?;

    match value.split_once(' ') {
        Some((scheme, token)) if scheme.eq_ignore_ascii_case("bearer") && !token.trim().is_empty() => {
            Ok(Some(token.trim().to_string()))
        }
        _ => {
            log_validation_error("Authorization", "expected 'Bearer <token>'");
            Err(AppError::ValidationError(
                "Authorization header must be 'Bearer <token>'".to_string(),
            ))
        }
    }
}

/// GET /crm/objects/:object_type/:id
pub async fn get_object(
    State(state): State<Arc<AppState>>,
    Path((object_type, id)): Path<(String, String)>,
    Query(params): Query<ObjectQueryParams>,
    headers: HeaderMap,
) -> AppResult<Json<CrmObject>> {
    let token = bearer_token(&headers)?;

    let object = state
        .crm
        .find_object(token.as_deref(), &object_type, &id, &params.into_query())
        .await?;

    log_crm_object_fetched(&object_type, object.id());
    Ok(Json(object))
}

/// PATCH /crm/objects/:object_type/:id
pub async fn update_object(
    State(state): State<Arc<AppState>>,
    Path((object_type, id)): Path<(String, String)>,
    Query(params): Query<IdPropertyParams>,
    headers: HeaderMap,
    Json(body): Json<UpdateObjectBody>,
) -> AppResult<Json<Value>> {
    let token = bearer_token(&headers)?;

    state
        .crm
        .update_object(
            token.as_deref(),
            &object_type,
            &id,
            params.id_property.as_deref(),
            &body.properties,
        )
        .await?;

    log_crm_object_written("updated", &object_type, &id);
    Ok(Json(json!({
        "status": "updated",
        "object_type": object_type,
        "id": id
    })))
}

/// POST /crm/objects/:object_type
pub async fn create_object(
    State(state): State<Arc<AppState>>,
    Path(object_type): Path<String>,
    headers: HeaderMap,
    Json(body): Json<CreateObjectBody>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let token = bearer_token(&headers)?;

    state
        .crm
        .create_object(token.as_deref(), &object_type, &body.properties, &body.associations)
        .await?;

    log_crm_object_written("created", &object_type, "-");
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "status": "created",
            "object_type": object_type
        })),
    ))
}

/// POST /crm/objects/:object_type/batch/read
pub async fn batch_read_objects(
    State(state): State<Arc<AppState>>,
    Path(object_type): Path<String>,
    headers: HeaderMap,
    Json(body): Json<BatchReadBody>,
) -> AppResult<Json<Value>> {
    let start_time = Instant::now();
    let endpoint = format!("/crm/objects/{}/batch/read", object_type);
    log_request_received(&endpoint, "POST");

    let token = bearer_token(&headers)?;
    let objects = state
        .crm
        .find_batch(token.as_deref(), &object_type, &body.ids, &body.properties)
        .await?;

    log_request_processed(&endpoint, 200, start_time.elapsed().as_millis() as u64);
    Ok(Json(json!({
        "count": objects.len(),
        "results": objects
    })))
}

/// GET /crm/owners/:owner_id
pub async fn get_owner(
    State(state): State<Arc<AppState>>,
    Path(owner_id): Path<String>,
    headers: HeaderMap,
) -> AppResult<Json<Owner>> {
    let token = bearer_token(&headers)?;
    let owner = state.crm.find_object_owner(token.as_deref(), &owner_id).await?;
    Ok(Json(owner))
}
