//! Claims handlers

use axum::{extract::State, http::StatusCode, Json};

use core_kernel::ClaimId;
use domain_claims::SearchScope;

use crate::dto::claims::*;
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::{error::ApiError, AppState};

/// Lists active claims
pub async fn list_active_claims(
    State(state): State<AppState>,
) -> Result<Json<Vec<ClaimResponse>>, ApiError> {
    let claims = state.service.get_all_active_claims().await?;
    Ok(Json(claim_list(claims)))
}

/// Lists active claims flagged as fraudulent
pub async fn list_fraudulent_claims(
    State(state): State<AppState>,
) -> Result<Json<Vec<ClaimResponse>>, ApiError> {
    let claims = state.service.get_all_fraudulent_claims().await?;
    Ok(Json(claim_list(claims)))
}

/// Lists soft-deleted claims
pub async fn list_deleted_claims(
    State(state): State<AppState>,
) -> Result<Json<Vec<ClaimResponse>>, ApiError> {
    let claims = state.service.get_all_deleted_claims().await?;
    Ok(Json(claim_list(claims)))
}

/// Gets a claim by ID, whether active or deleted
pub async fn get_claim(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<ClaimId>,
) -> Result<Json<ClaimResponse>, ApiError> {
    state
        .service
        .get_claim_by_id(id)
        .await?
        .map(|claim| Json(claim.into()))
        .ok_or(ApiError::NotFound)
}

/// Gets a claim by its business claim number
pub async fn get_claim_by_number(
    State(state): State<AppState>,
    ApiPath(claim_number): ApiPath<String>,
) -> Result<Json<ClaimResponse>, ApiError> {
    state
        .service
        .get_claim_by_claim_number(&claim_number)
        .await?
        .map(|claim| Json(claim.into()))
        .ok_or(ApiError::NotFound)
}

/// Creates a claim under a freshly assigned identity
pub async fn create_claim(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<ClaimRequest>,
) -> Result<Json<ClaimResponse>, ApiError> {
    let saved = state.service.save_claim(request.into_claim()).await?;
    Ok(Json(saved.into()))
}

/// Replaces the claim stored under the path ID
pub async fn update_claim(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<ClaimId>,
    ApiJson(request): ApiJson<ClaimRequest>,
) -> Result<Json<ClaimResponse>, ApiError> {
    state
        .service
        .update_claim(id, request.into_claim())
        .await?
        .map(|claim| Json(claim.into()))
        .ok_or(ApiError::NotFound)
}

/// Soft-deletes a claim; unknown IDs succeed silently
pub async fn delete_claim(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<ClaimId>,
) -> Result<StatusCode, ApiError> {
    state.service.delete_claim(id).await?;
    Ok(StatusCode::OK)
}

/// Restores a soft-deleted claim; unknown IDs succeed silently
pub async fn restore_claim(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<ClaimId>,
) -> Result<StatusCode, ApiError> {
    state.service.restore_claim(id).await?;
    Ok(StatusCode::OK)
}

/// Searches active claims, or deleted claims when `includeDeleted=true`
pub async fn search_claims(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<SearchParams>,
) -> Result<Json<Vec<ClaimResponse>>, ApiError> {
    let scope = SearchScope::from_include_deleted(params.include_deleted);
    let claims = state.service.search_claims(&params.query, scope).await?;
    Ok(Json(claim_list(claims)))
}

/// Dashboard statistics over active claims
pub async fn claim_statistics(
    State(state): State<AppState>,
) -> Result<Json<StatsResponse>, ApiError> {
    let stats = state.service.claim_statistics().await?;
    Ok(Json(stats.into()))
}

/// Advisory fraud screening; the stored fraud flag is left untouched
pub async fn assess_fraud(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<ClaimId>,
) -> Result<Json<FraudAssessmentResponse>, ApiError> {
    state
        .service
        .assess_fraud(id)
        .await?
        .map(|assessment| Json(assessment.into()))
        .ok_or(ApiError::NotFound)
}
