use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        pro::{OwnerOverviewDto, ProProfileDto},
        user::Role,
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::pro::ProService, state::AppState,
    },
};

pub static OWNER_TAG: &str = "owner";

#[utoipa::path(
    get,
    path = "/api/owner/overview",
    tag = OWNER_TAG,
    responses(
        (status = 200, description = "Roster counts for the owner dashboard", body = OwnerOverviewDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an owner", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_overview(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Role::Owner])
        .await?;

    let overview = ProService::new(&state.db).overview().await?;

    Ok((StatusCode::OK, Json(overview.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/owner/pros",
    tag = OWNER_TAG,
    responses(
        (status = 200, description = "All provider profiles, drafts included", body = Vec<ProProfileDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an owner", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_roster(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Role::Owner])
        .await?;

    let profiles = ProService::new(&state.db).list_all().await?;

    let dtos: Vec<ProProfileDto> = profiles.into_iter().map(|pro| pro.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}
