use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, pro::ProProfileDto, user::Role},
    server::{
        error::AppError, middleware::auth::AuthGuard, service::pro::ProService, state::AppState,
    },
};

pub static PRO_TAG: &str = "pro";

#[utoipa::path(
    get,
    path = "/api/pros",
    tag = PRO_TAG,
    responses(
        (status = 200, description = "Published provider profiles", body = Vec<ProProfileDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pros(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let profiles = ProService::new(&state.db).list_published().await?;

    let dtos: Vec<ProProfileDto> = profiles.into_iter().map(|pro| pro.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/pro/profile",
    tag = PRO_TAG,
    responses(
        (status = 200, description = "Profile linked to the signed-in pro, null if none", body = Option<ProProfileDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a pro", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_profile(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Role::Pro])
        .await?;

    let profile = ProService::new(&state.db).profile_for_user(user.id).await?;

    Ok((StatusCode::OK, Json(profile.map(|pro| pro.into_dto()))))
}
