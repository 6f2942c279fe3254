use crate::{
    client::{
        api::helper::{get, parse_response, send_request},
        model::error::ApiError,
    },
    model::pro::{OwnerOverviewDto, ProProfileDto},
};

/// Fetches the public listing of published provider profiles.
pub async fn get_pros() -> Result<Vec<ProProfileDto>, ApiError> {
    let request = get("/api/pros");
    let response = send_request(request).await?;
    parse_response(response).await
}

/// Fetches the roster counts for the owner dashboard.
pub async fn get_owner_overview() -> Result<OwnerOverviewDto, ApiError> {
    let request = get("/api/owner/overview");
    let response = send_request(request).await?;
    parse_response(response).await
}

/// Fetches every profile, drafts included, for the owner roster.
pub async fn get_owner_roster() -> Result<Vec<ProProfileDto>, ApiError> {
    let request = get("/api/owner/pros");
    let response = send_request(request).await?;
    parse_response(response).await
}

/// Fetches the profile linked to the signed-in pro, if any.
pub async fn get_my_profile() -> Result<Option<ProProfileDto>, ApiError> {
    let request = get("/api/pro/profile");
    let response = send_request(request).await?;
    parse_response(response).await
}
