use crate::{
    client::{
        api::helper::{get, parse_response, send_request},
        model::error::ApiError,
    },
    model::user::UserDto,
};

/// Fetches the session user.
///
/// Resolves to `None` for anonymous visitors; the endpoint never treats a
/// missing session as an error.
pub async fn get_user() -> Result<Option<UserDto>, ApiError> {
    let request = get("/api/auth/user");
    let response = send_request(request).await?;
    parse_response(response).await
}
