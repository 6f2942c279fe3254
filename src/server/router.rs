use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::ErrorDto,
        pro::{OwnerOverviewDto, ProProfileDto},
        user::{Role, UserDto},
    },
    server::{
        controller::{auth, owner, pro},
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        pro::get_pros,
        pro::get_my_profile,
        owner::get_overview,
        owner::get_roster,
    ),
    components(schemas(ProProfileDto, OwnerOverviewDto, UserDto, Role, ErrorDto))
)]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", get(auth::login))
        .route("/api/auth/callback", get(auth::callback))
        .route("/api/auth/logout", get(auth::logout))
        .route("/api/auth/user", get(auth::get_user))
        .route("/api/pros", get(pro::get_pros))
        .route("/api/pro/profile", get(pro::get_my_profile))
        .route("/api/owner/overview", get(owner::get_overview))
        .route("/api/owner/pros", get(owner::get_roster))
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any))
}
