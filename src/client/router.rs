use dioxus::prelude::*;

use crate::client::component::{Layout, OwnerLayout, ProLayout};
use crate::client::route::{
    owner::{OwnerDashboard, OwnerRoster},
    pro::ProDashboard,
    Landing, Login, NotFound,
};
use crate::model::user::Role;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/")]
    Landing {},

    #[route("/login")]
    Login {},
    #[end_layout]

    #[layout(OwnerLayout)]
    #[nest("/owner")]
        #[route("/")]
        OwnerDashboard {},

        #[route("/roster")]
        OwnerRoster {},
    #[end_nest]
    #[end_layout]

    #[layout(ProLayout)]
    #[nest("/pro")]
        #[route("/")]
        ProDashboard {},
    #[end_nest]
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Entry route of the dashboard subtree a role is allowed into.
pub fn dashboard_route(role: Role) -> Route {
    match role {
        Role::Owner => Route::OwnerDashboard {},
        Role::Pro => Route::ProDashboard {},
    }
}
