use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_solid_icons::FaDumbbell, Icon};

use crate::client::{
    constant::SITE_NAME,
    model::auth::{AuthContext, AuthState},
    router::{dashboard_route, Route},
};

#[component]
pub fn Header() -> Element {
    let auth_context = use_context::<AuthContext>();
    let state = auth_context.read();

    let fetch_completed = !matches!(&*state, AuthState::Initializing);
    let role = state.role();

    rsx!(div {
        class: "fixed flex justify-between gap-4 w-full h-20 py-2 px-4 bg-base-200 z-20",
        div {
            class: "flex items-center",
            Link {
                to: Route::Landing {},
                div {
                    class: "flex items-center gap-3",
                    Icon {
                        width: 28,
                        height: 28,
                        icon: FaDumbbell
                    }
                    p {
                        class: "md:text-xl text-wrap font-semibold",
                        {SITE_NAME}
                    }
                }
            }
        }
        div {
            class: "flex items-center gap-2",
            if let Some(role) = role {
                Link {
                    to: dashboard_route(role),
                    class: "btn btn-outline",
                    p {
                        "Dashboard"
                    }
                }
                a {
                    href: "/api/auth/logout",
                    div {
                        class: "btn btn-outline",
                        p {
                            "Logout"
                        }
                    }
                }
            } else if fetch_completed {
                a {
                    href: "/api/auth/login",
                    div {
                        class: "btn btn-primary",
                        p {
                            "Sign in"
                        }
                    }
                }
            }
        }
    })
}
