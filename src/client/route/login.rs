use dioxus::prelude::*;

use crate::client::{
    component::{page::LoadingPage, Page},
    constant::SITE_NAME,
    model::auth::{AuthContext, AuthState},
    router::dashboard_route,
};

#[component]
pub fn Login() -> Element {
    let auth_context = use_context::<AuthContext>();
    let nav = navigator();

    // Handle redirect for authenticated users
    {
        let auth_context = use_context::<AuthContext>();
        use_effect(move || {
            let state = auth_context.read();
            if let Some(role) = state.role() {
                nav.push(dashboard_route(role));
            }
        });
    }

    let state = auth_context.read();

    rsx! {
        Title { "Sign in | {SITE_NAME}" }
        match &*state {
            AuthState::Initializing => rsx! {
                LoadingPage {}
            },
            AuthState::Authenticated(_) => rsx! {
                // Render nothing while redirecting
                LoadingPage {}
            },
            AuthState::NotLoggedIn | AuthState::Error(_) => rsx! {
                Page {
                    class: "flex flex-col gap-6 items-center justify-center w-full h-full",
                    div {
                        class: "flex flex-col items-center gap-4",
                        p {
                            class: "text-2xl",
                            {SITE_NAME}
                        }
                        p {
                            class: "opacity-70",
                            "Sign in to reach your dashboard"
                        }
                    }
                    div {
                        a {
                            href: "/api/auth/login",
                            div {
                                class: "btn btn-primary",
                                p {
                                    "Continue to sign in"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
