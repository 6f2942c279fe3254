use dioxus::prelude::*;

use crate::{
    client::{
        component::{page::LoadingPage, Sidebar},
        model::auth::{AuthContext, AuthState},
        router::Route,
    },
    model::user::Role,
};

/// Outcome of checking the current session against a layout's allowed roles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessDecision {
    /// Session state is still unresolved; nothing may render yet.
    Pending,
    /// The session role is a member of the allowed set.
    Authorized,
    /// Signed out, errored, or signed in with a role outside the allowed set.
    Denied,
}

/// Pure authorization policy for role-restricted layouts.
///
/// Kept free of rendering and navigation concerns so the decision table can
/// be tested directly; the component below owns the redirect side effect.
/// A session fetch error counts as unauthenticated. `allowed` must be
/// non-empty.
pub fn authorize(auth: &AuthState, allowed: &[Role]) -> AccessDecision {
    match auth {
        AuthState::Initializing => AccessDecision::Pending,
        AuthState::Authenticated(user) if allowed.contains(&user.role) => {
            AccessDecision::Authorized
        }
        AuthState::Authenticated(_) | AuthState::NotLoggedIn | AuthState::Error(_) => {
            AccessDecision::Denied
        }
    }
}

#[component]
pub fn OwnerLayout() -> Element {
    rsx! {
        ProtectedLayout { allowed: vec![Role::Owner] }
    }
}

#[component]
pub fn ProLayout() -> Element {
    rsx! {
        ProtectedLayout { allowed: vec![Role::Pro] }
    }
}

#[component]
pub fn ProtectedLayout(allowed: Vec<Role>) -> Element {
    let auth_context = use_context::<AuthContext>();
    let nav = navigator();

    let state = auth_context.read();
    let decision = authorize(&state, &allowed);
    let signed_in = state.is_authenticated();
    let role = state.role();

    // Denied visitors are sent to the sign-in page, or back to the landing
    // page when they are signed in with the wrong role. Re-runs whenever the
    // session state changes.
    use_effect(use_reactive!(|(decision, signed_in)| {
        if decision == AccessDecision::Denied {
            if signed_in {
                nav.push(Route::Landing {});
            } else {
                nav.push(Route::Login {});
            }
        }
    }));

    match decision {
        AccessDecision::Pending => rsx! {
            LoadingPage {}
        },
        AccessDecision::Authorized => rsx! {
            div {
                class: "flex min-h-screen",
                if let Some(role) = role {
                    Sidebar { role }
                }
                main {
                    class: "flex-1 p-8",
                    Outlet::<Route> {}
                }
            }
        },
        // Render nothing while the redirect effect runs
        AccessDecision::Denied => rsx! {},
    }
}
