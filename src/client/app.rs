use dioxus::prelude::*;

use crate::client::{constant::SITE_NAME, model::auth::AuthContext, router::Route};

const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[component]
pub fn App() -> Element {
    let mut auth_context = use_context_provider(AuthContext::new);

    // Resolve the session on first load
    #[cfg(feature = "web")]
    {
        auth_context.fetch_user();
    }
    #[cfg(not(feature = "web"))]
    {
        let _ = &mut auth_context;
    }

    rsx! {
        Title { "{SITE_NAME}" }
        document::Meta {
            name: "description",
            content: " Find the right training pro for your goals "
        }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        Router::<Route> {}
    }
}
