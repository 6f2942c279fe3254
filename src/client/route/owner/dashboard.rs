use dioxus::prelude::*;

use crate::{
    client::{constant::SITE_NAME, model::error::ApiError},
    model::pro::OwnerOverviewDto,
};

#[cfg(feature = "web")]
use crate::client::api::pro::get_owner_overview;

#[component]
pub fn OwnerDashboard() -> Element {
    let mut overview = use_signal(|| None::<Result<OwnerOverviewDto, ApiError>>);

    #[cfg(feature = "web")]
    {
        let future = use_resource(|| async move { get_owner_overview().await });

        if let Some(result) = &*future.read_unchecked() {
            if overview().as_ref() != Some(result) {
                overview.set(Some(result.clone()));
            }
        }
    }

    rsx! {
        Title { "Dashboard | {SITE_NAME}" }
        h1 {
            class: "text-2xl font-semibold mb-6",
            "Studio overview"
        }
        match overview() {
            None => rsx! {
                div {
                    class: "flex justify-center py-12",
                    span {
                        class: "loading loading-spinner",
                    }
                }
            },
            Some(Err(err)) => rsx! {
                p {
                    class: "text-error",
                    "Failed to load overview: {err}"
                }
            },
            Some(Ok(data)) => rsx! {
                div {
                    class: "stats shadow",
                    div {
                        class: "stat",
                        div {
                            class: "stat-title",
                            "Pros"
                        }
                        div {
                            class: "stat-value",
                            "{data.pro_count}"
                        }
                    }
                    div {
                        class: "stat",
                        div {
                            class: "stat-title",
                            "Published"
                        }
                        div {
                            class: "stat-value",
                            "{data.published_count}"
                        }
                    }
                    div {
                        class: "stat",
                        div {
                            class: "stat-title",
                            "Members"
                        }
                        div {
                            class: "stat-value",
                            "{data.user_count}"
                        }
                    }
                }
            },
        }
    }
}
