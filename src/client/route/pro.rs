use dioxus::prelude::*;

use crate::{
    client::{constant::SITE_NAME, model::error::ApiError},
    model::pro::ProProfileDto,
};

#[cfg(feature = "web")]
use crate::client::api::pro::get_my_profile;

#[component]
pub fn ProDashboard() -> Element {
    let mut profile = use_signal(|| None::<Result<Option<ProProfileDto>, ApiError>>);

    #[cfg(feature = "web")]
    {
        let future = use_resource(|| async move { get_my_profile().await });

        if let Some(result) = &*future.read_unchecked() {
            if profile().as_ref() != Some(result) {
                profile.set(Some(result.clone()));
            }
        }
    }

    rsx! {
        Title { "My profile | {SITE_NAME}" }
        h1 {
            class: "text-2xl font-semibold mb-6",
            "My profile"
        }
        match profile() {
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
                    "Failed to load profile: {err}"
                }
            },
            Some(Ok(None)) => rsx! {
                p {
                    class: "opacity-70",
                    "No profile is linked to your account yet. The studio owner sets up new profiles."
                }
            },
            Some(Ok(Some(pro))) => rsx! {
                div {
                    class: "card lg:card-side bg-base-100 shadow max-w-3xl",
                    figure {
                        img {
                            src: "{pro.image_url}",
                            alt: "{pro.name}",
                            class: "h-64 w-64 object-cover",
                        }
                    }
                    div {
                        class: "card-body",
                        h2 {
                            class: "card-title",
                            "{pro.name}"
                        }
                        p {
                            class: "text-sm opacity-70",
                            "{pro.specialty} · {pro.years_experience} yrs"
                        }
                        if pro.published {
                            span {
                                class: "badge badge-success",
                                "Visible on the landing page"
                            }
                        } else {
                            span {
                                class: "badge badge-ghost",
                                "Draft - not public yet"
                            }
                        }
                    }
                }
            },
        }
    }
}
