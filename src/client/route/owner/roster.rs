use dioxus::prelude::*;

use crate::{
    client::{constant::SITE_NAME, model::error::ApiError},
    model::pro::ProProfileDto,
};

#[cfg(feature = "web")]
use crate::client::api::pro::get_owner_roster;

#[component]
pub fn OwnerRoster() -> Element {
    let mut roster = use_signal(|| None::<Result<Vec<ProProfileDto>, ApiError>>);

    #[cfg(feature = "web")]
    {
        let future = use_resource(|| async move { get_owner_roster().await });

        if let Some(result) = &*future.read_unchecked() {
            if roster().as_ref() != Some(result) {
                roster.set(Some(result.clone()));
            }
        }
    }

    rsx! {
        Title { "Roster | {SITE_NAME}" }
        h1 {
            class: "text-2xl font-semibold mb-6",
            "Pro roster"
        }
        match roster() {
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
                    "Failed to load roster: {err}"
                }
            },
            Some(Ok(pros)) => rsx! {
                if pros.is_empty() {
                    p {
                        class: "opacity-70",
                        "No pros on the roster yet."
                    }
                } else {
                    div {
                        class: "overflow-x-auto",
                        table {
                            class: "table",
                            thead {
                                tr {
                                    th { "Name" }
                                    th { "Specialty" }
                                    th { "Experience" }
                                    th { "Status" }
                                }
                            }
                            tbody {
                                for pro in pros {
                                    tr {
                                        key: "{pro.id}",
                                        td { "{pro.name}" }
                                        td { "{pro.specialty}" }
                                        td { "{pro.years_experience} yrs" }
                                        td {
                                            if pro.published {
                                                span {
                                                    class: "badge badge-success",
                                                    "Published"
                                                }
                                            } else {
                                                span {
                                                    class: "badge badge-ghost",
                                                    "Draft"
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            },
        }
    }
}
