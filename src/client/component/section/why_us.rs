use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_solid_icons::FaCheck, Icon};

const REASONS: &[(&str, &str)] = &[
    (
        "Vetted professionals",
        "Every pro is certified, insured, and interviewed before they appear here.",
    ),
    (
        "No lock-in",
        "Book session by session; no memberships or cancellation fees.",
    ),
    (
        "Progress you can see",
        "Your pro tracks every session so you always know where you stand.",
    ),
];

#[component]
pub fn WhyUs() -> Element {
    rsx!(section {
        class: "py-20 px-4 bg-base-200",
        div {
            class: "max-w-3xl mx-auto",
            h2 {
                class: "text-3xl font-bold text-center mb-10",
                "Why ProConnect"
            }
            ul {
                class: "flex flex-col gap-6",
                for (title, detail) in REASONS {
                    li {
                        class: "flex gap-4 items-start",
                        Icon {
                            width: 22,
                            height: 22,
                            icon: FaCheck
                        }
                        div {
                            p {
                                class: "font-semibold",
                                {*title}
                            }
                            p {
                                class: "opacity-70",
                                {*detail}
                            }
                        }
                    }
                }
            }
        }
    })
}
