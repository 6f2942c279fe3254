use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_solid_icons::FaStar, Icon};

const QUOTES: &[(&str, &str)] = &[
    (
        "Dropped 12kg in six months without hating a single session.",
        "Priya, member since 2024",
    ),
    (
        "My pro rebuilt my squat after knee surgery. Worth every cent.",
        "Marcus, member since 2023",
    ),
    (
        "Finding clients used to be the hardest part of my job. Now they find me.",
        "Dana, training pro",
    ),
];

#[component]
pub fn Testimonials() -> Element {
    rsx!(section {
        class: "py-20 px-4 max-w-6xl mx-auto",
        h2 {
            class: "text-3xl font-bold text-center mb-10",
            "What people say"
        }
        div {
            class: "grid gap-6 md:grid-cols-3",
            for (quote, author) in QUOTES {
                div {
                    class: "card bg-base-100 shadow",
                    div {
                        class: "card-body",
                        div {
                            class: "flex gap-1 mb-2",
                            for _ in 0..5 {
                                Icon {
                                    width: 16,
                                    height: 16,
                                    icon: FaStar
                                }
                            }
                        }
                        p {
                            class: "italic",
                            "\"{quote}\""
                        }
                        p {
                            class: "text-sm opacity-70 mt-2",
                            {*author}
                        }
                    }
                }
            }
        }
    })
}
