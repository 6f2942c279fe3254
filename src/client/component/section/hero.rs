use dioxus::prelude::*;

#[component]
pub fn Hero() -> Element {
    rsx!(section {
        class: "hero min-h-screen pt-20",
        style: "background-image: url(https://images.unsplash.com/photo-1534438327276-14e5300c3a48?w=1600); background-size: cover;",
        div {
            class: "hero-overlay bg-opacity-60",
        }
        div {
            class: "hero-content text-center text-neutral-content",
            div {
                class: "max-w-xl",
                h1 {
                    class: "text-5xl font-bold mb-5",
                    "Train with pros who get you"
                }
                p {
                    class: "mb-5",
                    "Book certified trainers, follow programs built around your goals, and track your progress in one place."
                }
                a {
                    href: "/api/auth/login",
                    class: "btn btn-primary",
                    "Get started"
                }
            }
        }
    })
}
