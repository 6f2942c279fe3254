use dioxus::prelude::*;

#[component]
pub fn Cta() -> Element {
    rsx!(section {
        class: "py-20 px-4 bg-primary text-primary-content",
        div {
            class: "max-w-3xl mx-auto text-center",
            h2 {
                class: "text-3xl font-bold mb-4",
                "Ready to start?"
            }
            p {
                class: "mb-6",
                "Join today and book your first session this week."
            }
            a {
                href: "/api/auth/login",
                class: "btn btn-neutral",
                "Create your account"
            }
        }
    })
}
