use dioxus::prelude::*;

#[component]
pub fn About() -> Element {
    rsx!(section {
        class: "py-20 px-4 max-w-5xl mx-auto",
        h2 {
            class: "text-3xl font-bold text-center mb-6",
            "Built by trainers, for trainees"
        }
        p {
            class: "text-center max-w-2xl mx-auto",
            "ProConnect matches you with independent training professionals. Every pro on the platform is vetted, insured, and reviewed by real clients, so you can focus on showing up."
        }
    })
}
