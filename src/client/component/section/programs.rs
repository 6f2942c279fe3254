use dioxus::prelude::*;

struct Program {
    name: &'static str,
    blurb: &'static str,
    image_url: &'static str,
}

const PROGRAMS: &[Program] = &[
    Program {
        name: "Strength",
        blurb: "Progressive barbell and dumbbell work for measurable strength gains.",
        image_url: "https://images.unsplash.com/photo-1517836357463-d25dfeac3438?w=800",
    },
    Program {
        name: "Conditioning",
        blurb: "Interval-based engine building that fits around a work week.",
        image_url: "https://images.unsplash.com/photo-1538805060514-97d9cc17730c?w=800",
    },
    Program {
        name: "Mobility",
        blurb: "Joint-friendly sessions to move better and stay injury free.",
        image_url: "https://images.unsplash.com/photo-1544367567-0f2fcb009e0b?w=800",
    },
];

#[component]
pub fn Programs() -> Element {
    rsx!(section {
        class: "py-20 px-4 max-w-6xl mx-auto",
        h2 {
            class: "text-3xl font-bold text-center mb-10",
            "Programs"
        }
        div {
            class: "grid gap-6 md:grid-cols-3",
            for program in PROGRAMS {
                div {
                    class: "card bg-base-100 shadow",
                    figure {
                        img {
                            src: program.image_url,
                            alt: program.name,
                            class: "h-44 w-full object-cover",
                        }
                    }
                    div {
                        class: "card-body",
                        h3 {
                            class: "card-title",
                            {program.name}
                        }
                        p {
                            {program.blurb}
                        }
                    }
                }
            }
        }
    })
}
