use dioxus::prelude::*;
use pulldown_cmark::{html, Options, Parser};

use crate::model::pro::ProProfileDto;

/// Renders a markdown bio to an HTML fragment.
fn render_markdown(source: &str) -> String {
    let parser = Parser::new_ext(source, Options::empty());
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

/// Grid of published provider profiles.
///
/// Receives whatever list the landing page resolved; an empty list renders
/// just the heading, never an error state.
#[component]
pub fn ProsSection(pros: Vec<ProProfileDto>) -> Element {
    rsx!(section {
        class: "py-20 px-4 bg-base-200",
        div {
            class: "max-w-6xl mx-auto",
            h2 {
                class: "text-3xl font-bold text-center mb-10",
                "Meet our pros"
            }
            div {
                class: "grid gap-6 md:grid-cols-2 lg:grid-cols-3",
                for pro in pros {
                    div {
                        key: "{pro.id}",
                        class: "card bg-base-100 shadow",
                        figure {
                            img {
                                src: "{pro.image_url}",
                                alt: "{pro.name}",
                                class: "h-56 w-full object-cover",
                            }
                        }
                        div {
                            class: "card-body",
                            h3 {
                                class: "card-title",
                                "{pro.name}"
                            }
                            p {
                                class: "text-sm opacity-70",
                                "{pro.specialty} · {pro.years_experience} yrs"
                            }
                            div {
                                class: "prose prose-sm",
                                dangerous_inner_html: render_markdown(&pro.bio),
                            }
                        }
                    }
                }
            }
        }
    })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn renders_markdown_emphasis() {
        let rendered = render_markdown("Focused on **sustainable progress**.");
        assert!(rendered.contains("<strong>sustainable progress</strong>"));
    }

    #[test]
    fn renders_empty_bio_to_empty_fragment() {
        assert_eq!(render_markdown(""), "");
    }
}
