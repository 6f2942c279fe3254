use dioxus::prelude::*;

use crate::{
    client::component::section::{
        About, Cta, Footer, Hero, Programs, ProsSection, Testimonials, WhyUs,
    },
    client::constant::SITE_NAME,
    model::pro::ProProfileDto,
};

#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[cfg(feature = "web")]
use crate::client::api::pro::get_pros;

/// Public landing page.
///
/// Fetches the published provider listing once on mount and passes it to the
/// pros section. Any fetch failure, network or HTTP, degrades to an empty
/// roster; the static sections render either way and no error is surfaced.
#[component]
pub fn Landing() -> Element {
    let mut pros = use_signal(Vec::<ProProfileDto>::new);

    #[cfg(feature = "web")]
    {
        let future = use_resource(|| async move { get_pros().await });

        match &*future.read_unchecked() {
            Some(Ok(list)) => {
                if pros() != *list {
                    pros.set(list.clone());
                }
            }
            Some(Err(err)) => {
                tracing::debug!("Failed to fetch pros, rendering empty roster: {}", err);
            }
            None => (),
        }
    }

    rsx! {
        Title { "{SITE_NAME}" }
        Hero {}
        About {}
        ProsSection { pros: pros() }
        Programs {}
        WhyUs {}
        Testimonials {}
        Cta {}
        Footer {}
    }
}
