use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_brands_icons::{FaFacebook, FaInstagram, FaYoutube},
    Icon,
};

use crate::client::constant::SITE_NAME;

#[component]
pub fn Footer() -> Element {
    rsx!(footer {
        class: "footer items-center p-6 bg-neutral text-neutral-content",
        aside {
            class: "items-center grid-flow-col",
            p {
                "© 2026 {SITE_NAME}. All rights reserved."
            }
        }
        nav {
            class: "grid-flow-col gap-4 md:place-self-center md:justify-self-end",
            a {
                href: "https://instagram.com",
                Icon {
                    width: 22,
                    height: 22,
                    icon: FaInstagram
                }
            }
            a {
                href: "https://facebook.com",
                Icon {
                    width: 22,
                    height: 22,
                    icon: FaFacebook
                }
            }
            a {
                href: "https://youtube.com",
                Icon {
                    width: 22,
                    height: 22,
                    icon: FaYoutube
                }
            }
        }
    })
}
