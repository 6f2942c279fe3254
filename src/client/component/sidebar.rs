use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaChartLine, FaUser, FaUsers},
    Icon,
};

use crate::{
    client::{constant::SITE_NAME, router::Route},
    model::user::Role,
};

/// Role-specific navigation shell wrapped around the dashboard pages.
#[component]
pub fn Sidebar(role: Role) -> Element {
    rsx!(aside {
        class: "w-64 min-h-screen bg-base-200 p-4 flex flex-col gap-6",
        Link {
            to: Route::Landing {},
            p {
                class: "text-xl font-semibold px-2",
                {SITE_NAME}
            }
        }
        ul {
            class: "menu gap-1",
            match role {
                Role::Owner => rsx! {
                    li {
                        Link {
                            to: Route::OwnerDashboard {},
                            Icon {
                                width: 18,
                                height: 18,
                                icon: FaChartLine
                            }
                            "Dashboard"
                        }
                    }
                    li {
                        Link {
                            to: Route::OwnerRoster {},
                            Icon {
                                width: 18,
                                height: 18,
                                icon: FaUsers
                            }
                            "Roster"
                        }
                    }
                },
                Role::Pro => rsx! {
                    li {
                        Link {
                            to: Route::ProDashboard {},
                            Icon {
                                width: 18,
                                height: 18,
                                icon: FaUser
                            }
                            "My profile"
                        }
                    }
                },
            }
        }
        div {
            class: "mt-auto",
            a {
                href: "/api/auth/logout",
                class: "btn btn-outline btn-sm w-full",
                "Logout"
            }
        }
    })
}
