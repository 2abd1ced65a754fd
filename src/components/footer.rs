use chrono::Datelike;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::data::shared_booking::Sport;

struct FooterLink {
    name: &'static str,
    path: String,
}

struct LinkGroup {
    title: &'static str,
    links: Vec<FooterLink>,
}

fn link(name: &'static str, path: &str) -> FooterLink {
    FooterLink {
        name,
        path: path.to_string(),
    }
}

fn footer_links() -> Vec<LinkGroup> {
    vec![
        LinkGroup {
            title: "Company",
            links: vec![link("About", "/about"), link("Contact", "/contact")],
        },
        LinkGroup {
            title: "Sports",
            links: Sport::ALL
                .iter()
                .map(|sport| link(sport.name(), &sport.booking_path()))
                .collect(),
        },
        LinkGroup {
            title: "Legal",
            links: vec![link("Privacy Policy", "/privacy"), link("Terms of Service", "/terms")],
        },
    ]
}

const SOCIAL_LINKS: [(&str, &str, &str); 4] = [
    ("Facebook", "fab fa-facebook", "https://facebook.com"),
    ("Twitter", "fab fa-twitter", "https://twitter.com"),
    ("Instagram", "fab fa-instagram", "https://instagram.com"),
    ("LinkedIn", "fab fa-linkedin", "https://linkedin.com"),
];

#[component]
pub fn Footer() -> impl IntoView {
    let current_year = crate::utils::date::today().year();

    view! {
        <footer class="bg-white py-8 md:py-12 border-t border-gray-100">
            <div class="max-w-6xl mx-auto px-4">
                <div class="grid grid-cols-2 md:grid-cols-5 gap-6 md:gap-8">
                    <div class="col-span-2">
                        <h6 class="text-xl font-bold mb-2 bg-gradient-to-r from-purple-700 to-fuchsia-600 bg-clip-text text-transparent">
                            "TurfBook"
                        </h6>
                        <p class="text-sm text-gray-500 mb-4">
                            "Connecting cricket and pickleball enthusiasts with the perfect turf fields for their games and events."
                        </p>
                        <div class="flex gap-2">
                            {SOCIAL_LINKS.iter().map(|(name, icon, url)| view! {
                                <a
                                    href=*url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label=*name
                                    class="w-8 h-8 inline-flex items-center justify-center rounded-full text-gray-500 hover:text-purple-700 hover:bg-purple-50"
                                >
                                    <i class=*icon></i>
                                </a>
                            }).collect::<Vec<_>>()}
                        </div>
                    </div>

                    {footer_links().into_iter().map(|group| view! {
                        <div>
                            <p class="text-sm font-semibold text-gray-900 mb-3">{group.title}</p>
                            <ul class="space-y-2">
                                {group.links.into_iter().map(|item| view! {
                                    <li>
                                        <A href=item.path attr:class="text-sm text-gray-500 hover:text-purple-700">
                                            {item.name}
                                        </A>
                                    </li>
                                }).collect::<Vec<_>>()}
                            </ul>
                        </div>
                    }).collect::<Vec<_>>()}
                </div>

                <hr class="my-6 md:my-8 border-gray-100"/>

                <div class="flex flex-col md:flex-row justify-between gap-2 text-sm text-gray-500">
                    <p>{format!("© {} TurfBook. All rights reserved.", current_year)}</p>
                    <p>"Made with ❤️ for cricket and pickleball enthusiasts"</p>
                </div>
            </div>
        </footer>
    }
}
