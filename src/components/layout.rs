use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::components::footer::Footer;

pub struct NavItem {
    pub text: &'static str,
    pub path: &'static str,
}

pub const NAV_ITEMS: [NavItem; 3] = [
    NavItem { text: "Home", path: "/" },
    NavItem { text: "About", path: "/about" },
    NavItem { text: "Contact", path: "/contact" },
];

pub fn nav_link_class(current_path: &str, item_path: &str) -> &'static str {
    if current_path == item_path {
        "text-purple-700 font-bold border-b-2 border-purple-700"
    } else {
        "text-gray-800 font-medium border-b-2 border-transparent hover:border-purple-700"
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let pathname = use_location().pathname;
    let (mobile_open, set_mobile_open) = create_signal(false);

    let toggle_drawer = move |_| set_mobile_open.update(|open| *open = !*open);

    // close the drawer whenever the route changes
    Effect::new(move |_| {
        pathname.track();
        set_mobile_open(false);
    });

    view! {
        <div class="flex flex-col min-h-screen">
            <header class="fixed top-0 inset-x-0 z-20 bg-white shadow-md py-2">
                <div class="max-w-7xl mx-auto px-4 flex justify-between items-center h-16 md:h-20">
                    <A
                        href="/"
                        attr:class="text-3xl font-extrabold tracking-tight bg-gradient-to-r from-purple-700 to-fuchsia-600 bg-clip-text text-transparent"
                    >
                        "TurfBook"
                    </A>

                    <nav class="hidden sm:flex items-center gap-8">
                        {NAV_ITEMS.iter().map(|item| {
                            let path = item.path;
                            view! {
                                <A href=path attr:class=move || format!("text-lg pb-1 transition-colors {}", nav_link_class(&pathname.get(), path))>
                                    {item.text}
                                </A>
                            }
                        }).collect::<Vec<_>>()}
                    </nav>

                    <button
                        class="sm:hidden p-2 text-gray-800"
                        aria-label="open drawer"
                        on:click=toggle_drawer
                    >
                        <i class="fas fa-bars text-xl"></i>
                    </button>
                </div>
            </header>

            <div
                class=move || if mobile_open.get() { "fixed inset-0 z-30 sm:hidden" } else { "hidden" }
            >
                <div class="absolute inset-0 bg-black bg-opacity-30" on:click=toggle_drawer></div>
                <aside class="absolute right-0 top-0 h-full w-60 bg-white shadow-lg">
                    <ul class="py-4">
                        {NAV_ITEMS.iter().map(|item| {
                            let path = item.path;
                            view! {
                                <li>
                                    <A href=path attr:class=move || format!("block px-6 py-3 {}", nav_link_class(&pathname.get(), path))>
                                        {item.text}
                                    </A>
                                </li>
                            }
                        }).collect::<Vec<_>>()}
                    </ul>
                </aside>
            </div>

            <main class="flex-grow w-full pt-20">
                {children()}
            </main>

            <Footer/>
        </div>
    }
}
