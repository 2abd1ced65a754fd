use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::sport_picker::SportPicker;
use crate::data::shared_booking::Sport;
use crate::utils::price::per_hour;

#[component]
pub fn HomePage() -> impl IntoView {
    let (show_sport_picker, set_show_sport_picker) = create_signal(false);

    view! {
        <div>
            <section class="relative min-h-screen w-full flex items-center overflow-hidden bg-gradient-to-br from-purple-700 to-fuchsia-700">
                <div class="max-w-6xl mx-auto px-4 relative z-10">
                    <div class="w-full md:w-2/3 lg:w-7/12 p-2">
                        <h1 class="text-6xl md:text-7xl lg:text-8xl font-extrabold text-white tracking-tight leading-none mb-6">
                            "Lonavala's Premier"
                            <br/>
                            "Sports Destination"
                        </h1>
                        <p class="text-xl md:text-2xl text-white text-opacity-95 mb-8 max-w-[90%] leading-relaxed">
                            "Experience the thrill of sports amidst scenic mountain views."
                        </p>
                        <button
                            class="py-4 px-8 rounded-xl bg-purple-900 text-white text-xl font-bold hover:-translate-y-0.5 hover:shadow-xl transition-all"
                            on:click=move |_| set_show_sport_picker(true)
                        >
                            "Book"
                        </button>
                    </div>
                </div>
            </section>

            <SportPicker open=show_sport_picker set_open=set_show_sport_picker/>

            <section class="py-16 md:py-24 bg-gray-50">
                <div class="max-w-6xl mx-auto px-4 grid grid-cols-1 md:grid-cols-2 gap-8">
                    {Sport::ALL.iter().map(|sport| view! { <SportCard sport=*sport/> }).collect::<Vec<_>>()}
                </div>
            </section>
        </div>
    }
}

#[component]
fn SportCard(sport: Sport) -> impl IntoView {
    view! {
        <div class="h-full flex flex-col bg-white rounded-2xl shadow-md hover:shadow-xl hover:-translate-y-1 transition-all">
            <div class="p-8">
                <div class="flex items-center mb-6">
                    <i class=format!("{} text-4xl text-purple-700 mr-4", sport.icon_class())></i>
                    <h3 class="text-3xl font-bold">{sport.name()}</h3>
                </div>
                <p class="text-gray-500 mb-8">{sport.blurb()}</p>
                <div class="flex justify-between items-center">
                    <span class="text-3xl font-bold text-purple-700">{per_hour(sport.hourly_rate())}</span>
                    <A
                        href=sport.booking_path()
                        attr:class="px-6 py-3 rounded-lg bg-purple-700 text-white font-semibold hover:bg-purple-800"
                    >
                        "Book Now"
                    </A>
                </div>
            </div>
        </div>
    }
}
