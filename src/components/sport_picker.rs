use leptos::prelude::*;
use leptos_router::components::A;

use crate::data::shared_booking::Sport;

/// Modal asking which venue to book. Picking one closes it and opens the booking page.
#[component]
pub fn SportPicker(open: ReadSignal<bool>, set_open: WriteSignal<bool>) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="fixed inset-0 z-40 flex items-center justify-center bg-black bg-opacity-40 p-4" on:click=move |_| set_open(false)>
                <div
                    class="w-full max-w-xs bg-white rounded-2xl overflow-hidden shadow-xl"
                    role="dialog"
                    on:click=|ev| ev.stop_propagation()
                >
                    <div class="flex justify-between items-center p-6 border-b border-gray-200">
                        <h2 class="text-lg font-semibold">"Select Sport"</h2>
                        <button class="p-1 text-gray-500 hover:text-gray-800" aria-label="close" on:click=move |_| set_open(false)>
                            <i class="fas fa-xmark"></i>
                        </button>
                    </div>
                    // clicks on a link bubble up here and close the modal
                    <div class="p-6 flex flex-col gap-4" on:click=move |_| set_open(false)>
                        {Sport::ALL.iter().map(|sport| view! {
                            <A
                                href=sport.booking_path()
                                attr:class="flex items-center gap-3 py-4 px-4 border-2 border-purple-700 rounded-md text-purple-700 font-medium hover:bg-purple-50"
                            >
                                <i class=sport.icon_class()></i>
                                {sport.name()}
                            </A>
                        }).collect::<Vec<_>>()}
                    </div>
                </div>
            </div>
        </Show>
    }
}
