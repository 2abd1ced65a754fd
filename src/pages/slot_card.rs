use leptos::prelude::*;

use crate::data::shared_booking::{SlotState, TimeSlot};
use crate::utils::price::format_rupees;

pub fn card_class(state: SlotState) -> &'static str {
    match state {
        SlotState::Selected => "mb-4 flex justify-between items-center p-3 sm:p-4 rounded-lg border border-purple-700 bg-white",
        SlotState::Booked => "mb-4 flex justify-between items-center p-3 sm:p-4 rounded-lg border border-gray-200 bg-gray-100 opacity-70",
        SlotState::Available => "mb-4 flex justify-between items-center p-3 sm:p-4 rounded-lg border border-gray-200 bg-white",
    }
}

pub fn toggle_class(state: SlotState) -> &'static str {
    match state {
        SlotState::Selected => "w-9 h-9 sm:w-10 sm:h-10 rounded-full bg-purple-700 text-white hover:bg-purple-800",
        SlotState::Booked => "w-9 h-9 sm:w-10 sm:h-10 rounded-full bg-gray-100 text-gray-400 cursor-not-allowed",
        SlotState::Available => "w-9 h-9 sm:w-10 sm:h-10 rounded-full bg-gray-100 text-purple-700 hover:bg-gray-200",
    }
}

#[component]
pub fn SlotCard(
    slot: TimeSlot,
    #[prop(into)] state: Signal<SlotState>,
    on_toggle: Callback<TimeSlot>,
) -> impl IntoView {
    let time = slot.time.clone();
    let price = slot.price;

    view! {
        <div class=move || card_class(state.get())>
            <span class="text-base sm:text-xl font-medium">{time}</span>
            <div class="flex items-center">
                <span class="text-base sm:text-xl font-semibold mr-4">{format_rupees(price)}</span>
                <button
                    class=move || toggle_class(state.get())
                    disabled=move || state.get() == SlotState::Booked
                    aria-label=move || if state.get() == SlotState::Selected { "remove slot" } else { "add slot" }
                    on:click=move |_| on_toggle.run(slot.clone())
                >
                    <i class=move || if state.get() == SlotState::Selected { "fas fa-check" } else { "fas fa-plus" }></i>
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booked_cards_are_dimmed() {
        assert!(card_class(SlotState::Booked).contains("opacity-70"));
        assert!(!card_class(SlotState::Available).contains("opacity-70"));
        assert!(card_class(SlotState::Selected).contains("border-purple-700"));
        assert!(toggle_class(SlotState::Booked).contains("cursor-not-allowed"));
    }
}
