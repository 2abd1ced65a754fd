use chrono::NaiveDate;
use leptos::prelude::*;

use crate::data::booking::{slot_state, SlotSelection};
use crate::data::shared_booking::{BookedSlot, DayPeriod, TimeSlot};
use crate::pages::slot_card::{SlotCard, SlotCardProps};

#[component]
pub fn SlotGroup(
    period: DayPeriod,
    slots: Vec<TimeSlot>,
    selected_date: ReadSignal<NaiveDate>,
    selection: ReadSignal<SlotSelection>,
    booked: StoredValue<Vec<BookedSlot>>,
    on_toggle: Callback<TimeSlot>,
) -> impl IntoView {
    view! {
        <div class="mb-6">
            <div class="flex items-center mb-4">
                <i class=format!("{} mr-2", period.icon_class())></i>
                <h3 class=format!("text-xl font-semibold {}", period.heading_class())>
                    {period.heading()}
                </h3>
            </div>

            {slots.into_iter().map(|slot| {
                let state_slot = slot.clone();
                let state = Signal::derive(move || {
                    let date = selected_date.get();
                    selection.with(|selection| {
                        booked.with_value(|booked| slot_state(selection, booked, date, &state_slot))
                    })
                });

                SlotCard(
                    SlotCardProps::builder()
                        .slot(slot)
                        .state(state)
                        .on_toggle(on_toggle)
                        .build(),
                )
            }).collect::<Vec<_>>()}
        </div>
    }
}
