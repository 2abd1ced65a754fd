use std::time::Duration;

use chrono::NaiveDate;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::data::booking::{
    available_slot_count, BookingCalendar, SlotCatalog, SlotSelection, ToggleOutcome,
};
use crate::data::cart::{BookingCart, BookingSummary};
use crate::data::shared_booking::{DayPeriod, SlotId, Sport, TimeSlot};
use crate::pages::slot_group::SlotGroup;
use crate::utils::date::{date_key, day_label, day_number, month_heading, today, BOOKING_WINDOW_DAYS};
use crate::utils::price::format_rupees;

/// How long the confirmation stays up before we send the user home.
pub const REDIRECT_DELAY: Duration = Duration::from_millis(2000);

pub const HOME_PATH: &str = "/";

pub fn selection_caption(count: usize) -> String {
    format!("{} slot{} selected", count, if count > 1 { "s" } else { "" })
}

/// Moves `step` days along the window, staying put at either end.
pub fn step_date(window: &[NaiveDate], current: NaiveDate, step: i64) -> NaiveDate {
    window
        .iter()
        .position(|date| *date == current)
        .and_then(|pos| {
            let target = pos as i64 + step;
            usize::try_from(target).ok().and_then(|idx| window.get(idx))
        })
        .copied()
        .unwrap_or(current)
}

/// Slot count and total for a Book Now press. None when nothing is picked.
pub fn booking_request(selection: &SlotSelection, catalog: &SlotCatalog) -> Option<(usize, u32)> {
    (!selection.is_empty()).then(|| (selection.len(), selection.total_price(catalog)))
}

/// Runs when the redirect timer fires. Returns where to go next.
pub fn complete_booking(selection: &mut SlotSelection) -> &'static str {
    selection.clear();
    HOME_PATH
}

#[component]
pub fn BookingPage() -> impl IntoView {
    let params = use_params_map();
    let sport = Memo::new(move |_| {
        Sport::from_segment(&params.read().get("sport").unwrap_or_default())
    });

    let navigate = use_navigate();
    let cart = expect_context::<BookingCart>();
    let catalog = SlotCatalog::standard();

    let (calendar, set_calendar) = create_signal(None::<BookingCalendar>);
    let (selection, set_selection) = create_signal(SlotSelection::new());
    let (show_success, set_show_success) = create_signal(false);
    let pending_nav = RwSignal::new(None::<&'static str>);

    let total_price = Memo::new(move |_| selection.with(|s| s.total_price(catalog)));
    let selected_count = Memo::new(move |_| selection.with(|s| s.len()));

    // "today" is the visitor's day, so the window is built after hydration
    Effect::new(move |_| {
        set_calendar(Some(BookingCalendar::starting(today(), BOOKING_WINDOW_DAYS)));
    });

    // switching venue starts a fresh selection
    Effect::new(move |prev: Option<Sport>| {
        let current = sport.get();
        if prev.is_some_and(|prev| prev != current) {
            set_selection.update(|s| s.clear());
        }
        current
    });

    Effect::new(move |_| {
        if let Some(path) = pending_nav.get() {
            navigate(path, Default::default());
        }
    });

    let handle_book_now = move |_| {
        let Some((count, total)) = selection.with_untracked(|s| booking_request(s, catalog)) else {
            return;
        };

        leptos::logging::log!("Booking {} slots for {}", count, format_rupees(total));
        set_show_success(true);

        set_timeout(
            move || {
                if let Some(path) = set_selection.try_update(complete_booking) {
                    pending_nav.set(Some(path));
                }
            },
            REDIRECT_DELAY,
        );
    };

    let handle_checkout = move |_| {
        let summary = selection.with_untracked(|s| {
            BookingSummary::from_selection(sport.get_untracked(), s, catalog)
        });
        cart.store(summary);
        pending_nav.set(Some("/checkout"));
    };

    view! {
        <div class="bg-gray-50 min-h-screen pb-32">
            <div class="bg-white border-b border-gray-200 sticky top-20 z-10">
                <div class="max-w-3xl mx-auto px-4 py-4 flex items-center">
                    <A href="/" attr:class="mr-4 p-2 rounded-full hover:bg-gray-100" attr:aria-label="back">
                        <i class="fas fa-arrow-left"></i>
                    </A>
                    <h1 class="text-xl font-semibold">{move || sport.get().venue_title()}</h1>
                </div>
            </div>

            <div class="max-w-3xl mx-auto px-4">
                {move || match calendar.get() {
                    Some(calendar) => view! {
                        <SlotBoard calendar=calendar selection=selection set_selection=set_selection/>
                    }.into_any(),
                    None => view! {
                        <p class="py-12 text-center text-gray-400">"Loading slots..."</p>
                    }.into_any(),
                }}
            </div>

            <Show when=move || { selected_count.get() > 0 }>
                <div class="fixed bottom-0 inset-x-0 bg-white border-t border-gray-200 p-4 z-10">
                    <div class="max-w-3xl mx-auto">
                        <div class="flex justify-between items-center mb-2">
                            <span class="font-medium">{move || selection_caption(selected_count.get())}</span>
                            <span class="text-xl font-semibold">{move || format!("Total: {}", format_rupees(total_price.get()))}</span>
                        </div>
                        <div class="flex gap-3">
                            <button
                                class="flex-1 py-3 rounded-lg border-2 border-purple-700 text-purple-700 font-semibold hover:bg-purple-50"
                                on:click=handle_checkout
                            >
                                "Checkout"
                            </button>
                            <button
                                class="flex-1 py-3 rounded-lg bg-green-600 text-white font-semibold hover:bg-green-700"
                                on:click=handle_book_now
                            >
                                "Book Now"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>

            <Show when=move || show_success.get()>
                <div class="fixed top-24 inset-x-0 flex justify-center z-30">
                    <div class="flex items-center gap-3 bg-green-600 text-white px-4 py-3 rounded-md shadow-lg">
                        <i class="fas fa-circle-check"></i>
                        <span>"Booking successful! Redirecting to home..."</span>
                        <button class="ml-2" aria-label="close" on:click=move |_| set_show_success(false)>
                            <i class="fas fa-xmark"></i>
                        </button>
                    </div>
                </div>
            </Show>
        </div>
    }
}

/// Date strip, availability count and slot groups for one calendar.
#[component]
fn SlotBoard(
    calendar: BookingCalendar,
    selection: ReadSignal<SlotSelection>,
    set_selection: WriteSignal<SlotSelection>,
) -> impl IntoView {
    let catalog = SlotCatalog::standard();

    let (selected_date, set_selected_date) = create_signal(calendar.start());
    let booked = StoredValue::new(calendar.booked().to_vec());
    let dates = StoredValue::new(calendar.dates().to_vec());

    let available = move || {
        booked.with_value(|booked| available_slot_count(catalog, booked, selected_date.get()))
    };

    let toggle_slot = Callback::new(move |slot: TimeSlot| {
        let id = SlotId::new(selected_date.get_untracked(), &slot);
        set_selection.update(|selection| {
            let outcome = booked.with_value(|booked| selection.toggle(id.clone(), booked));
            if outcome == ToggleOutcome::Rejected {
                leptos::logging::log!("Ignoring booked slot {}", id);
            }
        });
    });

    view! {
        <div class="my-6">
            <div class="flex justify-center mb-4">
                <span class="flex items-center text-purple-700 font-medium">
                    <span class="bg-purple-100 p-1 rounded mr-2">
                        <i class="fas fa-calendar-days"></i>
                    </span>
                    <span class="text-xl">{move || month_heading(selected_date.get())}</span>
                </span>
            </div>

            <div class="flex items-center relative">
                <button
                    class="absolute -left-2 sm:-left-4 z-10 bg-white shadow rounded-full w-8 h-8 sm:w-10 sm:h-10"
                    aria-label="previous day"
                    on:click=move |_| {
                        let next = dates.with_value(|d| step_date(d, selected_date.get_untracked(), -1));
                        set_selected_date(next);
                    }
                >
                    <i class="fas fa-chevron-left"></i>
                </button>

                <div class="flex overflow-x-auto px-2 py-2 flex-1 gap-2">
                    {dates.get_value().into_iter().enumerate().map(|(index, date)| {
                        view! {
                            <button
                                class=move || if selected_date.get() == date {
                                    "min-w-[60px] sm:min-w-[70px] h-[60px] sm:h-[70px] flex flex-col items-center justify-center rounded-lg border-2 border-purple-700 bg-white shadow text-purple-700"
                                } else {
                                    "min-w-[60px] sm:min-w-[70px] h-[60px] sm:h-[70px] flex flex-col items-center justify-center rounded-lg border border-gray-200 hover:border-purple-700 text-gray-800"
                                }
                                data-date=date_key(date)
                                on:click=move |_| set_selected_date(date)
                            >
                                <span class="text-sm font-medium">{day_label(index, date)}</span>
                                <span class="text-xl font-semibold">{day_number(date)}</span>
                            </button>
                        }
                    }).collect::<Vec<_>>()}
                </div>

                <button
                    class="absolute -right-2 sm:-right-4 z-10 bg-white shadow rounded-full w-8 h-8 sm:w-10 sm:h-10"
                    aria-label="next day"
                    on:click=move |_| {
                        let next = dates.with_value(|d| step_date(d, selected_date.get_untracked(), 1));
                        set_selected_date(next);
                    }
                >
                    <i class="fas fa-chevron-right"></i>
                </button>
            </div>
        </div>

        <div class="flex justify-between items-center mb-6 pb-4 border-b border-gray-200">
            <div class="flex items-center">
                <h2 class="text-xl font-semibold">"Available Slots"</h2>
                <span class="ml-4 text-xl font-semibold text-purple-700">{available}</span>
            </div>
            <div class="flex items-center text-sm text-gray-500">
                <i class="fas fa-circle-info text-amber-500 mr-1"></i>
                "Min. 60 mins slots"
            </div>
        </div>

        <div class="mb-8">
            {DayPeriod::ALL.iter().map(|period| view! {
                <SlotGroup
                    period=*period
                    slots=catalog.slots_in(*period)
                    selected_date=selected_date
                    selection=selection
                    booked=booked
                    on_toggle=toggle_slot
                />
            }).collect::<Vec<_>>()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::date::booking_window;
    use pretty_assertions::assert_eq;

    #[test]
    fn caption_pluralises() {
        assert_eq!(selection_caption(1), "1 slot selected");
        assert_eq!(selection_caption(3), "3 slots selected");
    }

    #[test]
    fn stepping_stays_inside_the_window() {
        let start = NaiveDate::from_ymd_opt(2025, 7, 15).unwrap();
        let window = booking_window(start, BOOKING_WINDOW_DAYS);

        assert_eq!(step_date(&window, window[0], -1), window[0]);
        assert_eq!(step_date(&window, window[0], 1), window[1]);
        assert_eq!(step_date(&window, window[6], 1), window[6]);
        assert_eq!(step_date(&window, window[3], -1), window[2]);

        let outside = NaiveDate::from_ymd_opt(2025, 8, 30).unwrap();
        assert_eq!(step_date(&window, outside, 1), outside);
    }

    #[test]
    fn redirect_waits_two_seconds() {
        assert_eq!(REDIRECT_DELAY, Duration::from_millis(2000));
    }

    #[test]
    fn book_now_ignores_an_empty_selection() {
        let catalog = SlotCatalog::standard();
        assert_eq!(booking_request(&SlotSelection::new(), catalog), None);
    }

    #[test]
    fn book_now_reports_count_and_total_then_clears_on_redirect() {
        let catalog = SlotCatalog::standard();
        let start = NaiveDate::from_ymd_opt(2025, 7, 15).unwrap();
        let calendar = BookingCalendar::starting(start, BOOKING_WINDOW_DAYS);
        let mut selection = SlotSelection::new();

        let morning = catalog.slots_in(DayPeriod::Morning);
        let evening = catalog.slots_in(DayPeriod::Evening);
        selection.toggle(SlotId::new(calendar.dates()[0], &morning[0]), calendar.booked());
        selection.toggle(SlotId::new(calendar.dates()[3], &evening[4]), calendar.booked());

        assert_eq!(booking_request(&selection, catalog), Some((2, 1200 + 2000)));

        assert_eq!(complete_booking(&mut selection), HOME_PATH);
        assert!(selection.is_empty());
        assert_eq!(booking_request(&selection, catalog), None);
    }
}
