use chrono::NaiveDate;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use super::booking::{SlotCatalog, SlotSelection};
use super::shared_booking::Sport;

const SESSION_KEY: &str = "turfbook.cart";

/// What the booking page hands over to checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingSummary {
    pub sport: Sport,
    pub lines: Vec<SummaryLine>,
    pub total: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryLine {
    pub date: NaiveDate,
    pub time: String,
    pub price: u32,
}

impl BookingSummary {
    pub fn from_selection(sport: Sport, selection: &SlotSelection, catalog: &SlotCatalog) -> Self {
        let lines = selection
            .resolved(catalog)
            .into_iter()
            .map(|(id, slot)| SummaryLine {
                date: id.date,
                time: slot.time.clone(),
                price: slot.price,
            })
            .collect();

        Self {
            sport,
            lines,
            total: selection.total_price(catalog),
        }
    }

    /// Every slot is one hour long.
    pub fn duration_hours(&self) -> usize {
        self.lines.len()
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        let mut dates: Vec<_> = self.lines.iter().map(|line| line.date).collect();
        dates.dedup();
        dates
    }
}

/// Shared between the booking and checkout pages through context.
#[derive(Clone, Copy)]
pub struct BookingCart(pub RwSignal<Option<BookingSummary>>);

impl BookingCart {
    pub fn new() -> Self {
        Self(RwSignal::new(None))
    }

    pub fn store(&self, summary: BookingSummary) {
        save_to_session(&summary);
        self.0.set(Some(summary));
    }

    pub fn summary(&self) -> Option<BookingSummary> {
        self.0.get()
    }

    /// Pulls a summary saved earlier in this browser session, so a reload of
    /// /checkout keeps it. Only call from client-side effects.
    pub fn restore(&self) {
        if self.0.get_untracked().is_none() {
            if let Some(summary) = load_from_session() {
                self.0.set(Some(summary));
            }
        }
    }

    pub fn clear(&self) {
        remove_from_session();
        self.0.set(None);
    }
}

impl Default for BookingCart {
    fn default() -> Self {
        Self::new()
    }
}

fn session_storage() -> Option<web_sys::Storage> {
    #[cfg(not(feature = "ssr"))]
    {
        web_sys::window().and_then(|window| window.session_storage().ok().flatten())
    }
    #[cfg(feature = "ssr")]
    {
        None
    }
}

fn save_to_session(summary: &BookingSummary) {
    let Some(storage) = session_storage() else {
        return;
    };
    match serde_json::to_string(summary) {
        Ok(json) => {
            if storage.set_item(SESSION_KEY, &json).is_err() {
                leptos::logging::log!("Failed to persist cart to session storage");
            }
        }
        Err(err) => leptos::logging::log!("Failed to serialize cart: {:?}", err),
    }
}

fn load_from_session() -> Option<BookingSummary> {
    let json = session_storage()?.get_item(SESSION_KEY).ok().flatten()?;
    serde_json::from_str(&json)
        .map_err(|err| leptos::logging::log!("Discarding unreadable cart: {:?}", err))
        .ok()
}

fn remove_from_session() {
    if let Some(storage) = session_storage() {
        if storage.remove_item(SESSION_KEY).is_err() {
            leptos::logging::log!("Failed to clear cart from session storage");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::shared_booking::{DayPeriod, SlotId, TimeSlot};
    use pretty_assertions::assert_eq;

    #[test]
    fn summary_lists_resolved_slots_with_total() {
        let catalog = SlotCatalog::standard();
        let day = NaiveDate::from_ymd_opt(2025, 7, 16).unwrap();
        let next = day.succ_opt().unwrap();
        let mut selection = SlotSelection::new();

        selection.toggle(
            SlotId::new(next, &TimeSlot::new("4:00 - 5:00", 2000, DayPeriod::Evening)),
            &[],
        );
        selection.toggle(
            SlotId::new(day, &TimeSlot::new("12:00 - 1:00", 1500, DayPeriod::Afternoon)),
            &[],
        );
        selection.toggle(
            SlotId::new(day, &TimeSlot::new("9:00 - 10:00", 900, DayPeriod::Morning)),
            &[],
        );

        let summary = BookingSummary::from_selection(Sport::Cricket, &selection, catalog);

        assert_eq!(summary.total, 3500);
        assert_eq!(summary.duration_hours(), 2);
        assert_eq!(summary.dates(), vec![day, next]);
        assert_eq!(
            summary.lines,
            vec![
                SummaryLine { date: day, time: "12:00 - 1:00".into(), price: 1500 },
                SummaryLine { date: next, time: "4:00 - 5:00".into(), price: 2000 },
            ]
        );
    }

    #[test]
    fn summary_survives_a_json_round_trip() {
        let summary = BookingSummary {
            sport: Sport::Pickleball,
            lines: vec![SummaryLine {
                date: NaiveDate::from_ymd_opt(2025, 7, 20).unwrap(),
                time: "5:00 - 6:00".into(),
                price: 1200,
            }],
            total: 1200,
        };

        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"pickleball\""));
        assert_eq!(serde_json::from_str::<BookingSummary>(&json).unwrap(), summary);
    }
}
