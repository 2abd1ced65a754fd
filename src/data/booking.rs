use std::sync::OnceLock;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::shared_booking::{BookedSlot, DayPeriod, SlotId, SlotState, TimeSlot};
use crate::utils::date::booking_window;

static STANDARD_CATALOG: OnceLock<SlotCatalog> = OnceLock::new();

/// The priced slots a venue offers every day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotCatalog {
    slots: Vec<TimeSlot>,
}

impl SlotCatalog {
    pub fn new(slots: Vec<TimeSlot>) -> Self {
        Self { slots }
    }

    /// Shared catalog used by every venue until pricing comes from a backend.
    pub fn standard() -> &'static SlotCatalog {
        STANDARD_CATALOG.get_or_init(|| {
            use DayPeriod::*;

            SlotCatalog::new(vec![
                TimeSlot::new("1:00 - 2:00", 1200, Midnight),
                TimeSlot::new("2:00 - 3:00", 1200, Midnight),
                TimeSlot::new("3:00 - 4:00", 1200, Midnight),
                TimeSlot::new("4:00 - 5:00", 1200, Morning),
                TimeSlot::new("5:00 - 6:00", 1200, Morning),
                TimeSlot::new("6:00 - 7:00", 1200, Morning),
                TimeSlot::new("7:00 - 8:00", 1500, Morning),
                TimeSlot::new("8:00 - 9:00", 1500, Morning),
                TimeSlot::new("12:00 - 1:00", 1500, Afternoon),
                TimeSlot::new("1:00 - 2:00", 1500, Afternoon),
                TimeSlot::new("2:00 - 3:00", 1500, Afternoon),
                TimeSlot::new("3:00 - 4:00", 1500, Afternoon),
                TimeSlot::new("4:00 - 5:00", 2000, Evening),
                TimeSlot::new("5:00 - 6:00", 2000, Evening),
                TimeSlot::new("6:00 - 7:00", 2000, Evening),
                TimeSlot::new("7:00 - 8:00", 2000, Evening),
                TimeSlot::new("8:00 - 9:00", 2000, Evening),
            ])
        })
    }

    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    pub fn slots_in(&self, period: DayPeriod) -> Vec<TimeSlot> {
        self.slots
            .iter()
            .filter(|slot| slot.period == period)
            .cloned()
            .collect()
    }

    pub fn total_slots(&self) -> usize {
        self.slots.len()
    }

    pub fn find(&self, id: &SlotId) -> Option<&TimeSlot> {
        self.slots
            .iter()
            .find(|slot| slot.period == id.period && slot.time == id.time)
    }
}

/// Placeholder reservations, anchored to the first days of the booking window.
pub fn mock_booked_slots(window: &[NaiveDate]) -> Vec<BookedSlot> {
    let mock = [
        (0, "7:00 - 8:00"),
        (0, "8:00 - 9:00"),
        (1, "2:00 - 3:00"),
        (2, "6:00 - 7:00"),
    ];

    mock.iter()
        .filter_map(|(day, time)| window.get(*day).map(|date| BookedSlot::new(*date, time)))
        .collect()
}

/// The date window and its reservations, both anchored to the same day.
///
/// Built in the browser only: the server's clock may sit in another time zone
/// and would put the strip a day off from the visitor's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingCalendar {
    start: NaiveDate,
    dates: Vec<NaiveDate>,
    booked: Vec<BookedSlot>,
}

impl BookingCalendar {
    pub fn starting(start: NaiveDate, days: usize) -> Self {
        let dates = booking_window(start, days);
        let booked = mock_booked_slots(&dates);
        Self { start, dates, booked }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn booked(&self) -> &[BookedSlot] {
        &self.booked
    }
}

pub fn is_slot_booked(booked: &[BookedSlot], date: NaiveDate, time: &str) -> bool {
    booked
        .iter()
        .any(|slot| slot.date == date && slot.time == time)
}

/// Counts booked entries for the day, not the catalog slots they cover.
pub fn available_slot_count(catalog: &SlotCatalog, booked: &[BookedSlot], date: NaiveDate) -> usize {
    let booked_for_date = booked.iter().filter(|slot| slot.date == date).count();
    catalog.total_slots().saturating_sub(booked_for_date)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
    Rejected,
}

/// Slots picked on the booking page but not yet confirmed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotSelection {
    ids: Vec<SlotId>,
}

impl SlotSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, id: SlotId, booked: &[BookedSlot]) -> ToggleOutcome {
        if is_slot_booked(booked, id.date, &id.time) {
            return ToggleOutcome::Rejected;
        }

        if let Some(pos) = self.ids.iter().position(|existing| existing == &id) {
            self.ids.remove(pos);
            ToggleOutcome::Removed
        } else {
            self.ids.push(id);
            ToggleOutcome::Added
        }
    }

    pub fn contains(&self, id: &SlotId) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &SlotId> {
        self.ids.iter()
    }

    /// Ids that don't resolve to a catalog slot contribute nothing.
    pub fn total_price(&self, catalog: &SlotCatalog) -> u32 {
        self.ids
            .iter()
            .filter_map(|id| catalog.find(id))
            .map(|slot| slot.price)
            .sum()
    }

    pub fn resolved<'a>(&'a self, catalog: &'a SlotCatalog) -> Vec<(&'a SlotId, &'a TimeSlot)> {
        let mut resolved: Vec<_> = self
            .ids
            .iter()
            .filter_map(|id| catalog.find(id).map(|slot| (id, slot)))
            .collect();
        resolved.sort_by(|(a_id, a_slot), (b_id, b_slot)| {
            a_id.date.cmp(&b_id.date).then_with(|| a_slot.cmp(b_slot))
        });
        resolved
    }
}

pub fn slot_state(
    selection: &SlotSelection,
    booked: &[BookedSlot],
    date: NaiveDate,
    slot: &TimeSlot,
) -> SlotState {
    if is_slot_booked(booked, date, &slot.time) {
        SlotState::Booked
    } else if selection.contains(&SlotId::new(date, slot)) {
        SlotState::Selected
    } else {
        SlotState::Available
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn window() -> Vec<NaiveDate> {
        let today = NaiveDate::from_ymd_opt(2025, 7, 15).unwrap();
        booking_window(today, 7)
    }

    fn slot(period: DayPeriod, time: &str) -> TimeSlot {
        SlotCatalog::standard()
            .slots()
            .iter()
            .find(|s| s.period == period && s.time == time)
            .cloned()
            .unwrap()
    }

    #[test]
    fn standard_catalog_groups_by_period() {
        let catalog = SlotCatalog::standard();

        assert_eq!(catalog.total_slots(), 17);
        assert_eq!(catalog.slots_in(DayPeriod::Midnight).len(), 3);
        assert_eq!(catalog.slots_in(DayPeriod::Morning).len(), 5);
        assert_eq!(catalog.slots_in(DayPeriod::Afternoon).len(), 4);
        assert_eq!(catalog.slots_in(DayPeriod::Evening).len(), 5);

        let afternoon: Vec<_> = catalog
            .slots_in(DayPeriod::Afternoon)
            .into_iter()
            .map(|s| s.time)
            .collect();
        assert_eq!(afternoon, vec!["12:00 - 1:00", "1:00 - 2:00", "2:00 - 3:00", "3:00 - 4:00"]);
    }

    #[test]
    fn mock_bookings_follow_the_window() {
        let days = window();
        let booked = mock_booked_slots(&days);

        assert_eq!(booked.len(), 4);
        assert!(is_slot_booked(&booked, days[0], "7:00 - 8:00"));
        assert!(is_slot_booked(&booked, days[0], "8:00 - 9:00"));
        assert!(is_slot_booked(&booked, days[1], "2:00 - 3:00"));
        assert!(is_slot_booked(&booked, days[2], "6:00 - 7:00"));
        assert!(!is_slot_booked(&booked, days[3], "6:00 - 7:00"));
        assert!(!is_slot_booked(&booked, days[1], "7:00 - 8:00"));
    }

    #[test]
    fn mock_bookings_skip_days_outside_a_short_window() {
        let days = &window()[..1];
        assert_eq!(mock_booked_slots(days).len(), 2);
        assert!(mock_booked_slots(&[]).is_empty());
    }

    #[test]
    fn available_count_subtracts_booked_entries() {
        let days = window();
        let booked = mock_booked_slots(&days);
        let catalog = SlotCatalog::standard();

        assert_eq!(available_slot_count(catalog, &booked, days[0]), 15);
        assert_eq!(available_slot_count(catalog, &booked, days[1]), 16);
        assert_eq!(available_slot_count(catalog, &booked, days[6]), 17);
    }

    #[test]
    fn booked_slot_cannot_be_selected() {
        let days = window();
        let booked = mock_booked_slots(&days);
        let catalog = SlotCatalog::standard();
        let mut selection = SlotSelection::new();

        let morning_seven = slot(DayPeriod::Morning, "7:00 - 8:00");
        assert_eq!(morning_seven.price, 1500);

        let outcome = selection.toggle(SlotId::new(days[0], &morning_seven), &booked);

        assert_eq!(outcome, ToggleOutcome::Rejected);
        assert!(selection.is_empty());
        assert_eq!(selection.total_price(catalog), 0);
    }

    #[test]
    fn rejected_toggle_leaves_existing_selection_alone() {
        let days = window();
        let booked = mock_booked_slots(&days);
        let catalog = SlotCatalog::standard();
        let mut selection = SlotSelection::new();

        let early = slot(DayPeriod::Morning, "4:00 - 5:00");
        selection.toggle(SlotId::new(days[0], &early), &booked);
        let before = selection.clone();

        let evening_seven = slot(DayPeriod::Evening, "7:00 - 8:00");
        assert_eq!(
            selection.toggle(SlotId::new(days[0], &evening_seven), &booked),
            ToggleOutcome::Rejected
        );
        assert_eq!(selection, before);
        assert_eq!(selection.total_price(catalog), 1200);
    }

    #[test]
    fn toggling_twice_restores_the_selection() {
        let days = window();
        let booked = mock_booked_slots(&days);
        let mut selection = SlotSelection::new();

        let first = SlotId::new(days[3], &slot(DayPeriod::Midnight, "1:00 - 2:00"));
        selection.toggle(first, &booked);
        let before = selection.clone();

        let id = SlotId::new(days[3], &slot(DayPeriod::Evening, "5:00 - 6:00"));
        assert_eq!(selection.toggle(id.clone(), &booked), ToggleOutcome::Added);
        assert!(selection.contains(&id));
        assert_eq!(selection.toggle(id.clone(), &booked), ToggleOutcome::Removed);

        assert_eq!(selection, before);
    }

    #[test]
    fn ids_appear_at_most_once() {
        let days = window();
        let mut selection = SlotSelection::new();
        let id = SlotId::new(days[4], &slot(DayPeriod::Afternoon, "12:00 - 1:00"));

        selection.toggle(id.clone(), &[]);
        selection.toggle(id.clone(), &[]);
        selection.toggle(id.clone(), &[]);

        assert_eq!(selection.len(), 1);
        assert_eq!(selection.iter().filter(|existing| **existing == id).count(), 1);
    }

    #[test]
    fn total_sums_prices_and_tells_periods_apart() {
        let days = window();
        let catalog = SlotCatalog::standard();
        let mut selection = SlotSelection::new();

        selection.toggle(SlotId::new(days[3], &slot(DayPeriod::Midnight, "1:00 - 2:00")), &[]);
        selection.toggle(SlotId::new(days[3], &slot(DayPeriod::Afternoon, "1:00 - 2:00")), &[]);
        selection.toggle(SlotId::new(days[4], &slot(DayPeriod::Evening, "8:00 - 9:00")), &[]);

        assert_eq!(selection.total_price(catalog), 1200 + 1500 + 2000);
    }

    #[test]
    fn unknown_ids_contribute_nothing() {
        let days = window();
        let catalog = SlotCatalog::standard();
        let mut selection = SlotSelection::new();

        let stray = SlotId {
            date: days[0],
            period: DayPeriod::Afternoon,
            time: "10:00 - 11:00".to_string(),
        };
        selection.toggle(stray, &[]);
        selection.toggle(SlotId::new(days[0], &slot(DayPeriod::Morning, "5:00 - 6:00")), &[]);

        assert_eq!(selection.len(), 2);
        assert_eq!(selection.total_price(catalog), 1200);
        assert_eq!(selection.resolved(catalog).len(), 1);
    }

    #[test]
    fn resolved_slots_are_ordered_by_day_then_time_of_day() {
        let days = window();
        let catalog = SlotCatalog::standard();
        let mut selection = SlotSelection::new();

        selection.toggle(SlotId::new(days[5], &slot(DayPeriod::Morning, "4:00 - 5:00")), &[]);
        selection.toggle(SlotId::new(days[4], &slot(DayPeriod::Evening, "4:00 - 5:00")), &[]);
        selection.toggle(SlotId::new(days[4], &slot(DayPeriod::Midnight, "3:00 - 4:00")), &[]);

        let order: Vec<_> = selection
            .resolved(catalog)
            .into_iter()
            .map(|(id, slot)| (id.date, slot.period))
            .collect();
        assert_eq!(
            order,
            vec![
                (days[4], DayPeriod::Midnight),
                (days[4], DayPeriod::Evening),
                (days[5], DayPeriod::Morning),
            ]
        );
    }

    #[test]
    fn slot_state_prefers_booked_over_selected() {
        let days = window();
        let booked = mock_booked_slots(&days);
        let mut selection = SlotSelection::new();

        let free = slot(DayPeriod::Morning, "6:00 - 7:00");
        let taken = slot(DayPeriod::Morning, "8:00 - 9:00");

        assert_eq!(slot_state(&selection, &booked, days[0], &free), SlotState::Available);
        selection.toggle(SlotId::new(days[0], &free), &booked);
        assert_eq!(slot_state(&selection, &booked, days[0], &free), SlotState::Selected);
        assert_eq!(slot_state(&selection, &booked, days[1], &free), SlotState::Available);
        assert_eq!(slot_state(&selection, &booked, days[0], &taken), SlotState::Booked);
    }

    #[test]
    fn clear_empties_the_selection() {
        let days = window();
        let mut selection = SlotSelection::new();
        selection.toggle(SlotId::new(days[6], &slot(DayPeriod::Evening, "6:00 - 7:00")), &[]);

        selection.clear();

        assert!(selection.is_empty());
        assert_eq!(selection.total_price(SlotCatalog::standard()), 0);
    }

    #[test]
    fn slot_id_renders_date_and_label() {
        let days = window();
        let id = SlotId::new(days[0], &slot(DayPeriod::Morning, "7:00 - 8:00"));
        assert_eq!(id.to_string(), "2025-07-15-7:00 - 8:00");
    }

    #[test]
    fn calendar_anchors_window_and_bookings_to_one_day() {
        let start = NaiveDate::from_ymd_opt(2025, 7, 31).unwrap();
        let calendar = BookingCalendar::starting(start, 7);

        assert_eq!(calendar.start(), start);
        assert_eq!(calendar.dates(), booking_window(start, 7).as_slice());
        assert_eq!(calendar.booked(), mock_booked_slots(calendar.dates()).as_slice());

        let next = start.succ_opt().unwrap();
        assert!(is_slot_booked(calendar.booked(), start, "7:00 - 8:00"));
        assert!(is_slot_booked(calendar.booked(), next, "2:00 - 3:00"));
        assert!(!is_slot_booked(calendar.booked(), next, "7:00 - 8:00"));
    }

    #[test]
    fn calendars_for_different_days_shift_together() {
        let day = NaiveDate::from_ymd_opt(2025, 7, 18).unwrap();
        let later = BookingCalendar::starting(day.succ_opt().unwrap(), 7);
        let earlier = BookingCalendar::starting(day, 7);

        assert_eq!(earlier.dates()[1], later.dates()[0]);
        assert!(is_slot_booked(earlier.booked(), day, "8:00 - 9:00"));
        assert!(!is_slot_booked(later.booked(), day, "8:00 - 9:00"));
        assert!(is_slot_booked(later.booked(), later.start(), "8:00 - 9:00"));
    }
}
