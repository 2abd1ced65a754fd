use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::utils::date::date_key;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sport {
    Cricket,
    Pickleball,
}

impl Sport {
    pub const ALL: [Sport; 2] = [Sport::Cricket, Sport::Pickleball];

    /// Anything that isn't "cricket" books the pickleball court.
    pub fn from_segment(segment: &str) -> Self {
        if segment.trim().eq_ignore_ascii_case("cricket") {
            Sport::Cricket
        } else {
            Sport::Pickleball
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Sport::Cricket => "cricket",
            Sport::Pickleball => "pickleball",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Sport::Cricket => "Cricket",
            Sport::Pickleball => "Pickleball",
        }
    }

    pub fn venue_title(&self) -> &'static str {
        match self {
            Sport::Cricket => "Cricket Field",
            Sport::Pickleball => "Pickleball Court",
        }
    }

    pub fn blurb(&self) -> &'static str {
        match self {
            Sport::Cricket => "Experience world-class cricket facilities with professional-grade pitches and practice nets.",
            Sport::Pickleball => "Premium pickleball courts designed for both casual play and competitive matches.",
        }
    }

    /// Advertised rate on the home page, in rupees per hour.
    pub fn hourly_rate(&self) -> u32 {
        match self {
            Sport::Cricket => 1500,
            Sport::Pickleball => 800,
        }
    }

    pub fn icon_class(&self) -> &'static str {
        match self {
            Sport::Cricket => "fas fa-baseball-bat-ball",
            Sport::Pickleball => "fas fa-table-tennis-paddle-ball",
        }
    }

    pub fn booking_path(&self) -> String {
        format!("/booking/{}", self.slug())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DayPeriod {
    Midnight,
    Morning,
    Afternoon,
    Evening,
}

impl DayPeriod {
    pub const ALL: [DayPeriod; 4] = [
        DayPeriod::Midnight,
        DayPeriod::Morning,
        DayPeriod::Afternoon,
        DayPeriod::Evening,
    ];

    pub fn heading(&self) -> &'static str {
        match self {
            DayPeriod::Midnight => "Mid-Night Slots",
            DayPeriod::Morning => "Morning Slots",
            DayPeriod::Afternoon => "Afternoon Slots",
            DayPeriod::Evening => "Evening Slots",
        }
    }

    pub fn icon_class(&self) -> &'static str {
        match self {
            DayPeriod::Midnight => "fas fa-moon text-gray-500",
            DayPeriod::Morning => "fas fa-cloud-sun text-amber-600",
            DayPeriod::Afternoon => "fas fa-sun text-amber-500",
            DayPeriod::Evening => "fas fa-city text-purple-700",
        }
    }

    pub fn heading_class(&self) -> &'static str {
        match self {
            DayPeriod::Midnight => "text-gray-500",
            DayPeriod::Morning => "text-amber-700",
            DayPeriod::Afternoon => "text-amber-500",
            DayPeriod::Evening => "text-purple-700",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Literal time range shown to the user, e.g. "7:00 - 8:00".
    pub time: String,
    pub price: u32,
    pub period: DayPeriod,
}

impl TimeSlot {
    pub fn new(time: &str, price: u32, period: DayPeriod) -> Self {
        Self {
            time: time.to_string(),
            price,
            period,
        }
    }
}

impl PartialEq for TimeSlot {
    fn eq(&self, other: &Self) -> bool {
        self.period == other.period && self.time == other.time
    }
}

impl Eq for TimeSlot {}

impl PartialOrd for TimeSlot {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TimeSlot {
    fn cmp(&self, other: &Self) -> Ordering {
        self.period
            .cmp(&other.period)
            .then_with(|| self.time.cmp(&other.time))
    }
}

/// A slot somebody else already holds. Only ever used for membership tests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookedSlot {
    pub date: NaiveDate,
    pub time: String,
}

impl BookedSlot {
    pub fn new(date: NaiveDate, time: &str) -> Self {
        Self {
            date,
            time: time.to_string(),
        }
    }
}

/// Identifies one slot on one day inside a selection.
///
/// The period is part of the key because labels repeat across periods at
/// different prices: morning and evening both have "7:00 - 8:00". Without it
/// the two would collide and the price lookup could pick the wrong one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotId {
    pub date: NaiveDate,
    pub period: DayPeriod,
    pub time: String,
}

impl SlotId {
    pub fn new(date: NaiveDate, slot: &TimeSlot) -> Self {
        Self {
            date,
            period: slot.period,
            time: slot.time.clone(),
        }
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", date_key(self.date), self.time)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState {
    Available,
    Selected,
    Booked,
}
