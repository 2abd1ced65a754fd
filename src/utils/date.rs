use chrono::{Datelike, Duration, NaiveDate};
use leptos::prelude::*;

pub const BOOKING_WINDOW_DAYS: usize = 7;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn booking_window(start: NaiveDate, days: usize) -> Vec<NaiveDate> {
    (0..days)
        .map(|offset| start + Duration::days(offset as i64))
        .collect()
}

pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn day_label(index: usize, date: NaiveDate) -> String {
    if index == 0 {
        "Today".to_string()
    } else {
        date.format("%a").to_string()
    }
}

pub fn day_number(date: NaiveDate) -> u32 {
    date.day()
}

pub fn month_heading(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

pub fn long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

#[component]
pub fn DateDisplay(date: NaiveDate) -> impl IntoView {
    view! {
        <time datetime=date_key(date)>{long_date(date)}</time>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn window_crosses_month_boundaries() {
        let window = booking_window(ymd(2025, 7, 29), BOOKING_WINDOW_DAYS);

        assert_eq!(window.len(), 7);
        assert_eq!(window[0], ymd(2025, 7, 29));
        assert_eq!(window[3], ymd(2025, 8, 1));
        assert_eq!(window[6], ymd(2025, 8, 4));
    }

    #[test]
    fn labels_use_today_then_weekdays() {
        let window = booking_window(ymd(2025, 7, 15), 3);

        assert_eq!(day_label(0, window[0]), "Today");
        assert_eq!(day_label(1, window[1]), "Wed");
        assert_eq!(day_label(2, window[2]), "Thu");
        assert_eq!(day_number(window[2]), 17);
    }

    #[test]
    fn formats() {
        assert_eq!(date_key(ymd(2025, 7, 5)), "2025-07-05");
        assert_eq!(month_heading(ymd(2025, 7, 5)), "July 2025");
        assert_eq!(long_date(ymd(2025, 7, 5)), "July 5, 2025");
    }
}
