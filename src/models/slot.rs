//! Working days and time slots.
//!
//! A timetable grid is the cross product of an ordered set of working
//! days and an ordered set of one-hour time slots. Slots are identical
//! across all days.
//!
//! # Time Model
//! Times are minutes since midnight, written as `"HH:MM"` on the wire.
//! A slot is the half-open interval `[start, end)`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Length of every time slot (minutes).
pub const SLOT_MINUTES: u32 = 60;

/// A working day label.
///
/// Purely a label: no calendar or locale semantics are attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All recognized day names, Monday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Parses a day name (case-insensitive, surrounding whitespace ignored).
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|d| d.name().eq_ignore_ascii_case(name))
    }

    /// Canonical day name.
    pub fn name(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A time slot `[start, end)` in minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Slot start (minutes, inclusive).
    pub start_minutes: u32,
    /// Slot end (minutes, exclusive).
    pub end_minutes: u32,
}

impl TimeSlot {
    /// Creates a new slot.
    pub fn new(start_minutes: u32, end_minutes: u32) -> Self {
        Self {
            start_minutes,
            end_minutes,
        }
    }

    /// Slot length (minutes).
    #[inline]
    pub fn duration_minutes(&self) -> u32 {
        self.end_minutes - self.start_minutes
    }

    /// Whether two slots overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start_minutes < other.end_minutes && other.start_minutes < self.end_minutes
    }

    /// Display label, e.g. `"09:00-10:00"`.
    pub fn label(&self) -> String {
        format!(
            "{}-{}",
            format_hhmm(self.start_minutes),
            format_hhmm(self.end_minutes)
        )
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Parses a strict `"HH:MM"` string into minutes since midnight.
///
/// Both fields must be exactly two digits; hours `00..=23`, minutes `00..=59`.
pub fn parse_hhmm(time: &str) -> Option<u32> {
    let (hours, minutes) = time.split_once(':')?;
    if hours.len() != 2 || minutes.len() != 2 {
        return None;
    }
    if !hours.bytes().chain(minutes.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }
    let hours: u32 = hours.parse().ok()?;
    let minutes: u32 = minutes.parse().ok()?;
    if hours >= 24 || minutes >= 60 {
        return None;
    }
    Some(hours * 60 + minutes)
}

/// Formats minutes since midnight as `"HH:MM"`.
pub fn format_hhmm(minutes: u32) -> String {
    format!("{:02}:{:02}", (minutes / 60) % 24, minutes % 60)
}

/// Builds the daily slot grid.
///
/// Slots start at `start`, step by [`SLOT_MINUTES`], and stop when the next
/// slot would end past `end` or when `max_per_day` slots exist. Remainder
/// minutes before `end` are discarded.
///
/// Returns an empty grid when either time is malformed or `start >= end`;
/// callers treat that as a configuration error.
///
/// # Example
/// ```
/// use u_timetable::models::build_time_slots;
///
/// let slots = build_time_slots("09:00", "12:00", 6);
/// let labels: Vec<String> = slots.iter().map(|s| s.label()).collect();
/// assert_eq!(labels, ["09:00-10:00", "10:00-11:00", "11:00-12:00"]);
/// ```
pub fn build_time_slots(start: &str, end: &str, max_per_day: usize) -> Vec<TimeSlot> {
    let (Some(start), Some(end)) = (parse_hhmm(start), parse_hhmm(end)) else {
        return Vec::new();
    };
    if start >= end {
        return Vec::new();
    }

    let mut slots = Vec::new();
    let mut current = start;
    while slots.len() < max_per_day && current + SLOT_MINUTES <= end {
        slots.push(TimeSlot::new(current, current + SLOT_MINUTES));
        current += SLOT_MINUTES;
    }
    slots
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hhmm() {
        assert_eq!(parse_hhmm("00:00"), Some(0));
        assert_eq!(parse_hhmm("09:30"), Some(570));
        assert_eq!(parse_hhmm("23:59"), Some(1439));
        assert_eq!(parse_hhmm("24:00"), None);
        assert_eq!(parse_hhmm("9:00"), None);
        assert_eq!(parse_hhmm("09:60"), None);
        assert_eq!(parse_hhmm("0900"), None);
        assert_eq!(parse_hhmm("ab:cd"), None);
    }

    #[test]
    fn test_format_hhmm() {
        assert_eq!(format_hhmm(0), "00:00");
        assert_eq!(format_hhmm(570), "09:30");
    }

    #[test]
    fn test_three_hour_window() {
        let slots = build_time_slots("09:00", "12:00", 6);
        assert_eq!(slots.len(), 3);
        assert_eq!(slots[0].label(), "09:00-10:00");
        assert_eq!(slots[1].label(), "10:00-11:00");
        assert_eq!(slots[2].label(), "11:00-12:00");
    }

    #[test]
    fn test_capped_by_max_per_day() {
        let slots = build_time_slots("08:00", "18:00", 4);
        assert_eq!(slots.len(), 4);
        assert_eq!(slots[3].label(), "11:00-12:00");
    }

    #[test]
    fn test_remainder_discarded() {
        let slots = build_time_slots("09:00", "11:45", 12);
        assert_eq!(slots.len(), 2);
        assert_eq!(slots[1].end_minutes, 11 * 60);
    }

    #[test]
    fn test_empty_when_start_not_before_end() {
        assert!(build_time_slots("12:00", "12:00", 6).is_empty());
        assert!(build_time_slots("13:00", "12:00", 6).is_empty());
        assert!(build_time_slots("09:00", "09:30", 6).is_empty());
        assert!(build_time_slots("bad", "12:00", 6).is_empty());
    }

    #[test]
    fn test_slot_count_formula() {
        for (start, end, max) in [("08:00", "17:00", 6), ("07:30", "10:15", 12), ("10:00", "20:00", 12)] {
            let slots = build_time_slots(start, end, max);
            let span = parse_hhmm(end).unwrap() - parse_hhmm(start).unwrap();
            let expected = max.min((span / SLOT_MINUTES) as usize);
            assert_eq!(slots.len(), expected);
            for pair in slots.windows(2) {
                assert!(pair[0].start_minutes < pair[1].start_minutes);
                assert!(!pair[0].overlaps(&pair[1]));
            }
        }
    }

    #[test]
    fn test_weekday_from_name() {
        assert_eq!(Weekday::from_name("monday"), Some(Weekday::Monday));
        assert_eq!(Weekday::from_name(" Saturday "), Some(Weekday::Saturday));
        assert_eq!(Weekday::from_name("Funday"), None);
        assert_eq!(Weekday::Friday.to_string(), "Friday");
    }
}
