//! Display formatting for timestamps and tour proposals.
//!
//! Generic over the time zone so the app can render in `Local` while tests
//! pin `Utc`.

use chrono::{DateTime, TimeZone};
use std::fmt::Display;

pub const TOUR_DECLINED_MESSAGE: &str =
    "No problem! Feel free to ask about other available times or if you have any other questions.";

/// `14:05` under each bubble
pub fn format_clock<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    dt.format("%H:%M").to_string()
}

/// `Proposed tour: Friday, May 3 at 3:00 PM`
pub fn format_tour_proposal<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    format!(
        "Proposed tour: {} at {}",
        dt.format("%A, %b %-d"),
        dt.format("%-I:%M %p")
    )
}

/// Notice shown after the user confirms a proposed tour
pub fn tour_confirmed_message<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    format!(
        "Tour confirmed for {}! We'll send you a confirmation email shortly.",
        dt.format("%A, %b %-d, %I:%M %p")
    )
}
