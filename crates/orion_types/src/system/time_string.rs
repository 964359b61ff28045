//! Formatted time strings.
//!
//! Thin helpers over `chrono` strftime formatting. Every function takes the
//! point in time explicitly, except [`now`] which reads the local clock.
//!
//! Formatting is bounded: an output of [`MAXIMUM_STRING_BUFFER`] bytes or
//! more is an error, as is an unknown specifier or an empty result.
//! [`format`] turns those errors into [`FORMAT_ERROR`].

use std::fmt::{Display, Write};

use chrono::{
	DateTime, Local, TimeZone,
	format::{Item, StrftimeItems},
};
use log::warn;

use crate::error::OrionError;

/// Upper bound for formatted strings, including a terminator.
pub const MAXIMUM_STRING_BUFFER: usize = 64;

/// `hh:mm:ss`
pub const TIME: &str = "%H:%M:%S";

/// `ss`
pub const SECONDS: &str = "%S";

/// `mm`
pub const MINUTES: &str = "%M";

/// `hh`
pub const HOURS: &str = "%H";

/// `weekday, dd.mm.yyyy`
pub const DATE: &str = "%A, %d.%m.%Y";

/// Time of day at which a new calendar date starts, as produced by [`TIME`].
pub const NEW_DATE: &str = "00:00:00";

/// Returned by [`format`] when formatting fails.
pub const FORMAT_ERROR: &str = "#! Could not create time string";

/// `asctime` layout: `Www Mmm dd hh:mm:ss yyyy\n`.
const ASCII_DATE: &str = "%a %b %e %H:%M:%S %Y\n";

/// Formats `time` with a strftime-style format string.
///
/// # Errors
///
/// Returns [`OrionError::InvalidTimeFormat`] for unknown specifiers or an
/// empty result, and [`OrionError::TimeStringTooLong`] if the result does not
/// fit into [`MAXIMUM_STRING_BUFFER`].
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use orion_types::system::time_string;
///
/// let time = Utc.with_ymd_and_hms(2014, 3, 7, 9, 5, 1).unwrap();
/// assert_eq!(time_string::try_format(time_string::TIME, &time).unwrap(), "09:05:01");
/// ```
pub fn try_format<Tz>(format: &str, time: &DateTime<Tz>) -> Result<String, OrionError>
where
	Tz: TimeZone,
	Tz::Offset: Display,
{
	let items: Vec<Item<'_>> = StrftimeItems::new(format).collect();
	if items.iter().any(|item| matches!(item, Item::Error)) {
		return Err(OrionError::InvalidTimeFormat(format.to_string()));
	}

	let mut output = String::new();
	write!(output, "{}", time.format_with_items(items.iter()))
		.map_err(|_| OrionError::InvalidTimeFormat(format.to_string()))?;

	if output.is_empty() {
		return Err(OrionError::InvalidTimeFormat(format.to_string()));
	}
	if output.len() >= MAXIMUM_STRING_BUFFER {
		return Err(OrionError::TimeStringTooLong {
			length: output.len(),
			limit: MAXIMUM_STRING_BUFFER,
		});
	}
	Ok(output)
}

/// Formats `time`, falling back to [`FORMAT_ERROR`] on failure.
pub fn format<Tz>(format: &str, time: &DateTime<Tz>) -> String
where
	Tz: TimeZone,
	Tz::Offset: Display,
{
	try_format(format, time).unwrap_or_else(|e| {
		warn!("Cannot format time with {:?}: {}", format, e);
		FORMAT_ERROR.to_string()
	})
}

/// Formats the current local time.
pub fn now(format_str: &str) -> String {
	format(format_str, &Local::now())
}

/// Seconds since the Unix epoch.
pub fn raw_time<Tz: TimeZone>(time: &DateTime<Tz>) -> String {
	time.timestamp().to_string()
}

/// Seconds of the minute, `00` to `60`.
pub fn seconds<Tz>(time: &DateTime<Tz>) -> String
where
	Tz: TimeZone,
	Tz::Offset: Display,
{
	format(SECONDS, time)
}

/// Minutes of the hour, `00` to `59`.
pub fn minutes<Tz>(time: &DateTime<Tz>) -> String
where
	Tz: TimeZone,
	Tz::Offset: Display,
{
	format(MINUTES, time)
}

/// Hours of the day, `00` to `23`.
pub fn hours<Tz>(time: &DateTime<Tz>) -> String
where
	Tz: TimeZone,
	Tz::Offset: Display,
{
	format(HOURS, time)
}

/// Calendar date in the C `asctime` layout, with a trailing newline.
pub fn ascii_date<Tz>(time: &DateTime<Tz>) -> String
where
	Tz: TimeZone,
	Tz::Offset: Display,
{
	time.format(ASCII_DATE).to_string()
}
