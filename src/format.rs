// ══════════════════════════════════════════════════════════════════════════════
// FORMAT MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Flag sets configuring what a timestamp contains and which parts of a line
// get colored. Both can hold arbitrary bits (`from_bits_retain`), so both are
// checked when stored and the timestamp format is checked again when rendered.

use std::str::FromStr;
use bitflags::bitflags;
use chrono::{DateTime, TimeZone};
use crate::constants::{
	LONG_DATE_FORMAT, SHORT_DATE_FORMAT, TIME_12_HOUR_FORMAT, TIME_24_HOUR_FORMAT, TIME_ZONE_FORMAT,
};
use crate::error::LogError;

bitflags! {
	/// Components of a rendered timestamp.
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
	pub struct TimestampFormat: u32 {
		/// `1/2/2006`
		const SHORT_DATE = 1 << 0;
		/// `2 Jan 2006`
		const LONG_DATE = 1 << 1;
		/// `3:04:05 PM`
		const TIME_12_HOUR = 1 << 2;
		/// `15:04:05`
		const TIME_24_HOUR = 1 << 3;
		const TIME_ZONE = 1 << 4;
	}
}

bitflags! {
	/// Segments of a line that receive the event's colors.
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
	pub struct ColorTarget: u32 {
		const TIMESTAMP = 1 << 0;
		const PREFIX = 1 << 1;
		const MESSAGE = 1 << 2;
	}
}

const DATE_MASK: TimestampFormat = TimestampFormat::SHORT_DATE.union(TimestampFormat::LONG_DATE);
const HOUR_MASK: TimestampFormat = TimestampFormat::TIME_12_HOUR.union(TimestampFormat::TIME_24_HOUR);

impl TimestampFormat {
	/// At most one date style, at most one hour style, no unknown bits.
	pub fn is_valid(self) -> bool {
		if self.bits() & !Self::all().bits() != 0 {
			return false;
		}
		!self.contains(DATE_MASK) && !self.contains(HOUR_MASK)
	}

	/// Returns the format unchanged if it is valid.
	pub fn validated(self) -> Result<Self, LogError> {
		if self.is_valid() {
			Ok(self)
		} else {
			Err(LogError::InvalidTimestampFormat(self))
		}
	}

	/// Formats `time` with the selected components, space-joined in
	/// date, time, zone order. Fails without producing text on an invalid mask.
	pub fn render<Tz>(self, time: &DateTime<Tz>) -> Result<String, LogError>
	where
		Tz: TimeZone,
		Tz::Offset: std::fmt::Display,
	{
		let format = self.validated()?;
		let mut words: Vec<String> = Vec::with_capacity(3);

		if format.contains(Self::SHORT_DATE) {
			words.push(time.format(SHORT_DATE_FORMAT).to_string());
		} else if format.contains(Self::LONG_DATE) {
			words.push(time.format(LONG_DATE_FORMAT).to_string());
		}

		if format.contains(Self::TIME_12_HOUR) {
			words.push(time.format(TIME_12_HOUR_FORMAT).to_string());
		} else if format.contains(Self::TIME_24_HOUR) {
			words.push(time.format(TIME_24_HOUR_FORMAT).to_string());
		}

		if format.contains(Self::TIME_ZONE) {
			words.push(time.format(TIME_ZONE_FORMAT).to_string());
		}

		Ok(words.join(" "))
	}
}

impl Default for TimestampFormat {
	fn default() -> Self {
		Self::SHORT_DATE | Self::TIME_12_HOUR | Self::TIME_ZONE
	}
}

/// Parses a comma list such as `short-date,12h,zone`. An empty string is the
/// empty format.
impl FromStr for TimestampFormat {
	type Err = LogError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let mut format = Self::empty();
		for word in s.split(',').map(str::trim).filter(|w| !w.is_empty()) {
			format |= match word.to_ascii_lowercase().as_str() {
				"short-date" | "short" => Self::SHORT_DATE,
				"long-date" | "long" => Self::LONG_DATE,
				"12h" | "time-12-hour" => Self::TIME_12_HOUR,
				"24h" | "time-24-hour" => Self::TIME_24_HOUR,
				"zone" | "tz" | "time-zone" => Self::TIME_ZONE,
				_ => return Err(LogError::UnknownFormatFlag(word.to_string())),
			};
		}
		format.validated()
	}
}

impl ColorTarget {
	/// Any subset of the three known segments.
	pub fn is_valid(self) -> bool {
		self.bits() & !Self::all().bits() == 0
	}

	pub fn validated(self) -> Result<Self, LogError> {
		if self.is_valid() {
			Ok(self)
		} else {
			Err(LogError::InvalidColorTarget(self))
		}
	}

	/// Minimum cell width for aligning a written line.
	pub fn column_width(self) -> usize {
		use crate::constants::{PREFIX_COLUMN, TIMESTAMP_COLUMN};
		if self.contains(Self::TIMESTAMP) {
			TIMESTAMP_COLUMN
		} else if self.contains(Self::PREFIX) {
			PREFIX_COLUMN
		} else {
			0
		}
	}
}

impl Default for ColorTarget {
	fn default() -> Self {
		Self::PREFIX
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::{FixedOffset, Utc};
	use chrono_tz::America::New_York;

	fn afternoon() -> DateTime<Utc> {
		Utc.with_ymd_and_hms(2018, 2, 5, 15, 4, 5).unwrap()
	}

	#[test]
	fn test_validate_timestamp() {
		use TimestampFormat as F;
		let invalid = [
			F::SHORT_DATE | F::LONG_DATE,
			F::TIME_12_HOUR | F::TIME_24_HOUR,
			F::SHORT_DATE | F::LONG_DATE | F::TIME_12_HOUR,
			F::SHORT_DATE | F::TIME_12_HOUR | F::TIME_24_HOUR,
			F::SHORT_DATE | F::LONG_DATE | F::TIME_12_HOUR | F::TIME_24_HOUR,
			F::SHORT_DATE | F::LONG_DATE | F::TIME_24_HOUR | F::TIME_ZONE,
			F::all(),
			F::from_bits_retain(1 << 7),
		];
		for format in invalid {
			assert!(!format.is_valid(), "{:?} should be invalid", format);
		}

		let valid = [
			F::empty(),
			F::SHORT_DATE | F::TIME_12_HOUR | F::TIME_ZONE,
			F::LONG_DATE | F::TIME_24_HOUR | F::TIME_ZONE,
			F::LONG_DATE,
			F::TIME_12_HOUR,
			F::LONG_DATE | F::TIME_ZONE,
			F::TIME_ZONE,
		];
		for format in valid {
			assert!(format.is_valid(), "{:?} should be valid", format);
		}
	}

	#[test]
	fn test_render_components() {
		use TimestampFormat as F;
		let t = afternoon();
		let cases = [
			(F::SHORT_DATE, "2/5/2018"),
			(F::LONG_DATE, "5 Feb 2018"),
			(F::TIME_12_HOUR, "3:04:05 PM"),
			(F::TIME_24_HOUR, "15:04:05"),
			(F::SHORT_DATE | F::TIME_24_HOUR, "2/5/2018 15:04:05"),
			(F::LONG_DATE | F::TIME_12_HOUR, "5 Feb 2018 3:04:05 PM"),
			(F::empty(), ""),
		];
		for (format, expected) in cases {
			assert_eq!(format.render(&t).unwrap(), expected, "{:?}", format);
		}
	}

	#[test]
	fn test_render_zone_is_last() {
		let t = New_York.with_ymd_and_hms(2018, 2, 5, 9, 0, 1).unwrap();
		let f = TimestampFormat::LONG_DATE | TimestampFormat::TIME_12_HOUR | TimestampFormat::TIME_ZONE;
		assert_eq!(f.render(&t).unwrap(), "5 Feb 2018 9:00:01 AM EST");
		assert_eq!(TimestampFormat::TIME_ZONE.render(&t).unwrap(), "EST");

		let offset = FixedOffset::east_opt(2 * 3600).unwrap();
		let t = offset.with_ymd_and_hms(2018, 2, 5, 9, 0, 1).unwrap();
		assert_eq!(f.render(&t).unwrap(), "5 Feb 2018 9:00:01 AM +02:00");
	}

	#[test]
	fn test_render_rejects_invalid() {
		let bad = TimestampFormat::SHORT_DATE | TimestampFormat::LONG_DATE;
		assert!(matches!(bad.render(&afternoon()), Err(LogError::InvalidTimestampFormat(f)) if f == bad));
	}

	#[test]
	fn test_parse_format() {
		let f: TimestampFormat = "short-date, 12h,zone".parse().unwrap();
		assert_eq!(f, TimestampFormat::default());
		assert_eq!("".parse::<TimestampFormat>().unwrap(), TimestampFormat::empty());
		assert!(matches!("long,fortnight".parse::<TimestampFormat>(), Err(LogError::UnknownFormatFlag(w)) if w == "fortnight"));
		assert!(matches!("12h,24h".parse::<TimestampFormat>(), Err(LogError::InvalidTimestampFormat(_))));
	}

	#[test]
	fn test_color_target_subsets() {
		for bits in 0..8u32 {
			assert!(ColorTarget::from_bits_retain(bits).is_valid());
		}
		assert!(!ColorTarget::from_bits_retain(123).is_valid());
		assert!(!ColorTarget::from_bits_retain(1 << 3).is_valid());
	}

	#[test]
	fn test_column_width() {
		assert_eq!(ColorTarget::TIMESTAMP.column_width(), 35);
		assert_eq!((ColorTarget::TIMESTAMP | ColorTarget::PREFIX).column_width(), 35);
		assert_eq!(ColorTarget::PREFIX.column_width(), 26);
		assert_eq!((ColorTarget::PREFIX | ColorTarget::MESSAGE).column_width(), 26);
		assert_eq!(ColorTarget::MESSAGE.column_width(), 0);
		assert_eq!(ColorTarget::empty().column_width(), 0);
	}
}
