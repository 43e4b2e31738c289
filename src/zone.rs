// ══════════════════════════════════════════════════════════════════════════════
// ZONE MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Resolves the zone a timestamp is rendered in, so `TIME_ZONE` prints an
// abbreviation (`EST`, `CEST`) instead of a bare offset. The local zone comes
// from `TZ` first, then the system setting. When neither names a known zone,
// or the named zone disagrees with the local offset, the offset is printed.

use std::env;
use std::sync::OnceLock;
use chrono::{DateTime, Local, Offset};
use chrono_tz::Tz;
use crate::error::LogError;
use crate::format::TimestampFormat;

/// A point in time together with the zone used to render it.
#[derive(Debug, Clone, Copy)]
pub enum ZonedTime {
	Named(DateTime<Tz>),
	Offset(DateTime<Local>),
}

impl ZonedTime {
	/// Renders `now` in `pinned` if given, otherwise in the local zone.
	pub fn resolve(now: DateTime<Local>, pinned: Option<Tz>) -> Self {
		if let Some(tz) = pinned {
			return ZonedTime::Named(now.with_timezone(&tz));
		}
		match local_zone() {
			Some(tz) => {
				let named = now.with_timezone(&tz);
				if named.offset().fix() == now.offset().fix() {
					ZonedTime::Named(named)
				} else {
					ZonedTime::Offset(now)
				}
			}
			None => ZonedTime::Offset(now),
		}
	}

	pub(crate) fn render(&self, format: TimestampFormat) -> Result<String, LogError> {
		match self {
			ZonedTime::Named(time) => format.render(time),
			ZonedTime::Offset(time) => format.render(time),
		}
	}
}

impl From<DateTime<Tz>> for ZonedTime {
	fn from(time: DateTime<Tz>) -> Self {
		ZonedTime::Named(time)
	}
}

/// IANA zone name to `Tz`. Accepts the POSIX `:Area/City` form.
fn parse_zone(name: &str) -> Option<Tz> {
	name.trim().trim_start_matches(':').parse().ok()
}

/// Local zone, looked up once per process.
pub fn local_zone() -> Option<Tz> {
	static LOCAL_ZONE: OnceLock<Option<Tz>> = OnceLock::new();
	*LOCAL_ZONE.get_or_init(|| {
		env::var("TZ")
			.ok()
			.and_then(|name| parse_zone(&name))
			.or_else(|| iana_time_zone::get_timezone().ok().and_then(|name| parse_zone(&name)))
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::{FixedOffset, TimeZone};
	use chrono_tz::America::New_York;
	use chrono_tz::Europe::Berlin;

	#[test]
	fn test_parse_zone() {
		assert_eq!(parse_zone("America/New_York"), Some(New_York));
		assert_eq!(parse_zone(":Europe/Berlin"), Some(Berlin));
		assert_eq!(parse_zone("Not/A_Zone"), None);
		assert_eq!(parse_zone(""), None);
	}

	#[test]
	fn test_pinned_zone_abbreviates() {
		let winter = New_York.with_ymd_and_hms(2018, 2, 5, 15, 4, 5).unwrap().with_timezone(&Local);
		let summer = New_York.with_ymd_and_hms(2018, 7, 5, 15, 4, 5).unwrap().with_timezone(&Local);
		let format = TimestampFormat::TIME_24_HOUR | TimestampFormat::TIME_ZONE;

		let stamp = ZonedTime::resolve(winter, Some(New_York)).render(format).unwrap();
		assert_eq!(stamp, "15:04:05 EST");
		let stamp = ZonedTime::resolve(summer, Some(New_York)).render(format).unwrap();
		assert_eq!(stamp, "15:04:05 EDT");
		let stamp = ZonedTime::resolve(summer, Some(Berlin)).render(format).unwrap();
		assert_eq!(stamp, "21:04:05 CEST");
	}

	#[test]
	fn test_offset_fallback_prints_offset() {
		let offset = FixedOffset::east_opt(2 * 3600).unwrap();
		let time = offset.with_ymd_and_hms(2018, 2, 5, 9, 0, 1).unwrap();
		assert_eq!(TimestampFormat::TIME_ZONE.render(&time).unwrap(), "+02:00");
	}

	#[test]
	fn test_resolved_zone_matches_local_offset() {
		let now = Local::now();
		match ZonedTime::resolve(now, None) {
			ZonedTime::Named(named) => assert_eq!(named.offset().fix(), now.offset().fix()),
			ZonedTime::Offset(time) => assert_eq!(time, now),
		}
	}
}
