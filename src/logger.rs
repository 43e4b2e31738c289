// ══════════════════════════════════════════════════════════════════════════════
// LOGGER MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Leveled logger holding the global switches, the output sink and one event
// per severity. Events are reached through `EventHandle`s borrowed from the
// logger; there is no process-wide instance.

use std::fmt::{self, Display};
use std::path::{Path, PathBuf};
use chrono::{DateTime, Local};
use chrono_tz::Tz;
use crate::event::{emit, Event, EventHandle, Switches};
use crate::error::LogError;
use crate::io::{open_log_file, stderr_sink, Sink};
use crate::level::{EventKind, LogLevel};
use crate::zone::ZonedTime;

/// Source of the current time for timestamps.
pub type Clock = fn() -> DateTime<Local>;

/// Construction settings. `Default` matches `Logger::new()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoggerOptions {
	pub show_timestamp: bool,
	pub show_color: bool,
	pub level: LogLevel,
}

impl Default for LoggerOptions {
	fn default() -> Self {
		Self { show_timestamp: true, show_color: true, level: LogLevel::default() }
	}
}

pub struct Logger {
	level: LogLevel,
	switches: Switches,
	events: [Event; 4],
	sink: Sink,
	clock: Clock,
	time_zone: Option<Tz>,
}

impl Logger {
	/// Timestamps and colors on, level `Normal`, writing to stderr.
	pub fn new() -> Self {
		Self::from_options(LoggerOptions::default())
	}

	/// The first flag sets timestamp display, the second color display. Any
	/// further flags are ignored.
	pub fn with_options(flags: &[bool]) -> Self {
		let mut options = LoggerOptions::default();
		if let Some(&show_timestamp) = flags.first() {
			options.show_timestamp = show_timestamp;
		}
		if let Some(&show_color) = flags.get(1) {
			options.show_color = show_color;
		}
		Self::from_options(options)
	}

	pub fn from_options(options: LoggerOptions) -> Self {
		Self {
			level: options.level,
			switches: Switches { timestamp: options.show_timestamp, color: options.show_color },
			events: EventKind::ALL.map(Event::new),
			sink: stderr_sink(),
			clock: Local::now,
			time_zone: None,
		}
	}

	pub fn log_level(&self) -> LogLevel {
		self.level
	}

	pub fn set_log_level(&mut self, level: LogLevel) {
		self.level = level;
	}

	/// Global timestamp switch, applied to every event on its next render.
	pub fn show_timestamp(&mut self, show: bool) {
		self.switches.timestamp = show;
	}

	/// Global color switch, applied to every event on its next render.
	pub fn show_color(&mut self, show: bool) {
		self.switches.color = show;
	}

	pub fn shows_timestamp(&self) -> bool {
		self.switches.timestamp
	}

	pub fn shows_color(&self) -> bool {
		self.switches.color
	}

	pub fn set_sink(&mut self, sink: Sink) {
		self.sink = sink;
	}

	pub fn set_clock(&mut self, clock: Clock) {
		self.clock = clock;
	}

	/// Renders timestamps in `tz` instead of the local zone.
	pub fn set_time_zone(&mut self, tz: Tz) {
		self.time_zone = Some(tz);
	}

	/// Goes back to the zone from `TZ` or the system setting.
	pub fn use_local_time_zone(&mut self) {
		self.time_zone = None;
	}

	pub fn time_zone(&self) -> Option<Tz> {
		self.time_zone
	}

	/// Appends all further output to `dir/file_name`, creating the directory
	/// path if needed. Returns the full path of the log file.
	pub fn persist(&mut self, dir: impl AsRef<Path>, file_name: &str) -> Result<PathBuf, LogError> {
		let (file, path) = open_log_file(dir.as_ref(), file_name)?;
		self.sink = Box::new(file);
		Ok(path)
	}

	/// Read-only settings of one event.
	pub fn event(&self, kind: EventKind) -> &Event {
		&self.events[kind.index()]
	}

	pub(crate) fn event_mut(&mut self, kind: EventKind) -> &mut Event {
		&mut self.events[kind.index()]
	}

	pub fn handle(&mut self, kind: EventKind) -> EventHandle<'_> {
		EventHandle::new(self, kind)
	}

	pub fn debug(&mut self) -> EventHandle<'_> {
		self.handle(EventKind::Debug)
	}

	pub fn info(&mut self) -> EventHandle<'_> {
		self.handle(EventKind::Info)
	}

	pub fn notice(&mut self) -> EventHandle<'_> {
		self.handle(EventKind::Notice)
	}

	pub fn error(&mut self) -> EventHandle<'_> {
		self.handle(EventKind::Error)
	}

	/// Logs `message` through the `kind` event. Suppressed events return an
	/// empty string without touching the sink.
	pub fn log(&mut self, kind: EventKind, message: impl Display) -> Result<String, LogError> {
		if !kind.is_enabled_at(self.level) {
			return Ok(String::new());
		}
		let now = ZonedTime::resolve((self.clock)(), self.time_zone);
		let event = &self.events[kind.index()];
		emit(event, &self.switches, &now, &message.to_string(), &mut *self.sink)
	}
}

impl Default for Logger {
	fn default() -> Self {
		Self::new()
	}
}

impl fmt::Debug for Logger {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Logger")
			.field("level", &self.level)
			.field("switches", &self.switches)
			.field("events", &self.events)
			.field("time_zone", &self.time_zone)
			.finish_non_exhaustive()
	}
}
