// ══════════════════════════════════════════════════════════════════════════════
// EVENT MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Per-severity formatter. An `Event` only stores its own settings; the
// logger-wide switches are handed in at render time so the two can never
// drift apart. `EventHandle` is the borrowed view callers use to configure an
// event and log through it.

use std::fmt::Display;
use colored::Color;
use crate::align::pad_cells;
use crate::colors::Colors;
use crate::constants::{CELL_END, SEPARATOR};
use crate::error::LogError;
use crate::format::{ColorTarget, TimestampFormat};
use crate::level::EventKind;
use crate::logger::Logger;
use crate::zone::ZonedTime;

/// Logger-wide display switches, read by every event when it renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Switches {
	pub timestamp: bool,
	pub color: bool,
}

impl Default for Switches {
	fn default() -> Self {
		Self { timestamp: true, color: true }
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
	kind: EventKind,
	pub(crate) show_timestamp: bool,
	pub(crate) show_color: bool,
	pub(crate) colors: Colors,
	pub(crate) format: TimestampFormat,
	pub(crate) color_target: ColorTarget,
}

impl Event {
	pub(crate) fn new(kind: EventKind) -> Self {
		let colors = match kind {
			EventKind::Debug => Colors::fg(Color::Green),
			EventKind::Info => Colors::fg(Color::White),
			EventKind::Notice => Colors::fg(Color::Yellow),
			EventKind::Error => Colors::fg(Color::Red),
		};
		Self {
			kind,
			show_timestamp: true,
			show_color: true,
			colors,
			format: TimestampFormat::default(),
			color_target: ColorTarget::default(),
		}
	}

	pub fn kind(&self) -> EventKind {
		self.kind
	}

	pub fn prefix(&self) -> &'static str {
		self.kind.prefix()
	}

	pub fn colors(&self) -> Colors {
		self.colors
	}

	pub fn format(&self) -> TimestampFormat {
		self.format
	}

	pub fn color_target(&self) -> ColorTarget {
		self.color_target
	}

	pub fn shows_timestamp(&self) -> bool {
		self.show_timestamp
	}

	pub fn shows_color(&self) -> bool {
		self.show_color
	}

	fn timestamp_enabled(&self, switches: &Switches) -> bool {
		switches.timestamp && self.show_timestamp
	}

	/// Whether `target` is painted given the current switches.
	fn paints(&self, switches: &Switches, target: ColorTarget) -> bool {
		switches.color && self.show_color && self.color_target.contains(target)
	}

	fn paint_if(&self, switches: &Switches, target: ColorTarget, text: &str) -> String {
		if self.paints(switches, target) {
			self.colors.paint(text)
		} else {
			text.to_string()
		}
	}

	/// Timestamp cell including its terminating tab. Empty when timestamps are
	/// switched off.
	pub(crate) fn build_timestamp(&self, switches: &Switches, now: &ZonedTime) -> Result<String, LogError> {
		let stamp = if self.timestamp_enabled(switches) {
			now.render(self.format)?
		} else {
			String::new()
		};
		let mut cell = self.paint_if(switches, ColorTarget::TIMESTAMP, &stamp);
		cell.push(CELL_END);
		Ok(cell)
	}

	/// Full line: `[timestamp\t - ]prefix message\t\n`.
	pub(crate) fn build_message(&self, switches: &Switches, now: &ZonedTime, message: &str) -> Result<String, LogError> {
		let timestamp = self.build_timestamp(switches, now)?;
		let prefix = self.paint_if(switches, ColorTarget::PREFIX, self.prefix());
		let message = self.paint_if(switches, ColorTarget::MESSAGE, message);

		let mut line = if self.timestamp_enabled(switches) {
			format!("{}{}{} {}", timestamp, SEPARATOR, prefix, message)
		} else {
			format!("{} {}", prefix, message)
		};
		line.push(CELL_END);
		line.push('\n');
		Ok(line)
	}

	pub(crate) fn column_width(&self) -> usize {
		self.color_target.column_width()
	}
}

/// Mutable view of one of a logger's events.
pub struct EventHandle<'a> {
	logger: &'a mut Logger,
	kind: EventKind,
}

impl<'a> EventHandle<'a> {
	pub(crate) fn new(logger: &'a mut Logger, kind: EventKind) -> Self {
		Self { logger, kind }
	}

	fn event(&self) -> &Event {
		self.logger.event(self.kind)
	}

	fn event_mut(&mut self) -> &mut Event {
		self.logger.event_mut(self.kind)
	}

	pub fn kind(&self) -> EventKind {
		self.kind
	}

	pub fn prefix(&self) -> &'static str {
		self.kind.prefix()
	}

	pub fn format(&self) -> TimestampFormat {
		self.event().format
	}

	pub fn color_target(&self) -> ColorTarget {
		self.event().color_target
	}

	pub fn colors(&self) -> Colors {
		self.event().colors
	}

	/// Per-event timestamp switch; the logger's switch must also be on.
	pub fn show_timestamp(&mut self, show: bool) {
		self.event_mut().show_timestamp = show;
	}

	/// Per-event color switch; the logger's switch must also be on.
	pub fn show_color(&mut self, show: bool) {
		self.event_mut().show_color = show;
	}

	pub fn set_colors(&mut self, colors: impl Into<Colors>) {
		self.event_mut().colors = colors.into();
	}

	/// Replaces the timestamp format. An invalid combination is rejected and the
	/// previous format kept.
	pub fn set_format(&mut self, format: TimestampFormat) -> Result<(), LogError> {
		self.event_mut().format = format.validated()?;
		Ok(())
	}

	/// Replaces the colored segments. Unknown bits are rejected and the previous
	/// target kept.
	pub fn set_color_format(&mut self, target: ColorTarget) -> Result<(), LogError> {
		self.event_mut().color_target = target.validated()?;
		Ok(())
	}

	/// Logs `message` if the logger's level lets this event through. Returns
	/// the rendered line, or an empty string when suppressed.
	pub fn log(&mut self, message: impl Display) -> Result<String, LogError> {
		self.logger.log(self.kind, message)
	}
}

/// Renders and writes one line for `event`. Used by `Logger::log` after the
/// level check passed.
pub(crate) fn emit(
	event: &Event,
	switches: &Switches,
	now: &ZonedTime,
	message: &str,
	sink: &mut dyn std::io::Write,
) -> Result<String, LogError> {
	let line = event.build_message(switches, now, message)?;
	let padded = pad_cells(&line, event.column_width());
	sink.write_all(padded.as_bytes())?;
	sink.flush()?;
	Ok(line)
}
