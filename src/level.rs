// ══════════════════════════════════════════════════════════════════════════════
// LEVEL MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Log levels and the four fixed event kinds. Each kind is bound to a tier
// threshold and a prefix for its whole lifetime; dispatch is a single
// comparison between the logger's level and that threshold.

use std::fmt;
use std::str::FromStr;
use clap::ValueEnum;
use crate::error::LogError;

/// Minimum severity a logger lets through, ordered from most to least verbose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, ValueEnum)]
pub enum LogLevel {
	All,
	Verbose,
	#[default]
	Normal,
	ErrorsOnly,
	/// Silences every event.
	Test,
}

impl LogLevel {
	pub fn as_str(self) -> &'static str {
		match self {
			LogLevel::All => "all",
			LogLevel::Verbose => "verbose",
			LogLevel::Normal => "normal",
			LogLevel::ErrorsOnly => "errors-only",
			LogLevel::Test => "test",
		}
	}
}

impl fmt::Display for LogLevel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for LogLevel {
	type Err = LogError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let lowered = s.trim().to_ascii_lowercase();
		match lowered.as_str() {
			"all" => Ok(LogLevel::All),
			"verbose" => Ok(LogLevel::Verbose),
			"normal" => Ok(LogLevel::Normal),
			"errors-only" | "errors_only" | "errorsonly" => Ok(LogLevel::ErrorsOnly),
			"test" => Ok(LogLevel::Test),
			_ => Err(LogError::UnknownLevel(s.to_string())),
		}
	}
}

/// The four events a logger owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum EventKind {
	Debug,
	Info,
	Notice,
	Error,
}

impl EventKind {
	pub const ALL: [EventKind; 4] = [EventKind::Debug, EventKind::Info, EventKind::Notice, EventKind::Error];

	/// Slot of this kind in the logger's event table.
	pub(crate) fn index(self) -> usize {
		self as usize
	}

	pub fn prefix(self) -> &'static str {
		match self {
			EventKind::Debug => "DEBUG:",
			EventKind::Info => "INFO:",
			EventKind::Notice => "NOTICE:",
			EventKind::Error => "ERROR:",
		}
	}

	/// Most restrictive level at which this kind is still emitted.
	pub fn threshold(self) -> LogLevel {
		match self {
			EventKind::Debug => LogLevel::All,
			EventKind::Info => LogLevel::Verbose,
			EventKind::Notice => LogLevel::Normal,
			EventKind::Error => LogLevel::ErrorsOnly,
		}
	}

	pub fn is_enabled_at(self, level: LogLevel) -> bool {
		level <= self.threshold()
	}
}
