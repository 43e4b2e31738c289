// ══════════════════════════════════════════════════════════════════════════════
// ERROR MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Every failure the logger can report. Nothing here is ever logged by the
// logger itself; callers decide what to do with it.

use std::io;
use std::path::PathBuf;
use crate::format::{ColorTarget, TimestampFormat};

#[derive(Debug, thiserror::Error)]
pub enum LogError {
	/// Both date styles or both hour styles requested at once.
	#[error("invalid timestamp format flag combination: {0:?}")]
	InvalidTimestampFormat(TimestampFormat),

	#[error("invalid color format: {0:?}")]
	InvalidColorTarget(ColorTarget),

	#[error("failed to write log line: {0}")]
	Sink(#[from] io::Error),

	#[error("cannot open log file '{}': {source}", .path.display())]
	Persist {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	#[error("unknown timestamp format flag '{0}'")]
	UnknownFormatFlag(String),

	#[error("unknown log level '{0}'")]
	UnknownLevel(String),
}
