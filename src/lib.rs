// ╔══════════════════════════════════════════════════════════════════════════════╗
// ║                                TINTLOG                                       ║
// ║                  Leveled, Colored, Timestamped Logging                       ║
// ╚══════════════════════════════════════════════════════════════════════════════╝
//
// 🎯 WHAT IT DOES
// ---------------
// A logger owns four events (DEBUG, INFO, NOTICE, ERROR). Each event filters
// itself against the logger's level, then renders a line:
//
//   [timestamp] - PREFIX: message
//
// The timestamp is built from a small set of flags (short/long date, 12/24
// hour clock, zone abbreviation). Colors can be applied to the timestamp,
// the prefix and the message independently. Timestamps and colors show only when both the
// logger-wide switch and the event's own switch are on.
//
// 📦 LEVELS
// ---------
//   All        → DEBUG, INFO, NOTICE, ERROR
//   Verbose    → INFO, NOTICE, ERROR
//   Normal     → NOTICE, ERROR           (default)
//   ErrorsOnly → ERROR
//   Test       → nothing
//
// 📜 LICENSE: MIT
//
// ══════════════════════════════════════════════════════════════════════════════

mod align;
mod colors;
mod constants;
mod error;
mod event;
mod format;
mod io;
mod level;
mod logger;
mod zone;

pub use chrono_tz::Tz;
pub use colored::Color;
pub use colors::Colors;
pub use error::LogError;
pub use event::{Event, EventHandle};
pub use format::{ColorTarget, TimestampFormat};
pub use io::{MemorySink, Sink};
pub use level::{EventKind, LogLevel};
pub use logger::{Clock, Logger, LoggerOptions};
pub use zone::{local_zone, ZonedTime};
