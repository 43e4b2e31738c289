// ══════════════════════════════════════════════════════════════════════════════
// CONSTANTS MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Fixed layout values shared by the formatter and the column aligner.
// - *_COLUMN: minimum cell widths used when padding a written line
// - *_FORMAT: chrono patterns for each timestamp component

/// Cell width when the timestamp is colorized.
pub const TIMESTAMP_COLUMN: usize = 35;

/// Cell width when only the prefix is colorized.
pub const PREFIX_COLUMN: usize = 26;

pub const SHORT_DATE_FORMAT: &str = "%-m/%-d/%Y";
pub const LONG_DATE_FORMAT: &str = "%-d %b %Y";
pub const TIME_12_HOUR_FORMAT: &str = "%-I:%M:%S %p";
pub const TIME_24_HOUR_FORMAT: &str = "%H:%M:%S";
/// Abbreviation for a named zone, numeric offset otherwise.
pub const TIME_ZONE_FORMAT: &str = "%Z";

/// Separates the timestamp cell from the prefix.
pub const SEPARATOR: &str = " - ";

/// Terminates every cell the aligner should pad.
pub const CELL_END: char = '\t';

pub const ESC: &str = "\x1b[";
pub const RESET: &str = "\x1b[0m";
