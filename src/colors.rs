// ══════════════════════════════════════════════════════════════════════════════
// COLORS MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Styling value for an event: foreground, background and text attributes,
// combined with `|`. Painting always emits escape codes; whether a segment is
// painted at all is decided by the event, not by terminal detection.
// SGR sequences are assembled here rather than through `ColoredString`, whose
// output follows `colored`'s process-wide tty detection and override.

use std::ops::BitOr;
use colored::Color;
use crate::constants::{ESC, RESET};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Colors {
	pub fg: Option<Color>,
	pub bg: Option<Color>,
	pub bold: bool,
	pub inverse: bool,
}

impl Colors {
	pub const NONE: Colors = Colors { fg: None, bg: None, bold: false, inverse: false };
	pub const BOLD: Colors = Colors { bold: true, ..Colors::NONE };
	pub const INVERSE: Colors = Colors { inverse: true, ..Colors::NONE };

	pub const fn fg(color: Color) -> Self {
		Colors { fg: Some(color), ..Colors::NONE }
	}

	pub const fn bg(color: Color) -> Self {
		Colors { bg: Some(color), ..Colors::NONE }
	}

	pub fn is_plain(&self) -> bool {
		*self == Colors::NONE
	}

	/// SGR parameter list, e.g. `1;32` for bold green.
	fn sgr(&self) -> String {
		let mut codes: Vec<String> = Vec::new();
		if self.bold {
			codes.push("1".into());
		}
		if self.inverse {
			codes.push("7".into());
		}
		if let Some(fg) = self.fg {
			codes.push(fg.to_fg_str().into_owned());
		}
		if let Some(bg) = self.bg {
			codes.push(bg.to_bg_str().into_owned());
		}
		codes.join(";")
	}

	/// Wraps `text` in this style. A plain style returns the text untouched.
	pub fn paint(&self, text: &str) -> String {
		if self.is_plain() {
			return text.to_string();
		}
		format!("{}{}m{}{}", ESC, self.sgr(), text, RESET)
	}
}

impl From<Color> for Colors {
	fn from(color: Color) -> Self {
		Colors::fg(color)
	}
}

/// Attributes accumulate; a color set on the right replaces the left one.
impl BitOr for Colors {
	type Output = Colors;

	fn bitor(self, rhs: Colors) -> Colors {
		Colors {
			fg: rhs.fg.or(self.fg),
			bg: rhs.bg.or(self.bg),
			bold: self.bold || rhs.bold,
			inverse: self.inverse || rhs.inverse,
		}
	}
}

impl BitOr<Color> for Colors {
	type Output = Colors;

	fn bitor(self, rhs: Color) -> Colors {
		self | Colors::fg(rhs)
	}
}
