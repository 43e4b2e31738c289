// ══════════════════════════════════════════════════════════════════════════════
// ALIGN MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Column padding for written lines. Every tab-terminated cell is widened with
// spaces to at least `min_width` characters and the tab itself is dropped.
// Escape sequences count towards the width, so colored and plain cells with
// the same visible text pad differently; the fixed widths account for that.

use crate::constants::CELL_END;

/// Pads each cell of `line` to `min_width`. Text after the last tab (normally
/// just the newline) is copied as is.
pub fn pad_cells(line: &str, min_width: usize) -> String {
	let mut out = String::with_capacity(line.len() + min_width * 2);
	let mut rest = line;

	while let Some(end) = rest.find(CELL_END) {
		let cell = &rest[..end];
		out.push_str(cell);
		let width = cell.chars().count();
		if width < min_width {
			out.extend(std::iter::repeat_n(' ', min_width - width));
		}
		rest = &rest[end + CELL_END.len_utf8()..];
	}
	out.push_str(rest);
	out
}
