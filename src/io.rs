// ══════════════════════════════════════════════════════════════════════════════
// I/O MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Sinks a logger can write finished lines to: stderr, an append-only log file
// created on demand, or an in-memory buffer that can be read back.

use std::cell::RefCell;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use crate::error::LogError;

/// Destination for rendered lines.
pub type Sink = Box<dyn Write>;

pub fn stderr_sink() -> Sink {
	Box::new(io::stderr())
}

/// Creates `dir` (and its parents) and opens `dir/file_name` for appending.
pub fn open_log_file(dir: &Path, file_name: &str) -> Result<(File, PathBuf), LogError> {
	fs::create_dir_all(dir).map_err(|source| LogError::Persist { path: dir.to_path_buf(), source })?;

	let path = dir.join(file_name);
	let file = OpenOptions::new()
		.create(true)
		.append(true)
		.open(&path)
		.map_err(|source| LogError::Persist { path: path.clone(), source })?;
	Ok((file, path))
}

/// Shared in-memory sink. Clones write to the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemorySink(Rc<RefCell<Vec<u8>>>);

impl MemorySink {
	pub fn new() -> Self {
		Self::default()
	}

	/// Everything written so far, lossily decoded.
	pub fn contents(&self) -> String {
		String::from_utf8_lossy(&self.0.borrow()).into_owned()
	}

	pub fn is_empty(&self) -> bool {
		self.0.borrow().is_empty()
	}

	pub fn clear(&self) {
		self.0.borrow_mut().clear();
	}
}

impl Write for MemorySink {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		self.0.borrow_mut().extend_from_slice(buf);
		Ok(buf.len())
	}

	fn flush(&mut self) -> io::Result<()> {
		Ok(())
	}
}
