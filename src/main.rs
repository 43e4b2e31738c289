// ══════════════════════════════════════════════════════════════════════════════
// TINTLOG CLI
// ══════════════════════════════════════════════════════════════════════════════
//
// Emits a single log line from the shell. Handy for scripts that want the same
// look as the library, and for trying out formats and color targets.
//
//   tintlog --level all debug "cache warmed"
//   tintlog --format long-date,24h,zone --color-target timestamp,prefix notice done
//   tintlog --persist ./logs error "disk full"

use std::process::ExitCode;
use clap::Parser;
use colored::*;
use tintlog::{ColorTarget, Colors, EventKind, LogError, LogLevel, Logger, LoggerOptions, TimestampFormat, Tz};

/// Leveled, colored, timestamped log lines
#[derive(Parser)]
#[command(name = "tintlog")]
#[command(version = "0.5.0")]
#[command(about = "Write a leveled log line to stderr or a log file", long_about = None)]
struct Cli {
	/// Event to log through
	#[arg(value_enum)]
	kind: EventKind,

	/// Message words, joined with spaces
	#[arg(required = true)]
	message: Vec<String>,

	/// Minimum level that gets written
	#[arg(short, long, value_enum, default_value_t = LogLevel::Normal)]
	level: LogLevel,

	/// Leave out the timestamp
	#[arg(long)]
	no_timestamp: bool,

	/// Disable all colors
	#[arg(long)]
	no_color: bool,

	/// Timestamp components: short-date, long-date, 12h, 24h, zone
	#[arg(short, long)]
	format: Option<String>,

	/// Colored segments: timestamp, prefix, message
	#[arg(short, long)]
	color_target: Option<String>,

	/// Make the event bold
	#[arg(short, long)]
	bold: bool,

	/// IANA zone for timestamps, e.g. Europe/Paris (default: local zone)
	#[arg(short = 'z', long, value_name = "ZONE")]
	time_zone: Option<String>,

	/// Append to <DIR>/tintlog.log instead of writing to stderr
	#[arg(short, long, value_name = "DIR")]
	persist: Option<String>,
}

fn parse_color_target(s: &str) -> Result<ColorTarget, String> {
	let mut target = ColorTarget::empty();
	for word in s.split(',').map(str::trim).filter(|w| !w.is_empty()) {
		target |= match word.to_ascii_lowercase().as_str() {
			"timestamp" => ColorTarget::TIMESTAMP,
			"prefix" => ColorTarget::PREFIX,
			"message" => ColorTarget::MESSAGE,
			_ => return Err(format!("Unknown color target '{}'", word)),
		};
	}
	Ok(target)
}

fn configure(logger: &mut Logger, cli: &Cli) -> Result<(), String> {
	let mut event = logger.handle(cli.kind);

	if let Some(format) = &cli.format {
		let format: TimestampFormat = format.parse().map_err(|e: LogError| e.to_string())?;
		event.set_format(format).map_err(|e| e.to_string())?;
	}

	if let Some(target) = &cli.color_target {
		event.set_color_format(parse_color_target(target)?).map_err(|e| e.to_string())?;
	}

	if cli.bold {
		let colors = event.colors() | Colors::BOLD;
		event.set_colors(colors);
	}

	if let Some(zone) = &cli.time_zone {
		let tz: Tz = zone.parse().map_err(|_| format!("Unknown time zone '{}'", zone))?;
		logger.set_time_zone(tz);
	}

	if let Some(dir) = &cli.persist {
		let path = logger.persist(dir, "tintlog.log").map_err(|e| e.to_string())?;
		eprintln!("{} {}", "Logging to".dimmed(), path.display().to_string().cyan());
	}
	Ok(())
}

/// Reports `message` through the Error event, falling back to plain stderr
/// when the logger's sink fails. Returns whether the logger wrote it.
fn report_failure(logger: &mut Logger, message: &str) -> bool {
	// Report through the logger itself, at a level that always shows.
	logger.set_log_level(LogLevel::ErrorsOnly);
	match logger.error().log(message) {
		Ok(_) => true,
		Err(sink_err) => {
			eprintln!("{} {} ({})", "✘".red().bold(), message, sink_err);
			false
		}
	}
}

fn main() -> ExitCode {
	let cli = Cli::parse();

	let mut logger = Logger::from_options(LoggerOptions {
		show_timestamp: !cli.no_timestamp,
		show_color: !cli.no_color,
		level: cli.level,
	});

	if let Err(e) = configure(&mut logger, &cli) {
		report_failure(&mut logger, &e);
		return ExitCode::FAILURE;
	}

	match logger.log(cli.kind, cli.message.join(" ")) {
		Ok(_) => ExitCode::SUCCESS,
		Err(e) => {
			eprintln!("{} {}", "✘".red().bold(), e);
			ExitCode::FAILURE
		}
	}
}
