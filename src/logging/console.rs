use anyhow::Result;
use std::path::Path;
pub use log::LevelFilter;

/// Routes `log` output to stderr, and additionally to `log_file` when one is given.
/// Stdout is left untouched so command output can be piped.
pub fn init(level: LevelFilter, log_file: Option<&Path>, ignore: &[&'static str]) -> Result<()> {
	use simplelog::*;
	let cfg = {
		let mut builder = ConfigBuilder::new();
		builder
			.set_max_level(LevelFilter::Error)
			.set_time_format_custom(format_description!(
				"[year].[month].[day]-[hour].[minute].[second]"
			))
			// Pads the names of levels so that they line up in the log.
			// [ERROR]
			// [ WARN]
			// [ INFO]
			// [DEBUG]
			.set_level_padding(LevelPadding::Left)
			.set_thread_level(LevelFilter::Off)
			// Target is always logged so that readers know what owner logged each line
			.set_target_level(LevelFilter::Error)
			.set_location_level(LevelFilter::Off);
		for str in ignore.iter() {
			builder.add_filter_ignore_str(str);
		}
		builder.build()
	};

	let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
		level,
		cfg.clone(),
		TerminalMode::Stderr,
		ColorChoice::Auto,
	)];
	if let Some(log_path) = log_file {
		if let Some(parent) = log_path.parent() {
			std::fs::create_dir_all(parent)?;
		}
		let file = std::fs::OpenOptions::new()
			.create(true)
			.write(true)
			.truncate(true)
			.open(log_path)?;
		loggers.push(WriteLogger::new(LevelFilter::Trace, cfg, file));
	}
	CombinedLogger::init(loggers)?;

	if let Some(log_path) = log_file {
		log::info!("Writing log to {}", log_path.display());
	}
	Ok(())
}
