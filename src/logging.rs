pub mod console;

/// Log level for an invocation: warnings by default, request tracing with `--verbose`.
pub fn level(verbose: bool) -> console::LevelFilter {
	match verbose {
		true => console::LevelFilter::Debug,
		false => console::LevelFilter::Warn,
	}
}
