use clap::Parser;
use github_x::{cli::Args, logging};

#[tokio::main(flavor = "current_thread")]
async fn main() {
	let args = Args::parse();
	if let Err(err) = logging::console::init(logging::level(args.verbose), args.log_file.as_deref(), &[]) {
		eprintln!("Error: failed to initialize logging: {err:#}");
	}
	let stdout = std::io::stdout();
	if let Err(err) = github_x::run(args, &mut stdout.lock()).await {
		log::debug!("{err:?}");
		eprintln!("Error: {err:#}");
		std::process::exit(1);
	}
}
