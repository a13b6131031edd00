#![allow(missing_docs)]

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "assetblob", about = "Decode library blob inspection and rewriting tools")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Print blob size and a census of decoded values.
	Info(cmd::info::Args),
	/// Print the decoded value tree.
	Dump(cmd::dump::Args),
	/// Check that decoding then re-encoding reproduces the blob exactly.
	Verify(cmd::verify::Args),
	/// Convert material textures through an external program and write a new blob.
	Retexture(cmd::retexture::Args),
}

fn main() {
	tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")))
		.with_writer(std::io::stderr)
		.init();

	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> assetblob::blob::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Info(args) => cmd::info::run(args),
		Commands::Dump(args) => cmd::dump::run(args),
		Commands::Verify(args) => cmd::verify::run(args),
		Commands::Retexture(args) => cmd::retexture::run(args),
	}
}
