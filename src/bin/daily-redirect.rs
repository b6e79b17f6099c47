//! Runs one resolution locally and prints the proxy response as JSON.
//!
//! Configuration comes from the process environment, optionally seeded from a `.env` file.
//! Logs go to stderr (filtered through `RUST_LOG`); stdout only carries the response.

// std
use std::process::ExitCode;
// crates.io
use color_eyre::Result;
use tracing_subscriber::EnvFilter;
// self
use daily_redirect::{
	config::Config,
	handler::{Handler, InboundEvent},
};

#[tokio::main]
async fn main() -> Result<ExitCode> {
	color_eyre::install()?;

	// A missing `.env` file is fine; the process environment still applies.
	let _ = dotenvy::dotenv();

	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::from_default_env())
		.with_writer(std::io::stderr)
		.init();

	let config = Config::from_env()?;
	let handler = Handler::new(config)?;
	let response = handler.handle(&InboundEvent::default()).await;

	println!("{}", serde_json::to_string_pretty(&response)?);

	Ok(if response.location().is_some() { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
