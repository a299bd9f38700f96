//! Demo binary: raw-mode terminal loop over the wired-up playground.
//!
//! Logging goes to stderr so it does not fight the raw-mode UI; set
//! `RUST_LOG=chalkboard=debug` to watch controller transitions.

use std::io;

use tracing_subscriber::EnvFilter;

use chalkboard::app::{DemoApp, Regions};

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(io::stderr)
        .init();

    let mut app = DemoApp::new(Regions::terminal());
    app.run()
}
