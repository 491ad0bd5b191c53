/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/3/26
******************************************************************************/

//! Utility functions.

use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber.
///
/// The level is taken from the `LOGLEVEL` environment variable and defaults
/// to `info`. Safe to call more than once; subsequent calls are no-ops.
pub fn setup_logger() {
    let level = std::env::var("LOGLEVEL").unwrap_or_else(|_| "info".to_string());
    let filter = EnvFilter::try_new(&level).unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
