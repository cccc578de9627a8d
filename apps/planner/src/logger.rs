//! Global logger setup.
//!
//! Level is controlled by `RUST_LOG` (e.g. `RUST_LOG=debug depot-plan …`)
//! and defaults to `info`.  Output goes to stderr so the report on stdout
//! stays pipeable.

use fern::Dispatch;
use log::LevelFilter;

/// Initialize the global logger.  Call once at the top of `main`.
pub fn init() {
    let level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|s| s.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Info);

    let result = Dispatch::new()
        .level(level)
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {}] {}",
                record.level(),
                record.target(),
                message,
            ))
        })
        .chain(std::io::stderr())
        .apply();

    if let Err(e) = result {
        eprintln!("logger init failed: {e}");
    }
}
