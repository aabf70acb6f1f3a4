use tracing_subscriber::EnvFilter;

/// Initialize tracing based on CLI verbosity level.
///
/// 0 maps to warn, 1 (-v) to info, 2 (-vv) to debug, 3+ (-vvv) to trace,
/// applied to every workspace crate target. `RUST_LOG` overrides the CLI
/// flag if set.
pub fn init(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let targets = ["aion", "aion_calendar", "aion_io", "aion_simulate"]
            .map(|t| format!("{t}={level}"))
            .join(",");
        EnvFilter::new(targets)
    });

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
