use log::LevelFilter;

/// Install the global logger.
///
/// `level` comes from `-v`/`-q`; a `RUST_LOG` directive, when set, takes
/// precedence. Calling this twice is harmless.
pub fn init(level: LevelFilter) {
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_env("RUST_LOG")
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}
