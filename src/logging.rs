use env_logger::{Builder, Target};
use log::LevelFilter;
use std::io::Write;

/// Maps the number of `-v` flags to a level filter.
pub fn level_for_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Installs a stderr logger whose lines are PACE comments (`c LEVEL - msg`).
/// Without an explicit level the filter is read from `RUST_LOG`. A second call
/// leaves the first logger in place.
pub fn build_pace_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_default_env();
    builder
        .format(|buf, record| writeln!(buf, "c {} - {}", record.level(), record.args()))
        .target(Target::Stderr);
    if let Some(level) = level {
        builder.filter_level(level);
    }
    let _ = builder.try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_for_verbosity(0), LevelFilter::Warn);
        assert_eq!(level_for_verbosity(2), LevelFilter::Debug);
        assert_eq!(level_for_verbosity(9), LevelFilter::Trace);
    }
}
