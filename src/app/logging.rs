use log::LevelFilter;

/// Install the env_logger backend for a binary.
///
/// `level` is the `--log-level` value; unknown names fall back to `warn`.
/// `RUST_LOG` is applied on top so module-level filters still work.
pub fn init(level: &str) {
    // A logger installed earlier (tests, a second init) stays in place.
    env_logger::Builder::new()
        .filter_level(parse_level(level))
        .parse_default_env()
        .try_init()
        .ok();
}

pub fn parse_level(level: &str) -> LevelFilter {
    level.parse().unwrap_or(LevelFilter::Warn)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_levels() {
        assert_eq!(parse_level("debug"), LevelFilter::Debug);
        assert_eq!(parse_level("INFO"), LevelFilter::Info);
        assert_eq!(parse_level("off"), LevelFilter::Off);
    }

    #[test]
    fn test_parse_unknown_level_falls_back() {
        assert_eq!(parse_level("loud"), LevelFilter::Warn);
        assert_eq!(parse_level(""), LevelFilter::Warn);
    }
}
