// Logger setup for the demo binary. The library only talks to the `log` facade.
// Dependencies (minifb, image) stay at `warn`; only this crate gets chatty with `--verbose`.
use env_logger::{Builder, Env};
use log::LevelFilter;

/// Filter directive used when `RUST_LOG` is unset.
pub fn default_filter(verbose: bool) -> String {
    let ours = if verbose { LevelFilter::Debug } else { LevelFilter::Info };
    format!("{},{}={}", LevelFilter::Warn, env!("CARGO_CRATE_NAME"), ours).to_lowercase()
}

/// Install the global logger; `RUST_LOG` overrides `default_filter(verbose)`.
pub fn init(verbose: bool) {
    let env = Env::default().default_filter_or(default_filter(verbose));
    // A second call (another test, an embedding host) finds a logger in place; keep that one.
    let _ = Builder::from_env(env).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(false, "warn,thermal_reveal=info")]
    #[case(true, "warn,thermal_reveal=debug")]
    fn filter_scopes_verbosity_to_this_crate(#[case] verbose: bool, #[case] expected: &str) {
        assert_eq!(default_filter(verbose), expected);
    }

    #[test]
    fn repeated_init_keeps_logging_enabled() {
        init(true);
        init(false);
        if std::env::var_os("RUST_LOG").is_none() {
            assert!(log::max_level() >= LevelFilter::Info);
        }
    }
}
