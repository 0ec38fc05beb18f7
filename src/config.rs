use tracing_subscriber::EnvFilter;

/// Application-level constants
pub const APP_NAME: &str = "VitalCare";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Evidence label attached to every consultation record
pub const EVIDENCE_LEVEL: &str = "Clinical Guidelines";

/// Log filter used when `RUST_LOG` is unset.
/// Debug builds show engine decisions; release builds stay at info.
pub fn default_log_filter() -> &'static str {
    if cfg!(debug_assertions) {
        "vitalcare_lib=debug,vitalcare=debug,info"
    } else {
        "info"
    }
}

/// Install the global tracing subscriber. `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_name_is_vitalcare() {
        assert_eq!(APP_NAME, "VitalCare");
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.1.0");
    }

    #[test]
    fn default_filter_parses() {
        assert!(EnvFilter::try_new(default_log_filter()).is_ok());
    }
}
