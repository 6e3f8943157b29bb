const DEFAULT_HELP_EXIT_CODE: u8 = 1;

/// Process settings read from environment variables once at startup.
#[derive(Debug, PartialEq)]
pub(crate) struct EnvConfig {
    /// Exit status used after printing help via `-h`.
    pub help_exit_code: u8,

    /// `None` when `LOG_LEVEL` is unset or invalid.
    pub log_level: Option<tracing::Level>,

    /// Problems found while reading the environment. These are logged once
    /// the logger is up.
    pub warnings: Vec<String>,
}
impl EnvConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut warnings = vec![];

        let log_level = match lookup("LOG_LEVEL").as_deref().map(str::trim) {
            Some("DEBUG" | "debug") => Some(tracing::Level::DEBUG),
            Some("INFO" | "info") => Some(tracing::Level::INFO),
            Some("TRACE" | "trace") => Some(tracing::Level::TRACE),
            Some("VERBOSE" | "verbose") => Some(tracing::Level::DEBUG),
            Some(other) => {
                warnings.push(format!(
                    "Invalid `LOG_LEVEL` environment variable value: `{other}`"
                ));
                None
            },
            None => None,
        };

        let help_exit_code = match lookup("HELP_EXIT_CODE") {
            Some(value) => value.trim().parse::<u8>().unwrap_or_else(|_| {
                warnings.push(format!(
                    "Invalid `HELP_EXIT_CODE` environment variable value: \
                    `{value}` (expected 0-255)"
                ));
                DEFAULT_HELP_EXIT_CODE
            }),
            None => DEFAULT_HELP_EXIT_CODE,
        };

        Self {
            help_exit_code,
            log_level,
            warnings,
        }
    }
}
