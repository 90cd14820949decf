#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Quiet level.
    ///
    /// 1 hides the banner and headers and shrinks the summary to one status
    /// line. 2 and above leaves only the result.
    pub quiet: u8,
    /// Verbosity level, mapped to the default log filter.
    pub verbose: u8,
}

impl Config {
    /// Default filter directive when `RUST_LOG` is not set.
    ///
    /// Scope diagnostics are enabled separately, see [`Config::show_scope`].
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }

    /// Whether scope diagnostics are printed. Only the bare result survives `-qq`.
    pub fn show_scope(&self) -> bool {
        self.quiet < 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_level() {
        let mut cfg = Config::default();
        assert_eq!(cfg.log_level(), "info");

        cfg.verbose = 1;
        assert_eq!(cfg.log_level(), "debug");

        cfg.verbose = 2;
        assert_eq!(cfg.log_level(), "trace");

        cfg.verbose = u8::MAX;
        assert_eq!(cfg.log_level(), "trace");
    }

    #[test]
    fn scope_lines_hidden_only_when_very_quiet() {
        let mut cfg = Config::default();
        assert!(cfg.show_scope());

        cfg.quiet = 1;
        assert!(cfg.show_scope());

        cfg.quiet = 2;
        assert!(!cfg.show_scope());
    }
}
