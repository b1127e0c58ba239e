#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    /// Output verbosity reduction.
    ///
    /// `1` hides section headers, `2` also strips the decoration around results.
    pub quiet: u8,
    /// Disables ANSI colors on every printed line.
    pub no_color: bool,
}

impl Config {
    pub fn show_headers(&self) -> bool {
        self.quiet == 0
    }

    pub fn decorate_results(&self) -> bool {
        self.quiet < 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_verbose() {
        let cfg = Config::default();
        assert!(cfg.show_headers());
        assert!(cfg.decorate_results());
        assert!(!cfg.no_color);
    }

    #[test]
    fn test_quiet_levels() {
        let cfg = Config { quiet: 1, no_color: false };
        assert!(!cfg.show_headers());
        assert!(cfg.decorate_results());

        let cfg = Config { quiet: 2, no_color: false };
        assert!(!cfg.show_headers());
        assert!(!cfg.decorate_results());
    }
}
