#![forbid(unsafe_code)]

//! Command-line argument parsing for the demo.
//!
//! Parses args by hand and accepts `FOLIO_DEMO_*` environment overrides.

use std::env;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const HELP_TEXT: &str = "\
folio-demo: terminal profile card

USAGE:
    folio-demo [OPTIONS]

OPTIONS:
    --locale=TAG          Start in this locale (default: en)
    --profile=N           Start on profile N, 0-indexed (default: 0)
    --reduced-motion      Skip typing delays
    --ansi256             Force 256-colour output
    --exit-after-ms=N     Quit after N milliseconds (0 = never)
    --help, -h            Show this help message
    --version, -V         Show version

KEYBINDINGS:
    space / s     Switch profile
    h             Toggle picture glow
    l             Cycle language
    r             Retype
    q / Esc       Quit

ENVIRONMENT VARIABLES:
    FOLIO_DEMO_LOCALE         Override --locale
    FOLIO_DEMO_EXIT_AFTER_MS  Override --exit-after-ms
    FOLIO_TYPING_SPEED_MS     Per-character delay in milliseconds
    FOLIO_REDUCED_MOTION      Same as --reduced-motion
    FOLIO_LOG, FOLIO_LOG_FORMAT, FOLIO_LOG_FILE
                              Logging; only active with FOLIO_LOG_FILE set";

/// Parsed command-line options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opts {
    /// Initial locale tag.
    pub locale: String,
    /// Initial profile index.
    pub profile: usize,
    /// Use instant typing.
    pub reduced_motion: bool,
    /// Force 256-colour output.
    pub ansi256: bool,
    /// Auto-exit after this many milliseconds (0 = disabled).
    pub exit_after_ms: u64,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            locale: "en".into(),
            profile: 0,
            reduced_motion: false,
            ansi256: false,
            exit_after_ms: 0,
        }
    }
}

/// Outcome of parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parsed {
    /// Run with these options.
    Run(Opts),
    /// Print this text and exit successfully.
    Print(String),
    /// Print this error and exit with failure.
    Error(String),
}

impl Opts {
    /// Parse process arguments and environment.
    #[must_use]
    pub fn parse() -> Parsed {
        Self::parse_from(env::args().skip(1), |key| env::var(key).ok())
    }

    /// Parse `args` (program name excluded) with a custom env lookup.
    pub fn parse_from<I, F>(args: I, get_env: F) -> Parsed
    where
        I: IntoIterator<Item = String>,
        F: Fn(&str) -> Option<String>,
    {
        let mut opts = Self::default();
        if let Some(locale) = get_env("FOLIO_DEMO_LOCALE").filter(|v| !v.trim().is_empty()) {
            opts.locale = locale;
        }
        if let Some(ms) = get_env("FOLIO_DEMO_EXIT_AFTER_MS").and_then(|v| v.parse().ok()) {
            opts.exit_after_ms = ms;
        }

        for arg in args {
            match arg.as_str() {
                "--help" | "-h" => return Parsed::Print(HELP_TEXT.to_string()),
                "--version" | "-V" => return Parsed::Print(format!("folio-demo {VERSION}")),
                "--reduced-motion" => opts.reduced_motion = true,
                "--ansi256" => opts.ansi256 = true,
                other => {
                    let Some((key, value)) = other.split_once('=') else {
                        return Parsed::Error(format!("unknown argument: {other}"));
                    };
                    match key {
                        "--locale" => opts.locale = value.to_string(),
                        "--profile" => match value.parse() {
                            Ok(n) => opts.profile = n,
                            Err(_) => return Parsed::Error(format!("invalid --profile: {value}")),
                        },
                        "--exit-after-ms" => match value.parse() {
                            Ok(n) => opts.exit_after_ms = n,
                            Err(_) => {
                                return Parsed::Error(format!("invalid --exit-after-ms: {value}"));
                            }
                        },
                        _ => return Parsed::Error(format!("unknown argument: {other}")),
                    }
                }
            }
        }
        Parsed::Run(opts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Parsed {
        Opts::parse_from(args.iter().map(|s| (*s).to_string()), |_| None)
    }

    #[test]
    fn defaults() {
        assert_eq!(parse(&[]), Parsed::Run(Opts::default()));
    }

    #[test]
    fn flags_and_values() {
        let Parsed::Run(opts) = parse(&["--locale=ro", "--profile=1", "--reduced-motion", "--ansi256"])
        else {
            panic!("expected run");
        };
        assert_eq!(opts.locale, "ro");
        assert_eq!(opts.profile, 1);
        assert!(opts.reduced_motion);
        assert!(opts.ansi256);
    }

    #[test]
    fn env_is_overridden_by_args() {
        let env = |key: &str| match key {
            "FOLIO_DEMO_LOCALE" => Some("es".to_string()),
            "FOLIO_DEMO_EXIT_AFTER_MS" => Some("250".to_string()),
            _ => None,
        };
        let Parsed::Run(opts) = Opts::parse_from(vec!["--locale=ro".to_string()], env) else {
            panic!("expected run");
        };
        assert_eq!(opts.locale, "ro");
        assert_eq!(opts.exit_after_ms, 250);
    }

    #[test]
    fn help_and_errors() {
        assert!(matches!(parse(&["-h"]), Parsed::Print(text) if text.contains("KEYBINDINGS")));
        assert!(matches!(parse(&["--bogus"]), Parsed::Error(_)));
        assert!(matches!(parse(&["--profile=x"]), Parsed::Error(_)));
    }
}
