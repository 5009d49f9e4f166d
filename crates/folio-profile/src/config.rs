#![forbid(unsafe_code)]

//! Typewriter pacing.
//!
//! Every delay the card schedules comes from a [`TypewriterConfig`]. The
//! defaults reproduce the stock animation; `from_env` lets a user slow the
//! typing down or switch to reduced motion.

use std::time::Duration;

/// Environment variable overriding the per-character interval in milliseconds.
pub const ENV_TYPING_SPEED_MS: &str = "FOLIO_TYPING_SPEED_MS";
/// Environment variable enabling reduced motion (`1`, `true`, `yes`, `on`).
pub const ENV_REDUCED_MOTION: &str = "FOLIO_REDUCED_MOTION";

/// Delays driving the typewriter and the profile switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterConfig {
    /// Delay from `initialize` to the first name character. Default: 500ms.
    pub startup_delay: Duration,
    /// Delay between characters. Default: 100ms.
    pub char_interval: Duration,
    /// Cursor blink period. Default: 500ms.
    pub blink_interval: Duration,
    /// Pause between name and handle. Default: 200ms.
    pub inter_pause: Duration,
    /// Delay from `reset` to the first name character. Default: 300ms.
    pub restart_delay: Duration,
    /// Delay from a switch request to the index advance. Default: 300ms.
    pub spin_advance: Duration,
    /// Length of the spin window. Default: 600ms.
    pub spin_duration: Duration,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            startup_delay: Duration::from_millis(500),
            char_interval: Duration::from_millis(100),
            blink_interval: Duration::from_millis(500),
            inter_pause: Duration::from_millis(200),
            restart_delay: Duration::from_millis(300),
            spin_advance: Duration::from_millis(300),
            spin_duration: Duration::from_millis(600),
        }
    }
}

impl TypewriterConfig {
    /// Everything instant except the cursor blink.
    #[must_use]
    pub fn reduced_motion() -> Self {
        Self {
            startup_delay: Duration::ZERO,
            char_interval: Duration::ZERO,
            inter_pause: Duration::ZERO,
            restart_delay: Duration::ZERO,
            spin_advance: Duration::ZERO,
            spin_duration: Duration::ZERO,
            ..Self::default()
        }
    }

    /// Defaults adjusted from `FOLIO_TYPING_SPEED_MS` and `FOLIO_REDUCED_MOTION`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env) with a custom lookup.
    ///
    /// Reduced motion wins over an explicit typing speed. Unparseable values
    /// are ignored.
    #[must_use]
    pub fn from_env_with<F>(get_env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if get_env(ENV_REDUCED_MOTION)
            .and_then(|value| parse_bool(&value))
            .unwrap_or(false)
        {
            return Self::reduced_motion();
        }
        let mut config = Self::default();
        if let Some(ms) = get_env(ENV_TYPING_SPEED_MS).and_then(|v| v.trim().parse::<u64>().ok())
        {
            config.char_interval = Duration::from_millis(ms);
        }
        config
    }

    #[must_use]
    pub fn startup_delay(mut self, delay: Duration) -> Self {
        self.startup_delay = delay;
        self
    }

    #[must_use]
    pub fn char_interval(mut self, interval: Duration) -> Self {
        self.char_interval = interval;
        self
    }

    #[must_use]
    pub fn blink_interval(mut self, interval: Duration) -> Self {
        self.blink_interval = interval;
        self
    }

    #[must_use]
    pub fn inter_pause(mut self, pause: Duration) -> Self {
        self.inter_pause = pause;
        self
    }

    #[must_use]
    pub fn restart_delay(mut self, delay: Duration) -> Self {
        self.restart_delay = delay;
        self
    }

    /// Set the spin timings; `duration` is raised to at least `advance`.
    #[must_use]
    pub fn spin(mut self, advance: Duration, duration: Duration) -> Self {
        self.spin_advance = advance;
        self.spin_duration = duration.max(advance);
        self
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn get_env(map: HashMap<&'static str, &'static str>) -> impl Fn(&str) -> Option<String> {
        move |key| map.get(key).map(|v| (*v).to_string())
    }

    #[test]
    fn defaults_match_stock_animation() {
        let c = TypewriterConfig::default();
        assert_eq!(c.startup_delay, Duration::from_millis(500));
        assert_eq!(c.char_interval, Duration::from_millis(100));
        assert_eq!(c.blink_interval, Duration::from_millis(500));
        assert_eq!(c.inter_pause, Duration::from_millis(200));
        assert_eq!(c.restart_delay, Duration::from_millis(300));
        assert_eq!(c.spin_advance, Duration::from_millis(300));
        assert_eq!(c.spin_duration, Duration::from_millis(600));
    }

    #[test]
    fn empty_env_is_default() {
        let c = TypewriterConfig::from_env_with(get_env(HashMap::new()));
        assert_eq!(c, TypewriterConfig::default());
    }

    #[test]
    fn typing_speed_override() {
        let env = HashMap::from([(ENV_TYPING_SPEED_MS, " 40 ")]);
        let c = TypewriterConfig::from_env_with(get_env(env));
        assert_eq!(c.char_interval, Duration::from_millis(40));
        assert_eq!(c.startup_delay, Duration::from_millis(500));
    }

    #[test]
    fn bad_typing_speed_is_ignored() {
        let env = HashMap::from([(ENV_TYPING_SPEED_MS, "fast")]);
        let c = TypewriterConfig::from_env_with(get_env(env));
        assert_eq!(c.char_interval, Duration::from_millis(100));
    }

    #[test]
    fn reduced_motion_keeps_blink_only() {
        let env = HashMap::from([(ENV_REDUCED_MOTION, "yes"), (ENV_TYPING_SPEED_MS, "40")]);
        let c = TypewriterConfig::from_env_with(get_env(env));
        assert_eq!(c, TypewriterConfig::reduced_motion());
        assert_eq!(c.char_interval, Duration::ZERO);
        assert_eq!(c.spin_duration, Duration::ZERO);
        assert_eq!(c.blink_interval, Duration::from_millis(500));
    }

    #[test]
    fn reduced_motion_off_is_default() {
        let env = HashMap::from([(ENV_REDUCED_MOTION, "off")]);
        assert_eq!(
            TypewriterConfig::from_env_with(get_env(env)),
            TypewriterConfig::default()
        );
    }

    #[test]
    fn spin_duration_never_shorter_than_advance() {
        let c = TypewriterConfig::default().spin(Duration::from_millis(400), Duration::from_millis(100));
        assert_eq!(c.spin_duration, Duration::from_millis(400));
    }
}
