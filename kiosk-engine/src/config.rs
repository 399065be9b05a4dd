//! Engine configuration
//!
//! Env-var overrides with sensible kiosk defaults, in the same shape as a
//! production deployment would tune the detection simulation.

use crate::detection::DetectorConfig;
use shared::i18n::Language;
use std::time::Duration;

/// Runtime configuration for the kiosk engine.
#[derive(Debug, Clone)]
pub struct Config {
    /// Seconds between detection simulator ticks.
    pub detection_interval_secs: u64,
    /// Per-tick chance that the drawn item lands in the cart.
    pub detection_probability: f64,
    /// Simulator stops adding once this many distinct cart lines exist.
    pub detection_max_lines: usize,
    /// Start the background simulator when the session reaches the home screen.
    pub auto_detect: bool,
    /// Fixed RNG seed for reproducible demo runs; None draws from entropy.
    pub detection_seed: Option<u64>,
    /// Default display language.
    pub language: Language,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            detection_interval_secs: std::env::var("SWIFTCART_DETECTION_INTERVAL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(15),
            detection_probability: std::env::var("SWIFTCART_DETECTION_PROBABILITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(0.30),
            detection_max_lines: std::env::var("SWIFTCART_DETECTION_MAX_LINES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
            auto_detect: std::env::var("SWIFTCART_AUTO_DETECT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            detection_seed: std::env::var("SWIFTCART_DETECTION_SEED")
                .ok()
                .and_then(|v| v.parse().ok()),
            language: Language::from_tag(
                &std::env::var("SWIFTCART_LANGUAGE").unwrap_or_else(|_| "en".into()),
            ),
        }
    }

    /// Detection simulator settings derived from this config.
    pub fn detector_config(&self) -> DetectorConfig {
        DetectorConfig {
            interval: Duration::from_secs(self.detection_interval_secs),
            probability: self.detection_probability,
            max_lines: self.detection_max_lines,
            ..DetectorConfig::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            detection_interval_secs: 15,
            detection_probability: 0.30,
            detection_max_lines: 5,
            auto_detect: true,
            detection_seed: None,
            language: Language::En,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_kiosk_simulation() {
        let config = Config::default();
        assert_eq!(config.detection_interval_secs, 15);
        assert_eq!(config.detection_probability, 0.30);
        assert_eq!(config.detection_max_lines, 5);
        assert!(config.auto_detect);
        assert_eq!(config.language, Language::En);
    }

    #[test]
    fn test_detector_config_derivation() {
        let config = Config {
            detection_interval_secs: 2,
            detection_probability: 1.0,
            ..Config::default()
        };
        let detector = config.detector_config();
        assert_eq!(detector.interval, Duration::from_secs(2));
        assert_eq!(detector.probability, 1.0);
        assert_eq!(detector.max_lines, 5);
    }
}
