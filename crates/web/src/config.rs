// =============================================================================
// OffGriid Web - Configuration
// =============================================================================
// Table of Contents:
// 1. Build Environment
// 2. Staging Timings
// 3. Contact Gate
// 4. Downloads
// 5. Background Effect
// =============================================================================

use serde::{Deserialize, Serialize};

// -----------------------------------------------------------------------------
// 1. Build Environment
// -----------------------------------------------------------------------------

/// Deployment environment, read at build time from `ENVIRONMENT`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// Environment the WASM bundle was built for.
    pub fn current() -> Self {
        Self::parse(option_env!("ENVIRONMENT").unwrap_or("production"))
    }

    fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("development") {
            Environment::Development
        } else {
            // Production or staging
            Environment::Production
        }
    }

    /// Console log level for this environment.
    pub fn log_level(&self) -> log::Level {
        match self {
            Environment::Development => log::Level::Debug,
            Environment::Production => log::Level::Info,
        }
    }
}

// -----------------------------------------------------------------------------
// 2. Staging Timings
// -----------------------------------------------------------------------------

/// Timings used by the stage scheduler, all in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StagingConfig {
    /// Delay used in place of idle detection when the platform has none.
    pub idle_fallback_ms: u32,
    /// Ceiling passed to the native idle callback.
    pub idle_timeout_ms: u32,
    /// Extra delay after `Idle` before the background effect mounts.
    pub background_delay_ms: u32,
}

impl Default for StagingConfig {
    fn default() -> Self {
        Self {
            idle_fallback_ms: 100,
            idle_timeout_ms: 2_000,
            background_delay_ms: 300,
        }
    }
}

// -----------------------------------------------------------------------------
// 3. Contact Gate
// -----------------------------------------------------------------------------

/// Minimum time between two accepted contact submissions (24 hours).
pub const SUBMISSION_WINDOW_MS: i64 = 24 * 60 * 60 * 1000;

/// Local storage key holding the last accepted submission time.
pub const SUBMISSION_STORAGE_KEY: &str = "contact_last_sent_at";

/// Input caps, matching the `maxlength` of the contact form fields.
pub const NAME_MAX_CHARS: usize = 100;
pub const EMAIL_MAX_CHARS: usize = 255;
pub const MESSAGE_MAX_CHARS: usize = 1_000;

/// Recipient of the pre-filled contact email.
pub fn contact_recipient() -> &'static str {
    option_env!("CONTACT_RECIPIENT").unwrap_or("hello@offgriid.dev")
}

// -----------------------------------------------------------------------------
// 4. Downloads
// -----------------------------------------------------------------------------

pub const APK_URL: &str = "/OffGriid.apk";
pub const APK_FILE_NAME: &str = "offgriid-1.0.0.apk";
pub const APK_SHA256: &str = "42ADF9BA6D0D3ED4A359936C9687C975EA4AB1ADD6C775F434D40A1981FC52AD";

pub const DOCS_URL: &str = "https://github.com/PRASHANTH-S-23/OffGriid./blob/main/README.md";
pub const VISIT_URL: &str = "https://zeroblink.vercel.app/";

// -----------------------------------------------------------------------------
// 5. Background Effect
// -----------------------------------------------------------------------------

/// Parameters of the canvas background effect.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BackgroundEffectConfig {
    /// Hex colors, cycled across particles.
    pub colors: Vec<String>,
    /// Strength of the push applied by the pointer.
    pub mouse_force: f64,
    /// Radius of pointer influence in CSS pixels.
    pub cursor_size: f64,
    /// Canvas backing-store scale relative to CSS size (0, 1].
    pub resolution: f64,
    /// Drive a virtual pointer while the user is not interacting.
    pub auto_demo: bool,
    pub auto_speed: f64,
    pub auto_intensity: f64,
    /// Milliseconds of pointer inactivity before the auto demo resumes.
    pub takeover_ms: f64,
}

impl Default for BackgroundEffectConfig {
    fn default() -> Self {
        Self {
            colors: vec![
                "#00FF66".to_string(),
                "#00CC55".to_string(),
                "#0E1F17".to_string(),
            ],
            mouse_force: 12.0,
            cursor_size: 100.0,
            resolution: 0.2,
            auto_demo: true,
            auto_speed: 0.2,
            auto_intensity: 1.2,
            takeover_ms: 3_000.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_parse() {
        assert_eq!(Environment::parse("development"), Environment::Development);
        assert_eq!(Environment::parse("DEVELOPMENT"), Environment::Development);
        assert_eq!(Environment::parse("staging"), Environment::Production);
        assert_eq!(Environment::Development.log_level(), log::Level::Debug);
    }

    #[test]
    fn test_staging_defaults() {
        let config = StagingConfig::default();
        assert!(config.idle_fallback_ms < config.idle_timeout_ms);
        assert_eq!(config.background_delay_ms, 300);
    }

    #[test]
    fn test_background_config_from_json() {
        let json = r##"{
            "colors": ["#5227FF", "#FF9FFC"],
            "mouse_force": 20.0,
            "cursor_size": 120.0,
            "resolution": 0.5,
            "auto_demo": false,
            "auto_speed": 0.4,
            "auto_intensity": 2.5,
            "takeover_ms": 1000.0
        }"##;
        let config: BackgroundEffectConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.colors.len(), 2);
        assert!(!config.auto_demo);
        assert_eq!(config.cursor_size, 120.0);
    }
}
