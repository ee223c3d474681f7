use crate::telemetry::LogLevel;

pub const THEME_KEY: &str = "theme";
pub const FILTER_ALL: &str = "all";
pub const CARD_REVEAL_THRESHOLD: f64 = 0.2;
pub const REVEAL_THRESHOLD: f64 = 0.2;
pub const COUNTER_THRESHOLD: f64 = 0.6;
pub const SECTION_THRESHOLD: f64 = 0.6;
pub const BACK_TO_TOP_OFFSET: f64 = 300.0;
pub const LOADER_HIDE_DELAY_MS: u32 = 300;
pub const INTRO_DURATION_MS: u32 = 4_000;
pub const CURSOR_PULSE_MS: u32 = 150;
pub const SPARK_DELAY_MS: u32 = 2_000;
pub const SPARK_LIFETIME_MS: u32 = 1_500;
pub const SPARK_COUNT: usize = 40;
pub const PARTICLE_COUNT: usize = 400;
pub const EMAIL_RELAY_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;
const DEFAULT_TYPE_SPEED_MS: u32 = 100;
const DEFAULT_DATA_PATH: &str = "data/proyectos.json";
const DEFAULT_HEADLINE: &str = "Construyo webs rápidas y claras";
const DEFAULT_EMAILJS_SERVICE_ID: &str = "service_y95t4ks";
const DEFAULT_EMAILJS_TEMPLATE_ID: &str = "template_fsjo89q";
const DEFAULT_EMAILJS_PUBLIC_KEY: &str = "f70sxGybBMO0tcB7y";

const TYPE_SPEED_MS_BOUNDS: (u32, u32) = (10, 1_000);

#[derive(Clone, PartialEq, Debug)]
pub struct EmailRelayConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

#[derive(Clone, PartialEq, Debug)]
pub struct SiteConfig {
    pub log_level: LogLevel,
    pub type_speed_ms: u32,
    pub data_path: String,
    pub headline: String,
    pub email_relay: EmailRelayConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl SiteConfig {
    /// Reads overrides baked in at build time (`trunk build` inherits the shell environment).
    pub fn from_build_env() -> Self {
        Self::from_lookup(build_env)
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let log_level = parse_log_level(&lookup, "PORTFOLIO_LOG_LEVEL", DEFAULT_LOG_LEVEL);
        let type_speed_ms = parse_u32_with_bounds(
            &lookup,
            "PORTFOLIO_TYPE_SPEED_MS",
            DEFAULT_TYPE_SPEED_MS,
            TYPE_SPEED_MS_BOUNDS,
        );
        let data_path = parse_non_empty_string(&lookup, "PORTFOLIO_DATA_PATH")
            .unwrap_or_else(|| DEFAULT_DATA_PATH.to_string());
        let headline = parse_non_empty_string(&lookup, "PORTFOLIO_HEADLINE")
            .unwrap_or_else(|| DEFAULT_HEADLINE.to_string());
        let email_relay = EmailRelayConfig {
            service_id: parse_non_empty_string(&lookup, "PORTFOLIO_EMAILJS_SERVICE_ID")
                .unwrap_or_else(|| DEFAULT_EMAILJS_SERVICE_ID.to_string()),
            template_id: parse_non_empty_string(&lookup, "PORTFOLIO_EMAILJS_TEMPLATE_ID")
                .unwrap_or_else(|| DEFAULT_EMAILJS_TEMPLATE_ID.to_string()),
            public_key: parse_non_empty_string(&lookup, "PORTFOLIO_EMAILJS_PUBLIC_KEY")
                .unwrap_or_else(|| DEFAULT_EMAILJS_PUBLIC_KEY.to_string()),
        };

        Self {
            log_level,
            type_speed_ms,
            data_path,
            headline,
            email_relay,
        }
    }
}

fn build_env(name: &str) -> Option<String> {
    let value = match name {
        "PORTFOLIO_LOG_LEVEL" => option_env!("PORTFOLIO_LOG_LEVEL"),
        "PORTFOLIO_TYPE_SPEED_MS" => option_env!("PORTFOLIO_TYPE_SPEED_MS"),
        "PORTFOLIO_DATA_PATH" => option_env!("PORTFOLIO_DATA_PATH"),
        "PORTFOLIO_HEADLINE" => option_env!("PORTFOLIO_HEADLINE"),
        "PORTFOLIO_EMAILJS_SERVICE_ID" => option_env!("PORTFOLIO_EMAILJS_SERVICE_ID"),
        "PORTFOLIO_EMAILJS_TEMPLATE_ID" => option_env!("PORTFOLIO_EMAILJS_TEMPLATE_ID"),
        "PORTFOLIO_EMAILJS_PUBLIC_KEY" => option_env!("PORTFOLIO_EMAILJS_PUBLIC_KEY"),
        _ => None,
    };

    value.map(ToString::to_string)
}

fn parse_u32_with_bounds(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: u32,
    bounds: (u32, u32),
) -> u32 {
    lookup(name)
        .and_then(|value| value.trim().parse::<u32>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_non_empty_string(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<String> {
    lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_log_level(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: LogLevel,
) -> LogLevel {
    parse_non_empty_string(lookup, name)
        .and_then(|value| LogLevel::from_str(&value))
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let values: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |name| values.get(name).cloned()
    }

    #[test]
    fn defaults_match_site_constants() {
        let config = SiteConfig::default();

        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.type_speed_ms, 100);
        assert_eq!(config.data_path, "data/proyectos.json");
        assert_eq!(config.headline, "Construyo webs rápidas y claras");
        assert_eq!(config.email_relay.service_id, "service_y95t4ks");
        assert_eq!(config.email_relay.template_id, "template_fsjo89q");
        assert_eq!(config.email_relay.public_key, "f70sxGybBMO0tcB7y");
    }

    #[test]
    fn overrides_are_trimmed_and_applied() {
        let config = SiteConfig::from_lookup(lookup_from(&[
            ("PORTFOLIO_LOG_LEVEL", "debug"),
            ("PORTFOLIO_TYPE_SPEED_MS", " 40 "),
            ("PORTFOLIO_DATA_PATH", " /static/projects.json "),
            ("PORTFOLIO_EMAILJS_SERVICE_ID", "service_other"),
        ]));

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.type_speed_ms, 40);
        assert_eq!(config.data_path, "/static/projects.json");
        assert_eq!(config.email_relay.service_id, "service_other");
        assert_eq!(config.email_relay.template_id, "template_fsjo89q");
    }

    #[test]
    fn invalid_or_out_of_bounds_values_fall_back_to_defaults() {
        let config = SiteConfig::from_lookup(lookup_from(&[
            ("PORTFOLIO_LOG_LEVEL", "verbose"),
            ("PORTFOLIO_TYPE_SPEED_MS", "5"),
            ("PORTFOLIO_HEADLINE", "   "),
        ]));

        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.type_speed_ms, 100);
        assert_eq!(config.headline, "Construyo webs rápidas y claras");

        let config = SiteConfig::from_lookup(lookup_from(&[("PORTFOLIO_TYPE_SPEED_MS", "fast")]));
        assert_eq!(config.type_speed_ms, 100);
    }
}
