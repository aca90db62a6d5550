use crate::balance::MAX_SIGNIFICANT_DIGITS;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("invalid header config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid header config: {0}")]
    Invalid(String),
}

/// A protocol version the switch can jump to, selected by `?use=<query>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionLink {
    pub name: String,
    pub query: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuLink {
    pub label: String,
    pub href: String,
}

/// Header options, read from the page at startup.
///
/// Every field is optional in JSON; omitted ones keep their default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    pub title: String,
    pub home_href: String,
    pub logo_src: String,
    pub currency_symbol: String,
    pub significant_digits: usize,
    /// Viewports narrower than this hide the network badge.
    pub mobile_breakpoint_px: u32,
    /// Viewports narrower than this also hide the title and balance text.
    pub extra_small_breakpoint_px: u32,
    pub request_tokens_url: String,
    pub versions: Vec<VersionLink>,
    pub menu_links: Vec<MenuLink>,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            title: "ARBISWAP".to_owned(),
            home_href: ".".to_owned(),
            logo_src: "static/arbiswap.svg".to_owned(),
            currency_symbol: "ETH".to_owned(),
            significant_digits: 4,
            mobile_breakpoint_px: 720,
            extra_small_breakpoint_px: 500,
            request_tokens_url: "https://twitter.com/intent/tweet?text=Requesting%20testnet%20tokens%20to%20try%20out%20%40arbi_swap%20on%20%40OffchainLabs%27%20Arbitrum%20Rollup".to_owned(),
            versions: vec![
                VersionLink { name: "V1".to_owned(), query: "v1".to_owned() },
                VersionLink { name: "V2".to_owned(), query: "v2".to_owned() },
            ],
            menu_links: vec![
                MenuLink {
                    label: "About".to_owned(),
                    href: "https://offchainlabs.com".to_owned(),
                },
                MenuLink {
                    label: "Docs".to_owned(),
                    href: "https://developer.offchainlabs.com".to_owned(),
                },
                MenuLink {
                    label: "Code".to_owned(),
                    href: "https://github.com/OffchainLabs/arbiswap".to_owned(),
                },
            ],
        }
    }
}

impl HeaderConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`HeaderConfig::from_json`], but falls back to the defaults.
    pub fn from_json_or_default(json: Option<&str>) -> (Self, Option<ConfigError>) {
        match json.map(str::trim).filter(|json| !json.is_empty()) {
            None => (Self::default(), None),
            Some(json) => match Self::from_json(json) {
                Ok(config) => (config, None),
                Err(err) => {
                    debug!(%err, "using default header config");
                    (Self::default(), Some(err))
                }
            },
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_SIGNIFICANT_DIGITS).contains(&self.significant_digits) {
            return Err(ConfigError::Invalid(format!(
                "significant_digits must be between 1 and {}",
                MAX_SIGNIFICANT_DIGITS
            )));
        }
        if self.versions.iter().any(|v| v.query.is_empty()) {
            return Err(ConfigError::Invalid("version query must not be empty".to_owned()));
        }
        Ok(())
    }

    /// Version selected by the `use` query parameter, defaulting to the last
    /// (newest) entry.
    pub fn active_version(&self, query: Option<&str>) -> Option<&VersionLink> {
        query
            .and_then(|q| self.versions.iter().find(|v| v.query.eq_ignore_ascii_case(q)))
            .or_else(|| self.versions.last())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_header() {
        let config = HeaderConfig::default();
        assert_eq!(config.title, "ARBISWAP");
        assert_eq!(config.currency_symbol, "ETH");
        assert_eq!(config.significant_digits, 4);
        assert_eq!(config.versions.len(), 2);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config =
            HeaderConfig::from_json(r#"{"title": "TESTSWAP", "mobile_breakpoint_px": 500}"#)
                .unwrap();
        assert_eq!(config.title, "TESTSWAP");
        assert_eq!(config.mobile_breakpoint_px, 500);
        assert_eq!(config.currency_symbol, "ETH");
        assert_eq!(config.menu_links, HeaderConfig::default().menu_links);
    }

    #[test]
    fn rejects_zero_digits() {
        let err = HeaderConfig::from_json(r#"{"significant_digits": 0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_too_many_digits() {
        let err = HeaderConfig::from_json(r#"{"significant_digits": 18446744073709551615}"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        let err = HeaderConfig::from_json(r#"{"significant_digits": 79}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(HeaderConfig::from_json(r#"{"significant_digits": 78}"#).is_ok());

        let (config, err) =
            HeaderConfig::from_json_or_default(Some(r#"{"significant_digits": 1000}"#));
        assert_eq!(config.significant_digits, 4);
        assert!(err.is_some());
    }

    #[test]
    fn malformed_json_falls_back() {
        let (config, err) = HeaderConfig::from_json_or_default(Some("{not json"));
        assert_eq!(config, HeaderConfig::default());
        assert!(matches!(err, Some(ConfigError::Json(_))));

        let (config, err) = HeaderConfig::from_json_or_default(Some("   "));
        assert_eq!(config, HeaderConfig::default());
        assert!(err.is_none());

        assert!(HeaderConfig::from_json_or_default(None).1.is_none());
    }

    #[test]
    fn picks_active_version_from_query() {
        let config = HeaderConfig::default();
        assert_eq!(config.active_version(Some("v1")).map(|v| v.name.as_str()), Some("V1"));
        assert_eq!(config.active_version(Some("V1")).map(|v| v.name.as_str()), Some("V1"));
        assert_eq!(config.active_version(Some("v9")).map(|v| v.name.as_str()), Some("V2"));
        assert_eq!(config.active_version(None).map(|v| v.name.as_str()), Some("V2"));
    }
}
