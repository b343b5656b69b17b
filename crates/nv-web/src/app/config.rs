//! API endpoint configuration.

/// Base address of the marketplace REST backend.
///
/// Resolved once at startup and provided through context; the resource
/// clients receive it explicitly via [`crate::app::api::ApiClient`] rather
/// than reading ambient state.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiConfig {
    pub base_url: reqwest::Url,
}

/// Used when no `NV_API_BASE` override was baked in at build time.
pub const DEFAULT_BASE: &str = "http://localhost:8080/api/";

impl ApiConfig {
    /// Build from the compile-time `NV_API_BASE` override, falling back to
    /// [`DEFAULT_BASE`]. An unparseable override also falls back.
    pub fn from_env() -> Self {
        let raw = option_env!("NV_API_BASE").unwrap_or(DEFAULT_BASE);
        let base_url = reqwest::Url::parse(raw)
            .unwrap_or_else(|_| reqwest::Url::parse(DEFAULT_BASE).expect("default API base parses"));
        Self { base_url }
    }

    pub fn with_base(base_url: reqwest::Url) -> Self {
        Self { base_url }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_base_is_valid() {
        let config = ApiConfig::from_env();
        assert!(!config.base_url.cannot_be_a_base());
    }
}
