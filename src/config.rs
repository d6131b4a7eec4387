use serde::Deserialize;
use thiserror::Error;

const SITE_JSON: &str = include_str!("../static/site.json");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid site config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Site-wide settings baked into the bundle.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub title: String,
    /// Public URL the bundle is served under, e.g. `/placement/`.
    pub base_path: String,
    pub contact_email: String,
    pub phone: String,
    pub address: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Training & Placement Cell".into(),
            base_path: "/".into(),
            contact_email: "placement@example.edu".into(),
            phone: "".into(),
            address: "".into(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let mut cfg: SiteConfig = serde_json::from_str(text)?;
        cfg.base_path = normalize_base(&cfg.base_path);
        Ok(cfg)
    }

    pub fn embedded() -> Self {
        match Self::from_json(SITE_JSON) {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::warn!(error = %e, "using default site config");
                Self::default()
            }
        }
    }

    /// Location path with the base path removed. Always starts with `/`.
    pub fn route_path<'a>(&self, location: &'a str) -> std::borrow::Cow<'a, str> {
        let base = self.base_path.trim_end_matches('/');
        let rest = if base.is_empty() || location == base {
            location.strip_prefix(base).unwrap_or(location)
        } else {
            location
                .strip_prefix(base)
                .filter(|r| r.starts_with('/'))
                .unwrap_or(location)
        };
        if rest.starts_with('/') {
            rest.into()
        } else {
            format!("/{rest}").into()
        }
    }

    /// Browser href for a route path.
    pub fn href(&self, route: &str) -> String {
        let base = self.base_path.trim_end_matches('/');
        format!("{base}{route}")
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.contact_email)
    }
}

fn normalize_base(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        "/".into()
    } else {
        format!("/{trimmed}/")
    }
}
