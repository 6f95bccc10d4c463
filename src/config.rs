use std::collections::HashSet;

/// Listing page size. Every page but the last holds exactly this many
/// items.
pub const PAGE_SIZE: usize = 12;

/// Upper bound on the related-articles rail.
pub const RELATED_LIMIT: i64 = 3;

/// Process-wide immutable configuration, built once in `main` and shared
/// through app data.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Base URL used for canonical links and structured data.
    pub base_url: String,
    /// Site display name used in page titles and publisher metadata.
    pub site_name: String,
    /// Coarse partition every listing is scoped to.
    pub category: String,
    /// Publication channel an article must be tagged into to be visible
    /// on this surface.
    pub channel: String,
    pub page_size: usize,
    pub related_limit: i64,
    /// Two-letter ISO country codes denied by the geo gate.
    pub blocked_countries: HashSet<String>,
    /// Header the trusted edge proxy sets with the requester's country.
    pub geo_header: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: "https://backbar.fyi".to_string(),
            site_name: "BACKBAR".to_string(),
            category: "spirits".to_string(),
            channel: "backbar".to_string(),
            page_size: PAGE_SIZE,
            related_limit: RELATED_LIMIT,
            blocked_countries: ["CN", "RU"]
                .into_iter()
                .map(str::to_string)
                .collect(),
            geo_header: "x-vercel-ip-country".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let blocked_countries = match std::env::var("BLOCKED_COUNTRIES") {
            Ok(list) => list
                .split(',')
                .map(|code| code.trim().to_ascii_uppercase())
                .filter(|code| !code.is_empty())
                .collect(),
            Err(_) => defaults.blocked_countries,
        };

        Self {
            base_url: env_or("BASE_URL", defaults.base_url),
            site_name: env_or("SITE_NAME", defaults.site_name),
            category: env_or("SITE_CATEGORY", defaults.category),
            channel: env_or("SITE_CHANNEL", defaults.channel),
            page_size: defaults.page_size,
            related_limit: defaults.related_limit,
            blocked_countries,
            geo_header: env_or("GEO_COUNTRY_HEADER", defaults.geo_header),
        }
    }
}

fn env_or(key: &str, default: String) -> String {
    std::env::var(key)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_the_publication_surface() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.category, "spirits");
        assert_eq!(cfg.channel, "backbar");
        assert_eq!(cfg.page_size, 12);
        assert_eq!(cfg.related_limit, 3);
        assert!(cfg.blocked_countries.contains("CN"));
        assert!(cfg.blocked_countries.contains("RU"));
        assert_eq!(cfg.blocked_countries.len(), 2);
    }
}
