use backbar::models::{ArticleSummary, RelatedArticle};

/// Slugs of a listing result, in result order.
pub fn summary_slugs(items: &[ArticleSummary]) -> Vec<&str> {
    items.iter().map(|a| a.slug.as_str()).collect()
}

/// Slugs of a related-rail result, in result order.
pub fn related_slugs(items: &[RelatedArticle]) -> Vec<&str> {
    items.iter().map(|a| a.slug.as_str()).collect()
}

/// Eligible seed slugs, newest first — the order every listing query
/// must reproduce.
pub const ELIGIBLE_NEWEST_FIRST: [&str; 8] = [
    "glassware-guide",
    "rhum-agricole-primer",
    "demerara-deep-dive",
    "rum-barrel-aging",
    "cask-strength-basics",
    "peat-and-smoke",
    "four-grains-of-rye",
    "whiskey-water-of-life",
];
