//! Canonical URLs and schema.org linked-data records, derived
//! mechanically from article fields and taxonomy path segments.

use serde_json::{json, Value};

use crate::config::AppConfig;
use crate::models::Article;
use crate::taxonomy::to_path_segment;

pub fn canonical_listing_url(cfg: &AppConfig) -> String {
    format!("{}/articles", cfg.base_url)
}

pub fn canonical_page_url(cfg: &AppConfig, number: usize) -> String {
    format!("{}/articles/page/{}", cfg.base_url, number)
}

pub fn canonical_article_url(cfg: &AppConfig, slug: &str) -> String {
    format!("{}/articles/{}", cfg.base_url, slug)
}

pub fn canonical_subcategory_url(cfg: &AppConfig, value: &str) -> String {
    format!(
        "{}/articles/subcategory/{}",
        cfg.base_url,
        to_path_segment(value)
    )
}

pub fn canonical_tag_url(cfg: &AppConfig, value: &str) -> String {
    format!("{}/articles/tag/{}", cfg.base_url, to_path_segment(value))
}

/// schema.org Article record for the article page's JSON-LD block.
pub fn article_json_ld(cfg: &AppConfig, article: &Article) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "Article",
        "headline": article.title,
        "description": article.subtitle.as_deref().unwrap_or(""),
        "author": {
            "@type": "Person",
            "name": article.author.as_deref().unwrap_or(&cfg.site_name),
        },
        "datePublished": article.published_at.to_rfc3339(),
        "image": article.main_image_url,
        "publisher": {
            "@type": "Organization",
            "name": cfg.site_name,
            "url": cfg.base_url,
        },
        "mainEntityOfPage": {
            "@type": "WebPage",
            "@id": canonical_article_url(cfg, &article.slug),
        },
    })
}

/// schema.org BreadcrumbList: Home / Articles / [subcategory] / article.
pub fn breadcrumb_json_ld(cfg: &AppConfig, article: &Article) -> Value {
    let mut names_and_items = vec![
        ("Home".to_string(), cfg.base_url.clone()),
        ("Articles".to_string(), canonical_listing_url(cfg)),
    ];

    if let Some(subcategory) = &article.subcategory {
        names_and_items.push((
            subcategory.clone(),
            canonical_subcategory_url(cfg, subcategory),
        ));
    }
    names_and_items.push((
        article.title.clone(),
        canonical_article_url(cfg, &article.slug),
    ));

    let items: Vec<Value> = names_and_items
        .into_iter()
        .enumerate()
        .map(|(i, (name, item))| {
            json!({
                "@type": "ListItem",
                "position": i + 1,
                "name": name,
                "item": item,
            })
        })
        .collect();

    json!({
        "@context": "https://schema.org",
        "@type": "BreadcrumbList",
        "itemListElement": items,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::{TimeZone, Utc};
    use sqlx::types::Json;
    use uuid::Uuid;

    fn sample_article(subcategory: Option<&str>) -> Article {
        Article {
            id: Uuid::nil(),
            slug: "rye-revival".to_string(),
            title: "The Rye Revival".to_string(),
            subtitle: Some("American whiskey's sharpest comeback".to_string()),
            category: "spirits".to_string(),
            subcategory: subcategory.map(str::to_string),
            tags: vec!["Whiskey".to_string()],
            channels: vec!["backbar".to_string()],
            author: Some("J. Ramos".to_string()),
            main_image_url: "https://cdn.example/rye.jpg".to_string(),
            main_image_alt: "Rye bottles".to_string(),
            body: Json(Vec::new()),
            published_at: Utc.with_ymd_and_hms(2026, 1, 5, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn article_record_carries_headline_author_and_canonical_id() {
        let cfg = AppConfig::default();
        let ld = article_json_ld(&cfg, &sample_article(Some("Whiskey")));

        assert_eq!(ld["@type"], "Article");
        assert_eq!(ld["headline"], "The Rye Revival");
        assert_eq!(ld["author"]["name"], "J. Ramos");
        assert_eq!(ld["publisher"]["name"], "BACKBAR");
        assert_eq!(
            ld["mainEntityOfPage"]["@id"],
            "https://backbar.fyi/articles/rye-revival"
        );
    }

    #[test]
    fn anonymous_article_falls_back_to_the_site_name() {
        let cfg = AppConfig::default();
        let mut article = sample_article(None);
        article.author = None;

        let ld = article_json_ld(&cfg, &article);
        assert_eq!(ld["author"]["name"], "BACKBAR");
    }

    #[test]
    fn breadcrumb_includes_subcategory_when_present() {
        let cfg = AppConfig::default();
        let ld = breadcrumb_json_ld(&cfg, &sample_article(Some("Single Malt")));
        let items = ld["itemListElement"].as_array().unwrap();

        assert_eq!(items.len(), 4);
        assert_eq!(items[2]["name"], "Single Malt");
        assert_eq!(
            items[2]["item"],
            "https://backbar.fyi/articles/subcategory/single-malt"
        );
        for (i, item) in items.iter().enumerate() {
            assert_eq!(item["position"], i as u64 + 1);
        }
    }

    #[test]
    fn breadcrumb_skips_subcategory_when_absent() {
        let cfg = AppConfig::default();
        let ld = breadcrumb_json_ld(&cfg, &sample_article(None));
        let items = ld["itemListElement"].as_array().unwrap();

        assert_eq!(items.len(), 3);
        assert_eq!(items[2]["name"], "The Rye Revival");
    }
}
