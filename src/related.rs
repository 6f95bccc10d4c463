//! Related-content resolution for the article page.

use sqlx::PgPool;

use crate::config::AppConfig;
use crate::db;
use crate::models::{Article, RelatedArticle};

/// Resolve up to `cfg.related_limit` articles to show alongside
/// `article`.
///
/// Two-step fallback: a subcategory-scoped query runs first; if it
/// yields fewer than the limit (including when the article has no
/// subcategory at all), the partial result is discarded and replaced by
/// a category-wide query. The rail never mixes both result sets, so an
/// article with one or two true siblings shows the newest items from the
/// whole category instead. An empty result is valid; the caller omits
/// the rail.
pub async fn related_for(
    pool: &PgPool,
    cfg: &AppConfig,
    article: &Article,
) -> Result<Vec<RelatedArticle>, sqlx::Error> {
    let mut related = match article.subcategory.as_deref() {
        Some(subcategory) => {
            db::related_by_subcategory(pool, cfg, subcategory, &article.slug).await?
        }
        None => Vec::new(),
    };

    if (related.len() as i64) < cfg.related_limit {
        related = db::related_by_category(pool, cfg, &article.slug).await?;
    }

    Ok(related)
}
