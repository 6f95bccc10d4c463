use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::config::AppConfig;
use crate::models::{Article, ArticleSummary, RelatedArticle};

/// Typed taxonomy filter. Values always reach the store as bind
/// parameters, never interpolated into the query text.
#[derive(Debug, Clone, Copy)]
pub enum TaxonomyFilter<'a> {
    Subcategory(&'a str),
    Tag(&'a str),
}

/// All articles visible on this surface, newest first.
pub async fn list_articles(
    pool: &PgPool,
    cfg: &AppConfig,
) -> Result<Vec<ArticleSummary>, sqlx::Error> {
    sqlx::query_as::<_, ArticleSummary>(
        r#"
        SELECT id, slug, title, subtitle, subcategory, author,
               main_image_url, main_image_alt,
               body->0->'children'->0->>'text' AS excerpt,
               published_at
        FROM articles
        WHERE category = $1 AND $2 = ANY(channels)
        ORDER BY published_at DESC, id
        "#,
    )
    .bind(&cfg.category)
    .bind(&cfg.channel)
    .fetch_all(pool)
    .await
}

/// Exact slug lookup. `None` is a valid "not found" outcome, not an
/// error. Slugs are unique across the whole store, so this is not
/// scoped by category or channel.
pub async fn get_article_by_slug(
    pool: &PgPool,
    slug: &str,
) -> Result<Option<Article>, sqlx::Error> {
    sqlx::query_as::<_, Article>(
        r#"
        SELECT id, slug, title, subtitle, category, subcategory, tags,
               channels, author, main_image_url, main_image_alt, body,
               published_at
        FROM articles
        WHERE slug = $1
        "#,
    )
    .bind(slug)
    .fetch_optional(pool)
    .await
}

/// Articles matching one taxonomy dimension, newest first, scoped by the
/// same eligibility predicate as every other listing.
pub async fn list_by_taxonomy(
    pool: &PgPool,
    cfg: &AppConfig,
    filter: TaxonomyFilter<'_>,
) -> Result<Vec<ArticleSummary>, sqlx::Error> {
    let mut qb: QueryBuilder<Postgres> = QueryBuilder::new(
        "SELECT id, slug, title, subtitle, subcategory, author, \
         main_image_url, main_image_alt, \
         body->0->'children'->0->>'text' AS excerpt, published_at \
         FROM articles WHERE category = ",
    );
    qb.push_bind(&cfg.category);
    qb.push(" AND ");
    qb.push_bind(&cfg.channel);
    qb.push(" = ANY(channels)");

    match filter {
        TaxonomyFilter::Subcategory(value) => {
            qb.push(" AND subcategory = ");
            qb.push_bind(value);
        }
        TaxonomyFilter::Tag(value) => {
            qb.push(" AND ");
            qb.push_bind(value);
            qb.push(" = ANY(tags)");
        }
    }

    qb.push(" ORDER BY published_at DESC, id");

    qb.build_query_as::<ArticleSummary>().fetch_all(pool).await
}

/// Up to `cfg.related_limit` same-subcategory articles, excluding the
/// reference article itself.
pub async fn related_by_subcategory(
    pool: &PgPool,
    cfg: &AppConfig,
    subcategory: &str,
    exclude_slug: &str,
) -> Result<Vec<RelatedArticle>, sqlx::Error> {
    sqlx::query_as::<_, RelatedArticle>(
        r#"
        SELECT id, slug, title, main_image_url, main_image_alt
        FROM articles
        WHERE category = $1 AND $2 = ANY(channels)
          AND subcategory = $3 AND slug <> $4
        ORDER BY published_at DESC, id
        LIMIT $5
        "#,
    )
    .bind(&cfg.category)
    .bind(&cfg.channel)
    .bind(subcategory)
    .bind(exclude_slug)
    .bind(cfg.related_limit)
    .fetch_all(pool)
    .await
}

/// Category-wide fallback for the related rail, excluding the reference
/// article itself.
pub async fn related_by_category(
    pool: &PgPool,
    cfg: &AppConfig,
    exclude_slug: &str,
) -> Result<Vec<RelatedArticle>, sqlx::Error> {
    sqlx::query_as::<_, RelatedArticle>(
        r#"
        SELECT id, slug, title, main_image_url, main_image_alt
        FROM articles
        WHERE category = $1 AND $2 = ANY(channels)
          AND slug <> $3
        ORDER BY published_at DESC, id
        LIMIT $4
        "#,
    )
    .bind(&cfg.category)
    .bind(&cfg.channel)
    .bind(exclude_slug)
    .bind(cfg.related_limit)
    .fetch_all(pool)
    .await
}
