use actix_web::{get, web, HttpResponse};

use backbar::common::PageError;
use backbar::db::{self, TaxonomyFilter};
use backbar::models::ArticleSummary;
use backbar::pagination::{first_page, numbered_page};
use backbar::related::related_for;
use backbar::seo;
use backbar::taxonomy::{to_filter_value, to_path_segment};

use crate::web::helpers::{render, render_body};
use crate::web::state::AppState;
use crate::web::templates::{
    ArticleTemplate, ArticlesTemplate, HomeTemplate, TaxonomyLink, TaxonomyTemplate,
};

/// Distinct subcategories present in the listing, in listing order.
fn subcategory_links(articles: &[ArticleSummary]) -> Vec<TaxonomyLink> {
    let mut links: Vec<TaxonomyLink> = Vec::new();
    for article in articles {
        if let Some(subcategory) = &article.subcategory {
            if !links.iter().any(|link| link.name == *subcategory) {
                links.push(TaxonomyLink {
                    name: subcategory.clone(),
                    href: format!("/articles/subcategory/{}", to_path_segment(subcategory)),
                });
            }
        }
    }
    links
}

#[get("/")]
pub async fn home(state: web::Data<AppState>) -> Result<HttpResponse, PageError> {
    let cfg = &state.config;
    let articles = db::list_articles(&state.pool, cfg).await?;

    let mut articles = articles.into_iter();
    let featured = articles.next();
    let rest: Vec<ArticleSummary> = articles.collect();
    let sub_featured: Vec<ArticleSummary> = rest.iter().take(2).cloned().collect();
    let grid: Vec<ArticleSummary> = rest.into_iter().skip(2).take(9).collect();

    Ok(render(HomeTemplate {
        page_title: format!("{} | Spirits Education for the Bar Industry", cfg.site_name),
        canonical: cfg.base_url.clone(),
        featured,
        sub_featured,
        grid,
    }))
}

#[get("/articles")]
pub async fn articles_index(state: web::Data<AppState>) -> Result<HttpResponse, PageError> {
    let cfg = &state.config;
    let articles = db::list_articles(&state.pool, cfg).await?;

    let subcategories = subcategory_links(&articles);
    let page = first_page(articles, cfg.page_size);
    let next_href = page.has_next().then(|| "/articles/page/2".to_string());

    Ok(render(ArticlesTemplate {
        page_title: format!("Spirits Articles | {}", cfg.site_name),
        canonical: seo::canonical_listing_url(cfg),
        heading: "Article Collection".to_string(),
        articles: page.items,
        subcategories,
        prev_href: None,
        next_href,
    }))
}

#[get("/articles/page/{page}")]
pub async fn articles_page(
    state: web::Data<AppState>,
    path: web::Path<usize>,
) -> Result<HttpResponse, PageError> {
    let number = path.into_inner();
    let cfg = &state.config;

    // Page 1 lives at /articles only; bail before touching the store.
    if number <= 1 {
        return Err(PageError::NotFound);
    }

    let articles = db::list_articles(&state.pool, cfg).await?;

    let subcategories = subcategory_links(&articles);
    let page = numbered_page(articles, cfg.page_size, number)?;

    let prev_href = if page.number == 2 {
        "/articles".to_string()
    } else {
        format!("/articles/page/{}", page.number - 1)
    };

    Ok(render(ArticlesTemplate {
        page_title: format!("Spirits Articles - Page {} | {}", page.number, cfg.site_name),
        canonical: seo::canonical_page_url(cfg, page.number),
        heading: "Article Collection".to_string(),
        next_href: page
            .has_next()
            .then(|| format!("/articles/page/{}", page.number + 1)),
        articles: page.items,
        subcategories,
        prev_href: Some(prev_href),
    }))
}

#[get("/articles/subcategory/{subcategory}")]
pub async fn articles_by_subcategory(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, PageError> {
    let cfg = &state.config;
    let display_name = to_filter_value(&path.into_inner());

    let articles = db::list_by_taxonomy(
        &state.pool,
        cfg,
        TaxonomyFilter::Subcategory(&display_name),
    )
    .await?;
    if articles.is_empty() {
        return Err(PageError::NotFound);
    }

    let page = first_page(articles, cfg.page_size);

    Ok(render(TaxonomyTemplate {
        page_title: format!("{} Articles | {}", display_name, cfg.site_name),
        canonical: seo::canonical_subcategory_url(cfg, &display_name),
        display_name,
        articles: page.items,
    }))
}

#[get("/articles/tag/{tag}")]
pub async fn articles_by_tag(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, PageError> {
    let cfg = &state.config;
    let display_name = to_filter_value(&path.into_inner());

    let articles =
        db::list_by_taxonomy(&state.pool, cfg, TaxonomyFilter::Tag(&display_name)).await?;
    if articles.is_empty() {
        return Err(PageError::NotFound);
    }

    let page = first_page(articles, cfg.page_size);

    Ok(render(TaxonomyTemplate {
        page_title: format!("{} Articles | {}", display_name, cfg.site_name),
        canonical: seo::canonical_tag_url(cfg, &display_name),
        display_name,
        articles: page.items,
    }))
}

#[get("/articles/{slug}")]
pub async fn article_by_slug(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, PageError> {
    let cfg = &state.config;
    let slug = path.into_inner();

    let article = db::get_article_by_slug(&state.pool, &slug)
        .await?
        .ok_or(PageError::NotFound)?;

    let related = related_for(&state.pool, cfg, &article).await?;

    let subcategory_link = article.subcategory.as_ref().map(|subcategory| TaxonomyLink {
        name: subcategory.clone(),
        href: format!("/articles/subcategory/{}", to_path_segment(subcategory)),
    });
    let tags = article
        .tags
        .iter()
        .map(|tag| TaxonomyLink {
            name: tag.clone(),
            href: format!("/articles/tag/{}", to_path_segment(tag)),
        })
        .collect();

    Ok(render(ArticleTemplate {
        page_title: format!("{} | {}", article.title, cfg.site_name),
        canonical: seo::canonical_article_url(cfg, &article.slug),
        published_display: article.published_at.format("%B %-d, %Y").to_string(),
        body_html: render_body(&article.body),
        subcategory_link,
        tags,
        related,
        article_json_ld: seo::article_json_ld(cfg, &article).to_string(),
        breadcrumb_json_ld: seo::breadcrumb_json_ld(cfg, &article).to_string(),
        article,
    }))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    // The slug route must be registered after the more specific
    // /articles/... routes.
    cfg.service(home)
        .service(articles_index)
        .service(articles_page)
        .service(articles_by_subcategory)
        .service(articles_by_tag)
        .service(article_by_slug);
}
