use askama::Template;

use backbar::models::{Article, ArticleSummary, RelatedArticle};

/// Display name + href pair for subcategory and tag links.
pub struct TaxonomyLink {
    pub name: String,
    pub href: String,
}

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub page_title: String,
    pub canonical: String,
    pub featured: Option<ArticleSummary>,
    pub sub_featured: Vec<ArticleSummary>,
    pub grid: Vec<ArticleSummary>,
}

#[derive(Template)]
#[template(path = "articles.html")]
pub struct ArticlesTemplate {
    pub page_title: String,
    pub canonical: String,
    pub heading: String,
    pub articles: Vec<ArticleSummary>,
    pub subcategories: Vec<TaxonomyLink>,
    pub prev_href: Option<String>,
    pub next_href: Option<String>,
}

#[derive(Template)]
#[template(path = "taxonomy.html")]
pub struct TaxonomyTemplate {
    pub page_title: String,
    pub canonical: String,
    pub display_name: String,
    pub articles: Vec<ArticleSummary>,
}

#[derive(Template)]
#[template(path = "article.html")]
pub struct ArticleTemplate {
    pub page_title: String,
    pub canonical: String,
    pub article: Article,
    pub published_display: String,
    pub body_html: String,
    pub subcategory_link: Option<TaxonomyLink>,
    pub tags: Vec<TaxonomyLink>,
    pub related: Vec<RelatedArticle>,
    pub article_json_ld: String,
    pub breadcrumb_json_ld: String,
}
