use actix_web::HttpResponse;
use askama::Template;

use backbar::models::BodyBlock;

pub fn render<T: Template>(t: T) -> HttpResponse {
    match t.render() {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => HttpResponse::InternalServerError()
            .content_type("text/plain; charset=utf-8")
            .body(format!("Template error: {e}")),
    }
}

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render body blocks to HTML: text blocks become paragraphs, image
/// blocks become figures. All text content is escaped; empty text
/// blocks are dropped.
pub fn render_body(blocks: &[BodyBlock]) -> String {
    let mut out = String::new();
    for block in blocks {
        match block {
            BodyBlock::Text { children } => {
                let text: String = children
                    .iter()
                    .map(|span| escape_html(&span.text))
                    .collect();
                if !text.is_empty() {
                    out.push_str("<p>");
                    out.push_str(&text);
                    out.push_str("</p>\n");
                }
            }
            BodyBlock::Image { url, alt, caption } => {
                out.push_str(&format!(
                    r#"<figure class="body-image"><img src="{}" alt="{}"/>"#,
                    escape_html(url),
                    escape_html(alt.as_deref().unwrap_or(""))
                ));
                if let Some(caption) = caption {
                    out.push_str(&format!(
                        "<figcaption>{}</figcaption>",
                        escape_html(caption)
                    ));
                }
                out.push_str("</figure>\n");
            }
        }
    }
    out
}
