use serde::{Deserialize, Serialize};

/// One block of article body content.
///
/// The body is opaque to the listing engine beyond excerpt extraction;
/// these shapes exist so the article page can render paragraphs and
/// inline figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "_type")]
pub enum BodyBlock {
    #[serde(rename = "block")]
    Text { children: Vec<TextSpan> },

    #[serde(rename = "image")]
    Image {
        url: String,
        #[serde(default)]
        alt: Option<String>,
        #[serde(default)]
        caption: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextSpan {
    pub text: String,
}
