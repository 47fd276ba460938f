use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::fields::{null_as_default, optional_date};

/// A `posts` document as returned by the content API.
#[derive(Debug, Clone, Deserialize)]
pub struct Post {
    pub id: String,
    #[serde(default)]
    pub uid: Option<String>,
    #[serde(rename = "type", default)]
    pub doc_type: String,
    // null for drafts
    #[serde(default, deserialize_with = "optional_date")]
    pub first_publication_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "optional_date")]
    pub last_publication_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub data: PostData,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostData {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub subtitle: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub author: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub banner: Banner,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: Vec<ContentBlock>,
}

/// Image field. An unset image is serialized as `{}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Banner {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub alt: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContentBlock {
    #[serde(default, deserialize_with = "null_as_default")]
    pub heading: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub body: Vec<RichTextFragment>,
}

/// One rich text block (paragraph, list item, ...). Inline spans are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RichTextFragment {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
}

impl Post {
    /// True when the document was republished after its first publication.
    pub fn was_edited(&self) -> bool {
        match (self.first_publication_date, self.last_publication_date) {
            (Some(first), Some(last)) => last > first,
            _ => false,
        }
    }
}

#[cfg(test)]
impl ContentBlock {
    pub fn new(heading: &str, body: &[&str]) -> ContentBlock {
        ContentBlock {
            heading: heading.to_string(),
            body: body.iter().map(|text| RichTextFragment::paragraph(text)).collect(),
        }
    }
}

impl RichTextFragment {
    #[cfg(test)]
    pub fn paragraph(text: &str) -> RichTextFragment {
        RichTextFragment {
            kind: "paragraph".to_string(),
            text: text.to_string(),
        }
    }

    pub fn is_list_item(&self) -> bool {
        self.kind == "list-item" || self.kind == "o-list-item"
    }
}
