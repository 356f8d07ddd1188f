//! Article records: the typed fields the core reads plus an open extension map.
//!
//! `NewArticle` is what arrives from the transport (no identity yet);
//! `Article` is what the store hands back after assigning `id` and `saved_at`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::analyze::Analysis;
use crate::error::{PulseError, Result};
use crate::sentiment::Polarity;

/// Keys owned by the store; caller-supplied values are dropped.
const STORE_OWNED: [&str; 2] = ["id", "saved_at"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<Polarity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reading_time: Option<u32>,
    #[serde(default)]
    pub is_favorite: bool,
    /// Unix milliseconds at ingestion.
    pub saved_at: i64,
    /// Unrecognised fields, kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Article {
    pub(crate) fn from_new(new: NewArticle, id: String, saved_at: i64) -> Self {
        Self {
            id,
            title: new.title,
            content: new.content,
            link: new.link,
            published: new.published,
            sentiment: new.sentiment,
            reading_time: new.reading_time,
            is_favorite: new.is_favorite,
            saved_at,
            extra: new.extra,
        }
    }

    pub(crate) fn apply_analysis(&mut self, analysis: &Analysis) {
        self.sentiment = Some(analysis.sentiment);
        self.reading_time = Some(analysis.reading_time);
    }
}

/// An article lacking identity, ready to be stored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewArticle {
    pub title: String,
    pub content: String,
    pub link: Option<String>,
    pub published: Option<String>,
    pub sentiment: Option<Polarity>,
    pub reading_time: Option<u32>,
    pub is_favorite: bool,
    pub extra: Map<String, Value>,
}

impl NewArticle {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            ..Self::default()
        }
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    /// Parse a raw field map as received from the transport.
    ///
    /// At least one of `title`, `content` or `text` must be present (an empty
    /// string counts as present). `content` wins over `text`; a losing `text`
    /// stays in the extension map.
    pub fn from_fields(mut fields: Map<String, Value>) -> Result<Self> {
        for key in STORE_OWNED {
            fields.remove(key);
        }
        // null is treated as absent
        fields.retain(|_, v| !v.is_null());

        let title = take_string(&mut fields, "title")?;
        let content = match take_string(&mut fields, "content")? {
            Some(c) => Some(c),
            None => take_string(&mut fields, "text")?,
        };
        if title.is_none() && content.is_none() {
            return Err(PulseError::invalid(
                "article requires a 'title' or 'content'/'text' field",
            ));
        }

        let link = take_string(&mut fields, "link")?;
        let published = match fields.remove("published") {
            None => None,
            Some(Value::String(s)) => Some(s),
            Some(Value::Number(n)) => Some(n.to_string()),
            Some(_) => return Err(PulseError::invalid("'published' must be a string or number")),
        };
        let sentiment = match take_string(&mut fields, "sentiment")? {
            None => None,
            Some(s) => Some(s.parse::<Polarity>().map_err(PulseError::InvalidInput)?),
        };
        let reading_time = match fields.remove("reading_time") {
            None => None,
            Some(v) => Some(
                v.as_u64()
                    .and_then(|n| u32::try_from(n).ok())
                    .ok_or_else(|| {
                        PulseError::invalid("'reading_time' must be a non-negative integer")
                    })?,
            ),
        };
        let is_favorite = match fields.remove("is_favorite") {
            None => false,
            Some(Value::Bool(b)) => b,
            Some(_) => return Err(PulseError::invalid("'is_favorite' must be a boolean")),
        };

        Ok(Self {
            title: title.unwrap_or_default(),
            content: content.unwrap_or_default(),
            link,
            published,
            sentiment,
            reading_time,
            is_favorite,
            extra: fields,
        })
    }

    /// Parse a raw request body; it must be a JSON object.
    pub fn from_json(body: &str) -> Result<Self> {
        match serde_json::from_str::<Value>(body)? {
            Value::Object(fields) => Self::from_fields(fields),
            _ => Err(PulseError::invalid("article body must be a JSON object")),
        }
    }
}

fn take_string(fields: &mut Map<String, Value>, key: &str) -> Result<Option<String>> {
    match fields.remove(key) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(_) => Err(PulseError::invalid(format!("'{key}' must be a string"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(v: Value) -> Map<String, Value> {
        match v {
            Value::Object(m) => m,
            _ => panic!("not an object"),
        }
    }

    #[test]
    fn parses_known_fields_and_keeps_extras() {
        let new = NewArticle::from_fields(fields(json!({
            "title": "Fed holds",
            "content": "Rates unchanged",
            "link": "https://example.com/a",
            "published": "2024-05-01",
            "is_favorite": true,
            "source": "Reuters",
            "tags": ["macro"]
        })))
        .unwrap();
        assert_eq!(new.title, "Fed holds");
        assert_eq!(new.content, "Rates unchanged");
        assert_eq!(new.link.as_deref(), Some("https://example.com/a"));
        assert_eq!(new.published.as_deref(), Some("2024-05-01"));
        assert!(new.is_favorite);
        assert_eq!(new.extra.get("source"), Some(&json!("Reuters")));
        assert_eq!(new.extra.get("tags"), Some(&json!(["macro"])));
    }

    #[test]
    fn text_is_an_alias_for_content() {
        let new = NewArticle::from_fields(fields(json!({ "text": "body" }))).unwrap();
        assert_eq!(new.content, "body");
        assert_eq!(new.title, "");

        let both =
            NewArticle::from_fields(fields(json!({ "content": "c", "text": "t" }))).unwrap();
        assert_eq!(both.content, "c");
        assert_eq!(both.extra.get("text"), Some(&json!("t")));
    }

    #[test]
    fn missing_text_fields_are_invalid() {
        let err = NewArticle::from_fields(fields(json!({ "link": "x" }))).unwrap_err();
        assert!(matches!(err, PulseError::InvalidInput(_)));
        let err = NewArticle::from_fields(fields(json!({ "title": null }))).unwrap_err();
        assert!(matches!(err, PulseError::InvalidInput(_)));
    }

    #[test]
    fn empty_text_is_accepted() {
        let new = NewArticle::from_fields(fields(json!({ "content": "" }))).unwrap();
        assert_eq!(new.content, "");
    }

    #[test]
    fn caller_identity_is_dropped() {
        let new = NewArticle::from_fields(fields(json!({
            "id": "forged", "saved_at": 1, "title": "t"
        })))
        .unwrap();
        assert!(!new.extra.contains_key("id"));
        assert!(!new.extra.contains_key("saved_at"));
    }

    #[test]
    fn mistyped_fields_are_invalid() {
        for bad in [
            json!({ "title": 5 }),
            json!({ "title": "t", "is_favorite": "yes" }),
            json!({ "title": "t", "reading_time": -1 }),
            json!({ "title": "t", "sentiment": "ecstatic" }),
            json!({ "title": "t", "published": [] }),
        ] {
            assert!(NewArticle::from_fields(fields(bad)).is_err());
        }
    }

    #[test]
    fn from_json_requires_object() {
        assert!(NewArticle::from_json("[1,2]").is_err());
        assert!(NewArticle::from_json("not json").is_err());
        assert!(NewArticle::from_json(r#"{"title":"ok"}"#).is_ok());
    }

    #[test]
    fn stored_article_serializes_flat() {
        let mut new = NewArticle::new("T", "C").with_link("L");
        new.extra.insert("source".into(), json!("AP"));
        let a = Article::from_new(new, "id-1".into(), 42);
        let v = serde_json::to_value(&a).unwrap();
        assert_eq!(v["id"], "id-1");
        assert_eq!(v["source"], "AP");
        assert_eq!(v["is_favorite"], false);
        assert_eq!(v["saved_at"], 42);
        assert!(v.get("sentiment").is_none());
    }
}
