//! JSON and CSV renderings of `list_articles()` output.

use crate::article::Article;

pub const CSV_HEADER: &str = "id,title,link,published,sentiment,reading_time";

/// Pretty-printed JSON array of the articles.
pub fn to_json(articles: &[Article]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(articles)
}

/// CSV with a fixed column set; absent values become empty cells.
pub fn to_csv(articles: &[Article]) -> String {
    let mut out = String::with_capacity(64 * (articles.len() + 1));
    out.push_str(CSV_HEADER);
    out.push('\n');
    for a in articles {
        let sentiment = a.sentiment.map(|p| p.as_str()).unwrap_or_default();
        let reading_time = a.reading_time.map(|m| m.to_string()).unwrap_or_default();
        let row = [
            escape_csv(&a.id),
            escape_csv(&a.title),
            escape_csv(a.link.as_deref().unwrap_or_default()),
            escape_csv(a.published.as_deref().unwrap_or_default()),
            escape_csv(sentiment),
            escape_csv(&reading_time),
        ];
        out.push_str(&row.join(","));
        out.push('\n');
    }
    out
}

/// Quote a cell if it holds a comma, quote or newline; embedded quotes are doubled.
pub fn escape_csv(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
