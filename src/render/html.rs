//! HTML fragment builders for animal cards.
//!
//! Markup is assembled by hand; the card layout matches the classes the
//! bundled stylesheet expects (`cards__item`, `card__title`, ...).

use crate::animals::{DisplayRecord, Query};

/// Escape a string for safe insertion into HTML text and attribute values.
///
/// Replaces the five HTML-special characters (`&`, `<`, `>`, `"`, `'`) with
/// their entities.
#[must_use]
pub fn escape_html(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '"' => output.push_str("&quot;"),
            '\'' => output.push_str("&#x27;"),
            _ => output.push(ch),
        }
    }
    output
}

/// One card: title, taxonomy line, and a labeled line per present attribute.
pub fn animal_card(record: &DisplayRecord) -> String {
    let mut html = String::from("<li class=\"cards__item\">\n");
    html.push_str(&format!(
        "<div class=\"card__title\">{}</div>\n",
        escape_html(&record.name)
    ));
    html.push_str(&format!(
        "<p class=\"card__taxonomy\">{}</p>\n",
        escape_html(&record.taxonomy)
    ));
    html.push_str("<ul class=\"card__info\">\n");
    for (attribute, value) in &record.attributes {
        html.push_str(&format!(
            "<li><strong>{}:</strong> {}</li>\n",
            attribute.label(),
            escape_html(value)
        ));
    }
    html.push_str("</ul>\n</li>\n");
    html
}

/// Fragment shown when a name lookup matched nothing.
pub fn no_results(name: &str) -> String {
    format!(
        "<p class=\"error\">No animals found<br>with the name<br>\"{}\".</p>",
        escape_html(name)
    )
}

/// Concatenate cards; an empty name lookup renders [`no_results`] instead.
pub fn render_cards(records: &[DisplayRecord], query: &Query) -> String {
    match (records.is_empty(), query.name()) {
        (true, Some(name)) => no_results(name),
        _ => records.iter().map(animal_card).collect(),
    }
}
