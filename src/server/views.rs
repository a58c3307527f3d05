//! Minimal HTML views for the search form and result page.
//!
//! Pages are rendered from format strings; every user-derived value goes
//! through [`escape`] first.

use crate::models::WordDefinition;

/// Escape text for safe interpolation into HTML body or attribute positions.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title} - WordWise</title>\n\
         </head>\n\
         <body>\n{body}\n</body>\n\
         </html>\n",
        title = escape(title),
        body = body
    )
}

/// The search form, with an optional flash-style notice banner.
pub fn index_page(notice: Option<(&str, &str)>) -> String {
    let banner = match notice {
        Some((kind, message)) => format!(
            "<div class=\"alert alert-{}\" role=\"alert\">{}</div>\n",
            escape(kind),
            escape(message)
        ),
        None => String::new(),
    };

    let body = format!(
        "<h1>WordWise</h1>\n\
         <p>Look up any word with AI-powered definitions.</p>\n\
         {banner}\
         <form method=\"post\" action=\"/search\">\n\
         <label for=\"word\">Word</label>\n\
         <input type=\"text\" id=\"word\" name=\"word\" maxlength=\"50\" required>\n\
         <button type=\"submit\">Search</button>\n\
         </form>",
        banner = banner
    );

    page("Search", &body)
}

fn list_items(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("<li>{}</li>", escape(item)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// The result page for one successfully defined word.
pub fn result_page(word: &str, entry: &WordDefinition) -> String {
    let mut body = format!(
        "<h1>{word}</h1>\n\
         <p><em>{part_of_speech}</em></p>\n\
         <h2>Definition</h2>\n\
         <p>{definition}</p>\n\
         <h2>Examples</h2>\n\
         <ul>\n{examples}\n</ul>\n\
         <h2>Contextual sentences</h2>\n\
         <ul>\n{sentences}\n</ul>\n",
        word = escape(word),
        part_of_speech = escape(&entry.part_of_speech),
        definition = escape(&entry.definition),
        examples = list_items(&entry.examples),
        sentences = list_items(&entry.contextual_sentences),
    );

    if let Some(pronunciation) = &entry.pronunciation {
        body.push_str(&format!(
            "<h2>Pronunciation</h2>\n<p>{}</p>\n",
            escape(pronunciation)
        ));
    }
    if let Some(etymology) = &entry.etymology {
        body.push_str(&format!(
            "<h2>Etymology</h2>\n<p>{}</p>\n",
            escape(etymology)
        ));
    }
    body.push_str("<p><a href=\"/\">Search another word</a></p>");

    page(word, &body)
}
