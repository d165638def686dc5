//! Utils file for all perch endpoints
use crate::posts::policy::Requester;
use crate::server::headers;
use actix_web::HttpRequest;

/// Builds the requester identity from the trusted proxy headers.
///
/// A request without [`headers::HTTP_X_FORWARDED_USER`] (or with an
/// empty value) is anonymous.
#[must_use]
pub fn requester_from(req: &HttpRequest) -> Requester {
    let display_name = req
        .headers()
        .get(headers::HTTP_X_FORWARDED_USER)
        .and_then(|value| value.to_str().ok())
        .filter(|name| !name.is_empty())
        .map(ToOwned::to_owned);
    let groups = req
        .headers()
        .get(headers::HTTP_X_FORWARDED_GROUPS)
        .and_then(|value| value.to_str().ok())
        .map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|group| !group.is_empty())
                .map(ToOwned::to_owned)
                .collect()
        })
        .unwrap_or_default();
    Requester {
        display_name,
        groups,
    }
}

/// Escapes text for inclusion in HTML element content or attribute values.
#[must_use]
pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for character in raw.chars() {
        match character {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(character),
        }
    }
    escaped
}

/// Wraps rendered page content in the shared HTML shell.
#[must_use]
pub fn page(title: &str, main: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head><meta charset=\"utf-8\"><title>{title} | Perch</title></head>\n\
         <body>\n{main}\n</body>\n\
         </html>\n",
        title = escape_html(title)
    )
}
