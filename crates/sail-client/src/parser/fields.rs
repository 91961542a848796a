//! Per-field extraction inside one candidate box.
//!
//! Every function here returns an empty string when its element is missing.

use scraper::{ElementRef, Selector};
use url::Url;

use super::selectors::{DESCRIPTION, MORE_LINK, ORDER_LINK, PRICE, TITLE};

/// Collapse whitespace runs to single spaces and trim.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalized text content of an element and all its descendants.
pub fn element_text(element: ElementRef<'_>) -> String {
    collapse_whitespace(&element.text().collect::<String>())
}

/// Text of the first descendant matching `selector`, or empty.
pub fn first_text(element: ElementRef<'_>, selector: &Selector) -> String {
    element
        .select(selector)
        .next()
        .map(element_text)
        .unwrap_or_default()
}

/// `href` of the first descendant matching `selector`, or empty.
pub fn first_href(element: ElementRef<'_>, selector: &Selector, base: Option<&Url>) -> String {
    element
        .select(selector)
        .next()
        .and_then(|a| a.value().attr("href"))
        .map(|href| absolutize(href, base))
        .unwrap_or_default()
}

/// Resolve a possibly-relative href against `base`.
///
/// Absolute hrefs are returned as written. Without a base, or when joining
/// fails, the trimmed href is returned.
pub fn absolutize(href: &str, base: Option<&Url>) -> String {
    let href = href.trim();
    if href.is_empty() || Url::parse(href).is_ok() {
        return href.to_string();
    }
    match base.map(|b| b.join(href)) {
        Some(Ok(resolved)) => resolved.to_string(),
        _ => href.to_string(),
    }
}

pub fn title(element: ElementRef<'_>) -> String {
    first_text(element, &TITLE)
}

pub fn description(element: ElementRef<'_>) -> String {
    first_text(element, &DESCRIPTION)
}

pub fn price(element: ElementRef<'_>) -> String {
    first_text(element, &PRICE)
}

pub fn more_url(element: ElementRef<'_>, base: Option<&Url>) -> String {
    first_href(element, &MORE_LINK, base)
}

pub fn order_url(element: ElementRef<'_>, base: Option<&Url>) -> String {
    first_href(element, &ORDER_LINK, base)
}
