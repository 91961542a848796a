//! Markup vocabulary of the source site.
//!
//! The site is not consistent about class names; every spelling seen in the
//! wild is listed here so the rest of the parser never hardcodes one.

use std::sync::LazyLock;

use scraper::Selector;

/// Class of an event box.
pub const PRIMARY_BOX_CLASS: &str = "event-box";
/// Misspelled box class used by part of the live site.
pub const SECONDARY_BOX_CLASS: &str = "evnet-box";

/// Boat-type icons rendered as siblings of the metadata value span.
pub const ICON_CLASSES: [&str; 3] = ["icon-sailboat", "icon-motorboat", "icon-yacht"];

/// Metadata label keywords: vessel, branch, pier.
pub const BOAT_KEYWORD: &str = "סירה";
pub const BRANCH_KEYWORD: &str = "סניף";
pub const PIER_KEYWORD: &str = "מזח";

fn compile(css: &str) -> Selector {
    // Only ever called with the literals below.
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid built-in selector {css:?}: {e}"))
}

/// Both box spellings in one group so matches come back in document order.
pub static CANDIDATE: LazyLock<Selector> =
    LazyLock::new(|| compile(".event-box, .evnet-box"));

pub static TITLE: LazyLock<Selector> = LazyLock::new(|| compile("h3"));
pub static DESCRIPTION: LazyLock<Selector> = LazyLock::new(|| compile(".truncate-text"));
pub static PRICE: LazyLock<Selector> = LazyLock::new(|| compile(".price"));
pub static MORE_LINK: LazyLock<Selector> = LazyLock::new(|| compile("a.more-details"));
pub static ORDER_LINK: LazyLock<Selector> = LazyLock::new(|| compile("a.add_to_cart_button"));
pub static DATE_LABEL: LazyLock<Selector> = LazyLock::new(|| compile("label.event-date"));

pub static META_LIST: LazyLock<Selector> = LazyLock::new(|| compile("ul.event-meta"));
pub static META_LABEL: LazyLock<Selector> = LazyLock::new(|| compile("span.messages"));
/// A value span is any span that is neither the label nor a boat icon.
pub static META_VALUE: LazyLock<Selector> = LazyLock::new(|| {
    compile("span:not(.messages):not(.icon-sailboat):not(.icon-motorboat):not(.icon-yacht)")
});
