//! Boat, branch and pier details from a box's metadata list.

use scraper::ElementRef;

use super::fields::{element_text, first_text};
use super::selectors::{
    BOAT_KEYWORD, BRANCH_KEYWORD, META_LABEL, META_LIST, META_VALUE, PIER_KEYWORD,
};

/// Facility details of one session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    pub boat: String,
    pub branch: String,
    pub pier: String,
}

/// Read boat / branch / pier from the box's metadata list.
///
/// Each `li` holds a `messages` label span, a value span, and optionally a
/// boat-type icon span, all as siblings. The value span has no class of its
/// own, so it is found by excluding the label and icon classes. This breaks
/// if the site adds another decorative span before the value.
pub fn extract_metadata(element: ElementRef<'_>) -> Metadata {
    let mut meta = Metadata::default();

    let Some(list) = element.select(&META_LIST).next() else {
        return meta;
    };

    for item in list
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|child| child.value().name() == "li")
    {
        let label = first_text(item, &META_LABEL);
        if label.is_empty() {
            continue;
        }

        let value = item
            .children()
            .filter_map(ElementRef::wrap)
            .find(|child| META_VALUE.matches(child))
            .map(element_text)
            .unwrap_or_default();

        if label.contains(BOAT_KEYWORD) {
            meta.boat = value;
        } else if label.contains(BRANCH_KEYWORD) {
            meta.branch = value;
        } else if label.contains(PIER_KEYWORD) {
            meta.pier = value;
        } else {
            tracing::trace!(label = %label, "Ignoring unrecognized metadata label");
        }
    }

    meta
}
