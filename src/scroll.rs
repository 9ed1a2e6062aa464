use crate::document::{Document, ScrollIntoViewOptions};
use std::rc::Rc;

pub const SCROLL_TRIGGER_ID: &str = "scrollToCountBtn";
pub const SCROLL_TARGET_ID: &str = "visitor-count-section";

/// Wires the "scroll to count" button when both the button and the count
/// section exist. Returns whether a handler was attached.
pub fn bind_scroll_affordance<D>(document: &Rc<D>) -> bool
where
    D: Document + 'static,
{
    if !document.has_element(SCROLL_TRIGGER_ID) || !document.has_element(SCROLL_TARGET_ID) {
        return false;
    }

    let page = Rc::downgrade(document);
    document.add_click_listener(
        SCROLL_TRIGGER_ID,
        Box::new(move || {
            if let Some(page) = page.upgrade() {
                page.scroll_into_view(SCROLL_TARGET_ID, ScrollIntoViewOptions::smooth_center());
            }
        }),
    )
}
