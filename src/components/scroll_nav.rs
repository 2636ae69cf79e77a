//! Scroll-to-top / scroll-to-end buttons, shown only on pages with a results card.

pub const RESULTS_ID: &str = "results-card";
pub const CONTAINER_SELECTOR: &str = ".scroll-buttons";
pub const TOP_BUTTON_ID: &str = "scrollTopBtn";
pub const END_BUTTON_ID: &str = "scrollEndBtn";
pub const END_MARKER_ID: &str = "end-of-page-marker";

/// What the page gets for a given results-card presence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollNavPlan {
    pub display: &'static str,
    pub wire_buttons: bool,
}

impl ScrollNavPlan {
    pub fn for_results(present: bool) -> Self {
        if present {
            Self {
                display: "flex",
                wire_buttons: true,
            }
        } else {
            Self {
                display: "none",
                wire_buttons: false,
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub fn setup_scroll_buttons(document: &web_sys::Document) {
    use super::web_helpers::{html_element_by_id, listen, set_display};
    use wasm_bindgen::JsCast;
    use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

    let plan = ScrollNavPlan::for_results(document.get_element_by_id(RESULTS_ID).is_some());

    let container = document
        .query_selector(CONTAINER_SELECTOR)
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok());
    if let Some(container) = &container {
        set_display(container, plan.display);
    }

    if !plan.wire_buttons {
        return;
    }

    if let Some(top) = html_element_by_id(document, TOP_BUTTON_ID) {
        listen(&top, "click", move |event| {
            event.prevent_default();
            if let Some(window) = web_sys::window() {
                let options = ScrollToOptions::new();
                options.set_top(0.0);
                options.set_behavior(ScrollBehavior::Smooth);
                window.scroll_to_with_scroll_to_options(&options);
            }
        });
    }

    let end = html_element_by_id(document, END_BUTTON_ID);
    let marker = document.get_element_by_id(END_MARKER_ID);
    if let (Some(end), Some(marker)) = (end, marker) {
        listen(&end, "click", move |event| {
            event.prevent_default();
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            marker.scroll_into_view_with_scroll_into_view_options(&options);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn results_page_shows_and_wires_buttons() {
        let plan = ScrollNavPlan::for_results(true);
        assert_eq!(plan.display, "flex");
        assert!(plan.wire_buttons);
    }

    #[test]
    fn missing_results_hides_container() {
        let plan = ScrollNavPlan::for_results(false);
        assert_eq!(plan.display, "none");
        assert!(!plan.wire_buttons);
    }
}
