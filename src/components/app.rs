//! Page bootstrap: injects the stylesheet immediately and wires every behavior once the
//! document is parsed.
use web_sys::{window, Document};

use super::web_helpers::listen;
use super::{
    attach_submit_feedback, fade_in_cards, inject_stylesheet, mount_player, setup_scroll_buttons,
};
use crate::diagnostics::{log_perf, log_warn, now_ms};
use crate::models::PageConfig;

/// Id of the optional `<script type="application/json">` holding a [`PageConfig`].
pub const CONFIG_ELEMENT_ID: &str = "pageglue-config";

pub fn boot() {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };

    if inject_stylesheet(&document).is_none() {
        log_warn("styles", "could not append stylesheet to <head>");
    }

    if document.ready_state() == "loading" {
        let target = document.clone();
        listen(&document, "DOMContentLoaded", move |_| on_ready(&target));
    } else {
        on_ready(&document);
    }
}

fn on_ready(document: &Document) {
    let started_at = now_ms();
    let config = load_config(document);

    fade_in_cards(document);
    attach_submit_feedback(document, &config.labels.processing);
    mount_player(document, &config);
    setup_scroll_buttons(document);

    log_perf(
        "page ready",
        started_at,
        &format!("{} track(s)", config.playlist.len()),
    );
}

fn load_config(document: &Document) -> PageConfig {
    let raw = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content());
    PageConfig::from_embedded(raw.as_deref())
}
