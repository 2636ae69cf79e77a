//! Card fade-in: mark every card faded, then visible one tick later so the injected
//! transition runs.

pub const CARD_SELECTOR: &str = ".card";
pub const FADE_CLASS: &str = "fade-in-on-load";
pub const VISIBLE_CLASS: &str = "is-visible";
pub const REVEAL_DELAY_MS: u32 = 10;

#[cfg(target_arch = "wasm32")]
pub fn fade_in_cards(document: &web_sys::Document) {
    use super::web_helpers::query_all;
    use gloo_timers::callback::Timeout;

    for card in query_all(document, CARD_SELECTOR) {
        let _ = card.class_list().add_1(FADE_CLASS);
        Timeout::new(REVEAL_DELAY_MS, move || {
            let _ = card.class_list().add_1(VISIBLE_CLASS);
        })
        .forget();
    }
}
