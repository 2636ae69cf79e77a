//! Spinner on the submitting button. Nothing restores it; the page is expected to
//! navigate away.

pub const SPINNER_MARKUP: &str = r#"<span class="loading"></span>"#;

/// Button contents while a form is submitting.
pub fn processing_markup(label: &str) -> String {
    format!("{SPINNER_MARKUP} {label}")
}

/// Only real `<button>` submitters get the spinner; `<input type="submit">` is left alone.
pub fn is_button_tag(tag_name: &str) -> bool {
    tag_name.eq_ignore_ascii_case("button")
}

#[cfg(target_arch = "wasm32")]
pub fn attach_submit_feedback(document: &web_sys::Document, label: &str) {
    use super::web_helpers::{listen, query_all};
    use wasm_bindgen::JsCast;

    let markup = processing_markup(label);
    for form in query_all(document, "form") {
        let markup = markup.clone();
        listen(&form, "submit", move |event| {
            let Some(submit) = event.dyn_ref::<web_sys::SubmitEvent>() else {
                return;
            };
            if let Some(button) = submit.submitter() {
                if is_button_tag(&button.tag_name()) {
                    button.set_inner_html(&markup);
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markup_puts_spinner_before_label() {
        assert_eq!(
            processing_markup("Memproses..."),
            r#"<span class="loading"></span> Memproses..."#
        );
    }

    #[test]
    fn only_buttons_qualify() {
        assert!(is_button_tag("BUTTON"));
        assert!(is_button_tag("button"));
        assert!(!is_button_tag("INPUT"));
    }
}
