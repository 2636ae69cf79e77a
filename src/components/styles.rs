/// Rules the page behaviors depend on: the card fade-in transition and the truncating
/// track label.
pub const STYLESHEET: &str = r#"
    .fade-in-on-load {
        opacity: 0;
        transform: translateY(20px);
        transition: opacity 0.6s ease-out, transform 0.6s ease-out;
    }
    .fade-in-on-load.is-visible {
        opacity: 1;
        transform: translateY(0);
    }
    .song-info {
        font-size: 0.8rem;
        color: var(--dark-slate);
        max-width: 150px;
        white-space: nowrap;
        overflow: hidden;
        text-overflow: ellipsis;
    }
"#;

/// Appends [`STYLESHEET`] to `<head>`. Calling it twice duplicates the rules.
#[cfg(target_arch = "wasm32")]
pub fn inject_stylesheet(document: &web_sys::Document) -> Option<()> {
    use wasm_bindgen::JsCast;

    let style: web_sys::HtmlStyleElement = document.create_element("style").ok()?.dyn_into().ok()?;
    style.set_inner_text(STYLESHEET);
    document.head()?.append_child(&style).ok()?;
    Some(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::fade_in::{FADE_CLASS, VISIBLE_CLASS};

    #[test]
    fn stylesheet_defines_the_classes_the_behaviors_toggle() {
        assert!(STYLESHEET.contains(&format!(".{FADE_CLASS} {{")));
        assert!(STYLESHEET.contains(&format!(".{FADE_CLASS}.{VISIBLE_CLASS} {{")));
        assert!(STYLESHEET.contains(".song-info {"));
        assert!(STYLESHEET.contains("text-overflow: ellipsis;"));
    }
}
