//! Browser adapters: the page's `<audio>` element, its label and mute button.
use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlAudioElement};

use super::{
    report_play_failure, MediaElement, MuteGlyph, PlayAttempt, PlayError, PlayerView,
    PlaylistPlayer,
};
use crate::components::web_helpers::listen;
use crate::db::BrowserStore;
use crate::models::PageConfig;

pub const MEDIA_ID: &str = "backgroundMusic";
pub const MUTE_BUTTON_ID: &str = "muteButton";
pub const SONG_NAME_ID: &str = "songName";

pub type WebPlayer = PlaylistPlayer<WebAudio, WebView, BrowserStore>;

pub struct WebAudio {
    audio: HtmlAudioElement,
}

impl WebAudio {
    pub fn new(audio: HtmlAudioElement) -> Self {
        Self { audio }
    }
}

impl MediaElement for WebAudio {
    fn set_source(&self, src: &str) {
        self.audio.set_src(src);
    }

    fn current_time(&self) -> f64 {
        self.audio.current_time()
    }

    fn set_current_time(&self, seconds: f64) {
        self.audio.set_current_time(seconds);
    }

    fn is_muted(&self) -> bool {
        self.audio.muted()
    }

    fn set_muted(&self, muted: bool) {
        self.audio.set_muted(muted);
    }

    fn is_paused(&self) -> bool {
        self.audio.paused()
    }

    fn play(&self, attempt: PlayAttempt) {
        match self.audio.play() {
            Ok(promise) => {
                wasm_bindgen_futures::spawn_local(async move {
                    if let Err(err) = wasm_bindgen_futures::JsFuture::from(promise).await {
                        report_play_failure(&PlayError::new(attempt, describe_js_error(&err)));
                    }
                });
            }
            Err(err) => report_play_failure(&PlayError::new(attempt, describe_js_error(&err))),
        }
    }
}

/// `NotAllowedError: play() failed because ...` for DOMExceptions, best effort otherwise.
fn describe_js_error(err: &JsValue) -> String {
    if let Some(text) = err.as_string() {
        return text;
    }
    let field = |name: &str| {
        js_sys::Reflect::get(err, &name.into())
            .ok()
            .and_then(|value| value.as_string())
            .filter(|value| !value.is_empty())
    };
    match (field("name"), field("message")) {
        (Some(name), Some(message)) => format!("{name}: {message}"),
        (Some(name), None) => name,
        (None, Some(message)) => message,
        (None, None) => format!("{err:?}"),
    }
}

pub struct WebView {
    song_name: Option<Element>,
    mute_button: Option<Element>,
}

impl WebView {
    pub fn find(document: &Document) -> Self {
        Self {
            song_name: document.get_element_by_id(SONG_NAME_ID),
            mute_button: document.get_element_by_id(MUTE_BUTTON_ID),
        }
    }
}

impl PlayerView for WebView {
    fn show_track_name(&self, text: &str) {
        if let Some(label) = &self.song_name {
            label.set_text_content(Some(text));
        }
    }

    fn show_mute_glyph(&self, glyph: MuteGlyph) {
        if let Some(button) = &self.mute_button {
            button.set_inner_html(glyph.markup());
        }
    }
}

/// Builds the player around `#backgroundMusic`, loads the first track and wires its
/// listeners. Without an audio element only the empty-playlist message is shown.
pub fn mount_player(document: &Document, config: &PageConfig) {
    let audio = document
        .get_element_by_id(MEDIA_ID)
        .and_then(|element| element.dyn_into::<HtmlAudioElement>().ok());

    let mut rng = rand::thread_rng();
    let Some(player) = PlaylistPlayer::mount(
        config,
        audio.clone().map(WebAudio::new),
        WebView::find(document),
        BrowserStore,
        &mut rng,
    ) else {
        return;
    };
    let Some(audio) = audio else {
        return;
    };
    let player: Rc<RefCell<WebPlayer>> = Rc::new(RefCell::new(player));

    if let Some(button) = document.get_element_by_id(MUTE_BUTTON_ID) {
        let player = player.clone();
        listen(&button, "click", move |_| {
            if let Ok(mut player) = player.try_borrow_mut() {
                player.toggle_mute();
            }
        });
    }

    {
        let player = player.clone();
        listen(&audio, "timeupdate", move |_| {
            if let Ok(mut player) = player.try_borrow_mut() {
                player.on_time_update();
            }
        });
    }

    listen(&audio, "ended", move |_| {
        if let Ok(mut player) = player.try_borrow_mut() {
            player.on_ended();
        }
    });
}
