//! Background-music playlist player.
//!
//! The state machine is target independent: it talks to the audio element through
//! [`MediaElement`], to the label and mute button through [`PlayerView`], and to
//! persistence through [`PlaybackPreferences`]. The browser adapters live in `web`.

use crate::db::{KeyValueStore, PlaybackPreferences, PreferenceKeys, StoreError};
use crate::diagnostics::{log_info, log_warn};
use crate::models::{Labels, PageConfig, Track};
use rand::Rng;

#[cfg(target_arch = "wasm32")]
mod web;
#[cfg(target_arch = "wasm32")]
pub use web::*;

/// Why a play attempt was issued. Only used to word the console message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayAttempt {
    TrackLoad,
    Unmute,
}

/// A play attempt the browser refused, typically because of autoplay policy.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayError {
    pub attempt: PlayAttempt,
    pub message: String,
}

impl PlayError {
    pub fn new(attempt: PlayAttempt, message: impl Into<String>) -> Self {
        Self {
            attempt,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for PlayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.attempt {
            PlayAttempt::TrackLoad => write!(
                f,
                "autoplay prevented, waiting for user interaction: {}",
                self.message
            ),
            PlayAttempt::Unmute => write!(f, "play after unmute failed: {}", self.message),
        }
    }
}

impl std::error::Error for PlayError {}

/// Rejected plays are logged and otherwise dropped. Playback picks up again on the next
/// unmute.
pub fn report_play_failure(err: &PlayError) {
    log_info("player", &err.to_string());
}

/// Audio element operations the player needs.
pub trait MediaElement {
    fn set_source(&self, src: &str);
    fn current_time(&self) -> f64;
    fn set_current_time(&self, seconds: f64);
    fn is_muted(&self) -> bool;
    fn set_muted(&self, muted: bool);
    fn is_paused(&self) -> bool;
    /// Starts playback. Failures are reported through [`report_play_failure`], possibly
    /// after this returns.
    fn play(&self, attempt: PlayAttempt);
}

/// The visible parts of the player. Implementations skip elements that are missing.
pub trait PlayerView {
    fn show_track_name(&self, text: &str);
    fn show_mute_glyph(&self, glyph: MuteGlyph);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MuteGlyph {
    Muted,
    Unmuted,
}

impl MuteGlyph {
    pub fn for_muted(muted: bool) -> Self {
        if muted {
            MuteGlyph::Muted
        } else {
            MuteGlyph::Unmuted
        }
    }

    pub fn markup(self) -> &'static str {
        match self {
            MuteGlyph::Muted => r#"<i class="fas fa-volume-mute"></i>"#,
            MuteGlyph::Unmuted => r#"<i class="fas fa-volume-up"></i>"#,
        }
    }
}

/// Wraps any index into `[0, len)`. `len` must be non-zero.
pub fn normalize_index(index: i64, len: usize) -> usize {
    index.rem_euclid(len as i64) as usize
}

/// Wraps a stored `parseInt` value the way `value % len` indexes the playlist. `len` must
/// be non-zero.
pub fn wrap_stored_index(stored: f64, len: usize) -> usize {
    stored.trunc().rem_euclid(len as f64) as usize
}

pub fn next_index(current: usize, len: usize) -> usize {
    (current + 1) % len
}

/// Stored index when there is one, otherwise a uniform pick. Empty playlists start at 0.
pub fn choose_start_index<R: Rng>(stored: Option<f64>, len: usize, rng: &mut R) -> usize {
    if len == 0 {
        return 0;
    }
    match stored {
        Some(index) => wrap_stored_index(index, len),
        None => rng.gen_range(0..len),
    }
}

pub struct PlaylistPlayer<M, V, S> {
    playlist: Vec<Track>,
    labels: Labels,
    media: M,
    view: V,
    prefs: PlaybackPreferences<S>,
    current: usize,
}

impl<M, V, S> PlaylistPlayer<M, V, S>
where
    M: MediaElement,
    V: PlayerView,
    S: KeyValueStore,
{
    pub fn new<R: Rng>(
        config: &PageConfig,
        media: M,
        view: V,
        store: S,
        rng: &mut R,
    ) -> Self {
        let prefs = PlaybackPreferences::new(
            store,
            PreferenceKeys::with_prefix(&config.storage_prefix),
        );
        let current = choose_start_index(prefs.song_index(), config.playlist.len(), rng);
        Self {
            playlist: config.playlist.clone(),
            labels: config.labels.clone(),
            media,
            view,
            prefs,
            current,
        }
    }

    /// Page start-up. Without a media element there is no player; the label only reports
    /// the empty playlist, whatever the playlist holds.
    pub fn mount<R: Rng>(
        config: &PageConfig,
        media: Option<M>,
        view: V,
        store: S,
        rng: &mut R,
    ) -> Option<Self> {
        let Some(media) = media else {
            view.show_track_name(&config.labels.empty_playlist);
            return None;
        };
        let mut player = Self::new(config, media, view, store, rng);
        player.start();
        Some(player)
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    #[cfg(test)]
    pub fn media(&self) -> &M {
        &self.media
    }

    #[cfg(test)]
    pub fn view(&self) -> &V {
        &self.view
    }

    #[cfg(test)]
    pub fn preferences(&self) -> &PlaybackPreferences<S> {
        &self.prefs
    }

    /// Loads the starting track, or shows the empty-playlist message.
    pub fn start(&mut self) {
        if self.playlist.is_empty() {
            self.view.show_track_name(&self.labels.empty_playlist);
            return;
        }
        self.load_track(self.current as i64);
    }

    pub fn load_track(&mut self, index: i64) {
        if self.playlist.is_empty() {
            self.view.show_track_name(&self.labels.no_track);
            return;
        }
        self.current = normalize_index(index, self.playlist.len());
        let track = &self.playlist[self.current];
        self.media.set_source(&track.src);
        self.view.show_track_name(&track.name);

        self.media.set_current_time(self.prefs.current_time());
        self.media.set_muted(self.prefs.is_muted());
        self.refresh_mute_glyph();

        self.media.play(PlayAttempt::TrackLoad);
    }

    pub fn toggle_mute(&mut self) {
        let muted = !self.media.is_muted();
        self.media.set_muted(muted);
        persist("mute flag", self.prefs.set_muted(muted));
        self.refresh_mute_glyph();

        // A failed autoplay leaves the element paused; unmuting is the user gesture that
        // lets it start.
        if !muted && self.media.is_paused() {
            self.media.play(PlayAttempt::Unmute);
        }
    }

    pub fn on_time_update(&mut self) {
        persist(
            "playback position",
            self.prefs.set_current_time(self.media.current_time()),
        );
    }

    pub fn on_ended(&mut self) {
        if self.playlist.is_empty() {
            return;
        }
        self.current = next_index(self.current, self.playlist.len());
        persist("track index", self.prefs.set_song_index(self.current));
        persist("playback position", self.prefs.set_current_time(0.0));
        self.load_track(self.current as i64);
    }

    fn refresh_mute_glyph(&self) {
        self.view
            .show_mute_glyph(MuteGlyph::for_muted(self.media.is_muted()));
    }
}

fn persist(what: &str, result: Result<(), StoreError>) {
    if let Err(err) = result {
        log_warn("player", &format!("could not save {what}: {err}"));
    }
}
