//! Persisted playback preferences. Three independent keys, each written on its own;
//! nothing ties them together atomically.
#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::collections::HashMap;

#[cfg(target_arch = "wasm32")]
use gloo_storage::{LocalStorage, Storage};

/// Error type for storage writes.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreError {
    /// The browser refused to hand out local storage (blocked, sandboxed, ...).
    Unavailable,
    /// The write itself failed, usually quota.
    Rejected(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Unavailable => write!(f, "local storage is unavailable"),
            StoreError::Rejected(msg) => write!(f, "storage write rejected: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {}

/// String key/value store the preferences live in.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory store backing the unit tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let store = Self::new();
        for (key, value) in entries {
            store
                .entries
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
        }
        store
    }
}

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
impl<T: KeyValueStore + ?Sized> KeyValueStore for std::rc::Rc<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

/// The origin's `localStorage`. Values are stored as plain strings, not JSON, so the
/// keys stay readable by anything else on the page.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStore;

#[cfg(target_arch = "wasm32")]
impl BrowserStore {
    fn available() -> bool {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .is_some()
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        if !Self::available() {
            return None;
        }
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        if !Self::available() {
            return Err(StoreError::Unavailable);
        }
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| StoreError::Rejected(format!("{e:?}")))
    }
}

/// Key names for the three preference values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceKeys {
    pub song_index: String,
    pub current_time: String,
    pub is_muted: String,
}

impl PreferenceKeys {
    pub fn with_prefix(prefix: &str) -> Self {
        Self {
            song_index: format!("{prefix}songIndex"),
            current_time: format!("{prefix}currentTime"),
            is_muted: format!("{prefix}isMuted"),
        }
    }
}

impl Default for PreferenceKeys {
    fn default() -> Self {
        Self::with_prefix("music_")
    }
}

/// Typed access to the playback preferences over any [`KeyValueStore`].
#[derive(Debug)]
pub struct PlaybackPreferences<S> {
    store: S,
    keys: PreferenceKeys,
}

impl<S: KeyValueStore> PlaybackPreferences<S> {
    pub fn new(store: S, keys: PreferenceKeys) -> Self {
        Self { store, keys }
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Stored track index as the browser's `parseInt` reads it, before wrapping into the
    /// playlist. Empty or unparsable values read as absent.
    pub fn song_index(&self) -> Option<f64> {
        self.store
            .get(&self.keys.song_index)
            .filter(|raw| !raw.is_empty())
            .and_then(|raw| parse_int_prefix(&raw))
    }

    /// Stored position in seconds, 0 when absent or unusable.
    pub fn current_time(&self) -> f64 {
        self.store
            .get(&self.keys.current_time)
            .and_then(|raw| parse_float_prefix(&raw))
            .filter(|secs| secs.is_finite() && *secs > 0.0)
            .unwrap_or(0.0)
    }

    /// Only the literal `"true"` means muted.
    pub fn is_muted(&self) -> bool {
        self.store.get(&self.keys.is_muted).as_deref() == Some("true")
    }

    pub fn set_song_index(&self, index: usize) -> Result<(), StoreError> {
        self.store.set(&self.keys.song_index, &index.to_string())
    }

    pub fn set_current_time(&self, seconds: f64) -> Result<(), StoreError> {
        self.store.set(&self.keys.current_time, &seconds.to_string())
    }

    pub fn set_muted(&self, muted: bool) -> Result<(), StoreError> {
        self.store
            .set(&self.keys.is_muted, if muted { "true" } else { "false" })
    }
}

/// Leading-integer parse with `parseInt` semantics: skips leading whitespace, accepts a
/// sign and a `0x` hex prefix, stops at the first invalid digit. `"12px"` is 12, `"0x1f"`
/// is 31, `"px"` is nothing. Digit strings past `i64` keep their magnitude as a float;
/// only values that overflow to infinity read as nothing.
pub fn parse_int_prefix(raw: &str) -> Option<f64> {
    let trimmed = raw.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let (radix, digits) = match unsigned.get(..2) {
        Some("0x") | Some("0X") => (16, &unsigned[2..]),
        _ => (10, unsigned),
    };
    let mut value = 0.0f64;
    let mut seen = false;
    for digit in digits.chars().map_while(|c| c.to_digit(radix)) {
        value = value * f64::from(radix) + f64::from(digit);
        seen = true;
    }
    if !seen || !value.is_finite() {
        return None;
    }
    Some(if negative { -value } else { value })
}

/// Leading-float parse: the longest prefix that reads as a number.
pub fn parse_float_prefix(raw: &str) -> Option<f64> {
    let trimmed = raw.trim_start();
    let candidate_len = trimmed
        .find(|c: char| !(c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E')))
        .unwrap_or(trimmed.len());
    let candidate = &trimmed[..candidate_len];
    (1..=candidate.len())
        .rev()
        .find_map(|end| candidate[..end].parse::<f64>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefs(entries: &[(&str, &str)]) -> PlaybackPreferences<MemoryStore> {
        PlaybackPreferences::new(
            MemoryStore::with_entries(entries.iter().copied()),
            PreferenceKeys::default(),
        )
    }

    #[test]
    fn keys_follow_prefix() {
        let keys = PreferenceKeys::default();
        assert_eq!(keys.song_index, "music_songIndex");
        assert_eq!(keys.current_time, "music_currentTime");
        assert_eq!(keys.is_muted, "music_isMuted");
        assert_eq!(PreferenceKeys::with_prefix("bgm.").is_muted, "bgm.isMuted");
    }

    #[test]
    fn missing_values_use_defaults() {
        let p = prefs(&[]);
        assert_eq!(p.song_index(), None);
        assert_eq!(p.current_time(), 0.0);
        assert!(!p.is_muted());
    }

    #[test]
    fn index_parses_like_parse_int() {
        assert_eq!(prefs(&[("music_songIndex", "1")]).song_index(), Some(1.0));
        assert_eq!(prefs(&[("music_songIndex", " 3abc")]).song_index(), Some(3.0));
        assert_eq!(prefs(&[("music_songIndex", "-2")]).song_index(), Some(-2.0));
        assert_eq!(prefs(&[("music_songIndex", "")]).song_index(), None);
        assert_eq!(prefs(&[("music_songIndex", "abc")]).song_index(), None);
    }

    #[test]
    fn position_falls_back_to_zero() {
        assert_eq!(prefs(&[("music_currentTime", "42.5")]).current_time(), 42.5);
        assert_eq!(prefs(&[("music_currentTime", "7.25s")]).current_time(), 7.25);
        assert_eq!(prefs(&[("music_currentTime", "NaN")]).current_time(), 0.0);
        assert_eq!(prefs(&[("music_currentTime", "-4")]).current_time(), 0.0);
        assert_eq!(prefs(&[("music_currentTime", "1e400")]).current_time(), 0.0);
    }

    #[test]
    fn muted_only_for_literal_true() {
        assert!(prefs(&[("music_isMuted", "true")]).is_muted());
        assert!(!prefs(&[("music_isMuted", "TRUE")]).is_muted());
        assert!(!prefs(&[("music_isMuted", "false")]).is_muted());
    }

    #[test]
    fn writes_use_plain_string_forms() {
        let p = prefs(&[]);
        p.set_song_index(3).unwrap();
        p.set_current_time(0.0).unwrap();
        p.set_muted(true).unwrap();
        assert_eq!(p.store().get("music_songIndex").as_deref(), Some("3"));
        assert_eq!(p.store().get("music_currentTime").as_deref(), Some("0"));
        assert_eq!(p.store().get("music_isMuted").as_deref(), Some("true"));

        p.set_current_time(12.75).unwrap();
        assert_eq!(p.current_time(), 12.75);
    }

    #[test]
    fn int_prefix_handles_hex_and_huge_values() {
        assert_eq!(parse_int_prefix("0x1"), Some(1.0));
        assert_eq!(parse_int_prefix("-0X1f"), Some(-31.0));
        assert_eq!(parse_int_prefix("0x"), None);
        assert_eq!(parse_int_prefix("99999999999999999999"), Some(1e20));
        assert_eq!(parse_int_prefix(&"9".repeat(400)), None);
        assert_eq!(parse_int_prefix("+"), None);
    }

    #[test]
    fn float_prefix_edge_cases() {
        assert_eq!(parse_float_prefix(".5"), Some(0.5));
        assert_eq!(parse_float_prefix("3.5.1"), Some(3.5));
        assert_eq!(parse_float_prefix("1e3x"), Some(1000.0));
        assert_eq!(parse_float_prefix("e3"), None);
        assert_eq!(parse_float_prefix(""), None);
    }
}
