//! Page behaviors. Each one is independent; they share only the persistence store.

mod fade_in;
mod player;
mod scroll_nav;
mod styles;
mod submit_feedback;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod web_helpers;

#[cfg(target_arch = "wasm32")]
pub use app::*;
pub use fade_in::*;
pub use player::*;
pub use scroll_nav::*;
pub use styles::*;
pub use submit_feedback::*;
