//! Simple - Minimalist Splash Screen
//!
//! This library holds everything except the window shell: the animation
//! timelines, the splash state holder, and the scene construction. All of it
//! is sampled with explicit `Instant`s, so the behavior is unit-testable
//! without opening a window.

pub mod anim;
pub mod app;
pub mod assets;
pub mod constants;
pub mod profile;
pub mod ui;

// Re-export commonly used types
pub use app::state::{Icon, SplashState};
pub use app::{Message, SplashApp};
pub use profile::DisplayProfile;
