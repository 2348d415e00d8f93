// app/state.rs - Splash Screen State
//
// The single source of truth for the view: a plain struct mutated through
// three operations (`appear`, `toggle`, `tick`) that all take the current
// instant as a parameter. The iced shell re-renders after every mutation,
// which is the whole publish/subscribe contract.

use std::time::{Duration, Instant};

use crate::anim::{EaseOut, Spring};
use crate::constants::{motion, strings};

/// Icon shown inside the toggle button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    /// Crescent moon with a star, shown while the toggle is off
    MoonStars,
    /// Sparkle, shown while the toggle is on
    Sparkles,
}

impl Icon {
    /// Glyph rendered through the text pipeline in place of a platform
    /// icon library.
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::MoonStars => "\u{263E}\u{2736}", // ☾✶
            Icon::Sparkles => "\u{2726}",          // ✦
        }
    }
}

/// Entrance of the title block: a single 0 -> -20 transition, fired once.
#[derive(Debug, Clone, Copy)]
enum Entrance {
    /// Before the appear signal; offset is 0
    Waiting,
    /// Timeline live
    Rising(EaseOut),
    /// Terminal; offset stays at the target for the life of the instance
    Settled,
}

/// All view state for the splash screen.
#[derive(Debug, Clone)]
pub struct SplashState {
    pressed: bool,
    entrance: Entrance,
    offset: f32,
    scale: f32,
    press_spring: Option<Spring>,
}

impl Default for SplashState {
    fn default() -> Self {
        Self::new()
    }
}

impl SplashState {
    pub fn new() -> Self {
        Self {
            pressed: false,
            entrance: Entrance::Waiting,
            offset: 0.0,
            scale: motion::SCALE_REST,
            press_spring: None,
        }
    }

    /// Fires the entrance transition. Only the first call per instance has
    /// any effect; the mount/appear signal is one-shot.
    pub fn appear(&mut self, now: Instant) {
        match self.entrance {
            Entrance::Waiting => {
                self.entrance = Entrance::Rising(EaseOut::new(
                    0.0,
                    motion::ENTRANCE_OFFSET,
                    Duration::from_secs_f32(motion::ENTRANCE_SECS),
                    now,
                ));
            }
            _ => log::debug!("appear ignored: entrance already fired"),
        }
    }

    /// Flips the toggle and re-aims the press spring at the new scale
    /// target. Label and icon swap with the flip; the spring keeps the
    /// current value and velocity, so mid-flight reversals stay smooth.
    pub fn toggle(&mut self, now: Instant) {
        self.pressed = !self.pressed;
        let target = self.scale_target();
        self.press_spring = Some(match self.press_spring.take() {
            Some(spring) => spring.retarget(target, now),
            None => Spring::new(
                self.scale,
                target,
                motion::SPRING_RESPONSE,
                motion::SPRING_DAMPING,
                now,
            ),
        });
    }

    /// Advances both timelines to `now` and retires the ones that are done.
    pub fn tick(&mut self, now: Instant) {
        if let Entrance::Rising(timeline) = self.entrance {
            self.offset = timeline.value_at(now);
            if timeline.is_complete(now) {
                self.offset = timeline.target();
                self.entrance = Entrance::Settled;
            }
        }

        if let Some(spring) = self.press_spring {
            self.scale = spring.value_at(now);
            if spring.is_settled(now) {
                self.scale = spring.target();
                self.press_spring = None;
            }
        }
    }

    /// True while any timeline is live; drives the frame subscription.
    pub fn is_animating(&self) -> bool {
        matches!(self.entrance, Entrance::Rising(_)) || self.press_spring.is_some()
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Vertical displacement of the title block, 0 before the entrance and
    /// -20 once settled.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Current button scale as driven by the press spring.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Scale the press spring is aiming at for the current toggle state.
    pub fn scale_target(&self) -> f32 {
        if self.pressed {
            motion::SCALE_PRESSED
        } else {
            motion::SCALE_REST
        }
    }

    pub fn label(&self) -> &'static str {
        if self.pressed {
            strings::LABEL_ON
        } else {
            strings::LABEL_OFF
        }
    }

    pub fn icon(&self) -> Icon {
        if self.pressed {
            Icon::Sparkles
        } else {
            Icon::MoonStars
        }
    }

    /// Static title copy; never changes across state transitions.
    pub fn title(&self) -> &'static str {
        strings::TITLE
    }

    /// Static subtitle copy; never changes across state transitions.
    pub fn subtitle(&self) -> &'static str {
        strings::SUBTITLE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(t0: Instant, secs: f32) -> Instant {
        t0 + Duration::from_secs_f32(secs)
    }

    #[test]
    fn initial_state() {
        let state = SplashState::new();
        assert!(!state.is_pressed());
        assert_eq!(state.offset(), 0.0);
        assert_eq!(state.scale(), 1.0);
        assert_eq!(state.label(), "Begin");
        assert_eq!(state.icon(), Icon::MoonStars);
        assert!(!state.is_animating());
    }

    #[test]
    fn entrance_settles_at_target_and_stays() {
        let t0 = Instant::now();
        let mut state = SplashState::new();
        state.appear(t0);
        assert!(state.is_animating());

        state.tick(at(t0, 0.6));
        assert!(state.offset() < 0.0 && state.offset() > -20.0);

        state.tick(at(t0, 1.2));
        assert_eq!(state.offset(), -20.0);

        // Later ticks never move it again
        state.tick(at(t0, 10.0));
        assert_eq!(state.offset(), -20.0);
        assert!(!state.is_animating());
    }

    #[test]
    fn appear_fires_only_once() {
        let t0 = Instant::now();
        let mut state = SplashState::new();
        state.appear(t0);
        state.tick(at(t0, 2.0));
        assert_eq!(state.offset(), -20.0);

        // A second appear must not restart the transition
        state.appear(at(t0, 3.0));
        state.tick(at(t0, 3.1));
        assert_eq!(state.offset(), -20.0);
    }

    #[test]
    fn toggle_parity() {
        let t0 = Instant::now();
        let mut state = SplashState::new();
        for n in 1..=7 {
            state.toggle(at(t0, n as f32 * 0.05));
            assert_eq!(state.is_pressed(), n % 2 == 1, "after {n} activations");
        }
    }

    #[test]
    fn pressed_presentation() {
        let t0 = Instant::now();
        let mut state = SplashState::new();
        state.toggle(t0);
        assert_eq!(state.label(), "Inspired");
        assert_eq!(state.icon(), Icon::Sparkles);
        assert_eq!(state.scale_target(), 1.05);

        state.tick(at(t0, 3.0));
        assert_eq!(state.scale(), 1.05);
        assert!(!state.is_animating());
    }

    #[test]
    fn released_presentation() {
        let t0 = Instant::now();
        let mut state = SplashState::new();
        state.toggle(t0);
        state.toggle(at(t0, 0.1));
        assert_eq!(state.label(), "Begin");
        assert_eq!(state.icon(), Icon::MoonStars);
        assert_eq!(state.scale_target(), 1.0);

        state.tick(at(t0, 4.0));
        assert_eq!(state.scale(), 1.0);
    }

    #[test]
    fn copy_is_static_across_transitions() {
        let t0 = Instant::now();
        let mut state = SplashState::new();
        let (title, subtitle) = (state.title(), state.subtitle());
        state.appear(t0);
        state.toggle(at(t0, 0.2));
        state.tick(at(t0, 2.0));
        assert_eq!(state.title(), title);
        assert_eq!(state.subtitle(), subtitle);
        assert_eq!(title, "Simple");
        assert_eq!(subtitle, "Beautifully Minimal");
    }

    #[test]
    fn mid_flight_reversal_keeps_scale_continuous() {
        let t0 = Instant::now();
        let mut state = SplashState::new();
        state.toggle(t0);
        state.tick(at(t0, 0.1));
        let before = state.scale();

        state.toggle(at(t0, 0.1));
        state.tick(at(t0, 0.1));
        assert!((state.scale() - before).abs() < 1.0e-4);

        state.tick(at(t0, 4.0));
        assert_eq!(state.scale(), 1.0);
    }
}
