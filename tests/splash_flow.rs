// End-to-end walk through the splash screen lifecycle: mount, entrance,
// toggle on, toggle off. Drives the state holder with synthetic instants;
// no window involved.

use std::time::{Duration, Instant};

use simple_splash::{Icon, SplashState};

fn at(t0: Instant, secs: f32) -> Instant {
    t0 + Duration::from_secs_f32(secs)
}

#[test]
fn full_splash_scenario() {
    let t0 = Instant::now();
    let mut state = SplashState::new();

    // Freshly mounted
    assert!(!state.is_pressed());
    assert_eq!(state.offset(), 0.0);

    // Appear fires the entrance; ticks carry it to the settled offset
    state.appear(t0);
    for step in 1..=30 {
        state.tick(at(t0, step as f32 * 0.05));
    }
    assert_eq!(state.offset(), -20.0);

    // First activation
    state.toggle(at(t0, 2.0));
    assert!(state.is_pressed());
    assert_eq!(state.label(), "Inspired");
    assert_eq!(state.icon(), Icon::Sparkles);

    // Let the spring settle at the pressed scale
    state.tick(at(t0, 5.0));
    assert_eq!(state.scale(), 1.05);

    // Second activation reverses everything
    state.toggle(at(t0, 6.0));
    assert!(!state.is_pressed());
    assert_eq!(state.label(), "Begin");
    assert_eq!(state.icon(), Icon::MoonStars);

    state.tick(at(t0, 9.0));
    assert_eq!(state.scale(), 1.0);

    // The entrance never re-fires and the copy never changed
    assert_eq!(state.offset(), -20.0);
    assert_eq!(state.title(), "Simple");
    assert_eq!(state.subtitle(), "Beautifully Minimal");
    assert!(!state.is_animating());
}

#[test]
fn rapid_activations_keep_parity_and_settle() {
    let t0 = Instant::now();
    let mut state = SplashState::new();
    state.appear(t0);

    // Hammer the button faster than the spring can settle
    for n in 1..=10 {
        state.toggle(at(t0, 0.02 * n as f32));
        state.tick(at(t0, 0.02 * n as f32));
        assert_eq!(state.is_pressed(), n % 2 == 1);
    }

    // Even after the burst, everything comes to rest at the right targets
    state.tick(at(t0, 8.0));
    assert_eq!(state.scale(), 1.0);
    assert_eq!(state.offset(), -20.0);
    assert!(!state.is_animating());
}
