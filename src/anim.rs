// anim.rs - Clock-driven Animation Timelines
//
// Both timelines are pure value generators: they are created with a start
// instant and sampled with an explicit `now`, so nothing here reads the wall
// clock. The caller (the frame tick in `app`) owns time.

use std::f32::consts::TAU;
use std::time::{Duration, Instant};

/// Settle threshold for spring position, sized for unit-scale values.
const SETTLE_EPS: f32 = 1.0e-3;
/// Settle threshold for spring velocity, in units per second.
const SETTLE_VEL_EPS: f32 = 1.0e-2;

/// Cubic ease-out: starts fast, decelerates to rest.
fn ease_out_cubic(p: f32) -> f32 {
    let inv = 1.0 - p;
    1.0 - inv * inv * inv
}

/// A fixed-duration eased transition between two values.
///
/// Used for the one-shot entrance of the title block. Clamps at the target
/// once the duration has elapsed.
#[derive(Debug, Clone, Copy)]
pub struct EaseOut {
    from: f32,
    to: f32,
    duration: Duration,
    start: Instant,
}

impl EaseOut {
    pub fn new(from: f32, to: f32, duration: Duration, start: Instant) -> Self {
        Self {
            from,
            to,
            duration,
            start,
        }
    }

    fn progress(&self, now: Instant) -> f32 {
        let elapsed = now.duration_since(self.start).as_secs_f32();
        let total = self.duration.as_secs_f32();
        if total <= f32::EPSILON {
            return 1.0;
        }
        (elapsed / total).clamp(0.0, 1.0)
    }

    /// Current value at `now`, clamped to the target after the duration.
    pub fn value_at(&self, now: Instant) -> f32 {
        self.from + (self.to - self.from) * ease_out_cubic(self.progress(now))
    }

    /// Whether the transition has run its full duration.
    pub fn is_complete(&self, now: Instant) -> bool {
        now.duration_since(self.start) >= self.duration
    }

    pub fn target(&self) -> f32 {
        self.to
    }
}

/// A damped harmonic spring in the response / damping-fraction
/// parameterization: `omega = TAU / response`, damping ratio = the fraction.
/// A fraction under 1.0 overshoots the target before settling.
///
/// Carries explicit initial velocity so a mid-flight `retarget` keeps both
/// value and momentum continuous.
#[derive(Debug, Clone, Copy)]
pub struct Spring {
    from: f32,
    to: f32,
    v0: f32,
    response: f32,
    damping: f32,
    start: Instant,
}

impl Spring {
    pub fn new(from: f32, to: f32, response: f32, damping: f32, start: Instant) -> Self {
        Self {
            from,
            to,
            v0: 0.0,
            response,
            damping,
            start,
        }
    }

    /// Re-aim the spring at a new target, sampling the current value and
    /// velocity as the new initial conditions.
    pub fn retarget(&self, to: f32, now: Instant) -> Self {
        Self {
            from: self.value_at(now),
            to,
            v0: self.velocity_at(now),
            response: self.response,
            damping: self.damping,
            start: now,
        }
    }

    fn omega(&self) -> f32 {
        TAU / self.response
    }

    fn elapsed(&self, now: Instant) -> f32 {
        now.duration_since(self.start).as_secs_f32()
    }

    /// Position at `now`, from the closed-form damped-oscillator solution.
    pub fn value_at(&self, now: Instant) -> f32 {
        let t = self.elapsed(now);
        let omega = self.omega();
        let zeta = self.damping;
        let delta = self.from - self.to;

        if zeta < 1.0 {
            // Underdamped: x(t) = to + e^(-z*w*t) (A cos wd t + B sin wd t)
            let omega_d = omega * (1.0 - zeta * zeta).sqrt();
            let a = delta;
            let b = (self.v0 + zeta * omega * delta) / omega_d;
            let envelope = (-zeta * omega * t).exp();
            self.to + envelope * (a * (omega_d * t).cos() + b * (omega_d * t).sin())
        } else {
            // Critically damped (or treated as such): x(t) = to + (A + B t) e^(-w*t)
            let a = delta;
            let b = self.v0 + omega * delta;
            self.to + (a + b * t) * (-omega * t).exp()
        }
    }

    /// Velocity at `now`, the analytic derivative of `value_at`.
    pub fn velocity_at(&self, now: Instant) -> f32 {
        let t = self.elapsed(now);
        let omega = self.omega();
        let zeta = self.damping;
        let delta = self.from - self.to;

        if zeta < 1.0 {
            let sigma = zeta * omega;
            let omega_d = omega * (1.0 - zeta * zeta).sqrt();
            let a = delta;
            let b = (self.v0 + sigma * delta) / omega_d;
            let envelope = (-sigma * t).exp();
            let cos = (omega_d * t).cos();
            let sin = (omega_d * t).sin();
            envelope * ((b * omega_d - sigma * a) * cos - (a * omega_d + sigma * b) * sin)
        } else {
            let a = delta;
            let b = self.v0 + omega * delta;
            (b - omega * (a + b * t)) * (-omega * t).exp()
        }
    }

    /// Whether the spring has effectively come to rest at the target.
    pub fn is_settled(&self, now: Instant) -> bool {
        (self.value_at(now) - self.to).abs() < SETTLE_EPS
            && self.velocity_at(now).abs() < SETTLE_VEL_EPS
    }

    pub fn target(&self) -> f32 {
        self.to
    }
}
