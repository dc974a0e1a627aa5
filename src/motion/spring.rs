use std::cell::RefCell;
use std::collections::HashMap;

use crate::models::error::StyleError;

/// Distance from the target below which the spring counts as at rest
pub const REST_DELTA: f64 = 0.005;

/// Upper bound for the settle search; undamped springs report this
pub const MAX_SETTLE_MS: u32 = 10_000;

type TimingKey = (u64, u64, u64, usize);

thread_local! {
    // Settle search walks thousands of samples; renders reuse the result
    static TIMINGS: RefCell<HashMap<TimingKey, (u32, String)>> = RefCell::new(HashMap::new());
}

/// A damped spring moving a value from 0 to 1 from rest.
///
/// Parameterized the way declarative animation libraries describe
/// springs (stiffness, damping, mass) rather than by duration. The
/// motion is solved analytically, so sampling it is deterministic.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    stiffness: f64,
    damping: f64,
    mass: f64,
}

impl Spring {
    /// Builds a spring from parameters known to be valid at compile time
    pub(crate) const fn from_parts(stiffness: f64, damping: f64, mass: f64) -> Self {
        Self {
            stiffness,
            damping,
            mass,
        }
    }

    pub fn new(stiffness: f64, damping: f64, mass: f64) -> Result<Self, StyleError> {
        if !stiffness.is_finite() || stiffness <= 0.0 {
            return Err(StyleError::InvalidSpring(format!(
                "stiffness must be positive, got {stiffness}"
            )));
        }
        if !damping.is_finite() || damping < 0.0 {
            return Err(StyleError::InvalidSpring(format!(
                "damping must be non-negative, got {damping}"
            )));
        }
        if !mass.is_finite() || mass <= 0.0 {
            return Err(StyleError::InvalidSpring(format!(
                "mass must be positive, got {mass}"
            )));
        }

        Ok(Self::from_parts(stiffness, damping, mass))
    }

    pub const fn stiffness(&self) -> f64 {
        self.stiffness
    }

    pub const fn damping(&self) -> f64 {
        self.damping
    }

    pub const fn mass(&self) -> f64 {
        self.mass
    }

    /// Undamped angular frequency in rad/s
    pub fn natural_frequency(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }

    /// Below 1 the spring overshoots, at 1 it is critically damped
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Progress toward the target `t` seconds after release
    pub fn position(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }

        let w0 = self.natural_frequency();
        let zeta = self.damping_ratio();

        // Remaining displacement, starting at 1 with zero velocity
        let remaining = if zeta < 1.0 {
            let wd = w0 * (1.0 - zeta * zeta).sqrt();
            (-zeta * w0 * t).exp() * ((wd * t).cos() + (zeta * w0 / wd) * (wd * t).sin())
        } else if zeta > 1.0 {
            let spread = (zeta * zeta - 1.0).sqrt();
            let r1 = -w0 * (zeta - spread);
            let r2 = -w0 * (zeta + spread);
            (r2 * (r1 * t).exp() - r1 * (r2 * t).exp()) / (r2 - r1)
        } else {
            (1.0 + w0 * t) * (-w0 * t).exp()
        };

        1.0 - remaining
    }

    /// Whole milliseconds until the spring stays within [`REST_DELTA`] of 1
    pub fn settle_duration_ms(&self) -> u32 {
        (0..=MAX_SETTLE_MS)
            .rev()
            .find(|&ms| (1.0 - self.position(f64::from(ms) / 1000.0)).abs() >= REST_DELTA)
            .map_or(0, |last_moving| (last_moving + 1).min(MAX_SETTLE_MS))
    }

    /// Settle duration and matching CSS `linear()` easing, memoized per
    /// spring parameters and sample count.
    pub fn css_timing(&self, samples: usize) -> (u32, String) {
        let samples = samples.max(2);
        let key = (
            self.stiffness.to_bits(),
            self.damping.to_bits(),
            self.mass.to_bits(),
            samples,
        );

        TIMINGS.with(|cache| {
            if let Some(timing) = cache.borrow().get(&key) {
                return timing.clone();
            }

            let duration_ms = self.settle_duration_ms();
            let timing = (duration_ms, self.easing_over(duration_ms, samples));
            cache.borrow_mut().insert(key, timing.clone());
            timing
        })
    }

    /// Samples the motion into a CSS `linear()` easing function.
    ///
    /// The easing spans [`Self::settle_duration_ms`], so it must be paired
    /// with that duration. Intermediate values may exceed 1 when the
    /// spring overshoots.
    pub fn css_easing(&self, samples: usize) -> String {
        self.css_timing(samples).1
    }

    fn easing_over(&self, duration_ms: u32, samples: usize) -> String {
        let duration = f64::from(duration_ms) / 1000.0;
        let last = samples - 1;

        let points: Vec<String> = (0..samples)
            .map(|i| {
                if i == 0 {
                    "0".to_string()
                } else if i == last {
                    "1".to_string()
                } else {
                    let t = duration * i as f64 / last as f64;
                    format!("{:.4}", self.position(t))
                }
            })
            .collect();

        format!("linear({})", points.join(", "))
    }
}
