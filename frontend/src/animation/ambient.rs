use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use yew::prelude::*;

use crate::animation::reveal::Ease;
use crate::config;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Motion {
    Float(f64),
    Pulse(f64),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AmbientLoop {
    pub motion: Motion,
    /// Seconds per leg.
    pub leg: f64,
    pub ease: Ease,
}

impl AmbientLoop {
    pub const fn float(px: f64, leg: f64) -> Self {
        AmbientLoop {
            motion: Motion::Float(px),
            leg,
            ease: Ease::SineInOut,
        }
    }

    pub const fn pulse(scale: f64, leg: f64) -> Self {
        AmbientLoop {
            motion: Motion::Pulse(scale),
            leg,
            ease: Ease::Power1InOut,
        }
    }

    pub fn nth(self, index: usize, spread: f64) -> Self {
        AmbientLoop {
            leg: self.leg + index as f64 * spread,
            ..self
        }
    }

    pub fn leg_ms(&self) -> u32 {
        (self.leg * 1000.0).round().max(1.0) as u32
    }

    /// Milliseconds after mount at which the `n`-th change of direction happens.
    pub fn turn_ms(&self, n: u32) -> u32 {
        config::AMBIENT_KICKOFF_MS + n * self.leg_ms()
    }

    pub fn transform(&self, raised: bool) -> String {
        match (self.motion, raised) {
            (Motion::Float(px), true) => format!("translateY({}px)", -px),
            (Motion::Pulse(scale), true) => format!("scale({})", scale),
            (Motion::Float(_), false) => "translateY(0px)".to_string(),
            (Motion::Pulse(_), false) => "scale(1)".to_string(),
        }
    }

    pub fn style(&self, raised: bool) -> String {
        format!(
            "transform: {}; transition: transform {}s {};",
            self.transform(raised),
            self.leg,
            self.ease.css()
        )
    }
}

#[hook]
pub fn use_ambient(motion: AmbientLoop) -> bool {
    let raised = use_state_eq(|| false);

    {
        let raised = raised.clone();
        use_effect_with_deps(
            move |motion: &AmbientLoop| {
                let interval = Rc::new(RefCell::new(None));
                let kick = {
                    let interval = interval.clone();
                    let leg = motion.turn_ms(1) - motion.turn_ms(0);
                    Timeout::new(motion.turn_ms(0), move || {
                        raised.set(true);
                        let mut up = true;
                        *interval.borrow_mut() = Some(Interval::new(leg, move || {
                            up = !up;
                            raised.set(up);
                        }));
                    })
                };
                move || {
                    drop(kick);
                    interval.borrow_mut().take();
                }
            },
            motion,
        );
    }

    *raised
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_swings_between_rest_and_peak() {
        let bob = AmbientLoop::float(10.0, 1.5);
        assert_eq!(bob.transform(false), "translateY(0px)");
        assert_eq!(bob.transform(true), "translateY(-10px)");
        assert_eq!(bob.leg_ms(), 1500);
        assert!(bob.style(true).contains("transition: transform 1.5s"));
    }

    #[test]
    fn pulse_scales() {
        let pulse = AmbientLoop::pulse(1.05, 2.0);
        assert_eq!(pulse.transform(true), "scale(1.05)");
        assert_eq!(pulse.transform(false), "scale(1)");
    }

    #[test]
    fn siblings_slow_down_by_index() {
        let base = AmbientLoop::float(10.0, 2.0);
        assert_eq!(base.nth(0, 0.5).leg_ms(), 2000);
        assert_eq!(base.nth(3, 0.5).leg_ms(), 3500);
    }

    #[test]
    fn every_leg_after_the_kickoff_runs_its_full_length() {
        let bob = AmbientLoop::float(10.0, 1.5);
        assert_eq!(bob.turn_ms(0), config::AMBIENT_KICKOFF_MS);
        for n in 0..4 {
            assert_eq!(bob.turn_ms(n + 1) - bob.turn_ms(n), bob.leg_ms());
        }
    }
}
