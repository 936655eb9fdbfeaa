//! Scroll-linked ("scrubbed") progress. Unlike reveals these have no
//! duration: the visual value is a direct function of scroll position.

use yew::prelude::*;

use crate::animation::trigger::{measure, ScrollSubscription};

pub fn progress(value: f64, start: f64, end: f64) -> f64 {
    if end <= start {
        return if value >= end { 1.0 } else { 0.0 };
    }
    ((value - start) / (end - start)).clamp(0.0, 1.0)
}

pub fn mix(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Span {
    /// From the element's top touching the viewport bottom until it reaches
    /// the viewport top.
    Entering,
    /// From the element's top at the viewport top until its bottom leaves.
    Leaving,
}

impl Span {
    pub fn progress(self, top: f64, height: f64, viewport: f64) -> f64 {
        match self {
            Span::Entering => progress(viewport - top, 0.0, viewport),
            Span::Leaving => progress(-top, 0.0, height),
        }
    }
}

#[hook]
pub fn use_scrub(node: NodeRef, span: Span) -> f64 {
    let value = use_state_eq(|| 0.0);

    {
        let value = value.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let node = node.clone();
                let update = move || {
                    if let Some((top, height, viewport)) = measure(&node) {
                        // Two decimals is plenty and keeps re-renders rare.
                        let t = (span.progress(top, height, viewport) * 100.0).round() / 100.0;
                        value.set(t);
                    }
                };
                update();
                let subscription = ScrollSubscription::new(update);
                move || drop(subscription)
            },
            node,
        );
    }

    *value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_clamped() {
        assert_eq!(progress(-10.0, 0.0, 200.0), 0.0);
        assert_eq!(progress(100.0, 0.0, 200.0), 0.5);
        assert_eq!(progress(500.0, 0.0, 200.0), 1.0);
    }

    #[test]
    fn degenerate_range_is_a_step() {
        assert_eq!(progress(4.0, 5.0, 5.0), 0.0);
        assert_eq!(progress(5.0, 5.0, 5.0), 1.0);
    }

    #[test]
    fn entering_runs_from_viewport_bottom_to_top() {
        assert_eq!(Span::Entering.progress(1000.0, 600.0, 1000.0), 0.0);
        assert_eq!(Span::Entering.progress(500.0, 600.0, 1000.0), 0.5);
        assert_eq!(Span::Entering.progress(-20.0, 600.0, 1000.0), 1.0);
    }

    #[test]
    fn leaving_tracks_the_element_height() {
        assert_eq!(Span::Leaving.progress(0.0, 800.0, 1000.0), 0.0);
        assert_eq!(Span::Leaving.progress(-400.0, 800.0, 1000.0), 0.5);
        assert_eq!(Span::Leaving.progress(-900.0, 800.0, 1000.0), 1.0);
    }

    #[test]
    fn mix_interpolates_linearly() {
        assert_eq!(mix(0.0, -30.0, 0.5), -15.0);
        assert_eq!(mix(0.0, 0.95, 0.0), 0.0);
    }
}
