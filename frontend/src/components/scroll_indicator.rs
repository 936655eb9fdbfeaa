use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::animation::ambient::{use_ambient, AmbientLoop};
use crate::config;

const BOB: AmbientLoop = AmbientLoop::float(10.0, 1.5);

pub fn is_visible(offset: f64, threshold: f64) -> bool {
    offset <= threshold
}

#[function_component(ScrollIndicator)]
pub fn scroll_indicator() -> Html {
    let (_, offset) = use_window_scroll();
    let raised = use_ambient(BOB);

    if !is_visible(offset, config::INDICATOR_THRESHOLD_PX) {
        return html! {};
    }

    html! {
        <div class="scroll-indicator" style={BOB.style(raised)}>
            <div class="scroll-indicator-pill">
                <span>{"Scroll to Explore"}</span>
                <span class="scroll-indicator-chevron">{"⌄"}</span>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hides_past_the_threshold_and_comes_back() {
        assert!(is_visible(0.0, 100.0));
        assert!(!is_visible(150.0, 100.0));
        assert!(is_visible(50.0, 100.0));
    }

    #[test]
    fn threshold_itself_is_still_visible() {
        assert!(is_visible(100.0, 100.0));
        assert!(!is_visible(100.5, 100.0));
    }
}
