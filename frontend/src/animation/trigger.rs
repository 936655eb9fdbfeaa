use gloo_timers::callback::Timeout;
use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Window};
use yew::prelude::*;

use crate::animation::reveal::{Mount, RevealConfig, TriggerState};
use crate::config;

const EVENTS: [&str; 2] = ["scroll", "resize"];

pub struct ScrollSubscription {
    window: Window,
    listener: Closure<dyn FnMut()>,
}

impl ScrollSubscription {
    pub fn new(on_scroll: impl FnMut() + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let listener = Closure::wrap(Box::new(on_scroll) as Box<dyn FnMut()>);
        for event in EVENTS {
            if let Err(err) =
                window.add_event_listener_with_callback(event, listener.as_ref().unchecked_ref())
            {
                debug!("could not listen for {}: {:?}", event, err);
            }
        }
        Some(Self { window, listener })
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        for event in EVENTS {
            let _ = self
                .window
                .remove_event_listener_with_callback(event, self.listener.as_ref().unchecked_ref());
        }
    }
}

pub fn viewport_height() -> Option<f64> {
    web_sys::window()?.inner_height().ok()?.as_f64()
}

// (top, height, viewport height), all relative to the viewport.
pub fn measure(node: &NodeRef) -> Option<(f64, f64, f64)> {
    let element = node.cast::<Element>()?;
    let rect = element.get_bounding_client_rect();
    Some((rect.top(), rect.height(), viewport_height()?))
}

#[hook]
pub fn use_reveal(node: NodeRef, reveal: RevealConfig) -> bool {
    let revealed = use_state_eq(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let mut subscription = None;
                let mut timeout = None;
                match reveal.mount {
                    Mount::OnMount => {
                        timeout = Some(Timeout::new(config::MOUNT_REVEAL_DELAY_MS, move || {
                            revealed.set(true);
                        }));
                    }
                    Mount::OnScroll => {
                        let threshold = reveal.threshold();
                        let node = node.clone();
                        let mut state = TriggerState::default();
                        let mut shown = false;
                        let mut check = move || {
                            if state.is_settled(reveal.policy) {
                                return;
                            }
                            let Some((top, height, viewport)) = measure(&node) else {
                                return;
                            };
                            let crossed = threshold.crosses(top, height, viewport);
                            let now = state.observe(crossed, reveal.policy);
                            if now != shown {
                                debug!("reveal at {:?} -> {}", reveal.start, now);
                                shown = now;
                                revealed.set(now);
                            }
                        };
                        check();
                        subscription = ScrollSubscription::new(check);
                    }
                }
                move || {
                    drop(subscription);
                    drop(timeout);
                }
            },
            node,
        );
    }

    *revealed
}
