use web_sys::{Element, MouseEvent};
use yew::prelude::*;

use crate::animation::ambient::AmbientLoop;
use crate::animation::reveal::{lone_style, Ease, RevealConfig, VisualState};
use crate::animation::scrub::{mix, use_scrub, Span};
use crate::animation::tilt::{tilt, tilt_style};
use crate::animation::trigger::use_reveal;
use crate::components::floating::Floating;
use crate::components::scroll_indicator::ScrollIndicator;

const BOTTLE_IMAGE: &str = "https://images.unsplash.com/photo-1602143407151-7111542de6e8?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&q=80";

// Above the fold: all three play from hidden on mount.
const TITLE: RevealConfig = RevealConfig::rise(50.0, 1.0, "top top")
    .eased(Ease::Power3Out)
    .on_mount();
const SUBTITLE: RevealConfig = RevealConfig::rise(30.0, 1.0, "top top")
    .eased(Ease::Power3Out)
    .delayed(0.5)
    .on_mount();
const BOTTLE: RevealConfig = RevealConfig::rise(0.0, 1.2, "top top")
    .from_state(VisualState {
        opacity: 0.0,
        scale: 0.9,
        rotate: -10.0,
        ..VisualState::VISIBLE
    })
    .eased(Ease::ElasticOut)
    .delayed(0.8)
    .on_mount();

const BOTTLE_FLOAT: AmbientLoop = AmbientLoop::float(12.0, 2.5);
const BOTTLE_DRIFT_PX: f64 = -30.0;
const MAX_TILT_DEG: f64 = 8.0;

#[function_component(Intro)]
pub fn intro() -> Html {
    let section_ref = use_node_ref();
    let title_ref = use_node_ref();
    let subtitle_ref = use_node_ref();
    let bottle_ref = use_node_ref();
    let title_shown = use_reveal(title_ref.clone(), TITLE);
    let subtitle_shown = use_reveal(subtitle_ref.clone(), SUBTITLE);
    let bottle_shown = use_reveal(bottle_ref.clone(), BOTTLE);
    let drift = use_scrub(section_ref.clone(), Span::Leaving);
    let tilt_angles = use_state_eq(|| (0.0, 0.0));

    let onmousemove = {
        let section_ref = section_ref.clone();
        let tilt_angles = tilt_angles.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(section) = section_ref.cast::<Element>() else {
                return;
            };
            let rect = section.get_bounding_client_rect();
            tilt_angles.set(tilt(
                f64::from(e.client_x()) - rect.left(),
                f64::from(e.client_y()) - rect.top(),
                rect.width(),
                rect.height(),
                MAX_TILT_DEG,
            ));
        })
    };

    let onmouseleave = {
        let tilt_angles = tilt_angles.clone();
        Callback::from(move |_: MouseEvent| tilt_angles.set((0.0, 0.0)))
    };

    let (rx, ry) = *tilt_angles;

    html! {
        <section id="intro" ref={section_ref} class="intro" {onmousemove} {onmouseleave}>
            <style>
                {r#"
                    .intro {
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                        overflow: hidden;
                        background: linear-gradient(to bottom, #dcfce7, #ffffff);
                        padding-top: 5rem;
                    }
                    .intro-title {
                        font-size: clamp(3rem, 7vw, 4.5rem);
                        font-weight: 800;
                        color: #166534;
                        margin: 0;
                    }
                    .intro-subtitle {
                        margin-top: 1.5rem;
                        font-size: clamp(1.1rem, 2.5vw, 1.5rem);
                        color: #374151;
                        max-width: 42rem;
                    }
                    .intro-bottle {
                        margin-top: 2.5rem;
                    }
                    .intro-bottle img {
                        width: 18rem;
                        max-width: 70vw;
                        border-radius: 2rem;
                        filter: drop-shadow(0 25px 25px rgba(0, 0, 0, 0.15));
                    }
                "#}
            </style>
            <h1 ref={title_ref} class="intro-title" style={lone_style(&TITLE, title_shown)}>
                {"Eco-Friendly Water Bottle"}
            </h1>
            <p ref={subtitle_ref} class="intro-subtitle" style={lone_style(&SUBTITLE, subtitle_shown)}>
                {"Hydrate smart. Save the planet. One sip at a time."}
            </p>

            <div class="intro-bottle" style={format!("transform: translateY({}px);", mix(0.0, BOTTLE_DRIFT_PX, drift))}>
                <Floating motion={BOTTLE_FLOAT}>
                    <div style={tilt_style(rx, ry)}>
                        <img
                            ref={bottle_ref}
                            src={BOTTLE_IMAGE}
                            alt="Eco Bottle"
                            style={lone_style(&BOTTLE, bottle_shown)}
                        />
                    </div>
                </Floating>
            </div>

            <ScrollIndicator />
        </section>
    }
}
