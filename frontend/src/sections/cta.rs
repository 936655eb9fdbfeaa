use yew::prelude::*;

use crate::animation::ambient::AmbientLoop;
use crate::animation::reveal::{group_styles, lone_style, RevealConfig, VisualState};
use crate::animation::scrub::{use_scrub, Span};
use crate::animation::trigger::use_reveal;
use crate::components::countdown::CountdownTimer;
use crate::components::floating::Floating;

pub struct Plan {
    pub name: &'static str,
    pub price: &'static str,
    pub original: &'static str,
    pub popular: bool,
    pub features: &'static [&'static str],
}

pub const PLANS: [Plan; 3] = [
    Plan {
        name: "Single Bottle",
        price: "$29.99",
        original: "$39.99",
        popular: false,
        features: &["500ml Capacity", "3 Color Options", "Free Shipping"],
    },
    Plan {
        name: "Duo Pack",
        price: "$49.99",
        original: "$69.99",
        popular: true,
        features: &["2 x 500ml Bottles", "6 Color Options", "Free Shipping", "Free Carrying Case"],
    },
    Plan {
        name: "Family Pack",
        price: "$89.99",
        original: "$129.99",
        popular: false,
        features: &[
            "4 x 500ml Bottles",
            "All Color Options",
            "Free Shipping",
            "2 Carrying Cases",
            "Extra Lids",
        ],
    },
];

const PERKS: [(&str, &str); 3] = [
    ("🚚", "Free Worldwide Shipping"),
    ("🛡️", "2-Year Warranty"),
    ("🏅", "30-Day Money Back"),
];

const COUNTDOWN: RevealConfig = RevealConfig::rise(0.0, 1.0, "top 85%").from_state(VisualState {
    opacity: 0.0,
    scale: 0.0,
    ..VisualState::VISIBLE
});
const TITLE: RevealConfig = RevealConfig::rise(100.0, 1.0, "top 80%");
const BUTTON: RevealConfig = RevealConfig::rise(0.0, 1.0, "top 80%").from_state(VisualState {
    opacity: 0.0,
    scale: 0.8,
    ..VisualState::VISIBLE
});
const PERK_PILLS: RevealConfig = RevealConfig::rise(50.0, 0.8, "top 70%").staggered(0.2);
const BUTTON_PULSE: AmbientLoop = AmbientLoop::pulse(1.05, 2.0);

#[function_component(Cta)]
pub fn cta() -> Html {
    let section_ref = use_node_ref();
    let countdown_ref = use_node_ref();
    let title_ref = use_node_ref();
    let button_ref = use_node_ref();
    let perks_ref = use_node_ref();
    let glow = use_scrub(section_ref.clone(), Span::Entering);
    let countdown_shown = use_reveal(countdown_ref.clone(), COUNTDOWN);
    let title_shown = use_reveal(title_ref.clone(), TITLE);
    let button_shown = use_reveal(button_ref.clone(), BUTTON);
    let perks_shown = use_reveal(perks_ref.clone(), PERK_PILLS);
    let perk_styles = group_styles(&PERK_PILLS, PERKS.len(), perks_shown);

    html! {
        <section id="cta" ref={section_ref} class="section cta">
            <style>
                {r#"
                    .cta {
                        background: linear-gradient(135deg, #4ade80, #22c55e, #0d9488);
                    }
                    .cta-glow {
                        position: absolute;
                        inset: 0;
                        pointer-events: none;
                        background: linear-gradient(135deg, #10b981 0%, #059669 50%, #047857 100%);
                    }
                    .countdown {
                        max-width: 28rem;
                        margin: 0 auto 2rem;
                        padding: 1.5rem;
                        text-align: center;
                        border-radius: 1rem;
                        background: rgba(255, 255, 255, 0.2);
                        backdrop-filter: blur(16px);
                        color: #1f2937;
                    }
                    .countdown-title {
                        font-weight: 600;
                        margin-bottom: 0.5rem;
                    }
                    .countdown-parts {
                        display: flex;
                        justify-content: center;
                        gap: 1rem;
                    }
                    .countdown-part {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                    }
                    .countdown-value {
                        font-size: 1.5rem;
                        font-weight: 700;
                        padding: 0.25rem 0.75rem;
                        border-radius: 0.5rem;
                        background: rgba(255, 255, 255, 0.3);
                    }
                    .countdown-unit {
                        font-size: 0.875rem;
                        margin-top: 0.25rem;
                    }
                    .cta h2 {
                        color: #fff;
                    }
                    .plans {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                        gap: 2rem;
                        max-width: 72rem;
                        margin: 0 auto 3rem;
                    }
                    .plan {
                        position: relative;
                        background: #fff;
                        border-radius: 1.5rem;
                        padding: 2rem;
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.2);
                        transition: transform 0.3s;
                    }
                    .plan:hover {
                        transform: scale(1.05);
                    }
                    .plan-popular {
                        outline: 4px solid #facc15;
                    }
                    .plan-ribbon {
                        position: absolute;
                        top: -1rem;
                        left: 50%;
                        transform: translateX(-50%);
                        padding: 0.25rem 1rem;
                        border-radius: 999px;
                        background: #facc15;
                        color: #713f12;
                        font-weight: 700;
                        font-size: 0.875rem;
                    }
                    .plan-price {
                        text-align: center;
                        font-size: 2.25rem;
                        font-weight: 700;
                        color: #16a34a;
                    }
                    .plan-original {
                        text-align: center;
                        color: #6b7280;
                        text-decoration: line-through;
                    }
                    .plan ul {
                        list-style: none;
                        padding: 0;
                    }
                    .plan li::before {
                        content: "✔ ";
                        color: #22c55e;
                    }
                    .main-cta {
                        text-align: center;
                        margin-bottom: 3rem;
                    }
                    .main-cta button {
                        font-size: 1.5rem;
                        font-weight: 700;
                        padding: 1.5rem 4rem;
                        border: none;
                        border-radius: 1rem;
                        background: #fff;
                        color: #16a34a;
                        cursor: pointer;
                    }
                    .perks {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 2rem;
                    }
                    .perk {
                        padding: 0.75rem 1.5rem;
                        border-radius: 999px;
                        background: rgba(255, 255, 255, 0.2);
                        font-weight: 600;
                        color: #1f2937;
                    }
                    .social-proof {
                        max-width: 42rem;
                        margin: 3rem auto 0;
                        padding: 1.5rem;
                        text-align: center;
                        border-radius: 1rem;
                        background: rgba(255, 255, 255, 0.1);
                        color: #374151;
                    }
                    .stars {
                        color: #facc15;
                        font-size: 1.5rem;
                    }
                "#}
            </style>
            <div class="cta-glow" style={format!("opacity: {};", glow)}></div>

            <div class="container">
                <div ref={countdown_ref}>
                    <CountdownTimer style={lone_style(&COUNTDOWN, countdown_shown)} />
                </div>

                <div ref={title_ref} class="section-title" style={lone_style(&TITLE, title_shown)}>
                    <h2 class="text-glow">{"Join the "}<span class="tone-yellow">{"Revolution"}</span></h2>
                    <p class="lede lede-dark">
                        {"Be part of the movement towards a sustainable future. Every AquaPure bottle purchased helps reduce plastic waste and protect our beautiful planet."}
                    </p>
                </div>

                <div class="plans">
                    { for PLANS.iter().map(|plan| html! {
                        <div class={classes!("plan", plan.popular.then_some("plan-popular"))}>
                            if plan.popular {
                                <div class="plan-ribbon">{"MOST POPULAR"}</div>
                            }
                            <h3>{plan.name}</h3>
                            <div class="plan-price">{plan.price}</div>
                            <div class="plan-original">{plan.original}</div>
                            <ul>
                                { for plan.features.iter().map(|feature| html! { <li>{*feature}</li> }) }
                            </ul>
                            <button class="btn-primary btn-wide">{"Select Plan"}</button>
                        </div>
                    }) }
                </div>

                <div class="main-cta">
                    <div ref={button_ref} style={lone_style(&BUTTON, button_shown)}>
                        <Floating motion={BUTTON_PULSE}>
                            <button class="btn-glow">{"🛍️ Get Your AquaPure Now - Save 25% ⭐"}</button>
                        </Floating>
                    </div>
                </div>

                <div ref={perks_ref} class="perks">
                    { for PERKS.iter().enumerate().map(|(index, (icon, text))| html! {
                        <div class="perk" style={perk_styles[index].clone()}>
                            {format!("{} {}", icon, text)}
                        </div>
                    }) }
                </div>

                <div class="social-proof">
                    <div class="stars">{"★★★★★"}</div>
                    <p>
                        <strong>{"10,000+"}</strong>
                        {" satisfied customers worldwide have already joined the AquaPure movement"}
                    </p>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_plan_is_marked_popular() {
        let popular: Vec<_> = PLANS.iter().filter(|plan| plan.popular).map(|plan| plan.name).collect();
        assert_eq!(popular, ["Duo Pack"]);
    }
}
