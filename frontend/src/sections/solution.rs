use yew::prelude::*;

use crate::animation::ambient::AmbientLoop;
use crate::animation::reveal::{group_styles, lone_style, RevealConfig, VisualState};
use crate::animation::trigger::use_reveal;
use crate::components::floating::Floating;

const BOTTLE_IMAGE: &str = "https://images.unsplash.com/photo-1602143407151-7111542de6e8?ixlib=rb-4.0.3&auto=format&fit=crop&w=1000&q=80";

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    gradient: &'static str,
}

const FEATURES: [Feature; 4] = [
    Feature {
        icon: "🍃",
        title: "100% Recycled Materials",
        description: "Made from certified recycled stainless steel and bioplastics",
        gradient: "linear-gradient(to right, #4ade80, #10b981)",
    },
    Feature {
        icon: "♻️",
        title: "Fully Recyclable",
        description: "Designed for circular economy - 100% recyclable at end of life",
        gradient: "linear-gradient(to right, #60a5fa, #06b6d4)",
    },
    Feature {
        icon: "⚡",
        title: "Smart Temperature",
        description: "Keeps drinks cold for 24h or hot for 12h with vacuum insulation",
        gradient: "linear-gradient(to right, #c084fc, #ec4899)",
    },
    Feature {
        icon: "🛡️",
        title: "Lifetime Warranty",
        description: "Backed by our commitment to quality and sustainability",
        gradient: "linear-gradient(to right, #facc15, #f97316)",
    },
];

const SPECIFICATIONS: [(&str, &str); 6] = [
    ("Material", "Recycled Stainless Steel"),
    ("Capacity", "500ml / 750ml / 1L"),
    ("Weight", "380g (1L version)"),
    ("Insulation", "Double-wall vacuum"),
    ("Colors", "6 Eco-friendly options"),
    ("Certification", "BPA Free, FDA Approved"),
];

const IMPACT: [(&str, &str); 3] = [
    ("156", "Plastic bottles saved yearly"),
    ("85%", "Carbon footprint reduced"),
    ("100%", "Recyclable materials"),
];

const TITLE: RevealConfig = RevealConfig::rise(100.0, 1.0, "top 80%");
const TEXT: RevealConfig = RevealConfig::rise(0.0, 1.0, "top 75%").from_state(VisualState {
    opacity: 0.0,
    x: -100.0,
    ..VisualState::VISIBLE
});
const FEATURE_CARDS: RevealConfig = RevealConfig::rise(50.0, 0.8, "top 70%").staggered(0.2);
// Already visible; the trigger only swells it and lights the glow.
const BOTTLE_GLOW: RevealConfig = RevealConfig::rise(0.0, 0.5, "top 70%")
    .from_state(VisualState::VISIBLE)
    .to_state(VisualState {
        scale: 1.1,
        ..VisualState::VISIBLE
    });
const BOTTLE_FLOAT: AmbientLoop = AmbientLoop::float(20.0, 3.0);

#[function_component(Solution)]
pub fn solution() -> Html {
    let title_ref = use_node_ref();
    let text_ref = use_node_ref();
    let features_ref = use_node_ref();
    let bottle_ref = use_node_ref();
    let title_shown = use_reveal(title_ref.clone(), TITLE);
    let text_shown = use_reveal(text_ref.clone(), TEXT);
    let features_shown = use_reveal(features_ref.clone(), FEATURE_CARDS);
    let bottle_lit = use_reveal(bottle_ref.clone(), BOTTLE_GLOW);
    let feature_styles = group_styles(&FEATURE_CARDS, FEATURES.len(), features_shown);

    html! {
        <section id="solution" class="section solution">
            <style>
                {r#"
                    .solution {
                        background: linear-gradient(135deg, #f0fdf4, #f0fdfa, #dbeafe);
                    }
                    .badge-eco {
                        background: rgba(34, 197, 94, 0.2);
                        color: #166534;
                    }
                    .solution-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
                        gap: 2rem;
                        align-items: stretch;
                        margin-bottom: 5rem;
                    }
                    .spec-row {
                        display: flex;
                        justify-content: space-between;
                        padding: 0.75rem 0;
                        border-bottom: 1px solid #e5e7eb;
                    }
                    .spec-row:last-child {
                        border-bottom: none;
                    }
                    .spec-value {
                        color: #16a34a;
                        font-weight: 500;
                    }
                    .bottle-stage {
                        position: relative;
                        min-height: 500px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .bottle-stage img {
                        max-width: 100%;
                        max-height: 480px;
                        border-radius: 2rem;
                        transition: box-shadow 0.5s;
                    }
                    .bottle-stage img.glow {
                        box-shadow: 0 0 60px rgba(72, 187, 120, 0.8);
                    }
                    .eco-badge {
                        position: absolute;
                        top: 1rem;
                        right: 1rem;
                        padding: 0.5rem 1rem;
                        border-radius: 999px;
                        color: #fff;
                        font-weight: 700;
                        font-size: 0.875rem;
                        background: linear-gradient(to right, #22c55e, #0d9488);
                        animation: pulse 2s ease-in-out infinite;
                    }
                    .features {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                        gap: 1.5rem;
                        max-width: 72rem;
                        margin: 0 auto;
                    }
                    .impact {
                        margin-top: 4rem;
                        border-radius: 1.5rem;
                        padding: 2rem;
                        text-align: center;
                        color: #fff;
                        background: linear-gradient(to right, #22c55e, #0d9488);
                    }
                    .impact-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
                        gap: 1.5rem;
                        max-width: 56rem;
                        margin: 0 auto;
                    }
                    .impact-cell {
                        background: rgba(255, 255, 255, 0.3);
                        border-radius: 0.75rem;
                        padding: 1.5rem;
                        color: #000;
                    }
                "#}
            </style>
            <div class="container">
                <div ref={title_ref} class="section-title" style={lone_style(&TITLE, title_shown)}>
                    <div class="badge badge-eco">{"🏆 Innovative Solution"}</div>
                    <h2>{"Meet "}<span class="gradient-text">{"AquaPure"}</span></h2>
                    <p class="lede">
                        {"The eco-friendly water bottle that combines premium performance with sustainable design, helping you make a difference with every sip."}
                    </p>
                </div>

                <div class="solution-grid">
                    <div ref={text_ref} style={lone_style(&TEXT, text_shown)}>
                        <div class="glass-light">
                            <h3>{"Why AquaPure Stands Out"}</h3>
                            <p>
                                {"In a world overwhelmed by single-use plastics, AquaPure offers a beautiful, functional, and sustainable alternative. Each bottle is crafted with precision and care for both you and the planet."}
                            </p>
                            { for SPECIFICATIONS.iter().map(|(label, value)| html! {
                                <div class="spec-row">
                                    <span>{format!("{}:", label)}</span>
                                    <span class="spec-value">{*value}</span>
                                </div>
                            }) }
                            <p class="callout-light">
                                {"🌱 Each AquaPure bottle prevents approximately 156 plastic bottles from entering landfills annually."}
                            </p>
                        </div>
                    </div>

                    <div class="bottle-stage">
                        <Floating motion={BOTTLE_FLOAT}>
                            <img
                                ref={bottle_ref}
                                class={classes!(bottle_lit.then_some("glow"))}
                                src={BOTTLE_IMAGE}
                                alt="AquaPure Eco-Friendly Water Bottle"
                                style={lone_style(&BOTTLE_GLOW, bottle_lit)}
                            />
                        </Floating>
                        <div class="eco-badge">{"♻️ ECO FRIENDLY"}</div>
                    </div>
                </div>

                <div ref={features_ref} class="features">
                    { for FEATURES.iter().enumerate().map(|(index, feature)| html! {
                        <div class="card-light" style={feature_styles[index].clone()}>
                            <div class="card-icon" style={format!("background: {};", feature.gradient)}>
                                {feature.icon}
                            </div>
                            <h4>{feature.title}</h4>
                            <p>{feature.description}</p>
                        </div>
                    }) }
                </div>

                <div class="impact">
                    <h4>{"Your Environmental Impact"}</h4>
                    <div class="impact-grid">
                        { for IMPACT.iter().map(|(value, label)| html! {
                            <div class="impact-cell">
                                <div class="stat-value">{*value}</div>
                                <div>{*label}</div>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}
