use yew::prelude::*;

use crate::animation::ambient::AmbientLoop;
use crate::animation::reveal::{group_styles, lone_style, RevealConfig, VisualState};
use crate::animation::scrub::{use_scrub, Span};
use crate::animation::trigger::use_reveal;
use crate::components::anchor_link::AnchorLink;
use crate::components::floating::Floating;

struct Stat {
    icon: &'static str,
    value: &'static str,
    label: &'static str,
    color: &'static str,
}

const STATS: [Stat; 4] = [
    Stat { icon: "🏭", value: "8 Million", label: "Tons of plastic in oceans yearly", color: "red" },
    Stat { icon: "🐟", value: "100,000", label: "Marine animals killed annually", color: "blue" },
    Stat { icon: "♻️", value: "9%", label: "Of plastic gets recycled", color: "green" },
    Stat { icon: "⏳", value: "450 Years", label: "To decompose a bottle", color: "yellow" },
];

const FACTS: [(&str, &str, bool); 3] = [
    ("⚠️", "Plastic bottles take centuries to decompose", true),
    ("📈", "Plastic production has doubled in 20 years", false),
    ("🏭", "Microplastics are found in our food chain", true),
];

const PARTICLE_COUNT: usize = 15;
const PARTICLE_GLYPHS: [(&str, &str); 3] = [("🥤", "red"), ("🍃", "yellow"), ("💧", "blue")];

const TITLE: RevealConfig = RevealConfig::rise(100.0, 1.0, "top 80%");
const CONTENT: RevealConfig = RevealConfig::rise(0.0, 1.0, "top 75%").from_state(VisualState {
    opacity: 0.0,
    x: -100.0,
    ..VisualState::VISIBLE
});
const STAT_CARDS: RevealConfig = RevealConfig::rise(50.0, 0.8, "top 70%").staggered(0.2);
const PARTICLES: RevealConfig = RevealConfig::rise(0.0, 0.6, "top 85%")
    .from_state(VisualState {
        opacity: 0.0,
        scale: 0.0,
        ..VisualState::VISIBLE
    })
    .staggered(0.1)
    .replaying();
const PARTICLE_FLOAT: AmbientLoop = AmbientLoop::float(20.0, 2.0);

/// Fixed, well-spread placement (percent left, percent top) for particle `index`.
pub fn scatter(index: usize) -> (usize, usize) {
    ((index * 61 + 17) % 100, (index * 37 + 43) % 100)
}

#[function_component(Problem)]
pub fn problem() -> Html {
    let section_ref = use_node_ref();
    let title_ref = use_node_ref();
    let content_ref = use_node_ref();
    let stats_ref = use_node_ref();
    let particles_ref = use_node_ref();
    let darkness = use_scrub(section_ref.clone(), Span::Entering);
    let title_shown = use_reveal(title_ref.clone(), TITLE);
    let content_shown = use_reveal(content_ref.clone(), CONTENT);
    let stats_shown = use_reveal(stats_ref.clone(), STAT_CARDS);
    let particles_shown = use_reveal(particles_ref.clone(), PARTICLES);
    let particle_styles = group_styles(&PARTICLES, PARTICLE_COUNT, particles_shown);
    let stat_styles = group_styles(&STAT_CARDS, STATS.len(), stats_shown);

    html! {
        <section id="problem" ref={section_ref} class="section problem">
            <style>
                {r#"
                    .problem {
                        color: #fff;
                        background: linear-gradient(135deg, #111827, #1f2937, #1e3a8a);
                    }
                    .problem-shade {
                        position: absolute;
                        inset: 0;
                        background: #1a202c;
                        pointer-events: none;
                    }
                    .particles {
                        position: absolute;
                        inset: 0;
                        pointer-events: none;
                        z-index: 0;
                    }
                    .particle {
                        position: absolute;
                        font-size: 1.5rem;
                    }
                    .particle-glyph {
                        opacity: 0.4;
                    }
                    .badge {
                        display: inline-flex;
                        gap: 0.75rem;
                        padding: 0.75rem 1.5rem;
                        border-radius: 999px;
                        margin-bottom: 1.5rem;
                        font-weight: 600;
                    }
                    .badge-alert {
                        background: rgba(239, 68, 68, 0.2);
                        color: #fecaca;
                    }
                    .problem-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
                        gap: 3rem;
                        align-items: center;
                    }
                    .glass-dark {
                        background: rgba(31, 41, 55, 0.6);
                        backdrop-filter: blur(16px);
                        border: 1px solid #374151;
                        border-radius: 1.5rem;
                        padding: 2rem;
                    }
                    .fact {
                        display: flex;
                        gap: 1rem;
                        align-items: flex-start;
                        margin-bottom: 1.5rem;
                    }
                    .fact-icon {
                        width: 3rem;
                        height: 3rem;
                        flex-shrink: 0;
                        border-radius: 50%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .severity-high { background: rgba(239, 68, 68, 0.2); }
                    .severity-medium { background: rgba(234, 179, 8, 0.2); }
                    .stats {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                        gap: 1.5rem;
                    }
                    .stat-value {
                        font-size: 1.9rem;
                        font-weight: 700;
                        margin: 0.5rem 0;
                    }
                    .tone-red { color: #fca5a5; }
                    .tone-blue { color: #93c5fd; }
                    .tone-green { color: #86efac; }
                    .tone-yellow { color: #fde047; }
                    .hope {
                        max-width: 42rem;
                        margin: 4rem auto 0;
                        text-align: center;
                        border-radius: 1rem;
                        padding: 2rem;
                        background: linear-gradient(to right, rgba(239, 68, 68, 0.2), rgba(249, 115, 22, 0.2));
                        border: 1px solid rgba(239, 68, 68, 0.3);
                    }
                "#}
            </style>
            <div class="problem-shade" style={format!("opacity: {};", darkness)}></div>

            <div ref={particles_ref} class="particles">
                { for (0..PARTICLE_COUNT).map(|index| {
                    let (glyph, tone) = PARTICLE_GLYPHS[index % PARTICLE_GLYPHS.len()];
                    let (left, top) = scatter(index);
                    html! {
                        <div
                            class={classes!("particle", format!("tone-{}", tone))}
                            style={format!("left: {}%; top: {}%;", left, top)}
                        >
                            <div style={particle_styles[index].clone()}>
                                <Floating motion={PARTICLE_FLOAT.nth(index, 0.5)} class="particle-glyph">
                                    {glyph}
                                </Floating>
                            </div>
                        </div>
                    }
                }) }
            </div>

            <div class="container">
                <div ref={title_ref} class="section-title" style={lone_style(&TITLE, title_shown)}>
                    <div class="badge badge-alert">{"⚠️ Critical Issue"}</div>
                    <h2 class="text-glow">{"The Plastic "}<span class="tone-red">{"Crisis"}</span></h2>
                    <p class="lede lede-dark">
                        {"Our planet is drowning in plastic waste, and single-use bottles are a major contributor to this environmental disaster."}
                    </p>
                </div>

                <div class="problem-grid">
                    <div ref={content_ref} style={lone_style(&CONTENT, content_shown)}>
                        <div class="glass-dark">
                            <h3 class="tone-red">{"The Harsh Reality"}</h3>
                            { for FACTS.iter().map(|(icon, text, high)| html! {
                                <div class="fact">
                                    <div class={classes!("fact-icon", if *high { "severity-high" } else { "severity-medium" })}>
                                        {*icon}
                                    </div>
                                    <p>{*text}</p>
                                </div>
                            }) }
                            <p class="callout-dark">
                                {"💡 Every minute, one million plastic bottles are purchased worldwide. Most end up in landfills or oceans."}
                            </p>
                        </div>
                    </div>

                    <div ref={stats_ref} class="stats">
                        { for STATS.iter().enumerate().map(|(index, stat)| html! {
                            <div class="card-dark" style={stat_styles[index].clone()}>
                                <div class="card-icon">{stat.icon}</div>
                                <div class={classes!("stat-value", format!("tone-{}", stat.color))}>{stat.value}</div>
                                <p>{stat.label}</p>
                            </div>
                        }) }
                    </div>
                </div>

                <div class="hope">
                    <h4>{"But There's Hope"}</h4>
                    <p>
                        {"By choosing reusable alternatives like AquaPure, we can significantly reduce plastic waste and protect our planet for future generations."}
                    </p>
                    <AnchorLink href="#solution" class="btn-primary">{"Discover the Solution"}</AnchorLink>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::reveal::Policy;

    #[test]
    fn particles_stay_on_the_canvas_and_do_not_stack() {
        let spots: Vec<_> = (0..PARTICLE_COUNT).map(scatter).collect();
        assert!(spots.iter().all(|(left, top)| *left < 100 && *top < 100));
        for (i, a) in spots.iter().enumerate() {
            assert!(spots[i + 1..].iter().all(|b| b != a));
        }
    }

    #[test]
    fn debris_replays_while_content_plays_once() {
        assert_eq!(PARTICLES.policy, Policy::Replay);
        for group in [TITLE, CONTENT, STAT_CARDS] {
            assert_eq!(group.policy, Policy::PlayOnce);
        }
    }

    #[test]
    fn stat_cards_cascade() {
        let shown = &group_styles(&STAT_CARDS, STATS.len(), true)[3];
        assert!(shown.contains(" 0.6s"));
    }
}
