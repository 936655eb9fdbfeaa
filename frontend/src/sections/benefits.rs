use yew::prelude::*;

use crate::animation::ambient::AmbientLoop;
use crate::animation::reveal::{group_styles, lone_style, RevealConfig, VisualState};
use crate::animation::trigger::use_reveal;
use crate::components::floating::Floating;

struct Scene {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    image: &'static str,
    gradient: &'static str,
    features: [&'static str; 3],
}

const SCENES: [Scene; 3] = [
    Scene {
        icon: "🏋️",
        title: "Active Lifestyle",
        description: "Perfect for workouts, hiking, and sports activities",
        image: "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?ixlib=rb-4.0.3&auto=format&fit=crop&w=1000&q=80",
        gradient: "linear-gradient(to right, #3b82f6, #06b6d4)",
        features: ["Leak-proof design", "Sweat-resistant grip", "Lightweight construction"],
    },
    Scene {
        icon: "💼",
        title: "Work & Office",
        description: "Stay hydrated and productive throughout your workday",
        image: "https://images.unsplash.com/photo-1497366754035-f200968a6e72?ixlib=rb-4.0.3&auto=format&fit=crop&w=1000&q=80",
        gradient: "linear-gradient(to right, #22c55e, #10b981)",
        features: ["Sleek professional design", "Fits cup holders", "Easy to clean"],
    },
    Scene {
        icon: "🏔️",
        title: "Travel & Adventure",
        description: "Your perfect companion for exploring the world",
        image: "https://images.unsplash.com/photo-1506929562872-bb421503ef21?ixlib=rb-4.0.3&auto=format&fit=crop&w=1000&q=80",
        gradient: "linear-gradient(to right, #f97316, #ef4444)",
        features: ["Durable construction", "Long-lasting insulation", "Travel-friendly size"],
    },
];

const CORE_BENEFITS: [(&str, &str, &str); 3] = [
    ("❤️", "Healthier You", "Stay hydrated with BPA-free materials"),
    ("😊", "Peace of Mind", "Know you're making a positive impact"),
    ("☕", "Save Money", "No more buying disposable bottles"),
];

const TITLE: RevealConfig = RevealConfig::rise(100.0, 1.0, "top 80%");
const SCENE_CARDS: RevealConfig = RevealConfig::rise(0.0, 0.8, "top 70%")
    .from_state(VisualState {
        opacity: 0.0,
        scale: 0.8,
        ..VisualState::VISIBLE
    })
    .staggered(0.2);
const LIFESTYLE: RevealConfig = RevealConfig::rise(50.0, 0.8, "top 70%").staggered(0.3);
const ICON_FLOAT: AmbientLoop = AmbientLoop::float(10.0, 2.0);

#[function_component(Benefits)]
pub fn benefits() -> Html {
    let title_ref = use_node_ref();
    let scenes_ref = use_node_ref();
    let lifestyle_ref = use_node_ref();
    let title_shown = use_reveal(title_ref.clone(), TITLE);
    let scenes_shown = use_reveal(scenes_ref.clone(), SCENE_CARDS);
    let lifestyle_shown = use_reveal(lifestyle_ref.clone(), LIFESTYLE);
    let lifestyle_styles = group_styles(&LIFESTYLE, CORE_BENEFITS.len(), lifestyle_shown);
    let scene_styles = group_styles(&SCENE_CARDS, SCENES.len(), scenes_shown);

    html! {
        <section id="benefits" class="section benefits">
            <style>
                {r#"
                    .benefits {
                        background: linear-gradient(135deg, #ffffff, #eff6ff, #f0fdf4);
                    }
                    .scenes {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                        gap: 2rem;
                        margin-bottom: 5rem;
                    }
                    .scene {
                        background: #fff;
                        border-radius: 1.5rem;
                        overflow: hidden;
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.15);
                        transition: translate 0.5s;
                    }
                    .scene:hover {
                        translate: 0 -0.5rem;
                    }
                    .scene-image {
                        position: relative;
                        overflow: hidden;
                    }
                    .scene-image img {
                        width: 100%;
                        height: 12rem;
                        object-fit: cover;
                        transition: transform 0.5s;
                    }
                    .scene:hover .scene-image img {
                        transform: scale(1.1);
                    }
                    .scene-tag {
                        position: absolute;
                        top: 1rem;
                        right: 1rem;
                        padding: 0.25rem 0.75rem;
                        border-radius: 999px;
                        color: #fff;
                        font-size: 0.875rem;
                        font-weight: 600;
                    }
                    .scene-body {
                        padding: 1.5rem;
                    }
                    .scene-heading {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                    }
                    .scene-body ul {
                        list-style: none;
                        padding: 0;
                    }
                    .scene-body li::before {
                        content: "• ";
                        color: #14b8a6;
                    }
                    .core {
                        border-radius: 1.5rem;
                        padding: 3rem;
                        margin-bottom: 3rem;
                        background: linear-gradient(to right, #111827, #1f2937, #374151);
                    }
                    .core h3 {
                        text-align: center;
                        color: #60a5fa;
                        font-size: clamp(2rem, 4vw, 3rem);
                        margin-bottom: 3rem;
                    }
                    .core-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                        gap: 2.5rem;
                        max-width: 72rem;
                        margin: 0 auto;
                    }
                    .core-item {
                        text-align: center;
                        padding: 2rem;
                        border-radius: 1.5rem;
                        background: rgba(17, 24, 39, 0.6);
                        color: #bfdbfe;
                    }
                    .core-icon {
                        width: 6rem;
                        height: 6rem;
                        margin: 0 auto 1.5rem;
                        border-radius: 1.5rem;
                        background: rgba(37, 99, 235, 0.3);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 2.5rem;
                    }
                    .core-item h4 {
                        color: #93c5fd;
                        font-size: 1.75rem;
                    }
                    .testimonial {
                        max-width: 56rem;
                        margin: 0 auto;
                        text-align: center;
                    }
                    .testimonial blockquote {
                        font-size: clamp(1.4rem, 3vw, 1.9rem);
                        font-weight: 300;
                        font-style: italic;
                        color: #374151;
                    }
                "#}
            </style>
            <div class="container">
                <div ref={title_ref} class="section-title" style={lone_style(&TITLE, title_shown)}>
                    <h2>{"Live Better with "}<span class="gradient-text">{"AquaPure"}</span></h2>
                    <p class="lede">
                        {"Discover how AquaPure seamlessly integrates into every aspect of your life, enhancing your daily routines while protecting our planet."}
                    </p>
                </div>

                <div ref={scenes_ref} class="scenes">
                    { for SCENES.iter().enumerate().map(|(index, scene)| html! {
                        <div style={scene_styles[index].clone()}>
                            <div class="scene">
                                <div class="scene-image">
                                    <img src={scene.image} alt={scene.title} loading="lazy" />
                                    <div class="scene-tag" style={format!("background: {};", scene.gradient)}>
                                        {scene.title}
                                    </div>
                                </div>
                                <div class="scene-body">
                                    <div class="scene-heading">
                                        <div class="card-icon" style={format!("background: {};", scene.gradient)}>
                                            {scene.icon}
                                        </div>
                                        <h3>{scene.title}</h3>
                                    </div>
                                    <p>{scene.description}</p>
                                    <ul>
                                        { for scene.features.iter().map(|feature| html! { <li>{*feature}</li> }) }
                                    </ul>
                                </div>
                            </div>
                        </div>
                    }) }
                </div>

                <div ref={lifestyle_ref} class="core">
                    <h3>{"Why Choose AquaPure?"}</h3>
                    <div class="core-grid">
                        { for CORE_BENEFITS.iter().enumerate().map(|(index, (icon, title, description))| html! {
                            <div class="core-item" style={lifestyle_styles[index].clone()}>
                                <Floating motion={ICON_FLOAT.nth(index, 0.5)}>
                                    <div class="core-icon">{*icon}</div>
                                </Floating>
                                <h4>{*title}</h4>
                                <p>{*description}</p>
                            </div>
                        }) }
                    </div>
                </div>

                <div class="testimonial">
                    <div class="glass-light">
                        <div class="card-icon">{"❤️"}</div>
                        <blockquote>
                            {"\"AquaPure has completely changed my daily routine. Not only do I feel better staying hydrated, but I also feel good knowing I'm making a positive impact on the environment.\""}
                        </blockquote>
                        <div>{"- Sarah Johnson, Eco-Enthusiast"}</div>
                    </div>
                </div>
            </div>
        </section>
    }
}
