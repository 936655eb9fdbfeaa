use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::animation::reveal::{group_styles, lone_style, Ease, RevealConfig, VisualState};
use crate::animation::scrub::{mix, progress};
use crate::animation::trigger::use_reveal;
use crate::components::anchor_link::AnchorLink;
use crate::config;

pub const NAV_ITEMS: [(&str, &str); 5] = [
    ("#intro", "Home"),
    ("#problem", "Problem"),
    ("#solution", "Solution"),
    ("#benefits", "Benefits"),
    ("#cta", "Shop"),
];

const LOGO: RevealConfig = RevealConfig::rise(-50.0, 1.0, "top top")
    .from_state(VisualState {
        opacity: 0.0,
        y: -50.0,
        scale: 0.8,
        ..VisualState::VISIBLE
    })
    .eased(Ease::Power3Out)
    .on_mount();

// Starts half a second before the logo finishes.
const NAV: RevealConfig = RevealConfig::rise(-30.0, 0.6, "top top")
    .staggered(0.1)
    .delayed(0.5)
    .on_mount();

fn backdrop_style(t: f64) -> String {
    format!(
        "background-color: rgba(255, 255, 255, {:.3}); backdrop-filter: blur({:.1}px); box-shadow: 0 6px 30px rgba(0, 0, 0, {:.3});",
        mix(0.0, 0.95, t),
        mix(0.0, 12.0, t),
        mix(0.0, 0.1, t),
    )
}

#[function_component(Header)]
pub fn header() -> Html {
    let menu_open = use_state(|| false);
    let logo_ref = use_node_ref();
    let nav_ref = use_node_ref();
    let logo_shown = use_reveal(logo_ref.clone(), LOGO);
    let nav_shown = use_reveal(nav_ref.clone(), NAV);
    let nav_styles = group_styles(&NAV, NAV_ITEMS.len(), nav_shown);
    let (_, scroll_y) = use_window_scroll();
    let backdrop = progress(scroll_y, 0.0, config::HEADER_SCRUB_END_PX);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: ()| menu_open.set(false))
    };

    let mobile_class = if *menu_open {
        "mobile-nav mobile-nav-open"
    } else {
        "mobile-nav"
    };

    html! {
        <header class="site-header" style={backdrop_style(backdrop)}>
            <style>
                {r#"
                    .site-header {
                        position: fixed;
                        top: 0;
                        left: 0;
                        width: 100%;
                        z-index: 50;
                    }
                    .header-bar {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 1rem 1.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .brand {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        cursor: pointer;
                    }
                    .brand-mark {
                        position: relative;
                        width: 3rem;
                        height: 3rem;
                        border-radius: 1rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: linear-gradient(135deg, #4ade80, #14b8a6);
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                        font-size: 1.4rem;
                    }
                    .brand-badge {
                        position: absolute;
                        top: -0.25rem;
                        right: -0.25rem;
                        width: 1.25rem;
                        height: 1.25rem;
                        border-radius: 50%;
                        background: #facc15;
                        font-size: 0.7rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .brand-name {
                        margin: 0;
                        font-size: 1.5rem;
                        font-weight: 700;
                    }
                    .brand-tagline {
                        margin: 0;
                        font-size: 0.75rem;
                        color: #4b5563;
                    }
                    .desktop-nav {
                        display: flex;
                        align-items: center;
                    }
                    .desktop-nav ul {
                        display: flex;
                        gap: 3rem;
                        list-style: none;
                        margin: 0;
                        padding: 0;
                    }
                    .nav-link {
                        color: #374151;
                        font-weight: 500;
                        text-decoration: none;
                        transition: color 0.3s;
                    }
                    .nav-link:hover {
                        color: #22c55e;
                    }
                    .preorder {
                        margin-left: 3rem;
                    }
                    .burger {
                        display: none;
                        background: none;
                        border: none;
                        font-size: 1.5rem;
                        cursor: pointer;
                    }
                    .mobile-nav {
                        display: none;
                        max-height: 0;
                        opacity: 0;
                        overflow: hidden;
                        background: #fff;
                        border-radius: 0 0 1rem 1rem;
                        transition: max-height 0.3s ease-in-out, opacity 0.3s ease-in-out;
                    }
                    .mobile-nav ul {
                        list-style: none;
                        margin: 0;
                        padding: 1.5rem;
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }
                    .mobile-nav-open {
                        max-height: 100vh;
                        opacity: 1;
                    }
                    @media (max-width: 768px) {
                        .desktop-nav {
                            display: none;
                        }
                        .burger {
                            display: block;
                        }
                        .mobile-nav {
                            display: block;
                        }
                    }
                "#}
            </style>
            <div class="header-bar">
                <div ref={logo_ref} class="brand" style={lone_style(&LOGO, logo_shown)}>
                    <div class="brand-mark">
                        {"🍃"}
                        <span class="brand-badge">{"♻️"}</span>
                    </div>
                    <div>
                        <h1 class="brand-name gradient-text">{"AquaPure"}</h1>
                        <p class="brand-tagline">{"Eco Hydration"}</p>
                    </div>
                </div>

                <nav ref={nav_ref} class="desktop-nav">
                    <ul>
                        { for NAV_ITEMS.iter().enumerate().map(|(index, (href, label))| html! {
                            <li style={nav_styles[index].clone()}>
                                <AnchorLink href={*href} class="nav-link">{*label}</AnchorLink>
                            </li>
                        }) }
                    </ul>
                    <div class="preorder">
                        <button class="btn-primary">{"🛍️ Pre-order"}</button>
                    </div>
                </nav>

                <button class="burger" aria-label="Toggle menu" onclick={toggle_menu}>
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
            </div>

            <div class={mobile_class}>
                <ul>
                    { for NAV_ITEMS.iter().map(|(href, label)| html! {
                        <li>
                            <AnchorLink href={*href} class="nav-link" onnavigate={close_menu.clone()}>
                                {*label}
                            </AnchorLink>
                        </li>
                    }) }
                    <li>
                        <button class="btn-primary btn-wide">{"🛍️ Pre-order Now"}</button>
                    </li>
                </ul>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_covers_every_fragment_section() {
        let hrefs: Vec<&str> = NAV_ITEMS.iter().map(|(href, _)| *href).collect();
        assert_eq!(hrefs, ["#intro", "#problem", "#solution", "#benefits", "#cta"]);
    }

    #[test]
    fn backdrop_is_clear_at_top_and_frosted_after_scrub() {
        assert!(backdrop_style(0.0).starts_with("background-color: rgba(255, 255, 255, 0.000)"));
        let frosted = backdrop_style(1.0);
        assert!(frosted.contains("0.950"));
        assert!(frosted.contains("blur(12.0px)"));
    }
}
