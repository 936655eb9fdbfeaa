use log::info;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::animation::reveal::{group_styles, RevealConfig};
use crate::animation::trigger::use_reveal;
use crate::components::anchor_link::AnchorLink;

const LINK_COLUMNS: [(&str, &[&str]); 4] = [
    ("Product", &["Features", "Materials", "Colors", "Accessories", "Sustainability"]),
    ("Company", &["About Us", "Our Mission", "Impact", "Careers", "Press"]),
    ("Support", &["Help Center", "Shipping", "Returns", "Warranty", "Contact"]),
    ("Legal", &["Privacy Policy", "Terms of Service", "Cookie Policy", "Disclaimer"]),
];

const SOCIAL: [(&str, &str); 4] = [
    ("f", "Facebook"),
    ("𝕏", "Twitter"),
    ("◎", "Instagram"),
    ("▶", "YouTube"),
];

const CONTACT: [(&str, &str); 3] = [
    ("✉️", "community@aquapure.com"),
    ("📞", "+91 8673646764"),
    ("📍", "22A MM Hills"),
];

const LEAF_COUNT: usize = 15;

const ITEMS: RevealConfig = RevealConfig::rise(50.0, 0.8, "top 90%").staggered(0.1);

// brand, one per link column, one per contact card, newsletter, bottom bar
const CONTACT_BASE: usize = 1 + LINK_COLUMNS.len();
const NEWSLETTER_SLOT: usize = CONTACT_BASE + CONTACT.len();
const BOTTOM_SLOT: usize = NEWSLETTER_SLOT + 1;
const COUNTER_SLOT: usize = BOTTOM_SLOT + 1;
const SLOT_COUNT: usize = COUNTER_SLOT + 1;

#[function_component(Footer)]
pub fn footer() -> Html {
    let footer_ref = use_node_ref();
    let shown = use_reveal(footer_ref.clone(), ITEMS);
    let slots = group_styles(&ITEMS, SLOT_COUNT, shown);
    let slot = |index: usize| slots[index].clone();

    let on_subscribe = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        info!("newsletter signup is not wired to anything yet");
    });

    html! {
        <footer ref={footer_ref} class="site-footer">
            <style>
                {r#"
                    .site-footer {
                        position: relative;
                        overflow: hidden;
                        color: #fff;
                        background: linear-gradient(135deg, #111827, #1f2937);
                    }
                    .footer-inner {
                        position: relative;
                        z-index: 1;
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 4rem 1.5rem;
                    }
                    .footer-grid {
                        display: grid;
                        grid-template-columns: 2fr repeat(4, 1fr);
                        gap: 2rem;
                        margin-bottom: 3rem;
                    }
                    .footer-grid ul {
                        list-style: none;
                        padding: 0;
                    }
                    .footer-grid li {
                        margin-bottom: 0.75rem;
                    }
                    .footer-link {
                        color: #9ca3af;
                        text-decoration: none;
                        transition: color 0.3s;
                    }
                    .footer-link:hover {
                        color: #4ade80;
                    }
                    .socials {
                        display: flex;
                        gap: 1rem;
                    }
                    .social {
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 50%;
                        background: #374151;
                        color: #d1d5db;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        text-decoration: none;
                        transition: background 0.3s;
                    }
                    .social:hover {
                        background: #22c55e;
                        color: #fff;
                    }
                    .contacts {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                        gap: 1.5rem;
                        margin-bottom: 2rem;
                    }
                    .contact {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        padding: 1rem;
                        border-radius: 0.75rem;
                        background: rgba(31, 41, 55, 0.5);
                        color: #d1d5db;
                    }
                    .newsletter {
                        text-align: center;
                        padding: 2rem;
                        margin-bottom: 2rem;
                        border-radius: 1rem;
                        background: linear-gradient(to right, #22c55e, #0d9488);
                    }
                    .newsletter form {
                        display: flex;
                        max-width: 28rem;
                        margin: 0 auto;
                    }
                    .newsletter input {
                        flex: 1;
                        padding: 0.75rem 1rem;
                        border: 0;
                        border-radius: 1rem 0 0 1rem;
                    }
                    .newsletter button {
                        padding: 0.75rem 1.5rem;
                        border: 0;
                        border-radius: 0 1rem 1rem 0;
                        background: #fff;
                        color: #16a34a;
                        font-weight: 600;
                        cursor: pointer;
                    }
                    .bottom-bar {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: space-between;
                        gap: 1rem;
                        padding-top: 2rem;
                        border-top: 1px solid #374151;
                        color: #9ca3af;
                        font-size: 0.875rem;
                    }
                    .bottom-bar nav {
                        display: flex;
                        gap: 1.5rem;
                    }
                    .eco-counter {
                        margin-top: 2rem;
                        text-align: center;
                    }
                    .eco-counter-value {
                        font-size: 1.5rem;
                        font-weight: 700;
                        color: #4ade80;
                    }
                    .leaves {
                        position: absolute;
                        bottom: 0;
                        left: 0;
                        width: 100%;
                        height: 5rem;
                        overflow: hidden;
                    }
                    .leaf {
                        position: absolute;
                        font-size: 1.5rem;
                        opacity: 0.2;
                        animation-name: leaf-float;
                        animation-timing-function: ease-in-out;
                        animation-iteration-count: infinite;
                    }
                    @keyframes leaf-float {
                        0%, 100% { transform: translateY(0) rotate(0deg); }
                        50% { transform: translateY(-20px) rotate(15deg); }
                    }
                    @media (max-width: 900px) {
                        .footer-grid {
                            grid-template-columns: 1fr 1fr;
                        }
                    }
                "#}
            </style>
            <div class="footer-inner">
                <div class="footer-grid">
                    <div style={slot(0)}>
                        <h3 class="gradient-text">{"🍃 AquaPure"}</h3>
                        <p class="footer-link">{"Sustainable Hydration"}</p>
                        <p>
                            {"Join us in creating a plastic-free future. Every AquaPure bottle represents a step towards a cleaner, healthier planet for generations to come."}
                        </p>
                        <div class="socials">
                            { for SOCIAL.iter().map(|(glyph, label)| html! {
                                <AnchorLink href="#" class="social" aria_label={*label}>{*glyph}</AnchorLink>
                            }) }
                        </div>
                    </div>

                    { for LINK_COLUMNS.iter().enumerate().map(|(index, (title, links))| html! {
                        <div style={slot(1 + index)}>
                            <h4>{*title}</h4>
                            <ul>
                                { for links.iter().map(|link| html! {
                                    <li><AnchorLink href="#" class="footer-link">{*link}</AnchorLink></li>
                                }) }
                            </ul>
                        </div>
                    }) }
                </div>

                <div class="contacts">
                    { for CONTACT.iter().enumerate().map(|(index, (icon, text))| html! {
                        <div class="contact" style={slot(CONTACT_BASE + index)}>
                            <span>{*icon}</span>
                            <span>{*text}</span>
                        </div>
                    }) }
                </div>

                <div class="newsletter" style={slot(NEWSLETTER_SLOT)}>
                    <h4>{"Stay Updated"}</h4>
                    <p>{"Get the latest news and exclusive offers"}</p>
                    <form>
                        <input type="email" placeholder="Enter your email" />
                        <button type="submit" onclick={on_subscribe}>{"Subscribe"}</button>
                    </form>
                </div>

                <div class="bottom-bar" style={slot(BOTTOM_SLOT)}>
                    <div>{"© 2023 AquaPure. All rights reserved. Made with ♡ for our planet."}</div>
                    <nav>
                        <AnchorLink href="#" class="footer-link">{"Privacy Policy"}</AnchorLink>
                        <AnchorLink href="#" class="footer-link">{"Terms of Service"}</AnchorLink>
                        <AnchorLink href="#" class="footer-link">{"Cookie Policy"}</AnchorLink>
                    </nav>
                </div>

                <div class="eco-counter" style={slot(COUNTER_SLOT)}>
                    <div class="eco-counter-value">{"1,245,678"}</div>
                    <div>{"Plastic bottles saved by AquaPure community"}</div>
                </div>
            </div>

            <div class="leaves" aria-hidden="true">
                { for (0..LEAF_COUNT).map(|i| html! {
                    <div
                        class="leaf"
                        style={format!(
                            "left: {}%; bottom: {}%; animation-duration: {}s; animation-delay: {}s;",
                            (i * 53 + 7) % 100,
                            (i * 29) % 20,
                            6.0 + i as f64 * 0.5,
                            i as f64 * 0.5,
                        )}
                    >
                        {"🍃"}
                    </div>
                }) }
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_footer_item_gets_its_own_stagger_slot() {
        assert_eq!(CONTACT_BASE, 5);
        assert_eq!(NEWSLETTER_SLOT, 8);
        assert_eq!(COUNTER_SLOT, 10);
        let slots = group_styles(&ITEMS, SLOT_COUNT, true);
        assert_eq!(slots.len(), SLOT_COUNT);
        assert!(slots[COUNTER_SLOT].contains(" 1s"));
    }
}
