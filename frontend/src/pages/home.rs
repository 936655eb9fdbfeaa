use log::debug;
use stylist::css;
use stylist::yew::Global;
use yew::prelude::*;

use crate::sections::{
    benefits::Benefits, cta::Cta, footer::Footer, header::Header, intro::Intro,
    problem::Problem, solution::Solution,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionKind {
    Header,
    Intro,
    Problem,
    Solution,
    Benefits,
    Cta,
    Footer,
}

pub const PAGE_SECTIONS: [SectionKind; 7] = [
    SectionKind::Header,
    SectionKind::Intro,
    SectionKind::Problem,
    SectionKind::Solution,
    SectionKind::Benefits,
    SectionKind::Cta,
    SectionKind::Footer,
];

impl SectionKind {
    /// Id the section answers to in `#fragment` links.
    pub fn fragment_id(self) -> Option<&'static str> {
        match self {
            SectionKind::Intro => Some("intro"),
            SectionKind::Problem => Some("problem"),
            SectionKind::Solution => Some("solution"),
            SectionKind::Benefits => Some("benefits"),
            SectionKind::Cta => Some("cta"),
            SectionKind::Header | SectionKind::Footer => None,
        }
    }

    pub fn in_main(self) -> bool {
        self.fragment_id().is_some()
    }

    fn render(self) -> Html {
        debug!("Rendering {:?} section", self);
        match self {
            SectionKind::Header => html! { <Header /> },
            SectionKind::Intro => html! { <Intro /> },
            SectionKind::Problem => html! { <Problem /> },
            SectionKind::Solution => html! { <Solution /> },
            SectionKind::Benefits => html! { <Benefits /> },
            SectionKind::Cta => html! { <Cta /> },
            SectionKind::Footer => html! { <Footer /> },
        }
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let leading = PAGE_SECTIONS.iter().take_while(|kind| !kind.in_main());
    let main = PAGE_SECTIONS.iter().filter(|kind| kind.in_main());
    let trailing = PAGE_SECTIONS
        .iter()
        .skip_while(|kind| !kind.in_main())
        .skip_while(|kind| kind.in_main());

    html! {
        <div class="app">
            <Global css={css!(r#"
                html {
                    scroll-behavior: smooth;
                }
                body {
                    margin: 0;
                    font-family: "Inter", -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
                    color: #111827;
                    overflow-x: hidden;
                }
                img {
                    display: block;
                }
                .section {
                    position: relative;
                    overflow: hidden;
                    padding: 5rem 0;
                }
                .container {
                    position: relative;
                    z-index: 10;
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }
                .section-title {
                    text-align: center;
                    margin-bottom: 4rem;
                }
                .section-title h2 {
                    font-size: clamp(2.75rem, 6vw, 4.5rem);
                    font-weight: 700;
                    margin: 0 0 1.5rem;
                }
                .lede {
                    font-size: clamp(1.15rem, 2.2vw, 1.5rem);
                    line-height: 1.6;
                    max-width: 56rem;
                    margin: 0 auto;
                    color: #374151;
                }
                .lede-dark {
                    color: #e5e7eb;
                }
                .gradient-text {
                    background: linear-gradient(to right, #4ade80, #14b8a6);
                    -webkit-background-clip: text;
                    background-clip: text;
                    color: transparent;
                }
                .text-glow {
                    text-shadow: 0 0 30px rgba(255, 255, 255, 0.35);
                }
                .btn-primary {
                    display: inline-block;
                    padding: 0.6rem 1.5rem;
                    border: none;
                    border-radius: 999px;
                    color: #fff;
                    font-weight: 600;
                    text-decoration: none;
                    cursor: pointer;
                    background: linear-gradient(to right, #22c55e, #0d9488);
                    transition: transform 0.3s;
                }
                .btn-primary:hover {
                    transform: scale(1.05);
                }
                .btn-wide {
                    width: 100%;
                }
                .btn-glow {
                    box-shadow: 0 0 25px rgba(255, 255, 255, 0.45);
                }
                .glass-light {
                    height: 100%;
                    box-sizing: border-box;
                    padding: 2rem;
                    border-radius: 1.5rem;
                    background: rgba(255, 255, 255, 0.8);
                    backdrop-filter: blur(16px);
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.12);
                }
                .card-light {
                    padding: 1.5rem;
                    text-align: center;
                    border-radius: 1rem;
                    background: rgba(255, 255, 255, 0.9);
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
                }
                .card-dark {
                    padding: 1.5rem;
                    text-align: center;
                    border-radius: 1rem;
                    background: rgba(31, 41, 55, 0.4);
                    border: 1px solid #374151;
                }
                .card-icon {
                    width: 4rem;
                    height: 4rem;
                    margin: 0 auto 1rem;
                    border-radius: 1rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.75rem;
                }
                .callout-light {
                    padding: 1rem;
                    border-radius: 0.75rem;
                    text-align: center;
                    color: #15803d;
                    background: #f0fdf4;
                    border: 1px solid #bbf7d0;
                }
                .callout-dark {
                    padding: 1rem;
                    border-radius: 0.75rem;
                    text-align: center;
                    color: #fecaca;
                    background: rgba(239, 68, 68, 0.1);
                    border: 1px solid rgba(239, 68, 68, 0.3);
                }
                .scroll-indicator {
                    position: fixed;
                    bottom: 2rem;
                    left: calc(50% - 5.5rem);
                    z-index: 40;
                }
                .scroll-indicator-pill {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    padding: 0.5rem 1rem;
                    border-radius: 999px;
                    color: #16a34a;
                    font-size: 0.875rem;
                    font-weight: 500;
                    background: rgba(255, 255, 255, 0.9);
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                }
            "#)} />
            <style>
                {r#"
                    @keyframes pulse {
                        0%, 100% { opacity: 1; }
                        50% { opacity: 0.6; }
                    }
                    @media (prefers-reduced-motion: reduce) {
                        * {
                            transition: none !important;
                            animation: none !important;
                        }
                    }
                "#}
            </style>
            { for leading.map(|kind| kind.render()) }
            <main>
                { for main.map(|kind| kind.render()) }
            </main>
            { for trailing.map(|kind| kind.render()) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_is_header_five_sections_footer() {
        assert_eq!(
            PAGE_SECTIONS,
            [
                SectionKind::Header,
                SectionKind::Intro,
                SectionKind::Problem,
                SectionKind::Solution,
                SectionKind::Benefits,
                SectionKind::Cta,
                SectionKind::Footer,
            ]
        );
        let main: Vec<_> = PAGE_SECTIONS.iter().filter(|kind| kind.in_main()).collect();
        assert_eq!(main.len(), 5);
        assert!(!PAGE_SECTIONS[0].in_main());
        assert!(!PAGE_SECTIONS[6].in_main());
    }

    #[test]
    fn each_section_appears_once() {
        for kind in PAGE_SECTIONS {
            assert_eq!(PAGE_SECTIONS.iter().filter(|other| **other == kind).count(), 1);
        }
    }

    #[test]
    fn fragment_ids_match_the_nav() {
        let ids: Vec<_> = PAGE_SECTIONS.iter().filter_map(|kind| kind.fragment_id()).collect();
        assert_eq!(ids, ["intro", "problem", "solution", "benefits", "cta"]);
        let nav: Vec<_> = crate::sections::header::NAV_ITEMS
            .iter()
            .map(|(href, _)| href.trim_start_matches('#'))
            .collect();
        assert_eq!(ids, nav);
    }
}
