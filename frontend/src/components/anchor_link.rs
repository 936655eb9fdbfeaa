use log::debug;
use web_sys::{Element, MouseEvent, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

pub fn fragment(href: &str) -> Option<&str> {
    href.strip_prefix('#')
}

#[derive(Debug, PartialEq, Eq)]
pub enum AnchorAction<T> {
    Passthrough,
    Scroll(T),
    /// Target missing: do nothing.
    Suppress,
}

impl<T> AnchorAction<T> {
    pub fn suppresses_default(&self) -> bool {
        !matches!(self, AnchorAction::Passthrough)
    }
}

pub fn resolve<T>(href: &str, lookup: impl FnOnce(&str) -> Option<T>) -> AnchorAction<T> {
    match fragment(href) {
        None => AnchorAction::Passthrough,
        Some("") => AnchorAction::Suppress,
        Some(id) => lookup(id).map_or(AnchorAction::Suppress, AnchorAction::Scroll),
    }
}

fn smooth_scroll(target: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

#[derive(Properties, PartialEq)]
pub struct AnchorLinkProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub aria_label: Option<AttrValue>,
    #[prop_or_default]
    pub onnavigate: Option<Callback<()>>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(AnchorLink)]
pub fn anchor_link(props: &AnchorLinkProps) -> Html {
    let onclick = {
        let href = props.href.clone();
        let onnavigate = props.onnavigate.clone();
        Callback::from(move |e: MouseEvent| {
            let document = web_sys::window().and_then(|w| w.document());
            let action = resolve(&href, |id| document.as_ref()?.get_element_by_id(id));
            if action.suppresses_default() {
                e.prevent_default();
            }
            match action {
                AnchorAction::Passthrough => {}
                AnchorAction::Scroll(target) => smooth_scroll(&target),
                AnchorAction::Suppress => debug!("no element for {}", href),
            }
            if let Some(onnavigate) = &onnavigate {
                onnavigate.emit(());
            }
        })
    };

    html! {
        <a
            href={props.href.clone()}
            class={props.class.clone()}
            aria-label={props.aria_label.clone()}
            {onclick}
        >
            { for props.children.iter() }
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(id: &str) -> Option<&'static str> {
        ["intro", "problem", "solution", "benefits", "cta"]
            .into_iter()
            .find(|known| *known == id)
    }

    #[test]
    fn existing_fragment_scrolls_to_its_target() {
        assert_eq!(resolve("#solution", page), AnchorAction::Scroll("solution"));
    }

    #[test]
    fn missing_fragment_is_suppressed_silently() {
        assert_eq!(resolve("#does-not-exist", page), AnchorAction::Suppress);
    }

    #[test]
    fn bare_hash_never_looks_anything_up() {
        let action = resolve("#", |_| -> Option<&'static str> { panic!("looked up empty fragment") });
        assert_eq!(action, AnchorAction::Suppress);
    }

    #[test]
    fn only_in_page_links_cancel_browser_navigation() {
        assert!(resolve("#solution", page).suppresses_default());
        assert!(resolve("#does-not-exist", page).suppresses_default());
        assert!(resolve("#", page).suppresses_default());
        assert!(!resolve("/shop", page).suppresses_default());
    }

    #[test]
    fn ordinary_links_pass_through() {
        assert_eq!(resolve("https://example.com/#cta", page), AnchorAction::Passthrough);
        assert_eq!(fragment("/shop"), None);
        assert_eq!(fragment("#cta"), Some("cta"));
    }
}
