use yew::prelude::*;

use crate::animation::ambient::{use_ambient, AmbientLoop};

#[derive(Properties, PartialEq)]
pub struct FloatingProps {
    pub motion: AmbientLoop,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Floating)]
pub fn floating(props: &FloatingProps) -> Html {
    let raised = use_ambient(props.motion);

    html! {
        <div class={props.class.clone()} style={props.motion.style(raised)}>
            { for props.children.iter() }
        </div>
    }
}
