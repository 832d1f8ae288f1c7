//! Muted placeholder shown when a list has nothing to render.
//!
//! # Design
//! - Copy is prop-driven; `compact` renders a single inline line for nested lists.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct EmptyStateProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    #[prop_or_default]
    pub compact: bool,
}

#[function_component(EmptyState)]
pub(crate) fn empty_state(props: &EmptyStateProps) -> Html {
    if props.compact {
        return html! {
            <p class="text-sm text-base-content/60 italic px-4 py-2">{props.title.clone()}</p>
        };
    }
    html! {
        <div class="card bg-base-100 border border-base-300">
            <div class="card-body items-center text-center">
                <h4 class="font-semibold">{props.title.clone()}</h4>
                {props.description.clone().map(|text| html! {
                    <p class="text-base-content/60">{text}</p>
                }).unwrap_or_default()}
            </div>
        </div>
    }
}
