//! Locale toggle used in the navbar.
//!
//! # Design
//! - Selection state is owned by the caller; the component only emits.

use crate::i18n::LocaleCode;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct LocaleMenuProps {
    pub locale: LocaleCode,
    pub on_select: Callback<LocaleCode>,
}

#[function_component(LocaleMenu)]
pub(crate) fn locale_menu(props: &LocaleMenuProps) -> Html {
    html! {
        <div class="join" role="group" aria-label="Locale">
            {for LocaleCode::all().iter().map(|lc| {
                let next = *lc;
                let on_select = props.on_select.clone();
                let onclick = Callback::from(move |_| on_select.emit(next));
                let flag_src = format!("https://flagcdn.com/{}.svg", locale_flag(next));
                html! {
                    <button
                        type="button"
                        class={classes!("btn", "btn-ghost", "btn-xs", "join-item", (props.locale == next).then_some("btn-active"))}
                        title={next.label()}
                        onclick={onclick}
                    >
                        <img src={flag_src} alt={next.label()} class="rounded-box size-4 object-cover" />
                        <span class="uppercase">{next.code()}</span>
                    </button>
                }
            })}
        </div>
    }
}

const fn locale_flag(locale: LocaleCode) -> &'static str {
    match locale {
        LocaleCode::Pt => "br",
        LocaleCode::En => "us",
    }
}
