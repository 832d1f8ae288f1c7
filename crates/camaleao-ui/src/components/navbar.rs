//! Top bar shown to signed-in operators.

use crate::components::locale_menu::LocaleMenu;
use crate::i18n::{DEFAULT_LOCALE, LocaleCode, TranslationBundle};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct NavbarProps {
    pub email: AttrValue,
    pub locale: LocaleCode,
    pub on_locale: Callback<LocaleCode>,
    pub on_sign_out: Callback<()>,
    /// Token settings trigger and dialog.
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Navbar)]
pub(crate) fn navbar(props: &NavbarProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let on_sign_out = {
        let cb = props.on_sign_out.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <header class="navbar bg-base-100 border-b border-base-300 px-4">
            <div class="flex-1 gap-2">
                <span class="text-xl">{"🦎"}</span>
                <strong>{bundle.text("app.brand", "Clone Camaleão")}</strong>
            </div>
            <div class="flex-none items-center gap-2">
                <span class="hidden sm:inline text-sm text-base-content/70">{props.email.clone()}</span>
                <LocaleMenu locale={props.locale} on_select={props.on_locale.clone()} />
                {for props.children.iter()}
                <button class="btn btn-ghost btn-sm" onclick={on_sign_out}>
                    {bundle.text("nav.sign_out", "Sign out")}
                </button>
            </div>
        </header>
    }
}
