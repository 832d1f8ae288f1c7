//! Token settings button and dialog.

use crate::app::api::ServicesCtx;
use crate::core::auth::Session;
use crate::core::store::AppStore;
use crate::features::token::flow::{TokenLoad, load_token, save_token};
use crate::features::token::state::TokenAction;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use gloo::console;
use yew::platform::spawn_local;
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

#[derive(Properties, PartialEq)]
pub(crate) struct TokenSettingsProps {
    pub session: Session,
    pub on_token_change: Callback<String>,
}

fn apply(dispatch: &Dispatch<AppStore>, action: TokenAction) {
    dispatch.reduce_mut(move |store| store.token.apply(action));
}

fn apply_for(dispatch: &Dispatch<AppStore>, user_id: &str, action: TokenAction) {
    let user_id = user_id.to_string();
    dispatch.reduce_mut(move |store| {
        store.apply_token_for(&user_id, action);
    });
}

#[function_component(TokenSettings)]
pub(crate) fn token_settings(props: &TokenSettingsProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let services = use_context::<ServicesCtx>();
    let dispatch = Dispatch::<AppStore>::new();
    let token = use_selector(|store: &AppStore| store.token.clone());
    let t = |key: &str| bundle.text(key, "");

    {
        let services = services.clone();
        let dispatch = dispatch.clone();
        let session = props.session.clone();
        let on_token_change = props.on_token_change.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(services) = services {
                    spawn_local(async move {
                        let user_id = session.user_id.clone();
                        let load = load_token(&session, services.tokens.as_ref(), |action| {
                            apply_for(&dispatch, &user_id, action);
                        })
                        .await;
                        if !dispatch.get().is_signed_in_as(&user_id) {
                            return;
                        }
                        match load {
                            TokenLoad::Found(token) => on_token_change.emit(token),
                            TokenLoad::Missing => {}
                            TokenLoad::Failed(err) => {
                                console::error!("token load failed", err.to_string());
                            }
                        }
                    });
                }
                || ()
            },
            props.session.user_id.clone(),
        );
    }

    let on_open = {
        let dispatch = dispatch.clone();
        Callback::from(move |_| apply(&dispatch, TokenAction::Open))
    };
    let on_close = {
        let dispatch = dispatch.clone();
        Callback::from(move |_| apply(&dispatch, TokenAction::Close))
    };
    let on_reveal = {
        let dispatch = dispatch.clone();
        Callback::from(move |_| apply(&dispatch, TokenAction::ToggleReveal))
    };
    let on_input = {
        let dispatch = dispatch.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                apply(&dispatch, TokenAction::DraftInput(input.value()));
            }
        })
    };
    let on_save = {
        let services = services.clone();
        let bundle = bundle.clone();
        let dispatch = dispatch.clone();
        let session = props.session.clone();
        let on_token_change = props.on_token_change.clone();
        Callback::from(move |_| {
            let Some(services) = services.clone() else {
                return;
            };
            let draft = dispatch.get().token.draft.clone();
            let bundle = bundle.clone();
            let dispatch = dispatch.clone();
            let session = session.clone();
            let on_token_change = on_token_change.clone();
            spawn_local(async move {
                let user_id = session.user_id.clone();
                let saved = save_token(
                    &session,
                    &draft,
                    services.tokens.as_ref(),
                    services.notifier.as_ref(),
                    &bundle,
                    |action| apply_for(&dispatch, &user_id, action),
                )
                .await;
                if let Some(token) = saved
                    && dispatch.get().is_signed_in_as(&user_id)
                {
                    on_token_change.emit(token);
                }
            });
        })
    };

    html! {
        <>
            <button
                type="button"
                class="btn btn-ghost btn-sm indicator"
                title={t("nav.settings")}
                onclick={on_open}
                disabled={token.loading}
            >
                {if token.has_token {
                    html! { <span class="indicator-item badge badge-success badge-xs"></span> }
                } else {
                    html! {}
                }}
                {"⚙"}
            </button>
            {if token.open {
                html! {
                    <div class="modal modal-open" role="dialog" aria-modal="true">
                        <div class="modal-box space-y-4">
                            <h3 class="font-bold text-lg">{t("token.title")}</h3>
                            <p class="text-base-content/70">{t("token.body")}</p>
                            <label class="form-control">
                                <span class="label-text">{t("token.label")}</span>
                                <div class="join w-full">
                                    <input
                                        class="input input-bordered join-item flex-1"
                                        type={if token.reveal { "text" } else { "password" }}
                                        placeholder={t("token.placeholder")}
                                        value={token.draft.clone()}
                                        oninput={on_input}
                                        disabled={token.saving}
                                    />
                                    <button type="button" class="btn join-item" onclick={on_reveal}>
                                        {if token.reveal { t("token.hide") } else { t("token.show") }}
                                    </button>
                                </div>
                                <span class="label-text-alt text-base-content/60 pt-1">{t("token.hint")}</span>
                            </label>
                            <div class="modal-action">
                                <button type="button" class="btn btn-ghost" onclick={on_close}>{t("token.cancel")}</button>
                                <button type="button" class="btn btn-primary" onclick={on_save} disabled={token.saving}>
                                    {if token.saving {
                                        html! { <span class="loading loading-spinner loading-sm"></span> }
                                    } else {
                                        html! {}
                                    }}
                                    {t("token.save")}
                                </button>
                            </div>
                        </div>
                    </div>
                }
            } else {
                html! {}
            }}
        </>
    }
}
