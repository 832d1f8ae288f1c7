//! Duplication form with quick-pick presets.

use crate::app::api::ServicesCtx;
use crate::core::store::AppStore;
use crate::features::duplicate::actions::DuplicateAction;
use crate::features::duplicate::flow::submit_duplicate;
use crate::features::duplicate::logic::{PRESET_QUANTITIES, is_active_preset};
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use yew::platform::spawn_local;
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

#[derive(Properties, PartialEq)]
pub(crate) struct DuplicateViewProps {
    #[prop_or_default]
    pub on_back: Option<Callback<()>>,
}

fn apply(dispatch: &Dispatch<AppStore>, action: DuplicateAction) {
    dispatch.reduce_mut(move |store| store.duplicate.apply(action));
}

#[function_component(DuplicateView)]
pub(crate) fn duplicate_view(props: &DuplicateViewProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let services = use_context::<ServicesCtx>();
    let dispatch = Dispatch::<AppStore>::new();
    let form = use_selector(|store: &AppStore| store.duplicate.clone());
    let t = |key: &str| bundle.text(key, "");

    let on_ad_set = {
        let dispatch = dispatch.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                apply(&dispatch, DuplicateAction::AdSetInput(input.value()));
            }
        })
    };
    let on_quantity = {
        let dispatch = dispatch.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                apply(&dispatch, DuplicateAction::QuantityInput(input.value()));
            }
        })
    };

    let on_submit = {
        let services = services.clone();
        let bundle = bundle.clone();
        let dispatch = dispatch.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(services) = services.clone() else {
                return;
            };
            let snapshot = dispatch.get();
            let ad_set_id = snapshot.duplicate.ad_set_id.clone();
            let quantity = snapshot.duplicate.quantity.clone();
            let bundle = bundle.clone();
            let dispatch = dispatch.clone();
            spawn_local(async move {
                submit_duplicate(
                    &ad_set_id,
                    &quantity,
                    services.duplication.as_ref(),
                    services.clock.as_ref(),
                    services.notifier.as_ref(),
                    &bundle,
                    |action| apply(&dispatch, action),
                )
                .await;
            });
        })
    };

    let busy = form.submitting;
    html! {
        <div class="card w-full max-w-lg bg-base-100 shadow-xl">
            <div class="card-body">
                {props.on_back.clone().map(|on_back| html! {
                    <button type="button" class="btn btn-ghost btn-sm self-start" onclick={Callback::from(move |_| on_back.emit(()))}>
                        {"← "}{t("duplicate.back")}
                    </button>
                }).unwrap_or_default()}
                <div class="text-center space-y-1">
                    <h2 class="text-2xl font-bold">{t("duplicate.title")}</h2>
                    <p class="text-base-content/60">{t("duplicate.subtitle")}</p>
                </div>
                <form class="space-y-6 pt-4" onsubmit={on_submit}>
                    <label class="form-control">
                        <span class="label-text">{t("duplicate.ad_set_label")}</span>
                        <input
                            class="input input-bordered"
                            type="text"
                            placeholder={t("duplicate.ad_set_placeholder")}
                            value={form.ad_set_id.clone()}
                            oninput={on_ad_set}
                            disabled={busy}
                        />
                    </label>
                    <div class="space-y-3">
                        <label class="form-control">
                            <span class="label-text">{t("duplicate.quantity_label")}</span>
                            <input
                                class="input input-bordered input-lg text-center font-bold"
                                type="number"
                                min="1"
                                placeholder={t("duplicate.quantity_placeholder")}
                                value={form.quantity.clone()}
                                oninput={on_quantity}
                                disabled={busy}
                            />
                        </label>
                        <div class="grid grid-cols-4 gap-2">
                            {for PRESET_QUANTITIES.iter().map(|preset| {
                                let preset = *preset;
                                let active = is_active_preset(preset, &form.quantity);
                                let dispatch = dispatch.clone();
                                let onclick = Callback::from(move |_| apply(&dispatch, DuplicateAction::Preset(preset)));
                                html! {
                                    <button
                                        type="button"
                                        class={classes!("btn", if active { "btn-primary" } else { "btn-outline" })}
                                        onclick={onclick}
                                        disabled={busy}
                                    >
                                        {preset}
                                    </button>
                                }
                            })}
                        </div>
                    </div>
                    <button class="btn btn-primary w-full" type="submit" disabled={busy}>
                        {if busy {
                            html! { <><span class="loading loading-spinner loading-sm"></span>{t("duplicate.loading")}</> }
                        } else {
                            html! { {t("duplicate.submit")} }
                        }}
                    </button>
                </form>
            </div>
        </div>
    }
}
