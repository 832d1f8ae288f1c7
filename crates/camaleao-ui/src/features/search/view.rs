//! Account search view: lookup form plus the campaign/ad-set tree.

use crate::app::api::ServicesCtx;
use crate::components::atoms::EmptyState;
use crate::core::store::AppStore;
use crate::features::search::actions::SearchAction;
use crate::features::search::flow::{copy_ad_set_id, submit_lookup};
use crate::features::search::logic::campaign_caption;
use crate::features::search::state::{COPY_FEEDBACK_MS, SearchState};
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use crate::models::{AdSet, Campaign, StatusTone};
use gloo_timers::future::TimeoutFuture;
use std::rc::Rc;
use yew::platform::spawn_local;
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

#[derive(Properties, PartialEq)]
pub(crate) struct SearchViewProps {
    pub token: AttrValue,
    pub on_select: Callback<String>,
}

fn search_dispatch(dispatch: Dispatch<AppStore>) -> impl Fn(SearchAction) {
    move |action| dispatch.reduce_mut(move |store| store.search.apply(action))
}

#[function_component(SearchView)]
pub(crate) fn search_view(props: &SearchViewProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let services = use_context::<ServicesCtx>();
    let dispatch = Dispatch::<AppStore>::new();
    let search = use_selector(|store: &AppStore| store.search.clone());
    let t = |key: &str| bundle.text(key, "");

    let on_input = {
        let dispatch = dispatch.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                let value = input.value();
                dispatch.reduce_mut(move |store| {
                    store.search.apply(SearchAction::AccountInput(value));
                });
            }
        })
    };

    let on_submit = {
        let services = services.clone();
        let bundle = bundle.clone();
        let dispatch = dispatch.clone();
        let token = props.token.to_string();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(services) = services.clone() else {
                return;
            };
            let raw = dispatch.get().search.account_id.clone();
            let bundle = bundle.clone();
            let token = token.clone();
            let dispatch = dispatch.clone();
            spawn_local(async move {
                submit_lookup(
                    &raw,
                    &token,
                    services.lookup.as_ref(),
                    services.notifier.as_ref(),
                    &bundle,
                    search_dispatch(dispatch),
                )
                .await;
            });
        })
    };

    let on_copy = {
        let services = services.clone();
        let bundle = bundle.clone();
        let dispatch = dispatch.clone();
        Callback::from(move |id: String| {
            let Some(services) = services.clone() else {
                return;
            };
            let bundle = bundle.clone();
            let dispatch = dispatch.clone();
            spawn_local(async move {
                let copied = copy_ad_set_id(
                    &id,
                    services.clipboard.as_ref(),
                    services.clock.as_ref(),
                    services.notifier.as_ref(),
                    &bundle,
                    search_dispatch(dispatch.clone()),
                )
                .await;
                if copied {
                    TimeoutFuture::new(COPY_FEEDBACK_MS.try_into().unwrap_or(u32::MAX)).await;
                    let at_ms = services.clock.now_ms();
                    dispatch.reduce_mut(move |store| {
                        store.search.apply(SearchAction::CopyExpired { at_ms });
                    });
                }
            });
        })
    };

    let on_toggle = {
        let dispatch = dispatch.clone();
        Callback::from(move |id: String| {
            dispatch.reduce_mut(move |store| store.search.apply(SearchAction::ToggleCampaign(id)));
        })
    };

    let loading = search.loading;
    html! {
        <div class="w-full max-w-3xl space-y-6">
            <div class="card bg-base-100 shadow-xl">
                <div class="card-body">
                    <h2 class="card-title text-2xl">{t("search.title")}</h2>
                    <p class="text-base-content/60">{t("search.subtitle")}</p>
                    <form class="flex flex-col sm:flex-row gap-3 pt-4" onsubmit={on_submit}>
                        <label class="form-control flex-1">
                            <span class="label-text">{t("search.account_label")}</span>
                            <input
                                class="input input-bordered"
                                type="text"
                                placeholder={t("search.placeholder")}
                                value={search.account_id.clone()}
                                oninput={on_input}
                                disabled={loading}
                            />
                        </label>
                        <button class="btn btn-primary self-end" type="submit" disabled={loading}>
                            {if loading {
                                html! { <><span class="loading loading-spinner loading-sm"></span>{t("search.loading")}</> }
                            } else {
                                html! { {t("search.submit")} }
                            }}
                        </button>
                    </form>
                </div>
            </div>
            {render_results(&search, &bundle, &on_toggle, &on_copy, &props.on_select)}
        </div>
    }
}

fn render_results(
    search: &Rc<SearchState>,
    bundle: &TranslationBundle,
    on_toggle: &Callback<String>,
    on_copy: &Callback<String>,
    on_select: &Callback<String>,
) -> Html {
    if search.shows_empty() {
        return html! { <EmptyState title={bundle.text("search.empty", "")} /> };
    }
    if !search.shows_results() {
        return html! {};
    }
    let count = search.campaigns.len().to_string();
    html! {
        <section class="space-y-3">
            <h3 class="font-semibold text-lg">
                {bundle.text_with("search.campaigns", "{count}", &[("count", count.as_str())])}
            </h3>
            {for search.campaigns.iter().map(|campaign| {
                render_campaign(campaign, search, bundle, on_toggle, on_copy, on_select)
            })}
        </section>
    }
}

fn render_campaign(
    campaign: &Campaign,
    search: &SearchState,
    bundle: &TranslationBundle,
    on_toggle: &Callback<String>,
    on_copy: &Callback<String>,
    on_select: &Callback<String>,
) -> Html {
    let expanded = search.is_expanded(&campaign.id);
    let toggle = {
        let on_toggle = on_toggle.clone();
        let id = campaign.id.clone();
        Callback::from(move |_| on_toggle.emit(id.clone()))
    };
    html! {
        <div class="card bg-base-100 shadow">
            <button type="button" class="flex items-center gap-3 p-4 text-left w-full" onclick={toggle} aria-expanded={expanded.to_string()}>
                <span class={classes!("transition-transform", expanded.then_some("rotate-90"))}>{"›"}</span>
                <div class="flex-1 min-w-0">
                    <div class="font-medium truncate">{campaign.name.clone()}</div>
                    <div class="text-xs text-base-content/60">{campaign_caption(campaign, bundle)}</div>
                </div>
                {status_badge(&campaign.status)}
            </button>
            {if expanded {
                html! {
                    <div class="border-t border-base-300">
                        {if campaign.ad_sets.is_empty() {
                            html! { <EmptyState compact={true} title={bundle.text("search.no_ad_sets", "")} /> }
                        } else {
                            html! {
                                <ul class="divide-y divide-base-300">
                                    {for campaign.ad_sets.iter().map(|ad_set| {
                                        render_ad_set(ad_set, search, bundle, on_copy, on_select)
                                    })}
                                </ul>
                            }
                        }}
                    </div>
                }
            } else {
                html! {}
            }}
        </div>
    }
}

fn render_ad_set(
    ad_set: &AdSet,
    search: &SearchState,
    bundle: &TranslationBundle,
    on_copy: &Callback<String>,
    on_select: &Callback<String>,
) -> Html {
    let copied = search.copy.copied_id() == Some(ad_set.id.as_str());
    let copy = {
        let on_copy = on_copy.clone();
        let id = ad_set.id.clone();
        Callback::from(move |_| on_copy.emit(id.clone()))
    };
    let select = {
        let on_select = on_select.clone();
        let id = ad_set.id.clone();
        Callback::from(move |_| on_select.emit(id.clone()))
    };
    html! {
        <li class="flex items-center gap-3 px-4 py-3">
            <div class="flex-1 min-w-0 space-y-1">
                <div class="flex items-center gap-2">
                    <span class="truncate">{ad_set.name.clone()}</span>
                    {status_badge(&ad_set.status)}
                </div>
                <div class="flex items-center gap-2 text-xs text-base-content/60">
                    <code>{bundle.text_with("search.id_label", "{id}", &[("id", ad_set.id.as_str())])}</code>
                    <button type="button" class="btn btn-ghost btn-xs" title={bundle.text("search.copy_title", "")} onclick={copy}>
                        {if copied { "✓" } else { "⧉" }}
                    </button>
                    {ad_set.daily_budget.as_deref().map(|amount| html! {
                        <span>{bundle.text_with("search.budget", "{amount}", &[("amount", amount)])}</span>
                    }).unwrap_or_default()}
                </div>
            </div>
            <button type="button" class="btn btn-primary btn-sm" onclick={select}>
                {bundle.text("search.select", "Select")}
            </button>
        </li>
    }
}

fn status_badge(status: &str) -> Html {
    let tone = StatusTone::for_status(status);
    html! {
        <span class={classes!("badge", "badge-sm", tone.class())}>{status.to_string()}</span>
    }
}
