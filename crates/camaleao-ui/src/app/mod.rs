//! Application shell: configuration check, routing, session and toasts.

use crate::app::api::ServicesCtx;
use crate::components::navbar::Navbar;
use crate::components::toast::ToastHost;
use crate::config::UiConfig;
use crate::core::auth::Session;
use crate::core::store::{ActiveView, AppStore};
use crate::features::auth::view::AuthPage;
use crate::features::duplicate::view::DuplicateView;
use crate::features::search::view::SearchView;
use crate::features::token::view::TokenSettings;
use crate::i18n::{LocaleCode, TranslationBundle};
use gloo::console;
use preferences::{clear_session, load_locale, load_session, persist_locale, persist_session};
pub(crate) use routes::Route;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

pub(crate) mod api;
mod preferences;
mod routes;

#[function_component(CamaleaoApp)]
pub(crate) fn camaleao_app() -> Html {
    let config = use_memo(|_| UiConfig::from_build_env(), ());
    let locale = use_state(load_locale);
    let bundle = {
        let locale = *locale;
        use_memo(move |_| TranslationBundle::new(locale), locale)
    };

    if let Err(err) = config.validate() {
        console::error!("invalid configuration", err.to_string());
        return html! {
            <div class="min-h-screen flex items-center justify-center p-4">
                <div role="alert" class="alert alert-error max-w-lg">
                    <span class="font-semibold">{bundle.text("app.config_error", "Invalid configuration")}</span>
                    <span>{err.to_string()}</span>
                </div>
            </div>
        };
    }

    html! { <Shell config={(*config).clone()} locale={*locale} bundle={(*bundle).clone()} on_locale={{
        let locale = locale.clone();
        Callback::from(move |next: LocaleCode| {
            persist_locale(next);
            locale.set(next);
        })
    }} /> }
}

#[derive(Properties, PartialEq)]
struct ShellProps {
    config: UiConfig,
    locale: LocaleCode,
    bundle: TranslationBundle,
    on_locale: Callback<LocaleCode>,
}

#[function_component(Shell)]
fn shell(props: &ShellProps) -> Html {
    let services = {
        let config = props.config.clone();
        use_memo(move |_| ServicesCtx::new(&config), ())
    };
    let dispatch = Dispatch::<AppStore>::new();
    let session = use_selector(|store: &AppStore| store.session.clone());
    let toasts = use_selector(|store: &AppStore| store.toasts.items.clone());
    let restored = use_state(|| false);

    {
        let dispatch = dispatch.clone();
        let restored = restored.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(session) = load_session() {
                    dispatch.reduce_mut(move |store| store.sign_in(session));
                }
                restored.set(true);
                || ()
            },
            (),
        );
    }

    let on_dismiss = {
        let dispatch = dispatch.clone();
        Callback::from(move |id: u64| dispatch.reduce_mut(move |store| store.toasts.dismiss(id)))
    };

    let on_signed_in = {
        let dispatch = dispatch.clone();
        Callback::from(move |session: Session| {
            persist_session(&session);
            dispatch.reduce_mut(move |store| store.sign_in(session));
        })
    };

    let on_sign_out = {
        let dispatch = dispatch.clone();
        let services = (*services).clone();
        Callback::from(move |()| {
            let current = dispatch.get().session.clone();
            clear_session();
            dispatch.reduce_mut(AppStore::sign_out);
            if let Some(session) = current {
                let auth = services.auth.clone();
                spawn_local(async move {
                    if let Err(err) = auth.sign_out(&session).await {
                        console::warn!("remote sign-out failed", err.to_string());
                    }
                });
            }
        })
    };

    let session_value = (*session).clone();
    let ready = *restored;
    let locale = props.locale;
    let on_locale = props.on_locale.clone();
    html! {
        <ContextProvider<ServicesCtx> context={(*services).clone()}>
            <ContextProvider<TranslationBundle> context={props.bundle.clone()}>
                <BrowserRouter>
                    <Switch<Route> render={move |route| {
                        if !ready {
                            return html! {};
                        }
                        match (route, session_value.clone()) {
                            (Route::Home, Some(session)) => html! {
                                <div class="min-h-screen bg-base-200">
                                    <Navbar
                                        email={session.email.clone()}
                                        locale={locale}
                                        on_locale={on_locale.clone()}
                                        on_sign_out={on_sign_out.clone()}
                                    >
                                        <TokenSettings session={session.clone()} on_token_change={set_token()} />
                                    </Navbar>
                                    <main class="flex justify-center p-4 sm:p-8">
                                        <HomePage />
                                    </main>
                                </div>
                            },
                            (Route::Home | Route::NotFound, None) => html! { <Redirect<Route> to={Route::Auth} /> },
                            (Route::Auth, None) => html! { <AuthPage on_signed_in={on_signed_in.clone()} /> },
                            (Route::Auth | Route::NotFound, Some(_)) => html! { <Redirect<Route> to={Route::Home} /> },
                        }
                    }} />
                    <ToastHost toasts={(*toasts).clone()} on_dismiss={on_dismiss} />
                </BrowserRouter>
            </ContextProvider<TranslationBundle>>
        </ContextProvider<ServicesCtx>>
    }
}

fn set_token() -> Callback<String> {
    let dispatch = Dispatch::<AppStore>::new();
    Callback::from(move |token: String| dispatch.reduce_mut(move |store| store.set_token(token)))
}

/// Controller: renders exactly one of the two views, chosen by the selection.
#[function_component(HomePage)]
fn home_page() -> Html {
    let dispatch = Dispatch::<AppStore>::new();
    let view = use_selector(|store: &AppStore| store.controller.active_view());
    let token = use_selector(|store: &AppStore| store.controller.token.clone());

    match (*view).clone() {
        ActiveView::Search => {
            let on_select = {
                let dispatch = dispatch.clone();
                Callback::from(move |id: String| {
                    dispatch.reduce_mut(move |store| store.select_ad_set(&id));
                })
            };
            html! { <SearchView token={(*token).clone()} on_select={on_select} /> }
        }
        ActiveView::Duplicate { .. } => {
            let on_back = Callback::from(move |()| dispatch.reduce_mut(AppStore::back));
            html! { <DuplicateView on_back={Some(on_back)} /> }
        }
    }
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<CamaleaoApp>::with_root(root).render();
    } else {
        yew::Renderer::<CamaleaoApp>::new().render();
    }
}
