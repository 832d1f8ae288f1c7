//! Sign-in / sign-up page.

use crate::app::api::ServicesCtx;
use crate::core::auth::{AuthMode, Session};
use crate::features::auth::flow::{AuthAttempt, submit_credentials};
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use yew::platform::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct AuthPageProps {
    pub on_signed_in: Callback<Session>,
}

#[function_component(AuthPage)]
pub(crate) fn auth_page(props: &AuthPageProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let services = use_context::<ServicesCtx>();
    let t = |key: &str| bundle.text(key, "");
    let mode = use_state(|| AuthMode::SignIn);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let busy = use_state(|| false);

    let bind = |handle: &UseStateHandle<String>| {
        let handle = handle.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                handle.set(input.value());
            }
        })
    };
    let on_email = bind(&email);
    let on_password = bind(&password);

    let on_submit = {
        let mode = mode.clone();
        let email = email.clone();
        let password = password.clone();
        let busy = busy.clone();
        let bundle = bundle.clone();
        let on_signed_in = props.on_signed_in.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(services) = services.clone() else {
                return;
            };
            let current = *mode;
            let (email_value, password_value) = ((*email).clone(), (*password).clone());
            let (mode, busy, bundle) = (mode.clone(), busy.clone(), bundle.clone());
            let on_signed_in = on_signed_in.clone();
            busy.set(true);
            spawn_local(async move {
                let attempt = submit_credentials(
                    current,
                    &email_value,
                    &password_value,
                    services.auth.as_ref(),
                    services.notifier.as_ref(),
                    &bundle,
                )
                .await;
                busy.set(false);
                match attempt {
                    AuthAttempt::SignedIn(session) => on_signed_in.emit(session),
                    AuthAttempt::AwaitingConfirmation => mode.set(AuthMode::SignIn),
                    AuthAttempt::Failed => {}
                }
            });
        })
    };

    let on_toggle = {
        let mode = mode.clone();
        Callback::from(move |_| mode.set(mode.toggled()))
    };

    let signing_up = *mode == AuthMode::SignUp;
    let (heading, body, submit_label, busy_label, toggle_label) = if signing_up {
        ("auth.sign_up", "auth.sign_up_body", "auth.sign_up", "auth.signing_up", "auth.to_sign_in")
    } else {
        ("auth.sign_in", "auth.sign_in_body", "auth.sign_in", "auth.signing_in", "auth.to_sign_up")
    };

    html! {
        <div class="min-h-screen flex items-center justify-center p-4 bg-base-200">
            <div class="card w-full max-w-md bg-base-100 shadow-xl">
                <div class="card-body space-y-2">
                    <div class="text-center">
                        <div class="text-4xl">{"🦎"}</div>
                        <h1 class="text-2xl font-bold">{t("app.brand")}</h1>
                        <h2 class="font-semibold">{t(heading)}</h2>
                        <p class="text-base-content/60">{t(body)}</p>
                    </div>
                    <form class="space-y-4" onsubmit={on_submit}>
                        <label class="form-control">
                            <span class="label-text">{t("auth.email")}</span>
                            <input class="input input-bordered" type="email" autocomplete="email" value={(*email).clone()} oninput={on_email} disabled={*busy} />
                        </label>
                        <label class="form-control">
                            <span class="label-text">{t("auth.password")}</span>
                            <input class="input input-bordered" type="password" autocomplete={if signing_up { "new-password" } else { "current-password" }} value={(*password).clone()} oninput={on_password} disabled={*busy} />
                        </label>
                        <button class="btn btn-primary w-full" type="submit" disabled={*busy}>
                            {if *busy { t(busy_label) } else { t(submit_label) }}
                        </button>
                    </form>
                    <button type="button" class="btn btn-link btn-sm" onclick={on_toggle} disabled={*busy}>
                        {t(toggle_label)}
                    </button>
                </div>
            </div>
        </div>
    }
}
