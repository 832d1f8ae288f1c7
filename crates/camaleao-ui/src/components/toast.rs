//! Toast host rendering the store's notification queue.
//!
//! # Design
//! - Each toast auto-dismisses after a fixed delay; the close button dismisses early.
//! - The host is stateless; the queue lives in the store.

use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use crate::models::{NoticeKind, Toast};
use gloo::timers::callback::Timeout;
use yew::prelude::*;

const AUTO_DISMISS_MS: u32 = 5_000;

#[derive(Properties, PartialEq)]
pub(crate) struct ToastHostProps {
    pub toasts: Vec<Toast>,
    pub on_dismiss: Callback<u64>,
}

#[function_component(ToastHost)]
pub(crate) fn toast_host(props: &ToastHostProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |list: &Vec<Toast>| {
                let handles: Vec<Timeout> = list
                    .iter()
                    .map(|toast| {
                        let on_dismiss = on_dismiss.clone();
                        let id = toast.id;
                        Timeout::new(AUTO_DISMISS_MS, move || on_dismiss.emit(id))
                    })
                    .collect();
                move || drop(handles)
            },
            props.toasts.clone(),
        );
    }

    let dismiss_label = bundle.text("toast.dismiss", "Dismiss");
    html! {
        <div class="toast toast-end toast-bottom z-50" aria-live="polite" aria-atomic="true">
            {for props.toasts.iter().map(|toast| render_toast(toast, &props.on_dismiss, &dismiss_label))}
        </div>
    }
}

fn render_toast(toast: &Toast, on_dismiss: &Callback<u64>, dismiss_label: &str) -> Html {
    let class = match toast.notice.kind {
        NoticeKind::Info => "alert-info",
        NoticeKind::Success => "alert-success",
        NoticeKind::Warning => "alert-warning",
        NoticeKind::Error => "alert-error",
    };
    let id = toast.id;
    let on_close = {
        let on_dismiss = on_dismiss.clone();
        Callback::from(move |_| on_dismiss.emit(id))
    };

    html! {
        <div class={classes!("alert", class, "shadow-lg", "max-w-sm")} role="status">
            <div class="flex flex-col">
                <span class="font-semibold">{toast.notice.title.clone()}</span>
                {if toast.notice.description.is_empty() {
                    html! {}
                } else {
                    html! { <span class="text-sm">{toast.notice.description.clone()}</span> }
                }}
            </div>
            <button class="btn btn-ghost btn-xs" aria-label={dismiss_label.to_string()} onclick={on_close}>{"✕"}</button>
        </div>
    }
}
