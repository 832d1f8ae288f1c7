//! Clipboard, clock and toast ports backed by the browser.

use crate::core::error::ServiceError;
use crate::core::ports::{Clipboard, Clock, Notifier};
use crate::core::store::AppStore;
use crate::models::Notice;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use gloo::console;
use gloo::utils::window;
use js_sys::{Date, Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use yewdux::prelude::Dispatch;

/// `navigator.clipboard.writeText`, looked up reflectively so older
/// browsers fail with an error instead of a missing binding.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct BrowserClipboard;

#[async_trait(?Send)]
impl Clipboard for BrowserClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ServiceError> {
        let unavailable = || ServiceError::Transport("clipboard unavailable".to_string());
        let navigator = window().navigator();
        let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard"))
            .ok()
            .filter(|value| !value.is_undefined() && !value.is_null())
            .ok_or_else(unavailable)?;
        let write_text = Reflect::get(&clipboard, &JsValue::from_str("writeText"))
            .map_err(|_| unavailable())?;
        let write_fn = write_text.dyn_ref::<Function>().ok_or_else(unavailable)?;
        let promise = write_fn
            .call1(&clipboard, &JsValue::from_str(text))
            .map_err(|_| unavailable())?
            .dyn_into::<Promise>()
            .map_err(|_| unavailable())?;
        JsFuture::from(promise).await.map(|_| ()).map_err(|err| {
            console::warn!("clipboard write rejected", err);
            ServiceError::Rejected("clipboard write rejected".to_string())
        })
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct BrowserClock;

impl Clock for BrowserClock {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn now_ms(&self) -> u64 {
        Date::now().max(0.0) as u64
    }

    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Pushes notices onto the store's toast queue.
#[derive(Clone)]
pub(crate) struct StoreNotifier {
    dispatch: Dispatch<AppStore>,
}

impl StoreNotifier {
    pub(crate) fn new() -> Self {
        Self {
            dispatch: Dispatch::<AppStore>::new(),
        }
    }
}

impl Notifier for StoreNotifier {
    fn notify(&self, notice: Notice) {
        self.dispatch.reduce_mut(move |store| {
            store.toasts.push(notice);
        });
    }
}
