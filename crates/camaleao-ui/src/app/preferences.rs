//! Persistence helpers for the app shell.

use crate::core::auth::Session;
use crate::i18n::{DEFAULT_LOCALE, LocaleCode};
use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::window;
use serde::Serialize;

pub(crate) const LOCALE_KEY: &str = "camaleao.locale";
pub(crate) const SESSION_KEY: &str = "camaleao.session";

pub(crate) fn load_locale() -> LocaleCode {
    if let Ok(value) = LocalStorage::get::<String>(LOCALE_KEY)
        && let Some(locale) = LocaleCode::from_lang_tag(&value)
    {
        return locale;
    }
    window()
        .navigator()
        .language()
        .and_then(|tag| LocaleCode::from_lang_tag(&tag))
        .unwrap_or(DEFAULT_LOCALE)
}

pub(crate) fn persist_locale(locale: LocaleCode) {
    set_storage(LOCALE_KEY, locale.code());
}

pub(crate) fn load_session() -> Option<Session> {
    LocalStorage::get::<Session>(SESSION_KEY)
        .ok()
        .filter(|session| !session.access_token.trim().is_empty())
}

pub(crate) fn persist_session(session: &Session) {
    set_storage(SESSION_KEY, session);
}

pub(crate) fn clear_session() {
    LocalStorage::delete(SESSION_KEY);
}

fn set_storage<T: Serialize>(key: &'static str, value: T) {
    if let Err(err) = LocalStorage::set(key, value) {
        log_storage_error("set", key, &err.to_string());
    }
}

fn log_storage_error(operation: &'static str, key: &'static str, detail: &str) {
    console::error!("storage operation failed", operation, key, detail);
}
