//! Service context shared with every view.
//!
//! # Design
//! - Create exactly one set of clients per app boot.
//! - Views depend on the port traits, never on the concrete clients.

use crate::config::UiConfig;
use crate::core::ports::{
    AuthGateway, Clipboard, Clock, DuplicationService, LookupService, Notifier, TokenStore,
};
use crate::services::account::AccountClient;
use crate::services::browser::{BrowserClipboard, BrowserClock, StoreNotifier};
use crate::services::webhooks::WebhookClient;
use std::rc::Rc;

/// Port implementations handed to the feature views.
#[derive(Clone)]
pub(crate) struct ServicesCtx {
    pub lookup: Rc<dyn LookupService>,
    pub duplication: Rc<dyn DuplicationService>,
    pub tokens: Rc<dyn TokenStore>,
    pub auth: Rc<dyn AuthGateway>,
    pub clipboard: Rc<dyn Clipboard>,
    pub clock: Rc<dyn Clock>,
    pub notifier: Rc<dyn Notifier>,
}

impl ServicesCtx {
    /// Wire the browser clients for a validated configuration.
    pub(crate) fn new(config: &UiConfig) -> Self {
        let webhooks = Rc::new(WebhookClient::new(
            config.lookup_url.clone(),
            config.duplicate_url.clone(),
        ));
        let account = Rc::new(AccountClient::new(
            &config.auth_url,
            config.auth_anon_key.clone(),
        ));
        Self {
            lookup: webhooks.clone(),
            duplication: webhooks,
            tokens: account.clone(),
            auth: account,
            clipboard: Rc::new(BrowserClipboard),
            clock: Rc::new(BrowserClock),
            notifier: Rc::new(StoreNotifier::new()),
        }
    }
}

impl PartialEq for ServicesCtx {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.lookup, &other.lookup) && Rc::ptr_eq(&self.auth, &other.auth)
    }
}
