//! App-wide yewdux store slices.
//!
//! # Design
//! - Keep shared UI state in one store to avoid ad-hoc contexts.
//! - Use small, focused slices so reducers stay predictable.
//! - The controller slice alone decides which view renders.

use crate::core::auth::Session;
use crate::features::duplicate::actions::DuplicateAction;
use crate::features::duplicate::state::DuplicateState;
use crate::features::search::state::SearchState;
use crate::features::token::state::{TokenAction, TokenState};
use crate::models::{Notice, Toast};
use yewdux::store::Store;

/// Global application store for shared state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Store)]
pub struct AppStore {
    /// Signed-in operator, if any.
    pub session: Option<Session>,
    /// Token and ad-set selection.
    pub controller: ControllerState,
    /// Search view state.
    pub search: SearchState,
    /// Duplication view state.
    pub duplicate: DuplicateState,
    /// Token settings dialog state.
    pub token: TokenState,
    /// Pending notifications.
    pub toasts: ToastQueue,
}

/// Top-level controller state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ControllerState {
    /// API token sent with every webhook request.
    pub token: String,
    /// Ad-set chosen in the search view.
    pub selected_ad_set_id: Option<String>,
}

/// Which view the controller renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActiveView {
    /// Account search.
    Search,
    /// Duplication form seeded with an ad-set id.
    Duplicate {
        /// Selected ad-set id.
        seed: String,
    },
}

impl ControllerState {
    /// View derived from the selection.
    #[must_use]
    pub fn active_view(&self) -> ActiveView {
        self.selected_ad_set_id
            .as_ref()
            .map_or(ActiveView::Search, |seed| ActiveView::Duplicate {
                seed: seed.clone(),
            })
    }
}

/// FIFO of visible notifications.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastQueue {
    next_id: u64,
    /// Visible toasts, oldest first.
    pub items: Vec<Toast>,
}

impl ToastQueue {
    /// Enqueue a notice and return its toast id.
    pub fn push(&mut self, notice: Notice) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast { id, notice });
        id
    }

    /// Remove a toast; unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|toast| toast.id != id);
    }
}

impl AppStore {
    /// Switch to the duplication view seeded with `ad_set_id`.
    ///
    /// The search view unmounts, so its state is dropped.
    pub fn select_ad_set(&mut self, ad_set_id: &str) {
        self.controller.selected_ad_set_id = Some(ad_set_id.to_string());
        self.duplicate
            .apply(DuplicateAction::Seed(ad_set_id.to_string()));
        self.search = SearchState::default();
    }

    /// Return to the search view with no residual selection.
    pub fn back(&mut self) {
        self.controller.selected_ad_set_id = None;
        self.duplicate = DuplicateState::default();
    }

    /// Replace the controller token.
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.controller.token = token.into();
    }

    /// Record a fresh session.
    pub fn sign_in(&mut self, session: Session) {
        self.session = Some(session);
    }

    /// Whether `user_id` owns the current session.
    #[must_use]
    pub fn is_signed_in_as(&self, user_id: &str) -> bool {
        self.session
            .as_ref()
            .is_some_and(|session| session.user_id == user_id)
    }

    /// Apply a token action started on behalf of `user_id`.
    ///
    /// Dropped when that user is no longer signed in, so a load that
    /// resolves after sign-out cannot leak into the next session.
    pub fn apply_token_for(&mut self, user_id: &str, action: TokenAction) -> bool {
        if !self.is_signed_in_as(user_id) {
            return false;
        }
        self.token.apply(action);
        true
    }

    /// Replace the controller token if `user_id` still owns the session.
    pub fn set_token_for(&mut self, user_id: &str, token: impl Into<String>) -> bool {
        if !self.is_signed_in_as(user_id) {
            return false;
        }
        self.set_token(token);
        true
    }

    /// Forget the session and everything tied to it. Toasts survive.
    pub fn sign_out(&mut self) {
        let toasts = std::mem::take(&mut self.toasts);
        *self = Self {
            toasts,
            ..Self::default()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NoticeKind;

    fn session() -> Session {
        Session {
            user_id: "u-1".into(),
            email: "ops@example.com".into(),
            access_token: "jwt".into(),
        }
    }

    #[test]
    fn select_then_back_returns_to_search() {
        let mut store = AppStore::default();
        assert_eq!(store.controller.active_view(), ActiveView::Search);
        store.select_ad_set("a-1");
        assert_eq!(
            store.controller.active_view(),
            ActiveView::Duplicate { seed: "a-1".into() }
        );
        assert_eq!(store.duplicate.ad_set_id, "a-1");
        store.back();
        assert_eq!(store.controller.active_view(), ActiveView::Search);
        assert_eq!(store.controller.selected_ad_set_id, None);
        assert_eq!(store.duplicate, DuplicateState::default());
    }

    #[test]
    fn reselecting_overwrites_the_seed() {
        let mut store = AppStore::default();
        store.select_ad_set("a-1");
        store
            .duplicate
            .apply(DuplicateAction::AdSetInput("edited".into()));
        store.select_ad_set("a-2");
        assert_eq!(store.duplicate.ad_set_id, "a-2");
    }

    #[test]
    fn token_survives_view_switches() {
        let mut store = AppStore::default();
        store.set_token("EAAB");
        store.select_ad_set("a-1");
        store.back();
        assert_eq!(store.controller.token, "EAAB");
    }

    #[test]
    fn sign_out_clears_session_token_and_selection() {
        let mut store = AppStore::default();
        store.sign_in(session());
        store.set_token("EAAB");
        store.select_ad_set("a-1");
        store.toasts.push(Notice::new(NoticeKind::Info, "t", "d"));
        store.sign_out();
        assert_eq!(store.session, None);
        assert!(store.controller.token.is_empty());
        assert_eq!(store.controller.active_view(), ActiveView::Search);
        assert_eq!(store.toasts.items.len(), 1);
    }

    #[test]
    fn token_results_for_a_previous_user_are_dropped() {
        let mut store = AppStore::default();
        store.sign_in(session());
        store.sign_out();
        store.sign_in(Session {
            user_id: "u-2".into(),
            email: "next@example.com".into(),
            access_token: "jwt-2".into(),
        });

        assert!(!store.apply_token_for("u-1", TokenAction::Loaded(Some("EAAB-old".into()))));
        assert!(!store.set_token_for("u-1", "EAAB-old"));
        assert!(store.token.draft.is_empty());
        assert!(!store.token.has_token);
        assert!(store.controller.token.is_empty());

        assert!(store.set_token_for("u-2", "EAAB-new"));
        assert_eq!(store.controller.token, "EAAB-new");
    }

    #[test]
    fn toast_ids_are_unique_and_dismissable() {
        let mut queue = ToastQueue::default();
        let first = queue.push(Notice::new(NoticeKind::Info, "a", ""));
        let second = queue.push(Notice::new(NoticeKind::Error, "b", ""));
        assert_ne!(first, second);
        queue.dismiss(first);
        queue.dismiss(999);
        assert_eq!(queue.items.len(), 1);
        assert_eq!(queue.items[0].id, second);
    }
}
