//! Token settings dialog state.
//!
//! # Design
//! - `draft` is what the input shows; the controller keeps the active token.
//! - Loading and saving are separate flags so the settings button and the
//!   save button disable independently.

/// Events applied to [`TokenState`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenAction {
    /// Show the dialog.
    Open,
    /// Hide the dialog without saving.
    Close,
    /// Token input changed.
    DraftInput(String),
    /// Flip masked/plain display.
    ToggleReveal,
    /// Token load started.
    LoadStarted,
    /// Token load finished; `None` leaves the token empty.
    Loaded(Option<String>),
    /// Token write started.
    SaveStarted,
    /// Token write finished; `Some` carries the stored token.
    SaveFinished(Option<String>),
}

/// Dialog fields and in-flight flags.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenState {
    /// Token input text.
    pub draft: String,
    /// Initial load in flight.
    pub loading: bool,
    /// Save in flight.
    pub saving: bool,
    /// A token is stored for the current user.
    pub has_token: bool,
    /// Dialog visibility.
    pub open: bool,
    /// Show the token in plain text.
    pub reveal: bool,
}

impl TokenState {
    /// Apply an action.
    pub fn apply(&mut self, action: TokenAction) {
        match action {
            TokenAction::Open => self.open = true,
            TokenAction::Close => {
                self.open = false;
                self.reveal = false;
            }
            TokenAction::DraftInput(value) => self.draft = value,
            TokenAction::ToggleReveal => self.reveal = !self.reveal,
            TokenAction::LoadStarted => self.loading = true,
            TokenAction::Loaded(token) => {
                self.loading = false;
                self.has_token = token.is_some();
                self.draft = token.unwrap_or_default();
            }
            TokenAction::SaveStarted => self.saving = true,
            TokenAction::SaveFinished(saved) => {
                self.saving = false;
                if let Some(token) = saved {
                    self.draft = token;
                    self.has_token = true;
                    self.open = false;
                    self.reveal = false;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_populates_draft_and_mark() {
        let mut state = TokenState::default();
        state.apply(TokenAction::LoadStarted);
        assert!(state.loading);
        state.apply(TokenAction::Loaded(Some("EAAB".into())));
        assert!(!state.loading);
        assert!(state.has_token);
        assert_eq!(state.draft, "EAAB");
    }

    #[test]
    fn missing_token_leaves_draft_empty() {
        let mut state = TokenState::default();
        state.apply(TokenAction::LoadStarted);
        state.apply(TokenAction::Loaded(None));
        assert!(!state.has_token);
        assert!(state.draft.is_empty());
    }

    #[test]
    fn failed_save_keeps_dialog_open() {
        let mut state = TokenState::default();
        state.apply(TokenAction::Open);
        state.apply(TokenAction::DraftInput("EAAB".into()));
        state.apply(TokenAction::SaveStarted);
        state.apply(TokenAction::SaveFinished(None));
        assert!(state.open);
        assert!(!state.saving);
        assert!(!state.has_token);
    }

    #[test]
    fn saved_token_closes_and_masks() {
        let mut state = TokenState::default();
        state.apply(TokenAction::Open);
        state.apply(TokenAction::ToggleReveal);
        state.apply(TokenAction::DraftInput(" EAAB ".into()));
        state.apply(TokenAction::SaveStarted);
        state.apply(TokenAction::SaveFinished(Some("EAAB".into())));
        assert!(!state.open);
        assert!(!state.reveal);
        assert!(state.has_token);
        assert_eq!(state.draft, "EAAB");
    }
}
