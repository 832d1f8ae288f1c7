//! Duplication form state.

use crate::features::duplicate::actions::DuplicateAction;

/// Fields of the duplication form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DuplicateState {
    /// Ad-set id field.
    pub ad_set_id: String,
    /// Quantity field, as typed.
    pub quantity: String,
    /// A request is in flight; inputs and trigger are disabled.
    pub submitting: bool,
}

impl DuplicateState {
    /// Apply an action.
    pub fn apply(&mut self, action: DuplicateAction) {
        match action {
            DuplicateAction::Seed(id) | DuplicateAction::AdSetInput(id) => self.ad_set_id = id,
            DuplicateAction::QuantityInput(value) => self.quantity = value,
            DuplicateAction::Preset(preset) => self.quantity = preset.to_string(),
            DuplicateAction::Started => self.submitting = true,
            DuplicateAction::Finished(outcome) => {
                self.submitting = false;
                if outcome.clears_form() {
                    self.ad_set_id.clear();
                    self.quantity.clear();
                }
            }
        }
    }
}
