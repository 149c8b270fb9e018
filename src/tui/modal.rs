// Modal system for TUI overlays
//
// Self-contained modal dialogs that handle their own input and return actions.
// App just holds Option<Modal>, input routing acts on returned ModalAction.

use crate::menu::{EntryId, ValidationError};
use crossterm::event::KeyCode;

/// Actions returned by modal input handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalAction {
    /// Input consumed, no state change needed
    None,
    /// Dismiss the modal without doing anything
    Close,
    /// Carry out what the modal asked about, then close it
    Confirm,
}

/// Available modal types
#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    /// Keyboard shortcuts
    Help,
    /// Blocking validation alert after a rejected submit
    Alert(ValidationError),
    /// "Are you sure you want to remove this item?"
    ConfirmRemove { id: EntryId, name: String },
    /// "Clear all fields?" on the add form
    ConfirmClear,
}

impl Modal {
    pub fn title(&self) -> &'static str {
        match self {
            Modal::Help => " Help ",
            Modal::Alert(_) => " Validation ",
            Modal::ConfirmRemove { .. } => " Remove item ",
            Modal::ConfirmClear => " Clear form ",
        }
    }

    /// Handle keyboard input, return action for caller to execute
    pub fn handle_input(&self, key: KeyCode) -> ModalAction {
        match self {
            Modal::Help => match key {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => ModalAction::Close,
                _ => ModalAction::None,
            },
            Modal::Alert(_) => match key {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char(' ') => ModalAction::Close,
                _ => ModalAction::None,
            },
            Modal::ConfirmRemove { .. } | Modal::ConfirmClear => match key {
                KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => ModalAction::Confirm,
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => ModalAction::Close,
                _ => ModalAction::None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirm_keys() {
        let modal = Modal::ConfirmClear;
        assert_eq!(modal.handle_input(KeyCode::Char('y')), ModalAction::Confirm);
        assert_eq!(modal.handle_input(KeyCode::Enter), ModalAction::Confirm);
        assert_eq!(modal.handle_input(KeyCode::Esc), ModalAction::Close);
        assert_eq!(modal.handle_input(KeyCode::Char('x')), ModalAction::None);
    }

    #[test]
    fn test_alert_only_closes() {
        let modal = Modal::Alert(ValidationError::MissingPrice);
        assert_eq!(modal.handle_input(KeyCode::Enter), ModalAction::Close);
        assert_eq!(modal.handle_input(KeyCode::Char('y')), ModalAction::None);
    }
}
