//! Modal dialogs shown by the File menu actions.

use rfd::{MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};

const SAVE_LABEL: &str = "Yes (Save)";
const DISCARD_LABEL: &str = "No (Don't Save)";
const CANCEL_LABEL: &str = "Cancel";

/// Answer to the "save before New?" prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NewChoice {
    SaveAndClear,
    DiscardAndClear,
    Cancel,
}

/// Blocking user prompts. Each call returns only after the user answers.
pub trait Dialogs {
    fn confirm_new(&mut self) -> NewChoice;

    /// Acknowledgement after a save or load attempt.
    fn report(&mut self, title: &str, ok: bool, message: &str);
}

/// Native message boxes.
#[derive(Default)]
pub struct NativeDialogs;

impl Dialogs for NativeDialogs {
    fn confirm_new(&mut self) -> NewChoice {
        let result = MessageDialog::new()
            .set_level(MessageLevel::Info)
            .set_title("New Project")
            .set_description("Do you want to save the current project before creating a new one?")
            .set_buttons(MessageButtons::YesNoCancelCustom(
                SAVE_LABEL.to_owned(),
                DISCARD_LABEL.to_owned(),
                CANCEL_LABEL.to_owned(),
            ))
            .show();
        choice_from_result(&result)
    }

    fn report(&mut self, title: &str, ok: bool, message: &str) {
        let level = if ok {
            MessageLevel::Info
        } else {
            MessageLevel::Error
        };
        MessageDialog::new()
            .set_level(level)
            .set_title(title)
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show();
    }
}

/// Some backends report custom buttons by label, others as plain Yes/No.
fn choice_from_result(result: &MessageDialogResult) -> NewChoice {
    match result {
        MessageDialogResult::Yes => NewChoice::SaveAndClear,
        MessageDialogResult::No => NewChoice::DiscardAndClear,
        MessageDialogResult::Custom(label) if label == SAVE_LABEL => NewChoice::SaveAndClear,
        MessageDialogResult::Custom(label) if label == DISCARD_LABEL => NewChoice::DiscardAndClear,
        _ => NewChoice::Cancel,
    }
}
