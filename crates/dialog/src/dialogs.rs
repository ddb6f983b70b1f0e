use crate::controller::{run_modal, Outcome};
use crate::error::DialogError;
use crate::handlers;
use crate::state::{AlertKind, AlertState, ConfirmState, PromptState, SelectState};
use crate::text::truncate_message;
use crate::ui;

/// Configuration for [`selection`].
#[derive(Debug, Clone)]
pub struct SelectionOptions {
    /// Window title.
    pub title: String,
    /// Label shown for the confirm action.
    pub confirm_label: String,
    /// Label shown for the cancel action.
    pub cancel_label: String,
    /// Allow more than one item to be selected.
    pub multiple: bool,
    /// Allow confirming with nothing selected.
    pub optional: bool,
}

impl Default for SelectionOptions {
    fn default() -> Self {
        Self {
            title: "Selection Required".to_string(),
            confirm_label: "Confirm".to_string(),
            cancel_label: "Cancel".to_string(),
            multiple: false,
            optional: false,
        }
    }
}

/// Validate and truncate the dialog message. Runs before any terminal state
/// is touched, so an invalid call has no visible side effect.
fn require_message(message: &str) -> Result<String, DialogError> {
    if message.is_empty() {
        return Err(DialogError::InvalidArgument(
            "a non-empty message is required".to_string(),
        ));
    }
    Ok(truncate_message(message))
}

/// Show a modal text prompt and block until the user answers.
///
/// Returns the trimmed input. An explicitly confirmed empty entry returns
/// `Ok("")`; backing out returns [`DialogError::Cancelled`].
pub fn prompt(message: &str, default_text: &str) -> Result<String, DialogError> {
    let message = require_message(message)?;
    let mut state = PromptState::new(message, default_text);
    let outcome = run_modal(&mut state, ui::draw_prompt, |state, key, cell| {
        if let Some(outcome) = handlers::handle_prompt_key(state, key) {
            cell.set(outcome);
        }
    })?;
    match outcome {
        Outcome::Value(text) => Ok(text),
        Outcome::Cancelled => Err(DialogError::Cancelled),
    }
}

/// Show a modal yes/no question and block until the user answers.
///
/// Every way of backing out (Escape, the No button, Ctrl+C) collapses to
/// `Ok(false)`.
pub fn confirm(message: &str) -> Result<bool, DialogError> {
    let message = require_message(message)?;
    let mut state = ConfirmState::new(message);
    let outcome = run_modal(&mut state, ui::draw_confirm, |state, key, cell| {
        if let Some(outcome) = handlers::handle_confirm_key(state, key) {
            cell.set(outcome);
        }
    })?;
    match outcome {
        Outcome::Value(answer) => Ok(answer),
        Outcome::Cancelled => Ok(false),
    }
}

/// Show a modal list selection and block until the user answers.
///
/// The returned items preserve the caller-provided candidate order.
/// Confirming with nothing selected fails with
/// [`DialogError::SelectionRequired`] unless `options.optional` is set;
/// backing out fails with [`DialogError::Cancelled`].
pub fn selection(
    message: &str,
    candidates: &[String],
    options: &SelectionOptions,
) -> Result<Vec<String>, DialogError> {
    let message = require_message(message)?;
    if candidates.is_empty() && !options.optional {
        return Err(DialogError::InvalidArgument(
            "an empty candidate list requires an optional selection".to_string(),
        ));
    }
    let mut state = SelectState::new(
        options.title.clone(),
        message,
        options.confirm_label.clone(),
        options.cancel_label.clone(),
        candidates.to_vec(),
        options.multiple,
        options.optional,
    );
    let outcome = run_modal(&mut state, ui::draw_select, |state, key, cell| {
        if let Some(outcome) = handlers::handle_select_key(state, key) {
            cell.set(outcome);
        }
    })?;
    match outcome {
        Outcome::Value(()) => finish_selection(&state),
        Outcome::Cancelled => Err(DialogError::Cancelled),
    }
}

fn finish_selection(state: &SelectState) -> Result<Vec<String>, DialogError> {
    let selected = state.selected_items();
    if selected.is_empty() && !state.optional {
        return Err(DialogError::SelectionRequired);
    }
    Ok(selected)
}

/// Show a modal alert and block until it is acknowledged. Fire-and-forget:
/// there is no cancellation path distinct from acknowledgment.
pub fn alert(
    kind: AlertKind,
    title: Option<&str>,
    message: &str,
    icon: Option<&str>,
) -> Result<(), DialogError> {
    let message = require_message(message)?;
    let mut state = AlertState::new(kind, title, message, icon);
    run_modal(&mut state, ui::draw_alert, |state, key, cell| {
        if let Some(outcome) = handlers::handle_alert_key(state, key) {
            cell.set(outcome);
        }
    })?;
    Ok(())
}
