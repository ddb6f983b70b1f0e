use std::io;

use thiserror::Error;

/// Errors surfaced by the dialog functions.
///
/// Cancellation is an error on purpose: it lets callers of [`crate::prompt`]
/// and [`crate::selection`] tell "the user confirmed an empty value" apart
/// from "the user backed out".
#[derive(Debug, Error)]
pub enum DialogError {
    /// The dialog was asked for with arguments that can never produce a
    /// result, e.g. an empty message. Raised before any terminal state is
    /// touched.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The user dismissed the dialog (Escape, cancel button, or Ctrl+C)
    /// without providing a value.
    #[error("dialog was cancelled")]
    Cancelled,

    /// Confirmation was attempted with nothing selected in a dialog that
    /// requires a selection.
    #[error("a selection is required")]
    SelectionRequired,

    /// The terminal could not be claimed or driven.
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
}
