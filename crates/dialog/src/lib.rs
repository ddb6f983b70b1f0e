//! Blocking modal dialogs for terminal applications.
//!
//! Each dialog call claims the terminal (raw mode + alternate screen), draws a
//! centered popup, pumps crossterm events until the user answers, restores the
//! terminal, and returns a typed result. Exactly one dialog is active at a
//! time; there is no async surface and no stacking.
//!
//! ```no_run
//! use termdialog::{confirm, prompt, DialogError};
//!
//! fn ask() -> Result<(), DialogError> {
//!     let name = prompt("What is your name?", "")?;
//!     if confirm(&format!("Save profile for {name}?"))? {
//!         // ...
//!     }
//!     Ok(())
//! }
//! ```

mod controller;
mod dialogs;
mod error;
mod handlers;
mod input;
mod picker;
mod state;
mod text;
mod ui;

pub use crate::dialogs::{alert, confirm, prompt, selection, SelectionOptions};
pub use crate::error::DialogError;
pub use crate::picker::{
    file_picker, folder_picker, FilePickerOptions, FolderPickerOptions,
};
pub use crate::state::AlertKind;
