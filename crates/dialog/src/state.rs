use crate::input::InputState;

/// Alert flavors, each with a default icon glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Info,
    Success,
    Warning,
    Error,
}

impl AlertKind {
    pub fn default_icon(self) -> &'static str {
        match self {
            AlertKind::Info => "ℹ",
            AlertKind::Success => "✔",
            AlertKind::Warning => "⚠",
            AlertKind::Error => "✘",
        }
    }

    pub(crate) fn default_title(self) -> &'static str {
        match self {
            AlertKind::Info => "Info",
            AlertKind::Success => "Success",
            AlertKind::Warning => "Warning",
            AlertKind::Error => "Error",
        }
    }
}

/// Which of the two action buttons currently has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ButtonFocus {
    Confirm,
    Cancel,
}

impl ButtonFocus {
    pub fn toggled(self) -> Self {
        match self {
            ButtonFocus::Confirm => ButtonFocus::Cancel,
            ButtonFocus::Cancel => ButtonFocus::Confirm,
        }
    }
}

pub(crate) struct PromptState {
    pub title: String,
    pub message: String,
    pub input: InputState,
}

impl PromptState {
    pub fn new(message: String, default_text: &str) -> Self {
        Self {
            title: "Input Required".to_string(),
            message,
            input: InputState::from_text(default_text),
        }
    }
}

pub(crate) struct ConfirmState {
    pub title: String,
    pub message: String,
    pub focused: ButtonFocus,
}

impl ConfirmState {
    pub fn new(message: String) -> Self {
        Self {
            title: "Confirm".to_string(),
            message,
            focused: ButtonFocus::Confirm,
        }
    }
}

/// Per-item render state. Selected wins over focused when both apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ItemVisual {
    Selected,
    Focused,
    Plain,
}

pub(crate) struct SelectState {
    pub title: String,
    pub message: String,
    pub confirm_label: String,
    pub cancel_label: String,
    pub items: Vec<String>,
    pub chosen: Vec<bool>,
    pub focused: usize,
    pub multi: bool,
    pub optional: bool,
}

impl SelectState {
    pub fn new(
        title: String,
        message: String,
        confirm_label: String,
        cancel_label: String,
        items: Vec<String>,
        multi: bool,
        optional: bool,
    ) -> Self {
        let chosen = vec![false; items.len()];
        Self {
            title,
            message,
            confirm_label,
            cancel_label,
            items,
            chosen,
            focused: 0,
            multi,
            optional,
        }
    }

    pub fn move_up(&mut self) {
        let len = self.items.len();
        if len == 0 {
            return;
        }
        self.focused = (self.focused + len - 1) % len;
    }

    pub fn move_down(&mut self) {
        let len = self.items.len();
        if len == 0 {
            return;
        }
        self.focused = (self.focused + 1) % len;
    }

    /// Toggle the focused item. Single-select clears the set first, so the
    /// focused item always ends up as the sole selection.
    pub fn toggle_focused(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let index = self.focused;
        if self.multi {
            self.chosen[index] = !self.chosen[index];
        } else {
            for slot in &mut self.chosen {
                *slot = false;
            }
            self.chosen[index] = true;
        }
    }

    pub fn visual(&self, index: usize) -> ItemVisual {
        if self.chosen.get(index).copied().unwrap_or(false) {
            ItemVisual::Selected
        } else if index == self.focused {
            ItemVisual::Focused
        } else {
            ItemVisual::Plain
        }
    }

    /// Selected items in the caller-provided candidate order.
    pub fn selected_items(&self) -> Vec<String> {
        self.items
            .iter()
            .zip(self.chosen.iter())
            .filter(|(_, chosen)| **chosen)
            .map(|(item, _)| item.clone())
            .collect()
    }
}

pub(crate) struct AlertState {
    pub title: String,
    pub message: String,
    pub icon: String,
}

impl AlertState {
    pub fn new(kind: AlertKind, title: Option<&str>, message: String, icon: Option<&str>) -> Self {
        Self {
            title: title.unwrap_or_else(|| kind.default_title()).to_string(),
            message,
            icon: icon.unwrap_or_else(|| kind.default_icon()).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AlertKind, AlertState, ItemVisual, SelectState};

    fn sample_select(multi: bool) -> SelectState {
        SelectState::new(
            "Selection Required".to_string(),
            "Pick something".to_string(),
            "Confirm".to_string(),
            "Cancel".to_string(),
            vec!["alpha".to_string(), "beta".to_string(), "gamma".to_string()],
            multi,
            false,
        )
    }

    #[test]
    fn single_select_keeps_at_most_one_item() {
        let mut state = sample_select(false);
        state.toggle_focused();
        state.move_down();
        state.toggle_focused();
        assert_eq!(state.chosen, vec![false, true, false]);
        assert_eq!(state.selected_items(), vec!["beta".to_string()]);
    }

    #[test]
    fn multi_select_toggles_independently() {
        let mut state = sample_select(true);
        state.toggle_focused();
        state.move_down();
        state.move_down();
        state.toggle_focused();
        assert_eq!(state.selected_items(), vec!["alpha".to_string(), "gamma".to_string()]);
        state.toggle_focused();
        assert_eq!(state.selected_items(), vec!["alpha".to_string()]);
    }

    #[test]
    fn focus_navigation_wraps_circularly() {
        let mut state = sample_select(false);
        state.move_up();
        assert_eq!(state.focused, 2);
        state.move_down();
        assert_eq!(state.focused, 0);
        state.move_down();
        state.move_down();
        state.move_down();
        assert_eq!(state.focused, 0);
    }

    #[test]
    fn selected_visual_wins_over_focus() {
        let mut state = sample_select(true);
        state.toggle_focused();
        assert_eq!(state.visual(0), ItemVisual::Selected);
        state.move_down();
        assert_eq!(state.visual(0), ItemVisual::Selected);
        assert_eq!(state.visual(1), ItemVisual::Focused);
        assert_eq!(state.visual(2), ItemVisual::Plain);
    }

    #[test]
    fn empty_list_navigation_is_a_noop() {
        let mut state = SelectState::new(
            "t".to_string(),
            "m".to_string(),
            "ok".to_string(),
            "no".to_string(),
            Vec::new(),
            true,
            true,
        );
        state.move_up();
        state.move_down();
        state.toggle_focused();
        assert_eq!(state.focused, 0);
        assert!(state.selected_items().is_empty());
    }

    #[test]
    fn selected_items_preserve_candidate_order() {
        let mut state = sample_select(true);
        state.move_down();
        state.move_down();
        state.toggle_focused();
        state.move_up();
        state.move_up();
        state.toggle_focused();
        assert_eq!(state.selected_items(), vec!["alpha".to_string(), "gamma".to_string()]);
    }

    #[test]
    fn alert_defaults_follow_the_kind() {
        let state = AlertState::new(AlertKind::Warning, None, "careful".to_string(), None);
        assert_eq!(state.title, "Warning");
        assert_eq!(state.icon, "⚠");

        let overridden =
            AlertState::new(AlertKind::Error, Some("Oh no"), "boom".to_string(), Some("!!"));
        assert_eq!(overridden.title, "Oh no");
        assert_eq!(overridden.icon, "!!");
    }
}
