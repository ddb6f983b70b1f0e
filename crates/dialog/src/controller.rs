use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::cursor::{Hide, Show};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::{Frame, Terminal};

use crate::error::DialogError;

/// Number of frames in the open animation.
pub(crate) const REVEAL_STEPS: u8 = 10;
/// Delay between reveal frames, ~100ms total animation.
const REVEAL_FRAME_DELAY: Duration = Duration::from_millis(10);
/// Event poll interval for the blocking wait. Bounds CPU use while keeping
/// the dialog responsive; the wait itself is unbounded.
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Tagged outcome of one dialog interaction. A dedicated variant for
/// cancellation means no legitimate value, however falsy, can collide with
/// "the user backed out".
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Outcome<T> {
    Value(T),
    Cancelled,
}

/// One-shot result slot. Key handlers are the single writer, the wait loop
/// the single reader; writes after the first are ignored.
pub(crate) struct ResultCell<T> {
    slot: Option<Outcome<T>>,
}

impl<T> ResultCell<T> {
    fn new() -> Self {
        Self { slot: None }
    }

    pub fn set(&mut self, outcome: Outcome<T>) {
        if self.slot.is_none() {
            self.slot = Some(outcome);
        }
    }

    fn is_set(&self) -> bool {
        self.slot.is_some()
    }

    fn take(self) -> Option<Outcome<T>> {
        self.slot
    }
}

/// Restores the terminal the dialog claimed. Idempotent, and every step is
/// best-effort: teardown runs on all exit paths, including error paths, and
/// must never fail on top of whatever closed the dialog.
struct RestoreGuard {
    restored: bool,
}

impl RestoreGuard {
    fn new() -> Self {
        Self { restored: false }
    }

    fn restore(&mut self) {
        if self.restored {
            return;
        }
        self.restored = true;
        let mut stdout = io::stdout();
        // Leave the alternate screen first so the dialog is perceived as
        // closed before the slower cleanup runs.
        let _ = stdout.execute(LeaveAlternateScreen);
        let _ = stdout.execute(Show);
        let _ = disable_raw_mode();
    }
}

impl Drop for RestoreGuard {
    fn drop(&mut self) {
        self.restore();
    }
}

/// Drive one modal dialog to completion.
///
/// Lifecycle: claim the terminal before anything is drawn (the user never
/// sees a half-built frame), step through the reveal animation, then poll
/// events cooperatively until a key handler writes the result cell. The
/// terminal is restored before the outcome is classified, on every path.
pub(crate) fn run_modal<S, T>(
    state: &mut S,
    mut draw: impl FnMut(&mut Frame, &S, u8),
    mut on_key: impl FnMut(&mut S, KeyEvent, &mut ResultCell<T>),
) -> Result<Outcome<T>, DialogError> {
    enable_raw_mode()?;
    let mut guard = RestoreGuard::new();
    let mut terminal = claim_terminal()?;

    // Cosmetic stand-in for a native window-open animation: the popup fades
    // from the background color to full intensity over a fixed frame count.
    for step in 1..=REVEAL_STEPS {
        terminal.draw(|frame| draw(frame, state, step))?;
        std::thread::sleep(REVEAL_FRAME_DELAY);
    }

    let mut cell = ResultCell::new();
    while !cell.is_set() {
        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    on_key(state, key, &mut cell);
                }
                _ => {}
            }
            terminal.draw(|frame| draw(frame, state, REVEAL_STEPS))?;
        }
    }

    guard.restore();
    // The loop only exits once the cell is populated.
    Ok(cell.take().unwrap_or(Outcome::Cancelled))
}

fn claim_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>, DialogError> {
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(Hide)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}
