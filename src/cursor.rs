//! Blinking caret embedded by the [`input`](crate::input) widget.
//!
//! The caret supports blinking, static, and hidden modes and is themed with
//! Lip Gloss styles. It is a sub-component: the owning widget forwards
//! messages to [`Model::update`] and splices [`Model::view`] into its own
//! output at the cursor position.
//!
//! Blink ticks carry the owning instance's id plus a monotonically increasing
//! tag, so ticks scheduled before a focus change or mode switch are ignored
//! when they land.

use bubbletea_rs::{tick, Cmd, Msg};
use lipgloss_extras::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

// Instance ids keep blink ticks from one caret out of another.
static LAST_ID: AtomicUsize = AtomicUsize::new(0);

fn next_id() -> usize {
    LAST_ID.fetch_add(1, Ordering::Relaxed) + 1
}

const DEFAULT_BLINK_SPEED: Duration = Duration::from_millis(530);

/// Message that kicks off blinking; emitted by [`blink`].
#[derive(Debug, Clone)]
pub struct InitialBlinkMsg;

/// Message that toggles the blink phase of one caret instance.
#[derive(Debug, Clone)]
pub struct BlinkMsg {
    /// Id of the caret this tick targets.
    pub id: usize,
    /// Scheduling tag; stale tags are dropped.
    pub tag: usize,
}

/// How the caret behaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// The caret blinks at the configured speed.
    Blink,
    /// The caret is shown steadily.
    Static,
    /// The caret is not shown.
    Hide,
}

/// Caret state: blink speed, styles, and the character underneath.
#[derive(Debug, Clone)]
pub struct Model {
    /// Time between blink phase changes.
    pub blink_speed: Duration,
    /// Style of the caret block while shown.
    pub style: Style,
    /// Style of the character underneath while the block is hidden.
    pub text_style: Style,

    glyph: String,
    id: usize,
    focus: bool,
    // True while the blink cycle has the block turned off.
    block_hidden: bool,
    tick_tag: usize,
    mode: Mode,
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

impl Model {
    /// Creates a caret with default settings.
    pub fn new() -> Self {
        Self {
            blink_speed: DEFAULT_BLINK_SPEED,
            style: Style::new(),
            text_style: Style::new(),
            glyph: " ".into(),
            id: next_id(),
            focus: false,
            block_hidden: true,
            tick_tag: 0,
            mode: Mode::Blink,
        }
    }

    /// Handles blink messages forwarded by the owning widget.
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        if self.mode != Mode::Blink || !self.focus {
            return None;
        }
        if msg.downcast_ref::<InitialBlinkMsg>().is_some() {
            return self.blink_cmd();
        }

        let blink_msg = msg.downcast_ref::<BlinkMsg>()?;
        if blink_msg.id != self.id || blink_msg.tag != self.tick_tag {
            return None;
        }
        self.block_hidden = !self.block_hidden;
        self.blink_cmd()
    }

    /// The current caret mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Sets the caret mode, returning the command that restarts blinking when
    /// switching to [`Mode::Blink`].
    pub fn set_mode(&mut self, mode: Mode) -> Option<Cmd> {
        self.mode = mode;
        self.block_hidden = mode == Mode::Hide || !self.focus;
        (mode == Mode::Blink).then(blink)
    }

    /// Forces the caret block shown or hidden without changing the mode.
    pub fn set_visible(&mut self, visible: bool) {
        self.block_hidden = !visible;
    }

    fn blink_cmd(&mut self) -> Option<Cmd> {
        if self.mode != Mode::Blink {
            return None;
        }
        // A fresh tag orphans any tick already in flight.
        self.tick_tag += 1;
        let (id, tag) = (self.id, self.tick_tag);
        Some(tick(self.blink_speed, move |_| {
            Box::new(BlinkMsg { id, tag }) as Msg
        }))
    }

    /// Focuses the caret, starting the blink cycle in blink mode.
    pub fn focus(&mut self) -> Option<Cmd> {
        self.focus = true;
        self.block_hidden = self.mode == Mode::Hide;
        match self.mode {
            Mode::Blink => self.blink_cmd(),
            _ => None,
        }
    }

    /// Removes focus; the caret stops rendering its block.
    pub fn blur(&mut self) {
        self.focus = false;
        self.block_hidden = true;
    }

    /// Whether the caret has focus.
    pub fn focused(&self) -> bool {
        self.focus
    }

    /// Sets the character shown underneath the caret.
    pub fn set_char(&mut self, s: &str) {
        self.glyph = s.to_string();
    }

    /// Renders the caret (or the plain character, depending on phase).
    pub fn view(&self) -> String {
        let mut style = self.text_style.clone();
        if self.mode != Mode::Hide && !self.block_hidden {
            style = self.style.clone().reverse(true);
        }
        style.inline(true).render(&self.glyph)
    }
}

/// Command that starts the blink cycle; typically returned from a host `init`.
pub fn blink() -> Cmd {
    tick(Duration::ZERO, |_| Box::new(InitialBlinkMsg) as Msg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blink_cmd_invalidates_earlier_tick() {
        let mut m = Model::new();
        m.mode = Mode::Blink;
        m.focus = true;

        let _first = m.blink_cmd().expect("first cmd");
        let first_tag = m.tick_tag;
        let _second = m.blink_cmd().expect("second cmd");
        assert_ne!(first_tag, m.tick_tag);

        // A tick carrying the first tag must now be dropped.
        let stale: Msg = Box::new(BlinkMsg {
            id: m.id,
            tag: first_tag,
        });
        let phase = m.block_hidden;
        assert!(m.update(&stale).is_none());
        assert_eq!(phase, m.block_hidden);
    }

    #[test]
    fn test_blink_toggles_phase_on_current_tag() {
        let mut m = Model::new();
        m.focus = true;
        let _ = m.blink_cmd();

        let current: Msg = Box::new(BlinkMsg {
            id: m.id,
            tag: m.tick_tag,
        });
        let phase = m.block_hidden;
        assert!(m.update(&current).is_some());
        assert_ne!(phase, m.block_hidden);
    }

    #[test]
    fn test_unfocused_ignores_blinks() {
        let mut m = Model::new();
        let msg: Msg = Box::new(BlinkMsg { id: m.id, tag: 1 });
        assert!(m.update(&msg).is_none());
    }

    #[test]
    fn test_hidden_mode_renders_text_style() {
        let mut m = Model::new();
        m.set_char("x");
        let _ = m.set_mode(Mode::Hide);
        assert_eq!(m.view(), Style::new().inline(true).render("x"));
    }
}
