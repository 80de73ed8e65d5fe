//! Single-line text input.
//!
//! The input the [`autocomplete`](crate::autocomplete) widget types into. It
//! keeps its value as a `Vec<char>` with a cursor position, windows long
//! values horizontally when a display width is set, and shows a placeholder
//! while empty. Editing keys (character/word movement, deletions, paste) are
//! bound through an [`InputKeyMap`] and handled in [`Model::update`].
//!
//! ### Example
//! ```rust
//! use bubbletea_autocomplete::input;
//! use bubbletea_rs::KeyMsg;
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let mut field = input::Model::new();
//! field.set_placeholder("search…");
//! let _ = field.focus();
//! field.update(Box::new(KeyMsg {
//!     key: KeyCode::Char('a'),
//!     modifiers: KeyModifiers::NONE,
//! }));
//! assert_eq!(field.value(), "a");
//! ```

use crate::key::{matches_binding, new_binding, with_keys_str, Binding};
use crate::{cursor, Component};
use bubbletea_rs::{tick, Cmd, KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::prelude::*;
use std::time::Duration;

/// Message carrying pasted clipboard text.
#[derive(Debug, Clone)]
pub struct PasteMsg(pub String);

/// Message carrying a clipboard read failure.
#[derive(Debug, Clone)]
pub struct PasteErrMsg(pub String);

/// Key bindings for editing actions within the input.
#[derive(Debug, Clone)]
pub struct InputKeyMap {
    /// Move the cursor one character right.
    pub character_forward: Binding,
    /// Move the cursor one character left.
    pub character_backward: Binding,
    /// Move the cursor one word right.
    pub word_forward: Binding,
    /// Move the cursor one word left.
    pub word_backward: Binding,
    /// Delete the word before the cursor.
    pub delete_word_backward: Binding,
    /// Delete the word after the cursor.
    pub delete_word_forward: Binding,
    /// Delete from the cursor to the end of the line.
    pub delete_after_cursor: Binding,
    /// Delete from the start of the line to the cursor.
    pub delete_before_cursor: Binding,
    /// Delete one character backward.
    pub delete_character_backward: Binding,
    /// Delete one character forward.
    pub delete_character_forward: Binding,
    /// Move to the start of the line.
    pub line_start: Binding,
    /// Move to the end of the line.
    pub line_end: Binding,
    /// Paste from the clipboard.
    pub paste: Binding,
}

impl Default for InputKeyMap {
    fn default() -> Self {
        Self {
            character_forward: new_binding(vec![with_keys_str(&["right", "ctrl+f"])]),
            character_backward: new_binding(vec![with_keys_str(&["left", "ctrl+b"])]),
            word_forward: new_binding(vec![with_keys_str(&["alt+right", "alt+f"])]),
            word_backward: new_binding(vec![with_keys_str(&["alt+left", "alt+b"])]),
            delete_word_backward: new_binding(vec![with_keys_str(&["alt+backspace", "ctrl+w"])]),
            delete_word_forward: new_binding(vec![with_keys_str(&["alt+delete", "alt+d"])]),
            delete_after_cursor: new_binding(vec![with_keys_str(&["ctrl+k"])]),
            delete_before_cursor: new_binding(vec![with_keys_str(&["ctrl+u"])]),
            delete_character_backward: new_binding(vec![with_keys_str(&["backspace", "ctrl+h"])]),
            delete_character_forward: new_binding(vec![with_keys_str(&["delete", "ctrl+d"])]),
            line_start: new_binding(vec![with_keys_str(&["home", "ctrl+a"])]),
            line_end: new_binding(vec![with_keys_str(&["end", "ctrl+e"])]),
            paste: new_binding(vec![with_keys_str(&["ctrl+v"])]),
        }
    }
}

/// Text input state.
#[derive(Debug, Clone)]
pub struct Model {
    /// Prompt rendered before the value.
    pub prompt: String,
    /// Style for the prompt.
    pub prompt_style: Style,
    /// Style for the typed value.
    pub text_style: Style,
    /// Style for the placeholder text.
    pub placeholder_style: Style,
    /// Embedded caret.
    pub cursor: cursor::Model,
    /// Editing key bindings.
    pub keymap: InputKeyMap,

    value: Vec<char>,
    pos: usize,
    focus: bool,
    placeholder: String,
    // Display window into `value` when `width` is set.
    offset: usize,
    offset_right: usize,
    width: usize,
    char_limit: usize,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
            prompt_style: Style::new(),
            text_style: Style::new(),
            placeholder_style: Style::new().foreground(Color::from("240")),
            cursor: cursor::Model::new(),
            keymap: InputKeyMap::default(),
            value: Vec::new(),
            pos: 0,
            focus: false,
            placeholder: String::new(),
            offset: 0,
            offset_right: 0,
            width: 0,
            char_limit: 0,
        }
    }
}

impl Model {
    /// Creates an input with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the value, clamping to the char limit and keeping the cursor
    /// in range.
    pub fn set_value(&mut self, s: &str) {
        let runes: Vec<char> = s.chars().collect();
        let was_empty = self.value.is_empty();

        if self.char_limit > 0 && runes.len() > self.char_limit {
            self.value = runes[..self.char_limit].to_vec();
        } else {
            self.value = runes;
        }

        if (self.pos == 0 && was_empty) || self.pos > self.value.len() {
            self.set_cursor(self.value.len());
        }
        self.handle_overflow();
    }

    /// The current value.
    pub fn value(&self) -> String {
        self.value.iter().collect()
    }

    /// The cursor position as a character index.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Moves the cursor, clamping to the value length.
    pub fn set_cursor(&mut self, pos: usize) {
        self.pos = pos.min(self.value.len());
        self.handle_overflow();
    }

    /// Moves the cursor to the start of the value.
    pub fn cursor_start(&mut self) {
        self.set_cursor(0);
    }

    /// Moves the cursor to the end of the value.
    pub fn cursor_end(&mut self) {
        self.set_cursor(self.value.len());
    }

    /// Whether the input has focus.
    pub fn focused(&self) -> bool {
        self.focus
    }

    /// Focuses the input and starts the caret blinking.
    pub fn focus(&mut self) -> Cmd {
        self.focus = true;
        self.cursor
            .focus()
            .unwrap_or_else(|| Box::pin(async { None }))
    }

    /// Removes focus.
    pub fn blur(&mut self) {
        self.focus = false;
        self.cursor.blur();
    }

    /// Clears the value and moves the cursor to the start.
    pub fn reset(&mut self) {
        self.value.clear();
        self.set_cursor(0);
    }

    /// Sets the placeholder shown while the value is empty.
    pub fn set_placeholder(&mut self, placeholder: &str) {
        self.placeholder = placeholder.to_string();
    }

    /// Sets the display width in characters. `0` disables windowing.
    pub fn set_width(&mut self, width: usize) {
        self.width = width;
        self.handle_overflow();
    }

    /// The display width in characters.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Sets the maximum value length. `0` disables the limit.
    pub fn set_char_limit(&mut self, limit: usize) {
        self.char_limit = limit;
    }

    /// Handles key, paste, and caret messages. Ignored entirely while the
    /// input is not focused.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if !self.focus {
            return None;
        }

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if let Some(cmd) = self.handle_clipboard_keys(key_msg) {
                return cmd;
            }
            self.handle_deletion_keys(key_msg);
            self.handle_movement_keys(key_msg);
            self.handle_character_input(key_msg);
        }

        if let Some(paste_msg) = msg.downcast_ref::<PasteMsg>() {
            let chars: Vec<char> = paste_msg.0.chars().collect();
            self.insert_chars(chars);
        }

        let cursor_cmd = self.cursor.update(&msg);
        self.handle_overflow();
        cursor_cmd
    }

    fn handle_clipboard_keys(&mut self, key_msg: &KeyMsg) -> Option<Option<Cmd>> {
        if matches_binding(key_msg, &self.keymap.paste) {
            return Some(Some(paste()));
        }
        None
    }

    fn handle_deletion_keys(&mut self, key_msg: &KeyMsg) {
        if matches_binding(key_msg, &self.keymap.delete_word_backward) {
            self.delete_word_backward();
        } else if matches_binding(key_msg, &self.keymap.delete_character_backward) {
            if !self.value.is_empty() && self.pos > 0 {
                self.value.remove(self.pos - 1);
                self.pos -= 1;
            }
        } else if matches_binding(key_msg, &self.keymap.delete_character_forward) {
            if !self.value.is_empty() && self.pos < self.value.len() {
                self.value.remove(self.pos);
            }
        } else if matches_binding(key_msg, &self.keymap.delete_after_cursor) {
            self.value.truncate(self.pos);
            self.set_cursor(self.value.len());
        } else if matches_binding(key_msg, &self.keymap.delete_before_cursor) {
            self.value.drain(..self.pos);
            self.offset = 0;
            self.set_cursor(0);
        } else if matches_binding(key_msg, &self.keymap.delete_word_forward) {
            self.delete_word_forward();
        }
    }

    fn handle_movement_keys(&mut self, key_msg: &KeyMsg) {
        if matches_binding(key_msg, &self.keymap.word_backward) {
            self.word_backward();
        } else if matches_binding(key_msg, &self.keymap.character_backward) {
            if self.pos > 0 {
                self.set_cursor(self.pos - 1);
            }
        } else if matches_binding(key_msg, &self.keymap.word_forward) {
            self.word_forward();
        } else if matches_binding(key_msg, &self.keymap.character_forward) {
            if self.pos < self.value.len() {
                self.set_cursor(self.pos + 1);
            }
        } else if matches_binding(key_msg, &self.keymap.line_start) {
            self.cursor_start();
        } else if matches_binding(key_msg, &self.keymap.line_end) {
            self.cursor_end();
        }
    }

    fn handle_character_input(&mut self, key_msg: &KeyMsg) {
        if let KeyCode::Char(ch) = key_msg.key {
            // Shift is already encoded in the char case.
            if !key_msg.modifiers.contains(KeyModifiers::CONTROL)
                && !key_msg.modifiers.contains(KeyModifiers::ALT)
            {
                self.insert_chars(vec![ch]);
            }
        }
    }

    fn insert_chars(&mut self, chars: Vec<char>) {
        let mut avail = if self.char_limit > 0 {
            let space = self.char_limit.saturating_sub(self.value.len());
            if space == 0 {
                return;
            }
            Some(space)
        } else {
            None
        };

        let mut head = self.value[..self.pos].to_vec();
        let tail = self.value[self.pos..].to_vec();

        for ch in chars {
            head.push(ch);
            self.pos += 1;

            if let Some(ref mut space) = avail {
                *space -= 1;
                if *space == 0 {
                    break;
                }
            }
        }

        head.extend(tail);
        self.value = head;
        self.handle_overflow();
    }

    fn delete_word_backward(&mut self) {
        let end = self.pos;
        let mut start = self.pos;
        while start > 0 && self.value[start - 1].is_whitespace() {
            start -= 1;
        }
        while start > 0 && !self.value[start - 1].is_whitespace() {
            start -= 1;
        }
        self.value.drain(start..end);
        self.set_cursor(start);
    }

    fn delete_word_forward(&mut self) {
        let start = self.pos;
        let mut end = self.pos;
        while end < self.value.len() && self.value[end].is_whitespace() {
            end += 1;
        }
        while end < self.value.len() && !self.value[end].is_whitespace() {
            end += 1;
        }
        self.value.drain(start..end);
        self.set_cursor(start);
    }

    fn word_backward(&mut self) {
        let mut pos = self.pos;
        while pos > 0 && self.value[pos - 1].is_whitespace() {
            pos -= 1;
        }
        while pos > 0 && !self.value[pos - 1].is_whitespace() {
            pos -= 1;
        }
        self.set_cursor(pos);
    }

    fn word_forward(&mut self) {
        let mut pos = self.pos;
        while pos < self.value.len() && self.value[pos].is_whitespace() {
            pos += 1;
        }
        while pos < self.value.len() && !self.value[pos].is_whitespace() {
            pos += 1;
        }
        self.set_cursor(pos);
    }

    // Keeps the display window around the cursor when the value is wider
    // than the field.
    fn handle_overflow(&mut self) {
        if self.width == 0 || self.value.len() <= self.width {
            self.offset = 0;
            self.offset_right = self.value.len();
            return;
        }

        self.offset_right = self.offset_right.min(self.value.len());

        if self.pos < self.offset {
            self.offset = self.pos;
            self.offset_right = (self.offset + self.width).min(self.value.len());
        } else if self.pos >= self.offset_right {
            self.offset_right = self.pos;
            self.offset = self.offset_right.saturating_sub(self.width);
        }
    }

    /// Renders the prompt, the windowed value, and the caret.
    pub fn view(&self) -> String {
        if self.value.is_empty() && !self.placeholder.is_empty() {
            return self.placeholder_view();
        }

        let window: String = self.value[self.offset..self.offset_right].iter().collect();
        let pos = self.pos.saturating_sub(self.offset);
        let chars: Vec<char> = window.chars().collect();

        let mut v = String::new();
        let before: String = chars.iter().take(pos).collect();
        v.push_str(&self.text_style.clone().render(&before));

        if pos < chars.len() {
            let mut cur = self.cursor.clone();
            cur.set_char(&chars[pos].to_string());
            v.push_str(&cur.view());
            if pos + 1 < chars.len() {
                let after: String = chars.iter().skip(pos + 1).collect();
                v.push_str(&self.text_style.clone().render(&after));
            }
        } else {
            let mut cur = self.cursor.clone();
            cur.set_char(" ");
            v.push_str(&cur.view());
        }

        if self.width > 0 && chars.len() < self.width {
            let padding = self.width - chars.len();
            v.push_str(&self.text_style.clone().render(&" ".repeat(padding)));
        }

        format!("{}{}", self.prompt_style.clone().render(&self.prompt), v)
    }

    fn placeholder_view(&self) -> String {
        let chars: Vec<char> = self.placeholder.chars().collect();
        let shown = if self.width > 0 {
            chars.len().min(self.width)
        } else {
            chars.len()
        };

        let mut v = String::new();
        let mut cur = self.cursor.clone();
        cur.set_char(&chars[0].to_string());
        v.push_str(&cur.view());

        if shown > 1 {
            let rest: String = chars[1..shown].iter().collect();
            v.push_str(&self.placeholder_style.clone().render(&rest));
        }
        if self.width > shown {
            let padding = self.width - shown;
            v.push_str(&self.placeholder_style.clone().render(&" ".repeat(padding)));
        }

        format!("{}{}", self.prompt_style.clone().render(&self.prompt), v)
    }
}

impl Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        Some(self.focus())
    }

    fn blur(&mut self) {
        self.blur()
    }

    fn focused(&self) -> bool {
        self.focused()
    }
}

/// Command that reads the clipboard and reports a [`PasteMsg`] or
/// [`PasteErrMsg`].
pub fn paste() -> Cmd {
    tick(Duration::from_nanos(1), |_| {
        #[cfg(feature = "clipboard-support")]
        {
            use clipboard::{ClipboardContext, ClipboardProvider};
            let res: Result<String, String> = (|| {
                let mut ctx: ClipboardContext = ClipboardProvider::new()
                    .map_err(|e| format!("failed to create clipboard context: {}", e))?;
                ctx.get_contents()
                    .map_err(|e| format!("failed to read clipboard: {}", e))
            })();
            match res {
                Ok(s) => Box::new(PasteMsg(s)) as Msg,
                Err(e) => Box::new(PasteErrMsg(e)) as Msg,
            }
        }
        #[cfg(not(feature = "clipboard-support"))]
        {
            Box::new(PasteErrMsg("clipboard support not enabled".to_string())) as Msg
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(model: &mut Model, key: KeyCode) {
        model.update(Box::new(KeyMsg {
            key,
            modifiers: KeyModifiers::NONE,
        }));
    }

    fn focused() -> Model {
        let mut m = Model::new();
        let _ = m.focus();
        m
    }

    #[test]
    fn test_typing_appends_at_cursor() {
        let mut m = focused();
        for ch in "abc".chars() {
            press(&mut m, KeyCode::Char(ch));
        }
        assert_eq!(m.value(), "abc");
        assert_eq!(m.position(), 3);

        press(&mut m, KeyCode::Left);
        press(&mut m, KeyCode::Char('x'));
        assert_eq!(m.value(), "abxc");
    }

    #[test]
    fn test_unfocused_ignores_keys() {
        let mut m = Model::new();
        press(&mut m, KeyCode::Char('a'));
        assert_eq!(m.value(), "");
    }

    #[test]
    fn test_backspace_removes_before_cursor() {
        let mut m = focused();
        m.set_value("hello");
        m.cursor_end();
        press(&mut m, KeyCode::Backspace);
        assert_eq!(m.value(), "hell");
        assert_eq!(m.position(), 4);
    }

    #[test]
    fn test_delete_word_backward() {
        let mut m = focused();
        m.set_value("one two three");
        m.cursor_end();
        m.update(Box::new(KeyMsg {
            key: KeyCode::Char('w'),
            modifiers: KeyModifiers::CONTROL,
        }));
        assert_eq!(m.value(), "one two ");
    }

    #[test]
    fn test_char_limit_truncates() {
        let mut m = focused();
        m.set_char_limit(3);
        m.set_value("abcdef");
        assert_eq!(m.value(), "abc");
        press(&mut m, KeyCode::Char('x'));
        assert_eq!(m.value(), "abc");
    }

    #[test]
    fn test_overflow_window_follows_cursor() {
        let mut m = focused();
        m.set_width(5);
        m.set_value("0123456789");
        m.cursor_end();
        assert_eq!(m.offset_right, 10);
        assert_eq!(m.offset, 5);

        m.cursor_start();
        assert_eq!(m.offset, 0);
        assert_eq!(m.offset_right, 5);
    }

    #[test]
    fn test_placeholder_shown_while_empty() {
        let mut m = focused();
        m.set_placeholder("type here");
        let view = strip(&m.view());
        assert!(view.contains("ype here"), "got: {view:?}");

        m.set_value("x");
        let view = strip(&m.view());
        assert!(!view.contains("ype here"));
    }

    #[test]
    fn test_home_end_movement() {
        let mut m = focused();
        m.set_value("hello");
        press(&mut m, KeyCode::Home);
        assert_eq!(m.position(), 0);
        press(&mut m, KeyCode::End);
        assert_eq!(m.position(), 5);
    }

    fn strip(s: &str) -> String {
        String::from_utf8(strip_ansi_escapes::strip(s.as_bytes())).unwrap_or_default()
    }
}
