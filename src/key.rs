//! Key bindings with help metadata.
//!
//! A [`Binding`] ties one or more key presses to an action and carries the
//! short help text shown by the [`help`](crate::help) module. Widget keymaps
//! are plain structs of bindings with a `Default` implementation, and they
//! expose their bindings through the [`KeyMap`] trait so help rendering works
//! for any widget.
//!
//! ### Example
//! ```rust
//! use bubbletea_autocomplete::key::{self, Binding};
//! use crossterm::event::KeyCode;
//!
//! let up = Binding::new(vec![KeyCode::Up, KeyCode::Char('k')]).with_help("↑/k", "up");
//! let quit = key::new_binding(vec![key::with_keys_str(&["ctrl+c"])])
//!     .with_help("ctrl+c", "quit");
//! assert_eq!(up.help().key, "↑/k");
//! assert!(quit.enabled());
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// Help metadata for a single binding: the key label and what it does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Display label for the key(s), e.g. `"↑/k"`.
    pub key: String,
    /// Short description of the action, e.g. `"up"`.
    pub desc: String,
}

/// A single key press: a key code plus the modifiers that must be held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key code to match.
    pub code: KeyCode,
    /// Modifiers that must be active for the press to match.
    pub mods: KeyModifiers,
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            mods: KeyModifiers::NONE,
        }
    }
}

/// A key binding: the presses that trigger it, its help text, and whether it
/// is currently enabled. Disabled bindings never match and are skipped by
/// help rendering.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates a binding matching any of the given key codes with no
    /// modifiers held.
    pub fn new(keys: Vec<KeyCode>) -> Self {
        Self {
            keys: keys.into_iter().map(KeyPress::from).collect(),
            help: Help::default(),
            disabled: false,
        }
    }

    /// Sets the help label and description, builder-style.
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// The help metadata for this binding.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Whether the binding is active.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Enables or disables the binding.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// The key presses this binding matches.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// Reports whether the given key message triggers this binding.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        if !self.enabled() {
            return false;
        }
        self.keys.iter().any(|press| {
            if press.code != msg.key {
                return false;
            }
            // Shifted characters arrive with SHIFT set even though the shift
            // is already encoded in the char itself.
            let mut mods = msg.modifiers;
            if matches!(press.code, KeyCode::Char(_)) && !press.mods.contains(KeyModifiers::SHIFT)
            {
                mods.remove(KeyModifiers::SHIFT);
            }
            press.mods == mods
        })
    }
}

/// Reports whether `msg` triggers `binding`. Free-function form of
/// [`Binding::matches`] for call sites that read better that way.
pub fn matches_binding(msg: &KeyMsg, binding: &Binding) -> bool {
    binding.matches(msg)
}

/// A configuration option for [`new_binding`].
pub struct BindingOpt(Box<dyn FnOnce(&mut Binding)>);

/// Builds a binding from a list of options.
pub fn new_binding(opts: Vec<BindingOpt>) -> Binding {
    let mut binding = Binding::default();
    for opt in opts {
        (opt.0)(&mut binding);
    }
    binding
}

/// Option: bind the given presses.
pub fn with_keys(keys: Vec<KeyPress>) -> BindingOpt {
    BindingOpt(Box::new(move |b| b.keys = keys))
}

/// Option: bind keys given as strings like `"up"`, `"ctrl+f"`, `"alt+right"`.
/// Unparseable names are skipped.
pub fn with_keys_str(keys: &[&str]) -> BindingOpt {
    let presses: Vec<KeyPress> = keys.iter().filter_map(|s| parse_key(s)).collect();
    BindingOpt(Box::new(move |b| b.keys = presses))
}

/// Option: set the help label and description.
pub fn with_help_str(key: &str, desc: &str) -> BindingOpt {
    let help = Help {
        key: key.to_string(),
        desc: desc.to_string(),
    };
    BindingOpt(Box::new(move |b| b.help = help))
}

/// Option: start the binding disabled.
pub fn with_disabled() -> BindingOpt {
    BindingOpt(Box::new(|b| b.disabled = true))
}

fn parse_key(s: &str) -> Option<KeyPress> {
    let mut mods = KeyModifiers::NONE;
    let mut code = None;
    for part in s.split('+') {
        match part {
            "ctrl" => mods |= KeyModifiers::CONTROL,
            "alt" => mods |= KeyModifiers::ALT,
            "shift" => mods |= KeyModifiers::SHIFT,
            name => code = parse_code(name),
        }
    }
    code.map(|code| KeyPress { code, mods })
}

fn parse_code(name: &str) -> Option<KeyCode> {
    let code = match name {
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pgup" => KeyCode::PageUp,
        "pgdown" | "pgdn" => KeyCode::PageDown,
        "tab" => KeyCode::Tab,
        "enter" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "space" => KeyCode::Char(' '),
        "backspace" => KeyCode::Backspace,
        "delete" => KeyCode::Delete,
        "insert" => KeyCode::Insert,
        _ => {
            let mut chars = name.chars();
            let ch = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            KeyCode::Char(ch)
        }
    };
    Some(code)
}

/// Exposes a widget's bindings to the help renderer.
///
/// `short_help` returns the bindings for the single-line help view;
/// `full_help` returns columns of bindings for the expanded view.
pub trait KeyMap {
    /// Bindings shown in the compact single-line help.
    fn short_help(&self) -> Vec<&Binding>;
    /// Binding columns shown in the expanded help.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}
