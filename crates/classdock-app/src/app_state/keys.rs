//! Keyboard shortcuts of the shell itself.
//!
//! Only combinations with a modifier are claimed; everything else reaches
//! the focused view untouched.

/// Something the shell does in response to a shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Action {
    /// Show the n-th visible app (0-based).
    ShowApp(usize),
    ToggleSidebar,
    ReloadActive,
    HideActive,
    Back,
    Forward,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(super) struct Mods {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub super_key: bool,
}

impl Mods {
    /// Cmd on macOS, Ctrl elsewhere.
    fn primary(self) -> bool {
        if cfg!(target_os = "macos") {
            self.super_key
        } else {
            self.ctrl
        }
    }
}

/// Map a normalized key name (`"1"`, `"b"`, `"ArrowLeft"`) plus modifiers to
/// a shell action.
pub(super) fn resolve(key: &str, mods: Mods) -> Option<Action> {
    if mods.primary() && !mods.alt && !mods.shift {
        return match key {
            "b" => Some(Action::ToggleSidebar),
            "r" => Some(Action::ReloadActive),
            "h" => Some(Action::HideActive),
            "[" => Some(Action::Back),
            "]" => Some(Action::Forward),
            digit => digit
                .parse::<usize>()
                .ok()
                .filter(|n| (1..=9).contains(n))
                .map(|n| Action::ShowApp(n - 1)),
        };
    }

    if mods.alt && !mods.primary() && !mods.shift {
        return match key {
            "ArrowLeft" => Some(Action::Back),
            "ArrowRight" => Some(Action::Forward),
            _ => None,
        };
    }

    None
}

/// Lowercase single characters; named keys pass through.
pub(super) fn normalize(key: &str) -> String {
    if key.chars().count() == 1 {
        key.to_lowercase()
    } else {
        key.to_string()
    }
}
