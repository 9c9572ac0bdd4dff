//! Keybinding definitions
//!
//! Defines all keyboard shortcuts for different contexts

use crossterm::event::KeyCode;

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    /// The key code
    pub key: KeyCode,
    /// Description of what the key does
    pub description: &'static str,
    /// Context where this keybinding is active
    pub context: KeyContext,
}

/// Context in which a keybinding is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    /// Active everywhere outside dialogs
    Global,
    /// Chart type and threshold
    Chart,
    /// Year selection
    Year,
    /// Active in dialogs
    Dialog,
}

impl KeyContext {
    /// Section heading in the help dialog
    pub fn title(&self) -> &'static str {
        match self {
            KeyContext::Global => "Global Keys",
            KeyContext::Chart => "Chart",
            KeyContext::Year => "Year Selection",
            KeyContext::Dialog => "Dialogs",
        }
    }
}

/// All keybindings
pub static KEYBINDINGS: &[Keybinding] = &[
    // Global
    Keybinding {
        key: KeyCode::Char('q'),
        description: "Quit",
        context: KeyContext::Global,
    },
    Keybinding {
        key: KeyCode::Char('?'),
        description: "Help",
        context: KeyContext::Global,
    },
    // Chart
    Keybinding {
        key: KeyCode::Char('b'),
        description: "Bar chart",
        context: KeyContext::Chart,
    },
    Keybinding {
        key: KeyCode::Char('l'),
        description: "Line chart",
        context: KeyContext::Chart,
    },
    Keybinding {
        key: KeyCode::Char('p'),
        description: "Pie chart",
        context: KeyContext::Chart,
    },
    Keybinding {
        key: KeyCode::Char('f'),
        description: "Set sales threshold",
        context: KeyContext::Chart,
    },
    Keybinding {
        key: KeyCode::Char('r'),
        description: "Clear sales threshold",
        context: KeyContext::Chart,
    },
    // Year
    Keybinding {
        key: KeyCode::Left,
        description: "Previous year tab",
        context: KeyContext::Year,
    },
    Keybinding {
        key: KeyCode::Right,
        description: "Next year tab",
        context: KeyContext::Year,
    },
    Keybinding {
        key: KeyCode::Char('1'),
        description: "Select year by position (1-9)",
        context: KeyContext::Year,
    },
    // Dialog
    Keybinding {
        key: KeyCode::Esc,
        description: "Close dialog",
        context: KeyContext::Dialog,
    },
    Keybinding {
        key: KeyCode::Enter,
        description: "Apply",
        context: KeyContext::Dialog,
    },
];

/// Get keybindings for a specific context
pub fn get_keybindings(context: KeyContext) -> Vec<&'static Keybinding> {
    KEYBINDINGS
        .iter()
        .filter(|kb| kb.context == context)
        .collect()
}

/// Format a keybinding for display
pub fn format_keybinding(kb: &Keybinding) -> String {
    match kb.key {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Left => "←/[".to_string(),
        KeyCode::Right => "→/]".to_string(),
        _ => format!("{:?}", kb.key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_context_has_bindings() {
        for context in [
            KeyContext::Global,
            KeyContext::Chart,
            KeyContext::Year,
            KeyContext::Dialog,
        ] {
            assert!(!get_keybindings(context).is_empty());
        }
    }

    #[test]
    fn test_format_keybinding() {
        let chart = get_keybindings(KeyContext::Chart);
        assert_eq!(format_keybinding(chart[0]), "b");

        let dialog = get_keybindings(KeyContext::Dialog);
        assert_eq!(format_keybinding(dialog[0]), "Esc");
    }
}
