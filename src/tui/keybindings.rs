//! Keybinding definitions
//!
//! The single source for the help overlay and the status bar hints.

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    /// Key(s) as shown to the user
    pub keys: &'static str,
    /// Description of what the key does
    pub description: &'static str,
    /// Context where this keybinding is active
    pub context: KeyContext,
}

/// Context in which a keybinding is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    /// Active everywhere
    Global,
    /// Active when the sidebar has focus
    Sidebar,
    /// Active when the main panel has focus
    MainPanel,
}

impl KeyContext {
    pub fn heading(&self) -> &'static str {
        match self {
            Self::Global => "Global Keys",
            Self::Sidebar => "Navigation",
            Self::MainPanel => "Charts",
        }
    }
}

/// All keybindings
pub static KEYBINDINGS: &[Keybinding] = &[
    Keybinding {
        keys: "q/Esc",
        description: "Quit",
        context: KeyContext::Global,
    },
    Keybinding {
        keys: "?",
        description: "Show/hide help",
        context: KeyContext::Global,
    },
    Keybinding {
        keys: "1/2/3",
        description: "Go to Executive Summary / Usage & Velocity / Merchant Ecosystem",
        context: KeyContext::Global,
    },
    Keybinding {
        keys: "Tab",
        description: "Switch panel focus",
        context: KeyContext::Global,
    },
    Keybinding {
        keys: "d",
        description: "Expand/collapse underlying data (Merchant Ecosystem)",
        context: KeyContext::Global,
    },
    Keybinding {
        keys: "j/k",
        description: "Select next/previous view",
        context: KeyContext::Sidebar,
    },
    Keybinding {
        keys: "Enter/l",
        description: "Focus the main panel",
        context: KeyContext::Sidebar,
    },
    Keybinding {
        keys: "[/]",
        description: "Move the chart cursor left/right",
        context: KeyContext::MainPanel,
    },
    Keybinding {
        keys: "h",
        description: "Focus the sidebar",
        context: KeyContext::MainPanel,
    },
];

/// Keybindings for one context, in definition order
pub fn for_context(context: KeyContext) -> impl Iterator<Item = &'static Keybinding> {
    KEYBINDINGS.iter().filter(move |k| k.context == context)
}
