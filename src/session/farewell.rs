use super::TerminalUi;
use std::sync::Once;

const FAREWELL_TEXT: &str = "Thx for using, bye, bye!";
const EMOJI_GLYPH: &str = "😃";
const PLAIN_GLYPH: &str = ":)";

/// What the terminal is known to support, detected once at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TerminalCapabilities {
    pub emoji: bool,
}

impl TerminalCapabilities {
    /// Read capabilities from the current platform and `TERM`
    pub fn detect() -> Self {
        let term = std::env::var("TERM").ok();
        Self::from_env(cfg!(windows), term.as_deref())
    }

    /// Emoji need a non-Windows platform and a 256-colour xterm
    pub fn from_env(is_windows: bool, term: Option<&str>) -> Self {
        Self {
            emoji: !is_windows && term == Some("xterm-256color"),
        }
    }
}

/// The sign-off line shown when the session ends
pub fn farewell_message(capabilities: TerminalCapabilities) -> String {
    let glyph = if capabilities.emoji {
        EMOJI_GLYPH
    } else {
        PLAIN_GLYPH
    };
    format!("\n{} {}\n", FAREWELL_TEXT, glyph)
}

/// Renders the farewell at most once, whichever exit path gets there first
pub struct FarewellHook {
    message: String,
    once: Once,
}

impl FarewellHook {
    pub fn new(capabilities: TerminalCapabilities) -> Self {
        Self {
            message: farewell_message(capabilities),
            once: Once::new(),
        }
    }

    /// Render the farewell; returns false if it was already rendered
    pub fn fire<U: TerminalUi + ?Sized>(&self, ui: &mut U) -> bool {
        let mut rendered = false;
        self.once.call_once(|| {
            ui.farewell(&self.message);
            rendered = true;
        });
        rendered
    }

    pub fn has_fired(&self) -> bool {
        self.once.is_completed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emoji_requires_xterm_256color() {
        assert!(TerminalCapabilities::from_env(false, Some("xterm-256color")).emoji);
        assert!(!TerminalCapabilities::from_env(false, Some("xterm")).emoji);
        assert!(!TerminalCapabilities::from_env(false, None).emoji);
    }

    #[test]
    fn test_no_emoji_on_windows() {
        assert!(!TerminalCapabilities::from_env(true, Some("xterm-256color")).emoji);
    }

    #[test]
    fn test_farewell_message_glyphs() {
        assert_eq!(
            farewell_message(TerminalCapabilities { emoji: true }),
            "\nThx for using, bye, bye! 😃\n"
        );
        assert_eq!(
            farewell_message(TerminalCapabilities::default()),
            "\nThx for using, bye, bye! :)\n"
        );
    }
}
