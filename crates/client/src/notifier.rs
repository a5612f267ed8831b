//! Terminal rendering of user notices.

use manageshop_core::notify::{Notice, NoticeLevel, Notifier};

/// Tokyo Night color palette
pub mod colors {
    pub const RESET: &str = "\x1b[0m";

    pub const TKN_RED: &str = "\x1b[38;2;247;118;142m"; // #f7768e
    pub const TKN_GREEN: &str = "\x1b[38;2;158;206;106m"; // #9ece6a
    pub const TKN_CYAN: &str = "\x1b[38;2;125;207;255m"; // #7dcfff
}

/// Prints notices to stderr, keeping stdout for command output.
///
/// Colors are stripped by `anstream` when stderr is not a terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier {
    quiet: bool,
}

impl ConsoleNotifier {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

/// Renders a notice as a single colored line.
pub fn render_notice(notice: &Notice) -> String {
    let (color, mark) = match notice.level {
        NoticeLevel::Success => (colors::TKN_GREEN, "✓"),
        NoticeLevel::Error => (colors::TKN_RED, "✗"),
    };
    let mut line = format!("{color}{mark} {}{}", notice.message, colors::RESET);
    if let Some(action) = &notice.action {
        line.push_str(&format!(
            "  {}{} → {}{}",
            colors::TKN_CYAN,
            action.label,
            action.target,
            colors::RESET
        ));
    }
    line
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, notice: Notice) {
        // Errors are shown even in quiet mode
        if self.quiet && notice.level == NoticeLevel::Success {
            return;
        }
        anstream::eprintln!("{}", render_notice(&notice));
    }
}
