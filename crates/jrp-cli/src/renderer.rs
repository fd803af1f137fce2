//! Terminal rendering for phrase listings and status lines.
//!
//! Output is markdown. With color enabled it goes through a termimad skin,
//! otherwise it is printed as-is.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Renderer that switches between styled and plain markdown output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        // Ids in bold, timestamps in italics
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::DarkGrey);

        Self { rich_enabled, skin }
    }

    /// Prints `markdown` to stdout, one line at a time.
    pub fn render(&self, markdown: &str) -> Result<()> {
        if self.rich_enabled {
            for line in markdown.lines() {
                self.skin.print_inline(&styled_line(line));
                println!();
            }
        } else {
            print!("{markdown}");
        }
        Ok(())
    }
}

/// Swaps a leading list marker for a bullet; termimad's inline printer
/// does not interpret list items.
fn styled_line(line: &str) -> String {
    match line.strip_prefix("- ") {
        Some(rest) => format!("• {rest}"),
        None => line.to_string(),
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_renderer() {
        let renderer = TerminalRenderer::new(false);
        assert!(!renderer.rich_enabled);
    }

    #[test]
    fn test_default_is_rich() {
        assert!(TerminalRenderer::default().rich_enabled);
    }

    #[test]
    fn test_styled_line_replaces_list_marker() {
        assert_eq!(styled_line("- **1** test1"), "• **1** test1");
        assert_eq!(styled_line("No phrases found."), "No phrases found.");
    }
}
