//! Terminal presentation: banner, separators and colored results.

use std::fmt::Display;

use crossterm::style::Stylize;

const BANNER: &str = r#"
 _                 _
| |__   ___   ___ | | _____  __
| '_ \ / _ \ / _ \| |/ _ \ \/ /
| |_) | (_) | (_) | |  __/>  <
|_.__/ \___/ \___/|_|\___/_/\_\
"#;

const USAGE: &str = "\
Evaluates Boolean expressions written in infix notation. Expressions are \
converted to postfix and reduced on a stack.
Enter an expression using T (true) and F (false) with the operators \
& (AND), | (OR), ! (NOT), @ (NAND), $ (XOR) and parentheses.
Enter 'q' to quit.";

/// Fallback when the terminal size cannot be queried (pipes, CI).
const DEFAULT_WIDTH: usize = 80;

/// Formats shell output, with or without ANSI styling.
#[derive(Debug, Clone, Copy)]
pub struct Painter {
    color: bool,
    width: usize,
}

impl Painter {
    pub fn new(color: bool, width: usize) -> Self {
        Self { color, width }
    }

    /// Painter sized to the current terminal.
    pub fn detect(color: bool) -> Self {
        let width = crossterm::terminal::size()
            .map(|(cols, _)| usize::from(cols))
            .ok()
            .filter(|&cols| cols > 0)
            .unwrap_or(DEFAULT_WIDTH);
        Self::new(color, width)
    }

    pub fn banner(&self) -> String {
        format!("{}\n{USAGE}\n", self.bold(BANNER))
    }

    /// A full-width horizontal rule.
    pub fn separator(&self) -> String {
        "-".repeat(self.width)
    }

    pub fn result(&self, value: bool) -> String {
        let word = if value { "True" } else { "False" };
        let word = match (self.color, value) {
            (false, _) => word.to_string(),
            (true, true) => word.green().to_string(),
            (true, false) => word.red().to_string(),
        };
        format!("The result of the expression is {word}")
    }

    pub fn error(&self, err: &impl Display) -> String {
        format!("Error: {err}. Please try again.")
    }

    fn bold(&self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_result() {
        let painter = Painter::new(false, 10);
        assert_eq!(painter.result(true), "The result of the expression is True");
        assert_eq!(painter.result(false), "The result of the expression is False");
        assert_eq!(painter.separator(), "----------");
    }

    #[test]
    fn test_colored_result_keeps_word() {
        let painter = Painter::new(true, 10);
        assert!(painter.result(true).contains("True"));
        assert!(painter.result(false).contains("False"));
    }

    #[test]
    fn test_banner_mentions_quit() {
        let banner = Painter::new(false, 10).banner();
        assert!(banner.contains("Enter 'q' to quit."));
        assert!(!banner.contains('\u{1b}'));
    }
}
