//! In-band chat directives.
//!
//! A trimmed input line is either `exit`/`quit`, a `$load <path>` request,
//! or literal prompt text.

use std::path::PathBuf;

use crate::constants::{EXIT_COMMANDS, LOAD_DIRECTIVE};

/// What an input line asks the chat loop to do.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Directive {
    /// End the session.
    Exit,
    /// Send the file at this path as the next turn.
    Load(PathBuf),
    /// Send the text as the next turn.
    Prompt(String),
}

impl Directive {
    /// Classifies a line. Matching is exact and case-sensitive after trimming.
    pub(crate) fn parse(line: &str) -> Self {
        let line = line.trim();
        if EXIT_COMMANDS.contains(&line) {
            return Directive::Exit;
        }
        if let Some(rest) = line.strip_prefix(LOAD_DIRECTIVE) {
            let path = rest.trim();
            if rest.starts_with(char::is_whitespace) && !path.is_empty() {
                return Directive::Load(PathBuf::from(path));
            }
        }
        Directive::Prompt(line.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_and_quit() {
        assert_eq!(Directive::parse("exit"), Directive::Exit);
        assert_eq!(Directive::parse("  quit\n"), Directive::Exit);
    }

    #[test]
    fn exit_is_case_sensitive_and_exact() {
        assert_eq!(Directive::parse("Exit"), Directive::Prompt("Exit".into()));
        assert_eq!(Directive::parse("exit now"), Directive::Prompt("exit now".into()));
    }

    #[test]
    fn load_takes_trimmed_path() {
        assert_eq!(
            Directive::parse("$load   images/cat.png  "),
            Directive::Load(PathBuf::from("images/cat.png"))
        );
        assert_eq!(
            Directive::parse("$load\tfoo.txt"),
            Directive::Load(PathBuf::from("foo.txt"))
        );
    }

    #[test]
    fn load_needs_whitespace_and_path() {
        assert_eq!(Directive::parse("$loadfoo"), Directive::Prompt("$loadfoo".into()));
        assert_eq!(Directive::parse("$load"), Directive::Prompt("$load".into()));
        assert_eq!(Directive::parse("$load   "), Directive::Prompt("$load".into()));
    }

    #[test]
    fn empty_line_is_an_empty_prompt() {
        assert_eq!(Directive::parse("   "), Directive::Prompt(String::new()));
    }
}
