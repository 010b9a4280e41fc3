use colored::Colorize;

/// Leaves text untouched. Used for one-shot output.
pub fn plain(text: &str) -> String {
    text.to_string()
}

/// Model output in the interactive session.
pub fn ai_response(text: &str) -> String {
    text.truecolor(187, 134, 252).to_string()
}

/// Banner lines printed when a chat starts.
pub fn banner(text: &str) -> String {
    text.yellow().to_string()
}

/// The input prompt of the interactive session.
pub fn user_prompt() -> String {
    format!("{}", "> ".green().bold())
}
