//! UI utilities for the client.

use std::io::Write;

/// Prompt shown before user input
pub fn prompt(name: Option<&str>) -> String {
    format!("{}> ", name.unwrap_or("you"))
}

/// Redisplay the prompt after receiving a frame
pub fn redisplay_prompt(prompt: &str) {
    print!("{}", prompt);
    std::io::stdout().flush().ok();
}
