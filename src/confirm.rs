use anyhow::Result;
use dialoguer::Input;
use tracing::warn;

use crate::models::FolderDescriptor;

const AFFIRMATIVE: [&str; 4] = ["yes", "y", "да", "д"];

pub fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim().to_lowercase();
    AFFIRMATIVE.contains(&answer.as_str())
}

/// Asks on the terminal. A closed or unreadable stdin counts as "no".
pub fn ask_operator(candidates: &[FolderDescriptor]) -> Result<bool> {
    println!(
        "\n⚠️  WARNING: {} folder(s) will be permanently deleted!",
        candidates.len()
    );
    let answer = Input::<String>::new()
        .with_prompt("Continue? (yes/no)")
        .allow_empty(true)
        .interact_text();

    match answer {
        Ok(answer) => Ok(is_affirmative(&answer)),
        Err(e) => {
            warn!(error = %e, "could not read confirmation, treating as no");
            Ok(false)
        }
    }
}
