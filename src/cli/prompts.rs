//! Interactive prompts using dialoguer

use anyhow::Result;
use dialoguer::Input;

/// Pause until the user presses Enter, e.g. before returning to the shell
pub fn acknowledge(message: &str) -> Result<()> {
    let _: String = Input::new()
        .with_prompt(message)
        .allow_empty(true)
        .interact_text()?;
    Ok(())
}
