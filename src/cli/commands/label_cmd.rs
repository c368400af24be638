//! cli::commands::label_cmd
//!
//! Parse a label and print its canonical form.

use anyhow::Result;

use crate::core::label::Label;

/// Handle `bzlmirror label <label>`.
pub fn label(input: &str) -> Result<()> {
    let label = Label::parse(input)?;
    println!("{label}");
    Ok(())
}
