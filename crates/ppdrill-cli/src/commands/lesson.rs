//! The `ppdrill lesson` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    print!("{}", ppdrill_core::lesson::lesson_text());
    Ok(())
}
