//! `ingen prompt` — Print the rendered prompt exactly as a backend would receive it.

use std::io::Write;

use ingen_core::{Error, Prompt};

use super::Paths;

pub fn run(paths: &Paths) -> Result<(), Error> {
    let prompt = paths.pipeline()?.render_prompt()?;
    write_prompt(&mut std::io::stdout().lock(), &prompt)
}

/// No trailing newline is added; the output is byte-for-byte the prompt.
fn write_prompt(out: &mut impl Write, prompt: &Prompt) -> Result<(), Error> {
    out.write_all(prompt.as_str().as_bytes())?;
    out.flush()?;
    Ok(())
}
