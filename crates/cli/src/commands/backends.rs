//! `ingen backends` — List supported LLM backends.

use ingen_core::Error;
use ingen_providers::BackendKind;
use ingen_providers::selector::DEFAULT_BACKEND;

pub fn run() -> Result<(), Error> {
    println!("🤖 Supported LLM Backends");
    println!("=========================");
    println!();
    for kind in BackendKind::ALL {
        let marker = if kind.key() == DEFAULT_BACKEND { " (default)" } else { "" };
        println!("  {:<8} settings from {}{marker}", kind.key(), kind.settings_source());
    }
    println!();
    println!("  Select one with:");
    println!("    [General]");
    println!("    llm = ollama");
    println!();
    println!("  Azure environment variables:");
    println!("    AZURE_DEPLOYMENT_NAME, AZURE_OPENAI_ENDPOINT,");
    println!("    AZURE_OPENAI_API_VERSION, AZURE_OPENAI_KEY");

    Ok(())
}
