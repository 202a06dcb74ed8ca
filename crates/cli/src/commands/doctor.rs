//! `ingen doctor` — Diagnose configuration, log, and backend settings.
//!
//! Nothing here contacts a backend; settings are only resolved.

use ingen_config::{Configuration, ProcessEnv};
use ingen_core::Error;
use ingen_explain::{LogReader, PromptAssembler};
use ingen_providers::configured_kind;

use super::Paths;

pub fn run(paths: &Paths) -> Result<(), Error> {
    println!("🩺 inGen Doctor — Setup Diagnostics");
    println!("===================================\n");

    let mut issues = 0;

    // Check config
    let config = if paths.config.exists() {
        match Configuration::load(&paths.config) {
            Ok(config) => {
                println!("  ✅ Config file valid ({})", paths.config.display());
                config
            }
            Err(e) => {
                println!("  ❌ Config file invalid: {e}");
                issues += 1;
                Configuration::empty()
            }
        }
    } else {
        println!("  ℹ️  No config file at {}, using defaults", paths.config.display());
        Configuration::empty()
    };

    // Check backend settings
    match configured_kind(&config) {
        Ok(kind) => match kind.build(&config, &ProcessEnv) {
            Ok(_) => println!("  ✅ Backend '{kind}' configured ({})", kind.settings_source()),
            Err(e) => {
                println!("  ❌ Backend '{kind}' not usable: {e}");
                issues += 1;
            }
        },
        Err(e) => {
            println!("  ❌ {e}");
            issues += 1;
        }
    }

    // Check prompt settings
    if let Err(e) = PromptAssembler::from_config(&config) {
        println!("  ❌ {e}");
        issues += 1;
    }

    // Check log
    match LogReader::new(&paths.log).read() {
        Ok(lines) => println!("  ✅ Adaptation log readable ({} lines)", lines.len()),
        Err(e) => {
            println!("  ❌ {e}");
            issues += 1;
        }
    }

    // Summary
    println!();
    if issues == 0 {
        println!("  🎉 All checks passed!");
    } else {
        println!("  ⚠️  {issues} issue(s) found. See above for details.");
    }

    Ok(())
}
