pub mod backends;
pub mod doctor;
pub mod explain;
pub mod prompt;

use std::path::PathBuf;
use std::process::ExitCode;

use ingen_config::Configuration;
use ingen_core::Error;
use ingen_explain::ExplanationPipeline;

/// File locations shared by every command.
pub struct Paths {
    pub config: PathBuf,
    pub log: PathBuf,
}

impl Paths {
    pub fn pipeline(&self) -> Result<ExplanationPipeline, Error> {
        let config = Configuration::load(&self.config)?;
        Ok(ExplanationPipeline::new(config, &self.log))
    }
}

/// Distinct exit codes so scripts can tell failure categories apart.
pub fn exit_code(err: &Error) -> ExitCode {
    match err {
        Error::Config(_) => ExitCode::from(2),
        Error::FileAccess(_) => ExitCode::from(3),
        Error::Backend(_) => ExitCode::from(4),
        Error::Output(_) => ExitCode::from(5),
    }
}
