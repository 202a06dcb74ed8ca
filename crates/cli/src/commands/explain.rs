//! `ingen explain` — Generate an explanation for the adaptation log.

use ingen_core::Error;

use super::Paths;

pub async fn run(paths: &Paths, intent_id: &str) -> Result<(), Error> {
    let pipeline = paths.pipeline()?;
    tracing::debug!(?pipeline, "Pipeline ready");

    let explanation = pipeline.generate(intent_id).await?;
    println!("{explanation}");

    Ok(())
}
