use crate::adapters::document::{HtmlDocument, MemoryDocument};
use crate::core::loader::CardLoader;
use crate::core::{ConfigProvider, ProfileSource, RandomSource, StudentCard};
use crate::utils::error::{CardError, Result};

/// Where the rendered card ended up.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderedOutput {
    /// Page written to this path.
    File(String),
    /// Page rendered from a template without an output path.
    Html(String),
    /// Plain element values.
    Elements(MemoryDocument),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderReport {
    pub card: StudentCard,
    pub output: RenderedOutput,
}

/// Runs the loader against the document kind the config asks for.
pub async fn render_card<S, R, C>(loader: &mut CardLoader<S, R>, config: &C) -> Result<RenderReport>
where
    S: ProfileSource,
    R: RandomSource,
    C: ConfigProvider,
{
    if config.template_path().is_none() && config.output_path().is_none() {
        let mut document = MemoryDocument::with_card_elements();
        let card = loader.run(&mut document).await?;
        return Ok(RenderReport {
            card,
            output: RenderedOutput::Elements(document),
        });
    }

    let mut document = match config.template_path() {
        Some(path) => HtmlDocument::load(path).map_err(|e| {
            tracing::error!(error = ?e, "Cannot read template {}: {}", path, e);
            e
        })?,
        None => HtmlDocument::bundled(),
    };

    let card = loader.run(&mut document).await?;

    let output = match config.output_path() {
        Some(path) => {
            document.save(path).map_err(|e| {
                tracing::error!(error = ?e, "Cannot write student card to {}: {}", path, e);
                e
            })?;
            RenderedOutput::File(path.to_string())
        }
        None => RenderedOutput::Html(document.html().to_string()),
    };

    Ok(RenderReport { card, output })
}

/// Recovery hint for a failure the loader has already logged. Goes out at info level so the
/// loader's error record stays the only diagnostic.
pub fn log_recovery_hint(error: &CardError) {
    tracing::info!("💡 {}", error.recovery_suggestion());
}
