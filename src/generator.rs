//! Render-validate-write orchestration.
//! A template is rendered against a context, the result is checked to be a
//! well-formed JSON document, and the document is written out with stable
//! formatting.

use crate::context::Context;
use crate::document::Document;
use crate::error::{Error, Result};
use crate::renderer::{MiniJinjaRenderer, TemplateRenderer};
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

/// Renders templates from a single template root into JSON configuration files.
pub struct ConfigRenderer<R: TemplateRenderer = MiniJinjaRenderer> {
    engine: R,
}

impl ConfigRenderer<MiniJinjaRenderer> {
    /// Creates a renderer backed by MiniJinja, loading templates from `template_root`.
    pub fn new<P: AsRef<Path>>(template_root: P) -> Self {
        Self { engine: MiniJinjaRenderer::new(template_root) }
    }
}

impl<R: TemplateRenderer> ConfigRenderer<R> {
    /// Creates a renderer around an arbitrary template engine.
    pub fn with_engine(engine: R) -> Self {
        Self { engine }
    }

    /// Renders `template` with `context` and returns the validated document.
    ///
    /// # Errors
    /// * Any error from the template engine
    /// * `Error::InvalidOutput` if the rendered text is not valid JSON
    pub fn render_document(&self, template: &str, context: &Context) -> Result<Document> {
        let raw_output = self.engine.render_template(template, context)?;
        debug!("Template '{}' rendered {} bytes.", template, raw_output.len());

        Document::parse(&raw_output)
            .map_err(|source| Error::InvalidOutput { template: template.to_string(), source })
    }

    /// Renders `template` with `context` and writes the formatted document to `output_file`.
    ///
    /// Nothing is written unless rendering and validation both succeed. The
    /// parent directory of `output_file` must already exist; an existing file
    /// is replaced.
    pub fn render<P: AsRef<Path>>(
        &self,
        template: &str,
        output_file: P,
        context: &Context,
    ) -> Result<()> {
        let output_file = output_file.as_ref();
        let document = self.render_document(template, context)?;
        let content = document.to_pretty_string()?;

        fs::write(output_file, content).map_err(|source| Error::OutputWriteError {
            path: output_file.to_path_buf(),
            source,
        })?;

        info!("Wrote '{}' from template '{}'.", output_file.display(), template);
        Ok(())
    }
}

/// Generates a final config file from a template and some context.
///
/// # Arguments
/// * `template_root` - Directory holding the template and anything it includes
/// * `template` - Template name relative to `template_root`
/// * `output_file` - Destination path, replaced if present
/// * `context` - Values for the template's placeholders
pub fn generate_config<P, O>(
    template_root: P,
    template: &str,
    output_file: O,
    context: &Context,
) -> Result<()>
where
    P: AsRef<Path>,
    O: AsRef<Path>,
{
    ConfigRenderer::new(template_root).render(template, output_file, context)
}

/// One template rendered into one output file.
#[derive(Debug, Clone)]
pub struct Job {
    pub template: String,
    pub output_file: PathBuf,
    pub context: Context,
}

impl Job {
    pub fn new<T: Into<String>, P: Into<PathBuf>>(
        template: T,
        output_file: P,
        context: Context,
    ) -> Self {
        Self { template: template.into(), output_file: output_file.into(), context }
    }
}

/// Runs every job in order, stopping at the first failure.
///
/// # Returns
/// * `Result<Vec<PathBuf>>` - Paths written, in job order
pub fn run_jobs<R: TemplateRenderer>(
    renderer: &ConfigRenderer<R>,
    jobs: &[Job],
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(jobs.len());
    for job in jobs {
        debug!("Generating '{}' from '{}'.", job.output_file.display(), job.template);
        renderer.render(&job.template, &job.output_file, &job.context)?;
        written.push(job.output_file.clone());
    }
    Ok(written)
}
