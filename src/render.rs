use std::fs;
use std::path::Path;

use crate::errors::RenderError;

/// Converts slip template markup into the bytes of a finished document.
///
/// Implementations must be deterministic: rendering the same template twice
/// produces byte-identical output. The worker treats the result as an opaque
/// artifact.
pub trait DocumentRenderer: Send + Sync {
    fn render(&self, template: &[u8]) -> Result<Vec<u8>, RenderError>;
}

/// Renders the HTML slip template into a fixed-width text document layout.
#[derive(Debug)]
pub struct HtmlSlipRenderer {
    width: usize,
}

impl HtmlSlipRenderer {
    pub fn new(width: usize) -> Self {
        HtmlSlipRenderer { width }
    }
}

impl Default for HtmlSlipRenderer {
    fn default() -> Self {
        HtmlSlipRenderer::new(80)
    }
}

impl DocumentRenderer for HtmlSlipRenderer {
    fn render(&self, template: &[u8]) -> Result<Vec<u8>, RenderError> {
        let text = html2text::from_read(template, self.width)
            .map_err(|e| RenderError::Malformed(e.to_string()))?;

        Ok(text.into_bytes())
    }
}

/// Reads the fixed template file, renders it, and returns the artifact bytes.
///
/// When a staging path is given the artifact is written there and read back
/// before transmission; the staging file is disposable afterwards. Every
/// failure here is recoverable per message, not fatal to the process.
pub fn render_from_template<R>(
    renderer: &R,
    template_path: &Path,
    staging_path: Option<&Path>,
) -> Result<Vec<u8>, RenderError>
where
    R: DocumentRenderer + ?Sized,
{
    let template = fs::read(template_path).map_err(|e| RenderError::TemplateNotFound {
        path: template_path.to_path_buf(),
        source: e,
    })?;

    let document = renderer.render(&template)?;

    match staging_path {
        Some(path) => {
            fs::write(path, &document).map_err(|e| RenderError::Staging {
                path: path.to_path_buf(),
                source: e,
            })?;
            fs::read(path).map_err(|e| RenderError::Staging {
                path: path.to_path_buf(),
                source: e,
            })
        }
        None => Ok(document),
    }
}
