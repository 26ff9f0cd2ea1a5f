//! PDF export engine.
//!
//! Consumes a [`Resume`] and a [`Template`] and produces a paginated A4
//! document in a single sequential pass. Rendering happens entirely in
//! memory; the output file is written only after every section has drawn
//! successfully, so a failed export leaves no partial document behind.

pub mod date;
pub mod layout;
pub mod sections;

pub use date::{date_range, format_year_month};
pub use layout::{Align, Composer, FontStyle, TextOptions};

use crate::error::Result;
use crate::model::{Resume, Template};
use crate::pdf::Document;
use std::path::Path;
use tracing::{error, info};

/// Derives the download file name from the applicant's name: whitespace runs
/// become underscores, an unset name falls back to the fixed default.
pub fn export_file_name(full_name: &str) -> String {
    let name = full_name.trim();
    if name.is_empty() {
        return "Resume.pdf".to_string();
    }
    let joined: Vec<&str> = name.split_whitespace().collect();
    format!("{}_Resume.pdf", joined.join("_"))
}

/// Renders the resume into a PDF document without touching the filesystem.
pub fn render_document(resume: &Resume, template: Template) -> Document {
    let mut composer = Composer::new();

    sections::header(&mut composer, resume, template);
    sections::summary(&mut composer, resume);
    sections::work_experience(&mut composer, resume);
    sections::education(&mut composer, resume);
    sections::skills(&mut composer, resume);

    let mut document = Document::new();
    document.set_title(format!(
        "{} - Resume",
        resume.personal_info.display_name()
    ));
    document.set_author(resume.personal_info.display_name());
    for page in composer.finish() {
        document.add_page(page);
    }
    document
}

/// Exports the resume as a PDF at `path`.
pub fn export_resume(resume: &Resume, template: Template, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let document = render_document(resume, template);
    match document.save(path) {
        Ok(()) => {
            info!(
                path = %path.display(),
                %template,
                pages = document.page_count(),
                "resume exported"
            );
            Ok(())
        }
        Err(err) => {
            error!(path = %path.display(), %err, "export failed");
            Err(err)
        }
    }
}
