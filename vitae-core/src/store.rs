//! Session persistence.
//!
//! The store mirrors the resume and the selected template to a single JSON
//! file so edits survive across invocations. A missing or unparsable file
//! falls back to default values instead of failing the command that needed
//! the data.

use crate::error::Result;
use crate::model::{Resume, Template};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// On-disk layout of the store file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StoreDocument {
    #[serde(rename = "resumeData", default)]
    resume: Resume,
    #[serde(rename = "selectedTemplate", default)]
    template: Template,
}

/// File-backed key-value store for the resume and template selection.
pub struct Store {
    path: PathBuf,
    document: StoreDocument,
}

impl Store {
    /// Opens the store at `path`, loading its contents if present.
    ///
    /// A file that does not exist or does not parse yields the default
    /// resume and template; parse failures are logged, never propagated.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let document = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(document) => document,
                Err(err) => {
                    warn!(path = %path.display(), %err, "store file is unparsable, starting fresh");
                    StoreDocument::default()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no store file yet, starting fresh");
                StoreDocument::default()
            }
            Err(err) => return Err(err.into()),
        };
        Ok(Self { path, document })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn resume(&self) -> &Resume {
        &self.document.resume
    }

    pub fn resume_mut(&mut self) -> &mut Resume {
        &mut self.document.resume
    }

    pub fn template(&self) -> Template {
        self.document.template
    }

    pub fn set_template(&mut self, template: Template) {
        self.document.template = template;
    }

    /// Writes the store back to disk.
    ///
    /// The document is serialized to a sibling temp file first and renamed
    /// into place, so a failed write never clobbers the previous state.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let raw = serde_json::to_string_pretty(&self.document)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, raw)?;
        fs::rename(&tmp, &self.path)?;
        debug!(path = %self.path.display(), "store saved");
        Ok(())
    }
}
