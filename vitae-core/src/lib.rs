//! # vitae
//!
//! Resume builder core: a structured resume data model, a JSON-backed
//! session store, plain-text template previews, and a native PDF export
//! engine with no external PDF dependencies.
//!
//! ## Quick start
//!
//! ```rust
//! use vitae::model::{Resume, Template};
//! use vitae::export::{export_file_name, render_document};
//!
//! let mut resume = Resume::new();
//! resume.personal_info.full_name = "Jane Doe".to_string();
//! resume.personal_info.summary = "Engineer with a decade of shipping.".to_string();
//!
//! let name = export_file_name(&resume.personal_info.full_name);
//! assert_eq!(name, "Jane_Doe_Resume.pdf");
//!
//! let document = render_document(&resume, Template::Modern);
//! let bytes = document.to_bytes()?;
//! assert!(bytes.starts_with(b"%PDF-1.7"));
//! # Ok::<(), vitae::VitaeError>(())
//! ```
//!
//! ## Modules
//!
//! - [`model`] - the resume aggregate and its update operations
//! - [`store`] - file-backed persistence for resume and template choice
//! - [`render`] - plain-text preview in the three template styles
//! - [`pdf`] - minimal native PDF document/page/writer layer
//! - [`export`] - the layout engine that turns a resume into PDF pages

pub mod error;
pub mod export;
pub mod model;
pub mod pdf;
pub mod render;
pub mod store;

pub use error::{Result, VitaeError};
pub use export::{export_file_name, export_resume, render_document};
pub use model::{Resume, Template};
pub use render::render_preview;
pub use store::Store;
