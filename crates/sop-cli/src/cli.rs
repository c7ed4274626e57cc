//! Command handlers.
//!
//! [`Cli`] drives the core [`Workbench`] exclusively through its public
//! operations: select or create a draft, apply edits, commit. A failed
//! snapshot write is reported as a warning because the commit itself has
//! already taken effect.

use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use log::{debug, warn};
use sop_core::{
    display::Guide, templates, CommitResult, DeleteResult, DocumentSummaries, Identifier,
    ListDocuments, ListFilter, OperationStatus, SopError, StoragePort, Templates, Workbench,
};

use crate::{
    args::{EditArgs, ExportArgs, NewArgs},
    renderer::TerminalRenderer,
};

/// Command-line front end over a workbench.
pub struct Cli<S> {
    workbench: Workbench<S>,
    renderer: TerminalRenderer,
}

impl<S: StoragePort> Cli<S> {
    pub fn new(workbench: Workbench<S>, renderer: TerminalRenderer) -> Self {
        Self {
            workbench,
            renderer,
        }
    }

    /// List stored SOPs matching the given criteria.
    pub fn list(&self, params: &ListDocuments) -> Result<()> {
        debug!("list: {:?}", params);
        let filter = ListFilter::try_from(params)?;
        let documents = self.workbench.list(&filter);
        let total = self.workbench.documents().len();

        let mut output = String::from("# SOPs\n\n");
        if filter.is_active() {
            output.push_str(&format!(
                "Showing {} of {} SOP(s)\n\n",
                documents.len(),
                total
            ));
        }
        output.push_str(&DocumentSummaries::new(documents, total).to_string());
        if total == 0 {
            output.push('\n');
            output.push_str(&Templates(templates::catalog()).to_string());
        }
        self.renderer.render(&output)
    }

    /// Show one SOP.
    pub fn show(&mut self, id: &Identifier) -> Result<()> {
        let doc = self.workbench.select(id)?;
        self.renderer.render(&doc.to_string())
    }

    /// Create, fill in and save a new SOP.
    pub fn create(&mut self, args: NewArgs) -> Result<()> {
        let (template, fields, steps) = args.into_params();
        let template = template.as_deref().map(templates::find).transpose()?;

        let draft = match template {
            Some(template) => self.workbench.create_from_template(template),
            None => self.workbench.create_blank(),
        };
        fields.apply(draft)?;
        steps.apply(draft, template.is_none())?;

        self.commit(true)
    }

    /// Open an SOP as a draft, apply edits and save it.
    pub fn edit(&mut self, args: EditArgs) -> Result<()> {
        let (id, fields, steps) = args.into_params();
        self.workbench.select(&id)?;

        let draft = self.workbench.edit()?;
        fields.apply(draft)?;
        steps.apply(draft, false)?;

        self.commit(false)
    }

    /// Delete an SOP.
    pub fn delete(&mut self, id: Identifier) -> Result<()> {
        let title = self.workbench.store().get(&id).map(|d| d.title.clone());
        let outcome = self.workbench.delete(&id);
        let mut output = DeleteResult::new(id, title).to_string();
        Self::append_persistence_warning(&mut output, outcome)?;
        self.renderer.render(&output)
    }

    /// Export an SOP as plain text to a file or standard output.
    pub fn export(&self, args: ExportArgs) -> Result<()> {
        let id = Identifier::from(args.id);
        let report = self.workbench.export(&id)?;

        if args.stdout {
            println!("{report}");
            return Ok(());
        }

        let path = args
            .output
            .unwrap_or_else(|| PathBuf::from(safe_file_name(&report.file_name())));
        fs::write(&path, report.to_string())
            .with_context(|| format!("Failed to write export to {}", path.display()))?;

        let status = OperationStatus::success(format!(
            "Exported '{}' to {}",
            report.document().title,
            path.display()
        ));
        self.renderer.render(&status.to_string())
    }

    /// List the built-in templates.
    pub fn templates(&self) -> Result<()> {
        let output = format!("# Templates\n\n{}", Templates(templates::catalog()));
        self.renderer.render(&output)
    }

    /// Show the quick-start guide.
    pub fn guide(&self) -> Result<()> {
        self.renderer.render(&Guide.to_string())
    }

    fn commit(&mut self, created: bool) -> Result<()> {
        let (committed, outcome) = match self.workbench.commit() {
            Ok(doc) => (doc, Ok(())),
            Err(e) if e.is_persistence() => {
                let doc = self
                    .workbench
                    .current()
                    .cloned()
                    .context("Commit left no document selected")?;
                (doc, Err(e))
            }
            Err(e) => return Err(e.into()),
        };

        let mut output = CommitResult::new(committed, created).to_string();
        Self::append_persistence_warning(&mut output, outcome)?;
        self.renderer.render(&output)
    }

    /// Turns a persistence failure into a warning line; other errors
    /// propagate.
    fn append_persistence_warning<T>(
        output: &mut String,
        outcome: std::result::Result<T, SopError>,
    ) -> Result<()> {
        match outcome {
            Ok(_) => Ok(()),
            Err(e) if e.is_persistence() => {
                warn!("Changes kept for this session only: {e}");
                let status = OperationStatus::warning(format!(
                    "Changes could not be saved to disk and will be lost on exit: {e}"
                ));
                output.push('\n');
                output.push_str(&status.to_string());
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// Replaces characters that cannot appear in a single file name, so the
/// export lands in the current directory whatever the title contains.
fn safe_file_name(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '-',
            c if c.is_control() => '-',
            c => c,
        })
        .collect()
}
