//! Command-line argument definitions using clap.
//!
//! Each command has a clap-specific argument struct that converts into the
//! core parameter types from [`sop_core::params`], keeping clap out of the
//! core crate.

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use sop_core::{
    DocumentEdits, Identifier, ListDocuments, MoveStep, StepEdits, StepRef, StepUpdate,
};

/// SOP Factory: build, organize and export standard operating procedures
///
/// Every command that changes a procedure runs a complete edit session:
/// the document is opened as a draft, your changes are applied to the
/// draft, and the draft is saved in one step.
#[derive(Parser)]
#[command(version, about, name = "sop")]
pub struct Args {
    /// Path to the JSON storage file. Defaults to
    /// $XDG_DATA_HOME/sop-factory/sop-factory-data.json
    #[arg(long, global = true)]
    pub storage_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// List saved SOPs, optionally filtered
    #[command(alias = "ls")]
    List(ListArgs),
    /// Show one SOP
    #[command(alias = "s")]
    Show(IdArgs),
    /// Create a new SOP, blank or from a template
    #[command(alias = "n")]
    New(NewArgs),
    /// Edit an existing SOP
    #[command(alias = "e")]
    Edit(EditArgs),
    /// Delete an SOP
    #[command(alias = "rm")]
    Delete(IdArgs),
    /// Export an SOP as a plain-text file
    #[command(alias = "x")]
    Export(ExportArgs),
    /// List the built-in templates
    Templates,
    /// Show the quick-start guide
    Guide,
}

/// Filter the SOP list
#[derive(ClapArgs)]
pub struct ListArgs {
    /// Only show SOPs from this department ("All" shows every department)
    #[arg(short, long)]
    pub department: Option<String>,
    /// Case-insensitive search in titles and department names
    #[arg(short, long)]
    pub query: Option<String>,
}

impl From<ListArgs> for ListDocuments {
    fn from(val: ListArgs) -> Self {
        ListDocuments {
            department: val.department,
            query: val.query,
        }
    }
}

/// Identify a single SOP
#[derive(ClapArgs)]
pub struct IdArgs {
    #[arg(help = "Identifier of the SOP, as shown by `sop list`")]
    pub id: String,
}

impl From<IdArgs> for Identifier {
    fn from(val: IdArgs) -> Self {
        Identifier::from(val.id)
    }
}

/// Metadata fields shared by `new` and `edit`
#[derive(ClapArgs)]
pub struct FieldArgs {
    #[arg(short, long, help = "Title of the SOP")]
    pub title: Option<String>,
    #[arg(
        short,
        long,
        help = "Department (Front Desk, Instruction, Sales, Marketing, Operations, Management, Finance, HR, Facilities, Other)"
    )]
    pub department: Option<String>,
    #[arg(long, help = "Why this procedure exists")]
    pub purpose: Option<String>,
    #[arg(long, help = "Who or what the procedure applies to")]
    pub scope: Option<String>,
    #[arg(long, help = "Role responsible for carrying it out")]
    pub responsible: Option<String>,
    #[arg(long, help = "How often it is performed, e.g. Daily")]
    pub frequency: Option<String>,
    #[arg(long, help = "Closing notes")]
    pub notes: Option<String>,
}

impl From<FieldArgs> for DocumentEdits {
    fn from(val: FieldArgs) -> Self {
        DocumentEdits {
            title: val.title,
            department: val.department,
            purpose: val.purpose,
            scope: val.scope,
            responsible: val.responsible,
            frequency: val.frequency,
            notes: val.notes,
        }
    }
}

/// Create a new SOP
///
/// Without --template the SOP starts with a single empty step, which the
/// first --step fills.
#[derive(ClapArgs)]
pub struct NewArgs {
    #[arg(long, help = "Template position or title (see `sop templates`)")]
    pub template: Option<String>,
    #[command(flatten)]
    pub fields: FieldArgs,
    #[arg(
        short,
        long = "step",
        help = "Step description to append (repeatable)"
    )]
    pub steps: Vec<String>,
    #[arg(
        long = "set-step",
        help = "Set a step field: POSITION:FIELD=VALUE with FIELD description, details or time (repeatable)"
    )]
    pub updates: Vec<StepUpdate>,
}

impl NewArgs {
    /// Split into metadata and step edits.
    pub fn into_params(self) -> (Option<String>, DocumentEdits, StepEdits) {
        let steps = StepEdits {
            remove: Vec::new(),
            add: self.steps,
            updates: self.updates,
            moves: Vec::new(),
        };
        (self.template, self.fields.into(), steps)
    }
}

/// Edit an existing SOP
#[derive(ClapArgs)]
pub struct EditArgs {
    #[arg(help = "Identifier of the SOP to edit")]
    pub id: String,
    #[command(flatten)]
    pub fields: FieldArgs,
    #[arg(
        long = "remove-step",
        help = "Step to remove, by POSITION as listed or by step ID (repeatable)"
    )]
    pub remove_steps: Vec<StepRef>,
    #[arg(long = "add-step", help = "Step description to append (repeatable)")]
    pub add_steps: Vec<String>,
    #[arg(
        long = "set-step",
        help = "Set a step field: POSITION:FIELD=VALUE with FIELD description, details or time (repeatable)"
    )]
    pub updates: Vec<StepUpdate>,
    #[arg(
        long = "move-step",
        help = "Swap a step with its neighbour: POSITION:up or POSITION:down (repeatable)"
    )]
    pub moves: Vec<MoveStep>,
}

impl EditArgs {
    /// Split into target, metadata and step edits.
    pub fn into_params(self) -> (Identifier, DocumentEdits, StepEdits) {
        let steps = StepEdits {
            remove: self.remove_steps,
            add: self.add_steps,
            updates: self.updates,
            moves: self.moves,
        };
        (Identifier::from(self.id), self.fields.into(), steps)
    }
}

/// Export an SOP as plain text
#[derive(ClapArgs)]
pub struct ExportArgs {
    #[arg(help = "Identifier of the SOP to export")]
    pub id: String,
    #[arg(
        short,
        long,
        help = "Output file (defaults to SOP-<title>.txt in the current directory)"
    )]
    pub output: Option<PathBuf>,
    #[arg(long, conflicts_with = "output", help = "Write to standard output instead")]
    pub stdout: bool,
}
