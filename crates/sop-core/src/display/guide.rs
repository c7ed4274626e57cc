//! Quick-start guide shown by the host's help command.

use std::fmt;

struct Section {
    title: &'static str,
    subtitle: &'static str,
    description: &'static str,
    tip: &'static str,
}

const SECTIONS: [Section; 3] = [
    Section {
        title: "Step 1: Create a New SOP",
        subtitle: "Document any business procedure",
        description: "Start fresh with `sop new`, or pick a pre-loaded template with `sop new --template`. Fill in the title, department, purpose, and add your step-by-step procedure. Each step can include details and estimated time.",
        tip: "Start with your most-repeated tasks, the ones you explain to new hires over and over.",
    },
    Section {
        title: "Step 2: Organize & Manage",
        subtitle: "Keep your SOPs organized by department",
        description: "Every saved SOP is stored automatically. Filter by department, search by keyword, or browse the full list. Open any SOP to view, edit, or update it as your processes evolve.",
        tip: "Review SOPs quarterly to keep them current. Outdated procedures are worse than no procedures.",
    },
    Section {
        title: "Step 3: Export & Share",
        subtitle: "Print or export for your team",
        description: "Export any SOP as a text file for sharing or printing. Your SOPs become the training manual for every new team member.",
        tip: "Print your most critical SOPs and keep them in a binder at the front desk for quick reference.",
    },
];

/// The three-part quick-start guide, formatted as markdown.
pub struct Guide;

impl fmt::Display for Guide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# How to Use SOP Factory")?;
        for section in &SECTIONS {
            writeln!(f)?;
            writeln!(f, "## {}", section.title)?;
            writeln!(f)?;
            writeln!(f, "*{}*", section.subtitle)?;
            writeln!(f)?;
            writeln!(f, "{}", section.description)?;
            writeln!(f)?;
            writeln!(f, "> **Tip:** {}", section.tip)?;
        }
        Ok(())
    }
}
