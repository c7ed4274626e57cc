//! Read-only catalog of pre-filled procedures used to seed new documents.

use jiff::Timestamp;

use crate::{
    error::{Result, SopError},
    models::{Department, Document, Identifier, Step},
};

/// A seed document body: every field except identifiers and timestamps.
#[derive(Debug, PartialEq, Eq)]
pub struct Template {
    pub title: &'static str,
    pub department: Department,
    pub purpose: &'static str,
    pub scope: &'static str,
    pub responsible: &'static str,
    pub frequency: &'static str,
    pub steps: &'static [TemplateStep],
    pub notes: &'static str,
}

/// A step body within a [`Template`].
#[derive(Debug, PartialEq, Eq)]
pub struct TemplateStep {
    pub description: &'static str,
    pub details: &'static str,
    pub estimated_time: &'static str,
}

impl Template {
    /// Creates a new document from this template.
    ///
    /// The document and each of its steps receive fresh identifiers, so two
    /// documents instantiated from the same template share no identity.
    /// `created_at` and `updated_at` are both set to now.
    pub fn instantiate(&self) -> Document {
        let now = Timestamp::now();
        Document {
            id: Identifier::generate(),
            title: self.title.to_string(),
            department: self.department,
            purpose: self.purpose.to_string(),
            scope: self.scope.to_string(),
            responsible: self.responsible.to_string(),
            frequency: self.frequency.to_string(),
            steps: self.steps.iter().map(TemplateStep::instantiate).collect(),
            notes: self.notes.to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl TemplateStep {
    fn instantiate(&self) -> Step {
        Step {
            id: Identifier::generate(),
            description: self.description.to_string(),
            details: self.details.to_string(),
            estimated_time: self.estimated_time.to_string(),
        }
    }
}

/// All templates in presentation order.
pub fn catalog() -> &'static [Template] {
    &CATALOG
}

/// Finds a template by 1-based position or case-insensitive title.
///
/// ```rust
/// use sop_core::templates;
///
/// assert_eq!(templates::find("1").unwrap().title, "Opening Procedures");
/// assert_eq!(templates::find("closing procedures").unwrap().title, "Closing Procedures");
/// assert!(templates::find("9").is_err());
/// ```
pub fn find(key: &str) -> Result<&'static Template> {
    let key = key.trim();
    let found = match key.parse::<usize>() {
        Ok(position) => position.checked_sub(1).and_then(|i| CATALOG.get(i)),
        Err(_) => CATALOG.iter().find(|t| t.title.eq_ignore_ascii_case(key)),
    };
    found.ok_or_else(|| SopError::TemplateNotFound {
        name: key.to_string(),
    })
}

static CATALOG: [Template; 5] = [
    Template {
        title: "Opening Procedures",
        department: Department::Operations,
        purpose: "Ensure the facility is ready for students and staff each day with consistent quality and safety standards.",
        scope: "All staff members responsible for opening shifts.",
        responsible: "Opening Staff / Manager on Duty",
        frequency: "Daily",
        steps: &[
            TemplateStep {
                description: "Unlock facility and disarm security system",
                details: "Use assigned code. Check all entry points.",
                estimated_time: "2 min",
            },
            TemplateStep {
                description: "Turn on all lights and HVAC system",
                details: "Check thermostat is set to 72°F. Verify all zones are on.",
                estimated_time: "2 min",
            },
            TemplateStep {
                description: "Inspect training floor and equipment",
                details: "Check for hazards, cleanliness, and equipment condition. Report issues.",
                estimated_time: "5 min",
            },
            TemplateStep {
                description: "Boot up computers and POS system",
                details: "Verify internet connection. Open scheduling software.",
                estimated_time: "3 min",
            },
            TemplateStep {
                description: "Review day's schedule and prepare materials",
                details: "Check class schedule, appointments, and any special events.",
                estimated_time: "5 min",
            },
            TemplateStep {
                description: "Set out welcome signage and retail displays",
                details: "Ensure all displays are stocked and presentable.",
                estimated_time: "3 min",
            },
        ],
        notes: "Opening staff should arrive 30 minutes before first class. Any issues should be reported immediately to the manager on duty.",
    },
    Template {
        title: "Closing Procedures",
        department: Department::Operations,
        purpose: "Secure the facility and ensure everything is ready for the next business day.",
        scope: "All staff members responsible for closing shifts.",
        responsible: "Closing Staff / Manager on Duty",
        frequency: "Daily",
        steps: &[
            TemplateStep {
                description: "Complete all end-of-day financial reconciliation",
                details: "Balance register, process pending payments.",
                estimated_time: "10 min",
            },
            TemplateStep {
                description: "Clean and sanitize all training areas",
                details: "Mop floors, wipe equipment, empty trash cans.",
                estimated_time: "15 min",
            },
            TemplateStep {
                description: "Restock supplies and retail inventory",
                details: "Check bathroom supplies, retail displays, water station.",
                estimated_time: "5 min",
            },
            TemplateStep {
                description: "Shut down computers and POS system",
                details: "Close all applications, run backups if scheduled.",
                estimated_time: "3 min",
            },
            TemplateStep {
                description: "Set security system and lock all doors",
                details: "Check all exits, set alarm with assigned code.",
                estimated_time: "3 min",
            },
        ],
        notes: "Closing staff should not leave until all checklist items are complete. Log completion in the Manager's Log app.",
    },
    Template {
        title: "New Student Enrollment",
        department: Department::Sales,
        purpose: "Provide a consistent, welcoming enrollment experience that converts trials into memberships.",
        scope: "Front desk staff and program directors.",
        responsible: "Front Desk / Sales Team",
        frequency: "Per enrollment",
        steps: &[
            TemplateStep {
                description: "Greet student/parent warmly and offer a tour",
                details: "Use their first name. Ask what brought them in today.",
                estimated_time: "5 min",
            },
            TemplateStep {
                description: "Conduct facility tour highlighting key areas",
                details: "Show training areas, amenities, achievement wall, and schedule board.",
                estimated_time: "10 min",
            },
            TemplateStep {
                description: "Present program options and pricing",
                details: "Match their goals to the right program. Show value, not just price.",
                estimated_time: "10 min",
            },
            TemplateStep {
                description: "Complete enrollment paperwork and waiver",
                details: "Collect all required information, emergency contacts, medical notes.",
                estimated_time: "10 min",
            },
            TemplateStep {
                description: "Process payment and set up account in GHL",
                details: "Enter into CRM, set up billing, send welcome email.",
                estimated_time: "5 min",
            },
            TemplateStep {
                description: "Schedule first class and introduce to instructor",
                details: "Personal introduction builds connection. Walk them to the training area.",
                estimated_time: "5 min",
            },
        ],
        notes: "Follow up within 24 hours with a welcome text. Schedule a check-in call at 7 days and 30 days.",
    },
    Template {
        title: "Student Retention Call",
        department: Department::Management,
        purpose: "Proactively reach out to at-risk students before they cancel, showing them they matter.",
        scope: "Program directors and managers.",
        responsible: "Program Director",
        frequency: "Weekly (check attendance triggers)",
        steps: &[
            TemplateStep {
                description: "Pull attendance report for missed students",
                details: "Check for students who missed 2+ classes in a row.",
                estimated_time: "5 min",
            },
            TemplateStep {
                description: "Prioritize by risk level",
                details: "New students (< 90 days) are highest risk. Long-term students who suddenly stop are next.",
                estimated_time: "5 min",
            },
            TemplateStep {
                description: "Make personal phone calls (not texts)",
                details: "Say: 'Hi [Name], this is [You] from [School]. We noticed you missed class and wanted to check in. Everything okay?'",
                estimated_time: "3 min each",
            },
            TemplateStep {
                description: "Listen and address concerns",
                details: "Don't sell. Listen. Offer solutions: schedule change, private lesson, catch-up class.",
                estimated_time: "5 min each",
            },
            TemplateStep {
                description: "Log outcome in Manager's Log",
                details: "Record response, next steps, and follow-up date.",
                estimated_time: "2 min each",
            },
        ],
        notes: "The goal is connection, not sales. Students who feel cared about stay longer. Track retention rate monthly.",
    },
    Template {
        title: "Social Media Content Posting",
        department: Department::Marketing,
        purpose: "Maintain consistent social media presence to attract new students and engage current ones.",
        scope: "Marketing team or designated social media manager.",
        responsible: "Marketing Manager",
        frequency: "Daily",
        steps: &[
            TemplateStep {
                description: "Check content calendar for today's planned post",
                details: "Reference the monthly marketing plan in the Daily Marketing app.",
                estimated_time: "2 min",
            },
            TemplateStep {
                description: "Create or queue content (photo/video/graphic)",
                details: "Use Canva for graphics. Authentic photos and videos perform best.",
                estimated_time: "15 min",
            },
            TemplateStep {
                description: "Write engaging caption with call-to-action",
                details: "Keep it authentic. End with a question or CTA. Use 3-5 relevant hashtags.",
                estimated_time: "5 min",
            },
            TemplateStep {
                description: "Post to all platforms (FB Group, FB Page, GHL Communities)",
                details: "Use the Social Media app for quick access to all platforms.",
                estimated_time: "5 min",
            },
            TemplateStep {
                description: "Respond to all comments within 2 hours",
                details: "Engagement drives algorithm. Every comment deserves a response.",
                estimated_time: "Ongoing",
            },
        ],
        notes: "Best posting times: 7-9 AM, 12-1 PM, 6-8 PM. Video content gets 3x more engagement than photos. Use Canva via the AI Tools app.",
    },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_catalog_contents() {
        let titles: Vec<&str> = catalog().iter().map(|t| t.title).collect();
        assert_eq!(
            titles,
            vec![
                "Opening Procedures",
                "Closing Procedures",
                "New Student Enrollment",
                "Student Retention Call",
                "Social Media Content Posting",
            ]
        );
        assert_eq!(catalog()[0].steps.len(), 6);
        assert_eq!(catalog()[2].department, Department::Sales);
    }

    #[test]
    fn test_instantiate_copies_body() {
        let template = &catalog()[1];
        let doc = template.instantiate();

        assert_eq!(doc.title, template.title);
        assert_eq!(doc.notes, template.notes);
        assert_eq!(doc.steps.len(), template.steps.len());
        assert_eq!(doc.steps[0].description, template.steps[0].description);
        assert_eq!(doc.steps[0].estimated_time, "10 min");
        assert_eq!(doc.created_at, doc.updated_at);
    }

    #[test]
    fn test_instantiations_share_no_identity() {
        let template = &catalog()[0];
        let a = template.instantiate();
        let b = template.instantiate();

        assert_ne!(a.id, b.id);
        let a_steps: HashSet<_> = a.steps.iter().map(|s| s.id.clone()).collect();
        let b_steps: HashSet<_> = b.steps.iter().map(|s| s.id.clone()).collect();
        assert_eq!(a_steps.len(), a.steps.len());
        assert!(a_steps.is_disjoint(&b_steps));
    }

    #[test]
    fn test_find_rejects_zero_and_unknown() {
        assert!(find("0").is_err());
        assert!(find("Fire Drill").is_err());
        assert_eq!(find(" 5 ").unwrap().department, Department::Marketing);
    }
}
