mod common;

use std::fs;

use common::{create_test_workbench, reopen};
use sop_core::{
    templates, Department, DepartmentFilter, DocumentEdits, DocumentField, ExportReport,
    ListDocuments, ListFilter, Selection, StepEdits, StepField,
};

#[test]
fn test_end_to_end_daily_close() {
    let (_temp_dir, path, mut workbench) = create_test_workbench();

    let draft = workbench.create_blank();
    draft.set_field(DocumentField::Title, "Daily Close");
    draft.set_department(Department::Operations);
    let first = draft.document().steps[0].id.clone();
    draft
        .update_step(&first, StepField::Description, "Lock doors")
        .expect("Failed to update step");
    let second = draft.add_step();
    draft
        .update_step(&second, StepField::Description, "Count register")
        .expect("Failed to update step");
    let committed = workbench.commit().expect("Failed to commit");

    let all = workbench.documents();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].title, "Daily Close");
    assert_eq!(all[0].steps.len(), 2);
    assert_eq!(all[0].steps[0].description, "Lock doors");
    assert_eq!(all[0].steps[1].description, "Count register");

    let text = workbench
        .export(&committed.id)
        .expect("Failed to export")
        .to_string();
    let procedure = text.find("PROCEDURE:").expect("Missing PROCEDURE block");
    let lock = text.find("1. Lock doors").expect("Missing first step");
    let count = text.find("2. Count register").expect("Missing second step");
    assert!(procedure < lock && lock < count);

    let reopened = reopen(&path);
    assert_eq!(reopened.documents(), workbench.documents());
}

#[test]
fn test_uncommitted_draft_is_lost_on_restart() {
    let (_temp_dir, path, mut workbench) = create_test_workbench();
    workbench
        .create_blank()
        .set_field(DocumentField::Title, "Never saved");

    let reopened = reopen(&path);

    assert!(reopened.documents().is_empty());
    assert_eq!(reopened.selection(), &Selection::NoSelection);
}

#[test]
fn test_corrupt_snapshot_starts_empty() {
    let (_temp_dir, path, _workbench) = create_test_workbench();
    fs::write(&path, "{ definitely not a snapshot").expect("Failed to write file");

    let mut workbench = reopen(&path);
    assert!(workbench.documents().is_empty());

    // The next commit overwrites the corrupt file with a valid snapshot
    workbench.create_from_template(&templates::catalog()[0]);
    workbench.commit().expect("Failed to commit");
    assert_eq!(reopen(&path).documents().len(), 1);
}

#[test]
fn test_snapshot_is_a_json_array_with_camel_case_fields() {
    let (_temp_dir, path, mut workbench) = create_test_workbench();
    workbench.create_from_template(&templates::catalog()[2]);
    workbench.commit().expect("Failed to commit");

    let raw = fs::read_to_string(&path).expect("Failed to read snapshot");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("Invalid JSON");

    let record = &value.as_array().expect("Snapshot is not an array")[0];
    assert_eq!(record["department"], "Sales");
    assert!(record["steps"][0]["estimatedTime"].is_string());
    assert!(record["createdAt"].is_string());
    assert!(record["updatedAt"].is_string());
}

#[test]
fn test_filtering_sales_documents() {
    let (_temp_dir, _path, mut workbench) = create_test_workbench();
    for (title, department) in [
        ("Upsell", Department::Sales),
        ("Open", Department::Operations),
        ("Follow up", Department::Sales),
    ] {
        let draft = workbench.create_blank();
        draft.set_field(DocumentField::Title, title);
        draft.set_department(department);
        workbench.commit().expect("Failed to commit");
    }

    let filter = ListFilter {
        department: DepartmentFilter::Only(Department::Sales),
        query: String::new(),
    };
    let titles: Vec<&str> = workbench
        .list(&filter)
        .iter()
        .map(|d| d.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Upsell", "Follow up"]);

    let params = ListDocuments {
        department: Some("All".to_string()),
        query: Some("OPEN".to_string()),
    };
    let filter = ListFilter::try_from(&params).expect("Invalid filter");
    assert_eq!(workbench.list(&filter).len(), 1);
}

#[test]
fn test_param_edits_round_trip_through_commit() {
    let (_temp_dir, path, mut workbench) = create_test_workbench();
    let draft = workbench.create_blank();
    DocumentEdits {
        title: Some("Inventory".to_string()),
        department: Some("facilities".to_string()),
        notes: Some("Monthly".to_string()),
        ..Default::default()
    }
    .apply(draft)
    .expect("Failed to apply edits");
    StepEdits {
        add: vec!["Count".to_string(), "Reorder".to_string()],
        moves: vec!["2:up".parse().expect("Invalid move")],
        ..Default::default()
    }
    .apply(draft, true)
    .expect("Failed to apply step edits");
    let doc = workbench.commit().expect("Failed to commit");

    let stored = reopen(&path);
    let stored = stored.store().get(&doc.id).expect("Missing document");
    assert_eq!(stored.department, Department::Facilities);
    assert_eq!(stored.notes, "Monthly");
    assert_eq!(stored.steps[0].description, "Reorder");
    assert_eq!(stored.steps[1].description, "Count");
}

#[test]
fn test_export_file_name_and_determinism() {
    let (_temp_dir, _path, mut workbench) = create_test_workbench();
    workbench.create_from_template(&templates::catalog()[3]);
    let doc = workbench.commit().expect("Failed to commit");

    let report = ExportReport::new(&doc);
    assert_eq!(report.file_name(), "SOP-Student-Retention-Call.txt");
    assert_eq!(report.to_string(), ExportReport::new(&doc).to_string());
    assert!(report
        .to_string()
        .contains("     Est. Time: 3 min each"));
}

#[test]
fn test_delete_persists() {
    let (_temp_dir, path, mut workbench) = create_test_workbench();
    workbench.create_blank();
    let doc = workbench.commit().expect("Failed to commit");

    assert!(workbench.delete(&doc.id).expect("Failed to delete"));

    assert!(reopen(&path).documents().is_empty());
}
