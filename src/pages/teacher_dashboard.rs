//! Teacher dashboard: assignments with submission progress.

use chrono::{Local, NaiveDate};
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::components::cards::{badge, progress_bar, section, stat_card};
use crate::constants::CSS_PAGE;
use crate::dom_utils::{append, append_text, el};
use crate::mock_data::{self, Assignment, AssignmentStatus};

use super::page_header;

pub fn render(document: &Document) -> Result<Element, JsValue> {
    let today = Local::now().date_naive();
    let assignments = mock_data::teacher_assignments();

    let page = el(document, "main", &format!("{} teacher-dashboard", CSS_PAGE))?;
    let header = page_header(document, "Teacher Dashboard")?;
    page.append_child(&header)?;

    let summary = append(&page, document, "div", "summary-cards")?;
    let active = assignments
        .iter()
        .filter(|a| a.status == AssignmentStatus::Active)
        .count();
    let pending: u32 = assignments
        .iter()
        .map(|a| a.total_students.saturating_sub(a.submissions))
        .sum();
    let cards = [
        stat_card(document, "Assignments", &assignments.len().to_string())?,
        stat_card(document, "Active", &active.to_string())?,
        stat_card(document, "Awaiting submission", &pending.to_string())?,
    ];
    for stat in &cards {
        summary.append_child(stat)?;
    }

    let (card, body) = section(document, "Assignments")?;
    for assignment in &assignments {
        let row = assignment_row(document, assignment, today)?;
        body.append_child(&row)?;
    }
    page.append_child(&card)?;

    Ok(page)
}

fn assignment_row(document: &Document, assignment: &Assignment, today: NaiveDate) -> Result<Element, JsValue> {
    let row = el(document, "div", "assignment-row")?;
    row.set_attribute("data-assignment-id", &assignment.id.to_string())?;

    let head = append(&row, document, "div", "assignment-head")?;
    append_text(&head, document, "h3", "assignment-title", assignment.title)?;
    let status = badge(document, assignment.status.as_str(), assignment.status.css_class())?;
    head.append_child(&status)?;
    let priority = badge(document, assignment.priority.as_str(), assignment.priority.badge_class())?;
    head.append_child(&priority)?;

    append_text(
        &row,
        document,
        "div",
        "assignment-meta",
        &format!(
            "{} · {} · due {}",
            assignment.subject,
            assignment.class,
            assignment.due.format("%b %-d, %Y")
        ),
    )?;

    let progress = append(&row, document, "div", "assignment-progress")?;
    append_text(
        &progress,
        document,
        "span",
        "assignment-count",
        &format!(
            "{}/{} submitted",
            assignment.submissions, assignment.total_students
        ),
    )?;
    let bar = progress_bar(document, assignment.submission_percent())?;
    progress.append_child(&bar)?;

    append_text(
        &row,
        document,
        "div",
        "assignment-due",
        &deadline_text(assignment, today),
    )?;

    Ok(row)
}

/// Finished assignments are closed, the rest count down to their due date.
fn deadline_text(assignment: &Assignment, today: NaiveDate) -> String {
    match assignment.status {
        AssignmentStatus::Completed => "Closed".to_string(),
        AssignmentStatus::Active | AssignmentStatus::Draft => due_label(assignment.days_left(today)),
    }
}

/// Human phrasing of the distance to a due date.
pub fn due_label(days_left: i64) -> String {
    match days_left {
        0 => "Due today".to_string(),
        1 => "Due tomorrow".to_string(),
        -1 => "Overdue by 1 day".to_string(),
        d if d < 0 => format!("Overdue by {} days", -d),
        d => format!("{} days left", d),
    }
}
