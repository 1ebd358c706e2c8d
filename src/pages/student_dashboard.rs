//! Student dashboard: enrolled subjects from the backend, everything else
//! from the demo data set.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::components::cards::{badge, progress_bar, section, stat_card, subject_card};
use crate::constants::{CSS_ERROR_TEXT, CSS_PAGE, CSS_PLACEHOLDER};
use crate::dom_utils::{append, append_text, class_with, el};
use crate::mock_data::{self, AttendanceSummary, TestResult};
use crate::state::{AppState, SubjectsState};

use super::page_header;

pub fn render(document: &Document, state: &AppState) -> Result<Element, JsValue> {
    let student = mock_data::current_student();
    let page = el(document, "main", &format!("{} student-dashboard", CSS_PAGE))?;

    let header = page_header(document, "Student Dashboard")?;
    let profile = append(&header, document, "div", "profile")?;
    append_text(&profile, document, "div", "avatar", &student.initials())?;
    let who = append(&profile, document, "div", "profile-text")?;
    append_text(&who, document, "div", "profile-name", &format!("Welcome back, {}", student.name))?;
    append_text(
        &who,
        document,
        "div",
        "profile-meta",
        &format!("{} · {}", student.grade, student.email),
    )?;
    page.append_child(&header)?;

    let attendance = mock_data::monthly_attendance();
    let summary = append(&page, document, "div", "summary-cards")?;
    let subject_count = stat_card(
        document,
        "Subjects",
        &state.subjects.subjects.len().to_string(),
    )?;
    summary.append_child(&subject_count)?;
    let average = stat_card(
        document,
        "Average score",
        &format!("{}%", average_score(&mock_data::recent_tests())),
    )?;
    summary.append_child(&average)?;
    let present = stat_card(document, "Attendance", &format!("{}%", attendance.percent()))?;
    summary.append_child(&present)?;

    let subjects = subjects_section(document, &state.subjects)?;
    page.append_child(&subjects)?;

    let grid = append(&page, document, "div", "dashboard-grid")?;
    let sections = [
        performance_section(document)?,
        recent_tests_section(document)?,
        attendance_section(document, &attendance)?,
        activity_section(document)?,
    ];
    for card in &sections {
        grid.append_child(card)?;
    }

    Ok(page)
}

fn subjects_section(document: &Document, subjects: &SubjectsState) -> Result<Element, JsValue> {
    let (card, body) = section(document, "My Subjects")?;

    if subjects.loading {
        append_text(&body, document, "p", CSS_PLACEHOLDER, "Loading subjects...")?;
    } else if let Some(error) = &subjects.error {
        let line = append_text(&body, document, "p", CSS_ERROR_TEXT, error)?;
        line.set_attribute("role", "alert")?;
    } else if subjects.subjects.is_empty() {
        append_text(&body, document, "p", CSS_PLACEHOLDER, "No subjects assigned yet.")?;
    } else {
        let list = append(&body, document, "div", "subject-grid")?;
        for name in &subjects.subjects {
            let card = subject_card(document, name)?;
            list.append_child(&card)?;
        }
    }

    Ok(card)
}

fn performance_section(document: &Document) -> Result<Element, JsValue> {
    let (card, body) = section(document, "Performance Overview")?;

    for stat in mock_data::performance_stats() {
        let row = append(&body, document, "div", "stat-row")?;
        append_text(&row, document, "span", "stat-row-label", stat.label)?;
        append_text(&row, document, "span", "stat-row-value", &format!("{}%", stat.value))?;
        let bar = progress_bar(document, stat.value)?;
        body.append_child(&bar)?;
    }

    let chart = append(&body, document, "div", "bar-chart")?;
    for point in mock_data::performance_history() {
        let column = append(&chart, document, "div", "bar-column")?;
        let bar = append(&column, document, "div", "bar")?;
        bar.set_attribute("style", &format!("height: {}%;", point.score.min(100)))?;
        bar.set_attribute("title", &format!("{}: {}%", point.month, point.score))?;
        append_text(&column, document, "span", "bar-label", point.month)?;
    }

    Ok(card)
}

fn recent_tests_section(document: &Document) -> Result<Element, JsValue> {
    let (card, body) = section(document, "Recent Tests")?;

    for test in mock_data::recent_tests() {
        let row = append(&body, document, "div", "test-row")?;
        let text = append(&row, document, "div", "test-text")?;
        append_text(&text, document, "div", "test-title", test.title)?;
        append_text(&text, document, "div", "test-meta", &format!("{} · {}", test.subject, test.date))?;
        let percent = test.percent();
        let score = badge(
            document,
            &format!("{}/{} ({}%)", test.score, test.max_score, percent),
            score_class(percent),
        )?;
        row.append_child(&score)?;
    }

    Ok(card)
}

fn attendance_section(document: &Document, attendance: &AttendanceSummary) -> Result<Element, JsValue> {
    let (card, body) = section(document, "Monthly Attendance")?;

    let days_present = stat_card(
        document,
        "Days present",
        &format!("{}/{}", attendance.present_days(), attendance.school_days),
    )?;
    body.append_child(&days_present)?;
    let bar = progress_bar(document, attendance.percent())?;
    body.append_child(&bar)?;

    let days = append(&body, document, "div", "attendance-grid")?;
    for day in 1..=attendance.school_days {
        let absent = attendance.was_absent(day);
        let cell = append_text(
            &days,
            document,
            "span",
            &class_with("attendance-day", "absent", absent),
            &day.to_string(),
        )?;
        cell.set_attribute("title", if absent { "Absent" } else { "Present" })?;
    }

    Ok(card)
}

fn activity_section(document: &Document) -> Result<Element, JsValue> {
    let (card, body) = section(document, "Recent Activity")?;
    let list = append(&body, document, "ul", "activity-feed")?;
    for activity in mock_data::activity_feed() {
        let item = append(&list, document, "li", "activity-item")?;
        append_text(&item, document, "span", "activity-text", activity.description)?;
        append_text(&item, document, "span", "activity-time", activity.when)?;
    }
    Ok(card)
}

/// Mean of the test percentages, 0 without tests.
fn average_score(tests: &[TestResult]) -> u32 {
    if tests.is_empty() {
        return 0;
    }
    let total: u32 = tests.iter().map(TestResult::percent).sum();
    (total as f64 / tests.len() as f64).round() as u32
}

/// Badge colour for a test score.
fn score_class(percent: u32) -> &'static str {
    match percent {
        85.. => "badge-success",
        70..=84 => "badge-warning",
        _ => "badge-danger",
    }
}
