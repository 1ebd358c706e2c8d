//! Static demo data rendered by the dashboards until the backend exposes the
//! matching endpoints.

use chrono::NaiveDate;
use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone, PartialEq)]
pub struct StudentProfile {
    pub name: &'static str,
    pub email: &'static str,
    pub grade: &'static str,
}

impl StudentProfile {
    pub fn initials(&self) -> String {
        initials(self.name)
    }
}

/// First grapheme of the first and last word, upper-cased.
pub fn initials(name: &str) -> String {
    let words: Vec<&str> = name.unicode_words().collect();
    let picked: Vec<&str> = match words.as_slice() {
        [] => Vec::new(),
        [only] => vec![*only],
        [first, .., last] => vec![*first, *last],
    };
    picked
        .iter()
        .filter_map(|w| w.graphemes(true).next())
        .map(|g| g.to_uppercase())
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct TestResult {
    pub subject: &'static str,
    pub title: &'static str,
    pub score: u32,
    pub max_score: u32,
    pub date: &'static str,
}

impl TestResult {
    pub fn percent(&self) -> u32 {
        percent(self.score, self.max_score)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceStat {
    pub label: &'static str,
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PerformancePoint {
    pub month: &'static str,
    pub score: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    pub description: &'static str,
    pub when: &'static str,
}

/// Headline figure on the admin dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct SchoolStat {
    pub label: &'static str,
    pub value: &'static str,
    pub note: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceSummary {
    pub school_days: u32,
    /// 1-based day numbers the student missed.
    pub absent_days: &'static [u32],
}

impl AttendanceSummary {
    pub fn present_days(&self) -> u32 {
        self.school_days
            .saturating_sub(self.absent_days.len() as u32)
    }

    pub fn percent(&self) -> u32 {
        percent(self.present_days(), self.school_days)
    }

    pub fn was_absent(&self, day: u32) -> bool {
        self.absent_days.contains(&day)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignmentStatus {
    Active,
    Draft,
    Completed,
}

impl AssignmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssignmentStatus::Active => "active",
            AssignmentStatus::Draft => "draft",
            AssignmentStatus::Completed => "completed",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            AssignmentStatus::Active => "status-dot status-active",
            AssignmentStatus::Draft => "status-dot status-draft",
            AssignmentStatus::Completed => "status-dot status-completed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            Priority::High => "badge-destructive",
            Priority::Medium => "badge-default",
            Priority::Low => "badge-secondary",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub id: u32,
    pub title: &'static str,
    pub subject: &'static str,
    pub class: &'static str,
    pub due: NaiveDate,
    pub submissions: u32,
    pub total_students: u32,
    pub status: AssignmentStatus,
    pub priority: Priority,
}

impl Assignment {
    pub fn submission_percent(&self) -> u32 {
        percent(self.submissions, self.total_students)
    }

    /// Whole days until the due date, negative once overdue.
    pub fn days_left(&self, today: NaiveDate) -> i64 {
        (self.due - today).num_days()
    }
}

fn percent(part: u32, whole: u32) -> u32 {
    if whole == 0 {
        return 0;
    }
    ((part as f64 / whole as f64) * 100.0).round() as u32
}

pub fn current_student() -> StudentProfile {
    StudentProfile {
        name: "Alex Johnson",
        email: "alex.johnson@school.edu",
        grade: "Grade 10",
    }
}

pub fn recent_tests() -> Vec<TestResult> {
    vec![
        TestResult {
            subject: "Mathematics",
            title: "Quadratic Equations",
            score: 42,
            max_score: 50,
            date: "May 12",
        },
        TestResult {
            subject: "Physics",
            title: "Newton's Laws",
            score: 36,
            max_score: 40,
            date: "May 9",
        },
        TestResult {
            subject: "English",
            title: "Essay Structure",
            score: 27,
            max_score: 35,
            date: "May 5",
        },
    ]
}

pub fn performance_stats() -> Vec<PerformanceStat> {
    vec![
        PerformanceStat {
            label: "Average score",
            value: 84,
        },
        PerformanceStat {
            label: "Assignments completed",
            value: 92,
        },
        PerformanceStat {
            label: "Class participation",
            value: 78,
        },
    ]
}

pub fn performance_history() -> Vec<PerformancePoint> {
    vec![
        PerformancePoint { month: "Jan", score: 72 },
        PerformancePoint { month: "Feb", score: 76 },
        PerformancePoint { month: "Mar", score: 81 },
        PerformancePoint { month: "Apr", score: 79 },
        PerformancePoint { month: "May", score: 86 },
    ]
}

pub fn activity_feed() -> Vec<Activity> {
    vec![
        Activity {
            description: "Submitted Physics lab report",
            when: "2 hours ago",
        },
        Activity {
            description: "Scored 84% in Mathematics quiz",
            when: "Yesterday",
        },
        Activity {
            description: "Joined the Debate club",
            when: "3 days ago",
        },
    ]
}

pub fn monthly_attendance() -> AttendanceSummary {
    AttendanceSummary {
        school_days: 20,
        absent_days: &[8, 15],
    }
}

pub fn teacher_assignments() -> Vec<Assignment> {
    let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default();
    vec![
        Assignment {
            id: 1,
            title: "Algebra Quiz Chapter 5",
            subject: "Mathematics",
            class: "Grade 10",
            due: date(2025, 5, 28),
            submissions: 18,
            total_students: 25,
            status: AssignmentStatus::Active,
            priority: Priority::High,
        },
        Assignment {
            id: 2,
            title: "Physics Lab Report - Momentum",
            subject: "Physics",
            class: "Grade 11",
            due: date(2025, 5, 30),
            submissions: 15,
            total_students: 22,
            status: AssignmentStatus::Active,
            priority: Priority::Medium,
        },
        Assignment {
            id: 3,
            title: "Geometry Problem Set",
            subject: "Mathematics",
            class: "Grade 9",
            due: date(2025, 6, 2),
            submissions: 22,
            total_students: 28,
            status: AssignmentStatus::Draft,
            priority: Priority::Low,
        },
        Assignment {
            id: 4,
            title: "Poetry Reading Response",
            subject: "English",
            class: "Grade 10",
            due: date(2025, 5, 16),
            submissions: 24,
            total_students: 24,
            status: AssignmentStatus::Completed,
            priority: Priority::Medium,
        },
    ]
}

pub fn school_overview() -> Vec<SchoolStat> {
    vec![
        SchoolStat {
            label: "Students",
            value: "1,248",
            note: "+32 this term",
        },
        SchoolStat {
            label: "Teachers",
            value: "86",
            note: "4 on leave",
        },
        SchoolStat {
            label: "Classes",
            value: "42",
            note: "Grades 1 to 12",
        },
        SchoolStat {
            label: "Attendance today",
            value: "94%",
            note: "Above monthly average",
        },
    ]
}
