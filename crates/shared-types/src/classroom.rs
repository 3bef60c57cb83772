use serde::{Deserialize, Serialize};

/// A student's profile card data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StudentProfile {
    pub name: String,
    pub roll_number: String,
    pub semester: String,
    pub branch: String,
}

/// A faculty member's profile card data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FacultyProfile {
    pub name: String,
    pub department: String,
    pub branch: String,
    pub employee_id: String,
}

/// Attendance counters for one subject.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct AttendanceRecord {
    pub attended: u32,
    pub held: u32,
}

impl AttendanceRecord {
    /// Attendance percentage, rounded to the nearest whole number.
    /// Zero classes held counts as 0%.
    pub fn percentage(&self) -> u32 {
        if self.held == 0 {
            return 0;
        }
        (self.attended * 100 + self.held / 2) / self.held
    }
}

/// A subject as seen from the student side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Subject {
    pub name: String,
    pub code: String,
    pub instructor: String,
    pub attendance: AttendanceRecord,
}

/// A subject as seen from the faculty side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TeachingSubject {
    pub name: String,
    pub code: String,
    pub semester: String,
    pub students: u32,
    pub total_classes: u32,
    pub avg_attendance: u32,
    pub pending_grading: u32,
}

/// Submission state of a student assignment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AssignmentStatus {
    Pending,
    Submitted,
    Graded,
}

impl AssignmentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AssignmentStatus::Pending => "Pending",
            AssignmentStatus::Submitted => "Submitted",
            AssignmentStatus::Graded => "Graded",
        }
    }
}

/// A homework assignment from the student's point of view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Assignment {
    pub title: String,
    pub subject: String,
    pub due: String,
    pub status: AssignmentStatus,
}

/// A homework assignment from the faculty's point of view, tracking how
/// many submissions still need review.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FacultyAssignment {
    pub title: String,
    pub subject: String,
    pub due: String,
    pub pending_reviews: u32,
}

impl FacultyAssignment {
    /// Review-queue label shown on the assignment badge.
    pub fn review_label(&self) -> String {
        if self.pending_reviews == 0 {
            "All Reviewed".to_string()
        } else {
            format!("{} Pending Reviews", self.pending_reviews)
        }
    }
}

/// Kind of a scheduled class session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SessionKind {
    Lecture,
    Practical,
    Tutorial,
}

impl SessionKind {
    pub fn label(&self) -> &'static str {
        match self {
            SessionKind::Lecture => "Lecture",
            SessionKind::Practical => "Practical",
            SessionKind::Tutorial => "Tutorial",
        }
    }
}

/// One entry of a day's timetable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduleSlot {
    pub time: String,
    pub subject: String,
    pub room: String,
    pub kind: SessionKind,
}

/// A recent-activity feed entry on the faculty dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Activity {
    pub action: String,
    pub subject: String,
    pub time_ago: String,
}

/// Month-to-date counters for the faculty sidebar.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MonthlySummary {
    pub classes_conducted: u32,
    pub assignments_created: u32,
    pub average_attendance: u32,
}
