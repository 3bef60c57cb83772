//! Small aggregations the dashboards display as headline numbers.

use shared_types::{Assignment, AssignmentStatus, Subject, TeachingSubject};
use shared_ui::BadgeVariant;

/// Attendance at or above this is in good standing.
pub const ATTENDANCE_GOOD: u32 = 85;
/// Attendance below `ATTENDANCE_GOOD` but at or above this is a warning.
/// Most institutes require 75%, so below that is critical.
pub const ATTENDANCE_LOW: u32 = 75;

/// Mean attendance percentage across a student's subjects, rounded down.
pub fn overall_attendance(subjects: &[Subject]) -> u32 {
    if subjects.is_empty() {
        return 0;
    }
    let total: u32 = subjects.iter().map(|s| s.attendance.percentage()).sum();
    total / subjects.len() as u32
}

/// Assignments still awaiting submission.
pub fn pending_count(assignments: &[Assignment]) -> usize {
    assignments
        .iter()
        .filter(|a| a.status == AssignmentStatus::Pending)
        .count()
}

/// Badge color for an attendance percentage.
pub fn attendance_variant(percentage: u32) -> BadgeVariant {
    if percentage >= ATTENDANCE_GOOD {
        BadgeVariant::Accent
    } else if percentage >= ATTENDANCE_LOW {
        BadgeVariant::Warning
    } else {
        BadgeVariant::Destructive
    }
}

/// Total enrollment across the subjects a faculty member teaches.
pub fn total_students(subjects: &[TeachingSubject]) -> u32 {
    subjects.iter().map(|s| s.students).sum()
}

/// Mean of per-subject average attendance, rounded down.
pub fn average_class_attendance(subjects: &[TeachingSubject]) -> u32 {
    if subjects.is_empty() {
        return 0;
    }
    let total: u32 = subjects.iter().map(|s| s.avg_attendance).sum();
    total / subjects.len() as u32
}

/// Submissions still waiting on grades across all taught subjects.
pub fn total_pending_grading(subjects: &[TeachingSubject]) -> u32 {
    subjects.iter().map(|s| s.pending_grading).sum()
}
