//! Embedded sample datasets for the two dashboards.
//!
//! Kaksha is a demo: nothing here comes from a server or a database, and
//! no behavior depends on this data being dynamic. The views consume these
//! functions the same way they would consume a fetched payload.

use shared_types::{
    Activity, Assignment, AssignmentStatus, AttendanceRecord, FacultyAssignment, FacultyProfile,
    MonthlySummary, ScheduleSlot, SessionKind, StudentProfile, Subject, TeachingSubject,
};

pub fn student_profile() -> StudentProfile {
    StudentProfile {
        name: "Aarav Sharma".to_string(),
        roll_number: "CS21B1001".to_string(),
        semester: "6th Semester".to_string(),
        branch: "Computer Science".to_string(),
    }
}

pub fn student_subjects() -> Vec<Subject> {
    vec![
        Subject {
            name: "Data Structures & Algorithms".to_string(),
            code: "CS301".to_string(),
            instructor: "Dr. Priya Mehta".to_string(),
            attendance: AttendanceRecord {
                attended: 34,
                held: 40,
            },
        },
        Subject {
            name: "Database Management Systems".to_string(),
            code: "CS302".to_string(),
            instructor: "Prof. Rajesh Kumar".to_string(),
            attendance: AttendanceRecord {
                attended: 35,
                held: 38,
            },
        },
        Subject {
            name: "Computer Networks".to_string(),
            code: "CS303".to_string(),
            instructor: "Dr. Sneha Patel".to_string(),
            attendance: AttendanceRecord {
                attended: 27,
                held: 35,
            },
        },
        Subject {
            name: "Software Engineering".to_string(),
            code: "CS304".to_string(),
            instructor: "Prof. Amit Singh".to_string(),
            attendance: AttendanceRecord {
                attended: 38,
                held: 42,
            },
        },
    ]
}

pub fn student_assignments() -> Vec<Assignment> {
    vec![
        Assignment {
            title: "Binary Search Tree Implementation".to_string(),
            subject: "Data Structures & Algorithms".to_string(),
            due: "2024-01-20".to_string(),
            status: AssignmentStatus::Pending,
        },
        Assignment {
            title: "Database Normalization Exercise".to_string(),
            subject: "Database Management Systems".to_string(),
            due: "2024-01-18".to_string(),
            status: AssignmentStatus::Submitted,
        },
        Assignment {
            title: "Network Protocol Analysis".to_string(),
            subject: "Computer Networks".to_string(),
            due: "2024-01-25".to_string(),
            status: AssignmentStatus::Pending,
        },
    ]
}

pub fn student_schedule() -> Vec<ScheduleSlot> {
    vec![
        ScheduleSlot {
            time: "09:00 AM".to_string(),
            subject: "Data Structures & Algorithms".to_string(),
            room: "Room 301".to_string(),
            kind: SessionKind::Lecture,
        },
        ScheduleSlot {
            time: "11:00 AM".to_string(),
            subject: "Database Management Systems".to_string(),
            room: "Room 204".to_string(),
            kind: SessionKind::Lecture,
        },
        ScheduleSlot {
            time: "02:00 PM".to_string(),
            subject: "Computer Networks".to_string(),
            room: "Lab 105".to_string(),
            kind: SessionKind::Practical,
        },
    ]
}

pub fn faculty_profile() -> FacultyProfile {
    FacultyProfile {
        name: "Dr. Priya Mehta".to_string(),
        department: "Computer Science".to_string(),
        branch: "Engineering".to_string(),
        employee_id: "FAC001".to_string(),
    }
}

pub fn teaching_subjects() -> Vec<TeachingSubject> {
    vec![
        TeachingSubject {
            name: "Data Structures & Algorithms".to_string(),
            code: "CS301".to_string(),
            semester: "6th".to_string(),
            students: 45,
            total_classes: 40,
            avg_attendance: 85,
            pending_grading: 12,
        },
        TeachingSubject {
            name: "Programming Fundamentals".to_string(),
            code: "CS101".to_string(),
            semester: "2nd".to_string(),
            students: 60,
            total_classes: 35,
            avg_attendance: 78,
            pending_grading: 8,
        },
        TeachingSubject {
            name: "Advanced Algorithms".to_string(),
            code: "CS401".to_string(),
            semester: "8th".to_string(),
            students: 32,
            total_classes: 38,
            avg_attendance: 92,
            pending_grading: 5,
        },
    ]
}

pub fn faculty_assignments() -> Vec<FacultyAssignment> {
    vec![
        FacultyAssignment {
            title: "Binary Search Tree Implementation".to_string(),
            subject: "Data Structures & Algorithms".to_string(),
            due: "Jan 20, 2024".to_string(),
            pending_reviews: 12,
        },
        FacultyAssignment {
            title: "Hello World Program".to_string(),
            subject: "Programming Fundamentals".to_string(),
            due: "Jan 18, 2024".to_string(),
            pending_reviews: 0,
        },
    ]
}

pub fn faculty_schedule() -> Vec<ScheduleSlot> {
    vec![
        ScheduleSlot {
            time: "09:00 AM".to_string(),
            subject: "Data Structures & Algorithms".to_string(),
            room: "Room 301".to_string(),
            kind: SessionKind::Lecture,
        },
        ScheduleSlot {
            time: "11:00 AM".to_string(),
            subject: "Programming Fundamentals".to_string(),
            room: "Lab 201".to_string(),
            kind: SessionKind::Practical,
        },
        ScheduleSlot {
            time: "02:00 PM".to_string(),
            subject: "Advanced Algorithms".to_string(),
            room: "Room 401".to_string(),
            kind: SessionKind::Tutorial,
        },
    ]
}

pub fn recent_activity() -> Vec<Activity> {
    vec![
        Activity {
            action: "Attendance marked".to_string(),
            subject: "Data Structures & Algorithms".to_string(),
            time_ago: "2 hours ago".to_string(),
        },
        Activity {
            action: "Assignment created".to_string(),
            subject: "Programming Fundamentals".to_string(),
            time_ago: "1 day ago".to_string(),
        },
        Activity {
            action: "Roster updated".to_string(),
            subject: "Advanced Algorithms".to_string(),
            time_ago: "2 days ago".to_string(),
        },
    ]
}

pub fn monthly_summary() -> MonthlySummary {
    MonthlySummary {
        classes_conducted: 24,
        assignments_created: 6,
        average_attendance: 85,
    }
}
