// Session view state owned by the app shell

use chrono::NaiveDate;

/// Screens reachable from the sidebar. Matched exhaustively wherever a
/// screen is dispatched, so adding one is a compile-time-checked change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Dashboard,
    Students,
    StudentProfile,
    Schedule,
    Financial,
    Reports,
    Communication,
}

impl Screen {
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Dashboard => "Dashboard",
            Screen::Students => "Students",
            Screen::StudentProfile => "Student Profile",
            Screen::Schedule => "Schedule",
            Screen::Financial => "Financial",
            Screen::Reports => "Reports",
            Screen::Communication => "Communication",
        }
    }

    /// Persisted label. StudentProfile is transient and restores to the
    /// student list.
    pub fn storage_label(&self) -> &'static str {
        match self {
            Screen::StudentProfile => Screen::Students.storage_label(),
            other => other.title(),
        }
    }

    pub fn parse(label: &str) -> Screen {
        match label {
            "Students" => Screen::Students,
            "Schedule" => Screen::Schedule,
            "Financial" => Screen::Financial,
            "Reports" => Screen::Reports,
            "Communication" => Screen::Communication,
            _ => Screen::Dashboard,
        }
    }
}

/// Schedule view mode. Week and Month are explicit placeholder states;
/// only Day has a real layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleViewMode {
    Day,
    Week,
    Month,
}

impl ScheduleViewMode {
    pub fn label(&self) -> &'static str {
        match self {
            ScheduleViewMode::Day => "Day",
            ScheduleViewMode::Week => "Week",
            ScheduleViewMode::Month => "Month",
        }
    }

    pub fn parse(label: &str) -> ScheduleViewMode {
        match label {
            "Week" => ScheduleViewMode::Week,
            "Month" => ScheduleViewMode::Month,
            _ => ScheduleViewMode::Day,
        }
    }
}

/// State for the student create/edit modal.
#[derive(Default)]
pub struct StudentDialogState {
    pub is_open: bool,
    pub editing_id: Option<i64>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub plan: String,
    pub status: crate::models::student::StudentStatus,
    pub next_payment_text: String,
    pub validation_error: Option<String>,
}

impl StudentDialogState {
    pub fn open_create(&mut self) {
        *self = Self {
            is_open: true,
            ..Self::default()
        };
    }

    pub fn open_edit(&mut self, student: &crate::models::student::Student) {
        *self = Self {
            is_open: true,
            editing_id: student.id,
            name: student.name.clone(),
            email: student.email.clone(),
            phone: student.phone.clone(),
            plan: student.plan.clone(),
            status: student.status,
            next_payment_text: student
                .next_payment
                .map(|d| d.to_string())
                .unwrap_or_default(),
            validation_error: None,
        };
    }

    pub fn close(&mut self) {
        *self = Self::default();
    }
}

/// State for the new-transaction modal.
#[derive(Default)]
pub struct TransactionDialogState {
    pub is_open: bool,
    pub description: String,
    pub student_name: String,
    pub value_text: String,
    pub due_date: Option<NaiveDate>,
    pub mark_paid: bool,
    pub validation_error: Option<String>,
}

impl TransactionDialogState {
    pub fn open(&mut self, default_due: NaiveDate) {
        *self = Self {
            is_open: true,
            due_date: Some(default_due),
            ..Self::default()
        };
    }

    pub fn close(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_parse_round_trip() {
        for screen in [
            Screen::Dashboard,
            Screen::Students,
            Screen::Schedule,
            Screen::Financial,
            Screen::Reports,
            Screen::Communication,
        ] {
            assert_eq!(Screen::parse(screen.storage_label()), screen);
        }
    }

    #[test]
    fn test_student_profile_restores_to_student_list() {
        assert_eq!(
            Screen::parse(Screen::StudentProfile.storage_label()),
            Screen::Students
        );
    }

    #[test]
    fn test_unknown_screen_label_falls_back_to_dashboard() {
        assert_eq!(Screen::parse("Marketing"), Screen::Dashboard);
    }

    #[test]
    fn test_view_mode_parse_round_trip() {
        for mode in [
            ScheduleViewMode::Day,
            ScheduleViewMode::Week,
            ScheduleViewMode::Month,
        ] {
            assert_eq!(ScheduleViewMode::parse(mode.label()), mode);
        }
        assert_eq!(ScheduleViewMode::parse("Quarter"), ScheduleViewMode::Day);
    }
}
