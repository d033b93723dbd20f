// Student model
// Enrollment record persisted in SQLite

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StudentStatus {
    Active,
    Inactive,
    Pending,
}

impl Default for StudentStatus {
    fn default() -> Self {
        StudentStatus::Pending
    }
}

impl StudentStatus {
    /// Display label as stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            StudentStatus::Active => "Ativo",
            StudentStatus::Inactive => "Inativo",
            StudentStatus::Pending => "Pendente",
        }
    }

    /// Parse a stored label. Unknown labels fall back to Pending so a
    /// hand-edited database row does not take the whole list down.
    pub fn parse(label: &str) -> Self {
        match label {
            "Ativo" => StudentStatus::Active,
            "Inativo" => StudentStatus::Inactive,
            _ => StudentStatus::Pending,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub plan: String,
    pub status: StudentStatus,
    pub next_payment: Option<NaiveDate>,
}

impl Student {
    /// Create a new unsaved student with required fields.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Result<Self, String> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err("Student name cannot be empty".to_string());
        }

        Ok(Self {
            id: None,
            name,
            email: email.into(),
            phone: String::new(),
            plan: String::new(),
            status: StudentStatus::Pending,
            next_payment: None,
        })
    }

}
