//! Student record service. CRUD over the `students` table plus the list
//! queries the students screen and the dashboard counters need.

use anyhow::{anyhow, Context, Result};
use chrono::{Local, NaiveDate};
use rusqlite::{params, Connection, Row};

use crate::models::student::{Student, StudentStatus};

pub struct StudentService<'a> {
    conn: &'a Connection,
}

impl<'a> StudentService<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Insert a new student and return it with its assigned id.
    pub fn create(&self, mut student: Student) -> Result<Student> {
        if student.name.trim().is_empty() {
            return Err(anyhow!("Student name cannot be empty"));
        }

        let now = Local::now().to_rfc3339();
        self.conn
            .execute(
                "INSERT INTO students (name, email, phone, plan, status, next_payment, created_at, updated_at)
                 VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
                params![
                    student.name,
                    student.email,
                    student.phone,
                    student.plan,
                    student.status.as_str(),
                    student.next_payment.map(|d| d.to_string()),
                    &now,
                    &now,
                ],
            )
            .context("Failed to insert student")?;

        student.id = Some(self.conn.last_insert_rowid());
        Ok(student)
    }

    pub fn get(&self, id: i64) -> Result<Option<Student>> {
        let result = self.conn.query_row(
            "SELECT id, name, email, phone, plan, status, next_payment
             FROM students WHERE id = ?",
            [id],
            Self::row_to_student,
        );

        match result {
            Ok(student) => Ok(Some(student)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub fn update(&self, student: &Student) -> Result<()> {
        let id = student
            .id
            .ok_or_else(|| anyhow!("Student ID is required for update"))?;

        let rows_affected = self
            .conn
            .execute(
                "UPDATE students SET
                    name = ?, email = ?, phone = ?, plan = ?, status = ?,
                    next_payment = ?, updated_at = ?
                 WHERE id = ?",
                params![
                    student.name,
                    student.email,
                    student.phone,
                    student.plan,
                    student.status.as_str(),
                    student.next_payment.map(|d| d.to_string()),
                    Local::now().to_rfc3339(),
                    id,
                ],
            )
            .context("Failed to update student")?;

        if rows_affected == 0 {
            return Err(anyhow!("Student with id {} not found", id));
        }
        Ok(())
    }

    pub fn delete(&self, id: i64) -> Result<()> {
        let rows_affected = self
            .conn
            .execute("DELETE FROM students WHERE id = ?", [id])
            .context("Failed to delete student")?;

        if rows_affected == 0 {
            return Err(anyhow!("Student with id {} not found", id));
        }
        Ok(())
    }

    /// All students ordered by name.
    pub fn list_all(&self) -> Result<Vec<Student>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, email, phone, plan, status, next_payment
             FROM students ORDER BY name",
        )?;
        let students = stmt
            .query_map([], Self::row_to_student)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .context("Failed to list students")?;
        Ok(students)
    }

    /// Case-insensitive name/email search, ordered by name.
    pub fn search(&self, term: &str) -> Result<Vec<Student>> {
        let pattern = format!("%{}%", term.to_lowercase());
        let mut stmt = self.conn.prepare(
            "SELECT id, name, email, phone, plan, status, next_payment
             FROM students
             WHERE lower(name) LIKE ?1 OR lower(email) LIKE ?1
             ORDER BY name",
        )?;
        let students = stmt
            .query_map([pattern], Self::row_to_student)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .context("Failed to search students")?;
        Ok(students)
    }

    pub fn count_with_status(&self, status: StudentStatus) -> Result<i64> {
        let count = self
            .conn
            .query_row(
                "SELECT COUNT(*) FROM students WHERE status = ?",
                [status.as_str()],
                |row| row.get(0),
            )
            .context("Failed to count students")?;
        Ok(count)
    }

    fn row_to_student(row: &Row<'_>) -> rusqlite::Result<Student> {
        let status: String = row.get(5)?;
        let next_payment: Option<String> = row.get(6)?;
        Ok(Student {
            id: Some(row.get(0)?),
            name: row.get(1)?,
            email: row.get(2)?,
            phone: row.get(3)?,
            plan: row.get(4)?,
            status: StudentStatus::parse(&status),
            next_payment: next_payment.and_then(|d| d.parse::<NaiveDate>().ok()),
        })
    }
}
