// Transaction model
// A billing entry (payment in, expense out) persisted in SQLite

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionStatus {
    Paid,
    Pending,
    Overdue,
}

impl TransactionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Paid => "Pago",
            TransactionStatus::Pending => "Pendente",
            TransactionStatus::Overdue => "Atrasado",
        }
    }

    pub fn parse(label: &str) -> Self {
        match label {
            "Pago" => TransactionStatus::Paid,
            "Atrasado" => TransactionStatus::Overdue,
            _ => TransactionStatus::Pending,
        }
    }
}

/// A single ledger entry. Positive `value` is income, negative is expense,
/// matching how the billing screen sums them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Option<i64>,
    pub description: String,
    /// Student the charge belongs to, if any. Ad-hoc entries leave it empty.
    pub student_name: Option<String>,
    pub value: f64,
    pub due_date: NaiveDate,
    pub status: TransactionStatus,
}

impl Transaction {
    pub fn new(
        description: impl Into<String>,
        value: f64,
        due_date: NaiveDate,
    ) -> Result<Self, String> {
        let description = description.into();
        if description.trim().is_empty() {
            return Err("Transaction description cannot be empty".to_string());
        }

        Ok(Self {
            id: None,
            description,
            student_name: None,
            value,
            due_date,
            status: TransactionStatus::Pending,
        })
    }

    pub fn is_income(&self) -> bool {
        self.value > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 10, 14).unwrap()
    }

    #[test]
    fn test_new_transaction() {
        let tx = Transaction::new("Mensalidade Pilates 2x", 250.0, sample_date()).unwrap();
        assert_eq!(tx.status, TransactionStatus::Pending);
        assert!(tx.is_income());
    }

    #[test]
    fn test_new_transaction_empty_description() {
        assert!(Transaction::new(" ", 100.0, sample_date()).is_err());
    }

    #[test]
    fn test_expense_is_not_income() {
        let tx = Transaction::new("Manutenção Reformer", -80.0, sample_date()).unwrap();
        assert!(!tx.is_income());
    }

    #[test]
    fn test_status_round_trip() {
        for status in [
            TransactionStatus::Paid,
            TransactionStatus::Pending,
            TransactionStatus::Overdue,
        ] {
            assert_eq!(TransactionStatus::parse(status.as_str()), status);
        }
    }
}
