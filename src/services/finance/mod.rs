//! Billing service. Transaction CRUD over the `transactions` table and the
//! status totals shown on the financial summary cards.

use anyhow::{anyhow, Context, Result};
use chrono::{Local, NaiveDate};
use rusqlite::{params, Connection, Row};

use crate::models::transaction::{Transaction, TransactionStatus};

/// Totals by status for the summary cards. `expense` is the absolute sum
/// of negative entries regardless of status.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FinanceSummary {
    pub received: f64,
    pub pending: f64,
    pub overdue: f64,
    pub expense: f64,
}

pub struct FinanceService<'a> {
    conn: &'a Connection,
}

impl<'a> FinanceService<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    pub fn create(&self, mut transaction: Transaction) -> Result<Transaction> {
        if transaction.description.trim().is_empty() {
            return Err(anyhow!("Transaction description cannot be empty"));
        }

        self.conn
            .execute(
                "INSERT INTO transactions (description, student_name, value, due_date, status, created_at)
                 VALUES (?, ?, ?, ?, ?, ?)",
                params![
                    transaction.description,
                    transaction.student_name,
                    transaction.value,
                    transaction.due_date.to_string(),
                    transaction.status.as_str(),
                    Local::now().to_rfc3339(),
                ],
            )
            .context("Failed to insert transaction")?;

        transaction.id = Some(self.conn.last_insert_rowid());
        Ok(transaction)
    }

    pub fn delete(&self, id: i64) -> Result<()> {
        let rows_affected = self
            .conn
            .execute("DELETE FROM transactions WHERE id = ?", [id])
            .context("Failed to delete transaction")?;

        if rows_affected == 0 {
            return Err(anyhow!("Transaction with id {} not found", id));
        }
        Ok(())
    }

    /// All transactions, most recent due date first.
    pub fn list_all(&self) -> Result<Vec<Transaction>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, description, student_name, value, due_date, status
             FROM transactions ORDER BY due_date DESC, id DESC",
        )?;
        let transactions = stmt
            .query_map([], Self::row_to_transaction)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .context("Failed to list transactions")?;
        Ok(transactions)
    }

    /// Status totals for the summary cards, computed in one pass.
    pub fn summary(&self) -> Result<FinanceSummary> {
        let mut summary = FinanceSummary::default();
        for transaction in self.list_all()? {
            if transaction.value < 0.0 {
                summary.expense += transaction.value.abs();
                continue;
            }
            match transaction.status {
                TransactionStatus::Paid => summary.received += transaction.value,
                TransactionStatus::Pending => summary.pending += transaction.value,
                TransactionStatus::Overdue => summary.overdue += transaction.value,
            }
        }
        Ok(summary)
    }

    fn row_to_transaction(row: &Row<'_>) -> rusqlite::Result<Transaction> {
        let due_date: String = row.get(4)?;
        let status: String = row.get(5)?;
        Ok(Transaction {
            id: Some(row.get(0)?),
            description: row.get(1)?,
            student_name: row.get(2)?,
            value: row.get(3)?,
            due_date: due_date.parse::<NaiveDate>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(
                    4,
                    rusqlite::types::Type::Text,
                    Box::new(e),
                )
            })?,
            status: TransactionStatus::parse(&status),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::database::Database;

    fn setup_test_db() -> Database {
        let db = Database::new(":memory:").unwrap();
        db.initialize_schema().unwrap();
        db
    }

    fn transaction(description: &str, value: f64, status: TransactionStatus) -> Transaction {
        let mut tx =
            Transaction::new(description, value, NaiveDate::from_ymd_opt(2023, 10, 14).unwrap())
                .unwrap();
        tx.status = status;
        tx
    }

    #[test]
    fn test_create_and_list_round_trip() {
        let db = setup_test_db();
        let service = FinanceService::new(db.connection());

        let created = service
            .create(transaction("Mensalidade Pilates 2x", 250.0, TransactionStatus::Paid))
            .unwrap();
        assert!(created.id.is_some());

        let listed = service.list_all().unwrap();
        assert_eq!(listed, vec![created]);
    }

    #[test]
    fn test_create_rejects_empty_description() {
        let db = setup_test_db();
        let service = FinanceService::new(db.connection());

        let mut tx = transaction("x", 10.0, TransactionStatus::Paid);
        tx.description = " ".to_string();
        assert!(service.create(tx).is_err());
    }

    #[test]
    fn test_list_orders_by_due_date_descending() {
        let db = setup_test_db();
        let service = FinanceService::new(db.connection());

        let mut older = transaction("Setembro", 250.0, TransactionStatus::Paid);
        older.due_date = NaiveDate::from_ymd_opt(2023, 9, 5).unwrap();
        let mut newer = transaction("Outubro", 250.0, TransactionStatus::Pending);
        newer.due_date = NaiveDate::from_ymd_opt(2023, 10, 5).unwrap();

        service.create(older).unwrap();
        service.create(newer).unwrap();

        let listed = service.list_all().unwrap();
        assert_eq!(listed[0].description, "Outubro");
        assert_eq!(listed[1].description, "Setembro");
    }

    #[test]
    fn test_summary_totals_by_status() {
        let db = setup_test_db();
        let service = FinanceService::new(db.connection());

        service
            .create(transaction("Mensalidade", 250.0, TransactionStatus::Paid))
            .unwrap();
        service
            .create(transaction("Mensalidade", 180.0, TransactionStatus::Pending))
            .unwrap();
        service
            .create(transaction("Mensalidade", 120.0, TransactionStatus::Overdue))
            .unwrap();
        service
            .create(transaction("Manutenção Reformer", -80.0, TransactionStatus::Paid))
            .unwrap();

        let summary = service.summary().unwrap();
        assert_eq!(summary.received, 250.0);
        assert_eq!(summary.pending, 180.0);
        assert_eq!(summary.overdue, 120.0);
        assert_eq!(summary.expense, 80.0);
    }

    #[test]
    fn test_delete_missing_transaction_fails() {
        let db = setup_test_db();
        let service = FinanceService::new(db.connection());
        assert!(service.delete(999).is_err());
    }
}
