// Integration tests for database-backed persistence across app restarts

use chrono::NaiveDate;
use tempfile::TempDir;

use studio_manager::models::settings::Settings;
use studio_manager::models::student::{Student, StudentStatus};
use studio_manager::models::transaction::{Transaction, TransactionStatus};
use studio_manager::services::database::Database;
use studio_manager::services::finance::FinanceService;
use studio_manager::services::settings::SettingsService;
use studio_manager::services::student::StudentService;

fn open_database(dir: &TempDir) -> Database {
    let path = dir.path().join("studio.db");
    let db = Database::new(path.to_str().unwrap()).expect("Failed to create database");
    db.initialize_schema().expect("Failed to initialize schema");
    db
}

#[test]
fn test_settings_persistence() {
    let dir = TempDir::new().unwrap();
    let db = open_database(&dir);
    let service = SettingsService::new(&db);

    // Fresh database starts on the defaults
    let mut settings = service.get().expect("Failed to get settings");
    assert_eq!(settings.theme, "light");
    assert_eq!(settings.current_screen, "Dashboard");
    assert_eq!(settings.schedule_view, "Day");

    // Simulate UI changes
    settings.theme = "dark".to_string();
    settings.current_screen = "Schedule".to_string();
    settings.schedule_view = "Week".to_string();
    service.update(&settings).expect("Failed to update settings");

    let loaded = service.get().expect("Failed to load settings");
    assert_eq!(loaded.theme, "dark");
    assert_eq!(loaded.current_screen, "Schedule");
    assert_eq!(loaded.schedule_view, "Week");
}

#[test]
fn test_settings_survive_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("studio.db");

    // First launch
    {
        let db = Database::new(path.to_str().unwrap()).unwrap();
        db.initialize_schema().unwrap();
        let service = SettingsService::new(&db);
        let settings = Settings {
            theme: "dark".to_string(),
            current_screen: "Financial".to_string(),
            ..service.get().unwrap()
        };
        service.update(&settings).unwrap();
    }

    // Second launch, same file
    {
        let db = Database::new(path.to_str().unwrap()).unwrap();
        db.initialize_schema().unwrap();
        let loaded = SettingsService::new(&db).get().unwrap();
        assert_eq!(loaded.theme, "dark");
        assert_eq!(loaded.current_screen, "Financial");
    }
}

#[test]
fn test_student_crud_round_trip() {
    let dir = TempDir::new().unwrap();
    let db = open_database(&dir);
    let service = StudentService::new(db.connection());

    let mut student = Student::new("Maria Silva", "maria@example.com").unwrap();
    student.plan = "Mensal 2x".to_string();
    student.status = StudentStatus::Active;
    student.next_payment = NaiveDate::from_ymd_opt(2023, 11, 5);

    let created = service.create(student).expect("Failed to create student");
    let id = created.id.expect("Created student should have an id");

    let loaded = service.get(id).unwrap().expect("Student should exist");
    assert_eq!(loaded.name, "Maria Silva");
    assert_eq!(loaded.plan, "Mensal 2x");
    assert_eq!(loaded.status, StudentStatus::Active);
    assert_eq!(loaded.next_payment, NaiveDate::from_ymd_opt(2023, 11, 5));

    let mut updated = loaded;
    updated.status = StudentStatus::Inactive;
    service.update(&updated).unwrap();
    assert_eq!(
        service.get(id).unwrap().unwrap().status,
        StudentStatus::Inactive
    );

    service.delete(id).unwrap();
    assert!(service.get(id).unwrap().is_none());
}

#[test]
fn test_student_search_matches_name_and_email() {
    let dir = TempDir::new().unwrap();
    let db = open_database(&dir);
    let service = StudentService::new(db.connection());

    for (name, email) in [
        ("Maria Silva", "maria@example.com"),
        ("João Pereira", "joao@studio.com"),
        ("Ana Castro", "ana.castro@example.com"),
    ] {
        service.create(Student::new(name, email).unwrap()).unwrap();
    }

    let by_name = service.search("maria").unwrap();
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].name, "Maria Silva");

    let by_email = service.search("studio.com").unwrap();
    assert_eq!(by_email.len(), 1);
    assert_eq!(by_email[0].name, "João Pereira");

    assert!(service.search("nonexistent").unwrap().is_empty());
}

#[test]
fn test_finance_summary_reflects_ledger() {
    let dir = TempDir::new().unwrap();
    let db = open_database(&dir);
    let service = FinanceService::new(db.connection());
    let due = NaiveDate::from_ymd_opt(2023, 10, 14).unwrap();

    let mut paid = Transaction::new("Mensalidade - Maria", 250.0, due).unwrap();
    paid.status = TransactionStatus::Paid;
    service.create(paid).unwrap();

    let pending = Transaction::new("Mensalidade - João", 180.0, due).unwrap();
    service.create(pending).unwrap();

    let mut overdue = Transaction::new("Mensalidade - Ana", 200.0, due).unwrap();
    overdue.status = TransactionStatus::Overdue;
    service.create(overdue).unwrap();

    let rent = Transaction::new("Aluguel", -1500.0, due).unwrap();
    service.create(rent).unwrap();

    let summary = service.summary().unwrap();
    assert_eq!(summary.received, 250.0);
    assert_eq!(summary.pending, 180.0);
    assert_eq!(summary.overdue, 200.0);
    assert_eq!(summary.expense, 1500.0);
}

#[test]
fn test_transactions_survive_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("studio.db");
    let due = NaiveDate::from_ymd_opt(2023, 10, 14).unwrap();

    {
        let db = Database::new(path.to_str().unwrap()).unwrap();
        db.initialize_schema().unwrap();
        let service = FinanceService::new(db.connection());
        service
            .create(Transaction::new("Mensalidade - Maria", 250.0, due).unwrap())
            .unwrap();
    }

    {
        let db = Database::new(path.to_str().unwrap()).unwrap();
        db.initialize_schema().unwrap();
        let loaded = FinanceService::new(db.connection()).list_all().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].description, "Mensalidade - Maria");
        assert_eq!(loaded[0].value, 250.0);
    }
}
