//! Settings service. Load and persist the single settings row so the app
//! reopens on the screen and schedule view the user left it on.

use anyhow::{Context, Result};

use crate::models::settings::Settings;
use crate::services::database::Database;

pub struct SettingsService<'a> {
    database: &'a Database,
}

impl<'a> SettingsService<'a> {
    pub fn new(database: &'a Database) -> Self {
        Self { database }
    }

    pub fn get(&self) -> Result<Settings> {
        let settings = self
            .database
            .connection()
            .query_row(
                "SELECT id, theme, current_screen, schedule_view FROM settings WHERE id = 1",
                [],
                |row| {
                    Ok(Settings {
                        id: Some(row.get(0)?),
                        theme: row.get(1)?,
                        current_screen: row.get(2)?,
                        schedule_view: row.get(3)?,
                    })
                },
            )
            .context("Failed to load settings")?;
        Ok(settings)
    }

    pub fn update(&self, settings: &Settings) -> Result<()> {
        self.database
            .connection()
            .execute(
                "UPDATE settings SET
                    theme = ?, current_screen = ?, schedule_view = ?,
                    updated_at = CURRENT_TIMESTAMP
                 WHERE id = 1",
                rusqlite::params![
                    settings.theme,
                    settings.current_screen,
                    settings.schedule_view,
                ],
            )
            .context("Failed to update settings")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_test_db() -> Database {
        let db = Database::new(":memory:").unwrap();
        db.initialize_schema().unwrap();
        db
    }

    #[test]
    fn test_get_returns_defaults() {
        let db = setup_test_db();
        let service = SettingsService::new(&db);

        let settings = service.get().unwrap();
        assert_eq!(settings.theme, "light");
        assert_eq!(settings.current_screen, "Dashboard");
        assert_eq!(settings.schedule_view, "Day");
    }

    #[test]
    fn test_update_persists() {
        let db = setup_test_db();
        let service = SettingsService::new(&db);

        let mut settings = service.get().unwrap();
        settings.theme = "dark".to_string();
        settings.current_screen = "Schedule".to_string();
        settings.schedule_view = "Week".to_string();
        service.update(&settings).unwrap();

        let loaded = service.get().unwrap();
        assert_eq!(loaded.theme, "dark");
        assert_eq!(loaded.current_screen, "Schedule");
        assert_eq!(loaded.schedule_view, "Week");
    }
}
