// Settings module
// Single-row application settings persisted in SQLite

pub struct Settings {
    pub id: Option<i64>,
    pub theme: String,
    /// Last active screen label, restored on launch.
    pub current_screen: String,
    /// Last schedule view mode label ("Day", "Week", "Month").
    pub schedule_view: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            id: Some(1),
            theme: "light".to_string(),
            current_screen: "Dashboard".to_string(),
            schedule_view: "Day".to_string(),
        }
    }
}
