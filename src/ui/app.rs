use chrono::{Local, NaiveDate};

use crate::models::resource::Resource;
use crate::models::settings::Settings;
use crate::schedule::sample;
use crate::schedule::store::AppointmentStore;
use crate::services::database::Database;
use crate::services::finance::FinanceService;
use crate::services::settings::SettingsService;
use crate::services::student::StudentService;

use super::state::{Screen, ScheduleViewMode, StudentDialogState, TransactionDialogState};

/// Root application state. Owns every piece of session view state (active
/// screen, active date, the appointment store) and threads it into the
/// screens through `&mut self`; nothing is global.
pub struct StudioApp {
    database: &'static Database,
    pub(crate) settings: Settings,
    pub(crate) screen: Screen,
    pub(crate) active_date: NaiveDate,
    pub(crate) schedule_view: ScheduleViewMode,
    /// Static room/equipment columns of the schedule grid.
    pub(crate) resources: Vec<Resource>,
    /// Appointments for the active date. Reseeded on date navigation, so
    /// drag mutations are session-local.
    pub(crate) store: AppointmentStore,
    pub(crate) student_search: String,
    pub(crate) selected_student: Option<i64>,
    pub(crate) student_dialog: StudentDialogState,
    pub(crate) transaction_dialog: TransactionDialogState,
    pub(crate) compose_text: String,
    pub(crate) selected_template: Option<usize>,
    /// Last persistence error, shown inline instead of crashing.
    pub(crate) last_error: Option<String>,
}

impl eframe::App for StudioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_drag_cancel_shortcut(ctx);
        self.render_sidebar(ctx);
        self.render_main_panel(ctx);
        self.render_dialogs(ctx);
    }
}

impl StudioApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let database = initialize_database();

        let settings_service = SettingsService::new(database);
        let settings = settings_service.get().unwrap_or_else(|err| {
            log::error!("Failed to load settings, using defaults: {err}");
            Settings::default()
        });

        let screen = Screen::parse(&settings.current_screen);
        let schedule_view = ScheduleViewMode::parse(&settings.schedule_view);
        let active_date = Local::now().date_naive();

        apply_theme(&cc.egui_ctx, &settings.theme);

        log::info!(
            "Starting on screen {:?}, schedule view {:?}",
            screen,
            schedule_view
        );

        Self {
            database,
            settings,
            screen,
            active_date,
            schedule_view,
            resources: sample::studio_resources(),
            store: AppointmentStore::new(sample::appointments_for(active_date)),
            student_search: String::new(),
            selected_student: None,
            student_dialog: StudentDialogState::default(),
            transaction_dialog: TransactionDialogState::default(),
            compose_text: String::new(),
            selected_template: None,
            last_error: None,
        }
    }

    pub(crate) fn student_service(&self) -> StudentService<'_> {
        StudentService::new(self.database.connection())
    }

    pub(crate) fn finance_service(&self) -> FinanceService<'_> {
        FinanceService::new(self.database.connection())
    }

    /// Change the visible date. The grid is reseeded for the new day, so
    /// any in-session relocations on the previous day are discarded.
    pub(crate) fn set_active_date(&mut self, date: NaiveDate) {
        if date == self.active_date {
            return;
        }
        self.active_date = date;
        self.store = AppointmentStore::new(sample::appointments_for(date));
    }

    pub(crate) fn set_screen(&mut self, screen: Screen) {
        self.screen = screen;
        self.settings.current_screen = screen.storage_label().to_string();
        self.persist_settings();
    }

    pub(crate) fn set_schedule_view(&mut self, mode: ScheduleViewMode) {
        self.schedule_view = mode;
        self.settings.schedule_view = mode.label().to_string();
        self.persist_settings();
    }

    pub(crate) fn toggle_theme(&mut self, ctx: &egui::Context) {
        self.settings.theme = if self.settings.theme == "dark" {
            "light".to_string()
        } else {
            "dark".to_string()
        };
        apply_theme(ctx, &self.settings.theme);
        self.persist_settings();
    }

    pub(crate) fn report_error(&mut self, err: anyhow::Error) {
        log::error!("{err:#}");
        self.last_error = Some(err.to_string());
    }

    fn persist_settings(&mut self) {
        let service = SettingsService::new(self.database);
        if let Err(err) = service.update(&self.settings) {
            self.report_error(err);
        }
    }

    fn render_main_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(self.screen.title());
            ui.separator();

            if let Some(error) = self.last_error.clone() {
                ui.horizontal(|ui| {
                    ui.colored_label(egui::Color32::from_rgb(220, 80, 80), &error);
                    if ui.small_button("Dismiss").clicked() {
                        self.last_error = None;
                    }
                });
                ui.separator();
            }

            match self.screen {
                Screen::Dashboard => self.render_dashboard(ui),
                Screen::Students => self.render_students(ui),
                Screen::StudentProfile => self.render_student_profile(ui),
                Screen::Schedule => self.render_schedule(ui),
                Screen::Financial => self.render_financial(ui),
                Screen::Reports => self.render_reports(ui),
                Screen::Communication => self.render_communication(ui),
            }
        });
    }

    fn render_dialogs(&mut self, ctx: &egui::Context) {
        if self.student_dialog.is_open {
            self.render_student_dialog(ctx);
        }
        if self.transaction_dialog.is_open {
            self.render_transaction_dialog(ctx);
        }
    }
}

fn apply_theme(ctx: &egui::Context, theme: &str) {
    match theme {
        "dark" => ctx.set_visuals(egui::Visuals::dark()),
        _ => ctx.set_visuals(egui::Visuals::light()),
    }
}

fn initialize_database() -> &'static Database {
    #[cfg(debug_assertions)]
    let db_path = "studio.db".to_string();

    #[cfg(not(debug_assertions))]
    let db_path = {
        use directories::ProjectDirs;
        if let Some(proj_dirs) = ProjectDirs::from("com", "studio-manager", "StudioManager") {
            let data_dir = proj_dirs.data_dir();
            std::fs::create_dir_all(data_dir).expect("Failed to create data directory");
            data_dir.join("studio.db").to_string_lossy().to_string()
        } else {
            "studio_prod.db".to_string()
        }
    };

    let db = Database::new(&db_path).expect("Failed to create database connection");
    db.initialize_schema()
        .expect("Failed to initialize database schema");

    Box::leak(Box::new(db))
}
