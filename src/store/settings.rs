use super::WeekStart;

/// Application-wide preferences, shared through context and edited from the
/// settings view. Saving only mutates the signal; nothing is persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct AppSettings {
    pub company_name: String,
    pub date_format: String,
    pub time_format: String,
    pub language: String,
    pub theme: String,
    pub week_start: WeekStart,
    pub email_notifications: bool,
    pub push_notifications: bool,
    pub shift_reminders: bool,
    pub schedule_changes: bool,
    pub auto_scheduling: bool,
    pub conflict_detection: bool,
    pub employee_requests: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        AppSettings {
            company_name: "TerveysTeknologia Oy".to_string(),
            date_format: "YYYY-MM-DD".to_string(),
            time_format: "24h".to_string(),
            language: "system".to_string(),
            theme: "System".to_string(),
            week_start: WeekStart::Monday,
            email_notifications: true,
            push_notifications: true,
            shift_reminders: true,
            schedule_changes: true,
            auto_scheduling: true,
            conflict_detection: true,
            employee_requests: true,
        }
    }
}
