//! In-memory data model for the scheduling UI. Views own their data in
//! signals; nothing here persists beyond the session.

pub mod employees;
pub mod sample;
pub mod settings;
pub mod shifts;
pub mod week;

pub use employees::{Employee, EmployeeStatus};
pub use settings::AppSettings;
pub use shifts::{group_by_employee, shifts_on, Shift, ShiftDraft, ShiftKind, ShiftStore};
pub use week::{week_window, WeekStart};
