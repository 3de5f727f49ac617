mod dashboard;
mod employees;
mod not_found;
mod schedule;
mod settings;

pub use dashboard::Dashboard;
pub use employees::Employees;
pub use not_found::NotFound;
pub use schedule::Schedule;
pub use settings::Settings;
