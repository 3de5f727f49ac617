pub mod add_shift_dialog;
pub mod bottombar;
pub mod calendar;
pub mod employee_shift_list;
pub mod language_selector;
pub mod layout;
pub mod shift_card;
pub mod sidebar;
pub mod stat_card;
pub mod toast;

pub use add_shift_dialog::AddShiftDialog;
pub use bottombar::Bottombar;
pub use calendar::Calendar;
pub use employee_shift_list::EmployeeShiftList;
pub use language_selector::LanguageSelector;
pub use layout::Layout;
pub use shift_card::ShiftCard;
pub use sidebar::Sidebar;
pub use stat_card::StatCard;
pub use toast::{use_toasts, ToastStack, Toasts};
