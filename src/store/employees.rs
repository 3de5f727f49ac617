use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmployeeStatus {
    Active,
    Inactive,
    OnLeave,
}

impl EmployeeStatus {
    pub fn label_key(self) -> &'static str {
        match self {
            EmployeeStatus::Active => "employees.status_active",
            EmployeeStatus::Inactive => "employees.status_inactive",
            EmployeeStatus::OnLeave => "employees.status_on_leave",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            EmployeeStatus::Active => "bg-emerald-500/10 text-emerald-600",
            EmployeeStatus::Inactive => "bg-slate-500/10 text-slate-600 dark:text-slate-300",
            EmployeeStatus::OnLeave => "bg-amber-500/10 text-amber-600",
        }
    }
}

/// Staff record with contact and role metadata. Seeded from sample data and
/// only ever filtered; shifts carry denormalized copies of the name, initials
/// and role rather than a foreign key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: u32,
    pub name: String,
    pub initials: String,
    pub email: String,
    pub phone: String,
    pub role: String,
    pub department: String,
    pub status: EmployeeStatus,
}

impl Employee {
    /// Case-insensitive substring match over name, role and department.
    pub fn matches(&self, query: &str) -> bool {
        let q = query.to_lowercase();
        self.name.to_lowercase().contains(&q)
            || self.role.to_lowercase().contains(&q)
            || self.department.to_lowercase().contains(&q)
    }
}

#[cfg(test)]
mod tests {
    use crate::store::sample;

    #[test]
    fn matches_is_case_insensitive() {
        let roster = sample::employees();
        let matti = &roster[0];
        assert!(matti.matches("matti"));
        assert!(matti.matches("NURSE"));
        assert!(matti.matches("emergency"));
        assert!(!matti.matches("surgeon"));
    }

    #[test]
    fn empty_query_matches_everyone() {
        for employee in sample::employees() {
            assert!(employee.matches(""));
        }
    }
}
