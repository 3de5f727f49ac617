use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::Employee;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShiftKind {
    Morning,
    Day,
    Evening,
    Night,
}

impl ShiftKind {
    pub const ALL: [ShiftKind; 4] = [
        ShiftKind::Morning,
        ShiftKind::Day,
        ShiftKind::Evening,
        ShiftKind::Night,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ShiftKind::Morning => "morning",
            ShiftKind::Day => "day",
            ShiftKind::Evening => "evening",
            ShiftKind::Night => "night",
        }
    }

    pub fn parse(value: &str) -> Option<ShiftKind> {
        match value {
            "morning" => Some(ShiftKind::Morning),
            "day" => Some(ShiftKind::Day),
            "evening" => Some(ShiftKind::Evening),
            "night" => Some(ShiftKind::Night),
            _ => None,
        }
    }

    pub fn default_time(self) -> &'static str {
        match self {
            ShiftKind::Morning => "6:00 - 14:00",
            ShiftKind::Day => "9:00 - 17:00",
            ShiftKind::Evening => "14:00 - 22:00",
            ShiftKind::Night => "22:00 - 6:00",
        }
    }

    pub fn label_key(self) -> &'static str {
        match self {
            ShiftKind::Morning => "shift.kind_morning",
            ShiftKind::Day => "shift.kind_day",
            ShiftKind::Evening => "shift.kind_evening",
            ShiftKind::Night => "shift.kind_night",
        }
    }

    pub fn card_class(self) -> &'static str {
        match self {
            ShiftKind::Morning => "border-amber-300 bg-amber-50 dark:border-amber-700 dark:bg-amber-900/20",
            ShiftKind::Day => "border-sky-300 bg-sky-50 dark:border-sky-700 dark:bg-sky-900/20",
            ShiftKind::Evening => "border-violet-300 bg-violet-50 dark:border-violet-700 dark:bg-violet-900/20",
            ShiftKind::Night => "border-indigo-300 bg-indigo-50 dark:border-indigo-700 dark:bg-indigo-900/20",
        }
    }

    pub fn time_class(self) -> &'static str {
        match self {
            ShiftKind::Morning => "text-amber-600 dark:text-amber-400",
            ShiftKind::Day => "text-sky-600 dark:text-sky-400",
            ShiftKind::Evening => "text-violet-600 dark:text-violet-400",
            ShiftKind::Night => "text-indigo-600 dark:text-indigo-400",
        }
    }
}

impl std::fmt::Display for ShiftKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One scheduled shift. Employee fields are denormalized copies taken from
/// the roster at assignment time, so reassigning swaps them wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shift {
    pub id: u32,
    pub employee_name: String,
    pub employee_initials: String,
    pub role: String,
    pub time: String,
    pub kind: ShiftKind,
    pub date: NaiveDate,
}

/// Everything that describes a shift except its id. Used for both create
/// and update so the dialog does not need to know which one it is doing.
#[derive(Debug, Clone, PartialEq)]
pub struct ShiftDraft {
    pub employee_name: String,
    pub employee_initials: String,
    pub role: String,
    pub time: String,
    pub kind: ShiftKind,
    pub date: NaiveDate,
}

impl ShiftDraft {
    pub fn for_employee(
        employee: &Employee,
        kind: ShiftKind,
        date: NaiveDate,
        time: Option<String>,
    ) -> ShiftDraft {
        ShiftDraft {
            employee_name: employee.name.clone(),
            employee_initials: employee.initials.clone(),
            role: employee.role.clone(),
            time: time.unwrap_or_else(|| kind.default_time().to_string()),
            kind,
            date,
        }
    }

    fn into_shift(self, id: u32) -> Shift {
        Shift {
            id,
            employee_name: self.employee_name,
            employee_initials: self.employee_initials,
            role: self.role,
            time: self.time,
            kind: self.kind,
            date: self.date,
        }
    }
}

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("not a valid shift list: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate shift id {0}")]
    DuplicateId(u32),
}

/// Ordered collection of shifts with a monotonic id counter. Ids are never
/// reused within a session, so a freshly added shift can always be told
/// apart from anything deleted before it.
#[derive(Debug, Clone)]
pub struct ShiftStore {
    shifts: Vec<Shift>,
    next_id: u32,
}

impl Default for ShiftStore {
    fn default() -> Self {
        ShiftStore::new()
    }
}

impl ShiftStore {
    pub fn new() -> ShiftStore {
        ShiftStore {
            shifts: Vec::new(),
            next_id: 1,
        }
    }

    /// Seeds the store and continues id assignment past the highest seeded id.
    pub fn with_shifts(shifts: Vec<Shift>) -> ShiftStore {
        let next_id = shifts.iter().map(|s| s.id).max().unwrap_or(0) + 1;
        ShiftStore { shifts, next_id }
    }

    pub fn shifts(&self) -> &[Shift] {
        &self.shifts
    }

    pub fn len(&self) -> usize {
        self.shifts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shifts.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&Shift> {
        self.shifts.iter().find(|s| s.id == id)
    }

    /// Appends a new shift and returns its id.
    pub fn add(&mut self, draft: ShiftDraft) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        tracing::debug!(id, date = %draft.date, "adding shift");
        self.shifts.push(draft.into_shift(id));
        id
    }

    /// Replaces every field of the identified shift except its id. Returns
    /// false without touching anything when the id is absent.
    pub fn update(&mut self, id: u32, draft: ShiftDraft) -> bool {
        match self.shifts.iter_mut().find(|s| s.id == id) {
            Some(slot) => {
                *slot = draft.into_shift(id);
                true
            }
            None => {
                tracing::warn!(id, "update for unknown shift ignored");
                false
            }
        }
    }

    /// Removes and returns the identified shift, keeping the order of the
    /// rest intact. Absent ids are a no-op.
    pub fn remove(&mut self, id: u32) -> Option<Shift> {
        let index = self.shifts.iter().position(|s| s.id == id)?;
        Some(self.shifts.remove(index))
    }

    /// Hands the shift to another employee. Only the employee-derived
    /// fields change; date, time and kind stay as they were.
    pub fn reassign(&mut self, id: u32, employee: &Employee) -> bool {
        match self.shifts.iter_mut().find(|s| s.id == id) {
            Some(shift) => {
                shift.employee_name = employee.name.clone();
                shift.employee_initials = employee.initials.clone();
                shift.role = employee.role.clone();
                true
            }
            None => {
                tracing::warn!(id, "reassign for unknown shift ignored");
                false
            }
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(&self.shifts).unwrap_or_else(|_| "[]".to_string())
    }

    /// Builds a store from an exported shift list, rejecting files whose
    /// ids collide. The id counter resumes past the highest imported id.
    pub fn from_json(json: &str) -> Result<ShiftStore, ImportError> {
        let shifts: Vec<Shift> = serde_json::from_str(json)?;
        let mut seen = std::collections::HashSet::new();
        for shift in &shifts {
            if !seen.insert(shift.id) {
                return Err(ImportError::DuplicateId(shift.id));
            }
        }
        Ok(ShiftStore::with_shifts(shifts))
    }
}

/// All shifts falling on `day`, in stored order.
pub fn shifts_on(shifts: &[Shift], day: NaiveDate) -> Vec<Shift> {
    shifts.iter().filter(|s| s.date == day).cloned().collect()
}

/// Buckets shifts per employee name, groups ordered by first appearance and
/// each bucket keeping stored order.
pub fn group_by_employee(shifts: &[Shift]) -> Vec<(String, Vec<Shift>)> {
    let mut groups: Vec<(String, Vec<Shift>)> = Vec::new();
    for shift in shifts {
        match groups.iter_mut().find(|(name, _)| *name == shift.employee_name) {
            Some((_, bucket)) => bucket.push(shift.clone()),
            None => groups.push((shift.employee_name.clone(), vec![shift.clone()])),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::sample;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn seeded() -> ShiftStore {
        ShiftStore::with_shifts(sample::shifts())
    }

    fn draft_for(id: u32, date: NaiveDate) -> ShiftDraft {
        let roster = sample::employees();
        let employee = roster.iter().find(|e| e.id == id).unwrap();
        ShiftDraft::for_employee(employee, ShiftKind::Day, date, None)
    }

    #[test]
    fn day_buckets_are_exact_and_ordered() {
        let store = seeded();
        let monday = shifts_on(store.shifts(), day(2023, 6, 12));
        assert_eq!(monday.len(), 2);
        assert_eq!(monday[0].employee_name, "Matti Virtanen");
        assert_eq!(monday[1].employee_name, "Liisa Korhonen");
        assert!(shifts_on(store.shifts(), day(2023, 6, 16)).is_empty());

        let total: usize = (12..=18)
            .map(|d| shifts_on(store.shifts(), day(2023, 6, d)).len())
            .sum();
        assert_eq!(total, store.len());
    }

    #[test]
    fn add_assigns_fresh_ids_past_the_seed() {
        let mut store = seeded();
        let a = store.add(draft_for(1, day(2023, 6, 16)));
        let b = store.add(draft_for(2, day(2023, 6, 16)));
        assert_eq!(a, 7);
        assert_eq!(b, 8);
        let mut ids: Vec<u32> = store.shifts().iter().map(|s| s.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), store.len());
    }

    #[test]
    fn add_then_remove_restores_the_original_list() {
        let mut store = seeded();
        let before = store.shifts().to_vec();
        let id = store.add(draft_for(5, day(2023, 6, 17)));
        assert_eq!(store.len(), before.len() + 1);
        let removed = store.remove(id).unwrap();
        assert_eq!(removed.id, id);
        assert_eq!(store.shifts(), before.as_slice());
    }

    #[test]
    fn ids_are_not_reused_after_removal() {
        let mut store = seeded();
        let id = store.add(draft_for(1, day(2023, 6, 16)));
        store.remove(id);
        let next = store.add(draft_for(1, day(2023, 6, 16)));
        assert!(next > id);
    }

    #[test]
    fn update_replaces_fields_but_not_id() {
        let mut store = seeded();
        let draft = draft_for(6, day(2023, 6, 18));
        assert!(store.update(1, draft.clone()));
        let shift = store.get(1).unwrap();
        assert_eq!(shift.id, 1);
        assert_eq!(shift.employee_name, "Laura Lahtinen");
        assert_eq!(shift.date, day(2023, 6, 18));
        // position in the list is unchanged
        assert_eq!(store.shifts()[0].id, 1);
    }

    #[test]
    fn update_and_reassign_ignore_unknown_ids() {
        let mut store = seeded();
        let before = store.shifts().to_vec();
        assert!(!store.update(999, draft_for(1, day(2023, 6, 12))));
        let roster = sample::employees();
        assert!(!store.reassign(999, &roster[0]));
        assert!(store.remove(999).is_none());
        assert_eq!(store.shifts(), before.as_slice());
    }

    #[test]
    fn reassign_swaps_only_employee_fields() {
        let mut store = seeded();
        let before = store.get(1).unwrap().clone();
        let roster = sample::employees();
        let antti = roster.iter().find(|e| e.id == 3).unwrap();
        assert!(store.reassign(1, antti));
        let after = store.get(1).unwrap();
        assert_eq!(after.employee_name, antti.name);
        assert_eq!(after.employee_initials, antti.initials);
        assert_eq!(after.role, antti.role);
        assert_eq!(after.date, before.date);
        assert_eq!(after.time, before.time);
        assert_eq!(after.kind, before.kind);
    }

    #[test]
    fn grouping_follows_first_appearance() {
        let mut store = seeded();
        // a second shift for Matti should land in his existing bucket
        store.add(draft_for(1, day(2023, 6, 16)));
        let groups = group_by_employee(store.shifts());
        assert_eq!(groups.len(), 6);
        assert_eq!(groups[0].0, "Matti Virtanen");
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[1].0, "Liisa Korhonen");
    }

    #[test]
    fn export_import_round_trips() {
        let store = seeded();
        let restored = ShiftStore::from_json(&store.to_json()).unwrap();
        assert_eq!(restored.shifts(), store.shifts());
        // counter resumes past the imported ids
        let mut restored = restored;
        assert_eq!(restored.add(draft_for(1, day(2023, 6, 19))), 7);
    }

    #[test]
    fn import_rejects_duplicate_ids_and_garbage() {
        let mut shifts = sample::shifts();
        shifts[1].id = shifts[0].id;
        let json = serde_json::to_string(&shifts).unwrap();
        assert!(matches!(
            ShiftStore::from_json(&json),
            Err(ImportError::DuplicateId(1))
        ));
        assert!(matches!(
            ShiftStore::from_json("{\"nope\":true}"),
            Err(ImportError::Parse(_))
        ));
    }

    #[test]
    fn default_time_used_when_no_custom_time_given() {
        let roster = sample::employees();
        let draft = ShiftDraft::for_employee(&roster[0], ShiftKind::Night, day(2023, 6, 12), None);
        assert_eq!(draft.time, "22:00 - 6:00");
        let custom = ShiftDraft::for_employee(
            &roster[0],
            ShiftKind::Night,
            day(2023, 6, 12),
            Some("23:00 - 7:00".to_string()),
        );
        assert_eq!(custom.time, "23:00 - 7:00");
    }
}
