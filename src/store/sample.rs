//! Demo data the views start from. All of it lives in memory only.

use chrono::NaiveDate;

use super::{Employee, EmployeeStatus, Shift, ShiftKind};

fn employee(
    id: u32,
    name: &str,
    initials: &str,
    email: &str,
    phone: &str,
    role: &str,
    department: &str,
    status: EmployeeStatus,
) -> Employee {
    Employee {
        id,
        name: name.to_string(),
        initials: initials.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        role: role.to_string(),
        department: department.to_string(),
        status,
    }
}

pub fn employees() -> Vec<Employee> {
    vec![
        employee(
            1,
            "Matti Virtanen",
            "MV",
            "matti.virtanen@example.fi",
            "+358 40 123 4567",
            "Nurse",
            "Emergency",
            EmployeeStatus::Active,
        ),
        employee(
            2,
            "Liisa Korhonen",
            "LK",
            "liisa.korhonen@example.fi",
            "+358 40 234 5678",
            "Doctor",
            "Surgery",
            EmployeeStatus::Active,
        ),
        employee(
            3,
            "Antti Mäkinen",
            "AM",
            "antti.makinen@example.fi",
            "+358 40 345 6789",
            "Receptionist",
            "Front desk",
            EmployeeStatus::OnLeave,
        ),
        employee(
            4,
            "Johanna Nieminen",
            "JN",
            "johanna.nieminen@example.fi",
            "+358 40 456 7890",
            "Security guard",
            "Security",
            EmployeeStatus::Active,
        ),
        employee(
            5,
            "Mikko Järvinen",
            "MJ",
            "mikko.jarvinen@example.fi",
            "+358 40 567 8901",
            "Nurse",
            "Pediatrics",
            EmployeeStatus::Active,
        ),
        employee(
            6,
            "Laura Lahtinen",
            "LL",
            "laura.lahtinen@example.fi",
            "+358 40 678 9012",
            "Doctor",
            "Cardiology",
            EmployeeStatus::Inactive,
        ),
    ]
}

fn shift(id: u32, employee: &Employee, kind: ShiftKind, date: NaiveDate) -> Shift {
    Shift {
        id,
        employee_name: employee.name.clone(),
        employee_initials: employee.initials.clone(),
        role: employee.role.clone(),
        time: kind.default_time().to_string(),
        kind,
        date,
    }
}

/// One demo week of shifts, Monday 2023-06-12 through Thursday 2023-06-15.
pub fn shifts() -> Vec<Shift> {
    let roster = employees();
    let d = |day| NaiveDate::from_ymd_opt(2023, 6, day).unwrap_or_default();
    vec![
        shift(1, &roster[0], ShiftKind::Morning, d(12)),
        shift(2, &roster[1], ShiftKind::Day, d(12)),
        shift(3, &roster[2], ShiftKind::Evening, d(13)),
        shift(4, &roster[3], ShiftKind::Night, d(14)),
        shift(5, &roster[4], ShiftKind::Day, d(14)),
        shift(6, &roster[5], ShiftKind::Evening, d(15)),
    ]
}
