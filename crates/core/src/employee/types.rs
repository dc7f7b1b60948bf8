use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A persisted employee record.
///
/// The `id` and both timestamps are assigned by the storage backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub position: String,
    pub salary: u64,
    pub hired_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Employee {
    /// Materializes a new employee with the storage-assigned id and timestamp.
    pub fn from_new(id: i64, new: NewEmployee, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: new.name,
            position: new.position,
            salary: new.salary,
            hired_date: new.hired_date,
            created_at: now,
            updated_at: now,
        }
    }
}

/// A validated employee that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    pub name: String,
    pub position: String,
    pub salary: u64,
    pub hired_date: NaiveDate,
}

impl NewEmployee {
    pub fn new(
        name: impl Into<String>,
        position: impl Into<String>,
        salary: u64,
        hired_date: NaiveDate,
    ) -> Self {
        Self {
            name: name.into(),
            position: position.into(),
            salary,
            hired_date,
        }
    }
}

/// A validated partial update. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeePatch {
    pub name: Option<String>,
    pub position: Option<String>,
    pub salary: Option<u64>,
    pub hired_date: Option<NaiveDate>,
}

impl EmployeePatch {
    /// Returns true if the patch would not change anything.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.position.is_none()
            && self.salary.is_none()
            && self.hired_date.is_none()
    }

    /// Applies the provided fields to `employee` (merge-patch).
    ///
    /// Timestamps are not touched; the caller stamps `updated_at`.
    pub fn apply_to(self, employee: &mut Employee) {
        if let Some(name) = self.name {
            employee.name = name;
        }
        if let Some(position) = self.position {
            employee.position = position;
        }
        if let Some(salary) = self.salary {
            employee.salary = salary;
        }
        if let Some(hired_date) = self.hired_date {
            employee.hired_date = hired_date;
        }
    }
}

/// The public projection of an employee.
///
/// This is both the HTTP response body and the cached value. It carries
/// exactly one timestamp: `created_at` for creates and reads, `updated_at`
/// for updates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeView {
    pub id: i64,
    pub name: String,
    pub position: String,
    pub salary: u64,
    pub hired_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl EmployeeView {
    /// Projection stamped with the record's creation time.
    pub fn created(employee: &Employee) -> Self {
        Self {
            created_at: Some(employee.created_at),
            updated_at: None,
            ..Self::base(employee)
        }
    }

    /// Projection stamped with the record's last update time.
    pub fn updated(employee: &Employee) -> Self {
        Self {
            created_at: None,
            updated_at: Some(employee.updated_at),
            ..Self::base(employee)
        }
    }

    fn base(employee: &Employee) -> Self {
        Self {
            id: employee.id,
            name: employee.name.clone(),
            position: employee.position.clone(),
            salary: employee.salary,
            hired_date: employee.hired_date,
            created_at: None,
            updated_at: None,
        }
    }
}
