//! API request types for employee operations.
//!
//! These are pure data types; conversion into validated domain values happens
//! here so every backend and handler applies the same rules.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::serde::{deserialize_optional_salary, deserialize_optional_string};

use super::{EmployeeError, EmployeePatch, NewEmployee, Result};

/// The only accepted hired-date format.
pub const HIRED_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a hired date in strict `YYYY-MM-DD` form.
///
/// # Examples
///
/// ```
/// use staffcache_core::employee::parse_hired_date;
///
/// assert!(parse_hired_date("2024-01-15").is_ok());
/// assert!(parse_hired_date("13/32/2024").is_err());
/// ```
pub fn parse_hired_date(value: &str) -> Result<NaiveDate> {
    // chrono accepts unpadded fields; the wire format does not.
    if value.len() != 10 {
        return Err(EmployeeError::validation("Invalid date format"));
    }
    NaiveDate::parse_from_str(value, HIRED_DATE_FORMAT)
        .map_err(|_| EmployeeError::validation("Invalid date format"))
}

/// Largest salary every storage backend can hold.
pub const MAX_SALARY: u64 = i64::MAX as u64;

fn check_salary(salary: u64) -> Result<u64> {
    if salary > MAX_SALARY {
        return Err(EmployeeError::validation("Invalid salary"));
    }
    Ok(salary)
}

/// Parses a path segment into a positive employee id.
pub fn parse_employee_id(value: &str) -> Result<i64> {
    if value.is_empty() {
        return Err(EmployeeError::validation("EmployeeID is required"));
    }
    match value.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(EmployeeError::validation("Invalid Employee ID format")),
    }
}

/// Request payload for creating a new employee.
///
/// Missing fields default to their zero value; the hired date is validated
/// by [`CreateEmployeeRequest::into_new_employee`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateEmployeeRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub salary: u64,
    #[serde(default)]
    pub hired_date: String,
}

impl CreateEmployeeRequest {
    pub fn new(
        name: impl Into<String>,
        position: impl Into<String>,
        salary: u64,
        hired_date: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            position: position.into(),
            salary,
            hired_date: hired_date.into(),
        }
    }

    /// Validates the request and converts it into a [`NewEmployee`].
    pub fn into_new_employee(self) -> Result<NewEmployee> {
        let hired_date = parse_hired_date(&self.hired_date)?;
        Ok(NewEmployee {
            name: self.name,
            position: self.position,
            salary: check_salary(self.salary)?,
            hired_date,
        })
    }
}

/// Request payload for a partial employee update.
///
/// Empty strings and a zero salary mean "not provided".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateEmployeeRequest {
    #[serde(
        default,
        deserialize_with = "deserialize_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub position: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_salary",
        skip_serializing_if = "Option::is_none"
    )]
    pub salary: Option<u64>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub hired_date: Option<String>,
}

impl UpdateEmployeeRequest {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_position(mut self, position: impl Into<String>) -> Self {
        self.position = Some(position.into());
        self
    }

    pub fn with_salary(mut self, salary: u64) -> Self {
        self.salary = Some(salary);
        self
    }

    pub fn with_hired_date(mut self, hired_date: impl Into<String>) -> Self {
        self.hired_date = Some(hired_date.into());
        self
    }

    /// Validates the request and converts it into an [`EmployeePatch`].
    ///
    /// Builder-set empty values are treated the same as deserialized ones.
    pub fn into_patch(self) -> Result<EmployeePatch> {
        let hired_date = match self.hired_date.filter(|d| !d.trim().is_empty()) {
            Some(raw) => Some(parse_hired_date(&raw)?),
            None => None,
        };
        let salary = match self.salary.filter(|s| *s != 0) {
            Some(salary) => Some(check_salary(salary)?),
            None => None,
        };
        Ok(EmployeePatch {
            name: self.name.filter(|n| !n.trim().is_empty()),
            position: self.position.filter(|p| !p.trim().is_empty()),
            salary,
            hired_date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hired_date_valid() {
        assert_eq!(
            parse_hired_date("2024-01-15").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
        );
    }

    #[test]
    fn test_parse_hired_date_rejects_other_formats() {
        for raw in ["13/32/2024", "2024/01/15", "2024-1-5", "2024-02-30", "", "15-01-2024"] {
            assert!(
                matches!(parse_hired_date(raw), Err(EmployeeError::Validation(_))),
                "expected {raw:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_parse_employee_id() {
        assert_eq!(parse_employee_id("42").unwrap(), 42);
        assert!(matches!(
            parse_employee_id(""),
            Err(EmployeeError::Validation(_))
        ));
        assert!(matches!(
            parse_employee_id("abc"),
            Err(EmployeeError::Validation(_))
        ));
        assert!(matches!(
            parse_employee_id("0"),
            Err(EmployeeError::Validation(_))
        ));
        assert!(matches!(
            parse_employee_id("-3"),
            Err(EmployeeError::Validation(_))
        ));
    }

    #[test]
    fn test_create_request_into_new_employee() {
        let new = CreateEmployeeRequest::new("Ada", "Engineer", 1000, "2024-01-15")
            .into_new_employee()
            .unwrap();

        assert_eq!(new.name, "Ada");
        assert_eq!(new.position, "Engineer");
        assert_eq!(new.salary, 1000);
        assert_eq!(new.hired_date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    }

    #[test]
    fn test_create_request_missing_date_is_invalid() {
        let json = r#"{"name": "Ada", "position": "Engineer", "salary": 1000}"#;
        let request: CreateEmployeeRequest = serde_json::from_str(json).unwrap();

        assert!(matches!(
            request.into_new_employee(),
            Err(EmployeeError::Validation(_))
        ));
    }

    #[test]
    fn test_create_request_rejects_negative_salary() {
        let json = r#"{"name": "Ada", "salary": -1, "hired_date": "2024-01-15"}"#;
        assert!(serde_json::from_str::<CreateEmployeeRequest>(json).is_err());
    }

    #[test]
    fn test_salary_above_storage_range_is_invalid() {
        let create =
            CreateEmployeeRequest::new("Ada", "Engineer", MAX_SALARY + 1, "2024-01-15");
        assert_eq!(
            create.into_new_employee(),
            Err(EmployeeError::validation("Invalid salary"))
        );

        let update = UpdateEmployeeRequest::default().with_salary(u64::MAX);
        assert_eq!(
            update.into_patch(),
            Err(EmployeeError::validation("Invalid salary"))
        );

        let at_limit = UpdateEmployeeRequest::default().with_salary(MAX_SALARY);
        assert_eq!(at_limit.into_patch().unwrap().salary, Some(MAX_SALARY));
    }

    #[test]
    fn test_update_request_sentinels_are_not_provided() {
        let json = r#"{"name": "", "position": "", "salary": 0, "hired_date": ""}"#;
        let request: UpdateEmployeeRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request, UpdateEmployeeRequest::default());
        assert!(request.into_patch().unwrap().is_empty());
    }

    #[test]
    fn test_update_request_partial() {
        let json = r#"{"salary": 2000}"#;
        let request: UpdateEmployeeRequest = serde_json::from_str(json).unwrap();
        let patch = request.into_patch().unwrap();

        assert_eq!(patch.salary, Some(2000));
        assert!(patch.name.is_none());
        assert!(patch.position.is_none());
        assert!(patch.hired_date.is_none());
    }

    #[test]
    fn test_update_request_invalid_date() {
        let request = UpdateEmployeeRequest::default().with_hired_date("2024/13/01");
        assert!(matches!(
            request.into_patch(),
            Err(EmployeeError::Validation(_))
        ));
    }

    #[test]
    fn test_update_builder_filters_sentinels() {
        let patch = UpdateEmployeeRequest::default()
            .with_name("")
            .with_salary(0)
            .with_position("Lead")
            .into_patch()
            .unwrap();

        assert!(patch.name.is_none());
        assert!(patch.salary.is_none());
        assert_eq!(patch.position.as_deref(), Some("Lead"));
    }
}
