mod error;
mod http_mapping;
mod requests;
mod service;
mod types;

pub use error::{EmployeeError, Result};
pub use http_mapping::employee_error_to_status_code;
pub use requests::{
    parse_employee_id, parse_hired_date, CreateEmployeeRequest, UpdateEmployeeRequest,
    HIRED_DATE_FORMAT,
};
pub use service::EmployeeService;
pub use types::{Employee, EmployeePatch, EmployeeView, NewEmployee};
