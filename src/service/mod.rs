use sqlx::SqlitePool;
use uuid::Uuid;

use crate::{
    error::ServiceError,
    model::{attendance::Attendance, employee::Employee, payroll::Payroll},
    store::{Collection, CollectionName},
};

mod attendance;
mod employee;
mod payroll;

/// Owns the employee, payroll and attendance collections. Every operation is
/// one lookup, one write, or one scan over a single collection.
#[derive(Clone)]
pub struct RecordStore {
    employees: Collection<Employee>,
    payrolls: Collection<Payroll>,
    attendances: Collection<Attendance>,
}

impl RecordStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            employees: Collection::new(pool.clone(), CollectionName::Employees),
            payrolls: Collection::new(pool.clone(), CollectionName::Payrolls),
            attendances: Collection::new(pool, CollectionName::Attendances),
        }
    }
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Blank or whitespace-only employee ids are a bad request, never a lookup miss.
fn require_employee_id(employee_id: &str) -> Result<(), ServiceError> {
    if employee_id.trim().is_empty() {
        return Err(ServiceError::InvalidPayload(
            "employeeId must not be empty".to_string(),
        ));
    }
    Ok(())
}
