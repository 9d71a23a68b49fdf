use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Payroll {
    pub id: String,
    pub employee_id: String,
    #[schema(example = "March")]
    pub month: String,
    #[schema(example = 2024)]
    pub year: u64,
    #[schema(example = 5000)]
    pub basic_salary: u64,
    #[schema(example = 200)]
    pub allowances: u64,
    /// Supplied by the caller as-is.
    #[schema(example = 5200)]
    pub net_salary: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewPayroll {
    #[validate(length(min = 1, message = "employeeId must not be empty"))]
    pub employee_id: String,
    #[validate(length(min = 1, message = "month must not be empty"))]
    #[schema(example = "March")]
    pub month: String,
    #[schema(example = 2024)]
    pub year: u64,
    #[schema(example = 5000)]
    pub basic_salary: u64,
    #[schema(example = 200)]
    pub allowances: u64,
    #[schema(example = 5200)]
    pub net_salary: u64,
}

/// Payroll plus the employee's name at the time it was recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Payslip {
    #[serde(flatten)]
    pub payroll: Payroll,
    pub employee_name: String,
}

impl Payroll {
    pub fn new(id: String, payload: NewPayroll) -> Self {
        Self {
            id,
            employee_id: payload.employee_id,
            month: payload.month,
            year: payload.year,
            basic_salary: payload.basic_salary,
            allowances: payload.allowances,
            net_salary: payload.net_salary,
        }
    }
}
