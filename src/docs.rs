use crate::model::attendance::{Attendance, CheckIn, EmployeeAnalysis};
use crate::model::employee::{Employee, NewEmployee, UpdateEmployee};
use crate::model::payroll::{NewPayroll, Payroll, Payslip};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "HR Records API",
        version = "0.1.0",
        description = r#"
## HR Record Store

Employees, daily attendance and payroll records, each kept in its own durable
key-value collection and addressed by a generated id.

### Key Features
- **Employees**: add, view, list, search by name, update
- **Attendance**: check-in / check-out, per-day and per-employee views, attendance analysis
- **Payroll**: record payrolls (returned as payslips), filter by employee, year or month

### Errors
Failures are returned as a single tagged object, e.g.
`{"NotFound": "employee with id=42 not found"}` or `{"InvalidPayload": "..."}`.

---
Built with **Rust**, **Actix Web**, **SQLx** (SQLite), and **Utoipa**.
"#,
    ),
    paths(
        crate::api::employee::create_employee,
        crate::api::employee::get_employee,
        crate::api::employee::list_employees,
        crate::api::employee::update_employee,

        crate::api::attendance::check_in,
        crate::api::attendance::check_out,
        crate::api::attendance::list_attendances,
        crate::api::attendance::get_attendance,
        crate::api::attendance::attendance_by_date,
        crate::api::attendance::employee_attendances,
        crate::api::attendance::employee_analysis,

        crate::api::payroll::create_payroll,
        crate::api::payroll::list_payrolls,
        crate::api::payroll::get_payroll,
        crate::api::payroll::employee_payrolls,
        crate::api::payroll::year_payrolls,
        crate::api::payroll::month_payrolls
    ),
    components(
        schemas(
            Employee,
            NewEmployee,
            UpdateEmployee,
            Attendance,
            CheckIn,
            EmployeeAnalysis,
            Payroll,
            NewPayroll,
            Payslip
        )
    ),
    tags(
        (name = "Employee", description = "Employee directory APIs"),
        (name = "Attendance", description = "Attendance tracking APIs"),
        (name = "Payroll", description = "Payroll ledger APIs"),
    )
)]
pub struct ApiDoc;
