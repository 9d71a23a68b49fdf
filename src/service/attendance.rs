use chrono::{NaiveDate, Utc};
use tracing::{info, instrument, warn};

use super::{RecordStore, new_id, require_employee_id};
use crate::{
    error::ServiceError,
    model::attendance::{Attendance, EmployeeAnalysis},
};

impl RecordStore {
    /// Opens a new attendance record. The employee's name is copied in now.
    #[instrument(name = "check_in", skip(self))]
    pub async fn check_in(&self, employee_id: &str) -> Result<Attendance, ServiceError> {
        require_employee_id(employee_id)?;
        let employee = self.get_employee(employee_id).await?;

        let now = Utc::now();
        let attendance = Attendance {
            id: new_id(),
            employee_id: employee.id,
            employee_name: employee.name,
            date: now.date_naive(),
            check_in_time: now,
            check_out_time: None,
        };
        self.attendances.insert(&attendance.id, &attendance).await?;

        info!(attendance_id = %attendance.id, "Checked in");
        Ok(attendance)
    }

    /// Sets the check-out time. A repeated call overwrites the earlier time.
    #[instrument(name = "check_out", skip(self))]
    pub async fn check_out(&self, id: &str) -> Result<Attendance, ServiceError> {
        let mut attendance = self.get_attendance(id).await?;

        if attendance.is_checked_out() {
            warn!(attendance_id = %id, "Already checked out, overwriting check-out time");
        }
        attendance.check_out_time = Some(Utc::now());
        self.attendances.insert(&attendance.id, &attendance).await?;

        info!(attendance_id = %attendance.id, "Checked out");
        Ok(attendance)
    }

    pub async fn get_attendance(&self, id: &str) -> Result<Attendance, ServiceError> {
        self.attendances
            .get(id)
            .await?
            .ok_or_else(|| ServiceError::attendance_not_found(id))
    }

    pub async fn list_attendances(&self) -> Result<Vec<Attendance>, ServiceError> {
        self.attendances.values().await
    }

    /// First record (in key order) for the given day.
    pub async fn attendance_by_date(&self, date: NaiveDate) -> Result<Attendance, ServiceError> {
        self.attendances
            .values()
            .await?
            .into_iter()
            .find(|attendance| attendance.date == date)
            .ok_or_else(|| ServiceError::NotFound(format!("attendance on date={} not found", date)))
    }

    /// Unknown employees simply have no records.
    pub async fn employee_attendances(
        &self,
        employee_id: &str,
    ) -> Result<Vec<Attendance>, ServiceError> {
        if self.employees.get(employee_id).await?.is_none() {
            return Ok(Vec::new());
        }

        let records = self
            .attendances
            .values()
            .await?
            .into_iter()
            .filter(|attendance| attendance.employee_id == employee_id)
            .collect();

        Ok(records)
    }

    pub async fn analyze_employee(
        &self,
        employee_id: &str,
    ) -> Result<EmployeeAnalysis, ServiceError> {
        let employee = self.get_employee(employee_id).await?;
        let records = self.employee_attendances(employee_id).await?;

        let total_days = records.len() as u64;
        let present_days = records.iter().filter(|a| a.is_checked_out()).count() as u64;

        Ok(EmployeeAnalysis {
            employee_name: employee.name,
            total_days,
            present_days,
            absent_days: total_days - present_days,
        })
    }
}
