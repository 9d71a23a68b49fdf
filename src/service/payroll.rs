use tracing::{info, instrument};
use validator::Validate;

use super::{RecordStore, new_id, require_employee_id};
use crate::{
    error::ServiceError,
    model::payroll::{NewPayroll, Payroll, Payslip},
};

impl RecordStore {
    #[instrument(name = "add_payroll", skip(self, payload), fields(employee_id = %payload.employee_id))]
    pub async fn add_payroll(&self, payload: NewPayroll) -> Result<Payslip, ServiceError> {
        payload.validate()?;
        require_employee_id(&payload.employee_id)?;
        let employee = self.get_employee(&payload.employee_id).await?;

        let payroll = Payroll::new(new_id(), payload);
        self.payrolls.insert(&payroll.id, &payroll).await?;

        info!(payroll_id = %payroll.id, "Payroll added");
        Ok(Payslip {
            payroll,
            employee_name: employee.name,
        })
    }

    pub async fn get_payroll(&self, id: &str) -> Result<Payroll, ServiceError> {
        self.payrolls
            .get(id)
            .await?
            .ok_or_else(|| ServiceError::payroll_not_found(id))
    }

    pub async fn list_payrolls(&self) -> Result<Vec<Payroll>, ServiceError> {
        self.payrolls.values().await
    }

    pub async fn employee_payrolls(&self, employee_id: &str) -> Result<Vec<Payroll>, ServiceError> {
        self.payrolls_where(|p| p.employee_id == employee_id).await
    }

    pub async fn payrolls_by_year(&self, year: u64) -> Result<Vec<Payroll>, ServiceError> {
        self.payrolls_where(|p| p.year == year).await
    }

    pub async fn payrolls_by_month(&self, month: &str) -> Result<Vec<Payroll>, ServiceError> {
        self.payrolls_where(|p| p.month == month).await
    }

    async fn payrolls_where<F>(&self, keep: F) -> Result<Vec<Payroll>, ServiceError>
    where
        F: Fn(&Payroll) -> bool,
    {
        Ok(self
            .payrolls
            .values()
            .await?
            .into_iter()
            .filter(|p| keep(p))
            .collect())
    }
}
