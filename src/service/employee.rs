use chrono::Utc;
use tracing::{debug, info, instrument};
use validator::Validate;

use super::{RecordStore, new_id};
use crate::{
    error::ServiceError,
    model::employee::{Employee, NewEmployee, UpdateEmployee},
};

impl RecordStore {
    #[instrument(name = "add_employee", skip(self, payload), fields(name = %payload.name))]
    pub async fn add_employee(&self, payload: NewEmployee) -> Result<Employee, ServiceError> {
        payload.validate()?;

        let employee = Employee::new(new_id(), Utc::now(), payload);
        self.employees.insert(&employee.id, &employee).await?;

        info!(employee_id = %employee.id, "Employee added");
        Ok(employee)
    }

    pub async fn get_employee(&self, id: &str) -> Result<Employee, ServiceError> {
        self.employees
            .get(id)
            .await?
            .ok_or_else(|| ServiceError::employee_not_found(id))
    }

    pub async fn list_employees(&self) -> Result<Vec<Employee>, ServiceError> {
        self.employees.values().await
    }

    /// Case-insensitive substring match on the name.
    pub async fn search_employees(&self, name: &str) -> Result<Vec<Employee>, ServiceError> {
        let needle = name.to_lowercase();
        debug!(search = %needle, "Searching employees by name");

        let matches = self
            .employees
            .values()
            .await?
            .into_iter()
            .filter(|employee| employee.name.to_lowercase().contains(&needle))
            .collect();

        Ok(matches)
    }

    #[instrument(name = "update_employee", skip(self, update))]
    pub async fn update_employee(
        &self,
        id: &str,
        update: UpdateEmployee,
    ) -> Result<Employee, ServiceError> {
        let mut employee = self.get_employee(id).await?;

        if update.is_empty() {
            return Err(ServiceError::InvalidPayload(
                "No fields provided for update".to_string(),
            ));
        }
        update.validate()?;

        employee.apply(update);
        self.employees.insert(&employee.id, &employee).await?;

        info!(employee_id = %employee.id, "Employee updated");
        Ok(employee)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::test_support::{hire, new_employee, store};

    #[actix_web::test]
    async fn add_then_get_returns_the_same_record() {
        let store = store().await;

        let payload = new_employee("Alice", 5000);
        let added = store.add_employee(payload.clone()).await.unwrap();

        assert!(!added.id.is_empty());
        assert_eq!(added.name, payload.name);
        assert_eq!(added.email, payload.email);
        assert_eq!(added.salary, 5000);

        let fetched = store.get_employee(&added.id).await.unwrap();
        assert_eq!(fetched, added);
    }

    #[actix_web::test]
    async fn each_employee_gets_a_fresh_id() {
        let store = store().await;

        let a = hire(&store, "Alice").await;
        let b = hire(&store, "Alice").await;

        assert_ne!(a.id, b.id);
        assert_eq!(store.list_employees().await.unwrap().len(), 2);
    }

    #[actix_web::test]
    async fn invalid_payload_is_rejected_without_writing() {
        let store = store().await;

        let mut payload = new_employee("Alice", 5000);
        payload.name = String::new();
        let err = store.add_employee(payload).await.unwrap_err();
        assert!(matches!(err, ServiceError::InvalidPayload(_)));

        let mut payload = new_employee("Bob", 5000);
        payload.email = "not-an-email".into();
        let err = store.add_employee(payload).await.unwrap_err();
        assert!(matches!(err, ServiceError::InvalidPayload(_)));

        assert!(store.list_employees().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn get_unknown_employee_is_not_found() {
        let store = store().await;

        let err = store.get_employee("missing").await.unwrap_err();
        assert_eq!(err, ServiceError::employee_not_found("missing"));
    }

    #[actix_web::test]
    async fn search_is_case_insensitive_substring() {
        let store = store().await;
        hire(&store, "John").await;
        hire(&store, "Joanna").await;
        hire(&store, "Mary").await;

        let mut names: Vec<String> = store
            .search_employees("jo")
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        names.sort();
        assert_eq!(names, vec!["Joanna", "John"]);

        assert_eq!(store.search_employees("ARY").await.unwrap().len(), 1);
        assert!(store.search_employees("zed").await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn update_overwrites_only_given_fields() {
        let store = store().await;
        let alice = hire(&store, "Alice").await;

        let update = UpdateEmployee {
            department: Some("Finance".into()),
            salary: Some(6500),
            ..Default::default()
        };
        let updated = store.update_employee(&alice.id, update).await.unwrap();

        assert_eq!(updated.department, "Finance");
        assert_eq!(updated.salary, 6500);
        assert_eq!(updated.id, alice.id);
        assert_eq!(updated.name, alice.name);
        assert_eq!(updated.email, alice.email);
        assert_eq!(updated.hire_date, alice.hire_date);

        assert_eq!(store.get_employee(&alice.id).await.unwrap(), updated);
    }

    #[actix_web::test]
    async fn update_unknown_employee_is_not_found() {
        let store = store().await;

        let update = UpdateEmployee {
            name: Some("Ghost".into()),
            ..Default::default()
        };
        let err = store.update_employee("missing", update).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[actix_web::test]
    async fn empty_update_is_invalid() {
        let store = store().await;
        let alice = hire(&store, "Alice").await;

        let err = store
            .update_employee(&alice.id, UpdateEmployee::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidPayload(_)));
    }
}
