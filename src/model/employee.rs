use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(
    example = json!({
        "id": "6f1c2b9e-6a4e-4a3b-9a57-0d6a3f0b6c11",
        "name": "John Doe",
        "email": "john.doe@company.com",
        "phone": "+8801712345678",
        "address": "12 Main Street",
        "department": "Engineering",
        "designation": "Backend Developer",
        "hireDate": "2024-01-01T09:00:00Z",
        "salary": 5000
    })
)]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub department: String,
    pub designation: String,

    /// Set once when the employee is added.
    #[schema(value_type = String, format = DateTime)]
    pub hire_date: DateTime<Utc>,

    #[schema(example = 5000)]
    pub salary: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
    #[validate(length(min = 1, message = "name must not be empty"))]
    #[schema(example = "John Doe")]
    pub name: String,
    #[validate(email(message = "email must be a valid address"))]
    #[schema(example = "john@email.com", format = "email")]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub designation: String,
    #[schema(example = 5000)]
    pub salary: u64,
}

/// Shallow patch: only the fields present are written.
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployee {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    #[validate(email(message = "email must be a valid address"))]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub department: Option<String>,
    pub designation: Option<String>,
    pub salary: Option<u64>,
}

impl Employee {
    pub fn new(id: String, hire_date: DateTime<Utc>, payload: NewEmployee) -> Self {
        Self {
            id,
            name: payload.name,
            email: payload.email,
            phone: payload.phone,
            address: payload.address,
            department: payload.department,
            designation: payload.designation,
            hire_date,
            salary: payload.salary,
        }
    }

    pub fn apply(&mut self, update: UpdateEmployee) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(phone) = update.phone {
            self.phone = phone;
        }
        if let Some(address) = update.address {
            self.address = address;
        }
        if let Some(department) = update.department {
            self.department = department;
        }
        if let Some(designation) = update.designation {
            self.designation = designation;
        }
        if let Some(salary) = update.salary {
            self.salary = salary;
        }
    }
}

impl UpdateEmployee {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.address.is_none()
            && self.department.is_none()
            && self.designation.is_none()
            && self.salary.is_none()
    }
}
