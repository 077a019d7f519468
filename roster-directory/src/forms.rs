//! Create/edit dialog payloads.
//!
//! Dialogs post loose JSON; these types apply the dialog defaults, check the
//! required fields and turn the result into a storable record.

use roster_core::errors::RosterResult;
use serde::Deserialize;
use serde_json::Value;
use validator::Validate;

use crate::models::{default_true, Client, ClientStatus, Employee, EmployeeStatus, Subscription};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ClientForm {
    #[validate(length(min = 1, message = "is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "is required"))]
    pub client_id: String,
    #[validate(length(min = 1, message = "is required"))]
    pub company: String,
    #[serde(default)]
    pub sector: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub contract_type: String,
    #[serde(default)]
    pub status: ClientStatus,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[validate(length(min = 1, message = "is required"))]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub city: String,
}

impl ClientForm {
    pub fn into_client(self) -> Client {
        Client {
            id: String::new(),
            name: self.name,
            client_id: self.client_id,
            company: self.company,
            sector: self.sector,
            location: self.city,
            is_active: self.is_active,
            contract_type: self.contract_type,
            last_contact: String::new(),
            status: self.status,
            phone: self.phone,
            email: self.email,
            website: Some(self.website).filter(|w| !w.is_empty()),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeForm {
    #[validate(length(min = 1, message = "is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "is required"))]
    pub last_name: String,
    #[validate(length(min = 1, message = "is required"))]
    pub employee_id: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub career_plan: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub status: EmployeeStatus,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[validate(length(min = 1, message = "is required"))]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

impl EmployeeForm {
    pub fn into_employee(self) -> Employee {
        Employee {
            id: String::new(),
            name: format!("{} {}", self.first_name, self.last_name),
            employee_id: self.employee_id,
            department: self.department,
            location: self.location,
            is_active: self.is_active,
            career_plan: self.career_plan,
            last_evaluation: String::new(),
            status: self.status,
            phone: self.phone,
            email: self.email,
        }
    }
}

pub fn client_from_form(data: &Value) -> RosterResult<Client> {
    roster_schema::validate::<ClientForm>(data, "Client validation failed").map(ClientForm::into_client)
}

pub fn employee_from_form(data: &Value) -> RosterResult<Employee> {
    roster_schema::validate::<EmployeeForm>(data, "Employee validation failed")
        .map(EmployeeForm::into_employee)
}

pub fn subscription_from_form(data: &Value) -> RosterResult<Subscription> {
    roster_schema::validate::<Subscription>(data, "Subscription validation failed")
}
