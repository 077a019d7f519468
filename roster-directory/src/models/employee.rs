use roster_query::{FieldValue, Queryable};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{default_true, Record};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmployeeStatus {
    #[default]
    NuevaReferencia,
    EmpleadoActivo,
    EmpleadoInteresado,
}

impl EmployeeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmployeeStatus::NuevaReferencia => "nueva-referencia",
            EmployeeStatus::EmpleadoActivo => "empleado-activo",
            EmployeeStatus::EmpleadoInteresado => "empleado-interesado",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(default)]
    pub id: String,
    #[validate(length(min = 1, message = "is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "is required"))]
    pub employee_id: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub location: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub career_plan: String,
    #[serde(default)]
    pub last_evaluation: String,
    #[serde(default)]
    pub status: EmployeeStatus,
    #[serde(default)]
    pub phone: String,
    #[validate(length(min = 1, message = "is required"))]
    pub email: String,
}

impl Employee {
    pub fn badge(&self) -> Option<&'static str> {
        match (self.status, self.is_active) {
            (EmployeeStatus::NuevaReferencia, false) => Some("Nueva Referencia"),
            (EmployeeStatus::EmpleadoActivo, true) => Some("Empleado Activo"),
            (EmployeeStatus::EmpleadoInteresado, false) => Some("Empleado Interesado"),
            _ => None,
        }
    }
}

impl Queryable for Employee {
    const FIELDS: &'static [&'static str] = &[
        "id",
        "name",
        "employeeId",
        "department",
        "location",
        "isActive",
        "careerPlan",
        "lastEvaluation",
        "status",
        "phone",
        "email",
    ];

    const SEARCH_FIELDS: &'static [&'static str] = &["name", "employeeId", "location"];

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        let value = match name {
            "id" => FieldValue::Text(&self.id),
            "name" => FieldValue::Text(&self.name),
            "employeeId" => FieldValue::Text(&self.employee_id),
            "department" => FieldValue::Text(&self.department),
            "location" => FieldValue::Text(&self.location),
            "isActive" => FieldValue::Flag(self.is_active),
            "careerPlan" => FieldValue::Text(&self.career_plan),
            "lastEvaluation" => FieldValue::Text(&self.last_evaluation),
            "status" => FieldValue::Text(self.status.as_str()),
            "phone" => FieldValue::Text(&self.phone),
            "email" => FieldValue::Text(&self.email),
            _ => return None,
        };
        Some(value)
    }
}

impl Record for Employee {
    const KIND: &'static str = "employees";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}
