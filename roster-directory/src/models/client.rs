use roster_query::{FieldValue, Queryable};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{default_true, Record};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClientStatus {
    #[default]
    ClienteProspecto,
    ClienteActivo,
    ClienteInactivo,
}

impl ClientStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClientStatus::ClienteProspecto => "cliente-prospecto",
            ClientStatus::ClienteActivo => "cliente-activo",
            ClientStatus::ClienteInactivo => "cliente-inactivo",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    #[serde(default)]
    pub id: String,
    #[validate(length(min = 1, message = "is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "is required"))]
    pub client_id: String,
    #[validate(length(min = 1, message = "is required"))]
    pub company: String,
    #[serde(default)]
    pub sector: String,
    #[serde(default)]
    pub location: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub contract_type: String,
    #[serde(default)]
    pub last_contact: String,
    #[serde(default)]
    pub status: ClientStatus,
    #[serde(default)]
    pub phone: String,
    #[validate(length(min = 1, message = "is required"))]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

impl Client {
    /// Badge label for the documented status/activity pairings only.
    pub fn badge(&self) -> Option<&'static str> {
        match (self.status, self.is_active) {
            (ClientStatus::ClienteProspecto, false) => Some("Cliente Prospecto"),
            (ClientStatus::ClienteActivo, true) => Some("Cliente Activo"),
            (ClientStatus::ClienteInactivo, false) => Some("Cliente Inactivo"),
            _ => None,
        }
    }
}

impl Queryable for Client {
    const FIELDS: &'static [&'static str] = &[
        "id",
        "name",
        "clientId",
        "company",
        "sector",
        "location",
        "isActive",
        "contractType",
        "lastContact",
        "status",
        "phone",
        "email",
        "website",
    ];

    const SEARCH_FIELDS: &'static [&'static str] = &["name", "clientId", "company", "location"];

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        let value = match name {
            "id" => FieldValue::Text(&self.id),
            "name" => FieldValue::Text(&self.name),
            "clientId" => FieldValue::Text(&self.client_id),
            "company" => FieldValue::Text(&self.company),
            "sector" => FieldValue::Text(&self.sector),
            "location" => FieldValue::Text(&self.location),
            "isActive" => FieldValue::Flag(self.is_active),
            "contractType" => FieldValue::Text(&self.contract_type),
            "lastContact" => FieldValue::Text(&self.last_contact),
            "status" => FieldValue::Text(self.status.as_str()),
            "phone" => FieldValue::Text(&self.phone),
            "email" => FieldValue::Text(&self.email),
            "website" => FieldValue::Text(self.website.as_deref()?),
            _ => return None,
        };
        Some(value)
    }
}

impl Record for Client {
    const KIND: &'static str = "clients";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}
