use roster_query::{FieldValue, Queryable};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::Record;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    #[default]
    Activa,
    Caducada,
}

impl SubscriptionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionStatus::Activa => "activa",
            SubscriptionStatus::Caducada => "caducada",
        }
    }
}

/// A row of the client detail "Suscripciones" tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    #[serde(default)]
    pub id: String,
    /// Owning client's record id; set by the service from the request scope.
    #[serde(default)]
    pub client_id: String,
    #[validate(length(min = 1, message = "is required"))]
    pub platform: String,
    #[validate(length(min = 1, message = "is required"))]
    pub plan: String,
    #[validate(length(min = 1, message = "is required"))]
    pub start_date: String,
    #[validate(length(min = 1, message = "is required"))]
    pub end_date: String,
    /// Display amount in euros, e.g. "15,99".
    #[validate(length(min = 1, message = "is required"))]
    pub amount: String,
    #[serde(default)]
    pub status: SubscriptionStatus,
}

impl Queryable for Subscription {
    const FIELDS: &'static [&'static str] = &[
        "id",
        "clientId",
        "platform",
        "plan",
        "startDate",
        "endDate",
        "amount",
        "status",
    ];

    const SEARCH_FIELDS: &'static [&'static str] = &["platform", "plan"];

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        let value = match name {
            "id" => FieldValue::Text(&self.id),
            "clientId" => FieldValue::Text(&self.client_id),
            "platform" => FieldValue::Text(&self.platform),
            "plan" => FieldValue::Text(&self.plan),
            "startDate" => FieldValue::Text(&self.start_date),
            "endDate" => FieldValue::Text(&self.end_date),
            "amount" => FieldValue::Text(&self.amount),
            "status" => FieldValue::Text(self.status.as_str()),
            _ => return None,
        };
        Some(value)
    }
}

impl Record for Subscription {
    const KIND: &'static str = "subscriptions";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}
