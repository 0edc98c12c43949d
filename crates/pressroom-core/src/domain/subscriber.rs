use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriberStatus {
    Active,
    Inactive,
}

/// Newsletter subscriber.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscriber {
    pub id: u64,
    pub email: String,
    pub name: String,
    pub subscribed_at: NaiveDate,
    pub status: SubscriberStatus,
    pub last_notification: Option<NaiveDate>,
    /// Category names the subscriber opted into.
    pub preferences: Vec<String>,
}
