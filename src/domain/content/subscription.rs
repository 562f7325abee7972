//! Subscriptions linking a subscriber to a creator.
//!
//! Read-only on the client; the billing collaborator owns their lifecycle.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Money, SubscriptionId, Timestamp, UserId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionPlan {
    Basic,
    Premium,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    Active,
    Cancelled,
    Expired,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    #[serde(rename = "_id")]
    pub id: SubscriptionId,
    pub subscriber: UserId,
    pub creator: UserId,
    pub plan: SubscriptionPlan,
    pub status: SubscriptionStatus,
    pub next_billing: Timestamp,
    pub price: Money,
}

impl Subscription {
    pub fn is_active(&self) -> bool {
        self.status == SubscriptionStatus::Active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_backend_json() {
        let json = r#"{
            "_id": "s1",
            "subscriber": "u1",
            "creator": "c1",
            "plan": "premium",
            "status": "active",
            "nextBilling": "2024-02-15T00:00:00Z",
            "price": 9.99
        }"#;
        let sub: Subscription = serde_json::from_str(json).unwrap();
        assert_eq!(sub.plan, SubscriptionPlan::Premium);
        assert!(sub.is_active());
        assert_eq!(sub.price.cents(), 999);
    }
}
