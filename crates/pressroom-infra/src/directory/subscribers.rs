//! In-memory subscriber directory.
//!
//! Stands in for a subscriber backend that does not exist yet; notification
//! delivery is simulated by stamping `last_notification`.

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;

use pressroom_core::domain::{Subscriber, SubscriberStatus};
use pressroom_core::error::DirectoryError;
use pressroom_core::ports::SubscriberDirectory;

pub struct InMemorySubscriberDirectory {
    subscribers: RwLock<Vec<Subscriber>>,
}

impl InMemorySubscriberDirectory {
    pub fn new() -> Self {
        Self {
            subscribers: RwLock::new(Vec::new()),
        }
    }

    /// Directory pre-populated with the sample subscriber list.
    pub fn seeded() -> Self {
        Self {
            subscribers: RwLock::new(sample_subscribers()),
        }
    }
}

impl Default for InMemorySubscriberDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SubscriberDirectory for InMemorySubscriberDirectory {
    async fn list(&self) -> Result<Vec<Subscriber>, DirectoryError> {
        Ok(self.subscribers.read().await.clone())
    }

    async fn mark_notified(
        &self,
        ids: &[u64],
        date: NaiveDate,
    ) -> Result<Vec<Subscriber>, DirectoryError> {
        let mut subscribers = self.subscribers.write().await;
        let mut notified = Vec::new();
        for subscriber in subscribers.iter_mut() {
            if ids.contains(&subscriber.id) {
                subscriber.last_notification = Some(date);
                notified.push(subscriber.clone());
            }
        }
        tracing::info!(requested = ids.len(), delivered = notified.len(), "Notification recorded");
        Ok(notified)
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}

fn sample_subscribers() -> Vec<Subscriber> {
    let prefs = |list: &[&str]| list.iter().map(|p| p.to_string()).collect::<Vec<_>>();
    vec![
        Subscriber {
            id: 1,
            email: "john.doe@example.com".to_string(),
            name: "John Doe".to_string(),
            subscribed_at: date(2024, 1, 15),
            status: SubscriberStatus::Active,
            last_notification: Some(date(2024, 1, 20)),
            preferences: prefs(&["News & Updates", "Education & Learning"]),
        },
        Subscriber {
            id: 2,
            email: "jane.smith@example.com".to_string(),
            name: "Jane Smith".to_string(),
            subscribed_at: date(2024, 1, 10),
            status: SubscriberStatus::Active,
            last_notification: Some(date(2024, 1, 18)),
            preferences: prefs(&["Acts & Rules", "Leadership & Strategy"]),
        },
        Subscriber {
            id: 3,
            email: "mike.johnson@example.com".to_string(),
            name: "Mike Johnson".to_string(),
            subscribed_at: date(2024, 1, 8),
            status: SubscriberStatus::Inactive,
            last_notification: Some(date(2024, 1, 5)),
            preferences: prefs(&["News & Updates"]),
        },
        Subscriber {
            id: 4,
            email: "sarah.wilson@example.com".to_string(),
            name: "Sarah Wilson".to_string(),
            subscribed_at: date(2024, 1, 3),
            status: SubscriberStatus::Active,
            last_notification: None,
            preferences: prefs(&["Education & Learning"]),
        },
    ]
}
