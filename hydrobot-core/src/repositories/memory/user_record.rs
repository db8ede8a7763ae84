use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;

use hydrobot_common::models::UserRecord;
use hydrobot_common::traits::repository_traits::UserRecordRepository;
use crate::Error;

#[derive(Default)]
pub struct InMemoryUserRecordRepository {
    records: DashMap<String, UserRecord>,
}

impl InMemoryUserRecordRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl UserRecordRepository for InMemoryUserRecordRepository {
    async fn get(&self, user_id: &str) -> Result<Option<UserRecord>, Error> {
        Ok(self.records.get(user_id).map(|r| r.value().clone()))
    }

    async fn upsert(&self, record: &UserRecord) -> Result<(), Error> {
        debug!("upsert record for user_id={}", record.profile.user_id);
        self.records
            .insert(record.profile.user_id.clone(), record.clone());
        Ok(())
    }

    async fn delete(&self, user_id: &str) -> Result<bool, Error> {
        Ok(self.records.remove(user_id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hydrobot_common::models::UserProfile;

    fn profile(user_id: &str) -> UserProfile {
        UserProfile {
            user_id: user_id.into(),
            weight_kg: 80.0,
            height_cm: 180.0,
            age: 40,
            activity_minutes: 30,
            city: "Oslo".into(),
            water_goal: 2900.0,
            calorie_goal: 1825.0,
        }
    }

    #[tokio::test]
    async fn test_upsert_get_delete() -> Result<(), Error> {
        let repo = InMemoryUserRecordRepository::new();
        assert!(repo.get("1").await?.is_none());

        let mut record = UserRecord::new(profile("1"));
        repo.upsert(&record).await?;
        assert_eq!(repo.get("1").await?, Some(record.clone()));

        record.progress.logged_water = 500.0;
        repo.upsert(&record).await?;
        assert_eq!(repo.get("1").await?.unwrap().progress.logged_water, 500.0);
        assert_eq!(repo.len(), 1);

        assert!(repo.delete("1").await?);
        assert!(!repo.delete("1").await?);
        assert!(repo.is_empty());
        Ok(())
    }
}
