//! Process-wide cache of the site settings.

use tokio::sync::OnceCell;
use tracing::warn;

use common::AppError;
use domain::Settings;

use crate::repository::DataStore;

/// Settings are read once and kept for the life of the process. A failed
/// read falls back to defaults and is retried on the next call.
#[derive(Debug, Default)]
pub struct SettingsCache {
    cell: OnceCell<Settings>,
}

impl SettingsCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current settings, loading them from `store` on first use.
    pub async fn get(&self, store: &dyn DataStore) -> Settings {
        let loaded = self
            .cell
            .get_or_try_init(|| async {
                let settings = store.fetch_settings().await?;
                Ok::<_, AppError>(settings.unwrap_or_default())
            })
            .await;

        match loaded {
            Ok(settings) => settings.clone(),
            Err(e) => {
                warn!("Could not load settings, using defaults: {}", e);
                Settings::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockDataStore;

    #[tokio::test]
    async fn test_settings_are_cached_after_first_load() {
        let mut store = MockDataStore::new();
        store.expect_fetch_settings().times(1).returning(|| {
            Ok(Some(Settings {
                logo: "https://cdn.example.com/logo.png".to_string(),
                title: "COMPOSE".to_string(),
            }))
        });

        let cache = SettingsCache::new();
        let first = cache.get(&store).await;
        let second = cache.get(&store).await;

        assert_eq!(first.title, "COMPOSE");
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_missing_row_uses_defaults() {
        let mut store = MockDataStore::new();
        store.expect_fetch_settings().times(1).returning(|| Ok(None));

        let cache = SettingsCache::new();
        assert_eq!(cache.get(&store).await, Settings::default());
        assert_eq!(cache.get(&store).await, Settings::default());
    }

    #[tokio::test]
    async fn test_failed_read_is_not_cached() {
        let mut store = MockDataStore::new();
        let mut seq = mockall::Sequence::new();
        store
            .expect_fetch_settings()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Err(AppError::internal("connection reset")));
        store
            .expect_fetch_settings()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| {
                Ok(Some(Settings {
                    logo: "/brand.png".to_string(),
                    title: String::new(),
                }))
            });

        let cache = SettingsCache::new();
        assert_eq!(cache.get(&store).await, Settings::default());
        assert_eq!(cache.get(&store).await.logo, "/brand.png");
    }
}
