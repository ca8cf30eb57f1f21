//! Short link creation, resolution and deletion.

use std::sync::Arc;
use std::time::Instant;

use serde_json::json;
use tracing::{error, info, warn};

use crate::domain::repositories::{LinkStore, StoreError};
use crate::error::AppError;
use crate::utils::code_generator::generate_code;

/// Service orchestrating code generation and the link store.
///
/// Holds no records of its own; every call is an independent round-trip to
/// the store. Input validation is the API layer's job.
pub struct LinkService {
    store: Arc<dyn LinkStore>,
    base_url: String,
}

impl LinkService {
    /// Creates a new link service.
    ///
    /// `base_url` is prepended verbatim to codes by [`Self::short_url`].
    pub fn new(store: Arc<dyn LinkStore>, base_url: impl Into<String>) -> Self {
        Self {
            store,
            base_url: base_url.into(),
        }
    }

    /// Generates a code for `original_url` and persists the mapping.
    ///
    /// A generated code that already exists overwrites the previous mapping.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store rejects the save.
    pub async fn create_short_url(&self, original_url: &str) -> Result<String, AppError> {
        let start = Instant::now();
        let code = generate_code();

        if let Err(e) = self.store.save(&code, original_url).await {
            error!(
                code = %code,
                original_url,
                error = %e,
                "failed to save short URL"
            );
            return Err(AppError::internal(
                "failed to create short URL",
                json!({ "code": code, "reason": e.to_string() }),
            ));
        }

        info!(
            code = %code,
            original_url,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "short URL created"
        );

        Ok(code)
    }

    /// Resolves a code to its original URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is absent or expired.
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn get_original_url(&self, code: &str) -> Result<String, AppError> {
        match self.store.get(code).await {
            Ok(original_url) => {
                info!(code, original_url = %original_url, "original URL found");
                Ok(original_url)
            }
            Err(e) => {
                log_lookup_failure(code, &e, "failed to retrieve original URL");
                Err(e.into())
            }
        }
    }

    /// Deletes the mapping for a code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is absent or already deleted.
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn delete_short_url(&self, code: &str) -> Result<(), AppError> {
        match self.store.delete(code).await {
            Ok(()) => {
                info!(code, "short URL deleted");
                Ok(())
            }
            Err(e) => {
                log_lookup_failure(code, &e, "short URL not found or already deleted");
                Err(e.into())
            }
        }
    }

    /// Constructs the full short URL from the configured base and a code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}{}", self.base_url, code)
    }

    /// Checks that the store is reachable.
    pub async fn store_healthy(&self) -> bool {
        self.store.ping().await.is_ok()
    }
}

fn log_lookup_failure(code: &str, e: &StoreError, message: &str) {
    match e {
        StoreError::NotFound { .. } => warn!(code, "{}", message),
        StoreError::Backend(_) => error!(code, error = %e, "{}", message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockLinkStore;
    use crate::infrastructure::store::MemoryLinkStore;
    use crate::utils::code_generator::CODE_LENGTH;
    use std::time::Duration;

    fn memory_service() -> LinkService {
        LinkService::new(
            Arc::new(MemoryLinkStore::new(Duration::from_secs(60))),
            "http://localhost:8080/",
        )
    }

    #[tokio::test]
    async fn test_create_short_url_saves_generated_code() {
        let mut mock_store = MockLinkStore::new();
        mock_store
            .expect_save()
            .withf(|code, url| code.len() == CODE_LENGTH && url == "https://example.com")
            .times(1)
            .returning(|_, _| Ok(()));

        let service = LinkService::new(Arc::new(mock_store), "http://s.test/");

        let code = service
            .create_short_url("https://example.com")
            .await
            .unwrap();
        assert_eq!(code.len(), CODE_LENGTH);
    }

    #[tokio::test]
    async fn test_create_short_url_save_failure_is_internal() {
        let mut mock_store = MockLinkStore::new();
        mock_store
            .expect_save()
            .times(1)
            .returning(|_, _| Err(StoreError::Backend("connection refused".to_string())));

        let service = LinkService::new(Arc::new(mock_store), "http://s.test/");

        let result = service.create_short_url("https://example.com").await;
        assert!(matches!(result, Err(AppError::Internal { .. })));
    }

    #[tokio::test]
    async fn test_get_original_url_not_found() {
        let mut mock_store = MockLinkStore::new();
        mock_store.expect_get().times(1).returning(|code| {
            Err(StoreError::NotFound {
                code: code.to_string(),
            })
        });

        let service = LinkService::new(Arc::new(mock_store), "http://s.test/");

        let result = service.get_original_url("missing1").await;
        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_get_original_url_backend_failure() {
        let mut mock_store = MockLinkStore::new();
        mock_store
            .expect_get()
            .times(1)
            .returning(|_| Err(StoreError::Backend("timeout".to_string())));

        let service = LinkService::new(Arc::new(mock_store), "http://s.test/");

        let result = service.get_original_url("abcdEFGH").await;
        assert!(matches!(result, Err(AppError::Internal { .. })));
    }

    #[tokio::test]
    async fn test_delete_short_url_not_found() {
        let mut mock_store = MockLinkStore::new();
        mock_store.expect_delete().times(1).returning(|code| {
            Err(StoreError::NotFound {
                code: code.to_string(),
            })
        });

        let service = LinkService::new(Arc::new(mock_store), "http://s.test/");

        let result = service.delete_short_url("missing1").await;
        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_round_trip() {
        let service = memory_service();

        let code = service
            .create_short_url("https://example.com/a?b=c#d")
            .await
            .unwrap();

        assert_eq!(
            service.get_original_url(&code).await.unwrap(),
            "https://example.com/a?b=c#d"
        );
    }

    #[tokio::test]
    async fn test_delete_then_get_is_not_found() {
        let service = memory_service();
        let code = service.create_short_url("https://example.com").await.unwrap();

        service.delete_short_url(&code).await.unwrap();

        assert!(matches!(
            service.get_original_url(&code).await,
            Err(AppError::NotFound { .. })
        ));
        assert!(matches!(
            service.delete_short_url(&code).await,
            Err(AppError::NotFound { .. })
        ));
    }

    #[test]
    fn test_short_url_uses_base() {
        let service = memory_service();

        assert_eq!(
            service.short_url("abcdEFGH"),
            "http://localhost:8080/abcdEFGH"
        );
    }

    #[tokio::test]
    async fn test_store_healthy() {
        let mut mock_store = MockLinkStore::new();
        mock_store
            .expect_ping()
            .times(1)
            .returning(|| Err(StoreError::Backend("down".to_string())));

        let service = LinkService::new(Arc::new(mock_store), "http://s.test/");
        assert!(!service.store_healthy().await);

        assert!(memory_service().store_healthy().await);
    }
}
