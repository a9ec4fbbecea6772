//! File-backed external collaborators and the concurrent lookup step.
//!
//! A lookup that fails, times out, or has no configured source yields `None`
//! with a warning. It never aborts the analysis.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::de::DeserializeOwned;
use signval_core::{CollaboratorError, DirectoryLookup, PlacesRecord, WebRecord, WebSearch};

/// Directory listing read from a JSON file holding a record or `null`.
#[derive(Debug, Clone, Default)]
pub(crate) struct FileDirectoryLookup {
    pub path: Option<PathBuf>,
}

/// Web search summary read from a JSON file holding a record or `null`.
#[derive(Debug, Clone, Default)]
pub(crate) struct FileWebSearch {
    pub path: Option<PathBuf>,
}

async fn read_record<T: DeserializeOwned>(
    collaborator: &'static str,
    path: &Path,
) -> Result<Option<T>, CollaboratorError> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| CollaboratorError::Unavailable {
            collaborator,
            reason: format!("{}: {e}", path.display()),
        })?;
    serde_json::from_str::<Option<T>>(&raw).map_err(|e| CollaboratorError::Malformed {
        collaborator,
        reason: e.to_string(),
    })
}

impl DirectoryLookup for FileDirectoryLookup {
    async fn lookup(
        &self,
        business_name: &str,
        address: Option<&str>,
    ) -> Result<Option<PlacesRecord>, CollaboratorError> {
        let Some(path) = self.path.as_deref() else {
            return Ok(None);
        };
        tracing::debug!(business_name, ?address, path = %path.display(), "directory lookup");
        read_record("directory lookup", path).await
    }
}

impl WebSearch for FileWebSearch {
    async fn search(&self, business_name: &str) -> Result<Option<WebRecord>, CollaboratorError> {
        let Some(path) = self.path.as_deref() else {
            return Ok(None);
        };
        tracing::debug!(business_name, path = %path.display(), "web search");
        read_record("web search", path).await
    }
}

/// Await one collaborator call under `limit`, folding every failure into `None`.
async fn settle<T, F>(collaborator: &'static str, limit: Duration, call: F) -> Option<T>
where
    F: Future<Output = Result<Option<T>, CollaboratorError>>,
{
    let outcome = tokio::time::timeout(limit, call)
        .await
        .unwrap_or_else(|_| {
            Err(CollaboratorError::TimedOut {
                collaborator,
                after_secs: limit.as_secs(),
            })
        });

    match outcome {
        Ok(Some(record)) => {
            tracing::info!(collaborator, "external record found");
            Some(record)
        }
        Ok(None) => {
            tracing::info!(collaborator, "no external record");
            None
        }
        Err(error) => {
            tracing::warn!(collaborator, %error, "external lookup failed; continuing without it");
            None
        }
    }
}

/// Run the directory lookup and web search concurrently, each bounded by `limit`.
pub(crate) async fn gather_external_records<D, W>(
    directory: &D,
    web: &W,
    business_name: &str,
    address: Option<&str>,
    limit: Duration,
) -> (Option<PlacesRecord>, Option<WebRecord>)
where
    D: DirectoryLookup,
    W: WebSearch,
{
    tokio::join!(
        settle(
            "directory lookup",
            limit,
            directory.lookup(business_name, address)
        ),
        settle("web search", limit, web.search(business_name)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    struct SlowDirectory;

    impl DirectoryLookup for SlowDirectory {
        async fn lookup(
            &self,
            _business_name: &str,
            _address: Option<&str>,
        ) -> Result<Option<PlacesRecord>, CollaboratorError> {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Ok(Some(PlacesRecord::default()))
        }
    }

    struct FailingSearch;

    impl WebSearch for FailingSearch {
        async fn search(&self, _business_name: &str) -> Result<Option<WebRecord>, CollaboratorError> {
            Err(CollaboratorError::Unavailable {
                collaborator: "web search",
                reason: "connection refused".to_string(),
            })
        }
    }

    struct FixedSearch;

    impl WebSearch for FixedSearch {
        async fn search(&self, business_name: &str) -> Result<Option<WebRecord>, CollaboratorError> {
            Ok(Some(WebRecord {
                name: business_name.to_string(),
                ..WebRecord::default()
            }))
        }
    }

    fn scratch_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("signval-{}-{name}", std::process::id()));
        std::fs::write(&path, contents).expect("write scratch file");
        path
    }

    #[tokio::test]
    async fn unconfigured_lookups_yield_nothing() {
        let (places, web) = gather_external_records(
            &FileDirectoryLookup::default(),
            &FileWebSearch::default(),
            "Taco Town",
            None,
            Duration::from_secs(1),
        )
        .await;
        assert!(places.is_none());
        assert!(web.is_none());
    }

    #[tokio::test]
    async fn missing_file_is_not_fatal() {
        let directory = FileDirectoryLookup {
            path: Some(PathBuf::from("/nonexistent/signval/places.json")),
        };
        let err = directory.lookup("Taco Town", None).await.unwrap_err();
        assert!(matches!(err, CollaboratorError::Unavailable { .. }));

        let (places, _) = gather_external_records(
            &directory,
            &FileWebSearch::default(),
            "Taco Town",
            None,
            Duration::from_secs(1),
        )
        .await;
        assert!(places.is_none());
    }

    #[tokio::test]
    async fn records_load_from_json_files() {
        let places_path = scratch_file(
            "places.json",
            r#"{"name": "Taco Town", "formatted_address": "9 Elm St, Austin, TX 78701, USA", "user_ratings_total": 42}"#,
        );
        let web_path = scratch_file("web.json", "null");

        let (places, web) = gather_external_records(
            &FileDirectoryLookup {
                path: Some(places_path.clone()),
            },
            &FileWebSearch {
                path: Some(web_path.clone()),
            },
            "Taco Town",
            None,
            Duration::from_secs(5),
        )
        .await;

        let places = places.expect("places record");
        assert_eq!(places.name, "Taco Town");
        assert_eq!(places.user_ratings_total, Some(42));
        assert!(web.is_none());

        std::fs::remove_file(places_path).ok();
        std::fs::remove_file(web_path).ok();
    }

    #[tokio::test]
    async fn listing_with_both_phone_fields_is_kept() {
        let path = scratch_file(
            "two-phones.json",
            r#"{"name": "Taco Town", "phone": "555-010-1000", "international_phone_number": "+1 555-010-2000", "rating": 4.3}"#,
        );
        let directory = FileDirectoryLookup {
            path: Some(path.clone()),
        };
        let places = directory
            .lookup("Taco Town", None)
            .await
            .expect("listing should parse")
            .expect("places record");
        assert_eq!(places.phone(), Some("+1 555-010-2000"));
        assert_eq!(places.rating, Some(4.3));
        std::fs::remove_file(path).ok();
    }

    #[tokio::test]
    async fn malformed_file_is_reported() {
        let path = scratch_file("broken.json", "{ not json");
        let search = FileWebSearch {
            path: Some(path.clone()),
        };
        let err = search.search("Taco Town").await.unwrap_err();
        assert!(matches!(err, CollaboratorError::Malformed { .. }));
        std::fs::remove_file(path).ok();
    }

    #[tokio::test]
    async fn slow_lookup_times_out_without_blocking_the_other() {
        let (places, web) = gather_external_records(
            &SlowDirectory,
            &FixedSearch,
            "Taco Town",
            None,
            Duration::from_millis(100),
        )
        .await;
        assert!(places.is_none());
        assert_eq!(web.map(|w| w.name), Some("Taco Town".to_string()));
    }

    #[tokio::test]
    async fn failed_search_keeps_directory_result() {
        let path = scratch_file("ok-places.json", r#"{"name": "Taco Town"}"#);
        let (places, web) = gather_external_records(
            &FileDirectoryLookup {
                path: Some(path.clone()),
            },
            &FailingSearch,
            "Taco Town",
            None,
            Duration::from_secs(5),
        )
        .await;
        assert!(places.is_some());
        assert!(web.is_none());
        std::fs::remove_file(path).ok();
    }
}
