//! Contracts for the external lookup collaborators.
//!
//! Implementations live with the caller. The core never retries, never
//! bounds latency, and treats an `Err` exactly like `Ok(None)`.

use std::future::Future;

use crate::error::CollaboratorError;
use crate::records::{PlacesRecord, WebRecord};

/// Directory listing lookup (name + optional address → listing).
pub trait DirectoryLookup {
    /// # Errors
    ///
    /// Returns [`CollaboratorError`] when the directory cannot be queried or
    /// its response cannot be interpreted.
    fn lookup(
        &self,
        business_name: &str,
        address: Option<&str>,
    ) -> impl Future<Output = Result<Option<PlacesRecord>, CollaboratorError>> + Send;
}

/// Web search summarised into a single business record.
pub trait WebSearch {
    /// # Errors
    ///
    /// Returns [`CollaboratorError`] when the search backend cannot be reached
    /// or its response cannot be interpreted.
    fn search(
        &self,
        business_name: &str,
    ) -> impl Future<Output = Result<Option<WebRecord>, CollaboratorError>> + Send;
}
