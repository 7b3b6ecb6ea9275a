use serde::{Deserialize, Serialize};
use std::sync::Mutex;

/// User-granted access level for the media library
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuthorizationStatus {
    #[default]
    NotDetermined,
    Restricted,
    Denied,
    Limited,
    Full,
}

impl AuthorizationStatus {
    /// Whether reads and deletions may proceed
    pub fn is_authorized(&self) -> bool {
        matches!(self, AuthorizationStatus::Limited | AuthorizationStatus::Full)
    }
}

/// Source of the library authorization state
pub trait LibraryAuthorization: Send + Sync {
    /// Current authorization state
    fn status(&self) -> AuthorizationStatus;

    /// Ask for access and return the resulting state
    fn request(&self) -> AuthorizationStatus;
}

/// Authorization with a fixed state.
///
/// A request moves `NotDetermined` to the configured granted state; any
/// other state is returned unchanged.
#[derive(Debug)]
pub struct StaticAuthorization {
    current: Mutex<AuthorizationStatus>,
    granted: AuthorizationStatus,
}

impl StaticAuthorization {
    pub fn new(status: AuthorizationStatus) -> Self {
        Self {
            current: Mutex::new(status),
            granted: AuthorizationStatus::Full,
        }
    }

    /// State a pending request resolves to
    pub fn granting(mut self, granted: AuthorizationStatus) -> Self {
        self.granted = granted;
        self
    }
}

impl LibraryAuthorization for StaticAuthorization {
    fn status(&self) -> AuthorizationStatus {
        *self.current.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn request(&self) -> AuthorizationStatus {
        let mut current = self.current.lock().unwrap_or_else(|e| e.into_inner());
        if *current == AuthorizationStatus::NotDetermined {
            *current = self.granted;
            tracing::info!(status = ?*current, "Library authorization resolved");
        }
        *current
    }
}
