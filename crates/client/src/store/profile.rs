//! User profile store.

use planta_core::UserProfile;
use tracing::instrument;

use crate::api::{ApiError, ShopApi};

/// Single-record mirror of the session user's `/users/{id}` resource.
///
/// Loading and error flags bracket each call so the profile screen can
/// render a spinner or a failure notice without inspecting the `Result`
/// again after the fact.
pub struct ProfileStore {
    api: ShopApi,
    profile: Option<UserProfile>,
    loading: bool,
    error: Option<String>,
}

impl ProfileStore {
    /// Create an empty store backed by the given API client.
    #[must_use]
    pub const fn new(api: ShopApi) -> Self {
        Self {
            api,
            profile: None,
            loading: false,
            error: None,
        }
    }

    /// The last successfully loaded profile, if any.
    #[must_use]
    pub const fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    /// Whether a fetch or save is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Human-readable message from the last failed call, cleared when a new
    /// call starts.
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Fetch the profile and replace the local copy.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`ApiError`]; the local profile is untouched
    /// on failure and the error flag is set.
    #[instrument(skip(self))]
    pub async fn fetch(&mut self, user_id: &str) -> Result<(), ApiError> {
        self.loading = true;
        self.error = None;

        let result = self.api.get_user(user_id).await;
        self.loading = false;

        match result {
            Ok(profile) => {
                self.profile = Some(profile);
                Ok(())
            }
            Err(err) => {
                self.error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Put the full profile record.
    ///
    /// On success the local profile is replaced with the server-returned
    /// value, so any server-side normalization wins.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`ApiError`]; the local profile is left
    /// unchanged on failure and the error flag is set.
    #[instrument(skip(self, profile), fields(id = %profile.id))]
    pub async fn save(&mut self, profile: UserProfile) -> Result<(), ApiError> {
        self.loading = true;
        self.error = None;

        let result = self.api.update_user(&profile).await;
        self.loading = false;

        match result {
            Ok(saved) => {
                self.profile = Some(saved);
                Ok(())
            }
            Err(err) => {
                self.error = Some(err.to_string());
                Err(err)
            }
        }
    }
}
