//! Client-side catalog state and its synchronization with the remote
//! product service.
//!
//! The state lives in a single [`CatalogState`] container with three slots
//! (collection, draft, feedback) plus an in-flight flag, and only changes
//! through [`CatalogState::apply`]. The async drivers [`run_refresh`] and
//! [`submit_product`] perform the I/O and hand their outcome back as an
//! event, so the transitions stay pure and testable without a UI.

use thiserror::Error;

use client::{ApiError, CatalogApi};
use data::{DraftField, InvalidDraft, Product, ProductDraft};

pub const MSG_FIELDS_REQUIRED: &str = "All fields are required";
pub const MSG_ADD_FAILED: &str = "Failed to add product";
pub const MSG_ADDED: &str = "Product added successfully!";

/// The single current user-facing status message. Error and success are
/// mutually exclusive by construction; a new value replaces the prior one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Feedback {
    #[default]
    None,
    Error(String),
    Success(String),
}

impl Feedback {
    pub fn error(&self) -> Option<&str> {
        match self {
            Feedback::Error(msg) => Some(msg),
            _ => None,
        }
    }

    pub fn success(&self) -> Option<&str> {
        match self {
            Feedback::Success(msg) => Some(msg),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] InvalidDraft),

    #[error("create request failed: `{0}`")]
    Create(ApiError),

    #[error("post-create refresh failed: `{0}`")]
    Refresh(ApiError),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CatalogState {
    /// Snapshot of the remote collection, in the order the service returned
    /// it. Only ever replaced wholesale, never locally patched.
    pub products: Vec<Product>,
    pub draft: ProductDraft,
    pub feedback: Feedback,
    /// True while a submission is running; blocks a second submit.
    pub in_flight: bool,
}

#[derive(Debug)]
pub enum CatalogEvent {
    DraftEdited(DraftField, String),
    RefreshSucceeded(Vec<Product>),
    RefreshFailed,
    SubmitStarted,
    SubmitFinished(Result<Vec<Product>, SubmitError>),
}

impl CatalogState {
    pub fn apply(&mut self, event: CatalogEvent) {
        match event {
            CatalogEvent::DraftEdited(field, value) => self.draft.set(field, value),
            CatalogEvent::RefreshSucceeded(products) => self.products = products,
            // The collection keeps whatever was last loaded; refresh
            // failures outside a submission are never shown to the user.
            CatalogEvent::RefreshFailed => {}
            CatalogEvent::SubmitStarted => self.in_flight = true,
            CatalogEvent::SubmitFinished(result) => {
                self.in_flight = false;
                match result {
                    Ok(products) => {
                        self.products = products;
                        self.draft = ProductDraft::default();
                        self.feedback = Feedback::Success(MSG_ADDED.to_string());
                    }
                    Err(SubmitError::Validation(_)) => {
                        self.feedback = Feedback::Error(MSG_FIELDS_REQUIRED.to_string());
                    }
                    Err(SubmitError::Create(_) | SubmitError::Refresh(_)) => {
                        self.feedback = Feedback::Error(MSG_ADD_FAILED.to_string());
                    }
                }
            }
        }
    }
}

/// Reads the remote collection once, for the initial load. Failures are
/// logged and otherwise silent.
pub async fn run_refresh<A: CatalogApi>(api: &A) -> CatalogEvent {
    match api.list().await {
        Ok(products) => CatalogEvent::RefreshSucceeded(products),
        Err(e) => {
            tracing::error!("Failed to fetch products: {e}");
            CatalogEvent::RefreshFailed
        }
    }
}

/// Runs one submission attempt: validate, create, then re-read the
/// collection. No request is issued for an invalid draft, and no refresh is
/// attempted after a failed create. Returns the fresh collection on full
/// success.
pub async fn submit_product<A: CatalogApi>(
    api: &A,
    draft: &ProductDraft,
) -> Result<Vec<Product>, SubmitError> {
    let payload = draft.to_new_product()?;

    api.create(&payload).await.map_err(SubmitError::Create)?;

    match api.list().await {
        Ok(products) => Ok(products),
        Err(e) => {
            // The product does exist server-side at this point; the user
            // still sees the generic creation failure (see DESIGN.md).
            tracing::warn!("Product was created but the catalog refresh failed: {e}");
            Err(SubmitError::Refresh(e))
        }
    }
}
