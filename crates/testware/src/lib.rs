pub mod mockall_catalog;
pub mod stub_service;

pub use mockall_catalog::MockCatalog;
pub use stub_service::{RecordedPost, StubCatalogService};
