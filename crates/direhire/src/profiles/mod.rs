//! Worker profile read model over the hosted marketplace database.

pub mod domain;
pub mod router;
pub mod service;
pub mod store;

#[cfg(test)]
mod tests;

pub use domain::{ContactCard, OfferedService, ProfilePage, ReviewView, WorkerProfile};
pub use router::worker_router;
pub use service::{ProfileError, ProfileService};
pub use store::{
    CatalogSnapshot, JobId, JobRow, MarketplaceStore, RepositoryError, ReviewRow, ServiceId,
    ServiceRow, UserId, UserRole, UserRow, WorkerProfileRow, WorkerServiceRow,
};
