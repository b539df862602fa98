//! Application use cases. Orchestrate domain logic via ports.

pub mod composer;
pub mod delivery_client;
pub mod submission_service;

pub use composer::compose;
pub use delivery_client::{DeliveryClient, DEFAULT_SENDER};
pub use submission_service::SubmissionService;
