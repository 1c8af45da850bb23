//! AWS access for the state schema builder
//!
//! Credentials come from a named profile, optionally through a file-backed
//! assumed-role cache keyed by the profile's session properties. S3 is
//! reached through a small trait so the schema pipeline can run against
//! in-memory fakes.

pub mod cache;
mod identity;
mod profile;
mod session;
mod storage;

pub use cache::{CachedCredentialsProvider, JsonFileCache};
pub use identity::StsCallerIdentity;
pub use session::{AwsSession, SessionOptions};
pub use storage::{ObjectStore, S3ObjectStore};
