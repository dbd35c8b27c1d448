//! Generic resource operations.
//!
//! This module provides the [`ResourcesClient`], a hand-written client for
//! the operations shared by every Resource Manager service — read,
//! create-or-update, delete, and list — addressed by fully qualified
//! [`ResourceId`](crate::resource::ResourceId)s. Long-running mutations
//! return a [`Poller`](crate::lro::Poller); listings return a [`Pager`].

mod client;
mod errors;
mod models;
mod pager;

pub use client::ResourcesClient;
pub use errors::ResourcesError;
pub use models::{GenericResource, ResourceListResult};
pub use pager::Pager;
