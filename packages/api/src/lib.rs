//! # API crate: the client side of the remote user collection
//!
//! Everything the view needs to talk to the collection endpoint lives here.
//! The view depends on the [`UserDirectory`] trait, so the same code drives the
//! real endpoint, an in-memory collection in tests, and the offline demo.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`directory`] | The [`UserDirectory`] trait and the config-selected [`Directory`] |
//! | [`http`] | [`HttpDirectory`], the `reqwest` implementation |
//! | [`memory`] | [`MemoryDirectory`], an in-process collection with failure injection |
//! | [`wire`] | [`RemoteUser`], the listing shape and its mapping into records |
//! | [`actions`] | Settling remote outcomes into a [`store::Roster`] and picking the notice |
//!
//! ## Endpoint
//!
//! - `GET /users`: list
//! - `POST /users`: create (body carries the client id)
//! - `PUT /users/{id}`: replace
//! - `DELETE /users/{id}`: remove

pub mod actions;
pub mod directory;
mod error;
pub mod http;
pub mod memory;
pub mod wire;

pub use directory::{Directory, UserDirectory};
pub use error::RemoteError;
pub use http::HttpDirectory;
pub use memory::MemoryDirectory;
pub use wire::RemoteUser;
