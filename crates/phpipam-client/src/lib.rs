//! phpIPAM REST API Client
//!
//! A Rust client library for the phpIPAM REST API. A shared [`Session`]
//! carries the configuration and token; every request goes through
//! [`PhpIpamClient`], which logs in or refreshes the token first when needed.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use phpipam_client::{Config, Session, SubnetController};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Environment (PHPIPAM_*) first, then explicit settings on top
//! let session = Arc::new(Session::new([Config::default()
//!     .with_app_id("myapp")
//!     .with_endpoint("https://ipam.example.com/api")
//!     .with_username("admin")
//!     .with_password("secret")]));
//!
//! let subnets = SubnetController::new(Arc::clone(&session));
//! for subnet in subnets.get_subnets_by_cidr("10.10.1.0/24").await? {
//!     println!("{}/{} (id {})", subnet.subnet_address, subnet.mask, subnet.id);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! - **Session Management**: Lazy login, token refresh on expiry
//! - **Envelope Decoding**: `{code, success, data, message}` responses mapped to typed results
//! - **String Scalars**: Integers and booleans encoded the way phpIPAM expects
//! - **Controllers**: Addresses, sections, subnets, VLANs

mod auth;
pub mod client;
pub mod codec;
pub mod config;
pub mod controllers;
pub mod envelope;
pub mod error;
pub mod models;
pub mod request;
pub mod session;

pub use client::PhpIpamClient;
pub use codec::BoolIntString;
pub use config::Config;
pub use controllers::{AddressController, SectionController, SubnetController, VlanController};
pub use error::PhpIpamError;
pub use models::*;
pub use session::{Session, SessionState, Token};
