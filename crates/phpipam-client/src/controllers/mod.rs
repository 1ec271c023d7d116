//! Resource controllers
//!
//! Thin wrappers over [`PhpIpamClient`](crate::PhpIpamClient), one per phpIPAM
//! controller:
//! - `addresses.rs` - IP address entries
//! - `sections.rs` - sections
//! - `subnets.rs` - subnets
//! - `vlans.rs` - VLANs
//!
//! Each one supplies a verb, a path and typed records; session handling and
//! envelope decoding live in the client.

mod addresses;
mod sections;
mod subnets;
mod vlans;

pub use addresses::AddressController;
pub use sections::SectionController;
pub use subnets::SubnetController;
pub use vlans::VlanController;
