//! phpIPAM API models
//!
//! These models follow the field names of the phpIPAM REST controllers.
//! Integers and booleans travel as strings (see [`crate::codec`]); zero,
//! false and empty fields are left out of request bodies so an update only
//! touches what the caller set.

use serde::{Deserialize, Serialize};

use crate::codec::{BoolIntString, int_string, is_default, nullable_string};

/// IP address entry (`/addresses/`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// Database ID
    #[serde(default, with = "int_string", skip_serializing_if = "is_default")]
    pub id: u64,

    /// Subnet the address belongs to
    #[serde(default, with = "int_string", skip_serializing_if = "is_default")]
    pub subnet_id: u64,

    /// The IP address itself
    #[serde(
        rename = "ip",
        default,
        deserialize_with = "nullable_string",
        skip_serializing_if = "String::is_empty"
    )]
    pub ip_address: String,

    /// Whether this address is the subnet gateway
    #[serde(rename = "is_gateway", default, skip_serializing_if = "is_default")]
    pub is_gateway: BoolIntString,

    /// Free-form description
    #[serde(
        default,
        deserialize_with = "nullable_string",
        skip_serializing_if = "String::is_empty"
    )]
    pub description: String,

    /// DNS host name
    #[serde(
        default,
        deserialize_with = "nullable_string",
        skip_serializing_if = "String::is_empty"
    )]
    pub hostname: String,

    /// MAC address
    #[serde(
        rename = "mac",
        default,
        deserialize_with = "nullable_string",
        skip_serializing_if = "String::is_empty"
    )]
    pub mac_address: String,

    /// Owner of the address
    #[serde(
        default,
        deserialize_with = "nullable_string",
        skip_serializing_if = "String::is_empty"
    )]
    pub owner: String,

    /// Address state tag ID
    #[serde(default, with = "int_string", skip_serializing_if = "is_default")]
    pub tag: u64,

    /// Skip PTR record management
    #[serde(rename = "PTRignore", default, skip_serializing_if = "is_default")]
    pub ptr_ignore: BoolIntString,

    /// PTR record ID
    #[serde(rename = "PTR", default, with = "int_string", skip_serializing_if = "is_default")]
    pub ptr_record_id: u64,

    /// Device the address is assigned to
    #[serde(default, with = "int_string", skip_serializing_if = "is_default")]
    pub device_id: u64,

    /// Switch port
    #[serde(
        default,
        deserialize_with = "nullable_string",
        skip_serializing_if = "String::is_empty"
    )]
    pub port: String,

    /// Free-form note
    #[serde(
        default,
        deserialize_with = "nullable_string",
        skip_serializing_if = "String::is_empty"
    )]
    pub note: String,

    /// Last time the address answered a scan
    #[serde(
        default,
        deserialize_with = "nullable_string",
        skip_serializing_if = "String::is_empty"
    )]
    pub last_seen: String,

    /// Leave the address out of ping scans
    #[serde(default, skip_serializing_if = "is_default")]
    pub exclude_ping: BoolIntString,

    /// Last edit, server-assigned
    #[serde(
        default,
        deserialize_with = "nullable_string",
        skip_serializing_if = "String::is_empty"
    )]
    pub edit_date: String,
}

/// Section (`/sections/`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    /// Database ID
    #[serde(default, with = "int_string", skip_serializing_if = "is_default")]
    pub id: u64,

    /// Section name, unique across the installation
    #[serde(
        default,
        deserialize_with = "nullable_string",
        skip_serializing_if = "String::is_empty"
    )]
    pub name: String,

    /// Free-form description
    #[serde(
        default,
        deserialize_with = "nullable_string",
        skip_serializing_if = "String::is_empty"
    )]
    pub description: String,

    /// Parent section ID, 0 for a top-level section
    #[serde(default, with = "int_string", skip_serializing_if = "is_default")]
    pub master_section: u64,

    /// Group permissions as a JSON-encoded string
    #[serde(
        default,
        deserialize_with = "nullable_string",
        skip_serializing_if = "String::is_empty"
    )]
    pub permissions: String,

    /// Reject overlapping subnets
    #[serde(default, skip_serializing_if = "is_default")]
    pub strict_mode: BoolIntString,

    /// Subnet ordering override
    #[serde(
        default,
        deserialize_with = "nullable_string",
        skip_serializing_if = "String::is_empty"
    )]
    pub subnet_ordering: String,

    /// Display order
    #[serde(default, with = "int_string", skip_serializing_if = "is_default")]
    pub order: u64,

    /// Last edit, server-assigned
    #[serde(
        default,
        deserialize_with = "nullable_string",
        skip_serializing_if = "String::is_empty"
    )]
    pub edit_date: String,

    /// Show VLANs in the subnet list
    #[serde(rename = "showVLAN", default, skip_serializing_if = "is_default")]
    pub show_vlan: BoolIntString,

    /// Show VRFs in the subnet list
    #[serde(rename = "showVRF", default, skip_serializing_if = "is_default")]
    pub show_vrf: BoolIntString,

    /// Nameserver set assignment
    #[serde(
        rename = "DNS",
        default,
        deserialize_with = "nullable_string",
        skip_serializing_if = "String::is_empty"
    )]
    pub dns: String,
}

/// Subnet (`/subnets/`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subnet {
    /// Database ID
    #[serde(default, with = "int_string", skip_serializing_if = "is_default")]
    pub id: u64,

    /// Network address (e.g., "10.10.3.0")
    #[serde(
        rename = "subnet",
        default,
        deserialize_with = "nullable_string",
        skip_serializing_if = "String::is_empty"
    )]
    pub subnet_address: String,

    /// Prefix length
    #[serde(default, with = "int_string", skip_serializing_if = "is_default")]
    pub mask: u8,

    /// Section the subnet belongs to
    #[serde(default, with = "int_string", skip_serializing_if = "is_default")]
    pub section_id: u64,

    /// Free-form description
    #[serde(
        default,
        deserialize_with = "nullable_string",
        skip_serializing_if = "String::is_empty"
    )]
    pub description: String,

    /// Firewall address object name
    #[serde(
        default,
        deserialize_with = "nullable_string",
        skip_serializing_if = "String::is_empty"
    )]
    pub firewall_address_object: String,

    /// VRF the subnet belongs to
    #[serde(default, with = "int_string", skip_serializing_if = "is_default")]
    pub vrf_id: u64,

    /// Parent subnet ID, 0 for a root subnet
    #[serde(default, with = "int_string", skip_serializing_if = "is_default")]
    pub master_subnet_id: u64,

    /// Allow IP requests from the web UI
    #[serde(default, skip_serializing_if = "is_default")]
    pub allow_requests: BoolIntString,

    /// VLAN database ID
    #[serde(default, with = "int_string", skip_serializing_if = "is_default")]
    pub vlan_id: u64,

    /// Show the description instead of the address
    #[serde(default, skip_serializing_if = "is_default")]
    pub show_name: BoolIntString,

    /// Device the subnet is attached to
    #[serde(rename = "device", default, with = "int_string", skip_serializing_if = "is_default")]
    pub device_id: u64,

    /// Group permissions as a JSON-encoded string
    #[serde(
        default,
        deserialize_with = "nullable_string",
        skip_serializing_if = "String::is_empty"
    )]
    pub permissions: String,

    /// Include in ping scans
    #[serde(default, skip_serializing_if = "is_default")]
    pub ping_subnet: BoolIntString,

    /// Include in host discovery
    #[serde(default, skip_serializing_if = "is_default")]
    pub discover_subnet: BoolIntString,

    /// Create reverse DNS zones recursively
    #[serde(rename = "DNSrecursive", default, skip_serializing_if = "is_default")]
    pub dns_recursive: BoolIntString,

    /// Show DNS records in the address list
    #[serde(rename = "DNSrecords", default, skip_serializing_if = "is_default")]
    pub dns_records: BoolIntString,

    /// Nameserver set for reverse records
    #[serde(default, with = "int_string", skip_serializing_if = "is_default")]
    pub nameserver_id: u64,

    /// Scan agent ID
    #[serde(default, with = "int_string", skip_serializing_if = "is_default")]
    pub scan_agent: u64,

    /// Subnet is a folder, not a network
    #[serde(default, skip_serializing_if = "is_default")]
    pub is_folder: BoolIntString,

    /// Marked as fully allocated
    #[serde(default, skip_serializing_if = "is_default")]
    pub is_full: BoolIntString,

    /// Subnet state tag ID
    #[serde(rename = "tag", default, with = "int_string", skip_serializing_if = "is_default")]
    pub tag_id: u64,

    /// Last edit, server-assigned
    #[serde(
        default,
        deserialize_with = "nullable_string",
        skip_serializing_if = "String::is_empty"
    )]
    pub edit_date: String,
}

/// VLAN (`/vlans/`)
///
/// `id` is the database entry; the 802.1Q tag is `number`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vlan {
    /// Database ID
    #[serde(default, with = "int_string", skip_serializing_if = "is_default")]
    pub id: u64,

    /// Layer 2 domain
    #[serde(default, with = "int_string", skip_serializing_if = "is_default")]
    pub domain_id: u64,

    /// VLAN name
    #[serde(
        default,
        deserialize_with = "nullable_string",
        skip_serializing_if = "String::is_empty"
    )]
    pub name: String,

    /// VLAN number
    #[serde(default, with = "int_string", skip_serializing_if = "is_default")]
    pub number: u16,

    /// Free-form description
    #[serde(
        default,
        deserialize_with = "nullable_string",
        skip_serializing_if = "String::is_empty"
    )]
    pub description: String,

    /// Last edit, server-assigned
    #[serde(
        default,
        deserialize_with = "nullable_string",
        skip_serializing_if = "String::is_empty"
    )]
    pub edit_date: String,
}
