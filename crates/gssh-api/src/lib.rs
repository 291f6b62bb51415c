//! gssh-api: GlobalSSH API value types
//!
//! Contains the request/response types exchanged with the GlobalSSH API,
//! plus the client-side constraints (areas, ports) checked before a request
//! is ever dispatched.

pub mod area;
pub mod error;
pub mod params;
pub mod port;
pub mod requests;
pub mod responses;

pub use area::Area;
pub use error::ValidationError;
pub use params::GlobalParams;
pub use port::SshPort;
