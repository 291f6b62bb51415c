//! gssh-client: HTTP client for the GlobalSSH API
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//!
//! use gssh_api::requests::DescribeInstancesRequest;
//! use gssh_client::{Credentials, GlobalSshApi, HttpClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let credentials = Credentials::new("public-key", "private-key");
//! let client = HttpClient::new("https://api.ucloud.cn/", credentials, Duration::from_secs(30))?;
//!
//! let response = client
//!     .describe_instances(&DescribeInstancesRequest::default())
//!     .await?;
//! for instance in response.instance_set {
//!     println!("{}", instance.instance_id);
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod http;
pub mod signature;
pub mod traits;

pub use error::{ClientError, Result};
pub use http::{Credentials, HttpClient};
pub use traits::GlobalSshApi;
