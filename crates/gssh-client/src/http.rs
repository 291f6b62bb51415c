//! HTTP client for the GlobalSSH API

use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, instrument};
use url::Url;

use gssh_api::requests::{
    ApiRequest, CreateInstanceRequest, DeleteInstanceRequest, DescribeInstancesRequest,
    ModifyPortRequest, ModifyRemarkRequest,
};
use gssh_api::responses::{CreateInstanceResponse, DescribeInstancesResponse, StatusResponse};

use crate::error::{ClientError, Result};
use crate::signature::sign;
use crate::traits::GlobalSshApi;

/// Account key pair used to sign requests
#[derive(Clone)]
pub struct Credentials {
    public_key: String,
    private_key: String,
}

impl Credentials {
    pub fn new(public_key: impl Into<String>, private_key: impl Into<String>) -> Self {
        Self {
            public_key: public_key.into(),
            private_key: private_key.into(),
        }
    }

    #[must_use]
    pub fn public_key(&self) -> &str {
        &self.public_key
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("public_key", &self.public_key)
            .field("private_key", &"<redacted>")
            .finish()
    }
}

/// HTTP client for the GlobalSSH API
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: Url,
    credentials: Credentials,
}

impl HttpClient {
    /// Create a new HTTP client with a per-request timeout
    ///
    /// # Errors
    /// Returns an error if the base URL is invalid or the underlying
    /// `reqwest::Client` cannot be built.
    pub fn new(
        base_url: impl AsRef<str>,
        credentials: Credentials,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Self::with_client(base_url, credentials, client)
    }

    /// Create a new HTTP client with custom `reqwest::Client`
    ///
    /// # Errors
    /// Returns an error if the base URL is invalid.
    pub fn with_client(
        base_url: impl AsRef<str>,
        credentials: Credentials,
        client: Client,
    ) -> Result<Self> {
        let base_url = Url::parse(base_url.as_ref())?;
        Ok(Self {
            client,
            base_url,
            credentials,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Flatten a request into string parameters and sign them
    fn signed_params<R: ApiRequest>(&self, request: &R) -> Result<BTreeMap<String, String>> {
        let Value::Object(fields) = serde_json::to_value(request)? else {
            return Err(ClientError::InvalidRequest(format!(
                "{} did not serialize to an object",
                R::ACTION
            )));
        };

        let mut params = BTreeMap::new();
        for (key, value) in fields {
            let value = match value {
                Value::Null => continue,
                Value::String(s) => s,
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                Value::Array(_) | Value::Object(_) => {
                    return Err(ClientError::InvalidRequest(format!(
                        "{}: field {key} is not a scalar",
                        R::ACTION
                    )));
                }
            };
            params.insert(key, value);
        }
        params.insert("Action".to_string(), R::ACTION.to_string());
        params.insert(
            "PublicKey".to_string(),
            self.credentials.public_key.clone(),
        );

        let signature = sign(&params, &self.credentials.private_key);
        params.insert("Signature".to_string(), signature);
        Ok(params)
    }

    /// Sign a request, POST it, and decode the JSON response
    #[instrument(skip_all, fields(action = R::ACTION), level = "debug")]
    async fn call<R, T>(&self, request: &R) -> Result<T>
    where
        R: ApiRequest + Sync,
        T: DeserializeOwned,
    {
        let params = self.signed_params(request)?;
        debug!(url = %self.base_url, "dispatching request");

        let response = self
            .client
            .post(self.base_url.clone())
            .json(&params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ClientError::Timeout
                } else {
                    ClientError::Http(e)
                }
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(ClientError::Api { status, message });
        }

        let body = response.text().await?;
        debug!(bytes = body.len(), "response received");
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl GlobalSshApi for HttpClient {
    async fn describe_instances(
        &self,
        request: &DescribeInstancesRequest,
    ) -> Result<DescribeInstancesResponse> {
        self.call(request).await
    }

    async fn create_instance(
        &self,
        request: &CreateInstanceRequest,
    ) -> Result<CreateInstanceResponse> {
        self.call(request).await
    }

    async fn delete_instance(&self, request: &DeleteInstanceRequest) -> Result<StatusResponse> {
        self.call(request).await
    }

    async fn modify_port(&self, request: &ModifyPortRequest) -> Result<StatusResponse> {
        self.call(request).await
    }

    async fn modify_remark(&self, request: &ModifyRemarkRequest) -> Result<StatusResponse> {
        self.call(request).await
    }
}
