//! HTTP client for the Novu API.

use std::sync::Arc;

use serde::Serialize;

use crate::{
    codec::{encode_typed, Codec, JsonCodec},
    config::ClientConfig,
    endpoint::{BodyRule, Endpoint, RequestDescriptor},
    errors::TransportError,
    transport::{HttpRequest, ReqwestTransport, Transport},
    types::Envelope,
    Error,
};

/// HTTP client for the Novu API.
///
/// Holds immutable configuration plus shared transport and codec handles, so
/// it is cheap to clone and safe to use from many tasks at once. Every call
/// is one request/response cycle; nothing is retried or cached.
#[derive(Clone)]
pub struct Client {
    config: Arc<ClientConfig>,
    transport: Arc<dyn Transport>,
    codec: Arc<dyn Codec>,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Creates a new client pointing at the production Novu API.
    pub fn new(api_key: &str) -> Result<Self, Error> {
        Self::from_config(ClientConfig::new(api_key))
    }

    /// Creates a new client with a custom base URL. Used for self-hosted
    /// deployments and for testing with wiremock.
    pub fn with_base_url(api_key: &str, base_url: &str) -> Result<Self, Error> {
        Self::from_config(ClientConfig::new(api_key).with_base_url(base_url))
    }

    /// Creates a client from `NOVU_*` environment variables.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_config(ClientConfig::from_env()?)
    }

    /// Creates a client using the default reqwest transport and JSON codec.
    ///
    /// A transport that cannot be built (e.g. no usable TLS backend) is a
    /// configuration failure, not a retryable transport error.
    pub fn from_config(config: ClientConfig) -> Result<Self, Error> {
        let transport = ReqwestTransport::new(config.timeout()).map_err(transport_setup_failed)?;
        Self::from_parts(config, transport, JsonCodec)
    }

    /// Creates a client with a caller-supplied transport and codec.
    pub fn from_parts(
        config: ClientConfig,
        transport: impl Transport + 'static,
        codec: impl Codec + 'static,
    ) -> Result<Self, Error> {
        config.validate()?;
        Ok(Self {
            config: Arc::new(config),
            transport: Arc::new(transport),
            codec: Arc::new(codec),
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn headers(&self) -> Vec<(String, String)> {
        let content_type = self.codec.content_type().to_string();
        let mut headers = vec![
            (
                "authorization".to_string(),
                format!("ApiKey {}", self.config.api_key()),
            ),
            ("content-type".to_string(), content_type.clone()),
            ("accept".to_string(), content_type),
        ];
        headers.extend(self.config.default_headers().iter().cloned());
        headers
    }

    /// Dispatches one call to `endpoint` and decodes its envelope.
    ///
    /// Path placeholders and the body rule are checked before anything is
    /// sent. Non-2xx responses become [`Error::Server`]; 2xx responses that
    /// do not match `R` become [`Error::Decode`].
    pub async fn execute<B, R>(
        &self,
        endpoint: &Endpoint<B, R>,
        request: RequestDescriptor<'_, B>,
    ) -> Result<R, Error>
    where
        B: Serialize + Sync,
        R: Envelope,
    {
        let url = endpoint.resolve_url(self.config.base_url(), &request.path, &request.query)?;

        let body = match (endpoint.body_rule(), request.body) {
            (BodyRule::Required, Some(body)) => {
                Some(encode_typed(self.codec.as_ref(), body).map_err(|e| {
                    Error::Configuration(format!(
                        "{}: failed to encode request body: {}",
                        endpoint.name(),
                        e
                    ))
                })?)
            }
            (BodyRule::Required, None) => {
                return Err(Error::Configuration(format!(
                    "{}: a request body is required",
                    endpoint.name()
                )))
            }
            (BodyRule::None, Some(_)) => {
                return Err(Error::Configuration(format!(
                    "{}: this endpoint does not take a request body",
                    endpoint.name()
                )))
            }
            (BodyRule::None, None) => None,
        };

        tracing::debug!(
            endpoint = endpoint.name(),
            method = %endpoint.method(),
            url = %url,
            "sending request"
        );

        let response = self
            .transport
            .send(HttpRequest {
                method: endpoint.method(),
                url,
                headers: self.headers(),
                body,
            })
            .await
            .map_err(|e| {
                tracing::warn!("{} request failed: {}", endpoint.name(), e);
                Error::from(e)
            })?;

        if !response.is_success() {
            tracing::error!(
                "{} failed with status {}: {}",
                endpoint.name(),
                response.status,
                truncate_body(&response.body)
            );
            return Err(Error::from_server_response(
                response.status,
                &response.body,
                self.codec.as_ref(),
            ));
        }

        R::decode(&response, self.codec.as_ref()).map_err(|e| {
            tracing::error!(
                "Failed to decode {} response: {} | body: {}",
                endpoint.name(),
                e,
                truncate_body(&response.body)
            );
            e
        })
    }
}

fn transport_setup_failed(e: TransportError) -> Error {
    Error::Configuration(format!("failed to build HTTP transport: {}", e.message))
}

fn truncate_body(body: &[u8]) -> String {
    const MAX: usize = 2000;
    let text = String::from_utf8_lossy(body);
    if text.chars().count() <= MAX {
        text.into_owned()
    } else {
        format!("{}...[truncated]", text.chars().take(MAX).collect::<String>())
    }
}
