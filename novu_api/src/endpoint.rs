//! Table-driven endpoint definitions.
//!
//! Every remote operation is one [`Endpoint`] constant: a name for logs, the
//! HTTP method, a path template with `{name}` placeholders, and whether a
//! body is sent. The request body type `B` and the envelope `R` are part of
//! the constant's type, so the table stays strongly typed per entry while
//! dispatch is shared (see [`Client::execute`](crate::Client::execute)).

use std::marker::PhantomData;

use url::Url;

use crate::errors::Error;
use crate::query::QueryParams;
use crate::transport::HttpMethod;
use crate::types::{Envelope, EnvelopeKind};

/// Whether an endpoint carries a request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyRule {
    /// No body may be sent.
    None,
    /// A body must be supplied.
    Required,
}

/// One remote operation: body type `B`, response envelope `R`.
pub struct Endpoint<B, R> {
    name: &'static str,
    method: HttpMethod,
    path: &'static str,
    body: BodyRule,
    _types: PhantomData<fn(&B) -> R>,
}

impl<B, R> Endpoint<B, R> {
    pub const fn new(
        name: &'static str,
        method: HttpMethod,
        path: &'static str,
        body: BodyRule,
    ) -> Self {
        Self {
            name,
            method,
            path,
            body,
            _types: PhantomData,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    /// The unresolved path template, e.g. `/topics/{topicKey}`.
    pub fn path_template(&self) -> &'static str {
        self.path
    }

    pub fn body_rule(&self) -> BodyRule {
        self.body
    }

    pub fn envelope(&self) -> EnvelopeKind
    where
        R: Envelope,
    {
        R::KIND
    }

    /// Substitutes every `{name}` placeholder, in order of appearance, with
    /// its percent-encoded value from `params`.
    pub fn resolve_path(&self, params: &PathParams) -> Result<String, Error> {
        let mut resolved = String::with_capacity(self.path.len());
        let mut rest = self.path;

        while let Some(start) = rest.find('{') {
            resolved.push_str(&rest[..start]);
            let after = &rest[start + 1..];
            let end = after.find('}').ok_or_else(|| {
                Error::Configuration(format!(
                    "{}: unterminated placeholder in path template `{}`",
                    self.name, self.path
                ))
            })?;
            let name = &after[..end];
            let value = params.get(name).ok_or_else(|| {
                Error::Configuration(format!("{}: missing path parameter `{}`", self.name, name))
            })?;
            if value.is_empty() {
                return Err(Error::Configuration(format!(
                    "{}: path parameter `{}` is empty",
                    self.name, name
                )));
            }
            resolved.push_str(&urlencoding::encode(value));
            rest = &after[end + 1..];
        }
        resolved.push_str(rest);

        Ok(resolved)
    }

    /// Full request URL: base URL, resolved path, then the set query
    /// parameters in caller order.
    pub fn resolve_url(
        &self,
        base_url: &str,
        params: &PathParams,
        query: &QueryParams,
    ) -> Result<Url, Error> {
        let path = self.resolve_path(params)?;
        let url = Url::parse(&format!("{}{}", base_url.trim_end_matches('/'), path)).map_err(|e| {
            tracing::error!("Invalid URL constructed for {}: {}", self.name, e);
            Error::Configuration(format!("{}: invalid URL: {}", self.name, e))
        })?;
        Ok(query.add_to_url(&url))
    }
}

// Manual impls: deriving would put `Clone`/`Copy` bounds on `B` and `R`.
impl<B, R> Clone for Endpoint<B, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<B, R> Copy for Endpoint<B, R> {}

impl<B, R> std::fmt::Debug for Endpoint<B, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Endpoint")
            .field("name", &self.name)
            .field("method", &self.method)
            .field("path", &self.path)
            .field("body", &self.body)
            .finish()
    }
}

/// Values for an endpoint's path placeholders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathParams {
    values: Vec<(&'static str, String)>,
}

impl PathParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.values.push((name, value.into()));
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Everything a single call supplies on top of its [`Endpoint`].
#[derive(Debug)]
pub struct RequestDescriptor<'a, B> {
    pub path: PathParams,
    pub query: QueryParams,
    pub body: Option<&'a B>,
}

impl<'a, B> RequestDescriptor<'a, B> {
    pub fn new() -> Self {
        Self {
            path: PathParams::new(),
            query: QueryParams::new(),
            body: None,
        }
    }

    pub fn path(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.path = self.path.with(name, value);
        self
    }

    pub fn query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }

    pub fn body(mut self, body: &'a B) -> Self {
        self.body = Some(body);
        self
    }
}

impl<B> Default for RequestDescriptor<'_, B> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Acknowledgement, Response};

    const SUBSCRIBERS: Endpoint<(), Response<bool>> = Endpoint::new(
        "topic_subscriber",
        HttpMethod::Get,
        "/topics/{key}/subscribers/{subscriberId}",
        BodyRule::None,
    );

    #[test]
    fn resolves_placeholders_in_order() {
        let endpoint: Endpoint<(), Response<bool>> = Endpoint::new(
            "topic_subscribers",
            HttpMethod::Get,
            "/topics/{key}/subscribers",
            BodyRule::None,
        );
        let path = endpoint
            .resolve_path(&PathParams::new().with("key", "key"))
            .unwrap();
        assert_eq!(path, "/topics/key/subscribers");

        let path = SUBSCRIBERS
            .resolve_path(&PathParams::new().with("subscriberId", "s1").with("key", "k1"))
            .unwrap();
        assert_eq!(path, "/topics/k1/subscribers/s1");
    }

    #[test]
    fn missing_parameter_is_configuration_error() {
        let err = SUBSCRIBERS
            .resolve_path(&PathParams::new().with("key", "k1"))
            .unwrap_err();
        match err {
            Error::Configuration(message) => assert!(message.contains("subscriberId")),
            other => panic!("expected configuration error, got {other:?}"),
        }
    }

    #[test]
    fn empty_parameter_is_rejected() {
        let err = SUBSCRIBERS
            .resolve_path(&PathParams::new().with("key", "").with("subscriberId", "s"))
            .unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn unterminated_placeholder_is_rejected() {
        let endpoint: Endpoint<(), Acknowledgement> =
            Endpoint::new("broken", HttpMethod::Delete, "/layouts/{layoutId", BodyRule::None);
        let err = endpoint
            .resolve_path(&PathParams::new().with("layoutId", "x"))
            .unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn values_are_percent_encoded() {
        let path = SUBSCRIBERS
            .resolve_path(
                &PathParams::new()
                    .with("key", "a/b c")
                    .with("subscriberId", "user@example.com"),
            )
            .unwrap();
        assert_eq!(path, "/topics/a%2Fb%20c/subscribers/user%40example.com");
    }

    #[test]
    fn resolve_url_joins_base_and_query() {
        let query = QueryParams::new()
            .push("page", Some(1u64))
            .push::<u64>("pageSize", None);
        let url = SUBSCRIBERS
            .resolve_url(
                "https://api.novu.co/v1/",
                &PathParams::new().with("key", "k").with("subscriberId", "s"),
                &query,
            )
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.novu.co/v1/topics/k/subscribers/s?page=1"
        );
    }

    #[test]
    fn endpoint_metadata() {
        assert_eq!(SUBSCRIBERS.method(), HttpMethod::Get);
        assert_eq!(SUBSCRIBERS.body_rule(), BodyRule::None);
        assert_eq!(SUBSCRIBERS.envelope(), EnvelopeKind::Single);
        assert_eq!(
            SUBSCRIBERS.path_template(),
            "/topics/{key}/subscribers/{subscriberId}"
        );
    }
}
