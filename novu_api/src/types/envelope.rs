//! Response envelopes: the wrapper shapes the API puts around payloads, and
//! the [`Envelope`] trait that decodes each of them from a raw response.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

use crate::codec::{decode_typed, Codec};
use crate::errors::Error;
use crate::transport::HttpResponse;

/// Which wrapper an endpoint's success body uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeKind {
    /// The body is the payload itself.
    Bare,
    /// `{"data": T}`
    Single,
    /// `{"page", "pageSize", "totalCount", "hasMore", "data": [T]}`
    Paginated,
    /// `{"acknowledged": bool}` or no body at all.
    Acknowledgement,
}

/// A response shape the client knows how to decode.
pub trait Envelope: Sized {
    const KIND: EnvelopeKind;

    /// Decodes a success (2xx) response.
    fn decode(response: &HttpResponse, codec: &dyn Codec) -> Result<Self, Error>;
}

/// Single-resource envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response<T> {
    pub data: T,
}

impl<T> Response<T> {
    pub fn into_inner(self) -> T {
        self.data
    }
}

/// Paginated list envelope.
///
/// `page` and `page_size` fall back to 1 and 10 when the server omits them.
/// `has_more` is whatever the server reported; the client never derives it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<u64>,
    #[serde(default = "default_page_size")]
    pub page_size: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_more: Option<bool>,
    pub data: Vec<T>,
}

fn default_page() -> u64 {
    1
}

fn default_page_size() -> u64 {
    10
}

impl<T> PaginatedResponse<T> {
    /// Page number to request next, if the server said there is one.
    pub fn next_page(&self) -> Option<u64> {
        match self.has_more {
            Some(true) => Some(self.page + 1),
            _ => None,
        }
    }
}

/// Result of operations that only signal success.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acknowledgement {
    pub acknowledged: bool,
}

/// Unwrapped payload for the few endpoints that return it without `data`.
#[derive(Debug, Clone, PartialEq)]
pub struct Bare<T>(pub T);

impl<T> Bare<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

fn decode_body<T: DeserializeOwned>(response: &HttpResponse, codec: &dyn Codec) -> Result<T, Error> {
    if response.is_empty() {
        return Err(Error::decode(
            response.status,
            "expected a response body but the server sent none",
            &response.body,
        ));
    }
    decode_typed(codec, &response.body).map_err(|e| Error::decode(response.status, e.0, &response.body))
}

impl<T: DeserializeOwned> Envelope for Response<T> {
    const KIND: EnvelopeKind = EnvelopeKind::Single;

    fn decode(response: &HttpResponse, codec: &dyn Codec) -> Result<Self, Error> {
        decode_body(response, codec)
    }
}

impl<T: DeserializeOwned> Envelope for PaginatedResponse<T> {
    const KIND: EnvelopeKind = EnvelopeKind::Paginated;

    fn decode(response: &HttpResponse, codec: &dyn Codec) -> Result<Self, Error> {
        decode_body(response, codec)
    }
}

impl<T: DeserializeOwned> Envelope for Bare<T> {
    const KIND: EnvelopeKind = EnvelopeKind::Bare;

    fn decode(response: &HttpResponse, codec: &dyn Codec) -> Result<Self, Error> {
        decode_body(response, codec).map(Bare)
    }
}

impl Envelope for Acknowledgement {
    const KIND: EnvelopeKind = EnvelopeKind::Acknowledgement;

    fn decode(response: &HttpResponse, codec: &dyn Codec) -> Result<Self, Error> {
        if response.is_empty() {
            return Ok(Acknowledgement { acknowledged: true });
        }
        let value = codec
            .decode(&response.body)
            .map_err(|e| Error::decode(response.status, e.0, &response.body))?;
        match value.get("acknowledged").and_then(Value::as_bool) {
            Some(acknowledged) => Ok(Acknowledgement { acknowledged }),
            None => Err(Error::decode(
                response.status,
                "missing boolean field `acknowledged`",
                &response.body,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::JsonCodec;

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.as_bytes().to_vec(),
        }
    }

    #[test]
    fn single_envelope_yields_data() {
        let resp: Response<Vec<String>> =
            Envelope::decode(&response(200, r#"{"data":["a","b"]}"#), &JsonCodec).unwrap();
        assert_eq!(resp.data, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn single_envelope_without_data_is_decode_error() {
        let err = <Response<bool> as Envelope>::decode(&response(200, r#"{"ok":true}"#), &JsonCodec)
            .unwrap_err();
        match err {
            Error::Decode { status, reason, body } => {
                assert_eq!(status, 200);
                assert!(reason.contains("data"));
                assert_eq!(body, r#"{"ok":true}"#);
            }
            other => panic!("expected decode error, got {other:?}"),
        }
    }

    #[test]
    fn single_envelope_rejects_no_content() {
        let err = <Response<bool> as Envelope>::decode(&response(204, ""), &JsonCodec).unwrap_err();
        assert!(matches!(err, Error::Decode { status: 204, .. }));
    }

    #[test]
    fn paginated_envelope_keeps_server_values() {
        let resp: PaginatedResponse<u32> = Envelope::decode(
            &response(
                200,
                r#"{"page":2,"totalCount":25,"pageSize":5,"hasMore":true,"data":[1,2,3]}"#,
            ),
            &JsonCodec,
        )
        .unwrap();
        assert_eq!(resp.page, 2);
        assert_eq!(resp.total_count, Some(25));
        assert_eq!(resp.page_size, 5);
        assert_eq!(resp.has_more, Some(true));
        assert_eq!(resp.data.len(), 3);
        assert_eq!(resp.next_page(), Some(3));
    }

    #[test]
    fn paginated_envelope_defaults() {
        let resp: PaginatedResponse<u32> =
            Envelope::decode(&response(200, r#"{"data":[]}"#), &JsonCodec).unwrap();
        assert_eq!(resp.page, 1);
        assert_eq!(resp.page_size, 10);
        assert_eq!(resp.total_count, None);
        assert_eq!(resp.has_more, None);
        assert_eq!(resp.next_page(), None);
        assert!(resp.data.is_empty());
    }

    #[test]
    fn paginated_envelope_requires_data() {
        let err = <PaginatedResponse<u32> as Envelope>::decode(
            &response(200, r#"{"page":1,"totalCount":0}"#),
            &JsonCodec,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
    }

    #[test]
    fn acknowledgement_from_empty_body() {
        let ack: Acknowledgement = Envelope::decode(&response(204, ""), &JsonCodec).unwrap();
        assert!(ack.acknowledged);
    }

    #[test]
    fn acknowledgement_body_is_used_verbatim() {
        let ack: Acknowledgement =
            Envelope::decode(&response(200, r#"{"acknowledged":false}"#), &JsonCodec).unwrap();
        assert!(!ack.acknowledged);
    }

    #[test]
    fn acknowledgement_rejects_unrelated_body() {
        let err = <Acknowledgement as Envelope>::decode(&response(200, r#"{"data":{}}"#), &JsonCodec)
            .unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));

        let err = <Acknowledgement as Envelope>::decode(&response(200, "OK"), &JsonCodec).unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
    }

    #[test]
    fn bare_envelope_is_unwrapped() {
        let value: Bare<Value> =
            Envelope::decode(&response(200, r#"{"topicKey":"k"}"#), &JsonCodec).unwrap();
        assert_eq!(value.into_inner()["topicKey"], "k");
    }

    #[test]
    fn envelope_kinds() {
        assert_eq!(<Response<u8> as Envelope>::KIND, EnvelopeKind::Single);
        assert_eq!(<PaginatedResponse<u8> as Envelope>::KIND, EnvelopeKind::Paginated);
        assert_eq!(<Acknowledgement as Envelope>::KIND, EnvelopeKind::Acknowledgement);
        assert_eq!(<Bare<u8> as Envelope>::KIND, EnvelopeKind::Bare);
    }
}
