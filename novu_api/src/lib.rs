pub mod api;
mod client;
mod codec;
mod config;
mod endpoint;
mod errors;
mod query;
mod transport;
pub mod types;
pub use self::client::Client;
pub use self::codec::{decode_typed, encode_typed, Codec, CodecError, JsonCodec};
pub use self::config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use self::endpoint::{BodyRule, Endpoint, PathParams, RequestDescriptor};
pub use self::errors::{Error, Result, TransportError, TransportErrorKind};
pub use self::query::{
    ChangeQuery, LayoutQuery, NotificationTemplateQuery, Query, QueryCommon, QueryParams,
    QueryValue, SortDirection, SubscriberQuery, TopicQuery,
};
pub use self::transport::{HttpMethod, HttpRequest, HttpResponse, ReqwestTransport, Transport};
