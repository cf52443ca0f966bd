//! HTTP client contract.

use url::Url;

use crate::error_handling::TransportError;

/// Raw outcome of a completed HTTP exchange.
///
/// Lives only for a single request cycle: produced by the client and handed
/// straight to the mapper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// Response body bytes, undecoded
    pub body: Vec<u8>,
    /// HTTP status code
    pub status: u16,
}

/// Either a completed exchange or the reason it could not complete.
pub type HttpClientResult = Result<TransportResponse, TransportError>;

/// Callback receiving the outcome of one `HttpClient::get` call.
pub type HttpClientCompletion = Box<dyn FnOnce(HttpClientResult) + Send + 'static>;

/// Transport used by `RemoteFeedLoader`.
///
/// Implementations must invoke `completion` exactly once per `get` call. It may
/// run on any thread, either before or after `get` returns. Retry and timeout
/// policy belong to the implementation, not to this contract.
pub trait HttpClient: Send + Sync {
    /// Issues a GET request for `url` and reports the outcome to `completion`.
    fn get(&self, url: &Url, completion: HttpClientCompletion);
}
