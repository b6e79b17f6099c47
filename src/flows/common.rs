//! Shared helpers for flow implementations (request assembly, dispatch, status checks, JSON
//! decoding).

// crates.io
use http::{Method, StatusCode, header::HeaderName};
use serde::de::DeserializeOwned;
// self
use crate::{
	_prelude::*,
	error::TransportError,
	flows::Resolver,
	http::{self as transport, HttpRequest, HttpResponse, HttpTransport, Upstream},
	obs,
};

impl<C> Resolver<C>
where
	C: ?Sized + HttpTransport,
{
	/// Dispatches `request` once, classifying transport failures against `upstream`.
	pub(crate) async fn send(
		&self,
		upstream: Upstream,
		request: HttpRequest,
	) -> Result<HttpResponse> {
		self.http_client
			.execute(request)
			.await
			.map_err(|err| TransportError::network(upstream, err).into())
	}
}

/// Assembles a request for `upstream`, attributing builder failures to it.
pub(crate) fn request<'a>(
	upstream: Upstream,
	method: Method,
	url: &Url,
	headers: impl IntoIterator<Item = (HeaderName, &'a str)>,
	body: Vec<u8>,
) -> Result<HttpRequest> {
	transport::build_request(method, url, headers, body)
		.map_err(|source| TransportError::Request { upstream, source }.into())
}

/// Rejects every status other than 200, ignoring the body.
pub(crate) fn ensure_ok(upstream: Upstream, response: &HttpResponse) -> Result<()> {
	let status = response.status();

	obs::record_upstream_status(upstream, status.as_u16());

	if status == StatusCode::OK {
		Ok(())
	} else {
		Err(Error::UpstreamStatus { upstream, status: status.as_u16() })
	}
}

/// Decodes a JSON body, keeping the path of the first offending field.
pub(crate) fn decode<T>(upstream: Upstream, body: &[u8]) -> Result<T>
where
	T: DeserializeOwned,
{
	let mut deserializer = serde_json::Deserializer::from_slice(body);

	serde_path_to_error::deserialize(&mut deserializer)
		.map_err(|source| Error::Decode { upstream, source })
}
