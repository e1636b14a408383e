//! The generic request primitive shared by every resource method.

// crates.io
use oauth2::{
	AsyncHttpClient, HttpRequest,
	http::{
		Request,
		header::{ACCEPT, CONTENT_TYPE},
	},
};
// self
use crate::{
	_prelude::*,
	client::{ApiMethod, Params, PinterestClient},
	error::ConfigError,
	http::ApiHttpClient,
	obs::{self, CallKind, CallTarget},
	transport::{self, TransportErrorMapper},
};

pub(crate) const JSON_CONTENT_TYPE: &str = "application/json";
pub(crate) const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

impl<C, M> PinterestClient<C, M>
where
	C: ?Sized + ApiHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Calls a resource path and decodes the JSON response.
	///
	/// Public calls (`requires_auth == false`) are authorized with `client_id=<api key>`;
	/// authenticated calls with `access_token=<token>` and fail with
	/// [`Error::Unauthenticated`] before any I/O when no token is set. See
	/// [`build_request`](Self::build_request) for how `params` are placed per method.
	pub async fn call(
		&self,
		path: &str,
		requires_auth: bool,
		params: &Params,
		method: ApiMethod,
	) -> Result<Value> {
		let target = CallTarget::resource(method, path, requires_auth);
		let span = obs::start(&target);
		let result = span
			.instrument(async move {
				let request = self.build_request(path, requires_auth, params, method)?;

				self.send(CallKind::Resource, request).await
			})
			.await;

		obs::finish(&span, &target, &result);

		result
	}

	/// Builds the HTTP request [`call`](Self::call) would send, without sending it.
	///
	/// The auth parameter is always the first query pair. `GET` appends `params` to the query,
	/// `POST` form-encodes them into the body, and `DELETE` sends no body.
	pub fn build_request(
		&self,
		path: &str,
		requires_auth: bool,
		params: &Params,
		method: ApiMethod,
	) -> Result<HttpRequest> {
		let (auth_key, auth_value) = self.auth_param(path, requires_auth)?;
		let mut url = self.endpoints.resource_url(path);
		let mut pairs = url.query_pairs_mut();

		pairs.append_pair(auth_key, auth_value);

		if method == ApiMethod::Get {
			pairs.extend_pairs(params.iter());
		}

		drop(pairs);

		let builder = Request::builder()
			.method(method.as_http())
			.uri(url.as_str())
			.header(ACCEPT, JSON_CONTENT_TYPE);
		let request = match method {
			ApiMethod::Post =>
				builder.header(CONTENT_TYPE, FORM_CONTENT_TYPE).body(params.to_form().into_bytes()),
			ApiMethod::Get | ApiMethod::Delete => builder.body(Vec::new()),
		}
		.map_err(ConfigError::from)?;

		Ok(request)
	}

	/// Sends a prepared request and decodes the response.
	pub(crate) async fn send(&self, kind: CallKind, request: HttpRequest) -> Result<Value> {
		let handle = self.http_client.handle();
		let response = handle
			.call(request)
			.await
			.map_err(|err| self.transport_mapper.map_transport_error(kind, err))?;

		Ok(transport::decode_response(response)?)
	}

	fn auth_param(&self, path: &str, requires_auth: bool) -> Result<(&'static str, &str)> {
		if !requires_auth {
			return Ok(("client_id", self.config.api_key.as_str()));
		}

		match self.access_token.as_ref() {
			Some(token) => Ok(("access_token", token.expose())),
			None => Err(Error::Unauthenticated { resource: path.to_owned() }),
		}
	}
}
