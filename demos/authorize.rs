//! Demonstrates the OAuth round trip against a local mock of the Pinterest API: build the login
//! URL, exchange the returned code, then call an authenticated resource with the issued token.

// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
use url::Url;
// self
use pinterest_api::{
	auth::Scope,
	client::{Paging, Params, ReqwestPinterestClient},
	config::ClientConfig,
	endpoint::ApiEndpoints,
	http::ReqwestHttpClient,
	transport::ReqwestTransportErrorMapper,
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let token_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/oauth/access_token");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"access_token\":\"demo-access\",\"token_type\":\"bearer\"}");
		})
		.await;
	let feed_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/v2/all/").query_param("access_token", "demo-access");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"pins\":[{\"id\":1,\"description\":\"red shoes\"}]}");
		})
		.await;
	let boards_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/v2/boards/").query_param("client_id", "demo-client");
			then.status(200).header("content-type", "application/json").body("{\"boards\":[]}");
		})
		.await;
	let endpoints = ApiEndpoints::builder()
		.api(Url::parse(&server.url("/v2/"))?)
		.authorization(Url::parse(&server.url("/oauth"))?)
		.token(Url::parse(&server.url("/oauth/access_token"))?)
		.build()?;
	let config = ClientConfig::new("demo-client")
		.with_api_secret("demo-secret")
		.with_callback_url("https://app.example.com/pinterest/callback");
	let mut client = ReqwestPinterestClient::with_http_client(
		config,
		endpoints,
		ReqwestHttpClient::new()?,
		ReqwestTransportErrorMapper,
	)?;
	let login_url = client.build_authorization_url([Scope::Basic, Scope::Likes])?;

	println!("Send the user to: {login_url}");

	let boards = client.get_boards(&Params::new()).await?;

	println!("Public boards: {boards}");

	let response = client.exchange_code_for_token("demo-code").await?;

	println!("Token type: {:?}", response.field("token_type"));

	client.set_access_token(response);

	let feed = client.get_all(Paging::new(10, 0)).await?;

	println!("Feed: {feed}");

	token_mock.assert_async().await;
	feed_mock.assert_async().await;
	boards_mock.assert_async().await;

	Ok(())
}
