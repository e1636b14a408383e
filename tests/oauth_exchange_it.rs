#![cfg(feature = "reqwest")]

// crates.io
use httpmock::prelude::*;
use serde_json::json;
// self
use pinterest_api::{_preludet::*, client::Paging, config::ClientConfig, error::ApiError};

const API_KEY: &str = "client-it";
const API_SECRET: &str = "secret-it";
const CALLBACK: &str = "https://app.example.com/callback";

fn config() -> ClientConfig {
	ClientConfig::new(API_KEY).with_api_secret(API_SECRET).with_callback_url(CALLBACK)
}

#[tokio::test]
async fn authorization_url_points_at_the_configured_endpoint() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client(config(), &server.base_url());
	let url = client
		.build_authorization_url(["basic", "comments"])
		.expect("Authorization URL should build.");
	let pairs = url.query_pairs().into_owned().collect::<Vec<_>>();

	assert_eq!(url.path(), "/oauth");
	assert_eq!(
		pairs,
		vec![
			("client_id".to_owned(), API_KEY.to_owned()),
			("redirect_uri".to_owned(), CALLBACK.to_owned()),
			("scope".to_owned(), "basic comments".to_owned()),
			("response_type".to_owned(), "code".to_owned()),
		]
	);
	assert!(url.as_str().contains("scope=basic+comments"));
}

#[tokio::test]
async fn exchange_returns_the_full_response() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client(config(), &server.base_url());
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/oauth/access_token")
				.header("content-type", "application/x-www-form-urlencoded")
				.body(
					"grant_type=authorization_code&client_id=client-it&client_secret=secret-it&redirect_uri=https%3A%2F%2Fapp.example.com%2Fcallback&code=CODE",
				);
			then.status(200)
				.header("content-type", "application/json")
				.json_body(json!({"access_token": "TOK3", "user": {"id": "u-1"}}));
		})
		.await;
	let response =
		client.exchange_code_for_token("CODE").await.expect("Code exchange should succeed.");

	mock.assert_async().await;

	assert_eq!(response.access_token.expose(), "TOK3");
	assert_eq!(response.field("user"), Some(&json!({"id": "u-1"})));
	assert_eq!(response.to_value(), json!({"access_token": "TOK3", "user": {"id": "u-1"}}));
}

#[tokio::test]
async fn exchange_can_return_only_the_token() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client(config(), &server.base_url());
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/oauth/access_token");
			then.status(200).json_body(json!({"access_token": "TOK3"}));
		})
		.await;
	let token = client
		.exchange_code_for_access_token("CODE")
		.await
		.expect("Code exchange should succeed.");

	mock.assert_async().await;

	assert_eq!(token.expose(), "TOK3");
}

#[tokio::test]
async fn exchanged_token_authorizes_later_calls() {
	let server = MockServer::start_async().await;
	let mut client = build_reqwest_test_client(config(), &server.base_url());
	let token_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/oauth/access_token");
			then.status(200).json_body(json!({"access_token": "TOK4", "scope": "basic"}));
		})
		.await;
	let response =
		client.exchange_code_for_token("CODE").await.expect("Code exchange should succeed.");

	client.set_access_token(response);

	let feed_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/v2/all/").query_param("access_token", "TOK4");
			then.status(200).json_body(json!({"pins": [1]}));
		})
		.await;
	let value = client.get_all(Paging::default()).await.expect("Feed call should succeed.");

	token_mock.assert_async().await;
	feed_mock.assert_async().await;

	assert_eq!(value, json!({"pins": [1]}));
}

#[tokio::test]
async fn exchange_surfaces_oauth_error_payloads() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client(config(), &server.base_url());
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/oauth/access_token");
			then.status(400)
				.header("content-type", "application/json")
				.json_body(json!({"error": "invalid_grant"}));
		})
		.await;
	let err = client
		.exchange_code_for_token("stale-code")
		.await
		.expect_err("Rejected exchanges must fail.");

	mock.assert_async().await;

	match err {
		Error::Api(ApiError::Rejected { status, body, .. }) => {
			assert_eq!(status, 400);
			assert_eq!(body, json!({"error": "invalid_grant"}));
		},
		other => panic!("Unexpected error variant: {other:?}."),
	}
}

#[tokio::test]
async fn exchange_without_access_token_field_is_an_api_error() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client(config(), &server.base_url());
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/oauth/access_token");
			then.status(200).json_body(json!({"message": "ok"}));
		})
		.await;
	let err = client
		.exchange_code_for_access_token("CODE")
		.await
		.expect_err("Payloads without access_token must fail.");

	mock.assert_async().await;

	assert!(matches!(err, Error::Api(ApiError::TokenResponse { .. })));
}

#[tokio::test]
async fn exchange_with_non_json_body_is_an_api_error() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client(config(), &server.base_url());
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/oauth/access_token");
			then.status(200).body("access_token=TOK5");
		})
		.await;
	let err = client
		.exchange_code_for_token("CODE")
		.await
		.expect_err("Form-encoded token bodies must not decode.");

	mock.assert_async().await;

	assert!(matches!(err, Error::Api(ApiError::Decode { .. })));
}

#[tokio::test]
async fn exchange_never_follows_redirects() {
	let server = MockServer::start_async().await;
	let elsewhere = MockServer::start_async().await;
	let client = build_reqwest_test_client(config(), &server.base_url());
	let redirect_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/oauth/access_token");
			then.status(307).header("location", elsewhere.url("/collect"));
		})
		.await;
	let collect_mock = elsewhere
		.mock_async(|when, then| {
			when.path("/collect");
			then.status(200).json_body(json!({"access_token": "FROM-REDIRECT"}));
		})
		.await;
	let err = client
		.exchange_code_for_access_token("CODE")
		.await
		.expect_err("Redirected token exchanges must fail.");

	redirect_mock.assert_async().await;
	collect_mock.assert_calls_async(0).await;

	assert!(matches!(err, Error::Api(ApiError::Rejected { status: 307, .. })), "{err:?}");
}
