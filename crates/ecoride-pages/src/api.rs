//! REST API client.
//!
//! Page controllers and the sign-in flow talk to the EcoRide API through
//! [`ApiClient`]. Endpoints are joined below the configured base URL and the
//! session token travels in a dedicated header (`X-AUTH-TOKEN` by default).

use ecoride_conf::SiteSettings;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

/// Error returned by API calls
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
	#[error("HTTP error: {0}")]
	Http(#[from] reqwest::Error),

	#[error("Invalid API URL: {0}")]
	Url(#[from] url::ParseError),

	/// The API answered with a non-2xx status
	#[error("API returned HTTP {status}: {body}")]
	Status { status: u16, body: String },
}

/// Login form payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
	pub username: String,
	pub password: String,
}

impl Credentials {
	pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
		Self {
			username: username.into(),
			password: password.into(),
		}
	}
}

/// Answer to a successful login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignInResponse {
	pub user: String,
	#[serde(rename = "apiToken")]
	pub api_token: String,
	#[serde(default)]
	pub roles: Vec<String>,
}

/// Profile of the signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
	pub email: String,
	#[serde(default)]
	pub pseudo: Option<String>,
	#[serde(default)]
	pub roles: Vec<String>,
	#[serde(default)]
	pub credits: Option<i64>,
}

/// Client for the EcoRide REST API
#[derive(Debug, Clone)]
pub struct ApiClient {
	base: Url,
	token_header: String,
	http: Client,
}

impl ApiClient {
	/// Creates a client from the site settings
	pub fn new(settings: &SiteSettings) -> Result<Self, ApiError> {
		Ok(Self::with_base(
			Url::parse(&settings.api_base_url)?,
			settings.session.api_token_header.clone(),
		))
	}

	/// Creates a client for an explicit base URL
	pub fn with_base(base: Url, token_header: impl Into<String>) -> Self {
		Self {
			base,
			token_header: token_header.into(),
			http: Client::new(),
		}
	}

	pub fn base(&self) -> &Url {
		&self.base
	}

	/// Absolute URL of `path`, relative to the base
	pub fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
		Ok(self.base.join(path.trim_start_matches('/'))?)
	}

	/// Starts a request to `path`, attaching `token` when present
	pub fn request(
		&self,
		method: Method,
		path: &str,
		token: Option<&str>,
	) -> Result<RequestBuilder, ApiError> {
		let mut builder = self.http.request(method, self.endpoint(path)?);
		if let Some(token) = token {
			builder = builder.header(self.token_header.as_str(), token);
		}
		Ok(builder)
	}

	/// GETs `path` and decodes the JSON body
	pub async fn get_json<T: DeserializeOwned>(
		&self,
		path: &str,
		token: Option<&str>,
	) -> Result<T, ApiError> {
		let response = self.request(Method::GET, path, token)?.send().await?;
		decode(response).await
	}

	/// POSTs `body` as JSON to `path` and decodes the JSON answer
	pub async fn post_json<B, T>(&self, path: &str, body: &B, token: Option<&str>) -> Result<T, ApiError>
	where
		B: Serialize + ?Sized,
		T: DeserializeOwned,
	{
		let response = self
			.request(Method::POST, path, token)?
			.json(body)
			.send()
			.await?;
		decode(response).await
	}

	/// `POST login`
	pub async fn sign_in(&self, credentials: &Credentials) -> Result<SignInResponse, ApiError> {
		self.post_json("login", credentials, None).await
	}

	/// `GET account/me`
	pub async fn account(&self, token: &str) -> Result<Account, ApiError> {
		self.get_json("account/me", Some(token)).await
	}
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
	let status = response.status();
	if !status.is_success() {
		let body = response.text().await.unwrap_or_default();
		return Err(ApiError::Status {
			status: status.as_u16(),
			body,
		});
	}
	Ok(response.json().await?)
}
