//! REST client for the subset of the GitHub v3 api used by github-x.
//! Loosely modeled after https://github.com/XAMPPRocky/octocrab.

mod error;
pub use error::*;
mod api_url;
pub use api_url::*;
mod identifier;
pub use identifier::*;
mod requests;
pub use requests::*;
mod commit;
pub use commit::*;

pub(crate) static API_VERSION: &'static str = "2022-11-28";

pub struct ClientSettings {
	pub url: ApiUrl,
	pub access_token: String,
	pub user_agent: String,
}

#[derive(Clone)]
pub struct GithubClient {
	pub(crate) client: reqwest::Client,
	pub(crate) url: ApiUrl,
	pub(crate) auth_header: String,
}

impl GithubClient {
	pub fn new(settings: ClientSettings) -> Result<Self, Error> {
		use reqwest::header::{HeaderValue, AUTHORIZATION, USER_AGENT};
		let ClientSettings {
			url,
			access_token,
			user_agent,
		} = settings;
		let auth_header = format!("token {access_token}");
		let header_value = |value: &str| {
			// never echo the token back in the error
			HeaderValue::from_str(value).map_err(|_| Error::InvalidHeader(format!("{} characters", value.len())))
		};
		let mut client = reqwest::Client::builder();
		client = client.default_headers({
			let auth = (AUTHORIZATION, header_value(&auth_header)?);
			let agent = (USER_AGENT, header_value(&user_agent)?);
			[agent, auth].into_iter().collect()
		});
		let client = client.build()?;
		Ok(Self {
			client,
			url,
			auth_header,
		})
	}

	pub fn url(&self) -> &ApiUrl {
		&self.url
	}

	pub(crate) fn project_url(&self, project: &ProjectPath, path: &str) -> String {
		match path.is_empty() {
			true => self.url.join(project.api_path()),
			false => self.url.join(format!("{}/{}", project.api_path(), path)),
		}
	}

	/// Creates a request builder for `url` with the rest headers in place.
	pub(crate) fn rest(
		&self,
		method: reqwest::Method,
		url: String,
		media_type: Option<&'static str>,
	) -> reqwest::RequestBuilder {
		log::debug!(target: "github", "{method} > {url}");
		let builder = self.client.request(method, url);
		self.insert_rest_headers(builder, media_type)
	}

	pub(crate) fn insert_rest_headers(
		&self,
		builder: reqwest::RequestBuilder,
		media_type: Option<&'static str>,
	) -> reqwest::RequestBuilder {
		use reqwest::header::*;
		let accept = match media_type {
			None => format!("application/vnd.github+json"),
			Some(media) => format!("application/vnd.github.{media}+json"),
		};
		let builder = builder.header(ACCEPT, accept);
		let builder = builder.header(AUTHORIZATION, self.auth_header.clone());
		let builder = builder.header("X-Github-Api-Version", API_VERSION);
		builder
	}
}

/// Trims surrounding slashes and percent-encodes each segment of a path within a repository.
pub(crate) fn encode_file_path(path: &str) -> String {
	use itertools::Itertools;
	path.trim_matches('/')
		.split('/')
		.filter(|segment| !segment.is_empty())
		.map(|segment| urlencoding::encode(segment))
		.join("/")
}
