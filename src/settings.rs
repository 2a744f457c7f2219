use crate::cli::Args;
use github::{ApiUrl, ClientSettings, GithubClient};

static APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
	#[error("no access token specified. Either set it as ENV variable 'GITHUB_AT' or pass it with [-t | --access-token]")]
	MissingAccessToken,
	#[error("no GitHub URL specified. Either set it as ENV variable 'GITHUB_URL' or pass it with [-u | --url]")]
	MissingUrl,
	#[error(transparent)]
	InvalidUrl(#[from] github::Error),
}

/// Everything an invocation needs to talk to the api, resolved from flags and environment.
#[derive(Clone)]
pub struct Settings {
	pub url: ApiUrl,
	pub access_token: String,
	pub force: bool,
	pub json: bool,
	pub git_ref: Option<String>,
}

impl Settings {
	/// Flags take precedence over `GITHUB_AT`/`GITHUB_URL` (clap resolves the fallback).
	/// Runs before any request is made.
	pub fn from_args(args: &Args) -> Result<Self, SettingsError> {
		let access_token = match &args.access_token {
			Some(token) if !token.is_empty() => token.clone(),
			_ => return Err(SettingsError::MissingAccessToken),
		};
		let url = match &args.url {
			Some(url) if !url.trim().is_empty() => ApiUrl::parse(url, args.insecure_http)?,
			_ => return Err(SettingsError::MissingUrl),
		};
		Ok(Self {
			url,
			access_token,
			force: args.force,
			json: args.json,
			git_ref: args.git_ref.clone(),
		})
	}

	pub fn client(&self) -> Result<GithubClient, github::Error> {
		GithubClient::new(ClientSettings {
			url: self.url.clone(),
			access_token: self.access_token.clone(),
			user_agent: APP_USER_AGENT.to_owned(),
		})
	}
}

impl std::fmt::Debug for Settings {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Settings")
			.field("url", &self.url.base())
			.field("access_token", &"<redacted>")
			.field("force", &self.force)
			.field("json", &self.json)
			.field("git_ref", &self.git_ref)
			.finish()
	}
}
