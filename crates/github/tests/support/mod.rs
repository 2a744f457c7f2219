#![allow(dead_code)]

use github::{ApiUrl, ClientSettings, GithubClient};
pub use mock_api::{MockServer, MockServerBuilder};

pub trait MockClient {
	/// A client pointed at the mock, authenticated as `s3cr3t`.
	fn client(&self) -> GithubClient;
}

impl MockClient for MockServer {
	fn client(&self) -> GithubClient {
		GithubClient::new(ClientSettings {
			url: ApiUrl::parse(&self.url, true).expect("mock url"),
			access_token: "s3cr3t".into(),
			user_agent: "github-x/tests".into(),
		})
		.expect("client")
	}
}
