use crate::Error;
use futures_util::future::LocalBoxFuture;
use serde_json::Value;

impl crate::GithubClient {
	/// Requests the root document of the api.
	/// Used as a reachability and credential probe; `None` when the api answers with anything but 200.
	pub fn get_version(&self) -> LocalBoxFuture<'static, Result<Option<Value>, Error>> {
		// https://docs.github.com/en/rest/meta/meta?apiVersion=2022-11-28#github-api-root
		let builder = self.rest(reqwest::Method::GET, self.url.base().to_owned(), None);
		Box::pin(async move {
			let fetch = async move {
				let response = builder.send().await?;
				if response.status().as_u16() != 200 {
					log::debug!(target: "github", "api root responded with {}", response.status());
					return Ok::<_, Error>(None);
				}
				Ok(Some(response.json::<Value>().await?))
			};
			fetch.await.map_err(|err| err.context("Error retrieving API information."))
		})
	}
}
