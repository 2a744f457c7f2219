use super::get::{Args, ContentRequest};
use crate::{requests::send_exists, Error};
use futures_util::future::LocalBoxFuture;

impl crate::GithubClient {
	/// Checks if a file exists on a branch. A missing file is `Ok(false)`.
	pub fn file_exists(&self, args: Args<'_>) -> LocalBoxFuture<'static, Result<bool, Error>> {
		let request = ContentRequest::new(self, args);
		Box::pin(async move {
			let branch = request.branch().await?;
			let context = format!(
				"Error requesting file '{}' from branch '{branch}' for project identified by '{}'",
				request.path, request.project
			);
			let builder = request.client.rest(reqwest::Method::GET, request.url(&branch), None);
			send_exists(builder).await.map_err(|err| err.context(context))
		})
	}
}
