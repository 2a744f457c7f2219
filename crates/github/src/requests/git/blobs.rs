use crate::{requests::send_json, Error, ProjectPath};
use futures_util::future::LocalBoxFuture;
use serde::Deserialize;

impl crate::GithubClient {
	/// Uploads file content as a blob, returning the blob's sha.
	pub fn create_blob(&self, project: &ProjectPath, content: &[u8]) -> LocalBoxFuture<'static, Result<String, Error>> {
		use base64ct::{Base64, Encoding};
		use serde_json::json;

		// https://docs.github.com/en/rest/git/blobs?apiVersion=2022-11-28#create-a-blob
		let builder = self.rest(reqwest::Method::POST, self.project_url(project, "git/blobs"), None);
		let builder = builder.json(&json!({
			"encoding": "base64",
			"content": Base64::encode_string(content),
		}));
		Box::pin(async move {
			#[derive(Deserialize)]
			struct Blob {
				sha: String,
			}
			let blob = send_json::<Blob>(builder).await?;
			Ok(blob.sha)
		})
	}
}
