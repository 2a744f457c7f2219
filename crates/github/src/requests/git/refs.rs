use crate::{Error, ProjectPath};
use futures_util::future::LocalBoxFuture;
use serde::Deserialize;

pub struct Args<'a> {
	pub project: &'a ProjectPath,
	pub branch: &'a str,
	/// The commit the branch should point at.
	pub sha: &'a str,
	/// Allow moving the branch to a commit which does not descend from its current head.
	pub force: bool,
}

#[derive(thiserror::Error, Debug)]
pub enum RefError {
	#[error("Requested branch reference was not found.")]
	ResourceNotFound,
	#[error("Branch reference was changed concurrently.")]
	Conflict,
	#[error("Update is not a fast forward or failed validation.")]
	ValidationFailed,
	#[error("Unknown response code {0}")]
	Unknown(u16),
}
impl Into<Error> for RefError {
	fn into(self) -> Error {
		Error::InvalidResponse(std::sync::Arc::new(self.to_string()))
	}
}

impl crate::GithubClient {
	/// Moves `refs/heads/<branch>` to a new commit, returning the sha the reference now points at.
	pub fn update_ref(&self, args: Args<'_>) -> LocalBoxFuture<'static, Result<String, Error>> {
		use serde_json::{json, Value};
		// https://docs.github.com/en/rest/git/refs?apiVersion=2022-11-28#update-a-reference
		let path = format!("git/refs/heads/{}", crate::encode_file_path(args.branch));
		let builder = self.rest(reqwest::Method::PATCH, self.project_url(args.project, &path), None);
		let builder = builder.json(&json!({
			"sha": args.sha,
			"force": args.force,
		}));
		Box::pin(async move {
			#[derive(Deserialize)]
			struct Reference {
				object: Object,
			}
			#[derive(Deserialize)]
			struct Object {
				sha: String,
			}

			let response = builder.send().await?;
			let status = response.status();
			let data = response.json::<Value>().await.unwrap_or(Value::Null);
			match status.as_u16() {
				200 | 201 => {
					let reference = serde_json::from_value::<Reference>(data)?;
					Ok(reference.object.sha)
				}
				404 => {
					log::warn!(target: "github", "{data:?}");
					Err(RefError::ResourceNotFound.into())
				}
				409 => {
					log::warn!(target: "github", "{data:?}");
					Err(RefError::Conflict.into())
				}
				422 => {
					log::warn!(target: "github", "{data:?}");
					Err(RefError::ValidationFailed.into())
				}
				code => {
					log::warn!(target: "github", "update_ref encountered unknown response code: {code}");
					Err(RefError::Unknown(code).into())
				}
			}
		})
	}
}
