use crate::{
	requests::{send, send_exists, send_json},
	Error, ProjectPath,
};
use futures_util::future::LocalBoxFuture;
use serde::Deserialize;
use serde_json::Value;

/// A branch and the commit at its head.
#[derive(Clone, Debug, PartialEq)]
pub struct Branch {
	pub name: String,
	/// The sha of the commit the branch currently points at.
	pub commit: String,
}

#[derive(Deserialize)]
struct Entry {
	name: String,
	commit: Commit,
}
#[derive(Deserialize)]
struct Commit {
	sha: String,
}

impl Entry {
	fn into_branch(self) -> Branch {
		Branch {
			name: self.name,
			commit: self.commit.sha,
		}
	}
}

impl crate::GithubClient {
	/// Lists the branches of a project, as returned by the api.
	pub fn get_branches(&self, project: &ProjectPath) -> LocalBoxFuture<'static, Result<Value, Error>> {
		// https://docs.github.com/en/rest/branches/branches?apiVersion=2022-11-28#list-branches
		let builder = self.rest(reqwest::Method::GET, self.project_url(project, "branches"), None);
		let context = format!("Error requesting branches for project identified by '{project}'");
		Box::pin(async move { send_json::<Value>(builder).await.map_err(|err| err.context(context)) })
	}

	/// Fetches a single branch and the commit it points at. A missing branch is `Ok(None)`.
	pub fn get_branch(&self, project: &ProjectPath, branch: &str) -> LocalBoxFuture<'static, Result<Option<Branch>, Error>> {
		// https://docs.github.com/en/rest/branches/branches?apiVersion=2022-11-28#get-a-branch
		let path = format!("branches/{}", crate::encode_file_path(branch));
		let builder = self.rest(reqwest::Method::GET, self.project_url(project, &path), None);
		let context = format!("Error requesting branch '{branch}' for project identified by '{project}'");
		Box::pin(async move {
			let request = async {
				let response = match send(builder).await {
					Ok(response) => response,
					Err(err) if err.is_not_found() => return Ok(None),
					Err(err) => return Err(err),
				};
				let entry = response.json::<Entry>().await?;
				Ok::<_, Error>(Some(entry.into_branch()))
			};
			request.await.map_err(|err| err.context(context))
		})
	}

	/// Checks if a branch exists. A missing branch is `Ok(false)`, any other failure is an error.
	pub fn branch_exists(&self, project: &ProjectPath, branch: &str) -> LocalBoxFuture<'static, Result<bool, Error>> {
		// https://docs.github.com/en/rest/branches/branches?apiVersion=2022-11-28#get-a-branch
		let path = format!("branches/{}", crate::encode_file_path(branch));
		let builder = self.rest(reqwest::Method::GET, self.project_url(project, &path), None);
		let context = format!("Error requesting branch '{branch}' for project identified by '{project}'");
		Box::pin(async move { send_exists(builder).await.map_err(|err| err.context(context)) })
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn parses_single_branch() {
		let data = serde_json::json!({
			"name": "release",
			"commit": { "sha": "f00d", "commit": { "message": "cut release" } },
			"protected": true,
		});
		let entry = serde_json::from_value::<Entry>(data).unwrap();
		assert_eq!(
			entry.into_branch(),
			Branch {
				name: "release".into(),
				commit: "f00d".into()
			}
		);
	}

	#[test]
	fn rejects_non_branch() {
		let data = serde_json::json!({ "message": "Not Found" });
		assert!(serde_json::from_value::<Entry>(data).is_err());
	}
}
