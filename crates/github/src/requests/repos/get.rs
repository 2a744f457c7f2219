use crate::{requests::send_json, Error, ProjectPath};
use futures_util::future::LocalBoxFuture;
use serde_json::Value;

impl crate::GithubClient {
	/// Fetches the full repository document of a project.
	pub fn get_project(&self, project: &ProjectPath) -> LocalBoxFuture<'static, Result<Value, Error>> {
		// https://docs.github.com/en/rest/repos/repos?apiVersion=2022-11-28#get-a-repository
		let builder = self.rest(reqwest::Method::GET, self.project_url(project, ""), None);
		let context = format!("Error requesting project identified by '{project}'");
		Box::pin(async move { send_json::<Value>(builder).await.map_err(|err| err.context(context)) })
	}

	/// Resolves the name of the default branch of a project.
	pub fn default_branch(&self, project: &ProjectPath) -> LocalBoxFuture<'static, Result<String, Error>> {
		let request = self.get_project(project);
		let project = project.to_string();
		Box::pin(async move {
			let data = request.await?;
			let Some(Value::String(branch)) = data.get("default_branch") else {
				log::warn!(target: "github", "{data:?}");
				return Err(Error::invalid_response(format!(
					"Project '{project}' did not report a default branch"
				)));
			};
			Ok(branch.clone())
		})
	}
}
