use crate::{requests::send, Error, GithubClient, ProjectPath};
use futures_util::future::LocalBoxFuture;

#[derive(Clone, Debug)]
pub struct Args<'a> {
	pub project: &'a ProjectPath,
	/// The path to the file in the repository.
	pub path: &'a str,
	/// If omitted, the default branch of the project is used.
	pub branch: Option<&'a str>,
}

/// Owned copy of [`Args`] so the request can outlive the borrowed arguments.
pub(crate) struct ContentRequest {
	pub client: GithubClient,
	pub project: ProjectPath,
	pub path: String,
	pub branch: Option<String>,
}

impl ContentRequest {
	pub fn new(client: &GithubClient, args: Args<'_>) -> Self {
		Self {
			client: client.clone(),
			project: args.project.clone(),
			path: args.path.to_owned(),
			branch: args.branch.map(str::to_owned),
		}
	}

	/// Resolves the branch to read from, falling back to the project's default branch.
	pub async fn branch(&self) -> Result<String, Error> {
		match &self.branch {
			Some(branch) => Ok(branch.clone()),
			None => self.client.default_branch(&self.project).await,
		}
	}

	pub fn url(&self, branch: &str) -> String {
		// https://docs.github.com/en/rest/repos/contents?apiVersion=2022-11-28#get-repository-content
		let path = format!(
			"contents/{}?ref={}",
			crate::encode_file_path(&self.path),
			urlencoding::encode(branch)
		);
		self.client.project_url(&self.project, &path)
	}
}

impl GithubClient {
	/// Fetches the raw content of a file in a repository.
	pub fn get_raw_file(&self, args: Args<'_>) -> LocalBoxFuture<'static, Result<Vec<u8>, Error>> {
		// https://docs.github.com/en/rest/overview/media-types?apiVersion=2022-11-28
		let request = ContentRequest::new(self, args);
		Box::pin(async move {
			let branch = request.branch().await?;
			let context = format!(
				"Error requesting raw file '{}' from branch '{branch}' for project identified by '{}'",
				request.path, request.project
			);
			let builder = request
				.client
				.rest(reqwest::Method::GET, request.url(&branch), Some("raw"));
			let fetch = async move {
				let response = send(builder).await?;
				Ok::<_, Error>(response.bytes().await?.to_vec())
			};
			fetch.await.map_err(|err| err.context(context))
		})
	}
}
