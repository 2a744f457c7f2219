use crate::{requests::send_json, Error, ProjectPath};
use futures_util::future::LocalBoxFuture;
use serde::Deserialize;

pub struct Args<'a> {
	pub project: &'a ProjectPath,
	pub message: &'a str,
	pub tree: &'a str,
	pub parents: &'a [String],
}

impl crate::GithubClient {
	/// Looks up the tree a commit points at.
	pub fn get_commit_tree(&self, project: &ProjectPath, commit: &str) -> LocalBoxFuture<'static, Result<String, Error>> {
		// https://docs.github.com/en/rest/git/commits?apiVersion=2022-11-28#get-a-commit-object
		let path = format!("git/commits/{commit}");
		let builder = self.rest(reqwest::Method::GET, self.project_url(project, &path), None);
		Box::pin(async move {
			#[derive(Deserialize)]
			struct Commit {
				tree: Tree,
			}
			#[derive(Deserialize)]
			struct Tree {
				sha: String,
			}
			let commit = send_json::<Commit>(builder).await?;
			Ok(commit.tree.sha)
		})
	}

	/// Creates a commit object, returning its sha. The commit is not reachable from any branch yet.
	pub fn create_commit(&self, args: Args<'_>) -> LocalBoxFuture<'static, Result<String, Error>> {
		use serde_json::json;
		// https://docs.github.com/en/rest/git/commits?apiVersion=2022-11-28#create-a-commit
		let builder = self.rest(reqwest::Method::POST, self.project_url(args.project, "git/commits"), None);
		let builder = builder.json(&json!({
			"message": args.message,
			"tree": args.tree,
			"parents": args.parents,
		}));
		Box::pin(async move {
			#[derive(Deserialize)]
			struct Commit {
				sha: String,
			}
			let commit = send_json::<Commit>(builder).await?;
			Ok(commit.sha)
		})
	}
}
