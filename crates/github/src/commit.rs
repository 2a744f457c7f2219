use crate::{CreateCommitArgs, CreateTreeArgs, Error, GithubClient, ProjectPath, TreeEntry, UpdateRefArgs};
use futures_util::future::LocalBoxFuture;
use serde::Serialize;

/// A single file change within a commit.
#[derive(Clone, Debug, PartialEq)]
pub enum CommitAction {
	/// Creates the file, or replaces its content if it already exists.
	Upsert { path: String, content: Vec<u8> },
	Delete { path: String },
}

impl CommitAction {
	pub fn path(&self) -> &str {
		match self {
			Self::Upsert { path, .. } | Self::Delete { path } => path.as_str(),
		}
	}
}

#[derive(Clone, Debug)]
pub struct CommitRequest {
	/// If omitted, the commit is made on the default branch.
	pub branch: Option<String>,
	pub message: String,
	pub actions: Vec<CommitAction>,
}

/// The shas produced by a successful commit.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CommitOutcome {
	pub branch: String,
	/// The commit the branch pointed at before.
	pub parent: String,
	pub tree: String,
	pub commit: String,
}

impl GithubClient {
	/// Turns a set of file changes into exactly one commit on top of the head of a branch.
	///
	/// The branch must already exist. Blobs are uploaded first, then a tree is layered onto the
	/// head's tree, a commit is created with the head as its only parent, and finally the
	/// branch is fast-forwarded to the new commit. Nothing is rolled back if a step fails;
	/// objects created before the failure are unreachable and left to the remote's gc.
	pub fn post_commit(
		&self,
		project: &ProjectPath,
		request: CommitRequest,
	) -> LocalBoxFuture<'static, Result<CommitOutcome, Error>> {
		let client = self.clone();
		let project = project.clone();
		Box::pin(async move {
			if request.actions.is_empty() {
				return Err(Error::EmptyCommit);
			}

			let branch = match request.branch.clone() {
				Some(branch) => branch,
				None => client.default_branch(&project).await?,
			};

			let Some(head) = client.get_branch(&project, &branch).await? else {
				return Err(Error::BranchNotFound {
					branch,
					project: project.to_string(),
				});
			};
			log::debug!(target: "github", "committing {} change(s) onto {branch}@{}", request.actions.len(), head.commit);

			let context = format!("Error executing commit on project identified by '{project}'");
			let sequence = async {
				let base_tree = client.get_commit_tree(&project, &head.commit).await?;

				let mut entries = Vec::with_capacity(request.actions.len());
				for action in &request.actions {
					let blob = match action {
						CommitAction::Upsert { content, .. } => Some(client.create_blob(&project, content).await?),
						CommitAction::Delete { .. } => None,
					};
					entries.push(TreeEntry {
						path: action.path().to_owned(),
						blob,
					});
				}

				let tree = client
					.create_tree(CreateTreeArgs {
						project: &project,
						base_tree: &base_tree,
						entries: &entries,
					})
					.await?;

				let parents = [head.commit.clone()];
				let commit = client
					.create_commit(CreateCommitArgs {
						project: &project,
						message: &request.message,
						tree: &tree,
						parents: &parents,
					})
					.await?;

				client
					.update_ref(UpdateRefArgs {
						project: &project,
						branch: &branch,
						sha: &commit,
						force: false,
					})
					.await?;

				Ok::<_, Error>((tree, commit))
			};
			let (tree, commit) = sequence.await.map_err(|err| err.context(context))?;

			Ok(CommitOutcome {
				branch,
				parent: head.commit,
				tree,
				commit,
			})
		})
	}
}
