use anyhow::{bail, Context, Result};
use github::{CommitAction, CommitOutcome, CommitRequest, FileContentArgs, GithubClient, ProjectPath};
use std::path::Path;

#[derive(Debug)]
pub struct Args<'a> {
	pub local_file: &'a Path,
	pub project: &'a ProjectPath,
	/// Path of the file in the repository. Defaults to the file name of `local_file`.
	pub target: Option<&'a str>,
	/// If omitted, the commit is made on the default branch.
	pub branch: Option<&'a str>,
	/// Overwrite the target if it already exists.
	pub force: bool,
}

/// Where in the repository the local file ends up.
pub fn target_path(local_file: &Path, target: Option<&str>) -> Result<String> {
	let target = match target {
		Some(target) => target.to_owned(),
		None => {
			let Some(name) = local_file.file_name().and_then(|name| name.to_str()) else {
				bail!("cannot derive a target path from '{}'", local_file.display());
			};
			name.to_owned()
		}
	};
	let target = target.replace("\\", "/").trim_matches('/').to_owned();
	if target.is_empty() {
		bail!("target path for '{}' is empty", local_file.display());
	}
	Ok(target)
}

pub fn commit_message(target: &str, overwrite: bool) -> String {
	match overwrite {
		true => format!("Update {target}"),
		false => format!("Add {target}"),
	}
}

/// Commits one local file to a branch of the project.
pub async fn commit_single_file(client: &GithubClient, args: Args<'_>) -> Result<CommitOutcome> {
	let content = tokio::fs::read(args.local_file)
		.await
		.with_context(|| format!("Failed to read local file '{}'", args.local_file.display()))?;
	let target = target_path(args.local_file, args.target)?;

	let branch = match args.branch {
		Some(branch) => branch.to_owned(),
		None => client.default_branch(args.project).await?,
	};

	let exists = client
		.file_exists(FileContentArgs {
			project: args.project,
			path: &target,
			branch: Some(&branch),
		})
		.await?;
	if exists && !args.force {
		bail!("file '{target}' already exists on branch '{branch}'. Use 'force' to overwrite");
	}
	log::debug!("committing {} bytes to {}:{target}", content.len(), args.project);

	let request = CommitRequest {
		branch: Some(branch),
		message: commit_message(&target, exists),
		actions: vec![CommitAction::Upsert {
			path: target,
			content,
		}],
	};
	Ok(client.post_commit(args.project, request).await?)
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn target_defaults_to_file_name() {
		assert_eq!(target_path(Path::new("some/dir/notes.md"), None).unwrap(), "notes.md");
		assert_eq!(
			target_path(Path::new("notes.md"), Some("/docs\\notes.md")).unwrap(),
			"docs/notes.md"
		);
		assert!(target_path(Path::new("/"), None).is_err());
		assert!(target_path(Path::new("notes.md"), Some("//")).is_err());
	}

	#[test]
	fn messages() {
		assert_eq!(commit_message("notes.md", false), "Add notes.md");
		assert_eq!(commit_message("notes.md", true), "Update notes.md");
	}

	#[tokio::test]
	async fn unreadable_local_file_fails_before_any_request() {
		use github::{ApiUrl, ClientSettings};
		let dir = tempfile::tempdir().unwrap();
		let missing = dir.path().join("missing.txt");
		// nothing listens here; reaching the network would fail with a different error
		let client = GithubClient::new(ClientSettings {
			url: ApiUrl::parse("http://127.0.0.1:9", true).unwrap(),
			access_token: "abc".into(),
			user_agent: "github-x/tests".into(),
		})
		.unwrap();
		let project = ProjectPath::resolve("octocat/hello").unwrap();
		let err = commit_single_file(
			&client,
			Args {
				local_file: &missing,
				project: &project,
				target: None,
				branch: Some("main"),
				force: false,
			},
		)
		.await
		.unwrap_err();
		assert!(err.to_string().starts_with("Failed to read local file"));
	}
}
