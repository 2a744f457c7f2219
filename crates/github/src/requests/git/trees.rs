use crate::{requests::send_json, Error, ProjectPath};
use futures_util::future::LocalBoxFuture;
use serde::{Deserialize, Serialize};

/// Regular, non-executable file.
pub(crate) static FILE_MODE: &'static str = "100644";

#[derive(Clone, Debug, PartialEq)]
pub struct TreeEntry {
	pub path: String,
	/// The blob to place at `path`. `None` removes the path from the tree.
	pub blob: Option<String>,
}

pub struct Args<'a> {
	pub project: &'a ProjectPath,
	/// The tree the new entries are layered on top of.
	pub base_tree: &'a str,
	pub entries: &'a [TreeEntry],
}

#[derive(Serialize)]
struct Entry<'a> {
	path: &'a str,
	mode: &'static str,
	#[serde(rename = "type")]
	type_: &'static str,
	// must be serialized as `null` when deleting
	sha: Option<&'a str>,
}

#[derive(Serialize)]
struct Body<'a> {
	base_tree: &'a str,
	tree: Vec<Entry<'a>>,
}

impl<'a> Body<'a> {
	fn new(args: &Args<'a>) -> Self {
		let tree = args
			.entries
			.iter()
			.map(|entry| Entry {
				path: entry.path.trim_matches('/'),
				mode: FILE_MODE,
				type_: "blob",
				sha: entry.blob.as_deref(),
			})
			.collect();
		Self {
			base_tree: args.base_tree,
			tree,
		}
	}
}

impl crate::GithubClient {
	/// Creates a tree from `base_tree` with the entries replaced or removed, returning the new tree's sha.
	pub fn create_tree(&self, args: Args<'_>) -> LocalBoxFuture<'static, Result<String, Error>> {
		// https://docs.github.com/en/rest/git/trees?apiVersion=2022-11-28#create-a-tree
		let builder = self.rest(reqwest::Method::POST, self.project_url(args.project, "git/trees"), None);
		let builder = builder.json(&Body::new(&args));
		Box::pin(async move {
			#[derive(Deserialize)]
			struct Tree {
				sha: String,
			}
			let tree = send_json::<Tree>(builder).await?;
			Ok(tree.sha)
		})
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn body_layout() {
		let project = ProjectPath::resolve("octocat/hello").unwrap();
		let entries = vec![
			TreeEntry {
				path: "/docs/readme.md".into(),
				blob: Some("b10b".into()),
			},
			TreeEntry {
				path: "old.txt".into(),
				blob: None,
			},
		];
		let body = Body::new(&Args {
			project: &project,
			base_tree: "7ree",
			entries: &entries,
		});
		assert_eq!(
			serde_json::to_value(&body).unwrap(),
			serde_json::json!({
				"base_tree": "7ree",
				"tree": [
					{ "path": "docs/readme.md", "mode": "100644", "type": "blob", "sha": "b10b" },
					{ "path": "old.txt", "mode": "100644", "type": "blob", "sha": null },
				]
			})
		);
	}
}
