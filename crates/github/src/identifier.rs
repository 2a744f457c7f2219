use crate::Error;

/// The `owner/repo` pair which identifies a project on the remote.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectPath {
	pub owner: String,
	pub repo: String,
}

impl ProjectPath {
	/// Resolves a human-supplied identifier into the project it names.
	///
	/// Accepts `owner/repo`, a web url (`https://host/owner/repo[.git][/...]`)
	/// and the ssh shorthand (`git@host:owner/repo.git`).
	pub fn resolve(identifier: &str) -> Result<Self, Error> {
		let invalid = || Error::InvalidIdentifier(identifier.to_owned());
		let trimmed = identifier.trim();
		if trimmed.is_empty() || trimmed.chars().any(char::is_whitespace) {
			return Err(invalid());
		}

		let path = if let Some((_scheme, rest)) = trimmed.split_once("://") {
			// drop the host, the path starts after the first slash
			let Some((_host, path)) = rest.split_once('/') else {
				return Err(invalid());
			};
			path
		} else if let Some((user_host, path)) = trimmed.split_once(':') {
			if !user_host.contains('@') {
				return Err(invalid());
			}
			path
		} else {
			trimmed
		};

		let mut segments = path.split('/').filter(|segment| !segment.is_empty());
		let (Some(owner), Some(repo)) = (segments.next(), segments.next()) else {
			return Err(invalid());
		};
		// a bare `owner/repo` must not carry any trailing segments
		if !trimmed.contains(':') && segments.next().is_some() {
			return Err(invalid());
		}
		let repo = repo.strip_suffix(".git").unwrap_or(repo);
		if repo.is_empty() {
			return Err(invalid());
		}
		Ok(Self {
			owner: owner.to_owned(),
			repo: repo.to_owned(),
		})
	}

	/// The api path of the project, relative to the api root.
	pub fn api_path(&self) -> String {
		format!("repos/{}/{}", self.owner, self.repo)
	}
}

impl std::fmt::Display for ProjectPath {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}/{}", self.owner, self.repo)
	}
}

impl std::str::FromStr for ProjectPath {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::resolve(s)
	}
}
