#[derive(thiserror::Error, Debug, Clone)]
pub enum Error {
	#[error(transparent)]
	Request(std::sync::Arc<reqwest::Error>),
	#[error(transparent)]
	Deserialization(std::sync::Arc<serde_json::Error>),
	#[error("{0}")]
	InvalidResponse(std::sync::Arc<String>),
	#[error("Request failed with status code {status}: {body}")]
	Status { status: u16, body: String },
	#[error("'{0}' is not a valid API url")]
	InvalidUrl(String),
	#[error("'{0}' is an invalid identifier for a project")]
	InvalidIdentifier(String),
	#[error("Invalid header value: {0}")]
	InvalidHeader(String),
	#[error("Branch '{branch}' does not exist for project '{project}'")]
	BranchNotFound { branch: String, project: String },
	#[error("A commit needs at least one file change")]
	EmptyCommit,
	// the wrapped error is part of the message, so it is not exposed as `source`
	#[error("{context}\n\nOriginal Error:\n{inner}")]
	Context { context: String, inner: Box<Error> },
}

impl From<reqwest::Error> for Error {
	fn from(value: reqwest::Error) -> Self {
		Self::Request(std::sync::Arc::new(value))
	}
}
impl From<serde_json::Error> for Error {
	fn from(value: serde_json::Error) -> Self {
		Self::Deserialization(std::sync::Arc::new(value))
	}
}

impl Error {
	pub(crate) fn invalid_response(message: impl Into<String>) -> Self {
		Self::InvalidResponse(std::sync::Arc::new(message.into()))
	}

	/// Wraps this error with a description of the request that produced it.
	pub fn context(self, context: impl Into<String>) -> Self {
		Self::Context {
			context: context.into(),
			inner: Box::new(self),
		}
	}

	/// The http status code of the response that failed, if any.
	pub fn status(&self) -> Option<u16> {
		match self {
			Self::Status { status, .. } => Some(*status),
			Self::Request(err) => err.status().map(|code| code.as_u16()),
			Self::Context { inner, .. } => inner.status(),
			_ => None,
		}
	}

	pub fn is_not_found(&self) -> bool {
		self.status() == Some(404)
	}
}

/// Converts a non-2xx response into [`Error::Status`], keeping the body for diagnostics.
pub(crate) async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, Error> {
	let status = response.status();
	if status.is_success() {
		return Ok(response);
	}
	let url = response.url().to_string();
	let body = response.text().await.unwrap_or_default();
	log::debug!(target: "github", "{url} responded with {status}: {body}");
	Err(Error::Status {
		status: status.as_u16(),
		body,
	})
}
