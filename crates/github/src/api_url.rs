use crate::Error;

/// The normalized base of the REST api, e.g. `https://api.github.com`.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiUrl {
	base: String,
	host: String,
}

impl ApiUrl {
	/// Normalizes a user supplied url.
	/// Trailing slashes are removed and the scheme is forced to https,
	/// unless `allow_insecure` is set in which case an explicit `http://` is kept.
	pub fn parse(raw: &str, allow_insecure: bool) -> Result<Self, Error> {
		let raw = raw.trim();
		let (scheme, rest) = if let Some(rest) = raw.strip_prefix("http://") {
			(if allow_insecure { "http" } else { "https" }, rest)
		} else if let Some(rest) = raw.strip_prefix("https://") {
			("https", rest)
		} else {
			("https", raw)
		};
		let rest = rest.trim_end_matches('/');
		if rest.is_empty() || rest.starts_with('/') {
			return Err(Error::InvalidUrl(raw.to_owned()));
		}
		let base = format!("{scheme}://{rest}");

		let parsed = url::Url::parse(&base).map_err(|_| Error::InvalidUrl(raw.to_owned()))?;
		let Some(host) = parsed.host_str() else {
			return Err(Error::InvalidUrl(raw.to_owned()));
		};
		let host = match parsed.port() {
			Some(port) => format!("{host}:{port}"),
			None => host.to_owned(),
		};
		Ok(Self { base, host })
	}

	pub fn base(&self) -> &str {
		&self.base
	}

	pub fn host(&self) -> &str {
		&self.host
	}

	pub fn join(&self, path: impl AsRef<str>) -> String {
		format!("{}/{}", self.base, path.as_ref().trim_start_matches('/'))
	}
}

impl std::fmt::Display for ApiUrl {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.base)
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn adds_scheme() {
		let url = ApiUrl::parse("api.github.com/", false).unwrap();
		assert_eq!(url.base(), "https://api.github.com");
		assert_eq!(url.host(), "api.github.com");
	}

	#[test]
	fn upgrades_http() {
		let url = ApiUrl::parse("http://github.example.com/api/v3//", false).unwrap();
		assert_eq!(url.base(), "https://github.example.com/api/v3");
		assert_eq!(url.join("/repos/a/b"), "https://github.example.com/api/v3/repos/a/b");
	}

	#[test]
	fn keeps_http_when_insecure() {
		let url = ApiUrl::parse("http://127.0.0.1:8080", true).unwrap();
		assert_eq!(url.base(), "http://127.0.0.1:8080");
		assert_eq!(url.host(), "127.0.0.1:8080");
	}

	#[test]
	fn rejects_garbage() {
		assert!(matches!(ApiUrl::parse("", false), Err(Error::InvalidUrl(_))));
		assert!(matches!(ApiUrl::parse("https://", false), Err(Error::InvalidUrl(_))));
	}

	#[test]
	fn rejects_scheme_without_host() {
		assert!(matches!(ApiUrl::parse("http:///", true), Err(Error::InvalidUrl(_))));
		assert!(matches!(ApiUrl::parse("https:////repos", false), Err(Error::InvalidUrl(_))));
		assert!(matches!(ApiUrl::parse("  http://  ", false), Err(Error::InvalidUrl(_))));
	}
}
