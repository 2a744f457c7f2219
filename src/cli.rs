use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "github-x", about = "github-x: GitHub Executor API Interface", version, disable_version_flag = true)]
pub struct Args {
	/// action to be executed (get, commit, version)
	#[arg(value_name = "action", default_value = "get")]
	pub action: String,

	/// action parameters to be used
	#[arg(value_name = "parameters")]
	pub parameters: Vec<String>,

	/// Print version
	#[arg(short = 'v', long = "version", action = clap::ArgAction::Version)]
	pub version: Option<bool>,

	#[arg(short = 't', long, env = "GITHUB_AT", hide_env_values = true)]
	pub access_token: Option<String>,

	#[arg(short = 'u', long, env = "GITHUB_URL")]
	pub url: Option<String>,

	/// increased console output
	#[arg(long)]
	pub verbose: bool,

	/// always print result as json, even if it is a single value
	#[arg(long)]
	pub json: bool,

	/// force operation
	#[arg(short = 'f', long)]
	pub force: bool,

	/// provide a git ref
	#[arg(long = "ref", value_name = "ref")]
	pub git_ref: Option<String>,

	/// keep a plain http:// url instead of upgrading it to https
	#[arg(long)]
	pub insecure_http: bool,

	/// also write the log to this file
	#[arg(long, value_name = "path")]
	pub log_file: Option<PathBuf>,
}

impl std::fmt::Debug for Args {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Args")
			.field("action", &self.action)
			.field("parameters", &self.parameters)
			.field("access_token", &self.access_token.as_ref().map(|_| "<redacted>"))
			.field("url", &self.url)
			.field("verbose", &self.verbose)
			.field("json", &self.json)
			.field("force", &self.force)
			.field("git_ref", &self.git_ref)
			.field("insecure_http", &self.insecure_http)
			.field("log_file", &self.log_file)
			.finish()
	}
}

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
	Get(GetCommand),
	/// `commit <local file> <project identifier> [<target file>]`
	Commit {
		local_file: PathBuf,
		project: String,
		target: Option<String>,
	},
	Version {
		fields: Vec<String>,
	},
}

#[derive(Clone, Debug, PartialEq)]
pub enum GetCommand {
	Project { identifier: String, fields: Vec<String> },
	Branches { identifier: String, fields: Vec<String> },
	Raw { identifier: String, path: String },
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum UsageError {
	#[error("'{0}' is an invalid action")]
	InvalidAction(String),
	#[error("not enough parameter for '{0}' action")]
	NotEnoughParameters(&'static str),
	#[error("too many parameters for '{0}' action")]
	TooManyParameters(&'static str),
	#[error("wrong number of parameters for 'get raw' action")]
	RawParameters,
	#[error("object type '{0}' is not supported")]
	UnsupportedObjectType(String),
}

impl Command {
	pub fn parse(action: &str, parameters: &[String]) -> Result<Self, UsageError> {
		match action {
			"version" => Ok(Self::Version {
				fields: parameters.to_vec(),
			}),
			"get" => Ok(Self::Get(GetCommand::parse(parameters)?)),
			"commit" => {
				// commit <local file> <project identifier> [<target file>]
				if parameters.len() < 2 {
					return Err(UsageError::NotEnoughParameters("commit"));
				}
				if parameters.len() > 3 {
					return Err(UsageError::TooManyParameters("commit"));
				}
				Ok(Self::Commit {
					local_file: PathBuf::from(&parameters[0]),
					project: parameters[1].clone(),
					target: parameters.get(2).cloned(),
				})
			}
			_ => Err(UsageError::InvalidAction(action.to_owned())),
		}
	}
}

impl GetCommand {
	/// `get <object type> <object identifier> [<object fields>...]`
	fn parse(parameters: &[String]) -> Result<Self, UsageError> {
		let [object_type, identifier, rest @ ..] = parameters else {
			return Err(UsageError::NotEnoughParameters("get"));
		};
		let identifier = identifier.clone();
		match object_type.as_str() {
			"project" => Ok(Self::Project {
				identifier,
				fields: rest.to_vec(),
			}),
			"branches" => Ok(Self::Branches {
				identifier,
				fields: rest.to_vec(),
			}),
			"raw" => {
				let [path] = rest else {
					return Err(UsageError::RawParameters);
				};
				Ok(Self::Raw {
					identifier,
					path: path.clone(),
				})
			}
			other => Err(UsageError::UnsupportedObjectType(other.to_owned())),
		}
	}
}
