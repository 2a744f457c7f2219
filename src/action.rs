use crate::{
	cli::{Args, Command, GetCommand},
	commit_file,
	output::{filter_fields, render},
	settings::Settings,
};
use anyhow::{bail, Context, Result};
use github::{FileContentArgs, GithubClient, ProjectPath};
use std::io::Write;

/// Entry point of an invocation: resolves settings, probes the api and dispatches the action.
pub async fn run(args: Args, out: &mut dyn Write) -> Result<()> {
	log::debug!("{args:?}");
	let settings = Settings::from_args(&args)?;
	log::debug!("{settings:?}");
	let command = Command::parse(&args.action, &args.parameters)?;
	log::debug!("Action is '{}'", args.action);

	let client = settings.client()?;
	if !api_accessible(&client).await {
		bail!("API at '{}' not accessible with given access token", settings.url);
	}

	execute(&client, &settings, command, out).await?;
	out.flush()?;
	Ok(())
}

async fn api_accessible(client: &GithubClient) -> bool {
	match client.get_version().await {
		Ok(version) => version.is_some(),
		Err(err) => {
			log::debug!("{err}");
			false
		}
	}
}

pub async fn execute(client: &GithubClient, settings: &Settings, command: Command, out: &mut dyn Write) -> Result<()> {
	match command {
		Command::Version { fields } => {
			let Some(version) = client.get_version().await? else {
				bail!("API at '{}' did not report any information", settings.url);
			};
			print_value(out, &filter_fields(&version, &fields, settings.json))
		}
		Command::Get(GetCommand::Project { identifier, fields }) => {
			log::debug!("Doing 'GET' > 'project' with identifier '{identifier}' and fields {fields:?}");
			let project = resolve(&identifier)?;
			let data = client.get_project(&project).await?;
			print_value(out, &filter_fields(&data, &fields, settings.json))
		}
		Command::Get(GetCommand::Branches { identifier, fields }) => {
			log::debug!("Doing 'GET' > 'branches' with identifier '{identifier}' and fields {fields:?}");
			let project = resolve(&identifier)?;
			let data = client.get_branches(&project).await?;
			print_value(out, &filter_fields(&data, &fields, settings.json))
		}
		Command::Get(GetCommand::Raw { identifier, path }) => {
			log::debug!("Doing 'GET' > 'raw' with project identifier '{identifier}' and file path '{path}'");
			let project = resolve(&identifier)?;
			let content = client
				.get_raw_file(FileContentArgs {
					project: &project,
					path: &path,
					branch: settings.git_ref.as_deref(),
				})
				.await?;
			out.write_all(&content)?;
			Ok(())
		}
		Command::Commit {
			local_file,
			project,
			target,
		} => {
			log::debug!(
				"Doing 'COMMIT' with project identifier '{project}' and file path '{}'",
				local_file.display()
			);
			let project = resolve(&project)?;
			let outcome = commit_file::commit_single_file(
				client,
				commit_file::Args {
					local_file: &local_file,
					project: &project,
					target: target.as_deref(),
					branch: settings.git_ref.as_deref(),
					force: settings.force,
				},
			)
			.await?;
			let value = match settings.json {
				true => serde_json::to_value(&outcome)?,
				false => serde_json::Value::String(outcome.commit),
			};
			print_value(out, &value)
		}
	}
}

fn resolve(identifier: &str) -> Result<ProjectPath> {
	ProjectPath::resolve(identifier).with_context(|| format!("Cannot resolve project '{identifier}'"))
}

fn print_value(out: &mut dyn Write, value: &serde_json::Value) -> Result<()> {
	writeln!(out, "{}", render(value))?;
	Ok(())
}
