use clap::Parser;
use github_x::{
	action::{execute, run as run_args},
	cli::{Args, Command},
	settings::Settings,
};
use serde_json::json;
use mock_api::{MockServer, MockServerBuilder};

fn settings(server: &MockServer, extra: &[&str]) -> Settings {
	let mut argv = vec!["github-x", "-t", "s3cr3t", "-u", server.url.as_str(), "--insecure-http"];
	argv.extend_from_slice(extra);
	Settings::from_args(&Args::try_parse_from(argv).unwrap()).unwrap()
}

async fn run(server: &MockServer, action: &str, parameters: &[&str], extra: &[&str]) -> anyhow::Result<String> {
	let settings = settings(server, extra);
	let parameters = parameters.iter().map(|item| item.to_string()).collect::<Vec<_>>();
	let command = Command::parse(action, &parameters)?;
	let mut out = Vec::new();
	execute(&settings.client()?, &settings, command, &mut out).await?;
	Ok(String::from_utf8(out)?)
}

fn repository() -> MockServerBuilder {
	MockServer::builder()
		.route(
			"GET",
			"/repos/octocat/hello",
			200,
			json!({ "id": 7, "name": "hello", "default_branch": "main" }),
		)
		.route(
			"GET",
			"/repos/octocat/hello/branches",
			200,
			json!([{ "name": "main", "commit": { "sha": "head0" } }]),
		)
		.route(
			"GET",
			"/repos/octocat/hello/branches/main",
			200,
			json!({ "name": "main", "commit": { "sha": "head0" } }),
		)
}

#[tokio::test]
async fn get_project_field() {
	let server = repository().start().await;
	let output = run(&server, "get", &["project", "octocat/hello", "default_branch"], &[])
		.await
		.unwrap();
	assert_eq!(output, "main\n");
	let output = run(&server, "get", &["project", "octocat/hello", "name"], &["--json"])
		.await
		.unwrap();
	assert_eq!(output, "{\n  \"name\": \"hello\"\n}\n");
}

#[tokio::test]
async fn get_branch_names() {
	let server = repository().start().await;
	let output = run(&server, "get", &["branches", "https://github.com/octocat/hello", "name"], &[])
		.await
		.unwrap();
	assert_eq!(output, "[\n  \"main\"\n]\n");
}

#[tokio::test]
async fn get_raw_streams_bytes() {
	let server = MockServer::builder()
		.raw("GET", "/repos/octocat/hello/contents/bin/tool.sh?ref=dev", 200, "#!/bin/sh\necho hi")
		.start()
		.await;
	let output = run(&server, "get", &["raw", "octocat/hello", "bin/tool.sh"], &["--ref", "dev"])
		.await
		.unwrap();
	assert_eq!(output, "#!/bin/sh\necho hi");
}

#[tokio::test]
async fn invalid_identifier() {
	let server = repository().start().await;
	let err = run(&server, "get", &["project", "hello"], &[]).await.unwrap_err();
	assert_eq!(
		format!("{err:#}"),
		"Cannot resolve project 'hello': 'hello' is an invalid identifier for a project"
	);
	assert!(server.requests().is_empty());
}

fn commit_routes(builder: MockServerBuilder) -> MockServerBuilder {
	builder
		.route(
			"GET",
			"/repos/octocat/hello/git/commits/head0",
			200,
			json!({ "tree": { "sha": "tree0" } }),
		)
		.route("POST", "/repos/octocat/hello/git/blobs", 201, json!({ "sha": "blob1" }))
		.route("POST", "/repos/octocat/hello/git/trees", 201, json!({ "sha": "tree1" }))
		.route("POST", "/repos/octocat/hello/git/commits", 201, json!({ "sha": "commit1" }))
		.route(
			"PATCH",
			"/repos/octocat/hello/git/refs/heads/main",
			200,
			json!({ "object": { "sha": "commit1" } }),
		)
}

#[tokio::test]
async fn commit_new_file() {
	let dir = tempfile::tempdir().unwrap();
	let local = dir.path().join("notes.md");
	std::fs::write(&local, "# notes").unwrap();

	let server = commit_routes(repository()).start().await;
	let output = run(&server, "commit", &[local.to_str().unwrap(), "octocat/hello", "docs/notes.md"], &[])
		.await
		.unwrap();
	assert_eq!(output, "commit1\n");

	let requests = server.requests();
	let commit = requests
		.iter()
		.find(|request| request.method == "POST" && request.target.ends_with("/git/commits"))
		.unwrap();
	assert_eq!(commit.json()["message"], "Add docs/notes.md");
	assert_eq!(
		server.request_lines()[..2],
		[
			"GET /repos/octocat/hello".to_owned(),
			"GET /repos/octocat/hello/contents/docs/notes.md?ref=main".to_owned(),
		]
	);
}

#[tokio::test]
async fn commit_refuses_overwrite_without_force() {
	let dir = tempfile::tempdir().unwrap();
	let local = dir.path().join("notes.md");
	std::fs::write(&local, "# notes").unwrap();

	let server = commit_routes(repository())
		.route(
			"GET",
			"/repos/octocat/hello/contents/notes.md?ref=main",
			200,
			json!({ "type": "file" }),
		)
		.start()
		.await;
	let err = run(&server, "commit", &[local.to_str().unwrap(), "octocat/hello"], &[])
		.await
		.unwrap_err();
	assert_eq!(
		err.to_string(),
		"file 'notes.md' already exists on branch 'main'. Use 'force' to overwrite"
	);

	let output = run(&server, "commit", &[local.to_str().unwrap(), "octocat/hello"], &["--force", "--json"])
		.await
		.unwrap();
	let outcome: serde_json::Value = serde_json::from_str(&output).unwrap();
	assert_eq!(
		outcome,
		json!({ "branch": "main", "parent": "head0", "tree": "tree1", "commit": "commit1" })
	);
	let messages = server
		.requests()
		.into_iter()
		.filter(|request| request.method == "POST" && request.target.ends_with("/git/commits"))
		.map(|request| request.json()["message"].clone())
		.collect::<Vec<_>>();
	assert_eq!(messages, vec![json!("Update notes.md")]);
}

#[tokio::test]
async fn version_fields() {
	let server = MockServer::builder()
		.route(
			"GET",
			"/",
			200,
			json!({ "current_user_url": "https://api.github.com/user", "emojis_url": "https://api.github.com/emojis" }),
		)
		.start()
		.await;
	let output = run(&server, "version", &["emojis_url"], &[]).await.unwrap();
	assert_eq!(output, "https://api.github.com/emojis\n");
}

#[tokio::test]
async fn unreachable_api_is_reported() {
	let server = MockServer::builder()
		.route("GET", "/", 401, json!({ "message": "Bad credentials" }))
		.start()
		.await;
	let args = Args::try_parse_from([
		"github-x",
		"get",
		"project",
		"octocat/hello",
		"-t",
		"s3cr3t",
		"-u",
		server.url.as_str(),
		"--insecure-http",
	])
	.unwrap();
	let mut out = Vec::new();
	let err = run_args(args, &mut out).await.unwrap_err();
	assert_eq!(
		err.to_string(),
		format!("API at '{}' not accessible with given access token", server.url)
	);
	assert_eq!(server.request_lines(), vec!["GET /".to_owned()]);
	assert!(out.is_empty());
}

#[tokio::test]
async fn usage_errors_fail_before_any_request() {
	let server = MockServer::builder()
		.route("GET", "/", 200, json!({ "current_user_url": "https://api.github.com/user" }))
		.start()
		.await;
	let args = Args::try_parse_from([
		"github-x",
		"push",
		"octocat/hello",
		"-t",
		"s3cr3t",
		"-u",
		server.url.as_str(),
		"--insecure-http",
	])
	.unwrap();
	let mut out = Vec::new();
	let err = run_args(args, &mut out).await.unwrap_err();
	assert_eq!(err.to_string(), "'push' is an invalid action");
	assert!(server.requests().is_empty());
}

#[tokio::test]
async fn run_writes_to_given_sink() {
	let server = repository()
		.route("GET", "/", 200, json!({ "current_user_url": "https://api.github.com/user" }))
		.start()
		.await;
	let args = Args::try_parse_from([
		"github-x",
		"get",
		"project",
		"octocat/hello",
		"name",
		"-t",
		"s3cr3t",
		"-u",
		server.url.as_str(),
		"--insecure-http",
	])
	.unwrap();
	let mut out = Vec::new();
	run_args(args, &mut out).await.unwrap();
	assert_eq!(String::from_utf8(out).unwrap(), "hello\n");
	assert_eq!(
		server.request_lines(),
		vec!["GET /".to_owned(), "GET /repos/octocat/hello".to_owned()]
	);
}
