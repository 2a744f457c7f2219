use crate::{error::check_status, Error};

pub mod git;
pub mod repos;
mod version;

pub use git::{
	commits::Args as CreateCommitArgs,
	refs::{Args as UpdateRefArgs, RefError},
	trees::{Args as CreateTreeArgs, TreeEntry},
};
pub use repos::{branches::Branch, contents::get::Args as FileContentArgs};

/// Sends the request and turns any non-2xx response into an error.
pub(crate) async fn send(builder: reqwest::RequestBuilder) -> Result<reqwest::Response, Error> {
	let response = builder.send().await?;
	check_status(response).await
}

pub(crate) async fn send_json<T: serde::de::DeserializeOwned>(builder: reqwest::RequestBuilder) -> Result<T, Error> {
	let response = send(builder).await?;
	let data = response.json::<serde_json::Value>().await?;
	Ok(serde_json::from_value::<T>(data)?)
}

/// Like [`send`], but reports a 404 as `false` instead of an error.
pub(crate) async fn send_exists(builder: reqwest::RequestBuilder) -> Result<bool, Error> {
	match send(builder).await {
		Ok(response) => Ok(response.status().as_u16() == 200),
		Err(err) if err.is_not_found() => Ok(false),
		Err(err) => Err(err),
	}
}
