//! Axum server which answers from a fixed route table and records every request it receives.
//! Unmatched requests get the same `404 {"message":"Not Found"}` the REST api sends.

use axum::{
	body::Bytes,
	extract::State,
	http::{header, HeaderMap, Method, StatusCode, Uri},
	response::{IntoResponse, Response},
	Router,
};
use std::sync::{Arc, Mutex};

#[derive(Clone, Debug)]
pub struct Recorded {
	pub method: String,
	/// Path and query, as sent on the request line.
	pub target: String,
	pub headers: Vec<(String, String)>,
	pub body: String,
}

impl Recorded {
	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers
			.iter()
			.find(|(key, _)| key.eq_ignore_ascii_case(name))
			.map(|(_, value)| value.as_str())
	}

	pub fn json(&self) -> serde_json::Value {
		serde_json::from_str(&self.body).expect("request body is json")
	}
}

#[derive(Clone)]
struct Route {
	method: &'static str,
	target: String,
	status: u16,
	body: String,
}

#[derive(Default)]
struct Shared {
	routes: Vec<Route>,
	requests: Mutex<Vec<Recorded>>,
}

#[derive(Default)]
pub struct MockServerBuilder {
	routes: Vec<Route>,
}

impl MockServerBuilder {
	pub fn route(mut self, method: &'static str, target: impl Into<String>, status: u16, body: serde_json::Value) -> Self {
		self.routes.push(Route {
			method,
			target: target.into(),
			status,
			body: body.to_string(),
		});
		self
	}

	pub fn raw(mut self, method: &'static str, target: impl Into<String>, status: u16, body: &str) -> Self {
		self.routes.push(Route {
			method,
			target: target.into(),
			status,
			body: body.to_owned(),
		});
		self
	}

	pub async fn start(self) -> MockServer {
		let shared = Arc::new(Shared {
			routes: self.routes,
			requests: Mutex::default(),
		});
		let app = Router::new().fallback(respond).with_state(shared.clone());

		let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
			.await
			.expect("bind ephemeral port");
		let address = listener.local_addr().expect("socket address");
		tokio::spawn(async move {
			let _ = axum::serve(listener, app).await;
		});

		MockServer {
			url: format!("http://{address}"),
			shared,
		}
	}
}

pub struct MockServer {
	pub url: String,
	shared: Arc<Shared>,
}

impl MockServer {
	pub fn builder() -> MockServerBuilder {
		MockServerBuilder::default()
	}

	pub fn requests(&self) -> Vec<Recorded> {
		self.shared.requests.lock().expect("request log").clone()
	}

	/// `METHOD target` of every request, in the order they were received.
	pub fn request_lines(&self) -> Vec<String> {
		self.requests()
			.into_iter()
			.map(|request| format!("{} {}", request.method, request.target))
			.collect()
	}
}

async fn respond(
	State(shared): State<Arc<Shared>>,
	method: Method,
	uri: Uri,
	headers: HeaderMap,
	body: Bytes,
) -> Response {
	let target = uri
		.path_and_query()
		.map(|target| target.as_str().to_owned())
		.unwrap_or_else(|| uri.path().to_owned());
	let route = shared
		.routes
		.iter()
		.find(|route| route.method == method.as_str() && route.target == target)
		.cloned();

	shared.requests.lock().expect("request log").push(Recorded {
		method: method.to_string(),
		target,
		headers: headers
			.iter()
			.map(|(key, value)| (key.to_string(), value.to_str().unwrap_or_default().to_owned()))
			.collect(),
		body: String::from_utf8_lossy(&body).into_owned(),
	});

	let (status, body) = match route {
		Some(route) => (route.status, route.body),
		None => (404, r#"{"message":"Not Found"}"#.to_owned()),
	};
	let status = StatusCode::from_u16(status).expect("valid status code");
	(status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
}
