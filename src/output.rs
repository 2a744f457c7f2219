use serde_json::{Map, Value};

/// Reduces an api response to the requested fields.
///
/// Without fields the value is returned as is. A single field is unwrapped to its bare value
/// unless `force_json` is set. Arrays are filtered element-wise. Fields may name nested
/// values with dots (`commit.sha`).
pub fn filter_fields(value: &Value, fields: &[String], force_json: bool) -> Value {
	if fields.is_empty() {
		return value.clone();
	}
	match value {
		Value::Array(items) => Value::Array(
			items
				.iter()
				.map(|item| filter_fields(item, fields, force_json))
				.collect(),
		),
		Value::Object(_) if fields.len() == 1 && !force_json => lookup(value, &fields[0]).cloned().unwrap_or(Value::Null),
		Value::Object(_) => {
			let mut selected = Map::new();
			for field in fields {
				let Some(found) = lookup(value, field) else {
					log::debug!("field {field:?} is not present in the response");
					continue;
				};
				selected.insert(field.clone(), found.clone());
			}
			Value::Object(selected)
		}
		other => other.clone(),
	}
}

fn lookup<'v>(value: &'v Value, field: &str) -> Option<&'v Value> {
	if let Some(found) = value.get(field) {
		return Some(found);
	}
	field
		.split('.')
		.try_fold(value, |current, key| match current {
			Value::Array(items) => key.parse::<usize>().ok().and_then(|idx| items.get(idx)),
			_ => current.get(key),
		})
}

/// Formats a (filtered) value for the console. Bare strings are printed without quotes.
pub fn render(value: &Value) -> String {
	match value {
		Value::String(text) => text.clone(),
		other => serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string()),
	}
}
