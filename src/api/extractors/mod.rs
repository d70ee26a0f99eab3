//! Request extractors that reject bad input with `VALIDATION_FAILED`.
//!
//! Every rejection carries `details.<location>.<field>` with the list of
//! messages, where location is `body`, `params` or `query`.

mod empty_query;
mod id_param;
mod validated_json;

pub use empty_query::EmptyQuery;
pub use id_param::IdParam;
pub use validated_json::ValidatedJson;

use serde_json::{json, Map, Value};
use validator::ValidationErrors;

use crate::errors::AppError;

pub(crate) const VALIDATION_MESSAGE: &str = "Validation failed, check details for more information";

/// Build a validation error for one request location from `(field, messages)`.
pub(crate) fn validation_failed<I>(location: &str, fields: I) -> AppError
where
    I: IntoIterator<Item = (String, Vec<String>)>,
{
    let fields: Map<String, Value> = fields
        .into_iter()
        .map(|(field, messages)| (field, json!(messages)))
        .collect();

    let mut details = Map::new();
    details.insert(location.to_string(), Value::Object(fields));
    AppError::validation_with(VALIDATION_MESSAGE, Value::Object(details))
}

/// Flatten `validator` field errors into `(field, messages)` pairs, keyed by
/// the camelCase name the client sends.
fn field_messages(errors: &ValidationErrors) -> Vec<(String, Vec<String>)> {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let messages = errs
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{} is invalid", field))
                })
                .collect();
            (camel_case(field), messages)
        })
        .collect()
}

fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = !out.is_empty();
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case_field_names() {
        assert_eq!(camel_case("place_id"), "placeId");
        assert_eq!(camel_case("name"), "name");
        assert_eq!(camel_case("created_at_utc"), "createdAtUtc");
    }
}
