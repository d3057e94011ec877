//! Guard for identifiers that must be present, such as a route segment.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path, rejection::PathRejection},
    http::request::Parts,
};

use crate::error::IdentifierError;
use crate::models::Identifier;
use crate::utils::uuid::is_uuid_v4;

/// Accepts `value` only if it is a present, non-empty UUID v4.
///
/// The accepted string is returned exactly as given; case is preserved.
pub fn require_valid_parameter(value: Option<&str>) -> Result<Identifier, IdentifierError> {
    let value = match value {
        None | Some("") => return Err(IdentifierError::MissingRequiredValue),
        Some(value) => value,
    };

    if !is_uuid_v4(value) {
        return Err(IdentifierError::MalformedIdentifier { value: value.to_string() });
    }

    Ok(Identifier::new_unchecked(value.to_string()))
}

/// Extracts the single path parameter of a route and runs it through
/// [`require_valid_parameter`].
///
/// The parameter must be the last segment of the route. A segment that
/// cannot be decoded (for example invalid UTF-8) is malformed, and is
/// reported with its raw, still percent-encoded text.
#[derive(Debug, Clone)]
pub struct ValidId(pub Identifier);

fn raw_last_segment(parts: &Parts) -> String {
    parts.uri.path().rsplit('/').next().unwrap_or_default().to_string()
}

#[async_trait]
impl<S> FromRequestParts<S> for ValidId
where
    S: Send + Sync,
{
    type Rejection = IdentifierError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let raw = match Path::<String>::from_request_parts(parts, state).await {
            Ok(Path(raw)) => Some(raw),
            Err(PathRejection::MissingPathParams(_)) => None,
            Err(_) => {
                return Err(IdentifierError::MalformedIdentifier {
                    value: raw_last_segment(parts),
                });
            }
        };

        require_valid_parameter(raw.as_deref()).map(ValidId)
    }
}
