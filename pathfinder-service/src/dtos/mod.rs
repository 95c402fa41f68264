use crate::models::{null_as_default, Path, Point};
use serde::{Deserialize, Serialize};

/// Body of `POST /find-path`. Missing or `null` endpoints decode as the
/// origin.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FindPathRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub start: Point,
    #[serde(default, deserialize_with = "null_as_default")]
    pub end: Point,
}

/// `path` serializes as `null` when no route was found.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FindPathResponse {
    pub path: Option<Path>,
}
