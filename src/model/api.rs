use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// The response when an error occurs with an API request
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDto {
    /// HTTP status code of the response
    pub status_code: u16,
    /// The error message
    pub message: String,
}

/// Reference to an existing row by id
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ConnectDto {
    pub id: String,
}

impl ConnectDto {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Offset and limit applied to list endpoints, after ordering by creation
#[derive(Clone, Copy, Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    /// Number of rows to skip
    pub skip: Option<u64>,
    /// Maximum number of rows to return
    pub take: Option<u64>,
}

impl ListParams {
    /// Limit to apply to the query. An offset without a limit is rejected by SQLite, so a
    /// lone `skip` gets the largest limit the backends accept.
    pub fn limit(&self) -> Option<u64> {
        match (self.skip, self.take) {
            (Some(_), None) => Some(i64::MAX as u64),
            (_, take) => take,
        }
    }
}
