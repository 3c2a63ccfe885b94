//! Changes: pending edits waiting to be promoted to another environment.

use crate::client::Client;
use crate::endpoint::{BodyRule, Endpoint, RequestDescriptor};
use crate::errors::Error;
use crate::query::{ChangeQuery, Query};
use crate::transport::HttpMethod;
use crate::types::{Change, ChangesRequest, PaginatedResponse, Response};

pub const LIST: Endpoint<(), PaginatedResponse<Change>> =
    Endpoint::new("changes", HttpMethod::Get, "/changes", BodyRule::None);

pub const COUNT: Endpoint<(), Response<u64>> =
    Endpoint::new("changes_count", HttpMethod::Get, "/changes/count", BodyRule::None);

pub const APPLY_BULK: Endpoint<ChangesRequest, Response<Vec<Change>>> = Endpoint::new(
    "apply_bulk_changes",
    HttpMethod::Post,
    "/changes/bulk/apply",
    BodyRule::Required,
);

pub const APPLY: Endpoint<(), Response<Vec<Change>>> = Endpoint::new(
    "apply_change",
    HttpMethod::Post,
    "/changes/{changeId}/apply",
    BodyRule::None,
);

impl Client {
    /// Fetches a page of changes.
    pub async fn changes(&self, query: &ChangeQuery) -> Result<PaginatedResponse<Change>, Error> {
        self.execute(&LIST, RequestDescriptor::new().query(query.to_params()))
            .await
    }

    /// Number of changes not yet applied.
    pub async fn changes_count(&self) -> Result<Response<u64>, Error> {
        self.execute(&COUNT, RequestDescriptor::new()).await
    }

    pub async fn apply_bulk_changes(
        &self,
        request: &ChangesRequest,
    ) -> Result<Response<Vec<Change>>, Error> {
        self.execute(&APPLY_BULK, RequestDescriptor::new().body(request))
            .await
    }

    pub async fn apply_change(&self, change_id: &str) -> Result<Response<Vec<Change>>, Error> {
        self.execute(&APPLY, RequestDescriptor::new().path("changeId", change_id))
            .await
    }
}
