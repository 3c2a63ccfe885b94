//! Event triggers.

use crate::client::Client;
use crate::endpoint::{BodyRule, Endpoint, RequestDescriptor};
use crate::errors::Error;
use crate::transport::HttpMethod;
use crate::types::{
    BroadcastEventRequest, BulkTriggerEventRequest, Response, TriggerEventRequest,
    TriggerResponse,
};

pub const TRIGGER: Endpoint<TriggerEventRequest, Response<TriggerResponse>> = Endpoint::new(
    "trigger_event",
    HttpMethod::Post,
    "/events/trigger",
    BodyRule::Required,
);

pub const BULK_TRIGGER: Endpoint<BulkTriggerEventRequest, Response<Vec<TriggerResponse>>> =
    Endpoint::new(
        "bulk_trigger_events",
        HttpMethod::Post,
        "/events/trigger/bulk",
        BodyRule::Required,
    );

pub const BROADCAST: Endpoint<BroadcastEventRequest, Response<TriggerResponse>> = Endpoint::new(
    "broadcast_event",
    HttpMethod::Post,
    "/events/trigger/broadcast",
    BodyRule::Required,
);

pub const CANCEL: Endpoint<(), Response<bool>> = Endpoint::new(
    "cancel_triggered_event",
    HttpMethod::Delete,
    "/events/trigger/{transactionId}",
    BodyRule::None,
);

impl Client {
    /// Starts the named workflow for the request's recipients.
    pub async fn trigger_event(
        &self,
        request: &TriggerEventRequest,
    ) -> Result<Response<TriggerResponse>, Error> {
        request.validate()?;
        self.execute(&TRIGGER, RequestDescriptor::new().body(request))
            .await
    }

    /// Triggers several events in one call. Results come back in request
    /// order.
    pub async fn bulk_trigger_events(
        &self,
        request: &BulkTriggerEventRequest,
    ) -> Result<Response<Vec<TriggerResponse>>, Error> {
        for event in &request.events {
            event.validate()?;
        }
        self.execute(&BULK_TRIGGER, RequestDescriptor::new().body(request))
            .await
    }

    pub async fn broadcast_event(
        &self,
        request: &BroadcastEventRequest,
    ) -> Result<Response<TriggerResponse>, Error> {
        self.execute(&BROADCAST, RequestDescriptor::new().body(request))
            .await
    }

    /// Cancels delayed or digested steps of a triggered event.
    pub async fn cancel_triggered_event(&self, transaction_id: &str) -> Result<Response<bool>, Error> {
        self.execute(
            &CANCEL,
            RequestDescriptor::new().path("transactionId", transaction_id),
        )
        .await
    }
}
