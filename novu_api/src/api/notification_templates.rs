//! Notification templates (workflows).

use crate::client::Client;
use crate::endpoint::{BodyRule, Endpoint, RequestDescriptor};
use crate::errors::Error;
use crate::query::{NotificationTemplateQuery, Query};
use crate::transport::HttpMethod;
use crate::types::{
    CreateNotificationTemplateRequest, NotificationTemplate, PaginatedResponse, Response,
    UpdateNotificationTemplateRequest, UpdateNotificationTemplateStatusRequest,
};

pub const LIST: Endpoint<(), PaginatedResponse<NotificationTemplate>> = Endpoint::new(
    "notification_templates",
    HttpMethod::Get,
    "/notification-templates",
    BodyRule::None,
);

pub const CREATE: Endpoint<CreateNotificationTemplateRequest, Response<NotificationTemplate>> =
    Endpoint::new(
        "create_notification_template",
        HttpMethod::Post,
        "/notification-templates",
        BodyRule::Required,
    );

pub const UPDATE: Endpoint<UpdateNotificationTemplateRequest, Response<NotificationTemplate>> =
    Endpoint::new(
        "update_notification_template",
        HttpMethod::Put,
        "/notification-templates/{templateId}",
        BodyRule::Required,
    );

pub const DELETE: Endpoint<(), Response<bool>> = Endpoint::new(
    "delete_notification_template",
    HttpMethod::Delete,
    "/notification-templates/{templateId}",
    BodyRule::None,
);

pub const GET: Endpoint<(), Response<NotificationTemplate>> = Endpoint::new(
    "notification_template",
    HttpMethod::Get,
    "/notification-templates/{templateId}",
    BodyRule::None,
);

pub const UPDATE_STATUS: Endpoint<
    UpdateNotificationTemplateStatusRequest,
    Response<NotificationTemplate>,
> = Endpoint::new(
    "update_notification_template_status",
    HttpMethod::Put,
    "/notification-templates/{templateId}/status",
    BodyRule::Required,
);

impl Client {
    pub async fn notification_templates(
        &self,
        query: &NotificationTemplateQuery,
    ) -> Result<PaginatedResponse<NotificationTemplate>, Error> {
        self.execute(&LIST, RequestDescriptor::new().query(query.to_params()))
            .await
    }

    pub async fn create_notification_template(
        &self,
        request: &CreateNotificationTemplateRequest,
    ) -> Result<Response<NotificationTemplate>, Error> {
        self.execute(&CREATE, RequestDescriptor::new().body(request))
            .await
    }

    pub async fn update_notification_template(
        &self,
        template_id: &str,
        request: &UpdateNotificationTemplateRequest,
    ) -> Result<Response<NotificationTemplate>, Error> {
        self.execute(
            &UPDATE,
            RequestDescriptor::new()
                .path("templateId", template_id)
                .body(request),
        )
        .await
    }

    pub async fn delete_notification_template(
        &self,
        template_id: &str,
    ) -> Result<Response<bool>, Error> {
        self.execute(
            &DELETE,
            RequestDescriptor::new().path("templateId", template_id),
        )
        .await
    }

    pub async fn notification_template(
        &self,
        template_id: &str,
    ) -> Result<Response<NotificationTemplate>, Error> {
        self.execute(&GET, RequestDescriptor::new().path("templateId", template_id))
            .await
    }

    /// Activates or deactivates a template.
    pub async fn update_notification_template_status(
        &self,
        template_id: &str,
        request: &UpdateNotificationTemplateStatusRequest,
    ) -> Result<Response<NotificationTemplate>, Error> {
        self.execute(
            &UPDATE_STATUS,
            RequestDescriptor::new()
                .path("templateId", template_id)
                .body(request),
        )
        .await
    }
}
