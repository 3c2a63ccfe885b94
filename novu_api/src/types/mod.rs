mod envelope;
pub use self::envelope::{
    Acknowledgement, Bare, Envelope, EnvelopeKind, PaginatedResponse, Response,
};

mod change;
pub use self::change::{Change, ChangesRequest};

mod environment;
pub use self::environment::{
    ApiKey, CreateEnvironmentRequest, Dns, Environment, UpdateEnvironmentRequest, Widget,
};

mod integration;
pub use self::integration::{Credentials, Integration, IntegrationRequest};

mod layout;
pub use self::layout::{CreateLayoutRequest, CreateLayoutResponse, Layout, UpdateLayoutRequest};

mod notification_template;
pub use self::notification_template::{
    CreateNotificationTemplateRequest, FilterCondition, NotificationGroup, NotificationTemplate,
    PreferenceSettings, Step, StepFilter, StepMetadata, Trigger, TriggerVariable,
    UpdateNotificationTemplateRequest, UpdateNotificationTemplateStatusRequest,
};

mod topic;
pub use self::topic::{
    AddSubscribersResponse, CheckTopicSubscriberResponse, CreateTopicRequest, CreateTopicResponse,
    FailedSubscribers, RenameTopicRequest, SubscriberList, Topic,
};

mod subscriber;
pub use self::subscriber::{
    BulkCreateSubscriberResponse, BulkSubscriberRequest, Channel, ChannelCredentials,
    FailedSubscriber, Subscriber, SubscriberDeleteResponse, SubscriberRef, SubscriberRequest,
    UpdateSubscriberCredentialsRequest, UpdateSubscriberOnlineStatusRequest,
    UpdateSubscriberRequest,
};

mod event;
pub use self::event::{
    Actor, BroadcastEventRequest, BulkTriggerEventRequest, RecipientKind, Recipients, Tenant,
    TenantDetails, TopicRecipient, TriggerEventRequest, TriggerResponse,
};
