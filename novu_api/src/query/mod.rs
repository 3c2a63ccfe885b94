mod common;
pub use self::common::{Query, QueryCommon, QueryParams, QueryValue, SortDirection};

mod change;
pub use self::change::ChangeQuery;

mod layout;
pub use self::layout::LayoutQuery;

mod listing;
pub use self::listing::{NotificationTemplateQuery, SubscriberQuery};

mod topic;
pub use self::topic::TopicQuery;
