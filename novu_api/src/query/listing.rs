//! Plain page/limit queries for endpoints with no extra filters.

use super::common::{Query, QueryCommon, QueryParams};

/// Filters for `GET /notification-templates`.
#[derive(Debug, Clone, Default)]
pub struct NotificationTemplateQuery {
    pub common: QueryCommon,
}

impl Query for NotificationTemplateQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }

    fn to_params(&self) -> QueryParams {
        self.common.to_params("limit")
    }
}

/// Filters for `GET /subscribers`.
#[derive(Debug, Clone, Default)]
pub struct SubscriberQuery {
    pub common: QueryCommon,
}

impl Query for SubscriberQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }

    fn to_params(&self) -> QueryParams {
        self.common.to_params("limit")
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use super::*;

    #[test]
    fn test_listing_queries() {
        let url = Url::parse("https://example.com/notification-templates").unwrap();
        insta::assert_snapshot!(
            NotificationTemplateQuery::default()
                .with_page(1)
                .with_page_size(10)
                .add_to_url(&url)
                .to_string(),
            @"https://example.com/notification-templates?page=1&limit=10"
        );

        let url = Url::parse("https://example.com/subscribers").unwrap();
        insta::assert_snapshot!(
            SubscriberQuery::default().with_page(3).add_to_url(&url).to_string(),
            @"https://example.com/subscribers?page=3"
        );
    }
}
