use super::common::{Query, QueryCommon, QueryParams};

/// Filters for `GET /topics`.
#[derive(Debug, Clone, Default)]
pub struct TopicQuery {
    pub common: QueryCommon,
    /// Exact topic key to look for.
    pub key: Option<String>,
}

impl Query for TopicQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }

    fn to_params(&self) -> QueryParams {
        self.common
            .to_params("pageSize")
            .push("key", self.key.as_deref())
    }
}

impl TopicQuery {
    pub fn with_key(mut self, key: &str) -> Self {
        self.key = Some(key.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use super::*;

    #[test]
    fn test_topic_query() {
        let url = Url::parse("https://example.com/topics").unwrap();

        insta::assert_snapshot!(
            TopicQuery::default()
                .with_page(1)
                .with_page_size(10)
                .with_key("key")
                .add_to_url(&url)
                .to_string(),
            @"https://example.com/topics?page=1&pageSize=10&key=key"
        );

        insta::assert_snapshot!(
            TopicQuery::default().add_to_url(&url).to_string(),
            @"https://example.com/topics"
        );
    }
}
