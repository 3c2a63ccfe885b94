use super::common::{Query, QueryCommon, QueryParams};

/// Filters for `GET /changes`.
#[derive(Debug, Clone, Default)]
pub struct ChangeQuery {
    pub common: QueryCommon,
    /// `"true"` / `"false"` as the API expects; promoted changes have already
    /// been applied to the target environment.
    pub promoted: Option<String>,
}

impl Query for ChangeQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }

    fn to_params(&self) -> QueryParams {
        self.common
            .to_params("limit")
            .push("promoted", self.promoted.as_deref())
    }
}

impl ChangeQuery {
    pub fn with_promoted(mut self, promoted: &str) -> Self {
        self.promoted = Some(promoted.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use super::*;

    #[test]
    fn test_change_query() {
        let url = Url::parse("https://example.com/changes").unwrap();

        insta::assert_snapshot!(
            ChangeQuery::default()
                .with_page(1)
                .with_page_size(10)
                .with_promoted("promoted")
                .add_to_url(&url)
                .to_string(),
            @"https://example.com/changes?page=1&limit=10&promoted=promoted"
        );

        insta::assert_snapshot!(
            ChangeQuery::default().with_promoted("false").add_to_url(&url).to_string(),
            @"https://example.com/changes?promoted=false"
        );
    }
}
