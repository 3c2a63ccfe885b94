use super::common::{Query, QueryCommon, QueryParams, SortDirection};

/// Filters for `GET /layouts`.
#[derive(Debug, Clone, Default)]
pub struct LayoutQuery {
    pub common: QueryCommon,
    /// Field to sort on, e.g. `createdAt`.
    pub sort_by: Option<String>,
    pub order_by: Option<SortDirection>,
}

impl Query for LayoutQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }

    fn to_params(&self) -> QueryParams {
        self.common
            .to_params("pageSize")
            .push("sortBy", self.sort_by.as_deref())
            .push("orderBy", self.order_by)
    }
}

impl LayoutQuery {
    pub fn with_sort_by(mut self, sort_by: &str) -> Self {
        self.sort_by = Some(sort_by.to_string());
        self
    }

    pub fn with_order_by(mut self, order_by: SortDirection) -> Self {
        self.order_by = Some(order_by);
        self
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use super::*;

    #[test]
    fn test_layout_query() {
        let url = Url::parse("https://example.com/layouts").unwrap();

        insta::assert_snapshot!(
            LayoutQuery::default()
                .with_page(1)
                .with_page_size(10)
                .with_sort_by("sortBy")
                .with_order_by(SortDirection::Asc)
                .add_to_url(&url)
                .to_string(),
            @"https://example.com/layouts?page=1&pageSize=10&sortBy=sortBy&orderBy=1"
        );

        insta::assert_snapshot!(
            LayoutQuery::default()
                .with_order_by(SortDirection::Desc)
                .add_to_url(&url)
                .to_string(),
            @"https://example.com/layouts?orderBy=-1"
        );
    }
}
