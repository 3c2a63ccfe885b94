//! Shared query infrastructure: [`QueryParams`], the [`Query`] trait,
//! [`QueryCommon`] pagination fields, and [`SortDirection`].

use std::str::FromStr;

use url::Url;

/// A value that can appear in a query string.
///
/// Numbers are written in plain decimal and booleans as `true` / `false`.
pub trait QueryValue {
    fn to_query_value(&self) -> String;
}

macro_rules! display_query_value {
    ($($ty:ty),*) => {
        $(
            impl QueryValue for $ty {
                fn to_query_value(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

display_query_value!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, bool, String, str);

impl<T: QueryValue + ?Sized> QueryValue for &T {
    fn to_query_value(&self) -> String {
        (**self).to_query_value()
    }
}

/// Ordered query parameters. Unset values are kept in place but never
/// written, so a missing filter leaves no `name=` behind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(&'static str, Option<String>)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a parameter, keeping the caller's order.
    pub fn push<V: QueryValue>(mut self, name: &'static str, value: Option<V>) -> Self {
        self.pairs
            .push((name, value.map(|value| value.to_query_value())));
        self
    }

    /// Parameters that will actually be sent, in order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.pairs
            .iter()
            .filter_map(|(name, value)| value.as_deref().map(|value| (*name, value)))
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Appends the set parameters to `url`. A URL gets no `?` at all when
    /// nothing is set.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        if !self.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in self.iter() {
                pairs.append_pair(name, value);
            }
        }
        url
    }
}

/// Trait implemented by all query builders. Provides conversion to
/// [`QueryParams`] and shared builder methods for pagination.
pub trait Query {
    /// Returns this query's parameters in wire order.
    fn to_params(&self) -> QueryParams;

    /// Returns a mutable reference to the common query fields.
    fn get_common(&mut self) -> &mut QueryCommon;

    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url {
        self.to_params().add_to_url(url)
    }

    /// Sets the page number.
    fn with_page(mut self, page: u64) -> Self
    where
        Self: Sized,
    {
        self.get_common().page = Some(page);
        self
    }

    /// Sets the number of results per page. Endpoints name this `limit` or
    /// `pageSize`; each query writes the name its endpoint expects.
    fn with_page_size(mut self, page_size: u64) -> Self
    where
        Self: Sized,
    {
        self.get_common().page_size = Some(page_size);
        self
    }
}

/// Pagination fields shared by all list queries. Both are left to the
/// server's defaults when unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryCommon {
    pub page: Option<u64>,
    pub page_size: Option<u64>,
}

impl QueryCommon {
    /// Starts a parameter list with `page` followed by the page size under
    /// `size_name`.
    pub fn to_params(&self, size_name: &'static str) -> QueryParams {
        QueryParams::new()
            .push("page", self.page)
            .push(size_name, self.page_size)
    }
}

/// Sort order for list results, sent as `1` or `-1`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    /// Ascending order (oldest/smallest first).
    Asc = 1,
    /// Descending order (newest/largest first). This is the default.
    #[default]
    Desc = -1,
}

impl QueryValue for SortDirection {
    fn to_query_value(&self) -> String {
        (*self as i8).to_string()
    }
}

impl FromStr for SortDirection {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" | "asc" => Ok(SortDirection::Asc),
            "-1" | "desc" => Ok(SortDirection::Desc),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_params_are_omitted() {
        let url = Url::parse("https://example.com/changes").unwrap();
        let params = QueryParams::new()
            .push("page", Some(1u64))
            .push::<u64>("limit", None)
            .push("promoted", Some("promoted"));
        assert_eq!(
            params.add_to_url(&url).as_str(),
            "https://example.com/changes?page=1&promoted=promoted"
        );
    }

    #[test]
    fn empty_params_leave_url_untouched() {
        let url = Url::parse("https://example.com/topics").unwrap();
        let params = QueryParams::new().push::<&str>("key", None);
        assert!(params.is_empty());
        assert_eq!(params.add_to_url(&url).as_str(), "https://example.com/topics");
    }

    #[test]
    fn canonical_value_forms() {
        assert_eq!(true.to_query_value(), "true");
        assert_eq!(false.to_query_value(), "false");
        assert_eq!((-3i64).to_query_value(), "-3");
        assert_eq!(SortDirection::Asc.to_query_value(), "1");
        assert_eq!(SortDirection::Desc.to_query_value(), "-1");
    }

    #[test]
    fn sort_direction_from_str() {
        assert_eq!("asc".parse::<SortDirection>(), Ok(SortDirection::Asc));
        assert_eq!("-1".parse::<SortDirection>(), Ok(SortDirection::Desc));
        assert!("up".parse::<SortDirection>().is_err());
    }
}
