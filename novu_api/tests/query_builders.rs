use novu_api::{
    ChangeQuery, LayoutQuery, NotificationTemplateQuery, Query, SortDirection, SubscriberQuery,
    TopicQuery,
};
use url::Url;

fn base(path: &str) -> Url {
    Url::parse(&format!("https://api.novu.co/v1{}", path)).unwrap()
}

#[test]
fn change_query_all_fields() {
    let url = ChangeQuery::default()
        .with_page(2)
        .with_page_size(50)
        .with_promoted("false")
        .add_to_url(&base("/changes"));
    insta::assert_snapshot!(url.to_string(), @"https://api.novu.co/v1/changes?page=2&limit=50&promoted=false");
}

#[test]
fn topic_query_key_only() {
    let url = TopicQuery::default()
        .with_key("product-updates")
        .add_to_url(&base("/topics"));
    insta::assert_snapshot!(url.to_string(), @"https://api.novu.co/v1/topics?key=product-updates");
}

#[test]
fn layout_query_sorting() {
    let url = LayoutQuery::default()
        .with_page(0)
        .with_page_size(5)
        .with_sort_by("createdAt")
        .with_order_by(SortDirection::Asc)
        .add_to_url(&base("/layouts"));
    insta::assert_snapshot!(url.to_string(), @"https://api.novu.co/v1/layouts?page=0&pageSize=5&sortBy=createdAt&orderBy=1");
}

#[test]
fn listing_queries_use_limit() {
    let url = NotificationTemplateQuery::default()
        .with_page_size(25)
        .add_to_url(&base("/notification-templates"));
    insta::assert_snapshot!(url.to_string(), @"https://api.novu.co/v1/notification-templates?limit=25");

    let url = SubscriberQuery::default()
        .with_page(1)
        .with_page_size(10)
        .add_to_url(&base("/subscribers"));
    insta::assert_snapshot!(url.to_string(), @"https://api.novu.co/v1/subscribers?page=1&limit=10");
}

#[test]
fn default_queries_add_nothing() {
    let url = SubscriberQuery::default().add_to_url(&base("/subscribers"));
    assert_eq!(url.as_str(), "https://api.novu.co/v1/subscribers");
    assert!(TopicQuery::default().to_params().is_empty());
}

#[test]
fn query_values_are_form_encoded() {
    let url = TopicQuery::default()
        .with_key("a&b c")
        .add_to_url(&base("/topics"));
    assert_eq!(url.as_str(), "https://api.novu.co/v1/topics?key=a%26b+c");
}
