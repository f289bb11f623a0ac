use super::*;

fn service(id: &str, active: bool, order: i64) -> Service {
    Service {
        id: id.to_owned(),
        title: format!("Service {id}"),
        description: String::new(),
        category: None,
        price: None,
        is_active: active,
        order,
    }
}

#[test]
fn list_body_accepts_wrapped_shape() {
    let body: ListBody<Service> =
        serde_json::from_str(r#"{"data":[{"_id":"s1","title":"A"}]}"#).unwrap();
    assert_eq!(body.into_vec().len(), 1);
}

#[test]
fn list_body_accepts_bare_array() {
    let body: ListBody<Service> = serde_json::from_str(r#"[{"_id":"s1","title":"A"}]"#).unwrap();
    assert_eq!(body.into_vec().len(), 1);
}

#[test]
fn active_sorted_filters_inactive_and_orders() {
    let items = vec![
        service("s3", true, 3),
        service("s1", true, 1),
        service("hidden", false, 0),
        service("s2", true, 2),
    ];
    let sorted = active_sorted(items, |s| s.is_active, |s| s.order);
    let ids: Vec<&str> = sorted.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, ["s1", "s2", "s3"]);
}

#[test]
fn active_sorted_on_empty_list_is_empty() {
    let sorted = active_sorted(Vec::<Service>::new(), |s| s.is_active, |s| s.order);
    assert!(sorted.is_empty());
}
