//! Tests for the route table: ordering, shadowing, and method separation.

use http::Method;
use rxroute::{Handler, HandlerSignature, Router};

fn named_handler(name: &str) -> Handler<String> {
    let name = name.to_string();
    Handler::new(HandlerSignature::empty(), move |_| Ok(name.clone()))
}

fn handler_name(router: &Router<String>, method: Method, path: &str) -> Option<String> {
    router
        .find(&method, path)
        .map(|(entry, _)| entry.handler.invoke(Default::default()).unwrap())
}

#[test]
fn test_find_matches_method_and_path() {
    let mut router = Router::new();
    router
        .add(Method::GET, "/pets", named_handler("list_pets"), None)
        .unwrap();
    router
        .add(Method::POST, "/pets", named_handler("add_pet"), None)
        .unwrap();

    assert_eq!(
        handler_name(&router, Method::GET, "/pets").as_deref(),
        Some("list_pets")
    );
    assert_eq!(
        handler_name(&router, Method::POST, "/pets").as_deref(),
        Some("add_pet")
    );
    assert!(router.find(&Method::DELETE, "/pets").is_none());
    assert!(router.find(&Method::GET, "/users").is_none());
}

#[test]
fn test_first_registered_route_wins_on_overlap() {
    let mut router = Router::new();
    router
        .add(Method::GET, r"/pets/(?P<id>\d+)", named_handler("by_id"), None)
        .unwrap();
    router
        .add(Method::GET, r"/pets/.*", named_handler("catch_all"), None)
        .unwrap();

    // Both patterns match; registration order decides, not specificity.
    assert_eq!(
        handler_name(&router, Method::GET, "/pets/1").as_deref(),
        Some("by_id")
    );
}

#[test]
fn test_specific_route_registered_later_is_shadowed() {
    let mut router = Router::new();
    router
        .add(Method::GET, r"/pets/.*", named_handler("catch_all"), None)
        .unwrap();
    router
        .add(Method::GET, r"/pets/(?P<id>\d+)", named_handler("by_id"), None)
        .unwrap();

    assert_eq!(
        handler_name(&router, Method::GET, "/pets/1").as_deref(),
        Some("catch_all")
    );
}

#[test]
fn test_duplicate_registration_keeps_both_entries() {
    let mut router = Router::new();
    router
        .add(Method::GET, "/dup", named_handler("first"), None)
        .unwrap();
    router
        .add(Method::GET, "/dup", named_handler("second"), None)
        .unwrap();

    assert_eq!(router.len(), 2);
    assert_eq!(
        handler_name(&router, Method::GET, "/dup").as_deref(),
        Some("first")
    );
}

#[test]
fn test_routes_for_preserves_registration_order() {
    let mut router = Router::new();
    router
        .add(Method::GET, "/a", named_handler("a"), None)
        .unwrap();
    router
        .add(Method::POST, "/b", named_handler("b"), None)
        .unwrap();
    router
        .add(Method::GET, "/c", named_handler("c"), None)
        .unwrap();

    let templates: Vec<&str> = router
        .routes_for(&Method::GET)
        .map(|entry| entry.pattern.template())
        .collect();
    assert_eq!(templates, vec!["/a", "/c"]);
}

#[test]
fn test_unsupported_method_is_not_stored() {
    let mut router = Router::new();
    router
        .add(Method::OPTIONS, "/anything", named_handler("opts"), None)
        .unwrap();
    router
        .add(Method::HEAD, "/anything", named_handler("head"), None)
        .unwrap();

    assert!(router.is_empty());
}

#[test]
fn test_capture_groups_flow_through_find() {
    let mut router = Router::new();
    router
        .add(
            Method::GET,
            r"/users/(?P<id>\d+)",
            named_handler("get_user"),
            None,
        )
        .unwrap();

    let (_, captures) = router.find(&Method::GET, "/users/31").unwrap();
    assert_eq!(captures.get("id").map(String::as_str), Some("31"));
}
