use http::Method;
use resroute::{
    Dispatcher, HandlerDesc, ParamBinding, ParamTarget, ResourceDesc, ResourceType,
    ReturnTypeMeta, RouteTableBuilder, Router, RouterError,
};

use tracing_util::TestTracing;

fn accept(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|t| t.to_string()).collect()
}

fn project_resource() -> ResourceDesc {
    ResourceDesc::rooted("Project", "/projects")
        .handler(
            HandlerDesc::operation("find_project_by_id", Method::GET)
                .path("{id}")
                .param(ParamBinding::path("id", ParamTarget::Long)),
        )
        .handler(
            HandlerDesc::operation("all_projects", Method::GET)
                .param(ParamBinding::query("start", ParamTarget::Int))
                .param(ParamBinding::query("size", ParamTarget::Int)),
        )
}

fn seller_resource() -> ResourceDesc {
    ResourceDesc::rooted("Seller", "/sellers")
        .handler(
            HandlerDesc::operation("find_by_id_any", Method::GET)
                .path("{id}")
                .produces("*/*")
                .param(ParamBinding::path("id", ParamTarget::Long)),
        )
        .handler(
            HandlerDesc::operation("find_by_id_json", Method::GET)
                .path("{id}")
                .produces("application/json")
                .param(ParamBinding::path("id", ParamTarget::Long)),
        )
        .handler(
            HandlerDesc::operation("find_by_id_xml", Method::GET)
                .path("{id}")
                .produces("application/xml")
                .param(ParamBinding::path("id", ParamTarget::Long)),
        )
}

#[test]
fn test_longest_template_wins_over_structural_prefix() {
    let _tracing = TestTracing::init();
    let table = RouteTableBuilder::new()
        .resource(project_resource())
        .build()
        .unwrap();
    let router = Router::new(&table);

    let route = router
        .match_route(&Method::GET, "/projects/1", &[])
        .unwrap();
    assert_eq!(route.key.template, "/projects/{id}");
    assert_eq!(route.handler.handler_name, "find_project_by_id");

    let route = router.match_route(&Method::GET, "/projects", &[]).unwrap();
    assert_eq!(route.key.template, "/projects");
    assert_eq!(route.handler.handler_name, "all_projects");
}

#[test]
fn test_literal_template_requires_exact_path() {
    let table = RouteTableBuilder::new()
        .resource(project_resource())
        .build()
        .unwrap();
    let router = Router::new(&table);

    let err = router
        .match_route(&Method::GET, "/projects-abc/1", &[])
        .unwrap_err();
    assert!(matches!(
        err,
        RouterError::RouteNotFound { ref path, .. } if path == "/projects-abc/1"
    ));
}

#[test]
fn test_prefixed_paths_do_not_match() {
    // Templates match the whole path, not a suffix of it.
    let table = RouteTableBuilder::new()
        .resource(project_resource())
        .build()
        .unwrap();
    let dispatcher = Dispatcher::new(table);

    let err = dispatcher
        .resolve(Method::GET, "/my/projects", &[], "start=1&size=2")
        .unwrap_err();
    assert!(matches!(
        err,
        RouterError::RouteNotFound { ref path, .. } if path == "/my/projects"
    ));

    let err = dispatcher
        .resolve(Method::GET, "/evil/projects/1", &[], "")
        .unwrap_err();
    assert!(matches!(err, RouterError::RouteNotFound { .. }));
}

#[test]
fn test_verb_qualified_matching() {
    let students = ResourceDesc::rooted("Student", "/students")
        .handler(HandlerDesc::operation("create_student", Method::POST));
    let table = RouteTableBuilder::new().resource(students).build().unwrap();
    let router = Router::new(&table);

    let route = router
        .match_route(&Method::POST, "/students", &[])
        .unwrap();
    assert_eq!(route.handler.handler_name, "create_student");

    let err = router.match_route(&Method::GET, "/students", &[]).unwrap_err();
    assert!(matches!(err, RouterError::RouteNotFound { .. }));
}

#[test]
fn test_locator_entries_never_serve_requests() {
    // A resource declaring only a locator has no request-servable entry.
    let projects = ResourceDesc::rooted("Project", "/projects").handler(
        HandlerDesc::locator(
            "members_locator",
            ReturnTypeMeta::Resource(ResourceType::new("Member")),
        )
        .path("members"),
    );
    let table = RouteTableBuilder::new().resource(projects).build().unwrap();
    let router = Router::new(&table);

    let err = router
        .match_route(&Method::GET, "/projects/members", &[])
        .unwrap_err();
    assert!(matches!(err, RouterError::RouteNotFound { .. }));
}

#[test]
fn test_exact_media_match_preferred_over_wildcard() {
    let table = RouteTableBuilder::new()
        .resource(seller_resource())
        .build()
        .unwrap();
    let router = Router::new(&table);

    let route = router
        .match_route(&Method::GET, "/sellers/7", &accept(&["application/json"]))
        .unwrap();
    assert_eq!(route.handler.handler_name, "find_by_id_json");

    let route = router
        .match_route(&Method::GET, "/sellers/7", &accept(&["application/xml"]))
        .unwrap();
    assert_eq!(route.handler.handler_name, "find_by_id_xml");
}

#[test]
fn test_absent_accept_defaults_to_wildcard() {
    let table = RouteTableBuilder::new()
        .resource(seller_resource())
        .build()
        .unwrap();
    let router = Router::new(&table);

    let route = router.match_route(&Method::GET, "/sellers/7", &[]).unwrap();
    assert_eq!(route.handler.handler_name, "find_by_id_any");
}

#[test]
fn test_unmatched_media_type_is_not_acceptable() {
    // JSON-only handler, XML-only accept list.
    let sellers = ResourceDesc::rooted("Seller", "/sellers").handler(
        HandlerDesc::operation("find_by_id_json", Method::GET)
            .path("{id}")
            .produces("application/json")
            .param(ParamBinding::path("id", ParamTarget::Long)),
    );
    let table = RouteTableBuilder::new().resource(sellers).build().unwrap();
    let router = Router::new(&table);

    let err = router
        .match_route(&Method::GET, "/sellers/7", &accept(&["application/xml"]))
        .unwrap_err();
    assert!(matches!(
        err,
        RouterError::MediaTypeNotAcceptable { ref path } if path == "/sellers/7"
    ));
}

#[test]
fn test_wildcard_accept_matches_any_produced_type() {
    let sellers = ResourceDesc::rooted("Seller", "/sellers").handler(
        HandlerDesc::operation("find_by_id_json", Method::GET)
            .path("{id}")
            .produces("application/json")
            .param(ParamBinding::path("id", ParamTarget::Long)),
    );
    let table = RouteTableBuilder::new().resource(sellers).build().unwrap();
    let router = Router::new(&table);

    let route = router
        .match_route(&Method::GET, "/sellers/7", &accept(&["*/*"]))
        .unwrap();
    assert_eq!(route.handler.handler_name, "find_by_id_json");
}

#[test]
fn test_router_is_shareable_across_threads() {
    let table = RouteTableBuilder::new()
        .resource(project_resource())
        .build()
        .unwrap();
    let dispatcher = std::sync::Arc::new(Dispatcher::new(table));

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let dispatcher = std::sync::Arc::clone(&dispatcher);
            std::thread::spawn(move || {
                let path = format!("/projects/{i}");
                let result = dispatcher.resolve(Method::GET, &path, &[], "").unwrap();
                assert_eq!(result.handler_name, "find_project_by_id");
                assert_eq!(
                    result.get_arg("id").and_then(|v| v.as_long()),
                    Some(i64::from(i))
                );
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
