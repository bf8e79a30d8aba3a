use brace_router::{shape, Kind, Record, Registry, RouteError, Router, Value};

fn values(record: &Record) -> Vec<Value> {
    record.iter().cloned().collect()
}

#[test]
fn static_routes() {
    let mut router: Router<usize> = Router::new();
    router
        .route("/", shape![], 1)
        .route("/foo", shape![], 2)
        .route("/foo/bar", shape![], 3);

    let (data, record) = router.dispatch("/foo/").unwrap();
    assert_eq!(*data, 2);
    assert!(record.is_empty());

    assert_eq!(*router.dispatch("/foo").unwrap().0, 2);
    assert_eq!(*router.dispatch("/").unwrap().0, 1);
    assert_eq!(*router.dispatch("/foo/bar").unwrap().0, 3);
    assert!(router.dispatch("/baz").is_none());
}

#[test]
fn last_registered_route_wins() {
    let mut router: Router<usize> = Router::new();
    router
        .route("/", shape![], 1)
        // shadowed by the segment route below
        .route("/foo", shape![], 2)
        .route("/{}", shape![Text], 3)
        .route("/foo/{}", shape![Text], 4);

    assert_eq!(*router.dispatch("/").unwrap().0, 1);

    let (data, record) = router.dispatch("/foo").unwrap();
    assert_eq!(*data, 3);
    assert_eq!(values(&record), vec![Value::Text("foo".into())]);

    let (data, record) = router.dispatch("/foo/bar").unwrap();
    assert_eq!(*data, 4);
    assert_eq!(values(&record), vec![Value::Text("bar".into())]);
}

#[test]
fn span_routes() {
    let mut router: Router<usize> = Router::new();
    router
        .route("/", shape![], 1)
        .route("/{/}", shape![Text], 2)
        .route("/foo/{/}", shape![Text], 3)
        .route("/quux/{/?}", shape![Text], 4);

    assert_eq!(*router.dispatch("/").unwrap().0, 1);

    let (data, record) = router.dispatch("/foo").unwrap();
    assert_eq!(*data, 2);
    assert_eq!(record[0].as_text(), Some("foo"));

    let (_, record) = router.dispatch("/bar/foo/baz").unwrap();
    assert_eq!(record[0].as_text(), Some("bar/foo/baz"));

    let (data, record) = router.dispatch("/foo/bar").unwrap();
    assert_eq!(*data, 3);
    assert_eq!(record[0].as_text(), Some("bar"));

    let (_, record) = router.dispatch("/foo/bar/baz/").unwrap();
    assert_eq!(record[0].as_text(), Some("bar/baz"));

    // optional span binds "" when the remainder is absent
    let (data, record) = router.dispatch("/quux").unwrap();
    assert_eq!(*data, 4);
    assert_eq!(record[0].as_text(), Some(""));
    assert_eq!(router.dispatch("/quux/").unwrap().1[0].as_text(), Some(""));

    let (_, record) = router.dispatch("/quux/frob/").unwrap();
    assert_eq!(record[0].as_text(), Some("frob"));
}

#[test]
fn required_span_needs_a_segment() {
    let mut router: Router<usize> = Router::new();
    router.route("/files/{/}", shape![Text], 1);

    assert!(router.dispatch("/files").is_none());
    assert!(router.dispatch("/files/").is_none());
    assert_eq!(
        router.dispatch("/files/a/b").unwrap().1[0].as_text(),
        Some("a/b")
    );
}

#[test]
fn typed_captures() {
    let mut router: Router<&'static str> = Router::new();
    router
        .route("/flag/{}", shape![Bool], "bool")
        .route("/id/{}", shape![I64], "int")
        .route("/eps/{}", shape![F64], "float");

    let (_, record) = router.dispatch("/flag/false").unwrap();
    assert_eq!(record[0], Value::Bool(false));
    let (_, record) = router.dispatch("/flag/true").unwrap();
    assert_eq!(record[0], Value::Bool(true));

    let (_, record) = router.dispatch("/id/-42").unwrap();
    assert_eq!(record[0], Value::I64(-42));

    let (_, record) = router.dispatch("/eps/1e-17").unwrap();
    assert_eq!(record[0], Value::F64(1e-17));

    // a parse failure is a fallthrough, not an error
    assert!(router.dispatch("/id/not-a-number").is_none());
}

#[test]
fn parse_failure_falls_through_to_earlier_routes() {
    let mut router: Router<&'static str> = Router::new();
    router
        .route("/{}", shape![Bool], "bool")
        .route("/{}", shape![F64], "float")
        .route("/{}", shape![I64], "int");

    // tried in reverse order: int, float, bool
    assert_eq!(*router.dispatch("/12").unwrap().0, "int");
    assert_eq!(*router.dispatch("/3.5").unwrap().0, "float");
    assert_eq!(*router.dispatch("/true").unwrap().0, "bool");
    assert!(router.dispatch("/neither").is_none());
}

#[test]
fn multi_field_record() {
    let mut router: Router<usize> = Router::new();
    router.route("/u/{}/p/{}", shape![Text, U32], 1);

    let (_, record) = router.dispatch("/u/alice/p/7").unwrap();
    assert_eq!(
        values(&record),
        vec![Value::Text("alice".into()), Value::U32(7)]
    );
    assert_eq!(record.len(), 2);
    assert_eq!(record.get(2), None);
}

#[test]
fn mounted_router() {
    let mut router: Router<usize> = Router::new();
    router.mount("/api", |api| {
        api.route("/{}", shape![Text], 1);
    });

    let (data, record) = router.dispatch("/api/widgets").unwrap();
    assert_eq!(*data, 1);
    assert_eq!(record[0].as_text(), Some("widgets"));

    assert!(router.dispatch("/other").is_none());
}

#[test]
fn nested_mounts() {
    let mut router: Router<usize> = Router::new();
    router.mount("/v1/", |v1| {
        v1.mount("/u", |u| {
            u.route("/{}/p/{}", shape![Text, I32], 1);
        });
    });

    let (data, record) = router.dispatch("/v1/u/asd/p/9").unwrap();
    assert_eq!(*data, 1);
    assert_eq!(
        values(&record),
        vec![Value::Text("asd".into()), Value::I32(9)]
    );
}

#[test]
fn matched_mount_commits_the_request() {
    let mut router: Router<usize> = Router::new();
    router.route("/api/special", shape![], 1);
    router.mount("/api", |api| {
        api.route("/widgets", shape![], 2);
    });

    assert_eq!(*router.dispatch("/api/widgets").unwrap().0, 2);
    // the mount matched first; the child misses and the earlier
    // parent route is never retried
    assert!(router.dispatch("/api/special").is_none());
}

#[test]
fn dispatch_is_idempotent() {
    let mut router: Router<usize> = Router::new();
    router.route("/p/{}", shape![I64], 1);

    let first = router.dispatch("/p/5").unwrap();
    let second = router.dispatch("/p/5").unwrap();
    assert_eq!(first.0, second.0);
    assert_eq!(first.1, second.1);
}

#[test]
fn arity_mismatch() {
    let mut router: Router<usize> = Router::new();
    assert_eq!(
        router.try_route("/{}", shape![], 1).unwrap_err(),
        RouteError::TooManyPlaceholders
    );
    assert_eq!(
        router.try_route("/x", shape![Text], 1).unwrap_err(),
        RouteError::TooFewPlaceholders
    );
    assert!(router.try_route("/{}/{}", shape![Text, I64], 1).is_ok());
}

#[test]
fn template_errors() {
    let mut router: Router<usize> = Router::new();
    assert_eq!(
        router.try_route("/{", shape![], 1).unwrap_err(),
        RouteError::UnmatchedBrace
    );
    assert_eq!(
        router.try_route("/{x}", shape![Text], 1).unwrap_err(),
        RouteError::InvalidSpecifier('x')
    );
}

#[test]
fn unsupported_kind() {
    let mut registry = Registry::empty();
    registry.set(Kind::Text, |s| Some(Value::Text(s.to_owned())));

    let mut router: Router<usize> = Router::with_registry(registry);
    assert!(router.try_route("/{}", shape![Text], 1).is_ok());
    assert_eq!(
        router.try_route("/{}", shape![I64], 2).unwrap_err(),
        RouteError::UnsupportedKind(Kind::I64)
    );
}

#[test]
fn mount_prefix_must_be_placeholder_free() {
    let mut router: Router<usize> = Router::new();
    let err = router.try_mount("/u/{}", |_| {}).unwrap_err();
    assert_eq!(err, RouteError::TooManyPlaceholders);
}
