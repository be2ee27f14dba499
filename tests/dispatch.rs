use bytes::Bytes;
use http::StatusCode;
use http_body_util::BodyExt;
use pathwise::{Request, Response, Router};

fn request(method: &str, path: &str) -> http::Request<Bytes> {
    http::Request::builder()
        .method(method)
        .uri(path)
        .body(Bytes::new())
        .unwrap()
}

async fn send(router: &Router, method: &str, path: &str) -> (StatusCode, http::HeaderMap, String) {
    let res = router.handle(request(method, path)).await;
    let (parts, body) = res.into_parts();
    let body = body.collect().await.unwrap().to_bytes();
    (parts.status, parts.headers, String::from_utf8(body.to_vec()).unwrap())
}

fn bookshelf() -> Router {
    Router::new(["example.com", "localhost:3000", "books.local"])
        .get("/", |_: Request| async { "Hello, world!" })
        .unwrap()
        .get("/books/{id}", |req: Request| async move {
            format!("Book {}", req.param("id").unwrap_or_default())
        })
        .unwrap()
        .post("/users", |_: Request| async {
            Response::builder().status(StatusCode::CREATED).text("User created")
        })
        .unwrap()
        .put("/users/{id}", |req: Request| async move {
            format!("Updating user {}", req.param("id").unwrap_or_default())
        })
        .unwrap()
}

#[tokio::test]
async fn root_says_hello() {
    let (status, _, body) = send(&bookshelf(), "GET", "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Hello, world!");
}

#[tokio::test]
async fn book_id_is_captured() {
    let router = bookshelf();

    let (status, _, body) = send(&router, "GET", "/books/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Book 1");

    let (status, _, _) = send(&router, "GET", "/books").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _, _) = send(&router, "GET", "/books/1/chapters").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn put_accepts_any_segment_text() {
    let router = bookshelf();

    let (_, _, body) = send(&router, "PUT", "/users/123").await;
    assert_eq!(body, "Updating user 123");

    let (_, _, body) = send(&router, "PUT", "/users/ada").await;
    assert_eq!(body, "Updating user ada");
}

#[tokio::test]
async fn post_keeps_handler_status() {
    let (status, _, body) = send(&bookshelf(), "POST", "/users").await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, "User created");
}

#[tokio::test]
async fn empty_router_answers_not_found() {
    let router = Router::default();
    for (method, path) in [("GET", "/"), ("POST", "/users"), ("OPTIONS", "/x"), ("PATCH", "/a/b/c")] {
        let (status, headers, _) = send(&router, method, path).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(headers.get("access-control-allow-origin").is_none());
    }
}

#[tokio::test]
async fn origins_are_comma_joined() {
    let router = Router::new(["a", "b"]).get("/ping", |_: Request| async { "pong" }).unwrap();
    let (_, headers, _) = send(&router, "GET", "/ping").await;
    assert_eq!(headers["access-control-allow-origin"], "a,b");
}

#[tokio::test]
async fn cors_headers_identical_on_every_match() {
    let router = bookshelf()
        .options("/books/{id}", |_: Request| async { "unused" })
        .unwrap();

    let mut seen = Vec::new();
    for (method, path) in [("GET", "/"), ("GET", "/books/9"), ("PUT", "/users/1"), ("OPTIONS", "/books/9")] {
        let (_, headers, _) = send(&router, method, path).await;
        seen.push((
            headers["access-control-allow-origin"].clone(),
            headers["access-control-allow-methods"].clone(),
            headers["access-control-allow-headers"].clone(),
        ));
    }

    assert!(seen.windows(2).all(|w| w[0] == w[1]));
    let (origin, methods, headers) = &seen[0];
    assert_eq!(origin, "example.com,localhost:3000,books.local");
    assert_eq!(methods, "GET, POST, PUT, DELETE, OPTIONS");
    assert_eq!(headers, "Origin, Content-Type, Accept");
}

// Preflight is only answered where an OPTIONS route exists for the path.
#[tokio::test]
async fn preflight_requires_an_options_route() {
    let router = bookshelf();
    let (status, _, _) = send(&router, "OPTIONS", "/books/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let router = bookshelf()
        .options("/books/{id}", |_: Request| async { "unused" })
        .unwrap();
    let (status, headers, body) = send(&router, "OPTIONS", "/books/1").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());
    assert_eq!(headers["access-control-allow-methods"], "GET, POST, PUT, DELETE, OPTIONS");
}

#[tokio::test]
async fn repeated_dispatch_is_identical() {
    let router = bookshelf();
    let first = send(&router, "GET", "/books/42").await;
    for _ in 0..20 {
        assert_eq!(send(&router, "GET", "/books/42").await, first);
    }
}

#[tokio::test]
async fn concurrent_dispatch_shares_one_router() {
    let router = std::sync::Arc::new(bookshelf());

    let tasks: Vec<_> = (0..32)
        .map(|i| {
            let router = std::sync::Arc::clone(&router);
            tokio::spawn(async move {
                let (_, _, body) = send(&router, "GET", &format!("/books/{i}")).await;
                (i, body)
            })
        })
        .collect();

    for task in tasks {
        let (i, body) = task.await.unwrap();
        assert_eq!(body, format!("Book {i}"));
    }
}
