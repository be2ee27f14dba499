//! Minimal pathwise example: a tiny book API with CORS preflights.
//!
//! Run with:
//!   cargo run --example bookshelf
//!
//! Try:
//!   curl -i http://localhost:3000/
//!   curl -i http://localhost:3000/books/1
//!   curl -i http://localhost:3000/books            # 404, no route
//!   curl -i -X PUT http://localhost:3000/users/123 -d '{"name":"ada"}'
//!   curl -i -X OPTIONS http://localhost:3000/users/123

use http::StatusCode;
use pathwise::{Request, Response, Router, Server};

#[tokio::main]
async fn main() -> Result<(), pathwise::Error> {
    tracing_subscriber::fmt::init();

    let app = Router::new(["http://localhost:8080", "https://books.example"])
        .get("/", hello)?
        .get("/books/{id}", get_book)?
        .post("/users", create_user)?
        .put("/users/{id}", update_user)?
        // Preflights are only answered where an OPTIONS route exists.
        .options("/users", preflight)?
        .options("/users/{id}", preflight)?;

    Server::bind("0.0.0.0:3000")?.serve(app).await
}

async fn hello(_req: Request) -> &'static str {
    "Hello, world!"
}

// GET /books/{id}
async fn get_book(req: Request) -> String {
    format!("Book {}", req.param("id").unwrap_or_default())
}

// POST /users → 201 Created
async fn create_user(req: Request) -> Response {
    if req.body().is_empty() {
        return Response::status(StatusCode::BAD_REQUEST);
    }

    Response::builder()
        .status(StatusCode::CREATED)
        .header("location", "/users/99")
        .json(r#"{"id":"99"}"#.as_bytes().to_vec())
}

// PUT /users/{id}
async fn update_user(req: Request) -> String {
    format!("Updating user {}", req.param("id").unwrap_or_default())
}

// Never called: the router answers OPTIONS itself once the route matches.
async fn preflight(_req: Request) -> StatusCode {
    StatusCode::NO_CONTENT
}
