use brace_router::hyper_service::BoxHandler;
use brace_router::{shape, Record, Router};

use std::convert::Infallible as Never;

use hyper::service::make_service_fn;
use hyper::{Body, Request, Response};

async fn hello(_: Request<Body>, record: Record) -> Result<Response<Body>, Never> {
    let name = record[0].as_text().unwrap_or("");
    Ok(Response::new(Body::from(format!("hello, {}!", name))))
}

async fn post(_: Request<Body>, record: Record) -> Result<Response<Body>, Never> {
    let id = record[0].as_i64().unwrap_or(0);
    Ok(Response::new(Body::from(format!("post #{}", id))))
}

async fn file(_: Request<Body>, record: Record) -> Result<Response<Body>, Never> {
    let path = record[0].as_text().unwrap_or("");
    Ok(Response::new(Body::from(format!("access file: {}", path))))
}

#[tokio::main]
async fn main() {
    let mut router: Router<BoxHandler> = Router::new();
    router
        .handle("/hello/{}", shape![Text], hello)
        .mount("/api/v1", |api| {
            api.handle("/post/{}", shape![I64], post)
                .handle("/file/{/}", shape![Text], file);
        });

    let service = router.into_service().into_shared();

    let make = make_service_fn(move |_| {
        let service = service.clone();
        async move { Ok::<_, Never>(service) }
    });

    let addr = "127.0.0.1:3000";

    let server = hyper::Server::bind(&addr.parse().unwrap()).serve(make);

    println!("Server is listening on: http://{}", addr);
    println!("hello: http://{}/hello/world", addr);
    println!("post:  http://{}/api/v1/post/42", addr);
    println!("file:  http://{}/api/v1/file/path/to/public/file", addr);
    println!("404:   http://{}/other/path", addr);
    println!();

    server.await.unwrap();
}
