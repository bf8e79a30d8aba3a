use super::handler::{BoxHandler, Handler};
use super::{BoxError, BoxFuture, Request, Response};

use crate::bind::{Kind, Record};
use crate::router::Router;

use std::convert::Infallible;
use std::sync::Arc;
use std::task::{Context, Poll};

use hyper::service::Service;
use hyper::{Body, StatusCode};

pub struct RouterService<H = BoxHandler> {
    router: Router<H>,
    default: H,
}

impl<H> RouterService<H> {
    pub fn from_router(router: Router<H>, default: H) -> Self {
        Self { router, default }
    }

    pub fn into_shared(self) -> SharedRouterService<H> {
        SharedRouterService(Arc::new(self))
    }
}

impl RouterService<BoxHandler> {
    /// Wraps a router with the standard not-found fallback.
    pub fn new(router: Router<BoxHandler>) -> Self {
        Self::from_router(router, Box::new(not_found))
    }
}

impl<H: Handler> RouterService<H> {
    fn dispatch(&self, req: Request) -> BoxFuture<'static, Result<Response, BoxError>> {
        let matched = self.router.dispatch(req.uri().path());
        match matched {
            Some((handler, record)) => handler.call(req, record),
            None => self.default.call(req, Record::empty()),
        }
    }
}

async fn not_found(_: Request, _: Record) -> Result<Response, Infallible> {
    let mut res = Response::new(Body::from("404 Not Found"));
    *res.status_mut() = StatusCode::NOT_FOUND;
    Ok(res)
}

impl<H> Service<Request> for RouterService<H>
where
    H: Handler + Send + Sync,
{
    type Response = Response;
    type Error = BoxError;
    type Future = BoxFuture<'static, Result<Response, BoxError>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request) -> Self::Future {
        self.dispatch(req)
    }
}

/// A cheaply cloneable [`RouterService`], one clone per connection.
pub struct SharedRouterService<H = BoxHandler>(Arc<RouterService<H>>);

impl<H> Clone for SharedRouterService<H> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<H> Service<Request> for SharedRouterService<H>
where
    H: Handler + Send + Sync,
{
    type Response = Response;
    type Error = BoxError;
    type Future = BoxFuture<'static, Result<Response, BoxError>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request) -> Self::Future {
        self.0.dispatch(req)
    }
}

impl Router<BoxHandler> {
    /// Boxes and registers a handler. See [`Router::route`].
    pub fn handle(
        &mut self,
        template: &str,
        shape: &[Kind],
        h: impl Handler + Send + Sync + 'static,
    ) -> &mut Self {
        self.route(template, shape, Box::new(h))
    }

    pub fn with_default(self, default: impl Handler + Send + Sync + 'static) -> RouterService {
        RouterService::from_router(self, Box::new(default))
    }

    pub fn into_service(self) -> RouterService {
        RouterService::new(self)
    }
}
