mod core;
mod endpoint;
mod imp;

use self::endpoint::Endpoint;
use crate::bind::{FieldParser, Registry};
use crate::pattern::Matcher;

use smallvec::SmallVec;

/// An ordered collection of routes. The last registered route that
/// matches a path wins, so overriding routes go after general ones.
#[derive(Debug)]
pub struct Router<T> {
    registry: Registry,
    routes: Vec<RouteEntry<T>>,
}

#[derive(Debug)]
struct RouteEntry<T> {
    matcher: Matcher,
    parsers: SmallVec<[FieldParser; 4]>,
    endpoint: Endpoint<T>,
}
