use super::endpoint::Endpoint;
use super::{RouteEntry, Router};

use crate::bind::{FieldParser, Kind, Record};
use crate::error::RouteError;
use crate::pattern;

use smallvec::SmallVec;

impl<T> Router<T> {
    pub(super) fn register_endpoint(
        &mut self,
        template: &str,
        shape: &[Kind],
        endpoint: Endpoint<T>,
    ) -> Result<(), RouteError> {
        let matcher = pattern::compile(template)?;

        let nfmt = matcher.placeholders();
        let narg = shape.len();
        if nfmt < narg {
            return Err(RouteError::TooFewPlaceholders);
        }
        if nfmt > narg {
            return Err(RouteError::TooManyPlaceholders);
        }

        let mut parsers: SmallVec<[FieldParser; 4]> = SmallVec::with_capacity(narg);
        for &kind in shape {
            let parser = self
                .registry
                .get(kind)
                .ok_or(RouteError::UnsupportedKind(kind))?;
            parsers.push(parser);
        }

        self.routes.push(RouteEntry {
            matcher,
            parsers,
            endpoint,
        });

        Ok(())
    }

    pub(super) fn register_child(
        &mut self,
        prefix: &str,
        child: Router<T>,
    ) -> Result<(), RouteError> {
        let prefix = prefix.trim_end_matches('/');
        let mut template = String::with_capacity(prefix.len() + 5);
        template.push_str(prefix);
        template.push_str("/{/?}");
        self.register_endpoint(&template, &[Kind::Text], child.into())
    }

    pub(super) fn dispatch_path<'s>(&'s self, path: &str) -> Option<(&'s T, Record)> {
        // trailing-slash-insensitive: "/foo" and "/foo/" match the same entries
        let mut effective = String::with_capacity(path.len() + 1);
        effective.push_str(path);
        effective.push('/');

        // last registered route takes precedence
        for entry in self.routes.iter().rev() {
            let caps = match entry.matcher.captures(&effective) {
                Some(caps) => caps,
                None => continue,
            };

            match entry.endpoint {
                Endpoint::Data(ref data) => match bind_record(&entry.parsers, &caps) {
                    Some(record) => return Some((data, record)),
                    // a field failed to parse: the entry does not apply
                    None => continue,
                },
                Endpoint::Router(ref child) => {
                    let rest = caps.get(1).map_or("", |m| m.as_str());
                    let mut sub = String::with_capacity(rest.len() + 1);
                    sub.push('/');
                    sub.push_str(rest);
                    // a matched mount commits the request to the child
                    return child.dispatch_path(&sub);
                }
            }
        }

        None
    }
}

fn bind_record(parsers: &[FieldParser], caps: &regex::Captures<'_>) -> Option<Record> {
    let mut record = Record::empty();
    for (i, parser) in parsers.iter().enumerate() {
        // an optional placeholder that matched nothing binds ""
        let text = caps.get(i + 1).map_or("", |m| m.as_str());
        record.push(parser(text)?);
    }
    Some(record)
}
