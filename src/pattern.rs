use crate::error::RouteError;

use regex::Regex;

/// An anchored matcher compiled from a route template.
///
/// Templates mix literal text with placeholders:
///
/// - `{}` captures one path segment (no `/`)
/// - `{?}` like `{}` but the segment may be absent
/// - `{/}` captures a span of one or more `/`-separated segments
/// - `{/?}` like `{/}` but the span may be absent
///
/// The compiled pattern is anchored at both ends and tolerates any number
/// of trailing `/` characters on the matched path.
#[derive(Debug)]
pub struct Matcher {
    regex: Regex,
    placeholders: usize,
}

impl Matcher {
    pub fn placeholders(&self) -> usize {
        self.placeholders
    }

    pub fn is_match(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub(crate) fn captures<'p>(&self, path: &'p str) -> Option<regex::Captures<'p>> {
        self.regex.captures(path)
    }
}

pub fn compile(template: &str) -> Result<Matcher, RouteError> {
    let mut pattern = String::with_capacity(template.len() + 8);
    pattern.push('^');

    let mut rest = template;
    let mut placeholders: usize = 0;

    loop {
        let begin = match rest.find('{') {
            Some(i) => i,
            None => break,
        };
        let end = match rest.find('}') {
            Some(i) if i > begin => i,
            // either a '}' before the '{', or the '{' is unterminated
            _ => return Err(RouteError::UnmatchedBrace),
        };

        pattern.push_str(&regex::escape(&rest[..begin]));

        let mut optional = false;
        let mut spans = false;
        for ch in rest[begin + 1..end].trim().chars() {
            match ch {
                '?' => optional = true,
                '/' => spans = true,
                _ => return Err(RouteError::InvalidSpecifier(ch)),
            }
        }

        pattern.push_str("([^/]+");
        if spans {
            // lazy, so the span never swallows trailing literal text
            pattern.push_str("(?:/[^/]+)*?");
        }
        pattern.push(')');
        if optional {
            pattern.push('?');
        }

        placeholders += 1;
        rest = &rest[end + 1..];
    }

    if rest.contains('}') {
        return Err(RouteError::UnmatchedBrace);
    }
    pattern.push_str(&regex::escape(rest));

    pattern.push_str("/*$");

    let regex = Regex::new(&pattern).expect("escaped pattern always compiles");
    Ok(Matcher {
        regex,
        placeholders,
    })
}
