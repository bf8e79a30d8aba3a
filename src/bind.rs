use std::collections::HashMap;
use std::ops::Deref;

use smallvec::SmallVec;

/// Type tag for a destination field of a route record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Text,
    Bool,
    F32,
    F64,
    I8,
    I16,
    I32,
    I64,
    Isize,
    U8,
    U16,
    U32,
    U64,
    Usize,
}

/// A scalar parsed from one captured path segment.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Bool(bool),
    F32(f32),
    F64(f64),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Usize(usize),
}

impl Value {
    pub fn kind(&self) -> Kind {
        match self {
            Value::Text(_) => Kind::Text,
            Value::Bool(_) => Kind::Bool,
            Value::F32(_) => Kind::F32,
            Value::F64(_) => Kind::F64,
            Value::I8(_) => Kind::I8,
            Value::I16(_) => Kind::I16,
            Value::I32(_) => Kind::I32,
            Value::I64(_) => Kind::I64,
            Value::Isize(_) => Kind::Isize,
            Value::U8(_) => Kind::U8,
            Value::U16(_) => Kind::U16,
            Value::U32(_) => Kind::U32,
            Value::U64(_) => Kind::U64,
            Value::Usize(_) => Kind::Usize,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            Value::Bool(b) => Some(b),
            _ => None,
        }
    }

    /// Any signed integer variant, widened to `i64`.
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Value::I8(x) => Some(x.into()),
            Value::I16(x) => Some(x.into()),
            Value::I32(x) => Some(x.into()),
            Value::I64(x) => Some(x),
            Value::Isize(x) => Some(x as i64),
            _ => None,
        }
    }

    /// Any unsigned integer variant, widened to `u64`.
    pub fn as_u64(&self) -> Option<u64> {
        match *self {
            Value::U8(x) => Some(x.into()),
            Value::U16(x) => Some(x.into()),
            Value::U32(x) => Some(x.into()),
            Value::U64(x) => Some(x),
            Value::Usize(x) => Some(x as u64),
            _ => None,
        }
    }

    /// Any floating variant, widened to `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Value::F32(x) => Some(x.into()),
            Value::F64(x) => Some(x),
            _ => None,
        }
    }
}

/// Converts one captured segment into a typed value.
/// `None` means "this route does not apply", never an error.
pub type FieldParser = fn(&str) -> Option<Value>;

fn parse_text(s: &str) -> Option<Value> {
    Some(Value::Text(s.to_owned()))
}

macro_rules! scalar_parser {
    ($name:ident, $ty:ty, $variant:ident) => {
        fn $name(s: &str) -> Option<Value> {
            s.parse::<$ty>().ok().map(Value::$variant)
        }
    };
}

scalar_parser!(parse_bool, bool, Bool);
scalar_parser!(parse_f32, f32, F32);
scalar_parser!(parse_f64, f64, F64);
scalar_parser!(parse_i8, i8, I8);
scalar_parser!(parse_i16, i16, I16);
scalar_parser!(parse_i32, i32, I32);
scalar_parser!(parse_i64, i64, I64);
scalar_parser!(parse_isize, isize, Isize);
scalar_parser!(parse_u8, u8, U8);
scalar_parser!(parse_u16, u16, U16);
scalar_parser!(parse_u32, u32, U32);
scalar_parser!(parse_u64, u64, U64);
scalar_parser!(parse_usize, usize, Usize);

const BUILTIN: &[(Kind, FieldParser)] = &[
    (Kind::Text, parse_text as FieldParser),
    (Kind::Bool, parse_bool),
    (Kind::F32, parse_f32),
    (Kind::F64, parse_f64),
    (Kind::I8, parse_i8),
    (Kind::I16, parse_i16),
    (Kind::I32, parse_i32),
    (Kind::I64, parse_i64),
    (Kind::Isize, parse_isize),
    (Kind::U8, parse_u8),
    (Kind::U16, parse_u16),
    (Kind::U32, parse_u32),
    (Kind::U64, parse_u64),
    (Kind::Usize, parse_usize),
];

/// Kind-keyed table of field parsers.
///
/// A router captures its registry at construction time and never mutates
/// it afterwards; mounted children inherit a clone of the parent's table.
#[derive(Debug, Clone)]
pub struct Registry {
    table: HashMap<Kind, FieldParser>,
}

impl Registry {
    pub fn empty() -> Self {
        Self {
            table: HashMap::new(),
        }
    }

    /// A registry holding the parsers for every built-in [`Kind`].
    pub fn builtin() -> Self {
        Self {
            table: BUILTIN.iter().copied().collect(),
        }
    }

    pub fn set(&mut self, kind: Kind, parser: FieldParser) -> &mut Self {
        self.table.insert(kind, parser);
        self
    }

    pub fn get(&self, kind: Kind) -> Option<FieldParser> {
        self.table.get(&kind).copied()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}

/// The typed record bound from a matched route's captures, one value
/// per placeholder, in placeholder order.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    fields: SmallVec<[Value; 4]>,
}

impl Record {
    pub fn empty() -> Self {
        Self {
            fields: SmallVec::new(),
        }
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.fields.get(index)
    }

    pub(crate) fn push(&mut self, value: Value) {
        self.fields.push(value)
    }
}

impl Deref for Record {
    type Target = [Value];

    fn deref(&self) -> &Self::Target {
        &self.fields
    }
}

/// Builds a `&[Kind]` record shape from bare kind names:
/// `shape![Text, I64]` is `&[Kind::Text, Kind::I64]`.
#[macro_export]
macro_rules! shape {
    ($($kind:ident),* $(,)?) => {{
        const SHAPE: &[$crate::Kind] = &[$($crate::Kind::$kind),*];
        SHAPE
    }};
}
