//! In-memory representation of an API description document.
//!
//! Nodes are immutable once built. Each located node carries the JSON
//! pointer it was read from, which [`crate::pointer`] turns into the dotted
//! location shown next to every change.

use indexmap::IndexMap;
use std::fmt;

mod convert;

/// A JSON pointer into the source document, e.g. `/paths/~1users/get`.
pub type Pointer = Option<String>;

/// Access to the position metadata of a node.
pub trait Positioned {
    fn position(&self) -> Option<&str>;
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub info: Info,
    pub paths: IndexMap<String, PathItem>,
    pub components: Components,
    pub pointer: Pointer,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Info {
    pub title: String,
    pub version: String,
    pub description: Option<String>,
    pub pointer: Pointer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Options,
    Head,
    Trace,
}

impl Method {
    /// Every verb, in the order operations are visited.
    pub const ALL: [Method; 8] = [
        Method::Get,
        Method::Post,
        Method::Put,
        Method::Delete,
        Method::Patch,
        Method::Options,
        Method::Head,
        Method::Trace,
    ];

    /// Lowercase key as used in the document (`get`, `post`, ...).
    pub fn key(self) -> &'static str {
        match self {
            Method::Get => "get",
            Method::Post => "post",
            Method::Put => "put",
            Method::Delete => "delete",
            Method::Patch => "patch",
            Method::Options => "options",
            Method::Head => "head",
            Method::Trace => "trace",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key().to_ascii_uppercase())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathItem {
    operations: [Option<Operation>; 8],
    pub pointer: Pointer,
}

impl PathItem {
    pub fn new(pointer: Pointer) -> Self {
        Self {
            operations: Default::default(),
            pointer,
        }
    }

    pub fn with_operation(mut self, method: Method, operation: Operation) -> Self {
        self.set_operation(method, operation);
        self
    }

    pub fn set_operation(&mut self, method: Method, operation: Operation) {
        self.operations[method.index()] = Some(operation);
    }

    pub fn operation(&self, method: Method) -> Option<&Operation> {
        self.operations[method.index()].as_ref()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Operation {
    pub summary: Option<String>,
    pub description: Option<String>,
    pub parameters: Vec<RefOr<Parameter>>,
    pub responses: IndexMap<String, RefOr<Response>>,
    pub request_body: Option<RefOr<RequestBody>>,
    pub pointer: Pointer,
}

/// An element that is either defined inline or points elsewhere via `$ref`.
///
/// Comparators never follow an `Indirect` element.
#[derive(Debug, Clone, PartialEq)]
pub enum RefOr<T> {
    Inline(T),
    Indirect { reference: String },
}

impl<T> RefOr<T> {
    pub fn as_inline(&self) -> Option<&T> {
        match self {
            RefOr::Inline(item) => Some(item),
            RefOr::Indirect { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterLocation {
    Query,
    Header,
    Path,
    Cookie,
}

impl ParameterLocation {
    pub fn as_str(self) -> &'static str {
        match self {
            ParameterLocation::Query => "query",
            ParameterLocation::Header => "header",
            ParameterLocation::Path => "path",
            ParameterLocation::Cookie => "cookie",
        }
    }
}

impl fmt::Display for ParameterLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub location: ParameterLocation,
    pub required: bool,
    pub example: Option<serde_json::Value>,
    pub pointer: Pointer,
}

impl Parameter {
    /// `(name, location)` uniquely identifies a parameter within an operation.
    pub fn key(&self) -> (&str, ParameterLocation) {
        (&self.name, self.location)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestBody {
    pub required: bool,
    pub content_types: Vec<String>,
    pub pointer: Pointer,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Response {
    pub description: String,
    pub pointer: Pointer,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Components {
    pub schemas: IndexMap<String, RefOr<Schema>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    /// `string`, `integer`, `object`, ...; `None` for untyped schemas.
    pub type_name: Option<String>,
    pub properties: IndexMap<String, RefOr<Schema>>,
    pub required: Vec<String>,
    pub pointer: Pointer,
}

impl Schema {
    pub fn is_required(&self, property: &str) -> bool {
        self.required.iter().any(|r| r == property)
    }
}

macro_rules! positioned {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Positioned for $ty {
                fn position(&self) -> Option<&str> {
                    self.pointer.as_deref()
                }
            }
        )*
    };
}

positioned!(
    Document,
    Info,
    PathItem,
    Operation,
    Parameter,
    RequestBody,
    Response,
    Schema,
);

impl<T: Positioned> Positioned for RefOr<T> {
    fn position(&self) -> Option<&str> {
        match self {
            RefOr::Inline(item) => item.position(),
            RefOr::Indirect { .. } => None,
        }
    }
}
