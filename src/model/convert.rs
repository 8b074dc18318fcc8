use indexmap::IndexMap;
use openapiv3::{OpenAPI, ReferenceOr, SchemaKind, StatusCode, Type};
use std::borrow::Borrow;

use super::{
    Components, Document, Info, Method, Operation, Parameter, ParameterLocation, PathItem, RefOr,
    RequestBody, Response, Schema,
};
use crate::pointer::child;

/// Longest chain of component-to-component references followed.
const MAX_DEPTH: usize = 10;

impl Document {
    /// Builds the document model from a parsed OpenAPI 3.0 description,
    /// recording the JSON pointer of every node on the way.
    ///
    /// Local `#/components/...` references to parameters, request bodies,
    /// responses and schemas are replaced by their definitions, positioned
    /// where they are defined. Anything else stays [`RefOr::Indirect`].
    pub fn from_openapi(spec: &OpenAPI) -> Self {
        Converter::new(spec).document(spec)
    }
}

struct Converter<'a> {
    components: Option<&'a openapiv3::Components>,
    /// Schema definitions being expanded; meeting one again is a cycle.
    resolving: Vec<String>,
}

/// Name of the component a local reference such as
/// `#/components/schemas/User` points at.
fn component_name(reference: &str, kind: &str) -> Option<String> {
    let name = reference
        .strip_prefix("#/components/")?
        .strip_prefix(kind)?
        .strip_prefix('/')?;
    Some(name.replace("~1", "/").replace("~0", "~"))
}

fn component_pointer(kind: &str, name: &str) -> String {
    child(&child(&child("", "components"), kind), name)
}

/// Follows `reference` through `table` to a definition and returns it with
/// its pointer.
fn lookup<'a, T>(
    table: Option<&'a IndexMap<String, ReferenceOr<T>>>,
    kind: &str,
    reference: &'a str,
) -> Option<(&'a T, String)> {
    let table = table?;
    let mut reference = reference;
    for _ in 0..MAX_DEPTH {
        let name = component_name(reference, kind)?;
        match table.get(&name)? {
            ReferenceOr::Item(item) => return Some((item, component_pointer(kind, &name))),
            ReferenceOr::Reference { reference: next } => reference = next.as_str(),
        }
    }
    None
}

fn indirect<T>(reference: &str) -> RefOr<T> {
    RefOr::Indirect {
        reference: reference.to_string(),
    }
}

impl<'a> Converter<'a> {
    fn new(spec: &'a OpenAPI) -> Self {
        Self {
            components: spec.components.as_ref(),
            resolving: Vec::new(),
        }
    }

    fn document(mut self, spec: &'a OpenAPI) -> Document {
        let mut paths = IndexMap::new();
        for (path, item) in &spec.paths.paths {
            let pointer = child(&child("", "paths"), path);
            let item = match item {
                ReferenceOr::Item(item) => self.path_item(item, &pointer),
                // Kept as present so the endpoint is not reported as removed.
                ReferenceOr::Reference { .. } => PathItem::new(Some(pointer)),
            };
            paths.insert(path.clone(), item);
        }

        let mut schemas = IndexMap::new();
        if let Some(components) = self.components {
            for (name, schema) in &components.schemas {
                let converted = self.schema_ref(schema, &component_pointer("schemas", name));
                schemas.insert(name.clone(), converted);
            }
        }

        Document {
            info: Info {
                title: spec.info.title.clone(),
                version: spec.info.version.clone(),
                description: spec.info.description.clone(),
                pointer: Some(child("", "info")),
            },
            paths,
            components: Components { schemas },
            pointer: Some(String::new()),
        }
    }

    fn path_item(&self, item: &'a openapiv3::PathItem, pointer: &str) -> PathItem {
        let operations = [
            (Method::Get, &item.get),
            (Method::Post, &item.post),
            (Method::Put, &item.put),
            (Method::Delete, &item.delete),
            (Method::Patch, &item.patch),
            (Method::Options, &item.options),
            (Method::Head, &item.head),
            (Method::Trace, &item.trace),
        ];

        let mut converted = PathItem::new(Some(pointer.to_string()));
        for (method, op) in operations {
            if let Some(op) = op {
                converted.set_operation(method, self.operation(op, &child(pointer, method.key())));
            }
        }
        converted
    }

    fn operation(&self, op: &'a openapiv3::Operation, pointer: &str) -> Operation {
        let params_base = child(pointer, "parameters");
        let parameters = op
            .parameters
            .iter()
            .enumerate()
            .map(|(idx, p)| self.parameter_ref(p, &child(&params_base, &idx.to_string())))
            .collect();

        let responses_base = child(pointer, "responses");
        let mut responses: IndexMap<String, RefOr<Response>> = op
            .responses
            .responses
            .iter()
            .map(|(code, r)| {
                let code = status_code_str(code);
                let response = self.response_ref(r, &child(&responses_base, &code));
                (code, response)
            })
            .collect();
        if let Some(default) = &op.responses.default {
            let response = self.response_ref(default, &child(&responses_base, "default"));
            responses.insert("default".to_string(), response);
        }

        let request_body = op
            .request_body
            .as_ref()
            .map(|rb| self.request_body_ref(rb, &child(pointer, "requestBody")));

        Operation {
            summary: op.summary.clone(),
            description: op.description.clone(),
            parameters,
            responses,
            request_body,
            pointer: Some(pointer.to_string()),
        }
    }

    fn parameter_ref(
        &self,
        r: &'a ReferenceOr<openapiv3::Parameter>,
        pointer: &str,
    ) -> RefOr<Parameter> {
        match r {
            ReferenceOr::Item(p) => RefOr::Inline(convert_parameter(p, pointer)),
            ReferenceOr::Reference { reference } => {
                let table = self.components.map(|c| &c.parameters);
                match lookup(table, "parameters", reference) {
                    Some((p, pointer)) => RefOr::Inline(convert_parameter(p, &pointer)),
                    None => indirect(reference),
                }
            }
        }
    }

    fn request_body_ref(
        &self,
        r: &'a ReferenceOr<openapiv3::RequestBody>,
        pointer: &str,
    ) -> RefOr<RequestBody> {
        match r {
            ReferenceOr::Item(rb) => RefOr::Inline(convert_request_body(rb, pointer)),
            ReferenceOr::Reference { reference } => {
                let table = self.components.map(|c| &c.request_bodies);
                match lookup(table, "requestBodies", reference) {
                    Some((rb, pointer)) => RefOr::Inline(convert_request_body(rb, &pointer)),
                    None => indirect(reference),
                }
            }
        }
    }

    fn response_ref(
        &self,
        r: &'a ReferenceOr<openapiv3::Response>,
        pointer: &str,
    ) -> RefOr<Response> {
        match r {
            ReferenceOr::Item(resp) => RefOr::Inline(convert_response(resp, pointer)),
            ReferenceOr::Reference { reference } => {
                let table = self.components.map(|c| &c.responses);
                match lookup(table, "responses", reference) {
                    Some((resp, pointer)) => RefOr::Inline(convert_response(resp, &pointer)),
                    None => indirect(reference),
                }
            }
        }
    }

    fn schema_ref<S: Borrow<openapiv3::Schema>>(
        &mut self,
        r: &'a ReferenceOr<S>,
        pointer: &str,
    ) -> RefOr<Schema> {
        match r {
            ReferenceOr::Item(s) => {
                let s: &'a openapiv3::Schema = s.borrow();
                RefOr::Inline(self.schema(s, pointer))
            }
            ReferenceOr::Reference { reference } => {
                let table = self.components.map(|c| &c.schemas);
                match lookup(table, "schemas", reference) {
                    Some((target, pointer)) if !self.resolving.contains(&pointer) => {
                        self.resolving.push(pointer.clone());
                        let schema = self.schema(target, &pointer);
                        self.resolving.pop();
                        RefOr::Inline(schema)
                    }
                    _ => indirect(reference),
                }
            }
        }
    }

    fn schema(&mut self, s: &'a openapiv3::Schema, pointer: &str) -> Schema {
        let type_name = type_name(&s.schema_kind);
        let (properties, required) = match &s.schema_kind {
            SchemaKind::Type(Type::Object(obj)) => (&obj.properties, &obj.required),
            SchemaKind::Any(any) => (&any.properties, &any.required),
            _ => {
                return Schema {
                    type_name,
                    pointer: Some(pointer.to_string()),
                    ..Schema::default()
                };
            }
        };

        let props_base = child(pointer, "properties");
        let mut converted = IndexMap::new();
        for (name, p) in properties {
            let property = self.schema_ref(p, &child(&props_base, name));
            converted.insert(name.clone(), property);
        }

        Schema {
            type_name,
            properties: converted,
            required: required.clone(),
            pointer: Some(pointer.to_string()),
        }
    }
}

fn convert_parameter(p: &openapiv3::Parameter, pointer: &str) -> Parameter {
    let data = p.parameter_data_ref();
    let location = match p {
        openapiv3::Parameter::Query { .. } => ParameterLocation::Query,
        openapiv3::Parameter::Header { .. } => ParameterLocation::Header,
        openapiv3::Parameter::Path { .. } => ParameterLocation::Path,
        openapiv3::Parameter::Cookie { .. } => ParameterLocation::Cookie,
    };
    Parameter {
        name: data.name.clone(),
        location,
        required: data.required,
        example: data.example.clone(),
        pointer: Some(pointer.to_string()),
    }
}

fn convert_request_body(rb: &openapiv3::RequestBody, pointer: &str) -> RequestBody {
    RequestBody {
        required: rb.required,
        content_types: rb.content.keys().cloned().collect(),
        pointer: Some(pointer.to_string()),
    }
}

fn convert_response(resp: &openapiv3::Response, pointer: &str) -> Response {
    Response {
        description: resp.description.clone(),
        pointer: Some(pointer.to_string()),
    }
}

fn status_code_str(sc: &StatusCode) -> String {
    match sc {
        StatusCode::Code(c) => c.to_string(),
        StatusCode::Range(r) => format!("{}XX", r),
    }
}

fn type_name(kind: &SchemaKind) -> Option<String> {
    match kind {
        SchemaKind::Type(t) => Some(
            match t {
                Type::String(_) => "string",
                Type::Number(_) => "number",
                Type::Integer(_) => "integer",
                Type::Object(_) => "object",
                Type::Array(_) => "array",
                Type::Boolean(_) => "boolean",
            }
            .to_string(),
        ),
        SchemaKind::Any(any) => any.typ.clone(),
        SchemaKind::OneOf { .. }
        | SchemaKind::AllOf { .. }
        | SchemaKind::AnyOf { .. }
        | SchemaKind::Not { .. } => None,
    }
}
