//! Rendering schemas back to JSON
//!
//! A top-level primitive renders in object form, `{"type": "int"}`. Nested
//! primitives (array items, map values, field types, union branches) render
//! as bare strings. Named types render in full where they are defined and
//! as their fully-qualified name where they are referenced.

use serde_json::{Map, Value, json};

use crate::name::Name;

use super::Schema;
use super::types::Field;

impl Schema {
    /// JSON form of this schema
    pub fn to_json(&self) -> Value {
        render(self, false)
    }
}

fn render(schema: &Schema, nested: bool) -> Value {
    match schema {
        Schema::Primitive(p) if nested => json!(p.as_str()),
        Schema::Primitive(p) => json!({"type": p.as_str()}),
        Schema::Record(record) => {
            let mut object = named_object(record.kind().tag().as_str(), record.name(), record.doc());
            object.insert("fields".to_string(), render_fields(record.fields()));
            Value::Object(object)
        }
        Schema::Enum(e) => {
            let mut object = named_object("enum", e.name(), e.doc());
            object.insert("symbols".to_string(), json!(e.symbols()));
            Value::Object(object)
        }
        Schema::Fixed(f) => {
            let mut object = named_object("fixed", f.name(), f.doc());
            object.insert("size".to_string(), json!(f.size()));
            Value::Object(object)
        }
        Schema::Array(a) => json!({"type": "array", "items": render(a.items(), true)}),
        Schema::Map(m) => json!({"type": "map", "values": render(m.values(), true)}),
        Schema::Union(u) => Value::Array(u.branches().iter().map(|b| render(b, true)).collect()),
        Schema::Request(r) => render_fields(r.fields()),
        Schema::Ref(r) => json!(r.fullname()),
    }
}

fn named_object(tag: &str, name: &Name, doc: Option<&str>) -> Map<String, Value> {
    let mut object = Map::new();
    object.insert("type".to_string(), json!(tag));
    object.insert("name".to_string(), json!(name.name()));
    if let Some(namespace) = name.namespace() {
        object.insert("namespace".to_string(), json!(namespace));
    }
    if let Some(doc) = doc {
        object.insert("doc".to_string(), json!(doc));
    }
    object
}

fn render_fields(fields: &[Field]) -> Value {
    Value::Array(fields.iter().map(render_field).collect())
}

fn render_field(field: &Field) -> Value {
    let mut object = Map::new();
    object.insert("name".to_string(), json!(field.name()));
    object.insert("type".to_string(), render(field.schema(), true));
    if let Some(default) = field.default_value() {
        object.insert("default".to_string(), default.clone());
    }
    if let Some(order) = field.order() {
        object.insert("order".to_string(), json!(order.as_str()));
    }
    if let Some(doc) = field.doc() {
        object.insert("doc".to_string(), json!(doc));
    }
    Value::Object(object)
}
