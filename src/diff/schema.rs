use crate::change::{Change, ChangeSet};
use crate::model::{Document, RefOr, Schema};
use crate::pointer::{build_path, format_location};

fn schema_location(name: &str) -> String {
    build_path(&["components", "schemas", name])
}

fn property_location(schema: &str, property: &str) -> String {
    build_path(&["components", "schemas", schema, "properties", property])
}

fn declared_type(schema: &RefOr<Schema>) -> Option<&str> {
    schema
        .as_inline()
        .and_then(|s| s.type_name.as_deref())
        .filter(|t| !t.is_empty())
}

pub fn detect_schema_breaks(old: &Document, new: &Document, changes: &mut ChangeSet) {
    for (name, old_s) in &old.components.schemas {
        match new.components.schemas.get(name) {
            None => changes.push(Change::major(
                format!("Schema removed: {name}"),
                format_location(old_s, &schema_location(name)),
            )),
            Some(new_s) => {
                if let (Some(old_s), Some(new_s)) = (old_s.as_inline(), new_s.as_inline()) {
                    detect_property_breaks(name, old_s, new_s, changes);
                }
            }
        }
    }
}

/// Breaking property changes within one schema: required properties
/// removed, property types changed, properties newly required.
pub fn detect_property_breaks(name: &str, old: &Schema, new: &Schema, changes: &mut ChangeSet) {
    for (prop, old_p) in &old.properties {
        let fallback = property_location(name, prop);
        match new.properties.get(prop) {
            None if old.is_required(prop) => changes.push(Change::major(
                format!("Required property removed from schema: {name}.{prop}"),
                format_location(old_p, &fallback),
            )),
            None => {}
            Some(new_p) => match (declared_type(old_p), declared_type(new_p)) {
                (Some(old_type), Some(new_type)) if old_type != new_type => {
                    changes.push(Change::major(
                        format!(
                            "Property type changed in schema: {name}.{prop} ({old_type} -> {new_type})"
                        ),
                        format_location(new_p, &fallback),
                    ))
                }
                _ => {}
            },
        }
    }

    // Also fires for properties that did not exist before.
    changes.extend(
        new.required
            .iter()
            .filter(|prop| !old.is_required(prop))
            .map(|prop| {
                Change::major(
                    format!("Property became required in schema: {name}.{prop}"),
                    property_location(name, prop),
                )
            }),
    );
}

pub fn detect_new_schemas(old: &Document, new: &Document, changes: &mut ChangeSet) {
    changes.extend(new.components.schemas.iter().filter_map(|(name, new_s)| {
        if old.components.schemas.contains_key(name) {
            return None;
        }
        Some(Change::minor(
            format!("New schema added: {name}"),
            format_location(new_s, &schema_location(name)),
        ))
    }));
}

pub fn detect_new_properties(old: &Document, new: &Document, changes: &mut ChangeSet) {
    // Ordered by `new`.
    let pairs = new.components.schemas.iter().filter_map(|(name, new_s)| {
        let old_s = old.components.schemas.get(name)?;
        Some((name.as_str(), old_s.as_inline()?, new_s.as_inline()?))
    });

    for (name, old_s, new_s) in pairs {
        changes.extend(new_s.properties.iter().filter_map(|(prop, new_p)| {
            if old_s.properties.contains_key(prop) || new_s.is_required(prop) {
                return None;
            }
            Some(Change::minor(
                format!("New optional property added to schema: {name}.{prop}"),
                format_location(new_p, &property_location(name, prop)),
            ))
        }));
    }
}
