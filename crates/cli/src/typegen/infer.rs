//! Structural type inference over a JSON sample.
//!
//! Inference runs in two phases:
//! 1. Fold JSON values into a `Shape`, a mergeable structural summary.
//!    Merging is where unification happens: object shapes observed across
//!    array elements collapse into one shape (properties missing from some
//!    elements become optional), and irreconcilable shapes become unions.
//! 2. Lower the root shape into the TypeScript IR, extracting every object
//!    shape into a named `export interface` along the way.
//!
//! Both phases are deterministic: properties are kept in lexicographic
//! order, union variants in first-observed order with `null` last, and
//! interface names are deduplicated with numeric suffixes.

use std::collections::{BTreeMap, HashSet};

use serde_json::Value;

use super::types::{TsModule, TsPrimitive, TsProp, TsType, TsTypeDef, TypeDefKind};
use super::utils::pascal_type_name;

/// Structural summary of the JSON values observed at one position.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Shape {
    Null,
    Boolean,
    Number,
    String,
    /// Element shape, or `None` when no element was observed.
    Array(Option<Box<Shape>>),
    /// Properties in lexicographic order.
    Object(BTreeMap<String, Field>),
    /// Flattened, deduplicated variants in first-observed order.
    Union(Vec<Shape>),
}

/// One object property: its shape and whether every observed object had it.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Field {
    shape: Shape,
    required: bool,
}

/// Summarize a single JSON value.
fn shape_of(value: &Value) -> Shape {
    match value {
        Value::Null => Shape::Null,
        Value::Bool(_) => Shape::Boolean,
        Value::Number(_) => Shape::Number,
        Value::String(_) => Shape::String,
        Value::Array(items) => {
            let element = items
                .iter()
                .map(shape_of)
                .reduce(merge)
                .map(Box::new);
            Shape::Array(element)
        }
        Value::Object(entries) => {
            let fields = entries
                .iter()
                .map(|(key, val)| {
                    (
                        key.clone(),
                        Field {
                            shape: shape_of(val),
                            required: true,
                        },
                    )
                })
                .collect();
            Shape::Object(fields)
        }
    }
}

/// Unify two shapes observed at the same position.
fn merge(a: Shape, b: Shape) -> Shape {
    match (a, b) {
        (a, b) if a == b => a,
        (Shape::Object(left), Shape::Object(right)) => {
            Shape::Object(merge_fields(left, right))
        }
        (Shape::Array(left), Shape::Array(right)) => {
            let element = match (left, right) {
                (Some(l), Some(r)) => Some(Box::new(merge(*l, *r))),
                (Some(l), None) => Some(l),
                (None, r) => r,
            };
            Shape::Array(element)
        }
        (Shape::Union(mut variants), other) => {
            union_insert(&mut variants, other);
            Shape::Union(variants)
        }
        (other, Shape::Union(variants)) => {
            let mut merged = vec![other];
            for variant in variants {
                union_insert(&mut merged, variant);
            }
            Shape::Union(merged)
        }
        (a, b) => Shape::Union(vec![a, b]),
    }
}

/// Merge two property maps: shared keys unify, one-sided keys turn optional.
fn merge_fields(
    left: BTreeMap<String, Field>,
    mut right: BTreeMap<String, Field>,
) -> BTreeMap<String, Field> {
    let mut merged = BTreeMap::new();
    for (key, left_field) in left {
        let field = match right.remove(&key) {
            Some(right_field) => Field {
                shape: merge(left_field.shape, right_field.shape),
                required: left_field.required && right_field.required,
            },
            None => Field {
                shape: left_field.shape,
                required: false,
            },
        };
        merged.insert(key, field);
    }
    for (key, right_field) in right {
        merged.insert(
            key,
            Field {
                shape: right_field.shape,
                required: false,
            },
        );
    }
    merged
}

/// Add a shape to a union's variants, collapsing compatible members.
fn union_insert(variants: &mut Vec<Shape>, shape: Shape) {
    match shape {
        Shape::Union(inner) => {
            for variant in inner {
                union_insert(variants, variant);
            }
        }
        Shape::Object(fields) => {
            for variant in &mut *variants {
                if let Shape::Object(existing) = variant {
                    let merged = merge_fields(std::mem::take(existing), fields);
                    *variant = Shape::Object(merged);
                    return;
                }
            }
            variants.push(Shape::Object(fields));
        }
        Shape::Array(element) => {
            for variant in &mut *variants {
                if let Shape::Array(existing) = variant {
                    let merged = match (existing.take(), element) {
                        (Some(l), Some(r)) => Some(Box::new(merge(*l, *r))),
                        (Some(l), None) => Some(l),
                        (None, r) => r,
                    };
                    *variant = Shape::Array(merged);
                    return;
                }
            }
            variants.push(Shape::Array(element));
        }
        other => {
            if !variants.contains(&other) {
                variants.push(other);
            }
        }
    }
}

/// Lowering context: collects named definitions and keeps names unique.
struct Lowering {
    defs: Vec<TsTypeDef>,
    used_names: HashSet<String>,
}

impl Lowering {
    fn new() -> Self {
        Self {
            defs: Vec::new(),
            used_names: HashSet::new(),
        }
    }

    /// Reserve a unique definition name, suffixing on collision.
    fn claim(&mut self, base: &str) -> String {
        if self.used_names.insert(base.to_string()) {
            return base.to_string();
        }
        let mut n = 2;
        loop {
            let candidate = format!("{base}{n}");
            if self.used_names.insert(candidate.clone()) {
                return candidate;
            }
            n += 1;
        }
    }

    /// Emit an interface definition for an object shape and return a
    /// reference to it. The definition slot is reserved up front so parent
    /// interfaces appear before the interfaces of their properties.
    fn define_interface(&mut self, name: &str, fields: BTreeMap<String, Field>) -> TsType {
        let idx = self.defs.len();
        self.defs.push(TsTypeDef {
            name: name.to_string(),
            kind: TypeDefKind::Interface {
                properties: Vec::new(),
            },
        });

        let mut properties = Vec::with_capacity(fields.len());
        for (prop_name, field) in fields {
            let hint = pascal_type_name(&prop_name);
            let ty = self.lower(field.shape, &hint);
            properties.push(TsProp {
                name: prop_name,
                ty,
                optional: !field.required,
            });
        }

        self.defs[idx].kind = TypeDefKind::Interface { properties };
        TsType::Ref(name.to_string())
    }

    fn lower(&mut self, shape: Shape, hint: &str) -> TsType {
        match shape {
            Shape::Null => TsType::Primitive(TsPrimitive::Null),
            Shape::Boolean => TsType::Primitive(TsPrimitive::Boolean),
            Shape::Number => TsType::Primitive(TsPrimitive::Number),
            Shape::String => TsType::Primitive(TsPrimitive::String),
            Shape::Array(None) => {
                TsType::Array(Box::new(TsType::Primitive(TsPrimitive::Unknown)))
            }
            Shape::Array(Some(element)) => {
                TsType::Array(Box::new(self.lower(*element, hint)))
            }
            Shape::Object(fields) => {
                let name = self.claim(hint);
                self.define_interface(&name, fields)
            }
            Shape::Union(variants) => {
                // Render null last for readable unions: string | null.
                let (null_variants, others): (Vec<_>, Vec<_>) = variants
                    .into_iter()
                    .partition(|v| matches!(v, Shape::Null));
                let mut members: Vec<TsType> = others
                    .into_iter()
                    .map(|v| self.lower(v, hint))
                    .collect();
                if !null_variants.is_empty() {
                    members.push(TsType::Primitive(TsPrimitive::Null));
                }
                TsType::Union(members)
            }
        }
    }
}

/// Infer a declarations-only module from a sample value.
///
/// The root of an object sample becomes `export interface <type_name>`;
/// any other sample becomes `export type <type_name> = ...`. Nested object
/// shapes are extracted into interfaces named after their property.
pub fn infer_module(sample: &Value, type_name: &str) -> TsModule {
    let shape = shape_of(sample);
    let mut lowering = Lowering::new();
    lowering.claim(type_name);

    match shape {
        Shape::Object(fields) => {
            lowering.define_interface(type_name, fields);
        }
        other => {
            // Reserve the alias slot first so it stays at the top even if
            // lowering extracts nested interfaces.
            let idx = lowering.defs.len();
            lowering.defs.push(TsTypeDef {
                name: type_name.to_string(),
                kind: TypeDefKind::TypeAlias {
                    ty: TsType::Primitive(TsPrimitive::Unknown),
                },
            });
            let ty = lowering.lower(other, type_name);
            lowering.defs[idx].kind = TypeDefKind::TypeAlias { ty };
        }
    }

    TsModule {
        types: lowering.defs,
    }
}
