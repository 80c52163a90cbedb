//! TypeScript IR for declaration-only code generation.
//!
//! The synthesizer emits type declarations and nothing else, so the IR is
//! deliberately small: types, object properties, named definitions and the
//! module that holds them.

/// TypeScript type representation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TsType {
    /// Primitive types: string, number, boolean, null, unknown
    Primitive(TsPrimitive),
    /// Array type: T[]
    Array(Box<TsType>),
    /// Union type: A | B | C
    Union(Vec<TsType>),
    /// Named type reference: "Thing", "UserAddress"
    Ref(String),
}

/// TypeScript primitive types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TsPrimitive {
    String,
    Number,
    Boolean,
    Null,
    Unknown,
}

/// Object property definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsProp {
    pub name: String,
    pub ty: TsType,
    pub optional: bool,
}

/// Type definition kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeDefKind {
    /// interface Foo { ... }
    Interface { properties: Vec<TsProp> },
    /// type Foo = ...
    TypeAlias { ty: TsType },
}

/// A named, exported type definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsTypeDef {
    pub name: String,
    pub kind: TypeDefKind,
}

/// A complete declarations-only TypeScript module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsModule {
    pub types: Vec<TsTypeDef>,
}
