//! Type model for Nova's expression checker.
//!
//! Types are plain values: primitives, the null type, and references to
//! classes registered in a [`TypeEnv`]. Classes live in an externally owned
//! arena (see [`TypeStore`]) and refer to their superclass by [`ClassId`], so
//! the model never owns object lifetimes and the superclass graph cannot form
//! a cycle through the store's public API.

use std::fmt;

mod error;
pub mod format;
mod members;
mod store;
mod subtyping;

pub use error::{Callee, Mismatch, TypeError, TypeErrorKind, TypeStoreError};
pub use members::{constructor, method_named};
pub use store::TypeStore;
pub use subtyping::{ancestors, is_subtype, Ancestors};

/// Index of a class inside a [`TypeEnv`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassId(u32);

impl ClassId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn to_raw(self) -> u32 {
        self.0
    }

    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClassId({})", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    Boolean,
    Byte,
    Short,
    Char,
    Int,
    Long,
    Float,
    Double,
    Void,
}

impl PrimitiveType {
    pub const ALL: [PrimitiveType; 9] = [
        PrimitiveType::Boolean,
        PrimitiveType::Byte,
        PrimitiveType::Short,
        PrimitiveType::Char,
        PrimitiveType::Int,
        PrimitiveType::Long,
        PrimitiveType::Float,
        PrimitiveType::Double,
        PrimitiveType::Void,
    ];

    pub fn keyword(self) -> &'static str {
        match self {
            PrimitiveType::Boolean => "boolean",
            PrimitiveType::Byte => "byte",
            PrimitiveType::Short => "short",
            PrimitiveType::Char => "char",
            PrimitiveType::Int => "int",
            PrimitiveType::Long => "long",
            PrimitiveType::Float => "float",
            PrimitiveType::Double => "double",
            PrimitiveType::Void => "void",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|prim| prim.keyword() == keyword)
    }
}

/// A compile-time type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Type {
    Primitive(PrimitiveType),
    /// The type of the `null` literal: a subtype of every class type.
    Null,
    Class(ClassId),
}

impl Type {
    pub const fn class(id: ClassId) -> Self {
        Type::Class(id)
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, Type::Primitive(_))
    }

    pub fn is_reference(&self) -> bool {
        matches!(self, Type::Null | Type::Class(_))
    }
}

impl From<PrimitiveType> for Type {
    fn from(prim: PrimitiveType) -> Self {
        Type::Primitive(prim)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MethodDef {
    pub name: String,
    pub params: Vec<Type>,
    pub return_type: Type,
}

impl MethodDef {
    pub fn new(name: impl Into<String>, params: Vec<Type>, return_type: Type) -> Self {
        Self {
            name: name.into(),
            params,
            return_type,
        }
    }
}

/// The single constructor of a class.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConstructorDef {
    pub params: Vec<Type>,
}

impl ConstructorDef {
    pub fn new(params: Vec<Type>) -> Self {
        Self { params }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassDef {
    pub name: String,
    /// `None` only for the object root.
    pub super_class: Option<ClassId>,
    pub methods: Vec<MethodDef>,
    pub constructor: ConstructorDef,
}

impl ClassDef {
    /// Method declared directly on this class (ancestors are not searched).
    pub fn declared_method(&self, name: &str) -> Option<&MethodDef> {
        self.methods.iter().find(|method| method.name == name)
    }
}

/// Ids of the built-in classes every environment provides.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WellKnownTypes {
    pub object: ClassId,
    pub string: ClassId,
}

/// Read-only view of a class table.
///
/// The checker only ever queries an environment; registration happens
/// elsewhere (see [`TypeStore`]).
pub trait TypeEnv {
    fn class(&self, id: ClassId) -> Option<&ClassDef>;
    fn lookup_class(&self, name: &str) -> Option<ClassId>;
    fn well_known(&self) -> &WellKnownTypes;

    fn object_type(&self) -> Type {
        Type::Class(self.well_known().object)
    }

    fn string_type(&self) -> Type {
        Type::Class(self.well_known().string)
    }
}

/// A checker finding ready to be shown to a user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub code: &'static str,
    pub message: String,
}

impl Diagnostic {
    pub fn error(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error[{}]: {}", self.code, self.message)
    }
}
