use std::collections::HashMap;

use crate::{
    ClassDef, ClassId, ConstructorDef, MethodDef, PrimitiveType, Type, TypeEnv, TypeStoreError,
    WellKnownTypes,
};

/// Arena of class definitions.
///
/// `TypeStore` is the registry that builders populate before checking. A class can only name a
/// superclass that is already registered, so the superclass graph is acyclic by construction.
#[derive(Clone, Debug)]
pub struct TypeStore {
    classes: Vec<ClassDef>,
    by_name: HashMap<String, ClassId>,
    well_known: WellKnownTypes,
}

impl Default for TypeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeStore {
    /// Create a store containing the built-in `Object` and `String` classes.
    pub fn new() -> Self {
        let object = ClassId::new(0);
        let string = ClassId::new(1);
        let mut store = TypeStore {
            classes: Vec::new(),
            by_name: HashMap::new(),
            well_known: WellKnownTypes { object, string },
        };

        let object_ty = Type::Class(object);
        let string_ty = Type::Class(string);
        let boolean = Type::Primitive(PrimitiveType::Boolean);
        let int = Type::Primitive(PrimitiveType::Int);

        store.push_class(ClassDef {
            name: "Object".to_string(),
            super_class: None,
            methods: vec![
                MethodDef::new("equals", vec![object_ty], boolean),
                MethodDef::new("hashCode", vec![], int),
                MethodDef::new("toString", vec![], string_ty),
            ],
            constructor: ConstructorDef::default(),
        });
        store.push_class(ClassDef {
            name: "String".to_string(),
            super_class: Some(object),
            methods: vec![
                MethodDef::new("length", vec![], int),
                MethodDef::new("isEmpty", vec![], boolean),
                MethodDef::new("charAt", vec![int], Type::Primitive(PrimitiveType::Char)),
                MethodDef::new("concat", vec![string_ty], string_ty),
            ],
            constructor: ConstructorDef::default(),
        });

        store
    }

    fn push_class(&mut self, def: ClassDef) -> ClassId {
        let id = ClassId::new(self.classes.len() as u32);
        self.by_name.insert(def.name.clone(), id);
        self.classes.push(def);
        id
    }

    /// Register a new class with no methods and a no-argument constructor.
    ///
    /// `super_class` defaults to `Object` when `None`. Primitive keywords and `null` cannot be
    /// used as class names.
    pub fn add_class(
        &mut self,
        name: impl Into<String>,
        super_class: Option<ClassId>,
    ) -> Result<ClassId, TypeStoreError> {
        let name = name.into();
        if PrimitiveType::from_keyword(&name).is_some() || name == "null" {
            return Err(TypeStoreError::ReservedName { name });
        }
        if self.by_name.contains_key(&name) {
            return Err(TypeStoreError::DuplicateClass { name });
        }
        let super_class = super_class.unwrap_or(self.well_known.object);
        if self.classes.get(super_class.index()).is_none() {
            return Err(TypeStoreError::UnknownClass { id: super_class });
        }

        Ok(self.push_class(ClassDef {
            name,
            super_class: Some(super_class),
            methods: Vec::new(),
            constructor: ConstructorDef::default(),
        }))
    }

    /// Declare a method on `class`. Overloading is not supported: a second method with the same
    /// name on the same class is rejected. Redeclaring an inherited method is allowed and
    /// shadows the ancestor's signature.
    pub fn add_method(&mut self, class: ClassId, method: MethodDef) -> Result<(), TypeStoreError> {
        let def = self
            .classes
            .get_mut(class.index())
            .ok_or(TypeStoreError::UnknownClass { id: class })?;
        if def.declared_method(&method.name).is_some() {
            return Err(TypeStoreError::DuplicateMethod {
                class: def.name.clone(),
                method: method.name,
            });
        }
        def.methods.push(method);
        Ok(())
    }

    pub fn set_constructor(
        &mut self,
        class: ClassId,
        constructor: ConstructorDef,
    ) -> Result<(), TypeStoreError> {
        let def = self
            .classes
            .get_mut(class.index())
            .ok_or(TypeStoreError::UnknownClass { id: class })?;
        def.constructor = constructor;
        Ok(())
    }

    pub fn class_id(&self, name: &str) -> Option<ClassId> {
        self.by_name.get(name).copied()
    }

    /// Resolve a source-level type name: a primitive keyword, `null`, or a registered class.
    pub fn resolve_type_name(&self, name: &str) -> Option<Type> {
        if let Some(prim) = PrimitiveType::from_keyword(name) {
            return Some(Type::Primitive(prim));
        }
        if name == "null" {
            return Some(Type::Null);
        }
        self.class_id(name).map(Type::Class)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ClassId, &ClassDef)> {
        self.classes
            .iter()
            .enumerate()
            .map(|(idx, def)| (ClassId::new(idx as u32), def))
    }
}

impl TypeEnv for TypeStore {
    fn class(&self, id: ClassId) -> Option<&ClassDef> {
        self.classes.get(id.index())
    }

    fn lookup_class(&self, name: &str) -> Option<ClassId> {
        self.class_id(name)
    }

    fn well_known(&self) -> &WellKnownTypes {
        &self.well_known
    }
}
