use nova_config::NovaConfig;
use nova_types::{PrimitiveType, Type, TypeStore};

/// Class table used by most checker tests.
///
/// ```text
/// Object
/// ├── String
/// ├── Animal          speak() -> String, feed(Food) -> boolean, rename(String, int) -> void
/// │   └── Dog         fetch(Animal) -> Dog
/// │       └── Puppy   new Puppy(String)
/// ├── Food
/// ├── Foo             bar(int, int) -> int
/// └── Point           new Point(int, int), x() -> int, translate(Point) -> Point
/// ```
pub const ZOO: &str = r#"
[[classes]]
name = "Animal"
methods = [
    { name = "speak", returns = "String" },
    { name = "feed", params = ["Food"], returns = "boolean" },
    { name = "rename", params = ["String", "int"] },
]

[[classes]]
name = "Dog"
superclass = "Animal"
methods = [{ name = "fetch", params = ["Animal"], returns = "Dog" }]

[[classes]]
name = "Puppy"
superclass = "Dog"
constructor = ["String"]

[[classes]]
name = "Food"

[[classes]]
name = "Foo"
methods = [{ name = "bar", params = ["int", "int"], returns = "int" }]

[[classes]]
name = "Point"
constructor = ["int", "int"]
methods = [
    { name = "x", returns = "int" },
    { name = "translate", params = ["Point"], returns = "Point" },
]
"#;

/// Build a [`TypeStore`] from a `nova.toml` class table.
///
/// Panics on invalid fixtures.
pub fn store_from_toml(text: &str) -> TypeStore {
    NovaConfig::load_from_str(text)
        .and_then(|config| config.build_type_store())
        .unwrap_or_else(|err| panic!("invalid class table fixture: {err}"))
}

pub fn zoo() -> TypeStore {
    store_from_toml(ZOO)
}

/// Type named `name`: a primitive keyword, `null`, or a class in `store`.
///
/// Panics if the name is unknown.
pub fn ty(store: &TypeStore, name: &str) -> Type {
    store
        .resolve_type_name(name)
        .unwrap_or_else(|| panic!("fixture has no type named `{name}`"))
}

pub fn int() -> Type {
    Type::Primitive(PrimitiveType::Int)
}

pub fn boolean() -> Type {
    Type::Primitive(PrimitiveType::Boolean)
}
