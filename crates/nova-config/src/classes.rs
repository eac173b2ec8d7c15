use std::collections::{HashMap, HashSet};

use nova_types::{ClassId, ConstructorDef, MethodDef, Type, TypeStore};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{ConfigError, NovaConfig};

/// One `[[classes]]` entry of the class table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ClassConfig {
    pub name: String,

    /// Superclass name. Defaults to `Object`.
    #[serde(default, alias = "extends")]
    pub superclass: Option<String>,

    /// Parameter types of the class's single constructor.
    #[serde(default)]
    pub constructor: Vec<String>,

    #[serde(default)]
    pub methods: Vec<MethodConfig>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct MethodConfig {
    pub name: String,

    #[serde(default)]
    pub params: Vec<String>,

    /// Return type. Defaults to `void`.
    #[serde(default = "MethodConfig::default_returns")]
    pub returns: String,
}

impl MethodConfig {
    fn default_returns() -> String {
        "void".to_owned()
    }
}

impl NovaConfig {
    /// Build a [`TypeStore`] holding the built-in classes plus every class in `[[classes]]`.
    ///
    /// Classes may appear in any order and member signatures may mention any class in the table.
    pub fn build_type_store(&self) -> Result<TypeStore, ConfigError> {
        let mut store = TypeStore::new();

        let mut ids = HashMap::with_capacity(self.classes.len());
        for class in superclass_order(&store, &self.classes)? {
            let super_class = match &class.superclass {
                Some(name) => store.class_id(name),
                None => None,
            };
            let id = store.add_class(class.name.clone(), super_class)?;
            ids.insert(class.name.as_str(), id);
        }

        for class in &self.classes {
            let id: ClassId = ids[class.name.as_str()];

            let params = resolve_all(&store, &class.constructor, || {
                format!("constructor of `{}`", class.name)
            })?;
            store.set_constructor(id, ConstructorDef::new(params))?;

            for method in &class.methods {
                let context = || format!("method `{}.{}`", class.name, method.name);
                let params = resolve_all(&store, &method.params, context)?;
                let return_type = resolve(&store, &method.returns, context)?;
                store.add_method(id, MethodDef::new(method.name.clone(), params, return_type))?;
            }
        }

        tracing::debug!(
            target: "nova.config",
            classes = self.classes.len(),
            "built type store from class table"
        );
        Ok(store)
    }
}

/// Order `classes` so that every class comes after its superclass.
fn superclass_order<'a>(
    store: &TypeStore,
    classes: &'a [ClassConfig],
) -> Result<Vec<&'a ClassConfig>, ConfigError> {
    let declared: HashSet<&str> = classes.iter().map(|c| c.name.as_str()).collect();
    for class in classes {
        if let Some(superclass) = &class.superclass {
            if !declared.contains(superclass.as_str()) && store.class_id(superclass).is_none() {
                return Err(ConfigError::UnknownSuperclass {
                    class: class.name.clone(),
                    superclass: superclass.clone(),
                });
            }
        }
    }

    let mut placed: HashSet<&str> = HashSet::with_capacity(classes.len());
    let mut ordered = Vec::with_capacity(classes.len());
    let mut pending: Vec<&ClassConfig> = classes.iter().collect();
    while !pending.is_empty() {
        let before = pending.len();
        pending.retain(|class| {
            let ready = match &class.superclass {
                Some(superclass) => {
                    placed.contains(superclass.as_str()) || !declared.contains(superclass.as_str())
                }
                None => true,
            };
            if ready {
                placed.insert(class.name.as_str());
                ordered.push(*class);
            }
            !ready
        });

        if pending.len() == before {
            let mut names: Vec<String> = pending.iter().map(|c| c.name.clone()).collect();
            names.sort();
            return Err(ConfigError::SuperclassCycle { classes: names });
        }
    }
    Ok(ordered)
}

fn resolve(
    store: &TypeStore,
    name: &str,
    context: impl Fn() -> String,
) -> Result<Type, ConfigError> {
    store
        .resolve_type_name(name.trim())
        .ok_or_else(|| ConfigError::UnknownType {
            name: name.to_owned(),
            context: context(),
        })
}

fn resolve_all(
    store: &TypeStore,
    names: &[String],
    context: impl Fn() -> String,
) -> Result<Vec<Type>, ConfigError> {
    names
        .iter()
        .map(|name| resolve(store, name, &context))
        .collect()
}
