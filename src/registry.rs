//! Schema registry for collecting derived schemas.

use std::collections::HashMap;

use crate::config::DeriveConfig;
use crate::error::SchemaError;
use crate::reflect::AvroTyped;
use crate::schema::SchemaNode;

/// A registry for collecting named schemas across many derivations.
///
/// Each derivation call memoizes names internally, but separate calls know
/// nothing about each other. A registry gives a set of types one shared
/// namespace check: registering two different shapes under the same fullname
/// is rejected, and registering the same schema twice is a no-op.
///
/// Iteration order is insertion order, so exported schema sets are stable.
#[derive(Debug, Default)]
pub struct SchemaRegistry {
    config: DeriveConfig,
    entries: Vec<(String, SchemaNode)>,
    index: HashMap<String, usize>,
}

impl SchemaRegistry {
    /// Create a new empty registry with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new empty registry with an explicit configuration.
    pub fn with_config(config: DeriveConfig) -> Self {
        Self {
            config,
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Derive and register the schema for `T`.
    ///
    /// Returns the registered schema. Unnamed schemas (primitives, bare
    /// containers, unions) derive fine but are not retained; only named
    /// schemas enter the registry.
    pub fn register<T: AvroTyped>(&mut self) -> Result<SchemaNode, SchemaError> {
        let schema = T::schema_with(&self.config)?;
        self.insert(schema.clone())?;
        Ok(schema)
    }

    /// Insert an already-derived schema.
    pub fn insert(&mut self, schema: SchemaNode) -> Result<(), SchemaError> {
        let Some(fullname) = schema.fullname() else {
            return Ok(());
        };
        match self.index.get(&fullname) {
            Some(&i) if self.entries[i].1 == schema => Ok(()),
            Some(_) => Err(SchemaError::NameCollision { fullname }),
            None => {
                self.index.insert(fullname.clone(), self.entries.len());
                self.entries.push((fullname, schema));
                Ok(())
            }
        }
    }

    /// Get a schema by fullname.
    pub fn get(&self, fullname: &str) -> Option<&SchemaNode> {
        self.index.get(fullname).map(|&i| &self.entries[i].1)
    }

    /// All registered schemas, in insertion order.
    pub fn schemas(&self) -> impl Iterator<Item = (&str, &SchemaNode)> {
        self.entries.iter().map(|(name, schema)| (name.as_str(), schema))
    }

    /// The number of registered schemas.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
