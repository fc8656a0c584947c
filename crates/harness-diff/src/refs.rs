//! Shared-reference resolution for serialised JSON graphs
//!
//! The framework's JSON encoder writes a shared subgraph once as an anchor
//! and refers back to it by id everywhere else:
//!
//! ```json
//! [{"serId": 1, "value": {"x": 7}}, {"serRefId": 1}]
//! ```
//!
//! Ids are assigned in traversal order, so two runs that visit the same
//! graph in a different order produce different numbering. Resolving the
//! references expands every back-reference into the anchored subtree,
//! which erases the numbering:
//!
//! ```json
//! [{"x": 7}, {"x": 7}]
//! ```

use serde_json::{Map, Value};
use std::collections::{HashMap, HashSet};

/// Key that marks an anchor and carries its id.
pub const SER_ID: &str = "serId";
/// Key of a back-reference object.
pub const SER_REF_ID: &str = "serRefId";
/// Key holding the anchored value next to [`SER_ID`].
pub const SER_VALUE: &str = "value";

/// Maximum number of back-references followed from one position in the
/// tree. A pointer reached past this many hops is left in place.
pub const MAX_REF_HOPS: usize = 32;

/// Key names of the reference encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefKeys {
    pub id: String,
    pub reference: String,
    pub value: String,
}

impl Default for RefKeys {
    fn default() -> Self {
        Self {
            id: SER_ID.to_string(),
            reference: SER_REF_ID.to_string(),
            value: SER_VALUE.to_string(),
        }
    }
}

/// Resolve references using the default key names.
pub fn resolve_refs(value: &Value) -> Value {
    RefResolver::new().resolve(value)
}

/// Expands anchors and back-references into a canonical tree.
#[derive(Debug, Clone, Default)]
pub struct RefResolver {
    keys: RefKeys,
}

impl RefResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_keys(keys: RefKeys) -> Self {
        Self { keys }
    }

    pub fn keys(&self) -> &RefKeys {
        &self.keys
    }

    /// Return a copy of `value` with every anchor replaced by its anchored
    /// value and every resolvable back-reference replaced by the value it
    /// points at.
    ///
    /// Back-references to ids that are never defined, back-references that
    /// would expand into themselves, and back-references reached after
    /// [`MAX_REF_HOPS`] expansions are left in place so that an equality
    /// check still sees them.
    pub fn resolve(&self, value: &Value) -> Value {
        let mut anchors = HashMap::new();
        self.collect(value, &mut anchors);

        let mut resolving = HashSet::new();
        self.substitute(value, &anchors, &mut resolving, 0)
    }

    /// First pass: record the anchored value of every anchor, in document
    /// order. The first definition of an id wins.
    fn collect(&self, value: &Value, anchors: &mut HashMap<String, Value>) {
        match value {
            Value::Array(items) => {
                for item in items {
                    self.collect(item, anchors);
                }
            }
            Value::Object(map) => {
                if self.pointer_id(map).is_some() {
                    return;
                }
                if let Some(id) = map.get(&self.keys.id) {
                    anchors
                        .entry(id_key(id))
                        .or_insert_with(|| self.anchored(map));
                }
                for child in map.values() {
                    self.collect(child, anchors);
                }
            }
            _ => {}
        }
    }

    /// Second pass: rebuild the tree with anchors and pointers expanded.
    ///
    /// `hops` counts the pointers followed to reach `value`; it bounds the
    /// recursion on long reference chains.
    fn substitute(
        &self,
        value: &Value,
        anchors: &HashMap<String, Value>,
        resolving: &mut HashSet<String>,
        hops: usize,
    ) -> Value {
        match value {
            Value::Array(items) => Value::Array(
                items
                    .iter()
                    .map(|item| self.substitute(item, anchors, resolving, hops))
                    .collect(),
            ),
            Value::Object(map) => {
                if let Some(id) = self.pointer_id(map) {
                    let key = id_key(id);
                    return match anchors.get(&key) {
                        Some(target) if hops < MAX_REF_HOPS && !resolving.contains(&key) => {
                            self.expand(key, target, anchors, resolving, hops + 1)
                        }
                        _ => value.clone(),
                    };
                }

                if let Some(id) = map.get(&self.keys.id) {
                    let anchored = self.anchored(map);
                    return self.expand(id_key(id), &anchored, anchors, resolving, hops);
                }

                Value::Object(
                    map.iter()
                        .map(|(k, v)| (k.clone(), self.substitute(v, anchors, resolving, hops)))
                        .collect(),
                )
            }
            other => other.clone(),
        }
    }

    fn expand(
        &self,
        key: String,
        target: &Value,
        anchors: &HashMap<String, Value>,
        resolving: &mut HashSet<String>,
        hops: usize,
    ) -> Value {
        let fresh = resolving.insert(key.clone());
        let expanded = self.substitute(target, anchors, resolving, hops);
        if fresh {
            resolving.remove(&key);
        }
        expanded
    }

    /// Id of a back-reference object, which has the pointer key and nothing else.
    ///
    /// Anchors are looser: any object carrying the id key is one, because an
    /// anchor without a value key holds the shared object's own fields inline.
    /// A pointer never carries fields of its own, so an object with the
    /// pointer key next to other keys is plain data.
    fn pointer_id<'a>(&self, map: &'a Map<String, Value>) -> Option<&'a Value> {
        if map.len() == 1 {
            map.get(&self.keys.reference)
        } else {
            None
        }
    }

    /// The value an anchor object stands for.
    fn anchored(&self, map: &Map<String, Value>) -> Value {
        if map.len() == 2 {
            if let Some(inner) = map.get(&self.keys.value) {
                return inner.clone();
            }
        }
        Value::Object(
            map.iter()
                .filter(|(k, _)| **k != self.keys.id)
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        )
    }
}

/// Ids compare by their JSON form, so `1` and `"1"` are distinct.
fn id_key(id: &Value) -> String {
    id.to_string()
}
