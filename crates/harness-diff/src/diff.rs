//! Semantic diff types and computation

use serde_json::Value;
use similar::TextDiff;
use std::fmt;

/// Maximum recursion depth for diff operations
const MAX_DIFF_DEPTH: usize = 128;

/// Result of comparing two JSON values semantically
#[derive(Debug, Clone, PartialEq)]
pub struct SemanticDiff {
    /// Are the values semantically equivalent?
    pub is_equivalent: bool,
    /// List of semantic changes
    pub changes: Vec<SemanticChange>,
    /// Similarity ratio (0.0 to 1.0)
    pub similarity: f64,
}

impl SemanticDiff {
    /// Compute a semantic diff between two JSON values
    ///
    /// This recursively compares two JSON values and tracks all changes
    /// with their paths (e.g., "config.host" for nested keys).
    pub fn compute(old: &Value, new: &Value) -> Self {
        let mut changes = Vec::new();
        diff_values(old, new, String::new(), &mut changes, 0);

        let similarity = compute_similarity(old, new);

        Self {
            is_equivalent: changes.is_empty(),
            changes,
            similarity,
        }
    }
}

impl fmt::Display for SemanticDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} change(s), similarity {:.2}",
            self.changes.len(),
            self.similarity
        )?;
        for change in &self.changes {
            writeln!(f, "  {change}")?;
        }
        Ok(())
    }
}

/// A semantic change between two values
#[derive(Debug, Clone, PartialEq)]
pub enum SemanticChange {
    /// Key/path added
    Added { path: String, value: Value },
    /// Key/path removed
    Removed { path: String, value: Value },
    /// Value changed at path
    Modified { path: String, old: Value, new: Value },
}

impl SemanticChange {
    pub fn path(&self) -> &str {
        match self {
            Self::Added { path, .. } | Self::Removed { path, .. } | Self::Modified { path, .. } => {
                path
            }
        }
    }
}

impl fmt::Display for SemanticChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = display_path(self.path());
        match self {
            Self::Added { value, .. } => write!(f, "+ {path}: {value}"),
            Self::Removed { value, .. } => write!(f, "- {path}: {value}"),
            Self::Modified { old, new, .. } => write!(f, "~ {path}: {old} -> {new}"),
        }
    }
}

fn display_path(path: &str) -> &str {
    if path.is_empty() { "$" } else { path }
}

fn child_key_path(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", path, key)
    }
}

/// Recursively diff two JSON values, collecting changes with path tracking
fn diff_values(
    old: &Value,
    new: &Value,
    path: String,
    changes: &mut Vec<SemanticChange>,
    depth: usize,
) {
    // Past the depth limit a differing subtree is reported as one modification
    if depth > MAX_DIFF_DEPTH {
        if old != new {
            changes.push(SemanticChange::Modified {
                path,
                old: old.clone(),
                new: new.clone(),
            });
        }
        return;
    }

    match (old, new) {
        (Value::Object(old_obj), Value::Object(new_obj)) => {
            for (key, old_value) in old_obj {
                let child_path = child_key_path(&path, key);
                match new_obj.get(key) {
                    Some(new_value) => {
                        diff_values(old_value, new_value, child_path, changes, depth + 1);
                    }
                    None => changes.push(SemanticChange::Removed {
                        path: child_path,
                        value: old_value.clone(),
                    }),
                }
            }

            for (key, new_value) in new_obj {
                if !old_obj.contains_key(key) {
                    changes.push(SemanticChange::Added {
                        path: child_key_path(&path, key),
                        value: new_value.clone(),
                    });
                }
            }
        }

        (Value::Array(old_arr), Value::Array(new_arr)) => {
            let max_len = old_arr.len().max(new_arr.len());
            for i in 0..max_len {
                let child_path = format!("{}[{}]", path, i);

                match (old_arr.get(i), new_arr.get(i)) {
                    (Some(old_val), Some(new_val)) => {
                        diff_values(old_val, new_val, child_path, changes, depth + 1);
                    }
                    (Some(old_val), None) => changes.push(SemanticChange::Removed {
                        path: child_path,
                        value: old_val.clone(),
                    }),
                    (None, Some(new_val)) => changes.push(SemanticChange::Added {
                        path: child_path,
                        value: new_val.clone(),
                    }),
                    (None, None) => unreachable!(),
                }
            }
        }

        _ => {
            if old != new {
                changes.push(SemanticChange::Modified {
                    path,
                    old: old.clone(),
                    new: new.clone(),
                });
            }
        }
    }
}

/// Compute similarity ratio between two JSON values
///
/// Serializes both values and uses `TextDiff::ratio()` for a quick estimate.
fn compute_similarity(old: &Value, new: &Value) -> f64 {
    if old == new {
        return 1.0;
    }

    let old_str = serde_json::to_string(old).unwrap_or_default();
    let new_str = serde_json::to_string(new).unwrap_or_default();

    let diff = TextDiff::from_chars(&old_str, &new_str);
    diff.ratio() as f64
}
