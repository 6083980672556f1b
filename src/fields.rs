use std::fmt;

use crate::Value;

/// A key/value pair of context attached to a logger.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    key: String,
    value: Value,
}

impl Field {
    /// Create a field.
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// The field key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The field value.
    pub fn value(&self) -> &Value {
        &self.value
    }
}

/// Ordered set of fields, in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fields {
    pairs: Vec<Field>,
}

impl Fields {
    /// Create an empty field set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a field set from a flat `[k1, v1, k2, v2, ...]` sequence.
    ///
    /// A trailing unpaired element is dropped, and so is every pair whose
    /// key is not string-convertible (see [`Value::as_key`]).
    pub fn from_pairs(flat: &[Value]) -> Self {
        let mut fields = Self::new();
        fields.extend_pairs(flat);
        fields
    }

    /// Return a new set holding these fields followed by the valid pairs of
    /// `flat`. `self` is left untouched.
    pub fn with_pairs(&self, flat: &[Value]) -> Self {
        let mut fields = self.clone();
        fields.extend_pairs(flat);
        fields
    }

    fn extend_pairs(&mut self, flat: &[Value]) {
        self.pairs.reserve(flat.len() / 2);
        for pair in flat.chunks_exact(2) {
            if let Some(key) = pair[0].as_key() {
                self.pairs.push(Field {
                    key: key.into_owned(),
                    value: pair[1].clone(),
                });
            }
        }
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Field> {
        self.pairs.iter()
    }

    /// Flatten back into a `[k1, v1, k2, v2, ...]` sequence.
    pub fn to_flat(&self) -> Vec<Value> {
        let mut flat = Vec::with_capacity(self.pairs.len() * 2);
        for field in &self.pairs {
            flat.push(Value::from(field.key.as_str()));
            flat.push(field.value.clone());
        }
        flat
    }

    /// Render as a `[key=value, key=value]` suffix, or an empty string when
    /// there are no fields.
    pub fn postfix(&self) -> String {
        if self.is_empty() {
            String::new()
        } else {
            format!("[{}]", self)
        }
    }
}

impl fmt::Display for Fields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, field) in self.pairs.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}={}", field.key, field.value)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Fields {
    type Item = &'a Field;
    type IntoIter = std::slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}

impl FromIterator<Field> for Fields {
    fn from_iter<I: IntoIterator<Item = Field>>(iter: I) -> Self {
        Self {
            pairs: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values;

    #[test]
    fn test_from_pairs_counts_valid_pairs() {
        let fields = Fields::from_pairs(&values!["test", true, "Error", "serious"]);
        assert_eq!(fields.len(), 2);
        assert_eq!(fields.iter().next().unwrap().key(), "test");
        assert_eq!(fields.iter().nth(1).unwrap().value(), &Value::from("serious"));
    }

    #[test]
    fn test_odd_length_drops_trailing_element() {
        let fields = Fields::from_pairs(&values!["a", 1, "b", 2, "dangling"]);
        assert_eq!(fields.len(), 2);
        assert_eq!(fields.to_flat(), values!["a", 1, "b", 2].to_vec());

        let single = Fields::from_pairs(&values!["alone"]);
        assert!(single.is_empty());
    }

    #[test]
    fn test_non_string_key_drops_only_that_pair() {
        let fields = Fields::from_pairs(&values!["a", 1, 42, "x", "b", 2]);
        assert_eq!(fields.len(), 2);
        assert_eq!(fields.to_string(), "a=1, b=2");
    }

    #[test]
    fn test_display_key_is_accepted() {
        let fields = Fields::from_pairs(&[Value::display('k'), Value::from(1)]);
        assert_eq!(fields.len(), 1);
        assert_eq!(fields.iter().next().unwrap().key(), "k");
    }

    #[test]
    fn test_with_pairs_does_not_mutate() {
        let base = Fields::from_pairs(&values!["a", 1]);
        let extended = base.with_pairs(&values!["b", 2]);
        assert_eq!(base.len(), 1);
        assert_eq!(extended.len(), 2);
        assert_eq!(extended.iter().next(), base.iter().next());
    }

    #[test]
    fn test_chaining_composes() {
        let chained = Fields::new()
            .with_pairs(&values!["a", 1])
            .with_pairs(&values!["b", 2]);
        let flat = Fields::new().with_pairs(&values!["a", 1, "b", 2]);
        assert_eq!(chained, flat);
    }

    #[test]
    fn test_postfix() {
        assert_eq!(Fields::new().postfix(), "");
        let fields = Fields::from_pairs(&values!["test", true, "user", "bob"]);
        assert_eq!(fields.postfix(), "[test=true, user=bob]");
    }

    #[test]
    fn test_to_flat_is_stable() {
        let fields = Fields::from_pairs(&values!["a", 1, "b", "two"]);
        assert_eq!(fields.to_flat(), fields.to_flat());
        assert_eq!(Fields::from_pairs(&fields.to_flat()), fields);
    }

    #[test]
    fn test_collect_fields() {
        let fields: Fields = vec![Field::new("k", 1), Field::new("v", "x")]
            .into_iter()
            .collect();
        assert_eq!(fields.to_string(), "k=1, v=x");
    }
}
