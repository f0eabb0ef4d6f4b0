//! Presence trees summarizing which fields a batch of records uses

use std::collections::BTreeMap;

use serde_json::Value;

/// Field name → child shape. An empty shape is a leaf: the field was seen
/// but held a scalar (or nothing with fields).
///
/// Arrays contribute the union of their elements, so `[{"a": 1}, {"b": 2}]`
/// and `{"a": 1, "b": 2}` have the same shape. Merging is commutative and
/// idempotent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Shape(BTreeMap<String, Shape>);

impl Shape {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn of(value: &Value) -> Self {
        let mut shape = Self::new();
        shape.observe(value);
        shape
    }

    pub fn from_rows<'a, I>(rows: I) -> Self
    where
        I: IntoIterator<Item = &'a Value>,
    {
        let mut shape = Self::new();
        for row in rows {
            shape.observe(row);
        }
        shape
    }

    /// Fold the fields of `value` into this shape
    pub fn observe(&mut self, value: &Value) {
        match value {
            Value::Array(items) => items.iter().for_each(|item| self.observe(item)),
            Value::Object(map) => {
                for (key, child) in map {
                    match self.0.get_mut(key) {
                        Some(existing) => existing.observe(child),
                        None => {
                            self.0.insert(key.clone(), Self::of(child));
                        }
                    }
                }
            }
            _ => {}
        }
    }

    pub fn merge(&mut self, other: &Shape) {
        for (key, child) in &other.0 {
            self.0.entry(key.clone()).or_default().merge(child);
        }
    }

    pub fn get(&self, key: &str) -> Option<&Shape> {
        self.0.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn is_leaf(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn leaf() -> Shape {
        Shape::new()
    }

    fn node<const N: usize>(children: [(&str, Shape); N]) -> Shape {
        Shape(
            children
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        )
    }

    #[test]
    fn lists_union_their_elements() {
        let shape = Shape::of(&json!({
            "address": [{"street": "123 Main St"}, {"city": "Springfield"}],
            "name": "Jane Smith",
        }));
        assert_eq!(
            shape,
            node([
                ("address", node([("city", leaf()), ("street", leaf())])),
                ("name", leaf()),
            ])
        );
    }

    #[test]
    fn scalars_and_nulls_are_leaves() {
        let shape = Shape::of(&json!({"a": null, "b": [], "c": {}, "d": [[{"e": 1}]]}));
        assert!(shape.get("a").unwrap().is_leaf());
        assert!(shape.get("b").unwrap().is_leaf());
        assert!(shape.get("c").unwrap().is_leaf());
        assert!(shape.get("d").unwrap().contains("e"));
        assert_eq!(Shape::of(&json!(5)), leaf());
    }

    #[test]
    fn merge_is_commutative_and_idempotent() {
        let a = json!({"code": {"coding": [{"system": "x"}]}, "id": "1"});
        let b = json!({"code": {"text": "t"}, "subject": {"reference": "Patient/1"}});

        let ab = Shape::from_rows([&a, &b]);
        let ba = Shape::from_rows([&b, &a]);
        let aba = Shape::from_rows([&a, &b, &a]);
        assert_eq!(ab, ba);
        assert_eq!(ab, aba);

        let mut merged = Shape::of(&a);
        merged.merge(&Shape::of(&b));
        merged.merge(&Shape::of(&a));
        assert_eq!(merged, ab);
        assert_eq!(
            ab.get("code").unwrap().keys().collect::<Vec<_>>(),
            ["coding", "text"]
        );
    }
}
