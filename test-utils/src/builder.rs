use serde_json::{Map, Value};

/// Builder deriving invalid or edge-case variants from a conforming payload.
///
/// Start from a fixture, then overwrite, drop or nest values until the payload exercises the
/// rule under test.
///
/// # Example
///
/// ```rust,ignore
/// use serde_json::json;
/// use test_utils::{builder::PayloadBuilder, fixture};
///
/// let message = PayloadBuilder::from(fixture::message::entity())
///     .remove("content")
///     .set_at(&["author", "username"], json!(42))
///     .build();
/// ```
pub struct PayloadBuilder {
    value: Value,
}

impl PayloadBuilder {
    /// Creates a builder over an empty JSON object.
    pub fn new() -> Self {
        Self {
            value: Value::Object(Map::new()),
        }
    }

    /// Sets a top-level key, replacing any existing value.
    pub fn set(self, key: &str, value: Value) -> Self {
        self.set_at(&[key], value)
    }

    /// Removes a top-level key if present.
    pub fn remove(mut self, key: &str) -> Self {
        if let Value::Object(map) = &mut self.value {
            map.remove(key);
        }
        self
    }

    /// Sets a value at a nested path of object keys or array indices.
    ///
    /// Missing objects along the path are created. An index past the end of an array appends.
    ///
    /// # Panics
    /// - When the path crosses a scalar value
    pub fn set_at(mut self, path: &[&str], value: Value) -> Self {
        let Some((last, parents)) = path.split_last() else {
            self.value = value;
            return self;
        };

        let mut node = &mut self.value;
        for key in parents {
            node = child(node, key);
        }

        match node {
            Value::Array(items) => match last.parse::<usize>() {
                Ok(index) if index < items.len() => items[index] = value,
                Ok(_) => items.push(value),
                Err(_) => panic!("'{}' is not an array index", last),
            },
            Value::Object(map) => {
                map.insert(last.to_string(), value);
            }
            other => panic!("cannot set '{}' inside {}", last, other),
        }

        self
    }

    pub fn build(self) -> Value {
        self.value
    }
}

impl Default for PayloadBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Value> for PayloadBuilder {
    fn from(value: Value) -> Self {
        Self { value }
    }
}

fn child<'a>(node: &'a mut Value, key: &str) -> &'a mut Value {
    match node {
        Value::Array(items) => {
            let index: usize = key
                .parse()
                .unwrap_or_else(|_| panic!("'{}' is not an array index", key));
            &mut items[index]
        }
        Value::Object(map) => map
            .entry(key.to_string())
            .or_insert_with(|| Value::Object(Map::new())),
        other => panic!("cannot descend into '{}' inside {}", key, other),
    }
}

#[cfg(test)]
mod tests {
    use schema::registry;
    use serde_json::json;

    use super::*;
    use crate::fixture;

    /// Tests deriving a message without required content.
    ///
    /// Expected: BASE_TYPE_REQUIRED under `content`
    #[test]
    fn removes_required_field() {
        let message = PayloadBuilder::from(fixture::message::entity())
            .remove("content")
            .build();

        let err = registry::validate_json("MessageResponse", &message).unwrap_err();
        let details = err.details();
        assert!(details.errors.is_empty());
        assert_eq!(details.codes_at(&["content"]), vec!["BASE_TYPE_REQUIRED"]);
    }

    /// Tests nested writes through objects and arrays.
    ///
    /// Expected: values placed at the addressed positions, missing objects created
    #[test]
    fn sets_nested_values() {
        let value = PayloadBuilder::new()
            .set("options", json!([{ "name": "a" }]))
            .set_at(&["options", "0", "name"], json!("b"))
            .set_at(&["options", "1"], json!({ "name": "c" }))
            .set_at(&["nested", "deep"], json!(true))
            .build();

        assert_eq!(value["options"][0]["name"], "b");
        assert_eq!(value["options"][1]["name"], "c");
        assert_eq!(value["nested"]["deep"], true);
    }
}
