use crate::Value;

/// One bind parameter for an identity-based lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryParameterData {
    name: String,
    value: Value,
}

impl QueryParameterData {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> QueryParameterData {
        QueryParameterData {
            name: name.into(),
            value: value.into(),
        }
    }

    /// The flat property name, as used for representation-map keys.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn into_value(self) -> Value {
        self.value
    }

    /// The property path for a query rooted at `prefix`.
    ///
    /// ```
    /// # use rewind_core::QueryParameterData;
    /// let data = QueryParameterData::new("id", 1_i64);
    /// assert_eq!(data.property(Some("e")), "e.id");
    /// assert_eq!(data.property(None), "id");
    /// ```
    pub fn property(&self, prefix: Option<&str>) -> String {
        match prefix {
            Some(prefix) => format!("{prefix}.{}", self.name),
            None => self.name.clone(),
        }
    }

    /// Name under which the value is bound as a named query parameter.
    pub fn query_parameter_name(&self) -> &str {
        &self.name
    }
}
