use super::*;

impl ParamStore {
    /// Get a typed value using an absolute dotted path whose first segment
    /// names a document.
    ///
    /// Loading is lazy, so the store is borrowed mutably: documents and
    /// linked resources demanded by the path are pulled in on the way.
    ///
    /// # Examples
    /// ```no_run
    /// # use axon_params::ParamStore;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut store = ParamStore::new("parameters");
    /// let size: u32 = store.get("network.exc_layer.size")?;
    /// let weight: f64 = store.get("network.exc_inh_weight")?;
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    /// Returns an error if the path doesn't resolve or the value can't be
    /// converted to type T.
    pub fn get<T>(&mut self, path: &str) -> Result<T, AxonError>
    where
        T: TryFrom<Value, Error = AxonError>,
    {
        let value = self.get_value(path)?;
        T::try_from(value)
    }

    /// Get an optional typed value - returns `None` if the path doesn't
    /// address an existing node.
    pub fn get_optional<T>(&mut self, path: &str) -> Result<Option<T>, AxonError>
    where
        T: TryFrom<Value, Error = AxonError>,
    {
        match self.get_value(path) {
            Ok(value) => Ok(Some(T::try_from(value)?)),
            Err(AxonError::NotFound { .. }) | Err(AxonError::PathError { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Get a value with a fallback default.
    ///
    /// # Examples
    /// ```no_run
    /// # use axon_params::ParamStore;
    /// # let mut store = ParamStore::new("parameters");
    /// let trials = store.get_or("experiment.trials", 10u32);
    /// let record = store.get_or("experiment.record", false);
    /// ```
    pub fn get_or<T>(&mut self, path: &str, default: T) -> T
    where
        T: TryFrom<Value, Error = AxonError>,
    {
        self.get(path).unwrap_or(default)
    }

    /// Get a raw `Value`, fully resolved: the result contains no `Reference`
    /// or `ResourceLink` nodes.
    ///
    /// A bare document name returns the whole resolved document.
    pub fn get_value(&mut self, path: &str) -> Result<Value, AxonError> {
        if path.trim().is_empty() {
            return Err(AxonError::PathError {
                document: String::new(),
                path: String::new(),
                message: "Empty parameter path".into(),
                hint: Some("Use 'document' or 'document.key.subkey'".into()),
                code: Some(501),
            });
        }

        let segments: Vec<String> = path.split('.').map(str::to_string).collect();
        let (doc, rest) = if let Some(split) = segments.split_first() {
            split
        } else {
            unreachable!()
        };
        resolve::resolve_absolute(self, doc, rest)
    }

    /// Get all keys of the mapping at a given path.
    ///
    /// # Examples
    /// ```no_run
    /// # use axon_params::ParamStore;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// # let mut store = ParamStore::new("parameters");
    /// for key in store.get_keys("network.exc_layer")? {
    ///     println!("exc_layer.{}", key);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn get_keys(&mut self, path: &str) -> Result<Vec<String>, AxonError> {
        let value = self.get_value(path)?;
        match value {
            Value::Mapping(entries) => Ok(entries.keys().cloned().collect()),
            other => Err(AxonError::TypeError {
                message: format!("Path '{}' is not a mapping (got {})", path, other.type_name()),
                line: 0,
                column: 0,
                hint: Some("Only mappings have keys".into()),
                code: Some(306),
            }),
        }
    }

    /// Check whether a dotted path addresses an existing node.
    pub fn has(&mut self, path: &str) -> bool {
        self.get_value(path).is_ok()
    }
}
