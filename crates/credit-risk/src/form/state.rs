use std::collections::BTreeMap;

/// One stored form value. Multi selects hold every chosen entry; checkboxes
/// hold a flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Many(Vec<String>),
    Flag(bool),
}

/// Shared state every field registers against by string identifier: raw
/// values as entered, the validation error recorded for each identifier, and
/// an optional form-level error owned by no single field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    values: BTreeMap<String, FieldValue>,
    errors: BTreeMap<String, String>,
    form_error: Option<String>,
}

impl FormState {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds state from submitted key/value pairs. A key appearing more than
    /// once (multi select) is promoted to a multi value.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut state = Self::empty();
        for (key, value) in entries {
            match state.values.get_mut(&key) {
                None => {
                    state.values.insert(key, FieldValue::Text(value));
                }
                Some(FieldValue::Text(existing)) => {
                    let first = std::mem::take(existing);
                    state.values.insert(key, FieldValue::Many(vec![first, value]));
                }
                Some(FieldValue::Many(values)) => values.push(value),
                Some(FieldValue::Flag(_)) => {
                    state.values.insert(key, FieldValue::Text(value));
                }
            }
        }
        state
    }

    pub fn set_text(&mut self, id: &str, value: impl Into<String>) {
        self.values.insert(id.to_string(), FieldValue::Text(value.into()));
    }

    pub fn set_many(&mut self, id: &str, values: Vec<String>) {
        self.values.insert(id.to_string(), FieldValue::Many(values));
    }

    pub fn set_flag(&mut self, id: &str, value: bool) {
        self.values.insert(id.to_string(), FieldValue::Flag(value));
    }

    /// Raw text for single-valued fields; empty when unset.
    pub fn text(&self, id: &str) -> &str {
        match self.values.get(id) {
            Some(FieldValue::Text(value)) => value,
            _ => "",
        }
    }

    /// Every stored value for a multi-valued field.
    pub fn many(&self, id: &str) -> Vec<&str> {
        match self.values.get(id) {
            Some(FieldValue::Many(values)) => values.iter().map(String::as_str).collect(),
            Some(FieldValue::Text(value)) if !value.is_empty() => vec![value.as_str()],
            _ => Vec::new(),
        }
    }

    pub fn flag(&self, id: &str) -> bool {
        match self.values.get(id) {
            Some(FieldValue::Flag(value)) => *value,
            Some(FieldValue::Text(value)) => value == "true",
            _ => false,
        }
    }

    pub fn error(&self, id: &str) -> Option<&str> {
        self.errors.get(id).map(String::as_str)
    }

    pub fn record_error(&mut self, id: &str, message: impl Into<String>) {
        self.errors.insert(id.to_string(), message.into());
    }

    pub fn form_error(&self) -> Option<&str> {
        self.form_error.as_deref()
    }

    pub fn record_form_error(&mut self, message: impl Into<String>) {
        self.form_error = Some(message.into());
    }

    pub fn clear_errors(&mut self) {
        self.errors.clear();
        self.form_error = None;
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty() || self.form_error.is_some()
    }

    /// Full replacement: values and validation state both take the
    /// snapshot's contents. Presets never merge with existing input.
    pub fn replace_with(&mut self, snapshot: FormState) {
        *self = snapshot;
    }
}
