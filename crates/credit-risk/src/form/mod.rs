//! Form primitives: a shared state object keyed by field identifier, per-field
//! validation rules, and the input/select/checkbox renderers that read their
//! value and error back from that state.

pub mod fields;
pub mod state;
pub mod validation;

pub use fields::{validate, CheckboxField, Field, InputKind, SelectField, SelectOption, TextField};
pub use state::{FieldValue, FormState};
pub use validation::FieldRules;
