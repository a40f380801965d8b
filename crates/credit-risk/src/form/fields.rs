use crate::form::state::FormState;
use crate::form::validation::FieldRules;
use crate::html;

/// One selectable (value, label) pair offered by a select field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Number,
}

impl InputKind {
    fn type_attr(self) -> &'static str {
        match self {
            InputKind::Text => "text",
            InputKind::Number => "number",
        }
    }
}

/// Free-text or numeric input with an optional display prefix.
#[derive(Debug, Clone)]
pub struct TextField {
    pub id: &'static str,
    pub label: Option<&'static str>,
    pub kind: InputKind,
    pub prefix: Option<&'static str>,
    pub helper_text: Option<&'static str>,
    pub rules: FieldRules,
}

impl TextField {
    pub fn text(id: &'static str, label: &'static str) -> Self {
        Self {
            id,
            label: Some(label),
            kind: InputKind::Text,
            prefix: None,
            helper_text: None,
            rules: FieldRules::none(),
        }
    }

    pub fn number(id: &'static str, label: &'static str) -> Self {
        Self {
            kind: InputKind::Number,
            ..Self::text(id, label)
        }
    }

    pub fn with_prefix(mut self, prefix: &'static str) -> Self {
        self.prefix = Some(prefix);
        self
    }

    pub fn with_helper(mut self, helper_text: &'static str) -> Self {
        self.helper_text = Some(helper_text);
        self
    }

    pub fn with_rules(mut self, rules: FieldRules) -> Self {
        self.rules = rules;
        self
    }
}

/// Select over a fixed option list, in single or multi mode.
#[derive(Debug, Clone)]
pub struct SelectField {
    pub id: &'static str,
    pub label: Option<&'static str>,
    pub placeholder: Option<&'static str>,
    pub helper_text: Option<&'static str>,
    pub options: Vec<SelectOption>,
    pub multiple: bool,
    pub rules: FieldRules,
}

impl SelectField {
    pub fn single(id: &'static str, label: &'static str, options: Vec<SelectOption>) -> Self {
        Self {
            id,
            label: Some(label),
            placeholder: None,
            helper_text: None,
            options,
            multiple: false,
            rules: FieldRules::none(),
        }
    }

    pub fn multi(id: &'static str, label: &'static str, options: Vec<SelectOption>) -> Self {
        Self {
            multiple: true,
            ..Self::single(id, label, options)
        }
    }

    pub fn with_placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn with_helper(mut self, helper_text: &'static str) -> Self {
        self.helper_text = Some(helper_text);
        self
    }

    pub fn with_rules(mut self, rules: FieldRules) -> Self {
        self.rules = rules;
        self
    }
}

/// Boolean flag rendered as a checkbox with an inline label.
#[derive(Debug, Clone)]
pub struct CheckboxField {
    pub id: &'static str,
    pub label: &'static str,
}

impl CheckboxField {
    pub fn new(id: &'static str, label: &'static str) -> Self {
        Self { id, label }
    }
}

/// The closed set of form primitives a page composes.
#[derive(Debug, Clone)]
pub enum Field {
    Text(TextField),
    Select(SelectField),
    Checkbox(CheckboxField),
}

impl From<TextField> for Field {
    fn from(value: TextField) -> Self {
        Self::Text(value)
    }
}

impl From<SelectField> for Field {
    fn from(value: SelectField) -> Self {
        Self::Select(value)
    }
}

impl From<CheckboxField> for Field {
    fn from(value: CheckboxField) -> Self {
        Self::Checkbox(value)
    }
}

impl Field {
    pub fn id(&self) -> &'static str {
        match self {
            Field::Text(field) => field.id,
            Field::Select(field) => field.id,
            Field::Checkbox(field) => field.id,
        }
    }

    pub fn rules(&self) -> Option<&FieldRules> {
        match self {
            Field::Text(field) => Some(&field.rules),
            Field::Select(field) => Some(&field.rules),
            Field::Checkbox(_) => None,
        }
    }

    fn raw_value(&self, form: &FormState) -> String {
        match self {
            Field::Text(field) => form.text(field.id).to_string(),
            Field::Select(field) if field.multiple => form
                .many(field.id)
                .first()
                .map(|value| value.to_string())
                .unwrap_or_default(),
            Field::Select(field) => form.text(field.id).to_string(),
            Field::Checkbox(field) => {
                if form.flag(field.id) {
                    "true".to_string()
                } else {
                    String::new()
                }
            }
        }
    }

    /// Renders label, control, inline error, and helper text in that fixed
    /// vertical order, reading value and error back from the shared state.
    pub fn render(&self, form: &FormState) -> String {
        match self {
            Field::Text(field) => render_text(field, form),
            Field::Select(field) => render_select(field, form),
            Field::Checkbox(field) => render_checkbox(field, form),
        }
    }
}

/// Runs every field's rules against the current values, recording errors by
/// identifier. Returns true when the form may submit.
pub fn validate(fields: &[Field], form: &mut FormState) -> bool {
    form.clear_errors();
    for field in fields {
        let Some(rules) = field.rules() else {
            continue;
        };
        let raw = field.raw_value(form);
        if let Some(message) = rules.check(&raw) {
            form.record_error(field.id(), message);
        }
    }
    !form.has_errors()
}

fn push_label(out: &mut String, id: &str, label: &str, required: bool) {
    out.push_str(&format!(
        "<label class=\"label\" for=\"{id}\">{}",
        html::escape(label)
    ));
    if required {
        out.push_str("<span class=\"required-mark\">*</span>");
    }
    out.push_str("</label>\n");
}

fn push_error_and_helper(out: &mut String, error: Option<&str>, helper: Option<&'static str>) {
    if let Some(error) = error {
        out.push_str(&format!(
            "<p class=\"error-message\">{}</p>\n",
            html::escape(error)
        ));
    }
    if let Some(helper) = helper {
        out.push_str(&format!(
            "<p class=\"helper-text\">{}</p>\n",
            html::escape(helper)
        ));
    }
}

fn render_text(field: &TextField, form: &FormState) -> String {
    let mut out = String::from("<div class=\"field\">\n");
    if let Some(label) = field.label {
        push_label(&mut out, field.id, label, field.rules.is_required());
    }

    let error = form.error(field.id);
    let mut classes = String::from("input");
    if error.is_some() {
        classes.push_str(" invalid");
    }

    out.push_str("<div class=\"control\">\n");
    if let Some(prefix) = field.prefix {
        out.push_str(&format!(
            "<span class=\"prefix\">{}</span>\n",
            html::escape(prefix)
        ));
    }
    out.push_str(&format!(
        "<input class=\"{classes}\" id=\"{id}\" name=\"{id}\" type=\"{kind}\" value=\"{value}\">\n",
        id = field.id,
        kind = field.kind.type_attr(),
        value = html::escape(form.text(field.id)),
    ));
    out.push_str("</div>\n");

    push_error_and_helper(&mut out, error, field.helper_text);
    out.push_str("</div>\n");
    out
}

fn render_select(field: &SelectField, form: &FormState) -> String {
    let mut out = String::from("<div class=\"field\">\n");
    if let Some(label) = field.label {
        push_label(&mut out, field.id, label, field.rules.is_required());
    }

    let error = form.error(field.id);
    let mut classes = String::from("select");
    if error.is_some() {
        classes.push_str(" invalid");
    }

    if field.multiple {
        out.push_str(&format!(
            "<select class=\"{classes}\" id=\"{id}\" name=\"{id}\" multiple>\n",
            id = field.id
        ));
        let chosen = form.many(field.id);
        for option in &field.options {
            let selected = if chosen.iter().any(|value| *value == option.value) {
                " selected"
            } else {
                ""
            };
            out.push_str(&format!(
                "<option value=\"{}\"{selected}>{}</option>\n",
                option.value,
                html::escape(option.label)
            ));
        }
    } else {
        out.push_str(&format!(
            "<select class=\"{classes}\" id=\"{id}\" name=\"{id}\">\n",
            id = field.id
        ));
        // The leading empty option doubles as the placeholder, so a stored
        // value with no matching option displays as empty.
        out.push_str(&format!(
            "<option value=\"\">{}</option>\n",
            html::escape(field.placeholder.unwrap_or(""))
        ));
        let current = form.text(field.id);
        for option in &field.options {
            let selected = if option.value == current {
                " selected"
            } else {
                ""
            };
            out.push_str(&format!(
                "<option value=\"{}\"{selected}>{}</option>\n",
                option.value,
                html::escape(option.label)
            ));
        }
    }
    out.push_str("</select>\n");

    push_error_and_helper(&mut out, error, field.helper_text);
    out.push_str("</div>\n");
    out
}

fn render_checkbox(field: &CheckboxField, form: &FormState) -> String {
    let checked = if form.flag(field.id) { " checked" } else { "" };
    format!(
        "<div class=\"field\">\n<label class=\"checkbox-label\"><input type=\"checkbox\" id=\"{id}\" name=\"{id}\" value=\"true\"{checked}> {label}</label>\n</div>\n",
        id = field.id,
        label = html::escape(field.label),
    )
}
