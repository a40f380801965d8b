use crate::form::{
    validate, CheckboxField, Field, FieldRules, FormState, SelectField, SelectOption, TextField,
};
use crate::html;
use crate::pages::layout;
use crate::risk::domain::{ApplicantSnapshot, EmploymentStatus, EmploymentType, SlikHistory};
use crate::risk::presets::PresetKind;
use crate::risk::view::{render_assessment, AssessmentState};
use crate::seo::{page_metadata, PageOverrides, SiteConfig};

fn employment_status_options() -> Vec<SelectOption> {
    EmploymentStatus::ALL
        .into_iter()
        .map(|status| SelectOption {
            value: status.as_str(),
            label: status.label(),
        })
        .collect()
}

fn employment_type_options() -> Vec<SelectOption> {
    EmploymentType::ALL
        .into_iter()
        .map(|kind| SelectOption {
            value: kind.as_str(),
            label: kind.label(),
        })
        .collect()
}

fn slik_history_options() -> Vec<SelectOption> {
    SlikHistory::ALL
        .into_iter()
        .map(|tier| SelectOption {
            value: tier.as_str(),
            label: tier.label(),
        })
        .collect()
}

/// Every field of the application snapshot form with its rules, in form
/// order.
pub fn applicant_fields() -> Vec<Field> {
    vec![
        TextField::number("age", "Age")
            .with_helper("In years")
            .with_rules(FieldRules::required("Age is required").with_min(18.0, "Minimum age is 18"))
            .into(),
        SelectField::single(
            "employment_status",
            "Employment status",
            employment_status_options(),
        )
        .with_placeholder("Select")
        .with_rules(FieldRules::required("Employment status is required"))
        .into(),
        SelectField::single(
            "employment_type",
            "Employment type",
            employment_type_options(),
        )
        .with_placeholder("Select")
        .with_rules(FieldRules::required("Employment type is required"))
        .into(),
        TextField::number("relationship_tenure_months", "Relationship length")
            .with_helper("Client-institution relationship in months")
            .with_rules(FieldRules::required("Tenure is required").with_min(0.0, "Cannot be negative"))
            .into(),
        CheckboxField::new("is_fraud", "This application is flagged as potential fraud").into(),
        TextField::number("late_payments_last_years", "Late payments (last years)")
            .with_helper("Across existing loans")
            .with_rules(
                FieldRules::required("This field is required").with_min(0.0, "Cannot be negative"),
            )
            .into(),
        TextField::number("active_loans_count", "Active loans count")
            .with_helper("Number of loans currently active")
            .with_rules(
                FieldRules::required("Active loans count is required")
                    .with_min(0.0, "Cannot be negative"),
            )
            .into(),
        SelectField::single(
            "slik_loan_history",
            "SLIK loan history (Kolektibilitas)",
            slik_history_options(),
        )
        .with_placeholder("Choose loan history")
        .with_rules(FieldRules::required("SLIK history is required"))
        .into(),
        TextField::number("monthly_income_idr", "Monthly income")
            .with_prefix("Rp")
            .with_helper("Stable income per month")
            .with_rules(
                FieldRules::required("Monthly income is required").with_min(0.0, "Must be positive"),
            )
            .into(),
        TextField::number("avg_monthly_balance_idr", "Average monthly balance")
            .with_prefix("Rp")
            .with_helper("Average closing balance")
            .with_rules(
                FieldRules::required("Average balance is required").with_min(0.0, "Must be positive"),
            )
            .into(),
        TextField::number("avg_deposit_amount_idr", "Average deposit amount")
            .with_prefix("Rp")
            .with_helper("Typical deposit size")
            .with_rules(
                FieldRules::required("Average deposit is required").with_min(0.0, "Must be positive"),
            )
            .into(),
        TextField::number("debit_card_spending_idr", "Debit card spending")
            .with_prefix("Rp")
            .with_helper("Average monthly spending")
            .with_rules(
                FieldRules::required("Spending is required").with_min(0.0, "Must be positive"),
            )
            .into(),
        TextField::number("total_outstanding_debt_idr", "Total outstanding debt")
            .with_prefix("Rp")
            .with_helper("Remaining principal across all loans")
            .with_rules(
                FieldRules::required("Outstanding debt is required")
                    .with_min(0.0, "Must be positive"),
            )
            .into(),
        TextField::number("loan_application_amount_idr", "Requested loan amount")
            .with_prefix("Rp")
            .with_helper("Loan amount for this application")
            .with_rules(
                FieldRules::required("Requested amount is required")
                    .with_min(0.0, "Must be positive"),
            )
            .into(),
    ]
}

/// Validates the submitted state against the form's rules, recording inline
/// errors. Returns true when the form may be sent to the engine.
pub fn validate_applicant_form(form: &mut FormState) -> bool {
    validate(&applicant_fields(), form)
}

/// Pre-fills the form from a snapshot, replacing all values and errors. This
/// is exactly what the preset buttons do.
pub fn form_from_snapshot(snapshot: &ApplicantSnapshot) -> FormState {
    let mut form = FormState::empty();
    form.set_text("age", snapshot.age.to_string());
    form.set_text("employment_status", snapshot.employment_status.as_str());
    form.set_text("employment_type", snapshot.employment_type.as_str());
    form.set_text(
        "relationship_tenure_months",
        snapshot.relationship_tenure_months.to_string(),
    );
    form.set_flag("is_fraud", snapshot.is_fraud);
    form.set_text("monthly_income_idr", snapshot.monthly_income_idr.to_string());
    form.set_text(
        "avg_monthly_balance_idr",
        snapshot.avg_monthly_balance_idr.to_string(),
    );
    form.set_text(
        "avg_deposit_amount_idr",
        snapshot.avg_deposit_amount_idr.to_string(),
    );
    form.set_text(
        "debit_card_spending_idr",
        snapshot.debit_card_spending_idr.to_string(),
    );
    form.set_text(
        "total_outstanding_debt_idr",
        snapshot.total_outstanding_debt_idr.to_string(),
    );
    form.set_text(
        "loan_application_amount_idr",
        snapshot.loan_application_amount_idr.to_string(),
    );
    form.set_text(
        "late_payments_last_years",
        snapshot.late_payments_last_years.to_string(),
    );
    form.set_text("slik_loan_history", snapshot.slik_loan_history.as_str());
    form.set_text("active_loans_count", snapshot.active_loans_count.to_string());
    form
}

/// Coerces a validated form into the wire snapshot. `None` when a value does
/// not fit the contract, which validation rules out for in-browser input.
pub fn snapshot_from_form(form: &FormState) -> Option<ApplicantSnapshot> {
    Some(ApplicantSnapshot {
        age: number(form, "age")?,
        employment_status: EmploymentStatus::parse(form.text("employment_status"))?,
        employment_type: EmploymentType::parse(form.text("employment_type"))?,
        relationship_tenure_months: number(form, "relationship_tenure_months")?,
        is_fraud: form.flag("is_fraud"),
        monthly_income_idr: number(form, "monthly_income_idr")?,
        avg_monthly_balance_idr: number(form, "avg_monthly_balance_idr")?,
        avg_deposit_amount_idr: number(form, "avg_deposit_amount_idr")?,
        debit_card_spending_idr: number(form, "debit_card_spending_idr")?,
        total_outstanding_debt_idr: number(form, "total_outstanding_debt_idr")?,
        loan_application_amount_idr: number(form, "loan_application_amount_idr")?,
        late_payments_last_years: number(form, "late_payments_last_years")?,
        slik_loan_history: SlikHistory::parse(form.text("slik_loan_history"))?,
        active_loans_count: number(form, "active_loans_count")?,
    })
}

fn number<T: std::str::FromStr>(form: &FormState, id: &str) -> Option<T> {
    form.text(id).trim().parse().ok()
}

/// Renders the full console page for the given form and assessment state.
pub fn render_page(site: &SiteConfig, form: &FormState, assessment: &AssessmentState) -> String {
    let meta = page_metadata(site, PageOverrides::default());
    let fields = applicant_fields();
    let submitting = assessment.is_loading();

    let mut body = String::from("<main class=\"page\">\n");

    body.push_str("<header class=\"page-header\">\n<h1>Credit Risk Classifier</h1>\n");
    body.push_str(
        "<p class=\"muted\">An integrated credit risk approach that combines ML predictions with a rule-based expert system.</p>\n",
    );
    body.push_str("</header>\n");

    body.push_str("<section class=\"card\">\n<div class=\"card-header\">\n");
    body.push_str("<h2 class=\"card-title\">Application snapshot</h2>\n");
    body.push_str(
        "<p class=\"muted\">Fill the profile, behaviour, and financial fields that feed the engine.</p>\n",
    );
    body.push_str("<div class=\"preset-row\">\n<span class=\"muted\">Use example data:</span>\n");
    for preset in PresetKind::ALL {
        body.push_str(&format!(
            "<a class=\"btn btn-secondary\" href=\"/?preset={}\">{}</a>\n",
            preset.slug(),
            preset.label()
        ));
    }
    body.push_str("</div>\n</div>\n");

    body.push_str("<form class=\"card-body\" method=\"post\" action=\"/assess\">\n");

    body.push_str("<div class=\"form-section\">\n<h3 class=\"section-title\">Profile</h3>\n");
    body.push_str("<div class=\"grid-3\">\n");
    body.push_str(&field_markup(&fields, "age", form));
    body.push_str(&field_markup(&fields, "employment_status", form));
    body.push_str(&field_markup(&fields, "employment_type", form));
    body.push_str("</div>\n");
    body.push_str(&field_markup(&fields, "relationship_tenure_months", form));
    body.push_str(&field_markup(&fields, "is_fraud", form));
    body.push_str("</div>\n<hr class=\"separator\">\n");

    body.push_str(
        "<div class=\"form-section\">\n<h3 class=\"section-title\">Behaviour &amp; credit history</h3>\n",
    );
    body.push_str("<div class=\"grid-2\">\n");
    body.push_str(&field_markup(&fields, "late_payments_last_years", form));
    body.push_str(&field_markup(&fields, "active_loans_count", form));
    body.push_str("</div>\n");
    body.push_str(&field_markup(&fields, "slik_loan_history", form));
    body.push_str("</div>\n<hr class=\"separator\">\n");

    body.push_str(
        "<div class=\"form-section\">\n<h3 class=\"section-title\">Financial snapshot</h3>\n",
    );
    body.push_str("<div class=\"grid-2\">\n");
    body.push_str(&field_markup(&fields, "monthly_income_idr", form));
    body.push_str(&field_markup(&fields, "avg_monthly_balance_idr", form));
    body.push_str("</div>\n<div class=\"grid-2\">\n");
    body.push_str(&field_markup(&fields, "avg_deposit_amount_idr", form));
    body.push_str(&field_markup(&fields, "debit_card_spending_idr", form));
    body.push_str("</div>\n");
    body.push_str(&field_markup(&fields, "total_outstanding_debt_idr", form));
    body.push_str("</div>\n<hr class=\"separator\">\n");

    body.push_str(
        "<div class=\"form-section\">\n<h3 class=\"section-title\">Current application</h3>\n",
    );
    body.push_str(&field_markup(&fields, "loan_application_amount_idr", form));
    body.push_str("</div>\n");

    if let Some(message) = form.form_error() {
        body.push_str(&format!(
            "<p class=\"error-message\">{}</p>\n",
            html::escape(message)
        ));
    }

    if submitting {
        body.push_str(
            "<button class=\"btn btn-submit\" type=\"submit\" disabled>Evaluating&#8230;</button>\n",
        );
    } else {
        body.push_str("<button class=\"btn btn-submit\" type=\"submit\">Run assessment</button>\n");
    }
    body.push_str("</form>\n</section>\n");

    body.push_str("<section class=\"card\">\n<div class=\"card-header\">\n");
    body.push_str("<h2 class=\"card-title\">Classification result</h2>\n</div>\n");
    body.push_str("<div class=\"card-body\">\n");
    body.push_str(&render_assessment(assessment));
    body.push_str("</div>\n</section>\n");

    body.push_str("</main>\n");
    layout(&meta, &body)
}

fn field_markup(fields: &[Field], id: &str, form: &FormState) -> String {
    fields
        .iter()
        .find(|field| field.id() == id)
        .map(|field| field.render(form))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::risk::presets::{HIGH_RISK, LOW_RISK};

    fn site() -> SiteConfig {
        SiteConfig {
            title: "Credit Risk Console".to_string(),
            description: "Console description.".to_string(),
            url: "http://localhost:3000".to_string(),
        }
    }

    #[test]
    fn form_lists_every_wire_field_once() {
        let fields = applicant_fields();
        let ids: Vec<&str> = fields.iter().map(|field| field.id()).collect();
        for id in [
            "age",
            "employment_status",
            "employment_type",
            "relationship_tenure_months",
            "is_fraud",
            "monthly_income_idr",
            "avg_monthly_balance_idr",
            "avg_deposit_amount_idr",
            "debit_card_spending_idr",
            "total_outstanding_debt_idr",
            "loan_application_amount_idr",
            "late_payments_last_years",
            "slik_loan_history",
            "active_loans_count",
        ] {
            assert_eq!(ids.iter().filter(|have| **have == id).count(), 1, "{id}");
        }
        assert_eq!(ids.len(), 14);
    }

    #[test]
    fn preset_round_trips_through_the_form_unchanged() {
        let form = form_from_snapshot(&LOW_RISK);
        let snapshot = snapshot_from_form(&form).expect("preset coerces back");
        assert_eq!(snapshot, LOW_RISK);
    }

    #[test]
    fn validation_passes_for_presets_and_fails_for_minors() {
        let mut form = form_from_snapshot(&HIGH_RISK);
        assert!(validate_applicant_form(&mut form));

        form.set_text("age", "17");
        assert!(!validate_applicant_form(&mut form));
        assert_eq!(form.error("age"), Some("Minimum age is 18"));
    }

    #[test]
    fn empty_submission_reports_required_fields_inline() {
        let mut form = FormState::empty();
        assert!(!validate_applicant_form(&mut form));
        assert_eq!(form.error("age"), Some("Age is required"));
        assert_eq!(form.error("slik_loan_history"), Some("SLIK history is required"));
        assert_eq!(
            form.error("monthly_income_idr"),
            Some("Monthly income is required")
        );
    }

    #[test]
    fn coercion_rejects_values_outside_the_contract() {
        let mut form = form_from_snapshot(&LOW_RISK);
        form.set_text("employment_status", "astronaut");
        assert!(snapshot_from_form(&form).is_none());

        let mut form = form_from_snapshot(&LOW_RISK);
        form.set_text("active_loans_count", "1.5");
        assert!(snapshot_from_form(&form).is_none());
    }

    #[test]
    fn page_renders_header_presets_and_empty_panel() {
        let markup = render_page(&site(), &FormState::empty(), &AssessmentState::Empty);
        assert!(markup.contains("Credit Risk Classifier"));
        assert!(markup.contains("Use example data:"));
        assert!(markup.contains("href=\"/?preset=high\">High risk</a>"));
        assert!(markup.contains("href=\"/?preset=low\">Low risk</a>"));
        assert!(markup.contains("Behaviour &amp; credit history"));
        assert!(markup.contains("No assessment yet"));
        assert!(markup.contains(">Run assessment</button>"));
        assert!(markup.contains("action=\"/assess\""));
    }

    #[test]
    fn page_with_preset_values_fills_the_controls() {
        let form = form_from_snapshot(&LOW_RISK);
        let markup = render_page(&site(), &form, &AssessmentState::Empty);
        assert!(markup.contains("value=\"32\""));
        assert!(markup.contains("<option value=\"employed\" selected>Employed</option>"));
        assert!(markup.contains("value=\"60000000\""));
    }

    #[test]
    fn form_level_error_renders_inside_the_form() {
        let mut form = form_from_snapshot(&LOW_RISK);
        form.record_form_error("The submitted values could not be processed.");
        let markup = render_page(&site(), &form, &AssessmentState::Empty);

        let error = markup
            .find("The submitted values could not be processed.")
            .expect("message rendered");
        let button = markup
            .find(">Run assessment</button>")
            .expect("button rendered");
        assert!(error < button);
    }

    #[test]
    fn loading_page_disables_the_submit_button() {
        let markup = render_page(&site(), &FormState::empty(), &AssessmentState::Loading);
        assert!(markup.contains("disabled>Evaluating"));
        assert!(markup.contains("Engine is processing this application"));
    }
}
