use crate::infra::CannedEvaluator;
use clap::Args;
use credit_risk::error::AppError;
use credit_risk::pages::credit_risk::{
    form_from_snapshot, snapshot_from_form, validate_applicant_form,
};
use credit_risk::risk::{PresetKind, RiskEvaluator};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Example application to run: high, medium, or low. Defaults to medium.
    #[arg(long, value_parser = parse_preset)]
    pub(crate) preset: Option<PresetKind>,
    /// Print the JSON payload sent to the engine
    #[arg(long)]
    pub(crate) show_payload: bool,
}

fn parse_preset(raw: &str) -> Result<PresetKind, String> {
    PresetKind::from_slug(raw.trim())
        .ok_or_else(|| format!("unknown preset '{raw}', expected high, medium, or low"))
}

/// Walks one example application through the full assessment lifecycle
/// against a canned engine, printing the verdict the console would render.
pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        preset,
        show_payload,
    } = args;
    let preset = preset.unwrap_or(PresetKind::Medium);

    println!("Credit risk assessment demo");
    println!("Example application: {}", preset.label());

    let mut form = form_from_snapshot(&preset.snapshot());
    if !validate_applicant_form(&mut form) {
        println!("  Example data failed validation");
        return Ok(());
    }
    let Some(snapshot) = snapshot_from_form(&form) else {
        println!("  Example data does not fit the wire contract");
        return Ok(());
    };

    if show_payload {
        match serde_json::to_string_pretty(&snapshot) {
            Ok(json) => println!("\nEngine payload:\n{json}"),
            Err(err) => println!("\nEngine payload unavailable: {err}"),
        }
    }

    let engine = CannedEvaluator;
    let result = match engine.evaluate(&snapshot, None).await {
        Ok(result) => result,
        Err(err) => {
            println!("  Evaluation unavailable: {}", err.user_message());
            return Ok(());
        }
    };

    let level = result.risk_level();
    println!(
        "\nFinal prediction: {} ({}% confidence)",
        level.label(),
        result.confidence_percent()
    );
    println!(
        "ML probabilities: low {:.1}% | high {:.1}%",
        result.ml_raw.proba_low * 100.0,
        result.ml_raw.proba_high * 100.0
    );
    let expert = &result.expert_system_result;
    println!(
        "Expert system: profile {} | financial {} | credit {} (rule {})",
        expert.profile.status, expert.financial.level, expert.credit.risk, expert.credit.rule_number
    );

    if result.explanations.is_empty() {
        println!("Rule trace: none");
    } else {
        println!("\nRule trace");
        for explanation in &result.explanations {
            println!("- {}: {}", explanation.rule, explanation.reason);
        }
    }

    Ok(())
}
