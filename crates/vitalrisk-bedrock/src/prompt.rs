//! Prompt construction for clinical insight requests.

use std::fmt::Write;

use vitalrisk_core::models::prediction::PredictionResult;
use vitalrisk_core::models::vitals::VitalsInput;

pub const INSIGHT_SYSTEM_PROMPT: &str = "\
You are a clinical decision-support assistant reviewing the output of a \
logistic regression risk model. Respond with a single JSON object and \
nothing else, matching this shape exactly:
{\"summary\": string, \"riskFactors\": [string], \"recommendations\": [string]}
Do not wrap the JSON in Markdown. Every field is required; use an empty \
array when there is nothing to list.";

/// Render vitals and the model's prediction into the user message.
pub fn build_insight_prompt(vitals: &VitalsInput, prediction: &PredictionResult) -> String {
    let mut prompt = String::from(
        "Analyze the following patient vitals and Logistic Regression risk assessment:\n",
    );

    // Writing to a String cannot fail.
    let _ = writeln!(prompt, "- Age: {}", vitals.age);
    let _ = writeln!(
        prompt,
        "- Blood Pressure: {}/{} mmHg (Systolic/Diastolic)",
        vitals.systolic_bp, vitals.diastolic_bp
    );
    let _ = writeln!(prompt, "- Glucose Level: {} mg/dL", vitals.glucose);
    let _ = writeln!(prompt, "- Prediction: {}", prediction.status().short_label());
    let _ = writeln!(prompt, "- Probability Score: {}", prediction.percentage());

    prompt.push_str("\nModel logit contributions:\n");
    for term in vitalrisk_model::contributions(vitals) {
        let _ = writeln!(
            prompt,
            "- {}: {:.3} x {} = {:.3}",
            term.feature.label(),
            term.weight,
            term.value,
            term.contribution
        );
    }
    let _ = writeln!(prompt, "- Logit: {:.3}", prediction.score);

    prompt.push_str(
        "\nProvide a professional medical insight covering:\n\
         1. A summary of the findings, specifically noting the blood pressure ratio.\n\
         2. Specific risk factors identified from these vitals.\n\
         3. Practical, evidence-based health recommendations.\n\
         4. A mandatory medical disclaimer.\n",
    );

    prompt
}
