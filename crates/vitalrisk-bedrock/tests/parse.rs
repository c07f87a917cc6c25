use vitalrisk_bedrock::error::BedrockError;
use vitalrisk_bedrock::parse::parse_insight;

const BODY: &str = r#"{"summary": "Blood pressure is elevated.", "riskFactors": ["Stage 2 hypertension"], "recommendations": ["Reduce sodium intake", "Consult a physician"]}"#;

#[test]
fn parses_bare_json() {
    let insight = parse_insight(BODY).unwrap();
    assert_eq!(insight.summary, "Blood pressure is elevated.");
    assert_eq!(insight.risk_factors, vec!["Stage 2 hypertension"]);
    assert_eq!(insight.recommendations.len(), 2);
}

#[test]
fn parses_fenced_json() {
    let text = format!("```json\n{BODY}\n```");
    assert!(parse_insight(&text).is_ok());
}

#[test]
fn parses_json_after_preamble() {
    let text = format!("Here is the analysis you asked for:\n\n{BODY}\n\nStay well.");
    let insight = parse_insight(&text).unwrap();
    assert_eq!(insight.risk_factors.len(), 1);
}

#[test]
fn missing_field_is_schema_violation() {
    let err = parse_insight(r#"{"summary": "s", "riskFactors": []}"#).unwrap_err();
    assert!(matches!(err, BedrockError::SchemaViolation(_)), "{err}");
}

#[test]
fn prose_only_is_parse_error() {
    let err = parse_insight("I'm unable to provide medical advice.").unwrap_err();
    assert!(matches!(err, BedrockError::ResponseParse(_)), "{err}");
}
