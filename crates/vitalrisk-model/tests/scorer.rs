use vitalrisk_core::models::field::Field;
use vitalrisk_core::models::vitals::VitalsInput;
use vitalrisk_model::scorer::RISK_THRESHOLD;
use vitalrisk_model::{Weights, classify, contributions, logit, score, score_checked, sigmoid};

fn approx(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() < tol
}

#[test]
fn healthy_adult_is_not_at_risk() {
    let vitals = VitalsInput::new(45.0, 120.0, 80.0, 90.0);
    let prediction = score(&vitals);

    assert!(approx(prediction.score, -2.9, 1e-9));
    assert!(approx(prediction.probability, 0.0521, 1e-4));
    assert!(!prediction.is_at_risk);
}

#[test]
fn elderly_hypertensive_diabetic_is_at_risk() {
    let vitals = VitalsInput::new(70.0, 180.0, 110.0, 200.0);
    let prediction = score(&vitals);

    assert!(approx(prediction.score, 4.6, 1e-9));
    assert!(approx(prediction.probability, 0.9900, 1e-4));
    assert!(prediction.is_at_risk);
}

#[test]
fn score_matches_logit_and_sigmoid() {
    let vitals = VitalsInput::new(60.0, 140.0, 90.0, 130.0);
    let prediction = score(&vitals);

    assert_eq!(prediction.score, logit(&vitals));
    assert_eq!(prediction.probability, sigmoid(logit(&vitals)));
}

#[test]
fn increasing_any_feature_never_decreases_probability() {
    let base = VitalsInput::default();

    for field in Field::ALL {
        let mut previous = score(&base.with(field, 0.0)).probability;
        for step in 1..=40 {
            let value = f64::from(step) * 10.0;
            let current = score(&base.with(field, value)).probability;
            assert!(
                current >= previous,
                "{field} at {value}: {current} < {previous}"
            );
            previous = current;
        }
    }
}

#[test]
fn probability_strictly_increases_with_logit() {
    let mut previous = sigmoid(-10.0);
    for i in -99..=100 {
        let x = f64::from(i) / 10.0;
        let p = sigmoid(x);
        assert!(p > previous, "sigmoid({x}) = {p} not above {previous}");
        previous = p;
    }
}

#[test]
fn classification_flips_exactly_at_logit_zero() {
    let at_zero = classify(0.0);
    assert_eq!(at_zero.probability, RISK_THRESHOLD);
    assert!(at_zero.is_at_risk);

    let just_below = classify(-1e-9);
    assert!(just_below.probability < RISK_THRESHOLD);
    assert!(!just_below.is_at_risk);

    let just_above = classify(1e-9);
    assert!(just_above.is_at_risk);
}

#[test]
fn zero_weights_sit_on_the_threshold() {
    let flat = Weights {
        bias: 0.0,
        age: 0.0,
        systolic_bp: 0.0,
        diastolic_bp: 0.0,
        glucose: 0.0,
    };
    let prediction = flat.score(&VitalsInput::new(30.0, 110.0, 70.0, 85.0));

    assert_eq!(prediction.score, 0.0);
    assert_eq!(prediction.probability, 0.5);
    assert!(prediction.is_at_risk);
}

#[test]
fn scoring_is_bit_identical_across_calls() {
    let vitals = VitalsInput::new(52.5, 133.3, 87.1, 101.7);
    let first = score(&vitals);
    let second = score(&vitals);

    assert_eq!(first.probability.to_bits(), second.probability.to_bits());
    assert_eq!(first.score.to_bits(), second.score.to_bits());
    assert_eq!(first.is_at_risk, second.is_at_risk);
}

#[test]
fn nan_input_propagates() {
    let prediction = score(&VitalsInput::new(f64::NAN, 120.0, 80.0, 90.0));

    assert!(prediction.score.is_nan());
    assert!(prediction.probability.is_nan());
    assert!(!prediction.is_at_risk);
}

#[test]
fn infinite_input_saturates() {
    let high = score(&VitalsInput::new(45.0, 120.0, 80.0, f64::INFINITY));
    assert_eq!(high.probability, 1.0);
    assert!(high.is_at_risk);

    let low = score(&VitalsInput::new(45.0, f64::NEG_INFINITY, 80.0, 90.0));
    assert_eq!(low.probability, 0.0);
    assert!(!low.is_at_risk);
}

#[test]
fn contributions_sum_to_logit_minus_bias() {
    let vitals = VitalsInput::new(70.0, 180.0, 110.0, 200.0);
    let terms = contributions(&vitals);

    assert_eq!(terms.map(|t| t.feature), Field::ALL);
    assert!(approx(terms[0].contribution, 3.5, 1e-12));
    assert!(approx(terms[3].contribution, 7.0, 1e-12));

    let sum: f64 = terms.iter().map(|t| t.contribution).sum();
    assert!(approx(sum + Weights::DEFAULT.bias, logit(&vitals), 1e-9));
}

#[test]
fn checked_scoring_rejects_out_of_range_fields() {
    let vitals = VitalsInput::new(0.0, 300.0, 80.0, f64::NAN);
    let err = score_checked(&vitals).unwrap_err();
    let fields: Vec<Field> = err.validation_errors().iter().map(|e| e.field).collect();

    assert_eq!(fields, vec![Field::Age, Field::SystolicBp, Field::Glucose]);
    assert!(err.to_string().contains("3 field(s)"));
}

#[test]
fn checked_scoring_accepts_form_values() {
    let vitals = VitalsInput::new(120.0, 70.0, 150.0, 400.0);
    assert_eq!(score_checked(&vitals).unwrap(), score(&vitals));
}
