use acidbase_core::models::config::{EvaluationConfig, RespiratoryDuration};
use acidbase_core::models::interpretation::{
    AcidBaseStatus, Compensation, CompensationVerdict, Disorder, PrimaryDisorder,
    SecondaryParameter,
};
use acidbase_core::models::lab::{LabForm, LabValues};
use acidbase_engine::evaluators::acid_base::{AcidBase, acid_base_status, interpret};
use acidbase_engine::{Evaluator, evaluate_form};

use RespiratoryDuration::{Acute, Chronic};

#[test]
fn values_inside_reference_ranges_are_a_normal_abg() {
    for ph in [7.35, 7.40, 7.45] {
        for paco2 in [35.0, 40.0, 45.0] {
            for hco3 in [22.0, 24.0, 26.0] {
                let result = interpret(ph, paco2, hco3, Acute);
                assert_eq!(result.acid_base_status, AcidBaseStatus::Normal);
                assert_eq!(result.primary_disorder, PrimaryDisorder::Normal);
                assert_eq!(result.compensation, Compensation::Uncompensated);
                assert_eq!(result.summary, "Normal ABG.");
                assert!(result.compensation_analysis.is_none());
            }
        }
    }
}

#[test]
fn ph_bounds_are_inclusive() {
    assert_eq!(acid_base_status(7.35), AcidBaseStatus::Normal);
    assert_eq!(acid_base_status(7.45), AcidBaseStatus::Normal);
    assert_eq!(acid_base_status(7.349), AcidBaseStatus::Acidosis);
    assert_eq!(acid_base_status(7.451), AcidBaseStatus::Alkalosis);
}

#[test]
fn acute_respiratory_acidosis_without_renal_response() {
    let result = interpret(7.20, 60.0, 24.0, Acute);

    assert_eq!(result.acid_base_status, AcidBaseStatus::Acidosis);
    assert_eq!(
        result.primary_disorder,
        PrimaryDisorder::Single(Disorder::RespiratoryAcidosis)
    );
    assert_eq!(result.compensation, Compensation::Uncompensated);

    let analysis = result.compensation_analysis.expect("single disorder");
    assert_eq!(analysis.parameter, SecondaryParameter::Hco3);
    assert_eq!(analysis.expected.low, 26.0);
    assert_eq!(analysis.expected.high, 28.0);
    assert_eq!(analysis.verdict, CompensationVerdict::CoexistingMetabolicAcidosis);
    assert_eq!(
        result.summary,
        "Uncompensated Respiratory Acidosis. Suggests a co-existing metabolic acidosis."
    );
}

#[test]
fn normal_ph_with_high_paco2_and_high_hco3_is_fully_compensated() {
    let acute = interpret(7.38, 60.0, 32.0, Acute);
    assert_eq!(acute.acid_base_status, AcidBaseStatus::Normal);
    assert_eq!(
        acute.primary_disorder,
        PrimaryDisorder::Single(Disorder::RespiratoryAcidosis)
    );
    assert_eq!(acute.compensation, Compensation::FullyCompensated);

    // Acute: 24 + (60 - 40) / 10 = 26, range [26, 28]; 32 is above it.
    let analysis = acute.compensation_analysis.expect("single disorder");
    assert_eq!(analysis.expected.low, 26.0);
    assert_eq!(analysis.expected.high, 28.0);
    assert_eq!(analysis.verdict, CompensationVerdict::CoexistingMetabolicAlkalosis);

    // Chronic: 24 + 3.5 × (60 - 40) / 10 = 31, range [31, 34].
    let chronic = interpret(7.38, 60.0, 32.0, Chronic);
    let analysis = chronic.compensation_analysis.expect("single disorder");
    assert_eq!(analysis.expected.low, 31.0);
    assert_eq!(analysis.expected.high, 34.0);
    assert_eq!(analysis.verdict, CompensationVerdict::Appropriate);
    assert_eq!(chronic.summary, "Fully Compensated Respiratory Acidosis.");
}

#[test]
fn winters_formula_lower_bound_is_appropriate() {
    // 1.5 × 16 + 8 = 32 ± 2
    let result = interpret(7.25, 30.0, 16.0, Acute);

    assert_eq!(
        result.primary_disorder,
        PrimaryDisorder::Single(Disorder::MetabolicAcidosis)
    );
    assert_eq!(result.compensation, Compensation::PartiallyCompensated);

    let analysis = result.compensation_analysis.expect("single disorder");
    assert_eq!(analysis.title, "Winter's Formula");
    assert_eq!(analysis.parameter, SecondaryParameter::Paco2);
    assert_eq!(analysis.expected.low, 30.0);
    assert_eq!(analysis.expected.high, 34.0);
    assert_eq!(analysis.verdict, CompensationVerdict::Appropriate);
    assert_eq!(result.summary, "Partially Compensated Metabolic Acidosis.");
}

#[test]
fn metabolic_acidosis_with_high_paco2_flags_respiratory_acidosis() {
    let result = interpret(7.20, 40.0, 15.0, Acute);

    assert_eq!(result.compensation, Compensation::Uncompensated);
    let analysis = result.compensation_analysis.expect("single disorder");
    assert_eq!(analysis.verdict, CompensationVerdict::CoexistingRespiratoryAcidosis);
    assert!(result.summary.ends_with("Suggests a co-existing respiratory acidosis."));
}

#[test]
fn metabolic_acidosis_with_low_paco2_flags_respiratory_alkalosis() {
    // 1.5 × 20 + 8 = 38 ± 2; 30 is below.
    let result = interpret(7.30, 30.0, 20.0, Acute);

    let analysis = result.compensation_analysis.expect("single disorder");
    assert_eq!(analysis.verdict, CompensationVerdict::CoexistingRespiratoryAlkalosis);
}

#[test]
fn metabolic_alkalosis_uses_expected_paco2() {
    // 0.7 × 35 + 21 = 45.5 ± 2; 48 is above.
    let result = interpret(7.50, 48.0, 35.0, Acute);

    assert_eq!(result.acid_base_status, AcidBaseStatus::Alkalosis);
    assert_eq!(
        result.primary_disorder,
        PrimaryDisorder::Single(Disorder::MetabolicAlkalosis)
    );
    assert_eq!(result.compensation, Compensation::PartiallyCompensated);

    let analysis = result.compensation_analysis.expect("single disorder");
    assert!((analysis.expected.low - 43.5).abs() < 1e-9);
    assert!((analysis.expected.high - 47.5).abs() < 1e-9);
    assert_eq!(analysis.verdict, CompensationVerdict::CoexistingRespiratoryAcidosis);
}

#[test]
fn acute_respiratory_alkalosis_upper_bound_is_appropriate() {
    // 24 - 2 × (40 - 30) / 10 = 22, range [20, 22].
    let result = interpret(7.50, 30.0, 22.0, Acute);

    assert_eq!(
        result.primary_disorder,
        PrimaryDisorder::Single(Disorder::RespiratoryAlkalosis)
    );
    assert_eq!(result.compensation, Compensation::Uncompensated);

    let analysis = result.compensation_analysis.expect("single disorder");
    assert_eq!(analysis.expected.low, 20.0);
    assert_eq!(analysis.expected.high, 22.0);
    assert_eq!(analysis.verdict, CompensationVerdict::Appropriate);
    assert_eq!(result.summary, "Uncompensated Respiratory Alkalosis.");
}

#[test]
fn chronic_respiratory_alkalosis_fully_compensated() {
    // 24 - 5 × (40 - 30) / 10 = 19, range [16, 19].
    let result = interpret(7.44, 30.0, 19.0, Chronic);

    assert_eq!(result.acid_base_status, AcidBaseStatus::Normal);
    assert_eq!(result.compensation, Compensation::FullyCompensated);

    let analysis = result.compensation_analysis.expect("single disorder");
    assert_eq!(analysis.expected.low, 16.0);
    assert_eq!(analysis.expected.high, 19.0);
    assert_eq!(analysis.verdict, CompensationVerdict::Appropriate);
    assert_eq!(result.summary, "Fully Compensated Respiratory Alkalosis.");
}

#[test]
fn acidosis_with_normal_paco2_and_hco3_is_mixed() {
    let result = interpret(7.25, 40.0, 24.0, Acute);

    assert_eq!(result.acid_base_status, AcidBaseStatus::Acidosis);
    assert_eq!(result.primary_disorder, PrimaryDisorder::Mixed);
    assert_eq!(result.compensation, Compensation::Uncompensated);
    assert!(result.compensation_analysis.is_none());
    assert_eq!(result.summary, "Mixed acid-base disorder.");
}

#[test]
fn alkalosis_with_normal_paco2_and_hco3_is_mixed() {
    let result = interpret(7.55, 40.0, 24.0, Chronic);

    assert_eq!(result.primary_disorder, PrimaryDisorder::Mixed);
    assert!(result.compensation_analysis.is_none());
}

#[test]
fn normal_ph_checks_paco2_before_hco3() {
    let result = interpret(7.40, 50.0, 20.0, Acute);

    assert_eq!(
        result.primary_disorder,
        PrimaryDisorder::Single(Disorder::RespiratoryAcidosis)
    );
    // HCO₃⁻ moved the wrong way for renal compensation.
    assert_eq!(result.compensation, Compensation::Uncompensated);

    let low_paco2 = interpret(7.40, 30.0, 30.0, Acute);
    assert_eq!(
        low_paco2.primary_disorder,
        PrimaryDisorder::Single(Disorder::RespiratoryAlkalosis)
    );

    let low_hco3 = interpret(7.40, 40.0, 18.0, Acute);
    assert_eq!(
        low_hco3.primary_disorder,
        PrimaryDisorder::Single(Disorder::MetabolicAcidosis)
    );

    let high_hco3 = interpret(7.40, 40.0, 30.0, Acute);
    assert_eq!(
        high_hco3.primary_disorder,
        PrimaryDisorder::Single(Disorder::MetabolicAlkalosis)
    );
}

#[test]
fn any_missing_required_value_yields_no_result() {
    let config = EvaluationConfig::default();
    let full = LabValues {
        ph: Some(7.20),
        paco2: Some(60.0),
        hco3: Some(24.0),
        ..Default::default()
    };
    assert!(AcidBase.evaluate(&full, &config).is_some());

    for missing in [
        LabValues { ph: None, ..full },
        LabValues { paco2: None, ..full },
        LabValues { hco3: None, ..full },
    ] {
        assert!(AcidBase.evaluate(&missing, &config).is_none());
    }
}

#[test]
fn duration_comes_from_config() {
    let labs = LabValues {
        ph: Some(7.38),
        paco2: Some(60.0),
        hco3: Some(32.0),
        ..Default::default()
    };
    let chronic = EvaluationConfig {
        respiratory_duration: Chronic,
        ..Default::default()
    };

    let result = AcidBase.evaluate(&labs, &chronic).expect("complete input");
    let analysis = result.compensation_analysis.expect("single disorder");
    assert_eq!(analysis.verdict, CompensationVerdict::Appropriate);
}

fn form(ph: &str, paco2: &str, hco3: &str) -> LabForm {
    LabForm {
        ph: ph.into(),
        paco2: paco2.into(),
        hco3: hco3.into(),
        ..Default::default()
    }
}

#[test]
fn typed_values_on_an_expected_bound_are_appropriate() {
    let chronic = EvaluationConfig {
        respiratory_duration: Chronic,
        ..Default::default()
    };
    let acute = EvaluationConfig::default();

    // (form, config, expected low, expected high)
    let cases = [
        // Winter's: 1.5 × 10.8 + 8 ± 2
        (form("7.20", "22.2", "10.8"), &acute, 22.2, 26.2),
        (form("7.20", "26.2", "10.8"), &acute, 22.2, 26.2),
        // Chronic respiratory acidosis: 24 + 3.5 × 2.2, up to +3
        (form("7.30", "62", "31.7"), &chronic, 31.7, 34.7),
        (form("7.30", "62", "34.7"), &chronic, 31.7, 34.7),
        // Acute respiratory acidosis: 24 + 1.3, up to +2
        (form("7.30", "53", "25.3"), &acute, 25.3, 27.3),
        // Acute respiratory alkalosis: 24 - 2 × 1.3, down to -2
        (form("7.50", "27", "19.4"), &acute, 19.4, 21.4),
        (form("7.50", "27", "21.4"), &acute, 19.4, 21.4),
    ];

    for (labs, config, low, high) in cases {
        let result = evaluate_form(&labs, config)
            .interpretation
            .expect("complete input");
        let analysis = result.compensation_analysis.expect("single disorder");

        assert_eq!(analysis.expected.low, low, "{labs:?}");
        assert_eq!(analysis.expected.high, high, "{labs:?}");
        assert_eq!(analysis.verdict, CompensationVerdict::Appropriate, "{labs:?}");
        assert!(!result.summary.contains("co-existing"), "{}", result.summary);
    }
}

#[test]
fn typed_values_just_outside_an_expected_bound_are_flagged() {
    let config = EvaluationConfig::default();

    let below = evaluate_form(&form("7.20", "22.1", "10.8"), &config)
        .interpretation
        .and_then(|r| r.compensation_analysis)
        .expect("single disorder");
    assert_eq!(
        below.verdict,
        CompensationVerdict::CoexistingRespiratoryAlkalosis
    );

    let above = evaluate_form(&form("7.20", "26.3", "10.8"), &config)
        .interpretation
        .and_then(|r| r.compensation_analysis)
        .expect("single disorder");
    assert_eq!(
        above.verdict,
        CompensationVerdict::CoexistingRespiratoryAcidosis
    );
}
