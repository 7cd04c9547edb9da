use screening_core::models::fundus::{EyeSide, FundusImage};
use screening_core::models::labs::LabMeasurements;
use screening_core::models::patient::{Gender, PatientDetails, YesNo};
use screening_intake::workflow::{CompletedIntake, IntakeWorkflow};
use screening_report::context::{DISCLAIMER, IMAGE_QUALITY_NOTE, ReportContext};
use screening_report::error::ReportError;
use screening_report::render::{render_json, render_report, render_template};

fn completed(labs: LabMeasurements) -> CompletedIntake {
    let mut workflow = IntakeWorkflow::new();
    workflow
        .submit_details(PatientDetails {
            name: "Tomas Reyes".to_string(),
            age: 67,
            gender: Gender::Male,
            alcoholic_status: YesNo::Yes,
            smoking_status: YesNo::No,
            medical_history: String::new(),
            family_history: "Father: CKD".to_string(),
        })
        .unwrap();
    workflow
        .generate_report(
            FundusImage::new(EyeSide::Right, "od.jpeg", 10).ok(),
            FundusImage::new(EyeSide::Left, "os.jpeg", 10).ok(),
            labs,
        )
        .unwrap();
    workflow.report().unwrap().clone()
}

fn normal_labs() -> LabMeasurements {
    LabMeasurements {
        bmi: 22.0,
        blood_pressure: 120.0,
        fasting_blood_sugar: 90.0,
        ldl_c: 100.0,
        hs_crp: 1.0,
        egfr: 95.0,
        alt: 20.0,
        ast: 20.0,
        alcohol_consumption: 1.0,
    }
}

#[test]
fn report_lists_each_diagnosis_in_order() {
    let intake = completed(LabMeasurements {
        ldl_c: 170.0,
        hs_crp: 4.0,
        ..normal_labs()
    });

    let report = render_report(&intake).unwrap();
    let hyper = report
        .find("**Hyperlipidemia**: Elevated LDL-C levels indicate Hyperlipidemia.")
        .unwrap();
    let cad = report
        .find("**Coronary Artery Disease (CAD)**: High LDL-C and hs-CRP levels indicate CAD.")
        .unwrap();
    assert!(hyper < cad);
    assert!(!report.contains("No conditions diagnosed"));
}

#[test]
fn report_without_findings_says_so() {
    let report = render_report(&completed(normal_labs())).unwrap();
    assert!(report.contains("No conditions diagnosed based on the provided parameters."));
}

#[test]
fn report_includes_reference_ranges_details_and_disclaimer() {
    let intake = completed(normal_labs());
    let report = render_report(&intake).unwrap();

    assert!(report.contains("## Normal Ranges for Parameters"));
    assert!(report.contains("**Blood Pressure**: < 120/80 mmHg"));
    assert!(report.contains("**Alcohol Consumption**: ≤ 2 drinks/day"));
    assert!(report.contains("- **Name**: Tomas Reyes"));
    assert!(report.contains("- **Family Medical History**: Father: CKD"));
    assert!(!report.contains("- **Medical History**"));
    assert!(report.contains("- **Right**: od.jpeg"));
    assert!(report.contains("- **eGFR**: 95"));
    assert!(report.contains(IMAGE_QUALITY_NOTE));
    assert!(report.contains(DISCLAIMER));
    assert!(report.contains(&intake.session.id.to_string()));
}

#[test]
fn context_omits_demographics_from_lab_values() {
    let context = ReportContext::from_intake(&completed(normal_labs()));
    let labels: Vec<&str> = context.measurements.iter().map(|m| m.label).collect();

    assert_eq!(labels.len(), 9);
    assert!(!labels.contains(&"Age"));
    assert!(!labels.contains(&"Gender"));
    assert!(labels.contains(&"Alcohol Consumption"));
}

#[test]
fn custom_template_sees_context_fields() {
    let intake = completed(LabMeasurements {
        egfr: 10.0,
        ..normal_labs()
    });

    let rendered = render_template(
        "summary.txt",
        "{{ patient.name }}: {% for d in diagnoses %}{{ d.condition }}{% endfor %}",
        &intake,
    )
    .unwrap();
    assert_eq!(rendered, "Tomas Reyes: End-Stage Renal Disease (Stage 5)");
}

#[test]
fn broken_template_is_a_parse_error() {
    let intake = completed(normal_labs());
    let err = render_template("bad.txt", "{% for d in diagnoses %}", &intake).unwrap_err();
    assert!(matches!(err, ReportError::TemplateParse(_)));
}

#[test]
fn unknown_variable_is_a_render_error() {
    let intake = completed(normal_labs());
    let err = render_template("bad.txt", "{{ nope.missing }}", &intake).unwrap_err();
    assert!(matches!(err, ReportError::TemplateRender(_)));
}

#[test]
fn json_output_is_the_diagnosis_list() {
    let intake = completed(LabMeasurements {
        blood_pressure: 150.0,
        ..normal_labs()
    });

    let json: serde_json::Value = serde_json::from_str(&render_json(&intake).unwrap()).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{
            "condition": "Hypertension",
            "explanation": "High blood pressure indicates Hypertension."
        }])
    );
}
