use screening_core::error::CoreError;
use screening_core::models::diagnosis::{Diagnosis, DiagnosisResult};
use screening_core::models::fundus::{EyeSide, FundusImage, has_accepted_extension};
use screening_core::models::measurement::{MeasurementRecord, MeasurementValue};
use screening_core::models::parameter::Parameter;
use screening_core::models::patient::{Gender, PatientDetails, YesNo};
use screening_core::models::session::SessionId;

#[test]
fn parameter_parses_from_display_label() {
    for parameter in Parameter::ALL {
        let parsed: Parameter = parameter.label().parse().unwrap();
        assert_eq!(parsed, parameter);
    }
}

#[test]
fn unknown_parameter_label_is_rejected() {
    let err = "Cholesterol".parse::<Parameter>().unwrap_err();
    assert!(matches!(err, CoreError::UnknownParameter(ref s) if s == "Cholesterol"));
}

#[test]
fn only_gender_and_smoking_are_categorical() {
    let categorical: Vec<_> = Parameter::ALL
        .into_iter()
        .filter(Parameter::is_categorical)
        .collect();
    assert_eq!(categorical, vec![Parameter::Gender, Parameter::SmokingStatus]);
}

#[test]
fn record_serializes_keyed_by_label() {
    let record = MeasurementRecord::new()
        .with(Parameter::LdlC, 120.0)
        .with(Parameter::Gender, "Female");

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["LDL-C"], serde_json::json!(120.0));
    assert_eq!(json["Gender"], serde_json::json!("Female"));
}

#[test]
fn record_deserializes_mixed_values() {
    let record: MeasurementRecord = serde_json::from_str(
        r#"{"eGFR": 72.5, "Smoking Status": "No", "hs-CRP": 2}"#,
    )
    .unwrap();

    assert_eq!(record.get(Parameter::Egfr), Some(&MeasurementValue::Numeric(72.5)));
    assert_eq!(record.get(Parameter::HsCrp).and_then(MeasurementValue::as_number), Some(2.0));
    assert_eq!(
        record.get(Parameter::SmokingStatus),
        Some(&MeasurementValue::Categorical("No".to_string()))
    );
}

#[test]
fn missing_lists_absent_parameters_in_intake_order() {
    let record = MeasurementRecord::new()
        .with(Parameter::Age, 40u32)
        .with(Parameter::Gender, "Male")
        .with(Parameter::Bmi, 22.0);

    let missing = record.missing();
    assert_eq!(missing.len(), 9);
    assert_eq!(missing[0], Parameter::SmokingStatus);
    assert_eq!(missing[8], Parameter::Ast);
}

#[test]
fn fundus_accepts_common_image_extensions() {
    assert!(has_accepted_extension("right.png"));
    assert!(has_accepted_extension("left.JPG"));
    assert!(has_accepted_extension("scan.final.jpeg"));
    assert!(!has_accepted_extension("notes.pdf"));
    assert!(!has_accepted_extension("no_extension"));
}

#[test]
fn fundus_rejects_unsupported_upload() {
    let err = FundusImage::new(EyeSide::Left, "left.tiff", 1024).unwrap_err();
    assert!(matches!(
        err,
        CoreError::UnsupportedImageType { ref file_name } if file_name == "left.tiff"
    ));

    let image = FundusImage::new(EyeSide::Right, "right.jpg", 2048).unwrap();
    assert_eq!(image.side, EyeSide::Right);
    assert_eq!(image.size_bytes, 2048);
}

#[test]
fn patient_details_use_snake_case_enums() {
    let details: PatientDetails = serde_json::from_str(
        r#"{
            "name": "Jane Doe",
            "age": 61,
            "gender": "female",
            "alcoholic_status": "no",
            "smoking_status": "yes"
        }"#,
    )
    .unwrap();

    assert_eq!(details.gender, Gender::Female);
    assert_eq!(details.smoking_status, YesNo::Yes);
    assert!(details.medical_history.is_empty());
}

#[test]
fn diagnosis_result_keeps_insertion_order() {
    let mut result = DiagnosisResult::new();
    result.push(Diagnosis::new("Hyperlipidemia", "a"));
    result.push(Diagnosis::new("NAFLD", "b"));

    assert_eq!(result.conditions(), vec!["Hyperlipidemia", "NAFLD"]);
    assert!(result.contains("NAFLD"));
    assert!(!result.contains("Hypertension"));
}

#[test]
fn session_ids_are_fresh_and_parseable() {
    let a = SessionId::new();
    let b = SessionId::new();
    assert_ne!(a, b);

    let parsed: SessionId = a.to_string().parse().unwrap();
    assert_eq!(parsed, a);
    assert!("not-a-uuid".parse::<SessionId>().is_err());
}
