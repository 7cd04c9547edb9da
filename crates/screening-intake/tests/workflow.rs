use screening_core::models::fundus::{EyeSide, FundusImage};
use screening_core::models::labs::LabMeasurements;
use screening_core::models::measurement::MeasurementValue;
use screening_core::models::parameter::Parameter;
use screening_core::models::patient::{Gender, PatientDetails, YesNo};
use screening_intake::error::IntakeError;
use screening_intake::workflow::{IntakeStep, IntakeWorkflow};

fn details() -> PatientDetails {
    PatientDetails {
        name: "Ada Okafor".to_string(),
        age: 58,
        gender: Gender::Female,
        alcoholic_status: YesNo::No,
        smoking_status: YesNo::Yes,
        medical_history: "Type 2 diabetes".to_string(),
        family_history: String::new(),
    }
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

fn right() -> Option<FundusImage> {
    FundusImage::new(EyeSide::Right, "right_fundus.jpg", 4096).ok()
}

fn left() -> Option<FundusImage> {
    FundusImage::new(EyeSide::Left, "left_fundus.png", 4096).ok()
}

fn at_upload_step() -> IntakeWorkflow {
    let mut workflow = IntakeWorkflow::new();
    workflow.submit_details(details()).unwrap();
    workflow
}

#[test]
fn new_workflow_starts_collecting_details() {
    let workflow = IntakeWorkflow::new();
    assert_eq!(workflow.step(), IntakeStep::CollectingDetails);
    assert!(workflow.details().is_none());
    assert!(workflow.report().is_none());
}

#[test]
fn full_intake_reaches_report_ready() {
    let mut workflow = at_upload_step();
    assert_eq!(workflow.step(), IntakeStep::UploadingImages);

    let labs = LabMeasurements {
        blood_pressure: 150.0,
        ..normal_labs()
    };
    workflow.generate_report(right(), left(), labs).unwrap();
    assert_eq!(workflow.step(), IntakeStep::ReportReady);

    let report = workflow.report().unwrap();
    assert_eq!(report.session.id, workflow.session().id);
    assert_eq!(report.details.name, "Ada Okafor");
    assert_eq!(report.diagnoses.conditions(), vec!["Hypertension"]);
    assert_eq!(report.record.len(), 12);
    assert_eq!(
        report.record.get(Parameter::Gender),
        Some(&MeasurementValue::Categorical("Female".to_string()))
    );
    assert_eq!(
        report.record.get(Parameter::Age),
        Some(&MeasurementValue::Numeric(58.0))
    );
}

#[test]
fn normal_labs_produce_empty_report() {
    let mut workflow = at_upload_step();
    workflow.generate_report(right(), left(), normal_labs()).unwrap();
    assert!(workflow.report().unwrap().diagnoses.is_empty());
}

#[test]
fn missing_image_keeps_upload_step() {
    let mut workflow = at_upload_step();

    let err = workflow.generate_report(right(), None, normal_labs()).unwrap_err();
    assert!(matches!(err, IntakeError::MissingImage(EyeSide::Left)));
    assert_eq!(err.to_string(), "left fundus image was not uploaded");
    assert_eq!(workflow.step(), IntakeStep::UploadingImages);

    let err = workflow.generate_report(None, left(), normal_labs()).unwrap_err();
    assert!(matches!(err, IntakeError::MissingImage(EyeSide::Right)));
}

#[test]
fn swapped_images_are_rejected() {
    let mut workflow = at_upload_step();
    let err = workflow.generate_report(left(), right(), normal_labs()).unwrap_err();
    assert!(matches!(
        err,
        IntakeError::ImageSideMismatch {
            expected: EyeSide::Right,
            found: EyeSide::Left
        }
    ));
}

#[test]
fn out_of_range_labs_are_rejected_before_evaluation() {
    let mut workflow = at_upload_step();
    let labs = LabMeasurements {
        blood_pressure: 310.0,
        hs_crp: 25.0,
        ..normal_labs()
    };

    let err = workflow.generate_report(right(), left(), labs).unwrap_err();
    let IntakeError::OutOfRange(errors) = &err else {
        panic!("expected OutOfRange, got {err:?}");
    };
    assert_eq!(errors.len(), 2);
    assert!(err.to_string().starts_with("intake values out of range: Blood Pressure"));
    assert_eq!(workflow.step(), IntakeStep::UploadingImages);
}

#[test]
fn age_above_120_is_rejected() {
    let mut workflow = IntakeWorkflow::new();
    let err = workflow
        .submit_details(PatientDetails {
            age: 121,
            ..details()
        })
        .unwrap_err();

    assert!(matches!(err, IntakeError::OutOfRange(_)));
    assert_eq!(workflow.step(), IntakeStep::CollectingDetails);
}

#[test]
fn steps_out_of_order_are_invalid_transitions() {
    let mut workflow = IntakeWorkflow::new();
    let err = workflow.generate_report(right(), left(), normal_labs()).unwrap_err();
    assert!(matches!(
        err,
        IntakeError::InvalidTransition {
            step: IntakeStep::CollectingDetails,
            ..
        }
    ));

    workflow.submit_details(details()).unwrap();
    let err = workflow.submit_details(details()).unwrap_err();
    assert_eq!(err.to_string(), "cannot submit details while uploading images");
}

#[test]
fn report_cannot_be_generated_twice() {
    let mut workflow = at_upload_step();
    workflow.generate_report(right(), left(), normal_labs()).unwrap();

    let err = workflow.generate_report(right(), left(), normal_labs()).unwrap_err();
    assert!(matches!(
        err,
        IntakeError::InvalidTransition {
            step: IntakeStep::ReportReady,
            ..
        }
    ));
}

#[test]
fn restart_begins_a_new_session() {
    let mut workflow = at_upload_step();
    workflow.generate_report(right(), left(), normal_labs()).unwrap();
    let previous = workflow.session().id;

    workflow.restart();
    assert_eq!(workflow.step(), IntakeStep::CollectingDetails);
    assert_ne!(workflow.session().id, previous);
    assert!(workflow.report().is_none());
}

#[test]
fn images_built_without_the_constructor_are_still_type_checked() {
    let mut workflow = at_upload_step();
    let tiff: FundusImage = serde_json::from_value(serde_json::json!({
        "side": "right",
        "file_name": "scan.tiff",
        "size_bytes": 512
    }))
    .unwrap();

    let err = workflow.generate_report(Some(tiff), left(), normal_labs()).unwrap_err();
    assert!(matches!(
        err,
        IntakeError::UnsupportedImage {
            side: EyeSide::Right,
            ref file_name
        } if file_name == "scan.tiff"
    ));
    assert_eq!(workflow.step(), IntakeStep::UploadingImages);

    let pdf = FundusImage {
        side: EyeSide::Left,
        file_name: "notes.pdf".to_string(),
        size_bytes: 512,
    };
    let err = workflow.generate_report(right(), Some(pdf), normal_labs()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "left fundus image 'notes.pdf' is not a png, jpg or jpeg"
    );
    assert!(workflow.report().is_none());
}
