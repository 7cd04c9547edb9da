//! CKD staging by eGFR plus diabetic nephropathy.
//!
//! The four stage rules use half-open intervals that partition every eGFR
//! below 90, so at most one of them fires.

use std::ops::{Range, RangeTo};

use crate::panel::LabPanel;
use crate::{ConditionRule, OrganGroup};

const STAGE_2: Range<f64> = 60.0..90.0;
const STAGE_3: Range<f64> = 30.0..60.0;
const STAGE_4: Range<f64> = 15.0..30.0;
const STAGE_5: RangeTo<f64> = ..15.0;

pub struct MildCkd;

impl ConditionRule for MildCkd {
    fn id(&self) -> &str {
        "ckd_stage_2"
    }

    fn group(&self) -> OrganGroup {
        OrganGroup::Kidney
    }

    fn condition(&self) -> &str {
        "Mild CKD (Stage 2)"
    }

    fn explanation(&self) -> &str {
        "eGFR indicates mild chronic kidney disease."
    }

    fn matches(&self, panel: &LabPanel) -> bool {
        STAGE_2.contains(&panel.egfr)
    }
}

pub struct ModerateCkd;

impl ConditionRule for ModerateCkd {
    fn id(&self) -> &str {
        "ckd_stage_3"
    }

    fn group(&self) -> OrganGroup {
        OrganGroup::Kidney
    }

    fn condition(&self) -> &str {
        "Moderate CKD (Stage 3)"
    }

    fn explanation(&self) -> &str {
        "eGFR indicates moderate chronic kidney disease."
    }

    fn matches(&self, panel: &LabPanel) -> bool {
        STAGE_3.contains(&panel.egfr)
    }
}

pub struct SevereCkd;

impl ConditionRule for SevereCkd {
    fn id(&self) -> &str {
        "ckd_stage_4"
    }

    fn group(&self) -> OrganGroup {
        OrganGroup::Kidney
    }

    fn condition(&self) -> &str {
        "Severe CKD (Stage 4)"
    }

    fn explanation(&self) -> &str {
        "eGFR indicates severe chronic kidney disease."
    }

    fn matches(&self, panel: &LabPanel) -> bool {
        STAGE_4.contains(&panel.egfr)
    }
}

pub struct EndStageRenalDisease;

impl ConditionRule for EndStageRenalDisease {
    fn id(&self) -> &str {
        "ckd_stage_5"
    }

    fn group(&self) -> OrganGroup {
        OrganGroup::Kidney
    }

    fn condition(&self) -> &str {
        "End-Stage Renal Disease (Stage 5)"
    }

    fn explanation(&self) -> &str {
        "eGFR indicates end-stage renal disease."
    }

    fn matches(&self, panel: &LabPanel) -> bool {
        STAGE_5.contains(&panel.egfr)
    }
}

/// Fasting blood sugar above 126 mg/dL, blood pressure above 130 mmHg and
/// eGFR below 90.
pub struct DiabeticNephropathy;

impl ConditionRule for DiabeticNephropathy {
    fn id(&self) -> &str {
        "diabetic_nephropathy"
    }

    fn group(&self) -> OrganGroup {
        OrganGroup::Kidney
    }

    fn condition(&self) -> &str {
        "Diabetic Nephropathy"
    }

    fn explanation(&self) -> &str {
        "Elevated FBS and reduced eGFR with high BP indicate Diabetic Nephropathy."
    }

    fn matches(&self, panel: &LabPanel) -> bool {
        panel.fasting_blood_sugar > 126.0 && panel.blood_pressure > 130.0 && panel.egfr < 90.0
    }
}
