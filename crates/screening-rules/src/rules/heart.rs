use crate::panel::LabPanel;
use crate::{ConditionRule, OrganGroup};

/// Systolic blood pressure above 140 mmHg.
pub struct Hypertension;

impl ConditionRule for Hypertension {
    fn id(&self) -> &str {
        "hypertension"
    }

    fn group(&self) -> OrganGroup {
        OrganGroup::Heart
    }

    fn condition(&self) -> &str {
        "Hypertension"
    }

    fn explanation(&self) -> &str {
        "High blood pressure indicates Hypertension."
    }

    fn matches(&self, panel: &LabPanel) -> bool {
        panel.blood_pressure > 140.0
    }
}

/// LDL-C above 160 mg/dL.
pub struct Hyperlipidemia;

impl ConditionRule for Hyperlipidemia {
    fn id(&self) -> &str {
        "hyperlipidemia"
    }

    fn group(&self) -> OrganGroup {
        OrganGroup::Heart
    }

    fn condition(&self) -> &str {
        "Hyperlipidemia"
    }

    fn explanation(&self) -> &str {
        "Elevated LDL-C levels indicate Hyperlipidemia."
    }

    fn matches(&self, panel: &LabPanel) -> bool {
        panel.ldl_c > 160.0
    }
}

/// LDL-C above 130 mg/dL together with hs-CRP above 3 mg/L.
pub struct CoronaryArteryDisease;

impl ConditionRule for CoronaryArteryDisease {
    fn id(&self) -> &str {
        "coronary_artery_disease"
    }

    fn group(&self) -> OrganGroup {
        OrganGroup::Heart
    }

    fn condition(&self) -> &str {
        "Coronary Artery Disease (CAD)"
    }

    fn explanation(&self) -> &str {
        "High LDL-C and hs-CRP levels indicate CAD."
    }

    fn matches(&self, panel: &LabPanel) -> bool {
        panel.ldl_c > 130.0 && panel.hs_crp > 3.0
    }
}
