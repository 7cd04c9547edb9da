use crate::panel::LabPanel;
use crate::{ConditionRule, OrganGroup};

/// Both enzymes above 40 U/L.
fn enzymes_elevated(panel: &LabPanel) -> bool {
    panel.alt > 40.0 && panel.ast > 40.0
}

/// Elevated enzymes with BMI above 30 and at most 2 drinks/day.
pub struct Nafld;

impl ConditionRule for Nafld {
    fn id(&self) -> &str {
        "nafld"
    }

    fn group(&self) -> OrganGroup {
        OrganGroup::Liver
    }

    fn condition(&self) -> &str {
        "NAFLD"
    }

    fn explanation(&self) -> &str {
        "Elevated enzymes, high BMI, low alcohol indicate NAFLD."
    }

    fn matches(&self, panel: &LabPanel) -> bool {
        enzymes_elevated(panel) && panel.bmi > 30.0 && panel.alcohol_consumption <= 2.0
    }
}

/// Elevated enzymes with more than 2 drinks/day.
pub struct AlcoholicLiverDisease;

impl ConditionRule for AlcoholicLiverDisease {
    fn id(&self) -> &str {
        "alcoholic_liver_disease"
    }

    fn group(&self) -> OrganGroup {
        OrganGroup::Liver
    }

    fn condition(&self) -> &str {
        "Alcoholic Liver Disease"
    }

    fn explanation(&self) -> &str {
        "Elevated enzymes and high alcohol intake indicate Alcoholic Liver Disease."
    }

    fn matches(&self, panel: &LabPanel) -> bool {
        enzymes_elevated(panel) && panel.alcohol_consumption > 2.0
    }
}

/// Both enzymes above 80 U/L.
pub struct LiverFibrosis;

impl ConditionRule for LiverFibrosis {
    fn id(&self) -> &str {
        "liver_fibrosis"
    }

    fn group(&self) -> OrganGroup {
        OrganGroup::Liver
    }

    fn condition(&self) -> &str {
        "Liver Fibrosis"
    }

    fn explanation(&self) -> &str {
        "Severely elevated liver enzymes indicate Liver Fibrosis."
    }

    fn matches(&self, panel: &LabPanel) -> bool {
        panel.alt > 80.0 && panel.ast > 80.0
    }
}
