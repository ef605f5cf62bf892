use crate::domain::constants::HazardCode;
use indexmap::IndexSet;
use serde::Serialize;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// Identification fields read from section 1 of the first page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompoundFields {
    pub name: Option<String>,
    pub cas: Option<String>,
}

/// Found codes split by category. Both lists keep the order of the found set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub cmr: Vec<HazardCode>,
    pub other: Vec<HazardCode>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DocumentReport {
    pub name: Option<String>,
    pub cas: Option<String>,
    /// Every flagged code, in order of first appearance.
    pub codes: IndexSet<HazardCode>,
    pub hazardous: bool,
    pub cmr: bool,
    pub cmr_codes: Vec<HazardCode>,
    pub other_risk: bool,
    pub other_codes: Vec<HazardCode>,
}

impl DocumentReport {
    pub fn new(
        fields: CompoundFields,
        codes: IndexSet<HazardCode>,
        classification: Classification,
    ) -> Self {
        Self {
            name: fields.name,
            cas: fields.cas,
            hazardous: !codes.is_empty(),
            cmr: !classification.cmr.is_empty(),
            other_risk: !classification.other.is_empty(),
            codes,
            cmr_codes: classification.cmr,
            other_codes: classification.other,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Outcome {
    Ok { report: DocumentReport },
    Failed { error: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct DocumentOutcome {
    pub file: String,
    /// 1-based position in discovery order.
    pub index: usize,
    #[serde(flatten)]
    pub outcome: Outcome,
}

#[derive(Debug, Serialize)]
pub struct ScanReport {
    pub directory: String,
    pub found: usize,
    pub documents: Vec<DocumentOutcome>,
}
