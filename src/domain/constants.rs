/// A hazard statement code from the closed vocabulary below, e.g. `H373` or `EUH071`.
pub type HazardCode = &'static str;

/// Carcinogenic, mutagenic and reprotoxic statements (plus specific target organ toxicity).
pub const CMR_CODES: &[HazardCode] = &[
    "H340", "H341", "H350", "H350i", "H351", "H360", "H360D", "H360Df", "H360F", "H360FD",
    "H360Fd", "H361", "H361d", "H361f", "H361fd", "H362", "H370", "H371", "H372", "H373",
];

/// Acute toxicity statements and the supplemental EU hazard statements with major risk.
pub const OTHER_CODES: &[HazardCode] = &[
    "H300", "H301", "H310", "H311", "H330", "H331", "EUH001", "EUH006", "EUH019", "EUH029",
    "EUH031", "EUH032", "EUH044", "EUH070", "EUH071",
];

/// Every code that makes a substance particularly hazardous, in scan order.
///
/// Superset of [`CMR_CODES`] and [`OTHER_CODES`]. `H361df` is flagged but belongs to
/// neither category, so it marks a document hazardous without showing up in a subset.
pub const ALL_FLAGS: &[HazardCode] = &[
    "H340", "H341", "H350", "H350i", "H351", "H360", "H360D", "H360Df", "H360F", "H360FD",
    "H360Fd", "H361", "H361d", "H361df", "H361f", "H361fd", "H362", "H370", "H371", "H372",
    "H373", "H300", "H301", "H310", "H311", "H330", "H331", "EUH001", "EUH006", "EUH019",
    "EUH029", "EUH031", "EUH032", "EUH044", "EUH070", "EUH071",
];

// Anchors of the Sigma-Aldrich SDS template, section 1.1.
pub const NAME_START_ANCHOR: &str = "Product name :";
pub const NAME_END_ANCHOR: &str = "Product Number";
pub const CAS_START_ANCHOR: &str = "CAS-No. :";
pub const CAS_END_ANCHOR: &str = "1.2";

pub const REPORT_TITLE: &str = "MSDS hazard statement scanner";
pub const REPORT_RULE: &str = "--------------------------------";
pub const NOT_FOUND: &str = "NOT FOUND IN MSDS";
pub const PDF_EXTENSION: &str = ".pdf";
