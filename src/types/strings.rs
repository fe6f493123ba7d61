use aliri_braid::braid;

/// User-assigned patient identifier (distinct from [crate::types::PatientUuid]).
#[braid(serde)]
pub struct PatientId;

/// User-assigned sample identifier.
#[braid(serde)]
pub struct SampleId;

/// User-assigned sequencing identifier.
#[braid(serde)]
pub struct SequencingId;

/// User-assigned analysis identifier.
#[braid(serde)]
pub struct AnalysisId;

/// Date in `YYYY-MM-DD` format.
#[braid(serde)]
pub struct DateString;

/// One-time code paired with a temporal upload slot.
#[braid(serde)]
pub struct UploadCode;
