//! Server-assigned resource UUIDs.
//!
//! UUIDs are opaque to this crate, but an empty identifier can never name a
//! resource, so constructing one fails before any request is built.

use crate::errors::InvalidIdentifier;
use aliri_braid::braid;

macro_rules! nonempty_uuid {
    ($(#[$doc:meta])* $name:ident, $label:literal) => {
        $(#[$doc])*
        #[braid(validator, serde)]
        pub struct $name(String);

        impl aliri_braid::Validator for $name {
            type Error = InvalidIdentifier;

            fn validate(s: &str) -> Result<(), Self::Error> {
                if s.is_empty() {
                    Err(InvalidIdentifier::Empty($label))
                } else {
                    Ok(())
                }
            }
        }
    };
}

nonempty_uuid!(
    /// UUID of a project.
    ProjectUuid,
    "project UUID"
);
nonempty_uuid!(
    /// UUID of a patient.
    PatientUuid,
    "patient UUID"
);
nonempty_uuid!(
    /// UUID of a sample.
    SampleUuid,
    "sample UUID"
);
nonempty_uuid!(
    /// UUID of a sequencing.
    SequencingUuid,
    "sequencing UUID"
);
nonempty_uuid!(
    /// UUID of an analysis.
    AnalysisUuid,
    "analysis UUID"
);
nonempty_uuid!(
    /// UUID of a hospital.
    HospitalUuid,
    "hospital UUID"
);
nonempty_uuid!(
    /// UUID of a sequencing center.
    SequencingCenterUuid,
    "sequencing center UUID"
);
nonempty_uuid!(
    /// UUID of a sequencing type.
    SequencingTypeUuid,
    "sequencing type UUID"
);
nonempty_uuid!(
    /// UUID of a file staged through a temporal upload.
    FileUuid,
    "file UUID"
);
nonempty_uuid!(
    /// UUID of a temporal upload slot.
    TemporalUploadUuid,
    "temporal upload UUID"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reject_empty_uuid() {
        assert!(matches!(
            ProjectUuid::try_from("").unwrap_err(),
            InvalidIdentifier::Empty("project UUID")
        ));
        assert!(matches!(
            AnalysisUuid::try_from("").unwrap_err(),
            InvalidIdentifier::Empty("analysis UUID")
        ));
    }

    #[test]
    fn test_accept_uuid() {
        let uuid = uuid::Uuid::new_v4().to_string();
        assert!(SampleUuid::try_from(uuid.as_str()).is_ok());
    }
}
