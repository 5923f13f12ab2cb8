pub mod outcome;
pub mod scan;

pub use outcome::{OutcomeKind, ScanOutcome, ScanRecord};
pub use scan::{validate_target, RequestError, ScanRequest, ScanType, URL_PREFIX};
