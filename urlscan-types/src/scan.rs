use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Required prefix for every scan target.
pub const URL_PREFIX: &str = "www.";

/// External tool selectable on the scan form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanType {
    Nmap,
    Assetfinder,
    Nuclei,
}

impl ScanType {
    /// All scan types in execution priority order. The orchestrator walks
    /// this list, so submission order never changes execution order.
    pub const ALL: [ScanType; 3] = [ScanType::Nmap, ScanType::Assetfinder, ScanType::Nuclei];

    /// Label used in rendered result blocks ("Tarama Sonuçları (...)").
    pub fn label(&self) -> &'static str {
        match self {
            Self::Nmap => "Nmap",
            Self::Assetfinder => "Assetfinder",
            Self::Nuclei => "Nuclei",
        }
    }
}

impl fmt::Display for ScanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nmap => write!(f, "nmap"),
            Self::Assetfinder => write!(f, "assetfinder"),
            Self::Nuclei => write!(f, "nuclei"),
        }
    }
}

impl FromStr for ScanType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nmap" => Ok(Self::Nmap),
            "assetfinder" => Ok(Self::Assetfinder),
            "nuclei" => Ok(Self::Nuclei),
            other => Err(format!("unknown scan type: {other}")),
        }
    }
}

/// Request validation error. The `Display` text doubles as the user-facing
/// message returned by the HTTP layer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    #[error("Geçerli bir URL girin.")]
    EmptyUrl,
    #[error("URL, www ile başlamalıdır.")]
    MissingPrefix,
    #[error("En az bir tarama türü seçin.")]
    NoScanTypes,
}

/// A validated scan request. Constructed only through [`ScanRequest::new`],
/// so a value of this type always carries a prefix-checked target and at
/// least one scan type, held in execution priority order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanRequest {
    pub target: String,
    pub scan_types: Vec<ScanType>,
    /// Nuclei template categories; only meaningful when nuclei is selected.
    pub template_categories: Vec<String>,
}

/// Check a submitted target URL: non-empty and carrying the required
/// prefix. Returns the trimmed target. Shared by every handler so no
/// adapter ever sees an unvalidated URL.
pub fn validate_target(target: &str) -> Result<&str, RequestError> {
    let target = target.trim();
    if target.is_empty() {
        return Err(RequestError::EmptyUrl);
    }
    if !target.starts_with(URL_PREFIX) {
        return Err(RequestError::MissingPrefix);
    }
    Ok(target)
}

impl ScanRequest {
    pub fn new(
        target: &str,
        scan_types: &[ScanType],
        template_categories: Vec<String>,
    ) -> Result<Self, RequestError> {
        let target = validate_target(target)?;
        if scan_types.is_empty() {
            return Err(RequestError::NoScanTypes);
        }

        // Deduplicate and normalize to priority order.
        let scan_types = ScanType::ALL
            .into_iter()
            .filter(|t| scan_types.contains(t))
            .collect();

        Ok(Self {
            target: target.to_string(),
            scan_types,
            template_categories,
        })
    }

    pub fn wants(&self, scan_type: ScanType) -> bool {
        self.scan_types.contains(&scan_type)
    }
}
