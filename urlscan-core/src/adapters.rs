// ---------------------------------------------------------------------------
// Per-tool adapters
// ---------------------------------------------------------------------------
//
// One adapter per external tool: a fixed command template filled in by
// string substitution, plus a renderer that shapes the captured output into
// the labeled block shown to the user. The tools' flag syntax and output
// formats are contractual inputs this crate depends on but does not control.

use std::sync::OnceLock;

use regex::Regex;
use urlscan_types::{OutcomeKind, ScanType};

use crate::sanitize::sanitize;

/// Sentinel line for nmap/assetfinder runs that produced no output.
pub const NO_RESULT_SENTINEL: &str = "Tarama sonucu bulunamadı.";

/// Sentinel line for nuclei runs with no extracted findings.
pub const NO_FINDING_SENTINEL: &str = "Zafiyet bulunamadı.";

/// Marker prefixed to failure descriptions embedded in result blocks.
pub const ERROR_MARKER: &str = "Hata";

/// Header line of a rendered result block.
pub fn block_header(scan_type: ScanType) -> String {
    format!("Tarama Sonuçları ({}):", scan_type.label())
}

// ---------------------------------------------------------------------------
// command templates
// ---------------------------------------------------------------------------

pub fn nmap_command(target: &str) -> String {
    format!("nmap -Pn -p 80,443,22,21 {} -T3", target.trim())
}

pub fn assetfinder_command(target: &str) -> String {
    format!("assetfinder {}", target.trim())
}

/// Nuclei template categories are lowercased and comma-joined into a single
/// `-t` argument. With no categories selected the scan falls back to `cves`.
pub fn nuclei_command(target: &str, categories: &[String]) -> String {
    let templates = if categories.is_empty() {
        "cves".to_string()
    } else {
        categories.join(",").to_lowercase()
    };
    format!(
        "nuclei -t {} -u {} -c 10 --rate-limit 200 --timeout 300 --silent",
        templates,
        target.trim()
    )
}

pub fn whatweb_command(target: &str) -> String {
    format!("whatweb {}", target.trim())
}

/// Build the command line for a scan type.
pub fn command_for(scan_type: ScanType, target: &str, categories: &[String]) -> String {
    match scan_type {
        ScanType::Nmap => nmap_command(target),
        ScanType::Assetfinder => assetfinder_command(target),
        ScanType::Nuclei => nuclei_command(target, categories),
    }
}

// ---------------------------------------------------------------------------
// output rendering
// ---------------------------------------------------------------------------

/// Shape raw tool output into the labeled display block for `scan_type`.
pub fn render(scan_type: ScanType, raw: &str) -> (String, OutcomeKind) {
    match scan_type {
        ScanType::Nmap => render_nmap(raw),
        ScanType::Assetfinder => render_assetfinder(raw),
        ScanType::Nuclei => render_nuclei(raw),
    }
}

/// Render a subprocess failure as an inline error block. The request still
/// succeeds; the failure is data in the output, not control flow.
pub fn render_failure(scan_type: ScanType, description: &str) -> String {
    format!(
        "{}\n{}: {}\n",
        block_header(scan_type),
        ERROR_MARKER,
        description
    )
}

fn render_nmap(raw: &str) -> (String, OutcomeKind) {
    let cleaned = sanitize(raw);
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        (
            format!("{}\n{}\n", block_header(ScanType::Nmap), NO_RESULT_SENTINEL),
            OutcomeKind::Empty,
        )
    } else {
        (
            format!("{}\n{}\n", block_header(ScanType::Nmap), cleaned),
            OutcomeKind::Found,
        )
    }
}

fn render_assetfinder(raw: &str) -> (String, OutcomeKind) {
    let cleaned = sanitize(raw);
    let mut result = format!("{}\n", block_header(ScanType::Assetfinder));
    let mut found = false;
    for line in cleaned.lines() {
        let line = line.trim();
        if !line.is_empty() {
            result.push_str("- ");
            result.push_str(line);
            result.push('\n');
            found = true;
        }
    }
    if found {
        (result, OutcomeKind::Found)
    } else {
        result.push_str(NO_RESULT_SENTINEL);
        result.push('\n');
        (result, OutcomeKind::Empty)
    }
}

fn finding_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\[(.*?)\]").expect("valid finding pattern"))
}

/// Nuclei prints findings as bracketed fragments (`[template] [severity] …`).
/// Extraction is best-effort display shaping over the raw output; the raw
/// text remains the authoritative record. Each match is sanitized and
/// rendered as a leading-dash line.
fn render_nuclei(raw: &str) -> (String, OutcomeKind) {
    let mut result = format!("{}\n", block_header(ScanType::Nuclei));
    let mut found = false;
    for m in finding_regex().find_iter(raw) {
        let fragment = sanitize(m.as_str());
        let fragment = fragment.trim();
        if !fragment.is_empty() {
            result.push_str("- ");
            result.push_str(fragment);
            result.push('\n');
            found = true;
        }
    }
    if found {
        (result, OutcomeKind::Found)
    } else {
        result.push_str(NO_FINDING_SENTINEL);
        result.push('\n');
        (result, OutcomeKind::Empty)
    }
}
