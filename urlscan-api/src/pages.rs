// ---------------------------------------------------------------------------
// Inline HTML rendering
// ---------------------------------------------------------------------------
//
// Self-contained pages, no template engine. Everything user-controlled or
// tool-produced goes through `html_escape` before landing in markup.

use std::fmt::Write;
use std::time::Duration;

use urlscan_core::ScanReport;
use urlscan_types::ScanRecord;

/// Nuclei template categories offered on the scan form: form value and
/// checkbox caption.
const TEMPLATE_OPTIONS: &[(&str, &str)] = &[
    ("cves", "CVE"),
    ("dns", "DNS"),
    ("files", "Files"),
    ("generic-detections", "Generic-detections"),
    ("panels", "Panels"),
    ("subdomain-takeover", "Subdomain-takeover"),
    ("technologies", "Technologies"),
    ("tokens", "Tokens"),
    ("vulnerable", "Vulnerable"),
];

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn format_duration(d: Duration) -> String {
    let ms = d.as_millis();
    if ms < 1000 {
        format!("{}ms", ms)
    } else {
        format!("{:.2}s", d.as_secs_f64())
    }
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<html>\n<head>\n<title>{title}</title>\n</head>\n<body>\n{body}\n</body>\n</html>\n"
    )
}

/// `GET /` — URL entry form.
pub fn home_page() -> String {
    page(
        "URL Tarayıcı",
        r#"<h1>URL Tarayıcı</h1>
<form action="/teknoloji-tarama" method="post">
    <label for="url">URL:</label>
    <input type="text" name="url" id="url">
    <input type="submit" value="Teknoloji Taraması Yap">
</form>"#,
    )
}

/// `POST /teknoloji-tarama` — technology fingerprint output plus the
/// scan-selection form for the follow-up orchestration.
pub fn tech_page(url: &str, output: &str) -> String {
    let mut body = String::with_capacity(2048);
    body.push_str("<h1>Teknoloji Tarama Sonuçları</h1>\n");
    let _ = write!(body, "<pre>{}</pre>\n", html_escape(output));
    body.push_str("<form action=\"/process\" method=\"post\">\n");
    let _ = write!(
        body,
        "    <input type=\"hidden\" name=\"url\" value=\"{}\">\n",
        html_escape(url)
    );
    body.push_str("    <label for=\"scanType\">Tarama Türleri:</label>\n");
    for tool in ["nmap", "assetfinder", "nuclei"] {
        let _ = write!(
            body,
            "    <input type=\"checkbox\" name=\"scanType\" value=\"{tool}\">{}\n",
            capitalize(tool)
        );
    }
    body.push_str("    <br>\n");
    body.push_str("    <label for=\"selectedTemplates\">Nuclei için seçilecek templateler:</label>\n");
    for (value, caption) in TEMPLATE_OPTIONS {
        let _ = write!(
            body,
            "    <input type=\"checkbox\" name=\"selectedTemplates\" value=\"{value}\">{caption}\n"
        );
    }
    body.push_str("    <br>\n");
    body.push_str("    <input type=\"submit\" value=\"Taramayı Başlat\">\n");
    body.push_str("</form>");
    page("Teknoloji Tarama Sonuçları", &body)
}

/// `POST /process` — combined scan output with per-branch and total timing.
pub fn results_page(report: &ScanReport) -> String {
    let mut body = String::with_capacity(4096);
    body.push_str("<h1>Tarama Sonuçları</h1>\n");
    let _ = write!(body, "<pre>{}</pre>\n", html_escape(&report.combined_text()));
    for outcome in &report.outcomes {
        let _ = write!(
            body,
            "<p>{} Tarama Süresi: {}</p>\n",
            outcome.scan_type.label(),
            format_duration(outcome.elapsed)
        );
    }
    let _ = write!(
        body,
        "<p>Toplam Tarama Süresi: {}</p>",
        format_duration(report.total_duration)
    );
    page("Tarama Sonuçları", &body)
}

/// `GET /view` — the persisted result log as a table.
pub fn view_page(records: &[ScanRecord]) -> String {
    let mut body = String::with_capacity(4096);
    body.push_str("<h1>Tarama Sonuçları</h1>\n<table border=\"1\">\n");
    body.push_str(
        "    <tr>\n        <th>ID</th>\n        <th>URL</th>\n        <th>Nmap</th>\n        <th>Assetfinder</th>\n        <th>Nuclei</th>\n    </tr>\n",
    );
    for record in records {
        let _ = write!(
            body,
            "    <tr>\n        <td>{}</td>\n        <td>{}</td>\n        <td><pre>{}</pre></td>\n        <td><pre>{}</pre></td>\n        <td><pre>{}</pre></td>\n    </tr>\n",
            record.id,
            html_escape(&record.url),
            html_escape(&record.nmap),
            html_escape(&record.assetfinder),
            html_escape(&record.nuclei),
        );
    }
    body.push_str("</table>");
    page("Tarama Sonuçları", &body)
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_page_posts_to_tech_scan() {
        let html = home_page();
        assert!(html.contains("action=\"/teknoloji-tarama\""));
        assert!(html.contains("name=\"url\""));
    }

    #[test]
    fn tech_page_carries_url_and_scan_form() {
        let html = tech_page("www.example.com", "WordPress 6.4");
        assert!(html.contains("value=\"www.example.com\""));
        assert!(html.contains("WordPress 6.4"));
        assert!(html.contains("action=\"/process\""));
        assert!(html.contains("value=\"nmap\""));
        assert!(html.contains("value=\"subdomain-takeover\""));
    }

    #[test]
    fn tool_output_is_escaped() {
        let html = tech_page("www.example.com", "<script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn view_page_escapes_record_fields() {
        let records = vec![ScanRecord {
            id: 7,
            url: "www.example.com".into(),
            nmap: "<b>80/tcp</b>".into(),
            assetfinder: String::new(),
            nuclei: String::new(),
            created_at: 0,
        }];
        let html = view_page(&records);
        assert!(html.contains("<td>7</td>"));
        assert!(html.contains("&lt;b&gt;80/tcp&lt;/b&gt;"));
        assert!(!html.contains("<b>80/tcp</b>"));
    }

    #[test]
    fn duration_formatting() {
        assert_eq!(format_duration(Duration::from_millis(250)), "250ms");
        assert_eq!(format_duration(Duration::from_millis(1500)), "1.50s");
    }
}
