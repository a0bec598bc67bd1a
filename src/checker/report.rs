use std::collections::HashMap;

use crate::checker::status;

/// First line of every report.
pub fn report_header(target_host: &str) -> String {
    format!("Domain Status Report ({})", target_host)
}

/// Report for a run with no domains configured.
pub fn no_domains_report(target_host: &str) -> String {
    format!("{}\nTidak ada domain untuk dicek.", report_header(target_host))
}

/// Report for a run whose scrape failed; carries the error text verbatim.
pub fn scrape_failure_report(target_host: &str, error_text: &str) -> String {
    format!("❌ Gagal cek domain ({}): {}", target_host, error_text)
}

/// Header plus one line per input domain, in input order. Domains absent
/// from the scraped map fall back to "Unknown" before normalization.
pub fn build_report(
    target_host: &str,
    domains: &[String],
    statuses: &HashMap<String, String>,
) -> String {
    let mut lines = vec![report_header(target_host)];

    for domain in domains {
        let raw = statuses
            .get(&domain.to_lowercase())
            .map(String::as_str)
            .unwrap_or("Unknown");
        let (category, label) = status::normalize(raw);
        lines.push(format!("{}: {} {}", domain, category.glyph(), label));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn domains(list: &[&str]) -> Vec<String> {
        list.iter().map(|d| d.to_string()).collect()
    }

    #[test]
    fn test_report_header() {
        assert_eq!(
            report_header("www.ninjamvp.asia"),
            "Domain Status Report (www.ninjamvp.asia)"
        );
    }

    #[test]
    fn test_no_domains_report() {
        let report = no_domains_report("www.ninjamvp.asia");
        assert!(report.starts_with("Domain Status Report"));
        assert!(report.contains("Tidak ada domain untuk dicek."));
    }

    #[test]
    fn test_scrape_failure_report_carries_error_text() {
        let report = scrape_failure_report("www.ninjamvp.asia", "Timed out after 60s waiting for: tr");
        assert!(report.contains("Gagal cek domain"));
        assert!(report.contains("www.ninjamvp.asia"));
        assert!(report.contains("Timed out after 60s waiting for: tr"));
    }

    #[test]
    fn test_build_report_maps_statuses_and_defaults_unknown() {
        let mut statuses = HashMap::new();
        statuses.insert("a.com".to_string(), "Aman".to_string());

        let report = build_report("www.ninjamvp.asia", &domains(&["a.com", "b.com"]), &statuses);
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Domain Status Report (www.ninjamvp.asia)");
        assert_eq!(lines[1], "a.com: 🟢 Not Blocked");
        assert_eq!(lines[2], "b.com: ⚪ Unknown");
    }

    #[test]
    fn test_build_report_lookup_is_case_insensitive() {
        let mut statuses = HashMap::new();
        statuses.insert("mixed.com".to_string(), "Terblokir".to_string());

        let report = build_report("host", &domains(&["MIXED.com"]), &statuses);
        assert!(report.contains("MIXED.com: 🔴 Blocked"));
    }

    #[test]
    fn test_build_report_preserves_input_order() {
        let statuses = HashMap::new();
        let report = build_report("host", &domains(&["z.com", "a.com", "m.com"]), &statuses);
        let lines: Vec<&str> = report.lines().collect();

        assert!(lines[1].starts_with("z.com:"));
        assert!(lines[2].starts_with("a.com:"));
        assert!(lines[3].starts_with("m.com:"));
    }
}
