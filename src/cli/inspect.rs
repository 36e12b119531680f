use crate::classify::{
    classify, shannon_entropy, unusual_ratio, Classification, ENTROPY_THRESHOLD,
    UNUSUAL_RATIO_THRESHOLD,
};
use crate::error::Result;
use serde::Serialize;
use std::cmp::min;
use std::path::Path;

/// Classifier verdict plus the signals behind it, for display or JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct ClassifyReport {
    pub file: String,
    pub bytes: usize,
    pub preview: String,
    pub unusual_ratio: f64,
    pub entropy: f64,
    pub classification: Classification,
}

/// Classify a file's content and gather the report numbers.
pub fn classify_file(path: &Path) -> Result<ClassifyReport> {
    let data = std::fs::read(path)?;
    Ok(ClassifyReport {
        file: path.display().to_string(),
        bytes: data.len(),
        preview: hex::encode(&data[..min(data.len(), 16)]),
        unusual_ratio: unusual_ratio(&data),
        entropy: shannon_entropy(&data),
        classification: classify(&data),
    })
}

/// Human-readable rendering of a classifier report.
pub fn render_report(report: &ClassifyReport) -> String {
    let verdict = match report.classification {
        Classification::Plaintext => "PLAINTEXT",
        Classification::Encrypted => "ENCRYPTED",
    };

    let mut output = String::new();
    output.push_str("Cipherchain Classifier\n");
    output.push_str("======================\n\n");
    output.push_str(&format!("File: {}\n", report.file));
    output.push_str(&format!("Bytes analyzed: {}\n", report.bytes));
    output.push_str(&format!("First bytes: {}\n\n", report.preview));
    output.push_str(&format!(
        "Unusual byte ratio: {:.4} (threshold {})\n",
        report.unusual_ratio, UNUSUAL_RATIO_THRESHOLD
    ));
    output.push_str(&format!(
        "Shannon entropy: {:.4} bits/byte (threshold {})\n\n",
        report.entropy, ENTROPY_THRESHOLD
    ));
    output.push_str(&format!("Classification: {}\n", verdict));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_classify_file_reports_plaintext() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("prose.txt");
        fs::write(&path, b"hello world, nothing unusual here").unwrap();

        let report = classify_file(&path).unwrap();
        assert_eq!(report.classification, Classification::Plaintext);
        assert_eq!(report.bytes, 33);
        assert_eq!(report.preview, hex::encode(b"hello world, not"));

        let text = render_report(&report);
        assert!(text.contains("Classification: PLAINTEXT"));
        assert!(text.contains("Bytes analyzed: 33"));
    }

    #[test]
    fn test_classify_file_reports_encrypted() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("noise.bin");
        let noise: Vec<u8> = (0..=255).cycle().take(2048).collect();
        fs::write(&path, &noise).unwrap();

        let report = classify_file(&path).unwrap();
        assert_eq!(report.classification, Classification::Encrypted);
        assert!(render_report(&report).contains("Classification: ENCRYPTED"));
    }

    #[test]
    fn test_empty_file_previews_nothing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty");
        fs::write(&path, b"").unwrap();

        let report = classify_file(&path).unwrap();
        assert_eq!(report.classification, Classification::Plaintext);
        assert_eq!(report.preview, "");
    }

    #[test]
    fn test_report_serializes_to_json() {
        let report = ClassifyReport {
            file: "x".into(),
            bytes: 2,
            preview: "4142".into(),
            unusual_ratio: 0.0,
            entropy: 1.0,
            classification: Classification::Plaintext,
        };
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"classification\":\"plaintext\""));
    }
}
