use super::SizeRecord;
use crate::error::{ProbeError, ProbeResult};

/// Parse probe output back into records.
///
/// Blank lines are skipped and surrounding whitespace is trimmed. Every
/// other line must be a C identifier, one space, and an unsigned decimal.
pub fn parse_records(text: &str) -> ProbeResult<Vec<SizeRecord>> {
    let mut records = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let record = parse_line(line).ok_or_else(|| ProbeError::MalformedLine {
            line_no: idx + 1,
            line: raw.to_string(),
        })?;
        records.push(record);
    }

    Ok(records)
}

fn parse_line(line: &str) -> Option<SizeRecord> {
    let (name, size) = line.split_once(' ')?;

    let mut chars = name.chars();
    let head_ok = chars.next().map_or(false, |c| c.is_ascii_alphabetic() || c == '_');
    if !head_ok || !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return None;
    }
    if size.is_empty() || !size.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    Some(SizeRecord::new(name, size.parse().ok()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_probe_output() {
        let text = "CameraAbilities 2504\nCameraText 32768\nCameraFilePath 1152\n";
        let records = parse_records(text).unwrap();
        assert_eq!(
            records,
            vec![
                SizeRecord::new("CameraAbilities", 2504),
                SizeRecord::new("CameraText", 32768),
                SizeRecord::new("CameraFilePath", 1152),
            ]
        );
    }

    #[test]
    fn test_skips_blank_lines_and_crlf() {
        let records = parse_records("\r\nCameraText 32768\r\n\n").unwrap();
        assert_eq!(records, vec![SizeRecord::new("CameraText", 32768)]);
    }

    #[test]
    fn test_rejects_malformed_lines() {
        for bad in [
            "CameraText",
            "CameraText  32768",
            "CameraText -1",
            "CameraText 12ab",
            "9Camera 12",
            "Camera-Text 12",
            "CameraText 1 2",
        ] {
            let input = format!("CameraFilePath 1152\n{bad}\n");
            match parse_records(&input) {
                Err(ProbeError::MalformedLine { line_no, line }) => {
                    assert_eq!(line_no, 2, "{bad:?}");
                    assert_eq!(line, bad);
                }
                other => panic!("{bad:?} parsed as {other:?}"),
            }
        }
    }

    #[test]
    fn test_rejects_overflowing_size() {
        let input = "CameraText 999999999999999999999999999";
        assert!(matches!(
            parse_records(input),
            Err(ProbeError::MalformedLine { line_no: 1, .. })
        ));
    }
}
