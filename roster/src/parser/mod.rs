//! Roster file parser with encoding auto-detection.
//!
//! Turns semicolon-delimited roster lines into [`Record`]s by picking
//! fixed column positions. The first line of a file is a header and is
//! discarded.

use std::path::Path;

use crate::error::{ParseError, ParseResult};
use crate::models::Record;

/// Field delimiter of roster files and statistics exports.
pub const DEFAULT_DELIMITER: char = ';';

/// Zero-based positions of the columns the pipeline reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    pub department: usize,
    pub team: usize,
    pub salary: usize,
}

/// Column positions of the corporate roster export.
pub const ROSTER_COLUMNS: ColumnLayout = ColumnLayout {
    department: 1,
    team: 2,
    salary: 5,
};

impl ColumnLayout {
    /// Number of fields a row needs so that every column is present.
    pub fn min_fields(&self) -> usize {
        self.department.max(self.team).max(self.salary) + 1
    }
}

impl Default for ColumnLayout {
    fn default() -> Self {
        ROSTER_COLUMNS
    }
}

/// Result of reading a roster file
#[derive(Debug, Clone)]
pub struct ParsedRoster {
    /// Parsed data rows, in file order
    pub records: Vec<Record>,
    /// Detected encoding
    pub encoding: String,
    /// Column headers from the first line
    pub headers: Vec<String>,
}

/// Detect the encoding of raw bytes.
///
/// Valid UTF-8 is taken as is; anything else is guessed by chardet.
pub fn detect_encoding(bytes: &[u8]) -> String {
    if std::str::from_utf8(bytes).is_ok() {
        return "utf-8".to_string();
    }

    let result = chardet::detect(bytes);
    let charset = result.0;

    match charset.to_lowercase().as_str() {
        "ascii" | "utf-8" | "utf8" | "" => "utf-8".to_string(),
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        "windows-1251" | "cp1251" => "windows-1251".to_string(),
        other => other.to_string(),
    }
}

/// Decode bytes to string using the specified encoding.
///
/// Unknown encodings and invalid UTF-8 fall back to lossy UTF-8.
pub fn decode_content(bytes: &[u8], encoding: &str) -> String {
    let decoded = match encoding.to_lowercase().as_str() {
        "iso-8859-1" | "latin-1" | "latin1" | "windows-1252" | "cp1252" => {
            encoding_rs::WINDOWS_1252.decode(bytes).0.into_owned()
        }
        "windows-1251" | "cp1251" => encoding_rs::WINDOWS_1251.decode(bytes).0.into_owned(),
        "utf-8" | "utf8" | "ascii" => String::from_utf8_lossy(bytes).into_owned(),
        label => match encoding_rs::Encoding::for_label(label.as_bytes()) {
            Some(enc) => enc.decode(bytes).0.into_owned(),
            None => String::from_utf8_lossy(bytes).into_owned(),
        },
    };

    match decoded.strip_prefix('\u{feff}') {
        Some(rest) => rest.to_string(),
        None => decoded,
    }
}

/// Parse one data line into a [`Record`].
///
/// `line_number` is the 1-based position of the line in its file and is
/// only used for error reporting.
///
/// # Example
/// ```
/// use roster::parser::{parse_record, ROSTER_COLUMNS};
///
/// let record = parse_record("Ann;Sales;North;x;y;1500", 2, &ROSTER_COLUMNS, ';').unwrap();
/// assert_eq!(record.department, "Sales");
/// assert_eq!(record.team, "North");
/// assert_eq!(record.salary, 1500.0);
/// ```
pub fn parse_record(
    line: &str,
    line_number: usize,
    layout: &ColumnLayout,
    delimiter: char,
) -> ParseResult<Record> {
    let fields: Vec<&str> = line.trim().split(delimiter).collect();

    let required = layout.min_fields();
    if fields.len() < required {
        let column = if fields.len() <= layout.department {
            "department"
        } else if fields.len() <= layout.team {
            "team"
        } else {
            "salary"
        };
        let err = ParseError::malformed(
            line_number,
            column,
            format!("expected at least {} fields, found {}", required, fields.len()),
        );
        return Err(match fields.get(layout.department) {
            Some(dep) => err.with_department(dep.trim()),
            None => err,
        });
    }

    let department = fields[layout.department].trim();
    let team = fields[layout.team].trim();
    let raw_salary = fields[layout.salary].trim();

    let salary: f64 = raw_salary.parse().map_err(|_| {
        ParseError::malformed(line_number, "salary", "salary is not a number")
            .with_value(raw_salary)
            .with_department(department)
    })?;

    if !salary.is_finite() || salary < 0.0 {
        return Err(ParseError::malformed(
            line_number,
            "salary",
            "salary must be a finite, non-negative number",
        )
        .with_value(raw_salary)
        .with_department(department));
    }

    Ok(Record::new(department, team, salary))
}

/// Parse roster content, skipping the header line.
///
/// Every other line is a data row; blank lines are malformed. Stops at the
/// first malformed row.
pub fn parse_records(
    content: &str,
    layout: &ColumnLayout,
    delimiter: char,
) -> ParseResult<Vec<Record>> {
    content
        .lines()
        .enumerate()
        .skip(1)
        .map(|(idx, line)| parse_record(line, idx + 1, layout, delimiter))
        .collect()
}

/// Split the header line into column names.
pub fn parse_headers(content: &str, delimiter: char) -> Vec<String> {
    content
        .lines()
        .next()
        .map(|line| {
            line.trim()
                .split(delimiter)
                .map(|s| s.trim().trim_matches('"').to_string())
                .collect()
        })
        .unwrap_or_default()
}

/// Parse roster bytes with encoding auto-detection.
pub fn parse_bytes(
    bytes: &[u8],
    layout: &ColumnLayout,
    delimiter: char,
) -> ParseResult<ParsedRoster> {
    let encoding = detect_encoding(bytes);
    let content = decode_content(bytes, &encoding);

    Ok(ParsedRoster {
        records: parse_records(&content, layout, delimiter)?,
        headers: parse_headers(&content, delimiter),
        encoding,
    })
}

/// Read and parse a roster file.
pub fn read_roster_file<P: AsRef<Path>>(
    path: P,
    layout: &ColumnLayout,
    delimiter: char,
) -> ParseResult<ParsedRoster> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_bytes(&bytes, layout, delimiter)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "name;department;team;position;grade;salary";

    #[test]
    fn test_parse_record_picks_fixed_columns() {
        let record = parse_record("Ivan;IT;Backend;Dev;3;120000", 2, &ROSTER_COLUMNS, ';').unwrap();

        assert_eq!(record, Record::new("IT", "Backend", 120000.0));
    }

    #[test]
    fn test_parse_record_strips_line_and_fields() {
        let line = "  Ivan; IT ;Backend;Dev;3; 99.5 \r\n";
        let record = parse_record(line, 2, &ROSTER_COLUMNS, ';').unwrap();

        assert_eq!(record.department, "IT");
        assert_eq!(record.salary, 99.5);
    }

    #[test]
    fn test_extra_columns_ignored() {
        let record = parse_record("a;B;C;d;e;10;f;g", 2, &ROSTER_COLUMNS, ';').unwrap();
        assert_eq!(record, Record::new("B", "C", 10.0));
    }

    #[test]
    fn test_too_few_fields() {
        let err = parse_record("Ivan;IT;Backend", 4, &ROSTER_COLUMNS, ';').unwrap_err();

        match err {
            ParseError::MalformedRow {
                line,
                column,
                department,
                message,
                ..
            } => {
                assert_eq!(line, 4);
                assert_eq!(column, "salary");
                assert_eq!(department.as_deref(), Some("IT"));
                assert!(message.contains("at least 6 fields, found 3"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_salary_not_a_number() {
        let err = parse_record("Ivan;IT;Backend;Dev;3;lots", 9, &ROSTER_COLUMNS, ';').unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains("Line 9"));
        assert!(msg.contains("value 'lots'"));
        assert!(msg.contains("department 'IT'"));
    }

    #[test]
    fn test_negative_and_non_finite_salaries_rejected() {
        for raw in ["-1", "NaN", "inf"] {
            let line = format!("Ivan;IT;Backend;Dev;3;{raw}");
            assert!(
                parse_record(&line, 2, &ROSTER_COLUMNS, ';').is_err(),
                "salary {raw} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_records_skips_header() {
        let content = format!("{HEADER}\na;X;t1;p;g;1\nb;Y;t2;p;g;2\n");
        let records = parse_records(&content, &ROSTER_COLUMNS, ';').unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].department, "X");
        assert_eq!(records[1].department, "Y");
    }

    #[test]
    fn test_blank_data_line_is_malformed() {
        for blank in ["", "   "] {
            let content = format!("{HEADER}\na;X;t;p;g;1\n{blank}\nb;Y;t;p;g;2\n");
            let err = parse_records(&content, &ROSTER_COLUMNS, ';').unwrap_err();

            match err {
                ParseError::MalformedRow { line, message, .. } => {
                    assert_eq!(line, 3);
                    assert!(message.contains("found 1"));
                }
                other => panic!("unexpected error: {other:?}"),
            }
        }
    }

    #[test]
    fn test_parse_records_reports_source_line() {
        let content = format!("{HEADER}\na;X;t1;p;g;1\nc;Z;t3;p;g;3\nb;Y;t2\n");
        let err = parse_records(&content, &ROSTER_COLUMNS, ';').unwrap_err();

        match err {
            ParseError::MalformedRow { line, .. } => assert_eq!(line, 4),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_header_only_and_empty_content() {
        assert!(parse_records(HEADER, &ROSTER_COLUMNS, ';').unwrap().is_empty());
        assert!(parse_records("", &ROSTER_COLUMNS, ';').unwrap().is_empty());
    }

    #[test]
    fn test_custom_layout_min_fields() {
        let layout = ColumnLayout {
            department: 0,
            team: 1,
            salary: 2,
        };
        assert_eq!(layout.min_fields(), 3);
        assert_eq!(ROSTER_COLUMNS.min_fields(), 6);

        let record = parse_record("Ops,Infra,10", 2, &layout, ',').unwrap();
        assert_eq!(record, Record::new("Ops", "Infra", 10.0));
    }

    #[test]
    fn test_parse_headers() {
        assert_eq!(
            parse_headers("\"name\";department;team\nx;y;z", ';'),
            vec!["name", "department", "team"]
        );
        assert!(parse_headers("", ';').is_empty());
    }

    #[test]
    fn test_bom_is_stripped() {
        let bytes = "\u{feff}h;h;h;h;h;h\nx;D;T;p;g;5".as_bytes();
        let parsed = parse_bytes(bytes, &ROSTER_COLUMNS, ';').unwrap();

        assert_eq!(parsed.headers[0], "h");
        assert_eq!(parsed.records, vec![Record::new("D", "T", 5.0)]);
    }

    #[test]
    fn test_cp1251_decoding() {
        // "Отдел" in Windows-1251
        let bytes: &[u8] = &[0xCE, 0xF2, 0xE4, 0xE5, 0xEB];
        assert_eq!(decode_content(bytes, "windows-1251"), "Отдел");
    }

    #[test]
    fn test_utf8_detected_without_guessing() {
        assert_eq!(detect_encoding("Продажи;Север".as_bytes()), "utf-8");
        assert_eq!(detect_encoding(b"plain ascii"), "utf-8");
    }

    #[test]
    fn test_decode_by_label() {
        // "Отдел" in KOI8-R
        let bytes: &[u8] = &[0xEF, 0xD4, 0xC4, 0xC5, 0xCC];
        assert_eq!(decode_content(bytes, "KOI8-R"), "Отдел");
    }

    #[test]
    fn test_latin1_upper_half_is_not_latin9() {
        // 0xA4 is the currency sign in ISO-8859-1, the euro sign in ISO-8859-15
        let bytes: &[u8] = &[0xA4, 0xBC, 0xBD];
        assert_eq!(decode_content(bytes, "iso-8859-1"), "¤¼½");
    }

    #[test]
    fn test_latin1_decoding() {
        // "Société" in ISO-8859-1
        let bytes: &[u8] = &[0x53, 0x6F, 0x63, 0x69, 0xE9, 0x74, 0xE9];
        assert_eq!(decode_content(bytes, "iso-8859-1"), "Société");
    }

    #[test]
    fn test_missing_file() {
        let err = read_roster_file("/definitely/not/here.csv", &ROSTER_COLUMNS, ';').unwrap_err();
        assert!(matches!(err, ParseError::Io { .. }));
        assert!(err.to_string().contains("here.csv"));
    }
}
