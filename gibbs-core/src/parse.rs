use serde::{Deserialize, Serialize};

use crate::error::GibbsError;
use crate::series::{EnergyPoint, EnergySeries};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Skip the first line, which holds column names
    pub skip_header: bool,
    pub delimiter: char,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            skip_header: true,
            delimiter: ',',
        }
    }
}

/// Parses `label,energy` records, one per line.
///
/// Every other line must split into exactly two fields, with one exception:
/// empty and whitespace-only lines are skipped rather than reported as
/// malformed, so trailing newlines and spacer lines are accepted. Labels are
/// kept verbatim, energies may be surrounded by whitespace. Line numbers in
/// errors are 1-based and count the header and any skipped lines.
pub fn parse_energy_text(text: &str, options: &ParseOptions) -> Result<EnergySeries, GibbsError> {
    let skip = usize::from(options.skip_header);
    let mut points = Vec::new();

    for (i, line) in text.lines().enumerate().skip(skip) {
        if line.trim().is_empty() {
            continue;
        }
        points.push(parse_record(line, i + 1, options.delimiter)?);
    }

    if points.is_empty() {
        return Err(GibbsError::EmptyInput(
            "input contains no energy records".to_string(),
        ));
    }

    EnergySeries::load(points)
}

fn parse_record(line: &str, line_number: usize, delimiter: char) -> Result<EnergyPoint, GibbsError> {
    let fields: Vec<&str> = line.split(delimiter).collect();
    let [label, energy] = fields.as_slice() else {
        return Err(GibbsError::MalformedInput {
            line: line_number,
            reason: format!(
                "expected 2 fields separated by {delimiter:?}, found {}",
                fields.len()
            ),
        });
    };

    let energy = energy.trim();
    let value: f64 = energy.parse().map_err(|_| GibbsError::MalformedInput {
        line: line_number,
        reason: format!("energy {energy:?} is not a number"),
    })?;

    if !value.is_finite() {
        return Err(GibbsError::MalformedInput {
            line: line_number,
            reason: format!("energy {energy:?} is not finite"),
        });
    }

    Ok(EnergyPoint::new(*label, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_header() {
        let text = "state,dG\nA, 0.0\nTS1,12.5 \nB,-3\n";
        let series = parse_energy_text(text, &Default::default()).unwrap();
        let labels: Vec<_> = series.labels().collect();
        let energies: Vec<_> = series.energies().collect();
        assert_eq!(labels, vec!["A", "TS1", "B"]);
        assert_eq!(energies, vec![0.0, 12.5, -3.0]);
    }

    #[test]
    fn test_parse_without_header() {
        let options = ParseOptions {
            skip_header: false,
            ..Default::default()
        };
        let series = parse_energy_text("A,1\nB,2", &options).unwrap();
        assert_eq!(series.len(), 2);
    }

    #[test]
    fn test_parse_skips_blank_lines_and_crlf() {
        let text = "label,energy\r\nA,1.5\r\n\r\nB,2.5\r\n   \n";
        let series = parse_energy_text(text, &Default::default()).unwrap();
        let energies: Vec<_> = series.energies().collect();
        assert_eq!(energies, vec![1.5, 2.5]);
    }

    #[test]
    fn test_skipped_lines_still_count_for_line_numbers() {
        let err = parse_energy_text("h\n\nA,1\n  \nB,x\n", &Default::default()).unwrap_err();
        assert!(matches!(err, GibbsError::MalformedInput { line: 5, .. }));
    }

    #[test]
    fn test_parse_wrong_field_count() {
        let err = parse_energy_text("h\nA,1\nB,2,3\n", &Default::default()).unwrap_err();
        assert!(matches!(err, GibbsError::MalformedInput { line: 3, .. }));

        let err = parse_energy_text("h\nA 1\n", &Default::default()).unwrap_err();
        assert!(matches!(err, GibbsError::MalformedInput { line: 2, .. }));
    }

    #[test]
    fn test_parse_bad_number() {
        let err = parse_energy_text("h\nA,abc\n", &Default::default()).unwrap_err();
        assert!(matches!(err, GibbsError::MalformedInput { line: 2, .. }));

        let err = parse_energy_text("h\nA,inf\n", &Default::default()).unwrap_err();
        assert!(matches!(err, GibbsError::MalformedInput { line: 2, .. }));
    }

    #[test]
    fn test_parse_header_only() {
        let err = parse_energy_text("label,energy\n", &Default::default()).unwrap_err();
        assert!(matches!(err, GibbsError::EmptyInput(_)));
    }

    #[test]
    fn test_parse_custom_delimiter() {
        let options = ParseOptions {
            delimiter: ';',
            ..Default::default()
        };
        let series = parse_energy_text("h\nA;1,5\n", &options);
        assert!(series.is_err());

        let series = parse_energy_text("h\nA;-1.5\n", &options).unwrap();
        assert_eq!(series.first_energy(), -1.5);
    }
}
