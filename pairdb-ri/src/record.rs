//! Typed parsing of results file lines
//!
//! One line of a results file is one comma-separated record. The format has
//! no quoting or escaping: a comma inside a field value is indistinguishable
//! from a separator. Parsing is strict; a line that does not match the
//! expected shape fails the whole run with a named error instead of an
//! index panic.

use pairdb_common::{Error, Result};

/// Minimum number of comma-separated fields in a data line
pub const MIN_FIELDS: usize = 10;

/// Column holding the structure file path (0-based)
const PDB_PATH_FIELD: usize = 9;

// Optional trailing columns, present only in wider results files
const RESOLUTION_FIELD: usize = 10;
const CHAIN1_FIELD: usize = 13;
const CHAIN2_FIELD: usize = 14;
const ENERGY_HARTREE_FIELD: usize = 44;
const ENERGY_KCAL_FIELD: usize = 45;

/// One parsed data line of a results file
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRecord {
    pub residue1: String,
    pub residue2: String,
    pub distance: f64,
    pub angle: f64,
    pub angle_p: f64,
    pub angle1: f64,
    pub seq1: i64,
    pub seq2: i64,
    pub code: String,
    pub pdb_path: String,
    /// Structure code extracted from `pdb_path`, never empty
    pub pdb_code: String,
    pub resolution: Option<f64>,
    pub chain1: Option<String>,
    pub chain2: Option<String>,
    pub energy_hartree: Option<f64>,
    pub energy_kcal: Option<f64>,
}

impl ResultRecord {
    /// Parse one data line
    ///
    /// `line_no` is 1-based and used only for error reporting. Comment
    /// lines are the caller's job; the parser only sees data lines.
    pub fn parse(line_no: usize, line: &str) -> Result<Self> {
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() < MIN_FIELDS {
            return Err(Error::MalformedRecord {
                line: line_no,
                reason: format!(
                    "expected at least {} fields, found {}",
                    MIN_FIELDS,
                    fields.len()
                ),
            });
        }

        let pdb_path = fields[PDB_PATH_FIELD].to_string();
        let pdb_code = extract_code(&pdb_path).to_string();
        if pdb_code.is_empty() {
            return Err(Error::MalformedRecord {
                line: line_no,
                reason: format!(
                    "field {} does not name a structure file: {:?}",
                    PDB_PATH_FIELD, pdb_path
                ),
            });
        }

        Ok(Self {
            residue1: fields[0].to_string(),
            residue2: fields[1].to_string(),
            distance: required_f64(line_no, &fields, 2, "dist")?,
            angle: required_f64(line_no, &fields, 3, "angle")?,
            angle_p: required_f64(line_no, &fields, 4, "angleP")?,
            angle1: required_f64(line_no, &fields, 5, "angle1")?,
            seq1: required_i64(line_no, &fields, 6, "loc1")?,
            seq2: required_i64(line_no, &fields, 7, "loc2")?,
            code: fields[8].to_string(),
            pdb_path,
            pdb_code,
            resolution: optional_f64(line_no, &fields, RESOLUTION_FIELD, "resolution")?,
            chain1: optional_text(&fields, CHAIN1_FIELD),
            chain2: optional_text(&fields, CHAIN2_FIELD),
            energy_hartree: optional_f64(line_no, &fields, ENERGY_HARTREE_FIELD, "energy (Hartree)")?,
            energy_kcal: optional_f64(line_no, &fields, ENERGY_KCAL_FIELD, "energy (kcal/mol)")?,
        })
    }
}

/// Last `/`-separated path segment, truncated at its first `.`
///
/// `/data/run1/1ABC.pdb.gz` yields `1ABC`; a bare segment without an
/// extension passes through whole.
fn extract_code(path: &str) -> &str {
    let basename = path.rsplit('/').next().unwrap_or(path);
    basename.split('.').next().unwrap_or(basename)
}

fn required_f64(line: usize, fields: &[&str], index: usize, name: &str) -> Result<f64> {
    fields[index].parse().map_err(|_| Error::MalformedRecord {
        line,
        reason: format!("field {} ({}) is not a number: {:?}", index, name, fields[index]),
    })
}

fn required_i64(line: usize, fields: &[&str], index: usize, name: &str) -> Result<i64> {
    fields[index].parse().map_err(|_| Error::MalformedRecord {
        line,
        reason: format!("field {} ({}) is not an integer: {:?}", index, name, fields[index]),
    })
}

/// Absent, empty or `N/A` columns read as `None`; anything else must parse
fn optional_f64(line: usize, fields: &[&str], index: usize, name: &str) -> Result<Option<f64>> {
    match fields.get(index) {
        None => Ok(None),
        Some(raw) if raw.is_empty() || *raw == "N/A" => Ok(None),
        Some(raw) => raw.parse().map(Some).map_err(|_| Error::MalformedRecord {
            line,
            reason: format!("field {} ({}) is not a number: {:?}", index, name, raw),
        }),
    }
}

fn optional_text(fields: &[&str], index: usize) -> Option<String> {
    fields
        .get(index)
        .filter(|raw| !raw.is_empty())
        .map(|raw| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_LINE: &str = "1,2,3,4,5,6,7,8,9,/data/run1/ABCD.dat";

    /// A full-width line in the energy-annotated format (46 columns)
    fn wide_line() -> String {
        let mut fields = vec![String::new(); 46];
        fields[0] = "PHE".to_string();
        fields[1] = "ASP".to_string();
        fields[2] = "4.317".to_string();
        fields[3] = "78.5".to_string();
        fields[4] = "12.1".to_string();
        fields[5] = "64.2".to_string();
        fields[6] = "118".to_string();
        fields[7] = "204".to_string();
        fields[8] = "FD".to_string();
        fields[9] = "/lustre/pdb/1XYZ.pdb.gz".to_string();
        fields[10] = "1.9".to_string();
        fields[13] = "A".to_string();
        fields[14] = "B".to_string();
        fields[44] = "-0.0215".to_string();
        fields[45] = "-13.491".to_string();
        fields.join(",")
    }

    #[test]
    fn test_parse_minimal_line() {
        let record = ResultRecord::parse(2, EXAMPLE_LINE).unwrap();
        assert_eq!(record.residue1, "1");
        assert_eq!(record.residue2, "2");
        assert_eq!(record.distance, 3.0);
        assert_eq!(record.seq1, 7);
        assert_eq!(record.seq2, 8);
        assert_eq!(record.code, "9");
        assert_eq!(record.pdb_path, "/data/run1/ABCD.dat");
        assert_eq!(record.pdb_code, "ABCD");
        assert!(record.resolution.is_none());
        assert!(record.energy_kcal.is_none());
    }

    #[test]
    fn test_parse_wide_line_reads_optional_columns() {
        let record = ResultRecord::parse(1, &wide_line()).unwrap();
        assert_eq!(record.pdb_code, "1XYZ");
        assert_eq!(record.resolution, Some(1.9));
        assert_eq!(record.chain1.as_deref(), Some("A"));
        assert_eq!(record.chain2.as_deref(), Some("B"));
        assert_eq!(record.energy_hartree, Some(-0.0215));
        assert_eq!(record.energy_kcal, Some(-13.491));
    }

    #[test]
    fn test_too_few_fields_is_malformed() {
        let err = ResultRecord::parse(7, "1,2,3").unwrap_err();
        match err {
            pairdb_common::Error::MalformedRecord { line, reason } => {
                assert_eq!(line, 7);
                assert!(reason.contains("found 3"), "unexpected reason: {}", reason);
            }
            other => panic!("expected MalformedRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_non_numeric_distance_is_malformed() {
        let err = ResultRecord::parse(3, "1,2,close,4,5,6,7,8,9,/data/x/A.dat").unwrap_err();
        match err {
            pairdb_common::Error::MalformedRecord { line, reason } => {
                assert_eq!(line, 3);
                assert!(reason.contains("dist"), "unexpected reason: {}", reason);
            }
            other => panic!("expected MalformedRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_path_field_is_malformed() {
        let err = ResultRecord::parse(5, "1,2,3,4,5,6,7,8,9,/data/run1/").unwrap_err();
        assert!(matches!(
            err,
            pairdb_common::Error::MalformedRecord { line: 5, .. }
        ));
    }

    #[test]
    fn test_extract_code_variants() {
        assert_eq!(extract_code("/data/run1/ABCD.dat"), "ABCD");
        assert_eq!(extract_code("1XYZ.pdb.gz"), "1XYZ");
        assert_eq!(extract_code("plain"), "plain");
        assert_eq!(extract_code("/data/run1/"), "");
    }
}
