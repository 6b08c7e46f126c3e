//! CSV loader for the launch dataset
//!
//! Reads the launch-records CSV once at startup, resolving columns by header
//! name so the file can carry extra columns in any order. Derives the payload
//! bounds and the distinct launch-site list while loading.

use std::io;
use std::path::Path;

use super::error::{DatasetError, DatasetResult};
use super::types::{LaunchRecord, Outcome};

/// Required column headers
const COL_LAUNCH_SITE: &str = "Launch Site";
const COL_PAYLOAD_MASS: &str = "Payload Mass (kg)";
const COL_CLASS: &str = "class";
const COL_BOOSTER_CATEGORY: &str = "Booster Version Category";

/// Optional column headers (present in the original dataset)
const COL_FLIGHT_NUMBER: &str = "Flight Number";
const COL_BOOSTER_VERSION: &str = "Booster Version";

/// Resolved header positions for one CSV file
struct Columns {
    launch_site: usize,
    payload_mass: usize,
    class: usize,
    booster_category: usize,
    flight_number: Option<usize>,
    booster_version: Option<usize>,
}

impl Columns {
    fn resolve(headers: &csv::StringRecord) -> DatasetResult<Self> {
        let find = |name: &'static str| -> DatasetResult<usize> {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or(DatasetError::MissingColumn(name))
        };
        let find_opt =
            |name: &str| -> Option<usize> { headers.iter().position(|h| h.trim() == name) };

        Ok(Self {
            launch_site: find(COL_LAUNCH_SITE)?,
            payload_mass: find(COL_PAYLOAD_MASS)?,
            class: find(COL_CLASS)?,
            booster_category: find(COL_BOOSTER_CATEGORY)?,
            flight_number: find_opt(COL_FLIGHT_NUMBER),
            booster_version: find_opt(COL_BOOSTER_VERSION),
        })
    }
}

/// The immutable in-memory launch table
///
/// Holds every record plus the derivations the dashboard needs at startup:
/// observed payload bounds and the sorted distinct launch-site names.
#[derive(Debug, Clone)]
pub struct LaunchDataset {
    records: Vec<LaunchRecord>,
    min_payload: f64,
    max_payload: f64,
    sites: Vec<String>,
}

impl LaunchDataset {
    /// Load the dataset from a CSV file
    ///
    /// Called exactly once at process start. Any failure here is fatal:
    /// the dashboard cannot run without its table.
    pub fn load(path: impl AsRef<Path>) -> DatasetResult<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let dataset = Self::from_reader(file)?;

        tracing::info!(
            path = %path.display(),
            records = dataset.len(),
            sites = dataset.sites.len(),
            min_payload = dataset.min_payload,
            max_payload = dataset.max_payload,
            "Launch dataset loaded"
        );

        Ok(dataset)
    }

    /// Load the dataset from any reader (used by tests with in-memory CSV)
    pub fn from_reader(reader: impl io::Read) -> DatasetResult<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let columns = Columns::resolve(&headers)?;

        let mut records = Vec::new();

        for (row_idx, result) in csv_reader.records().enumerate() {
            // Header occupies line 1
            let line = row_idx + 2;
            let record = result?;
            records.push(parse_record(&record, &columns, line, row_idx)?);
        }

        if records.is_empty() {
            return Err(DatasetError::Empty);
        }

        let min_payload = records
            .iter()
            .map(|r| r.payload_mass_kg)
            .fold(f64::INFINITY, f64::min);
        let max_payload = records
            .iter()
            .map(|r| r.payload_mass_kg)
            .fold(f64::NEG_INFINITY, f64::max);

        let mut sites: Vec<String> = records.iter().map(|r| r.launch_site.clone()).collect();
        sites.sort();
        sites.dedup();

        Ok(Self {
            records,
            min_payload,
            max_payload,
            sites,
        })
    }

    /// All records, in file order
    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    /// Total number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Smallest payload mass observed at load time
    pub fn min_payload(&self) -> f64 {
        self.min_payload
    }

    /// Largest payload mass observed at load time
    pub fn max_payload(&self) -> f64 {
        self.max_payload
    }

    /// Sorted distinct launch-site names
    pub fn sites(&self) -> &[String] {
        &self.sites
    }

    /// Whether a site name exists in the dataset
    pub fn has_site(&self, site: &str) -> bool {
        self.sites.iter().any(|s| s == site)
    }
}

fn parse_record(
    record: &csv::StringRecord,
    columns: &Columns,
    line: usize,
    row_idx: usize,
) -> DatasetResult<LaunchRecord> {
    let field = |idx: usize, column: &'static str| -> DatasetResult<&str> {
        record.get(idx).ok_or(DatasetError::InvalidField {
            line,
            column,
            value: String::new(),
        })
    };

    let launch_site = field(columns.launch_site, COL_LAUNCH_SITE)?.to_string();

    let payload_str = field(columns.payload_mass, COL_PAYLOAD_MASS)?;
    let payload_mass_kg: f64 =
        payload_str
            .parse()
            .map_err(|_| DatasetError::InvalidField {
                line,
                column: COL_PAYLOAD_MASS,
                value: payload_str.to_string(),
            })?;
    if payload_mass_kg < 0.0 {
        return Err(DatasetError::InvalidField {
            line,
            column: COL_PAYLOAD_MASS,
            value: payload_str.to_string(),
        });
    }

    let class_str = field(columns.class, COL_CLASS)?;
    let outcome = class_str
        .parse::<u8>()
        .ok()
        .and_then(Outcome::from_class)
        .ok_or_else(|| DatasetError::InvalidField {
            line,
            column: COL_CLASS,
            value: class_str.to_string(),
        })?;

    let booster_version_category = field(columns.booster_category, COL_BOOSTER_CATEGORY)?.to_string();

    // Optional columns fall back to the row ordinal / empty string
    let flight_number = match columns.flight_number {
        Some(idx) => {
            let s = field(idx, COL_FLIGHT_NUMBER)?;
            s.parse().map_err(|_| DatasetError::InvalidField {
                line,
                column: COL_FLIGHT_NUMBER,
                value: s.to_string(),
            })?
        }
        None => (row_idx + 1) as u32,
    };

    let booster_version = match columns.booster_version {
        Some(idx) => field(idx, COL_BOOSTER_VERSION)?.to_string(),
        None => String::new(),
    };

    Ok(LaunchRecord {
        flight_number,
        launch_site,
        payload_mass_kg,
        outcome,
        booster_version,
        booster_version_category,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE_CSV: &str = "\
Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
1,CCAFS LC-40,0,0,F9 v1.0 B0003,v1.0
2,CCAFS LC-40,1,525,F9 v1.0 B0005,v1.0
3,VAFB SLC-4E,1,500,F9 v1.1 B1003,v1.1
4,KSC LC-39A,1,9600,F9 FT B1021,FT
";

    #[test]
    fn test_load_sample() {
        let dataset = LaunchDataset::from_reader(SAMPLE_CSV.as_bytes()).unwrap();

        assert_eq!(dataset.len(), 4);
        assert_eq!(dataset.min_payload(), 0.0);
        assert_eq!(dataset.max_payload(), 9600.0);
        assert_eq!(
            dataset.sites(),
            &["CCAFS LC-40", "KSC LC-39A", "VAFB SLC-4E"]
        );
        assert!(dataset.has_site("VAFB SLC-4E"));
        assert!(!dataset.has_site("Boca Chica"));
    }

    #[test]
    fn test_record_fields() {
        let dataset = LaunchDataset::from_reader(SAMPLE_CSV.as_bytes()).unwrap();
        let rec = &dataset.records()[1];

        assert_eq!(rec.flight_number, 2);
        assert_eq!(rec.launch_site, "CCAFS LC-40");
        assert_eq!(rec.payload_mass_kg, 525.0);
        assert!(rec.outcome.is_success());
        assert_eq!(rec.booster_version_category, "v1.0");
    }

    #[test]
    fn test_missing_required_column() {
        let csv_data = "Flight Number,Launch Site,class\n1,CCAFS LC-40,1\n";
        let err = LaunchDataset::from_reader(csv_data.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            DatasetError::MissingColumn("Payload Mass (kg)")
        ));
    }

    #[test]
    fn test_invalid_payload_value() {
        let csv_data = "\
Launch Site,class,Payload Mass (kg),Booster Version Category
CCAFS LC-40,1,not-a-number,v1.0
";
        let err = LaunchDataset::from_reader(csv_data.as_bytes()).unwrap_err();
        match err {
            DatasetError::InvalidField { line, column, .. } => {
                assert_eq!(line, 2);
                assert_eq!(column, "Payload Mass (kg)");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_class_value() {
        let csv_data = "\
Launch Site,class,Payload Mass (kg),Booster Version Category
CCAFS LC-40,3,500,v1.0
";
        let err = LaunchDataset::from_reader(csv_data.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            DatasetError::InvalidField { column: "class", .. }
        ));
    }

    #[test]
    fn test_empty_file_rejected() {
        let csv_data = "Launch Site,class,Payload Mass (kg),Booster Version Category\n";
        let err = LaunchDataset::from_reader(csv_data.as_bytes()).unwrap_err();
        assert!(matches!(err, DatasetError::Empty));
    }

    #[test]
    fn test_optional_columns_defaulted() {
        let csv_data = "\
Launch Site,class,Payload Mass (kg),Booster Version Category
CCAFS LC-40,1,500,v1.0
VAFB SLC-4E,0,600,v1.1
";
        let dataset = LaunchDataset::from_reader(csv_data.as_bytes()).unwrap();
        assert_eq!(dataset.records()[0].flight_number, 1);
        assert_eq!(dataset.records()[1].flight_number, 2);
        assert_eq!(dataset.records()[0].booster_version, "");
    }

    #[test]
    fn test_load_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE_CSV.as_bytes()).unwrap();
        file.flush().unwrap();

        let dataset = LaunchDataset::load(file.path()).unwrap();
        assert_eq!(dataset.len(), 4);
    }

    #[test]
    fn test_load_missing_file() {
        let err = LaunchDataset::load("does/not/exist.csv").unwrap_err();
        assert!(matches!(err, DatasetError::Io(_)));
    }
}
