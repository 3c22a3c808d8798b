/// Product catalog loading and normalization.
///
/// Loading happens in two steps so each can be tested on its own:
/// - `read_raw_rows` turns CSV text into `RawRow`s (trimmed cells, `None` for blanks)
/// - `normalize` is a pure transformation from raw rows to a validated `Catalog`,
///   filling defaults for absent values
///
/// The resulting `Catalog` is immutable and safe to share behind an `Arc`.
use std::collections::BTreeSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::CommonError;

pub const PRODUCT_NAME: &str = "product_name";
pub const COMPANY: &str = "company";
pub const PRICE: &str = "price";
pub const RATING: &str = "rating";
pub const REVIEWS: &str = "reviews";
pub const MANUFACTURED_IN: &str = "manufactured_in";

pub const UNKNOWN_ORIGIN: &str = "Unknown";
pub const MAX_RATING: f64 = 5.0;

/// Cell values read as missing, in addition to blank cells.
const MISSING_MARKERS: &[&str] = &[
    "NA", "N/A", "n/a", "NaN", "nan", "NULL", "null", "None", "#N/A", "<NA>",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub product_name: String,
    pub company: String,
    pub price: f64,
    pub rating: f64,
    pub reviews: u64,
    pub manufactured_in: String,
}

/// One data row as read from the file, before validation. Blank cells are `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    /// 1-based line number in the source file.
    pub line: usize,
    pub product_name: Option<String>,
    pub company: Option<String>,
    pub price: Option<String>,
    pub rating: Option<String>,
    pub reviews: Option<String>,
    pub manufactured_in: Option<String>,
}

/// Counts of defaults applied while normalizing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadStats {
    pub rows: usize,
    pub filled_rating: usize,
    pub filled_price: usize,
    pub filled_reviews: usize,
    pub filled_origin: usize,
    pub median_price: f64,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<ProductRecord>,
    stats: LoadStats,
}

impl Catalog {
    pub fn load(path: &Path) -> Result<Self, CommonError> {
        let file = File::open(path).map_err(|source| CommonError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let catalog = Self::from_reader(file)?;

        let stats = catalog.stats();
        info!(
            path = %path.display(),
            rows = stats.rows,
            filled_rating = stats.filled_rating,
            filled_price = stats.filled_price,
            filled_reviews = stats.filled_reviews,
            filled_origin = stats.filled_origin,
            median_price = stats.median_price,
            "dataset loaded"
        );
        Ok(catalog)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CommonError> {
        normalize(read_raw_rows(reader)?)
    }

    pub fn records(&self) -> &[ProductRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn stats(&self) -> &LoadStats {
        &self.stats
    }

    /// Distinct company names, sorted.
    pub fn companies(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|r| r.company.clone())
            .filter(|c| !c.is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

struct ColumnIndex {
    product_name: usize,
    company: usize,
    price: usize,
    rating: usize,
    reviews: usize,
    manufactured_in: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Result<Self, CommonError> {
        let normalized: Vec<String> = headers
            .iter()
            .map(|h| h.trim_start_matches('\u{feff}').trim().to_lowercase())
            .collect();
        let find = |name: &'static str| {
            normalized
                .iter()
                .position(|h| h == name)
                .ok_or(CommonError::MissingColumn(name))
        };

        Ok(Self {
            product_name: find(PRODUCT_NAME)?,
            company: find(COMPANY)?,
            price: find(PRICE)?,
            rating: find(RATING)?,
            reviews: find(REVIEWS)?,
            manufactured_in: find(MANUFACTURED_IN)?,
        })
    }
}

pub fn read_raw_rows<R: Read>(reader: R) -> Result<Vec<RawRow>, CommonError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let columns = ColumnIndex::from_headers(&headers)?;

    let mut rows = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let record = result?;
        // header is line 1
        let line = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(idx + 2);

        // short rows pad to missing; long rows mean an unquoted delimiter
        if record.len() > headers.len() {
            return Err(CommonError::MalformedRow {
                line,
                expected: headers.len(),
                found: record.len(),
            });
        }

        rows.push(RawRow {
            line,
            product_name: cell(&record, columns.product_name),
            company: cell(&record, columns.company),
            price: cell(&record, columns.price),
            rating: cell(&record, columns.rating),
            reviews: cell(&record, columns.reviews),
            manufactured_in: cell(&record, columns.manufactured_in),
        });
    }
    Ok(rows)
}

fn cell(record: &StringRecord, idx: usize) -> Option<String> {
    let value = record.get(idx)?.trim();
    if value.is_empty() || MISSING_MARKERS.contains(&value) {
        None
    } else {
        Some(value.to_string())
    }
}

/// Validated row with numeric fields parsed but defaults not yet applied.
struct ParsedRow {
    product_name: String,
    company: String,
    price: Option<f64>,
    rating: Option<f64>,
    reviews: Option<u64>,
    manufactured_in: Option<String>,
}

impl ParsedRow {
    fn parse(raw: RawRow) -> Result<Self, CommonError> {
        let line = raw.line;

        let price = raw
            .price
            .as_deref()
            .map(|s| parse_number(line, PRICE, s))
            .transpose()?;
        if let Some(p) = price {
            if p < 0.0 {
                return Err(invalid(line, PRICE, format!("price must not be negative, got {p}")));
            }
        }

        let rating = raw
            .rating
            .as_deref()
            .map(|s| parse_number(line, RATING, s))
            .transpose()?;
        if let Some(r) = rating {
            if !(0.0..=MAX_RATING).contains(&r) {
                return Err(invalid(
                    line,
                    RATING,
                    format!("rating must be between 0 and {MAX_RATING}, got {r}"),
                ));
            }
        }

        let reviews = raw
            .reviews
            .as_deref()
            .map(|s| parse_count(line, REVIEWS, s))
            .transpose()?;

        let manufactured_in = raw
            .manufactured_in
            .map(|s| title_case(s.trim()))
            .filter(|s| !s.is_empty());

        Ok(Self {
            product_name: raw.product_name.unwrap_or_default(),
            company: raw.company.unwrap_or_default(),
            price,
            rating,
            reviews,
            manufactured_in,
        })
    }
}

/// Validate raw rows and fill absent values: rating 0, price the median of the
/// present prices, reviews 0, origin "Unknown".
pub fn normalize(rows: Vec<RawRow>) -> Result<Catalog, CommonError> {
    let parsed = rows
        .into_iter()
        .map(ParsedRow::parse)
        .collect::<Result<Vec<_>, _>>()?;

    let prices: Vec<f64> = parsed.iter().filter_map(|r| r.price).collect();
    let median_price = median(&prices).unwrap_or_else(|| {
        if !parsed.is_empty() {
            warn!("dataset has no price values, missing prices default to 0");
        }
        0.0
    });

    let mut stats = LoadStats {
        rows: parsed.len(),
        median_price,
        ..LoadStats::default()
    };

    let mut records = Vec::with_capacity(parsed.len());
    for row in parsed {
        let price = match row.price {
            Some(p) => p,
            None => {
                stats.filled_price += 1;
                median_price
            }
        };
        let rating = match row.rating {
            Some(r) => r,
            None => {
                stats.filled_rating += 1;
                0.0
            }
        };
        let reviews = match row.reviews {
            Some(n) => n,
            None => {
                stats.filled_reviews += 1;
                0
            }
        };
        let manufactured_in = match row.manufactured_in {
            Some(origin) => origin,
            None => {
                stats.filled_origin += 1;
                UNKNOWN_ORIGIN.to_string()
            }
        };

        records.push(ProductRecord {
            product_name: row.product_name,
            company: row.company,
            price,
            rating,
            reviews,
            manufactured_in,
        });
    }

    Ok(Catalog { records, stats })
}

fn parse_number(line: usize, column: &'static str, s: &str) -> Result<f64, CommonError> {
    let value = s
        .parse::<f64>()
        .map_err(|_| invalid(line, column, format!("expected a number, got '{s}'")))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(invalid(line, column, format!("expected a finite number, got '{s}'")))
    }
}

/// Counts may be written as floats ("120.0") by spreadsheet exports.
fn parse_count(line: usize, column: &'static str, s: &str) -> Result<u64, CommonError> {
    if let Ok(n) = s.parse::<u64>() {
        return Ok(n);
    }
    let value = parse_number(line, column, s)?;
    if value < 0.0 || value.fract() != 0.0 || value > u64::MAX as f64 {
        return Err(invalid(
            line,
            column,
            format!("expected a non-negative whole number, got '{s}'"),
        ));
    }
    Ok(value as u64)
}

fn invalid(line: usize, column: &'static str, message: String) -> CommonError {
    CommonError::InvalidValue {
        line,
        column,
        message,
    }
}

fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

/// Uppercase the first letter of every run of letters and lowercase the rest.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if in_word {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(ch);
            in_word = false;
        }
    }
    out
}
