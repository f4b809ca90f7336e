use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{GeneratorError, GeneratorResult};

/// Number of comma-separated fields in one order line.
pub const FIELDS: usize = 4;

/// Which side of the market a generated order is on.
///
/// Serialized as a single character in the order file:
/// - `Buy`  -> `B`
/// - `Sell` -> `S`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    #[serde(rename = "B")]
    Buy, // Bid
    #[serde(rename = "S")]
    Sell, // Ask
}

/// A synthetic order as written to the order file.
///
/// - `id` is sequential within a single generation run, starting at 1
/// - `price` and `quantity` are always >= 1
///
/// Field order is the column order of the file: `side,id,price,quantity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub side: Side,
    pub id: u64,
    pub price: u64,
    pub quantity: u64,
}

impl OrderRecord {
    /// Decode one headerless csv record, positionally.
    pub fn from_record(record: &csv::StringRecord) -> GeneratorResult<Self> {
        if record.len() != FIELDS {
            return Err(GeneratorError::FieldCount(record.len()));
        }
        Ok(record.deserialize(None)?)
    }
}

impl FromStr for OrderRecord {
    type Err = GeneratorError;

    /// Parses one line of the order file. The line terminator is optional.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(line.as_bytes());
        let mut record = csv::StringRecord::new();
        if !rdr.read_record(&mut record)? {
            return Err(GeneratorError::FieldCount(0));
        }
        OrderRecord::from_record(&record)
    }
}
