use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use tracing::{info, warn};

use crate::{
    errors::{GeneratorError, GeneratorResult},
    orders::OrderRecord,
};

/// Line terminator written after every order, the platform's own.
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

fn terminator() -> csv::Terminator {
    if cfg!(windows) {
        csv::Terminator::CRLF
    } else {
        csv::Terminator::Any(b'\n')
    }
}

fn io_err(path: &Path) -> impl FnOnce(std::io::Error) -> GeneratorError {
    move |source| GeneratorError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// csv reports file failures as its own error kind; keep those as `Io` with the path.
fn csv_err(path: &Path) -> impl FnOnce(csv::Error) -> GeneratorError {
    move |err| {
        if let csv::ErrorKind::Io(e) = err.kind() {
            return GeneratorError::Io {
                path: path.to_path_buf(),
                source: std::io::Error::new(e.kind(), e.to_string()),
            };
        }
        GeneratorError::ParseOrder(err)
    }
}

/// Write `orders` to `out` as headerless csv, one line per order.
///
/// Returns the number of lines written; `out` is flushed before returning.
pub fn write_records<W, I>(out: W, orders: I) -> Result<u64, csv::Error>
where
    W: Write,
    I: IntoIterator<Item = OrderRecord>,
{
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(terminator())
        .from_writer(out);

    let mut written = 0u64;
    for order in orders {
        wtr.serialize(order)?;
        written += 1;
    }
    wtr.flush()?;
    Ok(written)
}

/// Create (or truncate) the file at `path` and write one line per order, in order.
///
/// Returns the number of lines written. The file is flushed before returning and
/// closed when the writer drops, on success and on error alike. Nothing is cleaned
/// up if a write fails half way.
pub fn write_orders<I>(path: impl AsRef<Path>, orders: I) -> GeneratorResult<u64>
where
    I: IntoIterator<Item = OrderRecord>,
{
    let path = path.as_ref();
    let file = File::create(path).map_err(io_err(path))?;
    let written = write_records(BufWriter::new(file), orders).map_err(csv_err(path))?;

    if written == 0 {
        warn!(path = %path.display(), "no orders generated, wrote empty file");
    }
    info!(path = %path.display(), written, "orders written");
    Ok(written)
}

/// Read back an order file, one [`OrderRecord`] per line.
pub fn read_orders(path: impl AsRef<Path>) -> GeneratorResult<Vec<OrderRecord>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(io_err(path))?;
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        // field counts are checked per record
        .flexible(true)
        .from_reader(file);

    let mut orders = Vec::new();
    for record in rdr.records() {
        let record = record.map_err(csv_err(path))?;
        orders.push(OrderRecord::from_record(&record)?);
    }
    Ok(orders)
}
