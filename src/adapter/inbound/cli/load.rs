//! Loads purchase files into a ledger.
//!
//! Files are read in the order given. The first rejected row stops loading:
//! rows before it stay in the ledger, later rows and later files are not
//! read.

use std::path::{Path, PathBuf};

use miette::Diagnostic;
use tracing::debug;

use super::diagnostic::{HeaderDiagnostic, RowDiagnostic};
use super::output;
use crate::adapter::inbound::csv::CsvDocument;
use crate::application::ledger::LedgerService;
use crate::error::{Error, Result};

/// Rows accepted from one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedFile {
    pub path: PathBuf,
    pub rows: usize,
}

/// Load every file into `ledger`.
pub fn load_all(ledger: &LedgerService, files: &[PathBuf]) -> Result<Vec<LoadedFile>> {
    files
        .iter()
        .map(|path| load_file(ledger, path))
        .collect()
}

fn load_file(ledger: &LedgerService, path: &Path) -> Result<LoadedFile> {
    let name = path.display().to_string();
    let content = std::fs::read_to_string(path)?;

    let document = match CsvDocument::parse(&content) {
        Ok(document) => document,
        Err(err) => {
            render(HeaderDiagnostic {
                file: name,
                message: err.to_string(),
            });
            return Err(err);
        }
    };

    match ledger.bulk_insert(document.rows().iter().cloned()) {
        Ok(rows) => {
            debug!(file = %name, rows, "Loaded purchase file");
            Ok(LoadedFile {
                path: path.to_path_buf(),
                rows,
            })
        }
        Err(Error::InvalidRow { row, source }) => {
            if let Some(span) = document.span_of_row(row) {
                render(RowDiagnostic::new(&name, content, row, span, &source));
            }
            Err(Error::InvalidRow { row, source })
        }
        Err(err) => Err(err),
    }
}

fn render<D>(diagnostic: D)
where
    D: Diagnostic + Send + Sync + 'static,
{
    if output::is_json() {
        return;
    }
    eprintln!("{:?}", miette::Report::new(diagnostic));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::outbound::memory::MemoryPurchaseStore;
    use crate::domain::ValidationError;
    use std::io::Write;
    use std::sync::Arc;

    fn ledger() -> LedgerService {
        LedgerService::new(Arc::new(MemoryPurchaseStore::new()))
    }

    fn file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_files_in_order() {
        let a = file("customer_name,country,purchase_date,amount\nAnn,UK,2024-01-02,1\n");
        let b = file(
            "customer_name,country,purchase_date,amount\nBob,US,2024-01-03,2\nCid,US,2024-01-04,3\n",
        );
        let ledger = ledger();

        let loaded =
            load_all(&ledger, &[a.path().to_path_buf(), b.path().to_path_buf()]).unwrap();

        assert_eq!(loaded.iter().map(|f| f.rows).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(ledger.len().unwrap(), 3);
    }

    #[test]
    fn bad_row_keeps_earlier_rows_and_skips_later_files() {
        let a = file(
            "customer_name,country,purchase_date,amount\nAnn,UK,2024-01-02,1\nBob,UK,02/01/2024,1\n",
        );
        let b = file("customer_name,country,purchase_date,amount\nCid,US,2024-01-04,3\n");
        let ledger = ledger();

        let err = load_all(&ledger, &[a.path().to_path_buf(), b.path().to_path_buf()])
            .unwrap_err();

        assert!(matches!(
            err,
            Error::InvalidRow {
                row: 2,
                source: ValidationError::InvalidDate { .. }
            }
        ));
        assert_eq!(ledger.len().unwrap(), 1);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_all(&ledger(), &[PathBuf::from("/nonexistent/purchases.csv")]).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
