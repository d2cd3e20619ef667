//! Scan command - batch-process a directory of PDF statements into a CSV.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info, warn};

use stmtscan_core::models::ScanConfig;
use stmtscan_core::pdf::first_page_text;
use stmtscan_core::statement::parse_statement_text;
use stmtscan_core::{finalize_records, StatementRecord, CSV_HEADER};

pub fn run(config: &ScanConfig) -> anyhow::Result<()> {
    let start = Instant::now();

    info!(
        "Scanning directory: {} for PDF files",
        config.directory.display()
    );

    let files = list_pdf_files(&config.directory)?;
    if files.is_empty() {
        warn!(
            "No PDF files found in the directory: {}",
            config.directory.display()
        );
    }

    let records = collect_records(&files);
    let processed = records.len();

    let ordered = finalize_records(records);
    let written = ordered.len();

    write_csv(&config.output, &ordered)?;

    println!(
        "{} Processed {} of {} PDF files in {:?}",
        style("✓").green(),
        processed,
        files.len(),
        start.elapsed()
    );
    println!(
        "   {} rows written to {}",
        style(written).green(),
        config.output.display()
    );

    Ok(())
}

/// List directory entries whose name ends with the literal suffix ".pdf".
///
/// Entries come back in the order the platform returns them; the final CSV
/// ordering is imposed later, so no extra sort happens here.
fn list_pdf_files(directory: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in fs::read_dir(directory)? {
        let entry = entry?;
        let name = entry.file_name();
        if name.to_string_lossy().ends_with(".pdf") {
            files.push(entry.path());
        }
    }

    Ok(files)
}

/// Process files one at a time, extracting a record per readable PDF.
///
/// A file that yields no text (missing, corrupt, encrypted, empty) is skipped
/// without producing a record; failures never abort the batch.
fn collect_records(files: &[PathBuf]) -> Vec<StatementRecord> {
    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("=>-"),
    );

    let mut records = Vec::with_capacity(files.len());

    for path in files {
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        debug!("Processing file: {}", filename);

        let text = first_page_text(path);
        if !text.is_empty() {
            let record = parse_statement_text(&text, &filename);
            debug!(
                "Adding to rows: {}, {}, {}, {}",
                record.filename, record.date, record.value, record.account_number
            );
            records.push(record);
        }

        pb.inc(1);
    }

    pb.finish_and_clear();
    records
}

/// Overwrite `path` with the header row and the given records, in order.
fn write_csv(path: &Path, records: &[StatementRecord]) -> anyhow::Result<()> {
    let mut wtr = csv::WriterBuilder::new().has_headers(false).from_path(path)?;

    // Header goes out explicitly so an empty run still produces it
    wtr.write_record(CSV_HEADER)?;
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;

    debug!("Wrote {} rows to {}", records.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Document, Object, Stream};

    /// Build a one-page PDF whose page content is a single text line.
    fn write_pdf(path: &Path, line: &str) {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
            "Encoding" => "WinAnsiEncoding",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 12.into()]),
                Operation::new("Td", vec![72.into(), 720.into()]),
                Operation::new("Tj", vec![Object::string_literal(line)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().unwrap(),
        ));

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => vec![page_id.into()],
                "Count" => 1,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        doc.save(path).unwrap();
    }

    #[test]
    fn test_write_csv_empty_is_header_only() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("output.csv");

        write_csv(&out, &[]).unwrap();
        let content = fs::read_to_string(&out).unwrap();
        assert_eq!(content, "Filename,date,value,account_number\n");
    }

    #[test]
    fn test_write_csv_rows_in_given_order() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("output.csv");

        let records = vec![
            StatementRecord {
                filename: "a.pdf".to_string(),
                date: "01/01/2024".to_string(),
                value: "1,234.56".to_string(),
                account_number: "111".to_string(),
            },
            StatementRecord {
                filename: "b.pdf".to_string(),
                date: "02/01/2024".to_string(),
                value: String::new(),
                account_number: String::new(),
            },
        ];

        write_csv(&out, &records).unwrap();
        let content = fs::read_to_string(&out).unwrap();
        assert_eq!(
            content,
            "Filename,date,value,account_number\n\
             a.pdf,01/01/2024,\"1,234.56\",111\n\
             b.pdf,02/01/2024,,\n"
        );
    }

    #[test]
    fn test_list_pdf_files_is_case_sensitive() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("one.pdf"), b"").unwrap();
        fs::write(dir.path().join("two.PDF"), b"").unwrap();
        fs::write(dir.path().join("notes.txt"), b"").unwrap();

        let files = list_pdf_files(dir.path()).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("one.pdf"));
    }

    #[test]
    fn test_run_empty_directory_writes_header_only_csv() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("output.csv");
        let config = ScanConfig {
            directory: dir.path().to_path_buf(),
            output: out.clone(),
        };

        run(&config).unwrap();
        let content = fs::read_to_string(&out).unwrap();
        assert_eq!(content, "Filename,date,value,account_number\n");
    }

    #[test]
    fn test_run_one_pdf_one_other_file() {
        let dir = tempfile::tempdir().unwrap();
        write_pdf(
            &dir.path().join("statement.pdf"),
            "STATEMENT PERIOD FROM January 1, 2024 TO February 5, 2024",
        );
        fs::write(dir.path().join("notes.txt"), b"not a statement").unwrap();

        let out = dir.path().join("output.csv");
        let config = ScanConfig {
            directory: dir.path().to_path_buf(),
            output: out.clone(),
        };

        run(&config).unwrap();
        let content = fs::read_to_string(&out).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Filename,date,value,account_number");
        assert_eq!(lines[1], "statement.pdf,02/05/2024,,");
    }

    #[test]
    fn test_rerun_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        write_pdf(
            &dir.path().join("statement.pdf"),
            "STATEMENT PERIOD FROM January 1, 2024 TO February 5, 2024",
        );

        let out = dir.path().join("output.csv");
        let config = ScanConfig {
            directory: dir.path().to_path_buf(),
            output: out.clone(),
        };

        run(&config).unwrap();
        let first = fs::read(&out).unwrap();
        run(&config).unwrap();
        let second = fs::read(&out).unwrap();
        assert_eq!(first, second);
    }
}
