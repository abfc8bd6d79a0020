mod common;

use common::*;
use rackmark::{ErrorKind, LabelError, LocationTable, SourceError};

#[test]
fn test_csv_table_to_labels() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let dir = tempfile::tempdir()?;
    let input = dir.path().join("ubicaciones.csv");
    std::fs::write(&input, "Pasillo,Ubicaciones\nA,A011-01\nA,A012-02\nB,B010-01\nB,B011-02\nC,C012-03\n")?;

    let table = LocationTable::from_path(&input)?;
    let document = fallback_pipeline().generate_from_table(&table)?;
    assert_eq!(document.label_count, 5);

    let pdf = GeneratedPdf::from_bytes(document.bytes)?;
    assert_pdf_page_count!(pdf, 3);
    assert_eq!(pdf.texts(1), vec!["A011-01", "A012-02"]);
    assert_eq!(pdf.texts(2), vec!["B010-01", "B011-02"]);
    assert_eq!(pdf.texts(3), vec!["C012-03"]);
    Ok(())
}

#[test]
fn test_missing_column_is_an_input_shape_error() -> TestResult {
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("codes.csv");
    std::fs::write(&input, "Codigo\nA011-01\n")?;

    let err = LabelError::from(LocationTable::from_path(&input).unwrap_err());
    assert_eq!(err.kind(), ErrorKind::InputShape);
    assert!(matches!(err, LabelError::InputShape(SourceError::MissingColumn { .. })));
    assert!(err.to_string().contains("Ubicaciones"));
    Ok(())
}

#[test]
fn test_header_only_table_has_nothing_to_print() -> TestResult {
    let table = LocationTable::from_csv_reader(rackmark::template_csv()?.as_bytes())?;
    let err = fallback_pipeline().generate_from_table(&table).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::EmptyInput);
    Ok(())
}
