//! Integration tests for borelog.

use std::io::Write;
use tempfile::NamedTempFile;

use borelog::{ColumnType, ColumnValues, LasError, LasParser, WarningKind, load};

/// Helper to create a temporary file with given content.
fn create_test_file(content: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content).expect("Failed to write to temp file");
    file
}

const WELL_A: &str = "~Version Information\n\
                      VERS.   2.0 : CWLS log ASCII standard - version 2.0\n\
                      WRAP.   NO  : one line per depth step\n\
                      ~Well Information\n\
                      STRT.M      1670.0 : start depth\n\
                      STOP.M      1690.0 : stop depth\n\
                      STEP.M      10.0   : step\n\
                      NULL.       -999.25 : null value\n\
                      WELL.       BAKKEN FEDERAL 12 : well name\n\
                      ~Curve Information\n\
                      DEPT.M              : Depth index\n\
                      GR  .GAPI           : gamma ray\n\
                      RHOB (Density).K/M3 : bulk density\n\
                      ~Parameter Information\n\
                      MUD .   GEL CHEM : mud type\n\
                      ~ASCII\n\
                      1670.0  55.2   2.55\n\
                      1680.0  -999.25 2.58\n\
                      1690.0  62.1   -999.25\n";

// =============================================================================
// Basic Functionality Tests
// =============================================================================

#[test]
fn test_load_records_provenance() {
    let file = create_test_file(WELL_A.as_bytes());
    let result = load(file.path()).expect("Load failed");
    let source = result.document.source().expect("no source metadata");

    assert!(source.hash.starts_with("sha256:"));
    assert_eq!(source.size_bytes, WELL_A.len() as u64);
    assert_eq!(source.version.as_deref(), Some("2.0"));
    assert_eq!(source.row_count, 3);
    assert_eq!(source.column_count, 3);
}

#[test]
fn test_sections_and_fields() {
    let file = create_test_file(WELL_A.as_bytes());
    let document = load(file.path()).unwrap().document;

    assert_eq!(
        document.well().and_then(|w| w.get_value("WELL")),
        Some("BAKKEN FEDERAL 12")
    );
    assert_eq!(
        document.parameters().and_then(|p| p.get_value("MUD")),
        Some("GEL CHEM")
    );
    let names: Vec<&str> = document.section_names().collect();
    assert_eq!(names, vec!["version", "well", "curve", "parameter"]);
}

#[test]
fn test_qualified_mnemonic_survives_to_column() {
    let file = create_test_file(WELL_A.as_bytes());
    let document = load(file.path()).unwrap().document;

    let rhob = document.table().column("RHOB (Density)").expect("no RHOB");
    assert_eq!(rhob.unit, "K/M3");
    assert_eq!(rhob.description, "bulk density");
}

#[test]
fn test_depths_equal_literal_input() {
    let file = create_test_file(WELL_A.as_bytes());
    let document = load(file.path()).unwrap().document;

    assert_eq!(document.table().depths(), vec![1670.0, 1680.0, 1690.0]);
}

// =============================================================================
// Null Substitution
// =============================================================================

#[test]
fn test_null_sentinel_substitution_positions() {
    let file = create_test_file(WELL_A.as_bytes());
    let document = load(file.path()).unwrap().document;

    let gr = document.table().column("GR").unwrap();
    match &gr.values {
        ColumnValues::Float(v) => {
            assert_eq!(v[0], 55.2);
            assert!(v[1].is_nan());
            assert_eq!(v[2], 62.1);
        }
        other => panic!("expected float storage, got {:?}", other.column_type()),
    }

    let rhob = document.table().column("RHOB (Density)").unwrap();
    assert_eq!(rhob.values.missing_count(), 1);
}

// =============================================================================
// Depth Validation
// =============================================================================

#[test]
fn test_descending_depths_sorted_with_warning() {
    let text = "~V\nVERS. 2.0 : v\n\
                ~W\nNULL. -999.25 : n\n\
                ~C\nDEPT.M : depth\nGR .GAPI : gamma\n\
                ~A\n\
                120.0 3.0\n\
                110.0 2.0\n\
                100.0 1.0\n";
    let result = LasParser::new().parse_str(text).unwrap();

    assert!(
        result
            .warnings
            .iter()
            .any(|w| w.kind == WarningKind::NonSortedDepth)
    );
    assert_eq!(result.document.table().depths(), vec![100.0, 110.0, 120.0]);
    assert_eq!(
        result.document.table().column("GR").unwrap().values,
        ColumnValues::Float(vec![1.0, 2.0, 3.0])
    );
}

#[test]
fn test_missing_depth_aborts_load() {
    let text = "~V\nVERS. 2.0 : v\n\
                ~W\nNULL. -999.25 : n\n\
                ~C\nDEPT.M : depth\nGR .GAPI : gamma\n\
                ~A\n\
                100.0 1.0\n\
                -999.25 2.0\n";
    let result = LasParser::new().parse_str(text);
    assert!(matches!(result, Err(LasError::InvalidDepth(_))));
}

// =============================================================================
// Type Inference
// =============================================================================

#[test]
fn test_mixed_dtype_columns() {
    let text = "~V\nVERS. 2.0 : v\n\
                ~W\nNULL. -999.25 : n\n\
                ~C\nDEPT.M : depth\nZONE. : zone code\nLITH. : lithology\n\
                ~A\n\
                100.0 4 SAND\n\
                110.0 5 SHALE\n";
    let document = LasParser::new().parse_str(text).unwrap().document;

    let table = document.table();
    assert_eq!(table.column("DEPT").unwrap().dtype(), ColumnType::Float);
    assert_eq!(table.column("ZONE").unwrap().dtype(), ColumnType::Integer);
    assert_eq!(table.column("LITH").unwrap().dtype(), ColumnType::Text);
}

// =============================================================================
// Grammar Versions
// =============================================================================

#[test]
fn test_v3_grammar_selected_by_vers() {
    let text = "~Version\n\
                VERS. 3.0 : LAS 3.0\n\
                ~Well\n\
                NULL. -999.25 : null\n\
                ~Curve\n\
                DEPT.M : depth\n\
                GR{F}.GAPI : gamma\n\
                ~ASCII\n\
                100.0 1.0\n";
    // Braces are not valid in a 3.0 mnemonic.
    let result = LasParser::new().parse_str(text);
    assert!(matches!(result, Err(LasError::HeaderSyntax { .. })));

    let relaxed = text.replace("VERS. 3.0 : LAS 3.0", "VERS. 2.0 : LAS 2.0");
    assert!(LasParser::new().parse_str(&relaxed).is_ok());
}

#[test]
fn test_latin1_bytes_do_not_abort() {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(b"~V\nVERS. 2.0 : v\n~W\nNULL. -999.25 : n\n");
    bytes.extend_from_slice(b"TEMP.DEG\xb0C 24.0 : temperature\n");
    bytes.extend_from_slice(b"~C\nDEPT.M : depth\n~A\n100.0\n110.0\n");
    let file = create_test_file(&bytes);

    let document = load(file.path()).unwrap().document;
    let temp = document.well().and_then(|w| w.get("TEMP")).unwrap();
    // The degree sign is dropped before grammar matching.
    assert_eq!(temp.unit, "DEGC");
}

// =============================================================================
// Trim and Resample
// =============================================================================

#[test]
fn test_trim_updates_well_extent() {
    let file = create_test_file(WELL_A.as_bytes());
    let mut document = load(file.path()).unwrap().document;

    document.trim(Some(1675.0), None);

    assert_eq!(document.table().depths(), vec![1680.0, 1690.0]);
    assert_eq!(document.well().unwrap().get_value("STRT"), Some("1680"));
    assert_eq!(document.well().unwrap().get_value("STOP"), Some("1690"));
}

#[test]
fn test_document_resample_example_values() {
    let text = "~V\nVERS. 2.0 : v\n\
                ~W\nNULL. -999.25 : n\n\
                ~C\nDEPT.M : depth\nVAL. : values\n\
                ~A\n\
                100.0 1.0\n\
                110.0 2.0\n\
                120.0 3.0\n";
    let mut document = LasParser::new().parse_str(text).unwrap().document;

    document.resample(&[105.0, 115.0]).unwrap();

    let values = match &document.table().column("VAL").unwrap().values {
        ColumnValues::Float(v) => v.clone(),
        other => panic!("expected float storage, got {:?}", other.column_type()),
    };
    assert!((values[0] - 1.5).abs() < 1e-9);
    assert!((values[1] - 2.5).abs() < 1e-9);
}

#[test]
fn test_target_grid_below_source_is_all_missing() {
    let file = create_test_file(WELL_A.as_bytes());
    let mut document = load(file.path()).unwrap().document;

    document.resample(&[10.0, 20.0, 30.0]).unwrap();

    let table = document.table();
    assert_eq!(table.depths(), vec![10.0, 20.0, 30.0]);
    for column in &table.columns()[1..] {
        assert_eq!(column.values.missing_count(), 3, "column {}", column.name);
    }
}

#[test]
fn test_curve_resample_does_not_touch_document() {
    let file = create_test_file(WELL_A.as_bytes());
    let document = load(file.path()).unwrap().document;

    let mut gr = document.curve("GR").expect("no GR curve");
    gr.resample(&[1672.0, 1688.0]).unwrap();

    assert_eq!(gr.depths(), &[1672.0, 1688.0]);
    assert_eq!(document.table().len(), 3);
    assert_eq!(document.table().depths(), vec![1670.0, 1680.0, 1690.0]);
}

#[test]
fn test_curve_coverage_accounts_for_nulls() {
    let file = create_test_file(WELL_A.as_bytes());
    let document = load(file.path()).unwrap().document;

    let gr = document.curve("GR").unwrap();
    let coverage = gr.coverage();

    assert_eq!(coverage.total, 20.0);
    // The null sample at 1680 owns half of each neighbouring interval.
    assert_eq!(coverage.missing, 10.0);
    assert_eq!(coverage.valid, 10.0);
}
