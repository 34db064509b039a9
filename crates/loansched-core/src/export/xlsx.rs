//! Minimal single-sheet XLSX writer.
//!
//! Emits the five parts a spreadsheet application needs to open the
//! workbook: content types, package relationships, workbook, workbook
//! relationships, and the sheet itself. Header cells are inline strings;
//! data cells are plain numeric cells, so every figure stays a number when
//! opened. No shared strings, no styles.

use std::fs::File;
use std::io::{Cursor, Seek, Write};
use std::path::Path;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::LoanSchedError;
use crate::schedule::ScheduleRow;
use crate::LoanSchedResult;

use super::{ensure_not_empty, HEADER};

/// Name of the single worksheet.
pub const SHEET_NAME: &str = "Schedule";

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/><Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/></Types>"#;

const ROOT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/></Relationships>"#;

const WORKBOOK_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/></Relationships>"#;

/// Render the schedule as XLSX workbook bytes.
pub fn xlsx_bytes(schedule: &[ScheduleRow]) -> LoanSchedResult<Vec<u8>> {
    ensure_not_empty(schedule)?;

    let cursor = write_workbook(schedule, Cursor::new(Vec::new()))?;
    Ok(cursor.into_inner())
}

/// Write the schedule as an XLSX workbook to a file path.
pub fn write_xlsx_file(schedule: &[ScheduleRow], path: &Path) -> LoanSchedResult<()> {
    ensure_not_empty(schedule)?;

    let file = File::create(path).map_err(|e| LoanSchedError::io(path, e))?;
    write_workbook(schedule, file)?;
    Ok(())
}

fn write_workbook<W: Write + Seek>(schedule: &[ScheduleRow], writer: W) -> LoanSchedResult<W> {
    let mut zip = ZipWriter::new(writer);
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

    put_part(&mut zip, "[Content_Types].xml", CONTENT_TYPES, options)?;
    put_part(&mut zip, "_rels/.rels", ROOT_RELS, options)?;
    put_part(&mut zip, "xl/workbook.xml", &workbook_xml(), options)?;
    put_part(&mut zip, "xl/_rels/workbook.xml.rels", WORKBOOK_RELS, options)?;
    put_part(&mut zip, "xl/worksheets/sheet1.xml", &sheet_xml(schedule)?, options)?;

    Ok(zip.finish()?)
}

fn put_part<W: Write + Seek>(
    zip: &mut ZipWriter<W>,
    name: &str,
    contents: &str,
    options: FileOptions,
) -> LoanSchedResult<()> {
    zip.start_file(name, options)?;
    zip.write_all(contents.as_bytes())
        .map_err(|e| LoanSchedError::Spreadsheet(e.to_string()))?;
    Ok(())
}

fn workbook_xml() -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><sheets><sheet name="{SHEET_NAME}" sheetId="1" r:id="rId1"/></sheets></workbook>"#
    )
}

fn xml_error(e: impl std::fmt::Display) -> LoanSchedError {
    LoanSchedError::Spreadsheet(e.to_string())
}

fn sheet_xml(schedule: &[ScheduleRow]) -> LoanSchedResult<String> {
    let mut writer = Writer::new(Vec::new());

    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))
        .map_err(xml_error)?;

    let mut worksheet = BytesStart::new("worksheet");
    worksheet.push_attribute((
        "xmlns",
        "http://schemas.openxmlformats.org/spreadsheetml/2006/main",
    ));
    writer.write_event(Event::Start(worksheet)).map_err(xml_error)?;
    writer
        .write_event(Event::Start(BytesStart::new("sheetData")))
        .map_err(xml_error)?;

    // Header row: inline strings
    start_row(&mut writer, 1)?;
    for (col, title) in HEADER.iter().enumerate() {
        inline_string_cell(&mut writer, col, 1, title)?;
    }
    end_row(&mut writer)?;

    // Data rows: plain numeric cells
    for row in schedule {
        let row_ref = row.period + 1;
        start_row(&mut writer, row_ref)?;
        number_cell(&mut writer, 0, row_ref, &row.period.to_string())?;
        number_cell(&mut writer, 1, row_ref, &row.payment.to_string())?;
        number_cell(&mut writer, 2, row_ref, &row.principal_portion.to_string())?;
        number_cell(&mut writer, 3, row_ref, &row.interest_portion.to_string())?;
        number_cell(&mut writer, 4, row_ref, &row.remaining_balance.to_string())?;
        end_row(&mut writer)?;
    }

    writer
        .write_event(Event::End(BytesEnd::new("sheetData")))
        .map_err(xml_error)?;
    writer
        .write_event(Event::End(BytesEnd::new("worksheet")))
        .map_err(xml_error)?;

    String::from_utf8(writer.into_inner())
        .map_err(|e| LoanSchedError::Spreadsheet(e.to_string()))
}

fn start_row(writer: &mut Writer<Vec<u8>>, row_ref: u32) -> LoanSchedResult<()> {
    let mut row = BytesStart::new("row");
    row.push_attribute(("r", row_ref.to_string().as_str()));
    writer.write_event(Event::Start(row)).map_err(xml_error)?;
    Ok(())
}

fn end_row(writer: &mut Writer<Vec<u8>>) -> LoanSchedResult<()> {
    writer
        .write_event(Event::End(BytesEnd::new("row")))
        .map_err(xml_error)?;
    Ok(())
}

fn inline_string_cell(
    writer: &mut Writer<Vec<u8>>,
    col: usize,
    row_ref: u32,
    text: &str,
) -> LoanSchedResult<()> {
    let mut cell = BytesStart::new("c");
    cell.push_attribute(("r", cell_ref(col, row_ref).as_str()));
    cell.push_attribute(("t", "inlineStr"));
    writer.write_event(Event::Start(cell)).map_err(xml_error)?;
    writer
        .write_event(Event::Start(BytesStart::new("is")))
        .map_err(xml_error)?;
    writer
        .write_event(Event::Start(BytesStart::new("t")))
        .map_err(xml_error)?;
    writer
        .write_event(Event::Text(BytesText::new(text)))
        .map_err(xml_error)?;
    writer
        .write_event(Event::End(BytesEnd::new("t")))
        .map_err(xml_error)?;
    writer
        .write_event(Event::End(BytesEnd::new("is")))
        .map_err(xml_error)?;
    writer
        .write_event(Event::End(BytesEnd::new("c")))
        .map_err(xml_error)?;
    Ok(())
}

fn number_cell(
    writer: &mut Writer<Vec<u8>>,
    col: usize,
    row_ref: u32,
    value: &str,
) -> LoanSchedResult<()> {
    let mut cell = BytesStart::new("c");
    cell.push_attribute(("r", cell_ref(col, row_ref).as_str()));
    writer.write_event(Event::Start(cell)).map_err(xml_error)?;
    writer
        .write_event(Event::Start(BytesStart::new("v")))
        .map_err(xml_error)?;
    writer
        .write_event(Event::Text(BytesText::new(value)))
        .map_err(xml_error)?;
    writer
        .write_event(Event::End(BytesEnd::new("v")))
        .map_err(xml_error)?;
    writer
        .write_event(Event::End(BytesEnd::new("c")))
        .map_err(xml_error)?;
    Ok(())
}

/// A1-style reference; the schedule only ever spans columns A..E.
fn cell_ref(col: usize, row_ref: u32) -> String {
    format!("{}{}", (b'A' + col as u8) as char, row_ref)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
