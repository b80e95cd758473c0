//! Grid-data document returned by the spreadsheet API.
//!
//! Only the fields the timetable pipeline reads are modelled. Every field is
//! optional or defaulted, so a sparse or partially filled sheet always
//! deserializes; missing rows, cells and colors surface as `None` and are
//! handled by the extraction steps.

use serde::{Deserialize, Serialize};

/// Top-level spreadsheet document (`?includeGridData=true`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spreadsheet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spreadsheet_id: Option<String>,
    #[serde(default)]
    pub sheets: Vec<Sheet>,
}

/// A single tab of the spreadsheet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sheet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<SheetProperties>,
    #[serde(default)]
    pub data: Vec<GridData>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridData {
    #[serde(default)]
    pub row_data: Vec<RowData>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RowData {
    #[serde(default)]
    pub values: Vec<CellData>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatted_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_format: Option<CellFormat>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellFormat {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
}

/// RGBA color as sent by the API. Channels equal to zero are omitted upstream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Color {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub red: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub green: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blue: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alpha: Option<f64>,
}

impl Color {
    pub fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self {
            red: Some(red),
            green: Some(green),
            blue: Some(blue),
            alpha: None,
        }
    }
}

impl Spreadsheet {
    pub fn from_sheets(sheets: Vec<Sheet>) -> Self {
        Self {
            spreadsheet_id: None,
            sheets,
        }
    }
}

impl Sheet {
    /// Build a single-grid sheet from rows.
    pub fn from_rows(rows: Vec<RowData>) -> Self {
        Self {
            properties: None,
            data: vec![GridData { row_data: rows }],
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.properties.get_or_insert_with(Default::default).title = Some(title.into());
        self
    }

    /// Rows of the first grid, or an empty slice when the sheet carries no grid data.
    pub fn rows(&self) -> &[RowData] {
        self.data
            .first()
            .map(|grid| grid.row_data.as_slice())
            .unwrap_or(&[])
    }

    pub fn title(&self) -> Option<&str> {
        self.properties.as_ref().and_then(|p| p.title.as_deref())
    }
}

impl RowData {
    pub fn from_cells(values: Vec<CellData>) -> Self {
        Self { values }
    }

    pub fn cell(&self, index: usize) -> Option<&CellData> {
        self.values.get(index)
    }

    /// Display text of the first column, which holds the row's venue or marker.
    pub fn leading_text(&self) -> Option<&str> {
        self.cell(0).and_then(CellData::text)
    }
}

impl CellData {
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            formatted_value: Some(text.into()),
            effective_format: None,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.effective_format = Some(CellFormat {
            background_color: Some(color),
        });
        self
    }

    /// Raw display text, possibly empty.
    pub fn text(&self) -> Option<&str> {
        self.formatted_value.as_deref()
    }

    /// Display text when present and non-empty.
    pub fn display_text(&self) -> Option<&str> {
        self.text().filter(|text| !text.is_empty())
    }

    pub fn background(&self) -> Option<&Color> {
        self.effective_format
            .as_ref()
            .and_then(|format| format.background_color.as_ref())
    }
}
