//! Row store backed by a Google Sheets spreadsheet.
//!
//! Uses the v4 `values` endpoints with a bearer token. Obtaining the token
//! (service account exchange, refresh) happens outside this crate.

use reqwest::blocking::Client;
use reqwest::Url;
use serde::Deserialize;

use super::{check_cell, trim_trailing_blanks, RowStore};
use crate::error::{RecordError, Result};

pub const DEFAULT_API_BASE: &str = "https://sheets.googleapis.com";

#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

pub struct SheetsStore {
    client: Client,
    base: Url,
    spreadsheet_id: String,
    sheet: String,
    token: String,
}

impl SheetsStore {
    pub fn new(
        api_base: &str,
        spreadsheet_id: impl Into<String>,
        sheet: impl Into<String>,
        token: impl Into<String>,
    ) -> Result<Self> {
        let base = Url::parse(api_base)
            .map_err(|e| RecordError::Store(format!("invalid api base '{api_base}': {e}")))?;
        let client = Client::builder()
            .build()
            .map_err(|e| RecordError::Store(e.to_string()))?;
        Ok(Self {
            client,
            base,
            spreadsheet_id: spreadsheet_id.into(),
            sheet: sheet.into(),
            token: token.into(),
        })
    }

    fn values_url(&self, range: &str) -> Result<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| RecordError::Store(format!("invalid api base: {}", self.base)))?
            .pop_if_empty()
            .extend(["v4", "spreadsheets", self.spreadsheet_id.as_str(), "values", range]);
        Ok(url)
    }

    /// A1 notation prefix for the configured sheet, quoted when needed.
    fn sheet_ref(&self) -> String {
        if self
            .sheet
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            self.sheet.clone()
        } else {
            format!("'{}'", self.sheet.replace('\'', "''"))
        }
    }
}

/// Spreadsheet column letters for a 1-based index: 1 → A, 27 → AA.
pub fn column_letter(col: usize) -> String {
    let mut n = col;
    let mut letters = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(char::from(b'A' + rem as u8));
        n = (n - 1) / 26;
    }
    letters.iter().rev().collect()
}

fn http_err(e: reqwest::Error) -> RecordError {
    RecordError::Store(format!("sheets request failed: {e}"))
}

impl RowStore for SheetsStore {
    fn read_column(&self, col: usize) -> Result<Vec<String>> {
        check_cell(1, col)?;
        let letter = column_letter(col);
        let range = format!("{}!{letter}:{letter}", self.sheet_ref());
        let mut url = self.values_url(&range)?;
        url.query_pairs_mut().append_pair("majorDimension", "COLUMNS");

        let body: ValueRange = self
            .client
            .get(url)
            .bearer_auth(&self.token)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(http_err)?
            .json()
            .map_err(http_err)?;

        let mut cells = body.values.into_iter().next().unwrap_or_default();
        trim_trailing_blanks(&mut cells);
        Ok(cells)
    }

    fn write_cell(&self, row: usize, col: usize, value: &str) -> Result<()> {
        check_cell(row, col)?;
        let range = format!("{}!{}{row}", self.sheet_ref(), column_letter(col));
        let mut url = self.values_url(&range)?;
        url.query_pairs_mut().append_pair("valueInputOption", "RAW");

        let body = serde_json::json!({
            "range": range,
            "majorDimension": "ROWS",
            "values": [[value]],
        });
        self.client
            .put(url)
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(http_err)?;
        tracing::debug!(%range, "wrote sheet cell");
        Ok(())
    }
}
