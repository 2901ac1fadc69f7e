//! Export service domain logic for Happyville bookings.
//!
//! Serialises the admin working set (exactly what is on screen, never
//! re-fetched) to CSV, either as a download body or as a file written to a
//! directory on this machine.

use chrono::{DateTime, NaiveDate, Utc};
use csv::{QuoteStyle, WriterBuilder};
use log::{error, info};
use shared::Booking;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::pricing_service::PricingService;

pub const CSV_HEADERS: [&str; 13] = [
    "ID", "Name", "Phone", "Email", "Activity", "Kids", "Adults", "Date", "Time", "Status", "Total",
    "Notes", "Created At",
];

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("No bookings to export")]
    NothingToExport,
    #[error("Could not determine an export directory")]
    NoExportDirectory,
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Export produced invalid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// A rendered CSV export
#[derive(Debug, Clone, PartialEq)]
pub struct CsvExport {
    pub filename: String,
    pub content: String,
    pub booking_count: usize,
}

/// Export service that handles all export-related business logic
#[derive(Clone)]
pub struct ExportService {
    venue_name: String,
    pricing: PricingService,
}

impl ExportService {
    pub fn new(venue_name: impl Into<String>, pricing: PricingService) -> Self {
        Self {
            venue_name: venue_name.into(),
            pricing,
        }
    }

    /// `<venue>_bookings_<YYYY-MM-DD>.csv`
    pub fn filename_for(&self, date: NaiveDate) -> String {
        format!(
            "{}_bookings_{}.csv",
            self.venue_name.trim().replace(' ', "_").to_lowercase(),
            date.format("%Y-%m-%d")
        )
    }

    /// Activity column: catalog name, then the stored label, then the raw key
    fn activity_label<'a>(&self, booking: &'a Booking) -> &'a str {
        if let Some(name) = self.pricing.display_name(&booking.activity) {
            return name;
        }
        if !booking.activity_name.is_empty() {
            &booking.activity_name
        } else {
            &booking.activity
        }
    }

    /// Render the bookings as CSV
    pub fn export_csv(&self, bookings: &[Booking], now: DateTime<Utc>) -> Result<CsvExport, ExportError> {
        info!("📄 EXPORT: Exporting {} bookings as CSV", bookings.len());

        if bookings.is_empty() {
            return Err(ExportError::NothingToExport);
        }

        // Header row stays bare; data rows quote every non-numeric field
        let mut header = WriterBuilder::new().from_writer(Vec::new());
        header.write_record(CSV_HEADERS)?;
        let buffer = header.into_inner().map_err(|e| e.into_error())?;

        let mut writer = WriterBuilder::new()
            .quote_style(QuoteStyle::NonNumeric)
            .from_writer(buffer);

        for booking in bookings {
            let created_at = booking
                .created_at
                .map(|ts| ts.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_default();

            let kids = booking.kids.to_string();
            let adults = booking.adults.to_string();
            let total = booking.total.to_string();

            writer.write_record([
                booking.primary_id(),
                booking.name.as_str(),
                booking.phone.as_str(),
                booking.email.as_str(),
                self.activity_label(booking),
                kids.as_str(),
                adults.as_str(),
                booking.date.as_str(),
                booking.time.as_str(),
                booking.status.as_str(),
                total.as_str(),
                booking.notes.as_str(),
                created_at.as_str(),
            ])?;
        }

        let content = String::from_utf8(writer.into_inner().map_err(|e| e.into_error())?)?;

        let export = CsvExport {
            filename: self.filename_for(now.date_naive()),
            content,
            booking_count: bookings.len(),
        };

        info!(
            "✅ EXPORT: Generated {} ({} bytes, {} bookings)",
            export.filename,
            export.content.len(),
            export.booking_count
        );
        Ok(export)
    }

    /// Write the export into `custom_path`, or the Documents folder by default.
    /// Returns the path of the written file.
    pub fn export_to_path(
        &self,
        bookings: &[Booking],
        custom_path: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<(PathBuf, CsvExport), ExportError> {
        info!("📁 EXPORT: Exporting to path - custom_path: {:?}", custom_path);

        let export = self.export_csv(bookings, now)?;

        let export_dir = match custom_path {
            Some(path) if !path.trim().is_empty() => PathBuf::from(self.sanitize_path(path)),
            _ => dirs::document_dir()
                .or_else(dirs::home_dir)
                .ok_or(ExportError::NoExportDirectory)?,
        };

        let file_path = self.write_export(&export_dir, &export)?;
        Ok((file_path, export))
    }

    fn write_export(&self, export_dir: &Path, export: &CsvExport) -> Result<PathBuf, ExportError> {
        if let Err(e) = fs::create_dir_all(export_dir) {
            error!("❌ EXPORT: Failed to create export directory {:?}: {}", export_dir, e);
            return Err(e.into());
        }

        let file_path = export_dir.join(&export.filename);
        if let Err(e) = fs::write(&file_path, &export.content) {
            error!("❌ EXPORT: Failed to write export file to {:?}: {}", file_path, e);
            return Err(e.into());
        }

        info!("✅ EXPORT: Wrote {} bookings to {}", export.booking_count, file_path.display());
        Ok(file_path)
    }

    /// Basic path sanitization to handle common user input issues
    fn sanitize_path(&self, path: &str) -> String {
        let mut cleaned = path.trim().to_string();

        // Remove surrounding quotes (single or double)
        if cleaned.len() >= 2
            && ((cleaned.starts_with('"') && cleaned.ends_with('"'))
                || (cleaned.starts_with('\'') && cleaned.ends_with('\'')))
        {
            cleaned = cleaned[1..cleaned.len() - 1].trim().to_string();
        }

        cleaned = cleaned.replace("\\ ", " ");

        while cleaned.len() > 1 && (cleaned.ends_with('/') || cleaned.ends_with('\\')) {
            cleaned.pop();
        }

        if let Some(home) = dirs::home_dir() {
            if cleaned == "~" {
                cleaned = home.to_string_lossy().to_string();
            } else if cleaned.starts_with("~/") || cleaned.starts_with("~\\") {
                cleaned = home.join(&cleaned[2..]).to_string_lossy().to_string();
            }
        }

        cleaned
    }
}
