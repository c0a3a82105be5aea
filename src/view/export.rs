use crate::models::InventoryItem;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

pub const DEFAULT_EXPORT_FILE: &str = "inventory.csv";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write spreadsheet: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Writes the items as CSV, one row per item, with a header row.
pub fn write_items<W: Write>(items: &[InventoryItem], writer: W) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_writer(writer);

    if items.is_empty() {
        writer.write_record(["id", "name", "description", "quantity", "price", "createdAt"])?;
    }

    for item in items {
        writer.serialize(item)?;
    }

    writer.flush()?;
    Ok(())
}

/// Writes the items to a spreadsheet file at `path`, replacing it if present.
pub fn export_to_file<P: AsRef<Path>>(items: &[InventoryItem], path: P) -> Result<(), ExportError> {
    let file = File::create(path.as_ref())?;
    write_items(items, file)?;

    log::debug!("Exported {} item(s) to {}", items.len(), path.as_ref().display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn widget() -> InventoryItem {
        InventoryItem {
            id: Uuid::nil(),
            name: "Widget".to_owned(),
            description: "A widget, blue".to_owned(),
            quantity: 10,
            price: 2.5,
            created_at: Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(),
        }
    }

    #[test]
    fn writes_header_and_rows() {
        let mut out = Vec::new();
        write_items(&[widget()], &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();

        assert_eq!(
            lines.next(),
            Some("id,name,description,quantity,price,createdAt")
        );
        assert_eq!(
            lines.next(),
            Some("00000000-0000-0000-0000-000000000000,Widget,\"A widget, blue\",10,2.5,2024-01-02T03:04:05Z")
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn empty_list_still_has_header() {
        let mut out = Vec::new();
        write_items(&[], &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "id,name,description,quantity,price,createdAt\n"
        );
    }

    #[test]
    fn export_to_file_writes_the_file() {
        let path = std::env::temp_dir().join(format!("inventory-export-{}.csv", Uuid::new_v4()));

        export_to_file(&[widget(), widget()], &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(text.lines().count(), 3);
    }
}
