//! Sale use cases: selling, listing, dashboard, and CSV export.

use std::path::Path;

use log::info;
use tokio::task;

use super::Inventory;
use crate::{
    db::Store,
    error::{DepotError, Result},
    models::{DashboardReport, Sale},
    params::{ExportSales, SellProduct},
};

/// Fixed CSV column order, matching the sale attributes.
const SALES_CSV_HEADER: [&str; 10] = [
    "id",
    "product_id",
    "sku",
    "quantity",
    "unit_price_ht",
    "vat_rate",
    "total_ht",
    "total_vat",
    "total_ttc",
    "sold_at",
];

fn csv_error(path: &Path, e: csv::Error) -> DepotError {
    DepotError::FileSystem {
        path: path.to_path_buf(),
        source: std::io::Error::new(std::io::ErrorKind::Other, e),
    }
}

fn write_sales_csv(path: &Path, sales: &[Sale]) -> Result<u64> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| csv_error(path, e))?;

    writer
        .write_record(SALES_CSV_HEADER)
        .map_err(|e| csv_error(path, e))?;
    for sale in sales {
        writer
            .write_record([
                sale.id.to_string(),
                sale.product_id.to_string(),
                sale.sku.clone(),
                sale.quantity.to_string(),
                format!("{:.2}", sale.unit_price_ht),
                // The rate is data, not money: keep the exact value
                sale.vat_rate.to_string(),
                format!("{:.2}", sale.total_ht),
                format!("{:.2}", sale.total_vat),
                format!("{:.2}", sale.total_ttc),
                sale.sold_at.to_string(),
            ])
            .map_err(|e| csv_error(path, e))?;
    }

    writer.flush().map_err(|e| DepotError::FileSystem {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(sales.len() as u64)
}

impl Inventory {
    /// Sells a quantity of a product: records the sale and decrements the
    /// stock atomically.
    ///
    /// The whole operation runs in one store transaction; see
    /// [`crate::db::Store::record_sale`] for the step-by-step contract.
    pub async fn sell_product(&self, params: &SellProduct) -> Result<Sale> {
        let db_path = self.db_path.clone();
        let SellProduct { product_id, quantity } = *params;

        let sale = task::spawn_blocking(move || {
            let mut store = Store::open(&db_path)?;
            store.record_sale(product_id, quantity)
        })
        .await
        .map_err(|e| DepotError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        info!(
            "Sold {} x product {} (sale {}, total TTC {:.2})",
            sale.quantity, sale.product_id, sale.id, sale.total_ttc
        );
        Ok(sale)
    }

    /// Lists all recorded sales in insertion order.
    pub async fn list_sales(&self) -> Result<Vec<Sale>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let store = Store::open(&db_path)?;
            store.list_sales()
        })
        .await
        .map_err(|e| DepotError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Computes the aggregate dashboard report. Never mutates state.
    pub async fn dashboard(&self) -> Result<DashboardReport> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let store = Store::open(&db_path)?;
            store.dashboard()
        })
        .await
        .map_err(|e| DepotError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Serializes all sales to a CSV file at the given path and returns the
    /// number of rows written (excluding the header).
    pub async fn export_sales_csv(&self, params: &ExportSales) -> Result<u64> {
        let db_path = self.db_path.clone();
        let path = params.path.clone();

        let count = task::spawn_blocking(move || {
            let store = Store::open(&db_path)?;
            let sales = store.list_sales()?;
            write_sales_csv(&path, &sales)
        })
        .await
        .map_err(|e| DepotError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        info!("Exported {count} sale(s) to {}", params.path.display());
        Ok(count)
    }
}
