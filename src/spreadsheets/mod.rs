pub mod payments_xlsx;

pub use payments_xlsx::export_payments_xlsx;
