use crate::domain::payment::PaymentRecord;
use crate::errors::ServerError;
use crate::responses::xlsx_response;
use crate::responses::ResultResp;
use rust_xlsxwriter::{Format, Workbook};

const HEADERS: [&str; 6] = ["Date", "Reference", "Method", "Property", "Amount", "Status"];

/// Payment history as a workbook, one row per payment in the given order.
pub fn export_payments_xlsx(payments: &[&PaymentRecord]) -> ResultResp {
    let buffer = payments_workbook(payments)?;
    xlsx_response(buffer, "payment_history.xlsx")
}

pub fn payments_workbook(payments: &[&PaymentRecord]) -> Result<Vec<u8>, ServerError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    let money = Format::new().set_num_format("$#,##0.00");

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *header)
            .map_err(|e| {
                ServerError::XlsxError(format!("Failed to write header '{}': {}", header, e))
            })?;
    }

    for (i, payment) in payments.iter().enumerate() {
        let r = (i + 1) as u32;

        worksheet
            .write_string(r, 0, payment.date.format("%Y-%m-%d").to_string())
            .map_err(|e| ServerError::XlsxError(format!("Failed to write date: {}", e)))?;

        worksheet
            .write_string(r, 1, &payment.reference)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write reference: {}", e)))?;

        worksheet
            .write_string(r, 2, &payment.method)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write method: {}", e)))?;

        worksheet
            .write_string(r, 3, &payment.property)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write property: {}", e)))?;

        worksheet
            .write_number_with_format(r, 4, payment.amount, &money)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write amount: {}", e)))?;

        worksheet
            .write_string(r, 5, payment.status.as_str())
            .map_err(|e| ServerError::XlsxError(format!("Failed to write status: {}", e)))?;
    }

    workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {}", e)))
}
