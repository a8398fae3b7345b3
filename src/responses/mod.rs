pub mod errors;
pub mod json;
pub mod redirect;
pub mod xlsx;

pub use crate::errors::ResultResp;
pub use errors::error_response;
pub use json::json_response;
pub use redirect::redirect;
pub use xlsx::xlsx_response;
