use actix_web::http::StatusCode;
use actix_web::{web, Error, HttpResponse};
use log::warn;

use crate::api::response::{failure, success};
use crate::receipt::ParsedReceipt;

/// Normalizes the address of a receipt coming out of the LLM parsing step.
pub async fn receipt_address(
    receipt: web::Json<ParsedReceipt>
) -> Result<HttpResponse, Error> {
    if let Err(err) = receipt.validate() {
        warn!("Rejected parsed receipt: {}", err);
        return Ok(failure(StatusCode::UNPROCESSABLE_ENTITY, &err.to_string()));
    }

    Ok(success(receipt.address_input().normalize()))
}
