use actix_web::{HttpResponse, Responder, get, post, web};
use tracing::error;

use crate::config::Config;
use crate::error::ServiceError;
use crate::handlers::{availability, submit};
use crate::models::appointments::{ErrorResponse, MessageResponse, SubmissionRequest};
use crate::store::AppointmentStore;

#[get("/frizer")]
async fn fetch_merged(
    config: web::Data<Config>,
    store: web::Data<AppointmentStore>,
) -> impl Responder {
    match availability::merged_availability(&config.provider_url, config.target_year, &store).await
    {
        Ok(data) => HttpResponse::Ok().json(data),
        Err(e) => {
            error!("Error fetching data from external API: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch data from the external API.",
            })
        }
    }
}

#[post("/frizer")]
async fn submit_appointment(
    store: web::Data<AppointmentStore>,
    body: web::Json<SubmissionRequest>,
) -> impl Responder {
    match submit::record_submission(&store, body.date.as_deref(), body.time.as_deref()) {
        Ok(_) => HttpResponse::Ok().json(MessageResponse {
            message: "Appointment submitted successfully.",
        }),
        Err(ServiceError::MissingFields) => HttpResponse::BadRequest().json(ErrorResponse {
            error: "Date and time are required.",
        }),
        Err(e) => {
            error!("Failed to persist appointment: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to store the appointment.",
            })
        }
    }
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(fetch_merged).service(submit_appointment);
}
