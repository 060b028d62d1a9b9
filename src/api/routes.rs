use actix_web::{delete, get, post, put, web, HttpResponse, Result as WebResult};
use tracing::warn;
use uuid::Uuid;

use crate::api::models::{SessionView, SubmitRequest, SystemPromptRequest, TurnResponse};
use crate::chat::{CompletionAdapter, SessionRegistry};

#[get("/health")]
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({"status": "healthy"}))
}

// --- Sessions ---

#[post("")]
pub async fn create_session(registry: web::Data<SessionRegistry>) -> WebResult<HttpResponse> {
    let (_, handle) = registry.create().await;
    let mut session = handle.lock().await;
    Ok(HttpResponse::Created().json(SessionView::from_session(&mut session)))
}

#[get("")]
pub async fn list_sessions(registry: web::Data<SessionRegistry>) -> WebResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(registry.list().await))
}

#[get("/{id}")]
pub async fn get_session(
    registry: web::Data<SessionRegistry>,
    id: web::Path<Uuid>,
) -> WebResult<HttpResponse> {
    match registry.get(id.into_inner()).await {
        Some(handle) => {
            let mut session = handle.lock().await;
            Ok(HttpResponse::Ok().json(SessionView::from_session(&mut session)))
        }
        None => Ok(HttpResponse::NotFound().finish()),
    }
}

#[delete("/{id}")]
pub async fn delete_session(
    registry: web::Data<SessionRegistry>,
    id: web::Path<Uuid>,
) -> WebResult<HttpResponse> {
    if registry.remove(id.into_inner()).await {
        Ok(HttpResponse::NoContent().finish())
    } else {
        Ok(HttpResponse::NotFound().finish())
    }
}

// --- Turns ---

#[post("/{id}/messages")]
pub async fn submit_message(
    registry: web::Data<SessionRegistry>,
    adapter: web::Data<CompletionAdapter>,
    id: web::Path<Uuid>,
    req: web::Json<SubmitRequest>,
) -> WebResult<HttpResponse> {
    let id = id.into_inner();
    let Some(handle) = registry.get(id).await else {
        return Ok(HttpResponse::NotFound().body("Session not found"));
    };

    // Held across the completion call so turns in one session never interleave.
    let mut session = handle.lock().await;
    match session.submit(&req.text, &adapter).await {
        Ok(turn) => Ok(HttpResponse::Ok().json(TurnResponse::from(turn))),
        Err(e) => {
            warn!("Rejected submission for session {}: {}", id, e);
            Ok(HttpResponse::BadRequest().body(e.to_string()))
        }
    }
}

#[put("/{id}/system_prompt")]
pub async fn update_system_prompt(
    registry: web::Data<SessionRegistry>,
    id: web::Path<Uuid>,
    req: web::Json<SystemPromptRequest>,
) -> WebResult<HttpResponse> {
    let Some(handle) = registry.get(id.into_inner()).await else {
        return Ok(HttpResponse::NotFound().body("Session not found"));
    };

    let mut session = handle.lock().await;
    session.apply_prompt_form(&req.text);
    Ok(HttpResponse::Ok().json(SessionView::from_session(&mut session)))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health).service(
        web::scope("/sessions")
            .service(create_session)
            .service(list_sessions)
            .service(get_session)
            .service(delete_session)
            .service(submit_message)
            .service(update_system_prompt),
    );
}
