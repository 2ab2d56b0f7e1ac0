//! Notes REST API — list, create, and delete notes under an access code.
//!
//! The access code in the path is the only access control: anyone who knows
//! it shares the collection. Reading an unknown code returns an empty list
//! rather than 404, and deleting an id that is already gone still succeeds.

use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::notes::service::NotesError;
use crate::notes::Note;
use crate::AppState;

#[derive(Debug, Serialize)]
struct ListNotesResponse {
    notes: Vec<Note>,
}

#[derive(Debug, Deserialize)]
struct CreateNoteRequest {
    content: Option<String>,
    title: Option<String>,
}

#[derive(Debug, Serialize)]
struct CreateNoteResponse {
    note: Note,
}

#[derive(Debug, Deserialize)]
struct DeleteNoteQuery {
    id: Option<String>,
}

async fn list_notes(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let code = path.into_inner();
    let notes = state.notes.list_notes(&code);
    HttpResponse::Ok().json(ListNotesResponse { notes })
}

async fn create_note(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<CreateNoteRequest>,
) -> impl Responder {
    let code = path.into_inner();
    let request = body.into_inner();

    // Absent and empty content are the same failure
    let content = request.content.unwrap_or_default();

    match state.notes.create_note(&code, &content, request.title.as_deref()) {
        Ok(note) => HttpResponse::Ok().json(CreateNoteResponse { note }),
        Err(NotesError::MissingContent) => HttpResponse::BadRequest().json(serde_json::json!({
            "error": "Content is required"
        })),
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({
            "error": e.to_string()
        })),
    }
}

async fn delete_note(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<DeleteNoteQuery>,
) -> impl Responder {
    let code = path.into_inner();
    let note_id = query.into_inner().id.unwrap_or_default();

    match state.notes.delete_note(&code, &note_id) {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({ "success": true })),
        Err(NotesError::MissingNoteId) => HttpResponse::BadRequest().json(serde_json::json!({
            "error": "Note ID is required"
        })),
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({
            "error": e.to_string()
        })),
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/notes")
            .route("/{code}", web::get().to(list_notes))
            .route("/{code}", web::post().to(create_note))
            .route("/{code}", web::delete().to(delete_note)),
    );
}
