use axum::{
    extract::{FromRequest, Multipart, Request, State},
    http::header::CONTENT_TYPE,
    Json,
};
use serde::Deserialize;
use tracing::debug;

use crate::errors::AppError;
use crate::screening::extract::extract_text;
use crate::screening::matcher::match_keywords;
use crate::screening::preprocess::preprocess;
use crate::screening::scoring::{score, ScoreReport};
use crate::state::AppState;

/// Multipart field carrying the uploaded document.
const RESUME_FILE_FIELD: &str = "resume_file";

#[derive(Debug, Deserialize)]
pub struct CheckResumeRequest {
    #[serde(default)]
    pub resume_text: String,
}

/// GET /
pub async fn handle_index() -> &'static str {
    "Welcome to the Resume Screener API! Use POST /check_resume to evaluate resumes."
}

/// POST /check_resume
///
/// Accepts either a multipart upload (field `resume_file`, extensions .pdf /
/// .docx / .txt) or a JSON body `{"resume_text": "..."}`. A file takes
/// precedence. Blank text after extraction is a 400 regardless of source.
pub async fn handle_check_resume(
    State(state): State<AppState>,
    req: Request,
) -> Result<Json<ScoreReport>, AppError> {
    let content_type = req
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();

    let text = if content_type.starts_with("multipart/form-data") {
        debug!("file upload received");
        read_multipart_resume(req).await?
    } else if content_type.starts_with("application/json") {
        debug!("json payload received");
        let Json(body) = Json::<CheckResumeRequest>::from_request(req, &())
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;
        body.resume_text
    } else {
        return Err(AppError::NoContent);
    };

    if text.trim().is_empty() {
        return Err(AppError::EmptyContent);
    }

    let screening = &state.screening;
    let tokens = preprocess(&text, screening);
    let required_matched = match_keywords(&tokens, &screening.required, screening);
    let bonus_matched = match_keywords(&tokens, &screening.bonus, screening);

    Ok(Json(score(
        &screening.required,
        &screening.bonus,
        required_matched,
        bonus_matched,
        &screening.policy,
    )))
}

/// Walks the multipart stream for the resume field and extracts its text.
/// Other fields are skipped; a stream without the field is a no-content error.
async fn read_multipart_resume(req: Request) -> Result<String, AppError> {
    let mut multipart = Multipart::from_request(req, &())
        .await
        .map_err(|e| AppError::BadRequest(e.body_text()))?;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.body_text()))?
    {
        if field.name() != Some(RESUME_FILE_FIELD) {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;
        return extract_text(&bytes, &filename);
    }

    Err(AppError::NoContent)
}
