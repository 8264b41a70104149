//! `/voice` endpoints.
//!
//! Each handler makes one or more calls into the services held by
//! [`AppState`] and serializes the result. Any service failure becomes a 500
//! through [`AppError`]; nothing is retried and nothing is kept between requests.
//! Body extractors are taken as `Result` so their rejections share the same
//! `{"detail"}` body.

use std::sync::Arc;

use axum::{
    Json,
    extract::{
        Multipart, Path, Query, State,
        multipart::MultipartRejection,
        rejection::{JsonRejection, QueryRejection},
    },
};
use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use tracing::{debug, info};
use uuid::Uuid;

use crate::core::stt::{AudioUpload, Transcription};
use crate::core::tts::DEFAULT_VOICE;
use crate::errors::{AppError, AppResult};
use crate::models::{
    AskParams, AskResponse, HistoryResponse, ProcessQueryRequest, ProcessQueryResponse,
    SpeakRequest, SpeakResponse,
};
use crate::state::AppState;

/// Vendor upload limit for transcription.
pub const MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

/// Parts of a multipart upload the voice endpoints care about.
struct UploadForm {
    audio: AudioUpload,
    language: Option<String>,
}

async fn read_upload(multipart: &mut Multipart) -> AppResult<UploadForm> {
    let mut audio = None;
    let mut language = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidRequest(format!("Invalid multipart body: {e}")))?
    {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("file") => {
                let file_name = field.file_name().map(str::to_owned);
                let data = field.bytes().await.map_err(|e| {
                    AppError::InvalidRequest(format!("Failed to read uploaded file: {e}"))
                })?;
                audio = Some(AudioUpload::new(data).with_file_name(file_name.as_deref()));
            }
            Some("language") => {
                let value = field.text().await.map_err(|e| {
                    AppError::InvalidRequest(format!("Failed to read language field: {e}"))
                })?;
                language = Some(value.trim().to_string()).filter(|v| !v.is_empty());
            }
            other => debug!("Ignoring multipart field {:?}", other),
        }
    }

    let audio =
        audio.ok_or_else(|| AppError::InvalidRequest("Missing 'file' field".to_string()))?;

    Ok(UploadForm { audio, language })
}

/// `POST /voice/transcribe`: uploaded audio to `{text, language}`.
pub async fn transcribe_audio(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<Json<Transcription>> {
    let form = read_upload(&mut multipart?).await?;
    info!("Transcribe request: {} bytes", form.audio.byte_len());

    let transcription = state.stt.transcribe(form.audio, None).await?;
    Ok(Json(transcription))
}

/// `POST /voice/process`: query text to `{response}`.
pub async fn process_query(
    State(state): State<Arc<AppState>>,
    request: Result<Json<ProcessQueryRequest>, JsonRejection>,
) -> AppResult<Json<ProcessQueryResponse>> {
    let Json(request) = request?;
    info!(
        "Process request: session_id={}, language={}",
        request.session_id, request.language
    );

    let response = state
        .chat
        .answer(&request.text, &request.session_id, &request.language)
        .await?;
    Ok(Json(ProcessQueryResponse { response }))
}

/// `POST /voice/speak`: text to `{audio}` (base64).
pub async fn text_to_speech(
    State(state): State<Arc<AppState>>,
    request: Result<Json<SpeakRequest>, JsonRejection>,
) -> AppResult<Json<SpeakResponse>> {
    let Json(request) = request?;
    info!(
        "Speak request: {} characters, voice={}",
        request.text.chars().count(),
        request.voice
    );

    let audio = state.tts.synthesize(&request.text, &request.voice).await?;
    Ok(Json(SpeakResponse {
        audio: BASE64.encode(&audio),
    }))
}

/// `POST /voice/ask`: transcribe, answer, then speak the answer.
///
/// The three steps run strictly in order and the first failure ends the
/// request; earlier results are discarded. With the "auto" selector the reply
/// language is always "en", even if transcription detected something else.
pub async fn voice_ask(
    State(state): State<Arc<AppState>>,
    params: Result<Query<AskParams>, QueryRejection>,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<Json<AskResponse>> {
    let Query(params) = params?;
    let session_id = Uuid::new_v4().to_string();
    let form = read_upload(&mut multipart?).await?;

    // A form field overrides the query parameter.
    let params = match form.language {
        Some(language) => AskParams { language },
        None => params,
    };

    info!(
        "Ask request: session_id={}, language={}, {} bytes",
        session_id,
        params.language,
        form.audio.byte_len()
    );

    let transcription = state
        .stt
        .transcribe(form.audio, params.transcription_hint())
        .await?;

    let reply = state
        .chat
        .answer(&transcription.text, &session_id, params.reply_language())
        .await?;

    let audio = state.tts.synthesize(&reply, DEFAULT_VOICE).await?;

    Ok(Json(AskResponse {
        text: reply,
        audio: BASE64.encode(&audio),
    }))
}

/// `GET /voice/history/{session_id}`: always empty, there is no backing store.
pub async fn conversation_history(Path(session_id): Path<String>) -> Json<HistoryResponse> {
    Json(HistoryResponse {
        messages: Vec::new(),
        session_id,
    })
}
