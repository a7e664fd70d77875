use crate::errors::{AppError, ClientError};
use crate::guide::search_material;
use crate::models::{
    FeaturesClick, FootprintForm, GuideForm, GuideParams, NearbyForm, PageSnapshot, SoilForm,
    Upload,
};
use crate::page::PanelKind;
use crate::panels::{self, CLASSIFYING, Output, SEARCHING};
use crate::state::AppState;
use crate::ui::render_index;
use axum::{
    Form, Json,
    extract::{Multipart, Path, Query, State},
    response::{Html, Redirect},
};
use std::future::Future;
use tracing::{debug, info, warn};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let page = state.page.lock().await;
    Html(render_index(&page))
}

pub async fn get_state(State(state): State<AppState>) -> Json<PageSnapshot> {
    let page = state.page.lock().await;
    Json(page.snapshot())
}

pub async fn guide_search(Query(params): Query<GuideParams>) -> Json<Vec<String>> {
    Json(search_material(&params.q))
}

pub async fn toggle_sidebar(State(state): State<AppState>) -> Redirect {
    state.page.lock().await.toggle_sidebar();
    Redirect::to("/")
}

pub async fn toggle_features(
    State(state): State<AppState>,
    Form(click): Form<FeaturesClick>,
) -> Redirect {
    state.page.lock().await.toggle_features_submenu(&click.target);
    Redirect::to("/")
}

pub async fn show_section(
    State(state): State<AppState>,
    Path(section_id): Path<String>,
) -> Redirect {
    let mut page = state.page.lock().await;
    page.show_section(&section_id);
    if page.ui.active_section.is_none() {
        debug!(section_id = %section_id, "unknown section, nothing active");
    }
    Redirect::to("/")
}

pub async fn search_guide(
    State(state): State<AppState>,
    Form(form): Form<GuideForm>,
) -> Redirect {
    state.page.lock().await.search_material(&form.query);
    Redirect::to("/")
}

pub async fn classify(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Redirect, AppError> {
    let upload = read_upload(multipart).await?;
    let upload = match panels::classify_request(upload) {
        Ok(upload) => upload,
        Err(prompt) => {
            show_guard(&state, PanelKind::Classifier, prompt).await;
            return Ok(Redirect::to("/"));
        }
    };

    let call = state.client.predict(upload);
    dispatch(
        &state,
        PanelKind::Classifier,
        Some(CLASSIFYING),
        call,
        panels::render_classification,
    )
    .await;
    Ok(Redirect::to("/"))
}

pub async fn soil(State(state): State<AppState>, Form(form): Form<SoilForm>) -> Redirect {
    let request = {
        let mut page = state.page.lock().await;
        page.soil_form = form.clone();
        match panels::soil_request(&form.ph, &form.potash_level) {
            Ok(request) => request,
            Err(prompt) => {
                debug!(panel = PanelKind::Soil.as_str(), "input guard hit");
                page.soil.show(prompt);
                return Redirect::to("/");
            }
        }
    };

    let call = state.client.soil_analysis(&request);
    dispatch(&state, PanelKind::Soil, None, call, panels::render_soil).await;
    Redirect::to("/")
}

pub async fn footprint(
    State(state): State<AppState>,
    Form(form): Form<FootprintForm>,
) -> Redirect {
    let request = panels::footprint_request(&form.electricity, &form.water, &form.transport);
    state.page.lock().await.footprint_form = form;

    let call = state.client.carbon_footprint(&request);
    dispatch(
        &state,
        PanelKind::Footprint,
        None,
        call,
        panels::render_footprint,
    )
    .await;
    Redirect::to("/")
}

pub async fn nearby(State(state): State<AppState>, Form(form): Form<NearbyForm>) -> Redirect {
    let query = {
        let mut page = state.page.lock().await;
        page.nearby_form = form.clone();
        match panels::nearby_request(&form.lat, &form.lon, &form.center_type) {
            Ok(query) => query,
            Err(prompt) => {
                debug!(panel = PanelKind::Nearby.as_str(), "input guard hit");
                page.nearby.show(prompt);
                return Redirect::to("/");
            }
        }
    };

    let call = state.client.nearby(&query);
    dispatch(&state, PanelKind::Nearby, Some(SEARCHING), call, panels::render_nearby).await;
    Redirect::to("/")
}

async fn show_guard(state: &AppState, kind: PanelKind, prompt: Output) {
    debug!(panel = kind.as_str(), "input guard hit");
    state.page.lock().await.panel_mut(kind).show(prompt);
}

/// Runs one backend call for `kind`, writing the reply only if no newer
/// trigger for the same panel happened meanwhile. The page lock is released
/// while the call is in flight.
async fn dispatch<T>(
    state: &AppState,
    kind: PanelKind,
    pending: Option<&str>,
    call: impl Future<Output = Result<T, ClientError>>,
    render: fn(Result<T, ClientError>) -> Output,
) {
    let ticket = state
        .page
        .lock()
        .await
        .panel_mut(kind)
        .begin(pending.map(Output::text));

    let reply = call.await;
    match &reply {
        Ok(_) => info!(panel = kind.as_str(), "backend request succeeded"),
        Err(err) => warn!(panel = kind.as_str(), "backend request failed: {err}"),
    }

    let output = render(reply);
    let mut page = state.page.lock().await;
    if !page.panel_mut(kind).settle(ticket, output) {
        debug!(panel = kind.as_str(), "dropping superseded reply");
    }
}

async fn read_upload(mut multipart: Multipart) -> Result<Option<Upload>, AppError> {
    while let Some(field) = multipart.next_field().await? {
        if !matches!(field.name(), Some("imageUpload" | "file")) {
            continue;
        }
        let file_name = field.file_name().unwrap_or_default().to_string();
        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await?;
        return Ok(Some(Upload {
            file_name,
            content_type,
            bytes: bytes.to_vec(),
        }));
    }
    Ok(None)
}
