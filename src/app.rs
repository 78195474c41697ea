//! The application core: session routing plus the file preview
//! controller with its paging, display, and image-edit operations.

use tracing::{debug, warn};

use crate::capabilities::{Capabilities, NavTarget, FILE_VIEW_STATE};
use crate::config::DataVariant;
use crate::event::{Event, HttpResult};
use crate::files::{self, FileListData};
use crate::image_edit::{self, CropRegion, RotationAngle};
use crate::model::{CloseReason, EditKind, Model, SessionState, UserInfo};
use crate::view::{FileCard, PreviewView, ViewModel};
use crate::{
    AppError, ErrorKind, CROPPED_UPLOAD_FILENAME, MULTIPART_FILE_FIELD, ROTATED_UPLOAD_FILENAME,
    ROTATE_TRANSITION_MS, UPLOAD_CONTENT_TYPE,
};
use crate::multipart::MultipartForm;

#[derive(Default)]
pub struct App;

impl App {
    fn fetch_user_info(model: &Model, caps: &Capabilities) {
        caps.http
            .get(model.api.user_info_url())
            .expect_json::<UserInfo>()
            .send(|result| Event::UserInfoReceived(Box::new(result)));
    }

    fn fetch_file_list(model: &Model, caps: &Capabilities) {
        let Some(document_id) = &model.document_id else {
            return;
        };
        let epoch = model.epoch;
        caps.http
            .get(model.api.file_list_url(document_id))
            .expect_json::<FileListData>()
            .send(move |result| Event::FileListReceived {
                epoch,
                result: Box::new(result),
            });
    }

    fn fetch_version_list(model: &Model, caps: &Capabilities) {
        let Some(file_id) = &model.requested_file_id else {
            return;
        };
        let epoch = model.epoch;
        caps.http
            .get(model.api.file_versions_url(file_id))
            .expect_json::<FileListData>()
            .send(move |result| Event::VersionListReceived {
                epoch,
                result: Box::new(result),
            });
    }

    /// Fetch the current bytes of the selected file as the source
    /// material for an edit.
    fn fetch_edit_source(kind: EditKind, model: &Model, caps: &Capabilities) {
        let Some(file_id) = &model.requested_file_id else {
            return;
        };
        let epoch = model.epoch;
        caps.http
            .get(model.api.file_data_url(file_id, DataVariant::Raw, None))
            .send(move |result| Event::EditSourceLoaded {
                epoch,
                kind,
                result: Box::new(result),
            });
    }

    fn send_edit_upload(kind: EditKind, jpeg: Vec<u8>, model: &Model, caps: &Capabilities) {
        let Some(file_id) = &model.requested_file_id else {
            return;
        };

        let filename = match kind {
            EditKind::Crop => CROPPED_UPLOAD_FILENAME,
            EditKind::Rotation => ROTATED_UPLOAD_FILENAME,
        };

        let form = MultipartForm::new().file_part(
            MULTIPART_FILE_FIELD,
            filename,
            UPLOAD_CONTENT_TYPE,
            &jpeg,
        );
        let content_type = form.content_type();

        let epoch = model.epoch;
        caps.http
            .put(model.api.file_upload_url(file_id))
            .header("Content-Type", content_type.as_str())
            .body_bytes(form.finish())
            .send(move |result| Event::EditUploadCompleted {
                epoch,
                kind,
                result: Box::new(result),
            });
    }

    fn handle_user_info(result: HttpResult<UserInfo>, model: &mut Model, caps: &Capabilities) {
        match result {
            Ok(mut response) if response.status().is_success() => {
                let Some(user) = response.take_body() else {
                    model.session = SessionState::Unknown;
                    model.set_error(AppError::new(
                        ErrorKind::Deserialization,
                        "user info response had no body",
                    ));
                    return;
                };

                if user.anonymous {
                    model.session = SessionState::Anonymous;
                    caps.navigate.redirect(NavTarget::Login);
                } else {
                    model.session = SessionState::Authenticated;
                    caps.navigate.redirect(NavTarget::DocumentDefault);
                }
            }
            Ok(response) => {
                let status: u16 = response.status().into();
                model.session = SessionState::Unknown;
                model.set_error(AppError::from_http_status(status, None));
            }
            Err(e) => {
                model.session = SessionState::Unknown;
                model.set_error(Self::app_error_from_http(&e));
            }
        }
    }

    fn handle_file_list(result: HttpResult<FileListData>, model: &mut Model, caps: &Capabilities) {
        model.files_loading = false;
        match result {
            Ok(mut response) if response.status().is_success() => {
                let data = response.take_body().unwrap_or_default();
                let found = model.select_from(&data.files);
                model.files = data.files;

                // File not found, maybe it's a version.
                if !found {
                    debug!("requested file not in primary list, trying version history");
                    Self::fetch_version_list(model, caps);
                }
            }
            Ok(response) => {
                let status: u16 = response.status().into();
                warn!(status, "file list fetch failed");
                model.set_error(AppError::from_http_status(status, None));
            }
            Err(e) => {
                warn!(error = %e, "file list fetch failed");
                model.set_error(Self::app_error_from_http(&e));
            }
        }
    }

    fn handle_version_list(result: HttpResult<FileListData>, model: &mut Model) {
        match result {
            Ok(mut response) if response.status().is_success() => {
                let data = response.take_body().unwrap_or_default();
                // A miss here is final: the selection stays empty and
                // the preview renders without one.
                if !model.select_from(&data.files) {
                    debug!("requested file absent from version history as well");
                }
            }
            Ok(response) => {
                let status: u16 = response.status().into();
                warn!(status, "version history fetch failed");
                model.set_error(AppError::from_http_status(status, None));
            }
            Err(e) => {
                warn!(error = %e, "version history fetch failed");
                model.set_error(Self::app_error_from_http(&e));
            }
        }
    }

    fn handle_edit_source(
        kind: EditKind,
        result: HttpResult<Vec<u8>>,
        model: &mut Model,
        caps: &Capabilities,
    ) {
        match result {
            Ok(mut response) if response.status().is_success() => {
                let bytes = response.take_body().unwrap_or_default();
                Self::apply_edit_and_upload(kind, &bytes, model, caps);
            }
            Ok(response) => {
                let status: u16 = response.status().into();
                warn!(kind = kind.name(), status, "edit source fetch failed");
                model.set_error(AppError::from_http_status(status, None));
            }
            Err(e) => {
                warn!(kind = kind.name(), error = %e, "edit source fetch failed");
                model.set_error(Self::app_error_from_http(&e));
            }
        }
    }

    fn apply_edit_and_upload(kind: EditKind, bytes: &[u8], model: &mut Model, caps: &Capabilities) {
        let transformed = match kind {
            EditKind::Rotation => {
                image_edit::rotate_file_image(&model.edit_limits, bytes, model.edit.rotation)
            }
            EditKind::Crop => {
                let Some(crop) = model.edit.crop.clone() else {
                    // Cancelled while the source was in flight.
                    debug!("crop session gone, dropping fetched edit source");
                    return;
                };
                image_edit::crop_file_image(
                    &model.edit_limits,
                    bytes,
                    crop.region.unwrap_or(CropRegion::FULL),
                    crop.rotation,
                )
            }
        };

        match transformed {
            Ok(jpeg) => Self::send_edit_upload(kind, jpeg, model, caps),
            Err(e) => {
                warn!(kind = kind.name(), error = %e, "image edit failed");
                model.set_error(e.into());
            }
        }
    }

    fn handle_upload_completed(kind: EditKind, result: HttpResult<Vec<u8>>, model: &mut Model) {
        match result {
            Ok(response) if response.status().is_success() => {
                let ts = model.next_cache_bust();
                debug!(kind = kind.name(), ts, "edit upload succeeded");
                match kind {
                    EditKind::Crop => model.edit.crop = None,
                    EditKind::Rotation => model.edit.rotation = RotationAngle::ZERO,
                }
            }
            Ok(response) => {
                let status: u16 = response.status().into();
                warn!(kind = kind.name(), status, "edit upload failed");
                model.set_error(AppError::from_http_status(status, None));
            }
            Err(e) => {
                warn!(kind = kind.name(), error = %e, "edit upload failed");
                model.set_error(Self::app_error_from_http(&e));
            }
        }
    }

    fn app_error_from_http(error: &crux_http::Error) -> AppError {
        match error {
            crux_http::Error::Timeout => AppError::new(ErrorKind::Timeout, "Request timed out"),
            crux_http::Error::Io(message) => {
                AppError::new(ErrorKind::Network, "Network error").with_internal(message.clone())
            }
            crux_http::Error::Url(message) => {
                AppError::new(ErrorKind::Validation, "Invalid request URL")
                    .with_internal(message.clone())
            }
            crux_http::Error::Json(message) => {
                AppError::new(ErrorKind::Deserialization, "Malformed server response")
                    .with_internal(message.clone())
            }
            other => AppError::new(ErrorKind::Unknown, "Request failed")
                .with_internal(format!("{other:?}")),
        }
    }
}

impl crux_core::App for App {
    type Event = Event;
    type Model = Model;
    type ViewModel = ViewModel;
    type Capabilities = Capabilities;

    fn update(&self, event: Event, model: &mut Model, caps: &Capabilities) {
        debug!(event = event.name(), user = event.is_user_initiated(), "handling event");

        match event {
            Event::Noop => {}

            Event::SessionStarted => {
                model.session = SessionState::Checking;
                Self::fetch_user_info(model, caps);
                caps.render.render();
            }

            Event::UserInfoReceived(result) => {
                Self::handle_user_info(*result, model, caps);
                caps.render.render();
            }

            Event::PreviewOpened {
                document_id,
                file_id,
            } => {
                model.activate_preview(document_id, file_id);
                Self::fetch_file_list(model, caps);
                caps.render.render();
            }

            Event::FileListReceived { epoch, result } => {
                if model.is_stale(epoch) {
                    debug!(epoch, current = model.epoch, "dropping stale file list response");
                    return;
                }
                Self::handle_file_list(*result, model, caps);
                caps.render.render();
            }

            Event::VersionListReceived { epoch, result } => {
                if model.is_stale(epoch) {
                    debug!(epoch, current = model.epoch, "dropping stale version response");
                    return;
                }
                Self::handle_version_list(*result, model);
                caps.render.render();
            }

            Event::CloseRequested => {
                model.close_modal(CloseReason::Dismissed);
                caps.render.render();
            }

            // One-shot guard installed on activation: the first state
            // transition decides how the modal goes away, then the
            // guard disarms.
            Event::TransitionStarted { to_state } => {
                if !model.transition_guard_armed {
                    return;
                }
                model.transition_guard_armed = false;

                if model.modal.is_open() {
                    let reason = if to_state == FILE_VIEW_STATE {
                        CloseReason::Completed
                    } else {
                        CloseReason::Dismissed
                    };
                    model.close_modal(reason);
                }
                caps.render.render();
            }

            Event::GoNextFile => {
                if let (Some(document_id), Some(current)) =
                    (&model.document_id, &model.requested_file_id)
                {
                    if let Some(next) = files::next_file(&model.files, current) {
                        caps.navigate.go(NavTarget::DocumentFile {
                            document_id: document_id.clone(),
                            file_id: next.id.clone(),
                        });
                    }
                }
            }

            Event::GoPreviousFile => {
                if let (Some(document_id), Some(current)) =
                    (&model.document_id, &model.requested_file_id)
                {
                    if let Some(previous) = files::previous_file(&model.files, current) {
                        caps.navigate.go(NavTarget::DocumentFile {
                            document_id: document_id.clone(),
                            file_id: previous.id.clone(),
                        });
                    }
                }
            }

            Event::OpenFileRequested => {
                if let Some(file_id) = &model.requested_file_id {
                    caps.viewer
                        .open_window(model.api.file_data_url(file_id, DataVariant::Raw, None));
                }
            }

            Event::OpenContentRequested => {
                if let Some(file_id) = &model.requested_file_id {
                    caps.viewer
                        .open_window(model.api.file_data_url(file_id, DataVariant::Content, None));
                }
            }

            Event::PrintRequested => {
                if let Some(file_id) = &model.requested_file_id {
                    caps.viewer
                        .print(model.api.file_data_url(file_id, DataVariant::Raw, None));
                }
            }

            Event::RotateRequested { degrees } => {
                // While cropping, rotation belongs to the cropping
                // tool, not the base accumulator.
                if let Some(crop) = &mut model.edit.crop {
                    crop.rotation = crop.rotation.add(degrees);
                } else {
                    model.edit.rotation = model.edit.rotation.add(degrees);
                }
                caps.render.render();
            }

            Event::RotationSaveRequested => {
                if model.edit.is_cropping() {
                    debug!("rotation save ignored while cropping");
                    return;
                }
                if model.edit.rotation.is_zero() {
                    return;
                }
                if !model.edit.rotation.is_quarter_turn() {
                    model.set_error(
                        image_edit::ImageEditError::NotAQuarterTurn {
                            degrees: model.edit.rotation.degrees(),
                        }
                        .into(),
                    );
                    caps.render.render();
                    return;
                }
                Self::fetch_edit_source(EditKind::Rotation, model, caps);
            }

            Event::CropStarted => {
                if !files::is_image(model.selected_file.as_ref()) {
                    debug!("crop ignored: no image selected");
                    return;
                }
                // Any prior cropping-tool instance is discarded.
                model.edit.crop = Some(crate::model::CropSession::default());
                caps.render.render();
            }

            Event::CropRegionChanged { region } => {
                if let Some(crop) = &mut model.edit.crop {
                    crop.region = Some(region);
                }
            }

            Event::CropCancelled => {
                model.edit.crop = None;
                caps.render.render();
            }

            Event::CropSaveRequested => {
                if !model.edit.is_cropping() {
                    return;
                }
                Self::fetch_edit_source(EditKind::Crop, model, caps);
            }

            Event::EditSourceLoaded {
                epoch,
                kind,
                result,
            } => {
                if model.is_stale(epoch) {
                    debug!(epoch, current = model.epoch, "dropping stale edit source");
                    return;
                }
                Self::handle_edit_source(kind, *result, model, caps);
                caps.render.render();
            }

            Event::EditUploadCompleted {
                epoch,
                kind,
                result,
            } => {
                if model.is_stale(epoch) {
                    debug!(epoch, current = model.epoch, "dropping stale upload result");
                    return;
                }
                Self::handle_upload_completed(kind, *result, model);
                caps.render.render();
            }

            Event::DismissError => {
                model.clear_error();
                caps.render.render();
            }
        }
    }

    fn view(&self, model: &Model) -> ViewModel {
        let selected = model.selected_file.as_ref();

        let (has_next, has_previous) = match &model.requested_file_id {
            Some(current) => (
                files::next_file(&model.files, current).is_some(),
                files::previous_file(&model.files, current).is_some(),
            ),
            None => (false, false),
        };

        let preview_url = model
            .requested_file_id
            .as_ref()
            .map(|id| model.api.file_data_url(id, DataVariant::Raw, model.cache_bust));

        ViewModel {
            session: model.session,
            preview: PreviewView {
                modal: model.modal,
                loading: model.files_loading,
                file: selected.map(|file| FileCard {
                    id: file.id.as_str().to_string(),
                    name: file.name.clone(),
                    mimetype: file.mimetype.clone(),
                    size: file.size,
                }),
                can_display_preview: files::can_display_preview(selected),
                is_image: files::is_image(selected),
                has_next,
                has_previous,
                preview_url,
                rotation_degrees: model.edit.rotation.degrees(),
                rotate_transition_ms: ROTATE_TRANSITION_MS,
                is_cropping: model.edit.is_cropping(),
            },
            error: model.active_error.as_ref().map(Into::into),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capabilities::Effect;
    use crate::model::{CropSession, DocumentId, FileId};
    use assert_matches::assert_matches;
    use crux_core::testing::AppTester;
    use crux_http::testing::ResponseBuilder;

    fn tester() -> AppTester<App, Effect> {
        AppTester::default()
    }

    fn file(id: &str, mimetype: &str) -> crate::files::FileInfo {
        crate::files::FileInfo {
            id: FileId::new(id),
            name: None,
            mimetype: mimetype.into(),
            size: None,
            create_date: None,
            version: None,
        }
    }

    fn open_preview(app: &AppTester<App, Effect>, model: &mut Model, doc: &str, file_id: &str) {
        let _ = app.update(
            Event::PreviewOpened {
                document_id: DocumentId::new(doc),
                file_id: FileId::new(file_id),
            },
            model,
        );
    }

    #[test]
    fn session_start_probes_identity() {
        let app = tester();
        let mut model = Model::default();

        let update = app.update(Event::SessionStarted, &mut model);

        assert_eq!(model.session, SessionState::Checking);
        assert!(update.effects.iter().any(|e| matches!(e, Effect::Http(_))));
    }

    #[test]
    fn anonymous_identity_redirects_to_login() {
        let app = tester();
        let mut model = Model::default();

        let response = ResponseBuilder::ok()
            .body(UserInfo {
                anonymous: true,
                username: None,
            })
            .build();
        let update = app.update(Event::UserInfoReceived(Box::new(Ok(response))), &mut model);

        assert_eq!(model.session, SessionState::Anonymous);
        let nav = update
            .effects
            .iter()
            .find_map(|e| match e {
                Effect::Navigate(request) => Some(request.operation.clone()),
                _ => None,
            })
            .expect("should navigate");
        assert_matches!(
            nav,
            crate::capabilities::NavigateOperation::Go {
                target: NavTarget::Login,
                location: crate::capabilities::HistoryMode::Replace,
                notify: false,
            }
        );
    }

    #[test]
    fn authenticated_identity_redirects_to_default_document_view() {
        let app = tester();
        let mut model = Model::default();

        let response = ResponseBuilder::ok()
            .body(UserInfo {
                anonymous: false,
                username: Some("admin".into()),
            })
            .build();
        let update = app.update(Event::UserInfoReceived(Box::new(Ok(response))), &mut model);

        assert_eq!(model.session, SessionState::Authenticated);
        assert!(update.effects.iter().any(|e| matches!(
            e,
            Effect::Navigate(request) if matches!(
                &request.operation,
                crate::capabilities::NavigateOperation::Go { target: NavTarget::DocumentDefault, .. }
            )
        )));
    }

    #[test]
    fn identity_failure_is_surfaced_not_swallowed() {
        let app = tester();
        let mut model = Model::default();

        let _ = app.update(
            Event::UserInfoReceived(Box::new(Err(crux_http::Error::Timeout))),
            &mut model,
        );

        assert_eq!(model.session, SessionState::Unknown);
        assert_eq!(model.active_error.as_ref().unwrap().kind, ErrorKind::Timeout);
    }

    #[test]
    fn rotation_accumulates_on_the_base_angle() {
        let app = tester();
        let mut model = Model::default();
        open_preview(&app, &mut model, "D1", "A");

        let _ = app.update(Event::RotateRequested { degrees: 270 }, &mut model);
        let _ = app.update(Event::RotateRequested { degrees: 180 }, &mut model);

        assert_eq!(model.edit.rotation.degrees(), 90);
    }

    #[test]
    fn rotation_is_delegated_to_an_active_crop_session() {
        let app = tester();
        let mut model = Model::default();
        open_preview(&app, &mut model, "D1", "A");
        model.edit.rotation = RotationAngle::new(90);
        model.edit.crop = Some(CropSession::default());

        let _ = app.update(Event::RotateRequested { degrees: 90 }, &mut model);

        // Base accumulator untouched, crop session took the delta.
        assert_eq!(model.edit.rotation.degrees(), 90);
        assert_eq!(model.edit.crop.as_ref().unwrap().rotation.degrees(), 90);
    }

    #[test]
    fn zero_rotation_save_is_a_no_op() {
        let app = tester();
        let mut model = Model::default();
        open_preview(&app, &mut model, "D1", "A");

        let update = app.update(Event::RotationSaveRequested, &mut model);

        assert!(!update.effects.iter().any(|e| matches!(e, Effect::Http(_))));
    }

    #[test]
    fn rotation_save_fetches_source_bytes() {
        let app = tester();
        let mut model = Model::default();
        open_preview(&app, &mut model, "D1", "A");
        model.edit.rotation = RotationAngle::new(90);

        let update = app.update(Event::RotationSaveRequested, &mut model);

        assert!(update.effects.iter().any(|e| matches!(e, Effect::Http(_))));
    }

    #[test]
    fn non_quarter_rotation_save_is_rejected() {
        let app = tester();
        let mut model = Model::default();
        open_preview(&app, &mut model, "D1", "A");
        model.edit.rotation = RotationAngle::new(45);

        let update = app.update(Event::RotationSaveRequested, &mut model);

        assert!(!update.effects.iter().any(|e| matches!(e, Effect::Http(_))));
        assert_eq!(model.active_error.as_ref().unwrap().kind, ErrorKind::Validation);
    }

    #[test]
    fn crop_start_requires_an_image_selection() {
        let app = tester();
        let mut model = Model::default();
        open_preview(&app, &mut model, "D1", "C");
        model.selected_file = Some(file("C", "application/pdf"));

        let _ = app.update(Event::CropStarted, &mut model);
        assert!(!model.edit.is_cropping());

        model.selected_file = Some(file("C", "image/png"));
        let _ = app.update(Event::CropStarted, &mut model);
        assert!(model.edit.is_cropping());
    }

    #[test]
    fn crop_cancel_destroys_the_session() {
        let app = tester();
        let mut model = Model::default();
        open_preview(&app, &mut model, "D1", "A");
        model.selected_file = Some(file("A", "image/png"));

        let _ = app.update(Event::CropStarted, &mut model);
        let _ = app.update(
            Event::CropRegionChanged {
                region: CropRegion::new(1, 1, 5, 5).unwrap(),
            },
            &mut model,
        );
        let _ = app.update(Event::CropCancelled, &mut model);

        assert!(model.edit.crop.is_none());
    }

    #[test]
    fn transition_guard_fires_at_most_once() {
        let app = tester();
        let mut model = Model::default();
        open_preview(&app, &mut model, "D1", "A");
        assert!(model.transition_guard_armed);

        let _ = app.update(
            Event::TransitionStarted {
                to_state: FILE_VIEW_STATE.into(),
            },
            &mut model,
        );
        assert!(!model.transition_guard_armed);
        assert_matches!(
            model.modal,
            crate::model::ModalState::Closed {
                reason: CloseReason::Completed
            }
        );

        // Re-open by hand and replay: the disarmed guard stays quiet.
        model.modal = crate::model::ModalState::Open;
        let _ = app.update(
            Event::TransitionStarted {
                to_state: "login".into(),
            },
            &mut model,
        );
        assert!(model.modal.is_open());
    }

    #[test]
    fn transition_to_another_state_dismisses() {
        let app = tester();
        let mut model = Model::default();
        open_preview(&app, &mut model, "D1", "A");

        let _ = app.update(
            Event::TransitionStarted {
                to_state: "document.default".into(),
            },
            &mut model,
        );

        assert_matches!(
            model.modal,
            crate::model::ModalState::Closed {
                reason: CloseReason::Dismissed
            }
        );
    }

    #[test]
    fn stale_file_list_responses_are_dropped() {
        let app = tester();
        let mut model = Model::default();
        open_preview(&app, &mut model, "D1", "A");
        let stale_epoch = model.epoch;
        open_preview(&app, &mut model, "D2", "X");

        let response = ResponseBuilder::ok()
            .body(FileListData {
                files: vec![file("A", "image/png")],
            })
            .build();
        let _ = app.update(
            Event::FileListReceived {
                epoch: stale_epoch,
                result: Box::new(Ok(response)),
            },
            &mut model,
        );

        assert!(model.files.is_empty());
        assert!(model.selected_file.is_none());
    }

    #[test]
    fn view_tolerates_an_absent_selection() {
        let app = tester();
        let mut model = Model::default();
        open_preview(&app, &mut model, "D1", "Z");

        let vm = crate::CruxApp::view(&App, &model);

        assert!(vm.preview.file.is_none());
        assert!(!vm.preview.can_display_preview);
        assert!(!vm.preview.is_image);
        assert!(!vm.preview.has_next);
        assert!(!vm.preview.has_previous);
    }

    #[test]
    fn display_actions_open_the_right_urls() {
        let app = tester();
        let mut model = Model::default();
        open_preview(&app, &mut model, "D1", "B");

        let update = app.update(Event::OpenContentRequested, &mut model);
        let url = update
            .effects
            .iter()
            .find_map(|e| match e {
                Effect::Viewer(request) => match &request.operation {
                    crate::capabilities::ViewerOperation::OpenWindow { url } => Some(url.clone()),
                    crate::capabilities::ViewerOperation::Print { .. } => None,
                },
                _ => None,
            })
            .expect("should open a window");
        assert_eq!(url, "/api/file/B/data?size=content");

        let update = app.update(Event::PrintRequested, &mut model);
        assert!(update.effects.iter().any(|e| matches!(
            e,
            Effect::Viewer(request) if matches!(
                &request.operation,
                crate::capabilities::ViewerOperation::Print { url } if url == "/api/file/B/data"
            )
        )));
    }
}
