use chart_host::api::{ChartHost, ChartHostConfig, HostLifecycle, MountOutcome};
use chart_host::core::{
    AxisDefinition, ChartOptionDocument, OptionPatch, SeriesDefinition, SeriesPatch, Viewport,
    ZoomWindow,
};
use chart_host::render::{NullBackend, ReleaseOutcome, SurfaceHandle, Theme};

fn document() -> ChartOptionDocument {
    ChartOptionDocument::new(
        vec![AxisDefinition::category(["a", "b", "c"]), AxisDefinition::value()],
        vec![
            SeriesDefinition::bar("Actual", vec![120.0, 200.0, 150.0]),
            SeriesDefinition::bar("Requirement", vec![20.0, 105.0, 90.0]),
        ],
    )
}

fn host() -> (NullBackend, ChartHost<NullBackend>) {
    let backend = NullBackend::new();
    let config = ChartHostConfig::new(Viewport::new(360, 640)).with_theme(Theme::Light);
    let host = ChartHost::new(backend.clone(), config).expect("host init");
    (backend, host)
}

#[test]
fn mount_creates_one_context_and_applies_document() {
    let (backend, mut host) = host();
    let outcome = host
        .mount(Some(SurfaceHandle::new(1)), document())
        .expect("mount");

    assert_eq!(outcome, MountOutcome::Mounted);
    assert_eq!(host.lifecycle(), HostLifecycle::Mounted);
    let stats = backend.stats();
    assert_eq!(stats.contexts_created, 1);
    assert_eq!(stats.documents_applied, 1);
    assert_eq!(stats.last_viewport, Some(Viewport::new(360, 640)));
    assert_eq!(stats.last_document.as_ref(), host.document().as_deref());
}

#[test]
fn mount_without_surface_is_deferred_until_attach() {
    let (backend, mut host) = host();
    let outcome = host.mount(None, document()).expect("deferred mount is not an error");

    assert_eq!(outcome, MountOutcome::Deferred);
    assert_eq!(host.lifecycle(), HostLifecycle::AwaitingSurface);
    assert_eq!(backend.stats().contexts_created, 0);

    let outcome = host
        .on_surface_attached(SurfaceHandle::new(5))
        .expect("attach");
    assert_eq!(outcome, MountOutcome::Mounted);
    assert_eq!(host.bound_surface(), Some(SurfaceHandle::new(5)));
    assert_eq!(backend.stats().contexts_created, 1);
    assert_eq!(backend.stats().documents_applied, 1);
}

#[test]
fn surface_attached_before_mount_is_used_by_mount() {
    let (backend, mut host) = host();
    assert_eq!(
        host.on_surface_attached(SurfaceHandle::new(2)).expect("attach"),
        MountOutcome::Deferred
    );
    assert_eq!(host.mount(None, document()).expect("mount"), MountOutcome::Mounted);
    assert_eq!(backend.stats().last_surface, Some(SurfaceHandle::new(2)));
}

#[test]
fn document_changes_reuse_the_existing_context() {
    let (backend, mut host) = host();
    host.mount(Some(SurfaceHandle::new(1)), document()).expect("mount");

    host.merge(OptionPatch::new().series(vec![
        SeriesPatch::values(vec![1.0, 2.0, 3.0]),
        SeriesPatch::keep(),
    ]))
    .expect("merge");
    host.on_document_change(document().with_zoom(ZoomWindow::new(0.0, 50.0).expect("zoom")))
        .expect("replace");

    let stats = backend.stats();
    assert_eq!(stats.contexts_created, 1);
    assert_eq!(stats.documents_applied, 3);
    assert_eq!(
        stats.last_document.map(|d| d.zoom),
        Some(ZoomWindow::new(0.0, 50.0).expect("zoom"))
    );
}

#[test]
fn same_surface_attach_is_noop_and_new_surface_recreates_context() {
    let (backend, mut host) = host();
    host.mount(Some(SurfaceHandle::new(1)), document()).expect("mount");

    host.on_surface_attached(SurfaceHandle::new(1)).expect("same handle");
    assert_eq!(backend.stats().contexts_created, 1);

    host.on_surface_attached(SurfaceHandle::new(2)).expect("new handle");
    let stats = backend.stats();
    assert_eq!(stats.contexts_created, 2);
    assert_eq!(stats.contexts_released, 1);
    assert_eq!(stats.live_contexts(), 1);
    assert_eq!(host.bound_surface(), Some(SurfaceHandle::new(2)));
}

#[test]
fn detach_releases_and_waits_for_next_attach() {
    let (backend, mut host) = host();
    host.mount(Some(SurfaceHandle::new(1)), document()).expect("mount");

    assert_eq!(host.on_surface_detached(), ReleaseOutcome::Released);
    assert_eq!(host.lifecycle(), HostLifecycle::AwaitingSurface);
    assert!(!host.is_bound());

    host.on_surface_attached(SurfaceHandle::new(4)).expect("reattach");
    assert_eq!(host.lifecycle(), HostLifecycle::Mounted);
    assert_eq!(backend.stats().live_contexts(), 1);
}

#[test]
fn unmount_releases_exactly_once() {
    let (backend, mut host) = host();
    host.mount(Some(SurfaceHandle::new(1)), document()).expect("mount");

    assert_eq!(host.unmount(), ReleaseOutcome::Released);
    assert_eq!(host.unmount(), ReleaseOutcome::AlreadyReleased);
    assert_eq!(host.lifecycle(), HostLifecycle::Unmounted);
    assert_eq!(backend.stats().contexts_released, 1);
    assert!(host.document().is_none());
}

#[test]
fn unmount_before_mount_completes_is_a_noop() {
    let (backend, mut host) = host();
    assert_eq!(host.unmount(), ReleaseOutcome::AlreadyReleased);

    host.mount(None, document()).expect("deferred");
    assert_eq!(host.unmount(), ReleaseOutcome::AlreadyReleased);
    assert_eq!(backend.stats().contexts_created, 0);
}

#[test]
fn mounting_twice_is_rejected() {
    let (backend, mut host) = host();
    host.mount(Some(SurfaceHandle::new(1)), document()).expect("mount");
    assert!(host.mount(Some(SurfaceHandle::new(2)), document()).is_err());
    assert_eq!(backend.stats().contexts_created, 1);
}

#[test]
fn invalid_initial_document_fails_mount_without_context() {
    let (backend, mut host) = host();
    let invalid = ChartOptionDocument::new(
        vec![AxisDefinition::category(["a"])],
        vec![SeriesDefinition::bar("A", vec![1.0])],
    );
    assert!(host.mount(Some(SurfaceHandle::new(1)), invalid).is_err());
    assert_eq!(host.lifecycle(), HostLifecycle::Unmounted);
    assert_eq!(backend.stats().contexts_created, 0);
}

#[test]
fn remount_after_unmount_creates_a_fresh_context() {
    let (backend, mut host) = host();
    host.mount(Some(SurfaceHandle::new(1)), document()).expect("mount");
    host.unmount();
    host.mount(Some(SurfaceHandle::new(1)), document()).expect("remount");
    let stats = backend.stats();
    assert_eq!(stats.contexts_created, 2);
    assert_eq!(stats.live_contexts(), 1);
}

#[test]
fn zoom_reset_from_a_disposed_mount_does_not_reach_the_next_one() {
    let (backend, mut host) = host();
    host.mount(None, document()).expect("deferred mount");
    host.request_zoom_reset().expect("reset while awaiting surface");
    assert!(host.is_zoom_reset_pending());
    host.unmount();
    assert!(!host.is_zoom_reset_pending());

    let zoomed = document().with_zoom(ZoomWindow::new(0.0, 10.0).expect("zoom"));
    host.mount(Some(SurfaceHandle::new(2)), zoomed).expect("mount");

    let applied = backend.stats().last_document.expect("applied document");
    assert_eq!(applied.zoom.end_percent(), 10.0);
    assert_eq!(host.document().map(|d| d.zoom.end_percent()), Some(10.0));
}
