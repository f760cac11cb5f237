use std::net::SocketAddr;

use crate::engine::EngineError;

// ── RED metrics (request-driven) ────────────────────────────────

/// Counter: participants registered.
pub const PARTICIPANTS_REGISTERED_TOTAL: &str = "huddle_participants_registered_total";

/// Counter: interviews booked.
pub const BOOKINGS_TOTAL: &str = "huddle_bookings_total";

/// Counter: rejected booking and reschedule attempts. Labels: reason.
pub const BOOKING_FAILURES_TOTAL: &str = "huddle_booking_failures_total";

/// Counter: interviews cancelled.
pub const CANCELLATIONS_TOTAL: &str = "huddle_cancellations_total";

/// Counter: interviews moved to a new slot.
pub const RESCHEDULES_TOTAL: &str = "huddle_reschedules_total";

/// Install Prometheus metrics exporter on the given port. No-op if port is None.
pub fn init(port: Option<u16>) {
    let Some(port) = port else { return };
    let addr: SocketAddr = ([0, 0, 0, 0], port).into();
    metrics_exporter_prometheus::PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .expect("failed to install Prometheus metrics exporter");
    tracing::info!("metrics endpoint: http://0.0.0.0:{port}/metrics");
}

/// Map a rejection to a short label for metrics.
pub fn failure_label(err: &EngineError) -> &'static str {
    match err {
        EngineError::UnknownParticipant(_) => "unknown_participant",
        EngineError::RoleMismatch { .. } => "role_mismatch",
        EngineError::NotAvailable(_) => "not_available",
        EngineError::SlotConflict { .. } => "slot_conflict",
        EngineError::UnknownInterview(_) => "unknown_interview",
        EngineError::InterviewNotActive(_) => "interview_not_active",
    }
}
