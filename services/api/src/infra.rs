use metrics_exporter_prometheus::PrometheusHandle;
use std::str::FromStr;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use unri::influence::InputError;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// clap value parser for questionnaire answers given by their wire names.
pub(crate) fn parse_answer<T>(raw: &str) -> Result<T, String>
where
    T: FromStr<Err = InputError>,
{
    raw.parse::<T>().map_err(|err| err.to_string())
}
