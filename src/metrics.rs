use lazy_static::lazy_static;
use prometheus::{
    Encoder, Histogram, IntCounterVec, TextEncoder, register_histogram, register_int_counter_vec,
};

lazy_static! {
    pub static ref REQUEST_TOTAL: IntCounterVec = register_int_counter_vec!(
        "relay_requests_total",
        "Total number of relayed requests",
        &["endpoint"]
    )
    .unwrap();
    pub static ref UPSTREAM_ERRORS: IntCounterVec = register_int_counter_vec!(
        "relay_upstream_errors_total",
        "Failed upstream calls by kind",
        &["kind"]
    )
    .unwrap();
    pub static ref REQUEST_LATENCY: Histogram = register_histogram!(
        "relay_request_latency_seconds",
        "Upstream round-trip latency in seconds",
        vec![0.5, 1.0, 2.5, 5.0, 10.0, 30.0, 60.0, 120.0, 300.0]
    )
    .unwrap();
}

// Text exposition of the default registry
pub fn render() -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let mut buffer = Vec::new();
    encoder.encode(&prometheus::gather(), &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
}
