use std::sync::Mutex;
use std::time::Instant;

use once_cell::sync::Lazy;
use opentelemetry::{KeyValue, trace::TracerProvider as _};
use opentelemetry_otlp::{Protocol, WithExportConfig, WithTonicConfig};
use opentelemetry_sdk::{
    Resource,
    trace::{RandomIdGenerator, Sampler, SdkTracerProvider},
};
use opentelemetry_semantic_conventions::{
    SCHEMA_URL,
    attribute::{SERVICE_NAME, SERVICE_VERSION},
    resource::DEPLOYMENT_ENVIRONMENT_NAME,
};
use rocket::{
    Data, Request, Response,
    fairing::{Fairing, Info, Kind},
};
use tonic::metadata::{MetadataMap, MetadataValue};
use tracing::{Span, info_span};
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

const DEFAULT_OTLP_ENDPOINT: &str = "https://api.honeycomb.io:443";
const DEFAULT_LOG_FILTER: &str = "info";

static TELEMETRY_GUARD: Lazy<Mutex<Option<OtelGuard>>> = Lazy::new(|| Mutex::new(None));

/// Where traces go, read from the environment once at startup.
struct ExportSettings {
    api_key: String,
    endpoint: String,
    environment: String,
}

impl ExportSettings {
    /// `None` when `HONEYCOMB_API_KEY` is unset: logs go to stdout only.
    fn from_env() -> Option<Self> {
        let api_key = dotenvy::var("HONEYCOMB_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())?;

        Some(Self {
            api_key,
            endpoint: dotenvy::var("OTEL_EXPORTER_OTLP_ENDPOINT")
                .unwrap_or(DEFAULT_OTLP_ENDPOINT.to_string()),
            environment: dotenvy::var("ROCKET_PROFILE").unwrap_or("development".to_string()),
        })
    }

    fn resource(&self) -> Resource {
        Resource::builder()
            .with_schema_url(
                [
                    KeyValue::new(SERVICE_NAME, env!("CARGO_PKG_NAME")),
                    KeyValue::new(SERVICE_VERSION, env!("CARGO_PKG_VERSION")),
                    KeyValue::new(DEPLOYMENT_ENVIRONMENT_NAME, self.environment.clone()),
                ],
                SCHEMA_URL,
            )
            .build()
    }

    fn tracer_provider(&self) -> anyhow::Result<SdkTracerProvider> {
        let mut metadata = MetadataMap::new();
        metadata.insert("x-honeycomb-team", MetadataValue::try_from(self.api_key.as_str())?);

        let exporter = opentelemetry_otlp::SpanExporter::builder()
            .with_tonic()
            .with_endpoint(self.endpoint.clone())
            .with_tls_config(tonic::transport::ClientTlsConfig::new().with_native_roots())
            .with_protocol(Protocol::Grpc)
            .with_metadata(metadata)
            .build()?;

        Ok(SdkTracerProvider::builder()
            .with_sampler(Sampler::AlwaysOn)
            .with_id_generator(RandomIdGenerator::default())
            .with_resource(self.resource())
            .with_batch_exporter(exporter)
            .build())
    }
}

/// Opens one span per request and logs its outcome when the response leaves.
pub struct TelemetryFairing;

struct RequestTrace {
    span: Span,
    started: Instant,
}

#[rocket::async_trait]
impl Fairing for TelemetryFairing {
    fn info(&self) -> Info {
        Info {
            name: "Request tracing",
            kind: Kind::Request | Kind::Response,
        }
    }

    async fn on_request(&self, request: &mut Request<'_>, _: &mut Data<'_>) {
        let method = request.method().to_string();
        let path = request.uri().path().to_string();
        let division = request
            .query_value::<&str>("division")
            .and_then(Result::ok)
            .map(str::to_string);

        let span = info_span!(
            "http_request",
            otel.name = format!("{} {}", method, path),
            http.method = %method,
            http.uri = %request.uri(),
            http.status_code = tracing::field::Empty,
            http.duration_ms = tracing::field::Empty,
            pr_division = division,
            request_id = %Uuid::new_v4(),
        );

        request.local_cache(|| RequestTrace {
            span,
            started: Instant::now(),
        });
    }

    async fn on_response<'r>(&self, request: &'r Request<'_>, response: &mut Response<'r>) {
        let trace = request.local_cache(|| RequestTrace {
            span: info_span!("http_request"),
            started: Instant::now(),
        });

        let elapsed_ms = trace.started.elapsed().as_millis() as u64;
        let status = response.status().code;
        let route = request.route().and_then(|route| route.name.as_deref());

        trace.span.record("http.status_code", status);
        trace.span.record("http.duration_ms", elapsed_ms);

        let _entered = trace.span.enter();
        tracing::info!(
            route = route.unwrap_or("unmatched"),
            "Served {} in {}ms",
            status,
            elapsed_ms
        );
    }
}

struct OtelGuard {
    tracer_provider: SdkTracerProvider,
}

impl Drop for OtelGuard {
    fn drop(&mut self) {
        if let Err(err) = self.tracer_provider.shutdown() {
            eprintln!("Failed to shut down tracer provider: {:?}", err);
        }
    }
}

/// Installs the global subscriber: env-filtered `fmt` output, plus an OTLP
/// exporter when `HONEYCOMB_API_KEY` is set.
pub fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let tracer_provider = ExportSettings::from_env().and_then(|settings| {
        settings
            .tracer_provider()
            .map_err(|err| eprintln!("Trace export disabled, exporter failed to start: {err:#}"))
            .ok()
    });

    let otel_layer = tracer_provider
        .as_ref()
        .map(|provider| OpenTelemetryLayer::new(provider.tracer(env!("CARGO_PKG_NAME"))));

    if let Err(err) = tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .with(otel_layer)
        .try_init()
    {
        eprintln!("Tracing subscriber already installed: {err}");
        return;
    }

    if let (Some(tracer_provider), Ok(mut guard)) = (tracer_provider, TELEMETRY_GUARD.lock()) {
        *guard = Some(OtelGuard { tracer_provider });
    }
}

/// Flushes pending spans. Safe to call when no exporter was installed.
pub fn shutdown_telemetry() {
    let guard = TELEMETRY_GUARD.lock().ok().and_then(|mut slot| slot.take());
    if guard.is_some() {
        tracing::info!("Flushing trace exporter");
    }
    drop(guard);
}
