#![allow(dead_code)]

use std::io::Cursor;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use salary_assistant::{
    catalog,
    cli::{App, ScriptInteraction},
    currency::LocaleConfig,
    errors::TransportError,
    form::FormState,
    navigation::{MemoryHistory, NavigationController},
    storage::{MemoryStore, SessionStore},
    submission::{HealthStatus, PredictResponse, Transport},
};

/// Transport that replays canned responses and records every request.
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<Vec<Result<PredictResponse, TransportError>>>,
    requests: Mutex<Vec<FormState>>,
}

impl MockTransport {
    pub fn new(responses: Vec<Result<PredictResponse, TransportError>>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn requests(&self) -> Vec<FormState> {
        self.requests.lock().expect("requests lock").clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn predict(&self, form: &FormState) -> Result<PredictResponse, TransportError> {
        self.requests.lock().expect("requests lock").push(form.clone());
        let mut responses = self.responses.lock().expect("responses lock");
        if responses.is_empty() {
            Err(TransportError::Status(503))
        } else {
            responses.remove(0)
        }
    }

    async fn health(&self) -> Result<HealthStatus, TransportError> {
        Ok(HealthStatus {
            status: "healthy".into(),
            message: "API is running".into(),
            model: "loaded".into(),
            preprocessor: "loaded".into(),
        })
    }
}

pub fn prediction(salary: f64, currency: &str, period: &str) -> PredictResponse {
    PredictResponse {
        success: true,
        predicted_salary: Some(salary),
        currency: Some(currency.into()),
        period: Some(period.into()),
        ..PredictResponse::default()
    }
}

pub fn rejection(reason: &str) -> PredictResponse {
    PredictResponse {
        success: false,
        error: Some(reason.into()),
        ..PredictResponse::default()
    }
}

/// Script lines selecting the first allowed value of every field.
pub fn fill_all_fields() -> String {
    catalog::definitions()
        .iter()
        .map(|definition| {
            format!(
                "set {} \"{}\"\n",
                definition.key, definition.allowed_values[0].value
            )
        })
        .collect()
}

pub struct FlowRun {
    pub output: String,
    pub final_path: String,
    pub requests: Vec<FormState>,
}

/// Runs the application over a script on a current-thread runtime.
pub fn run_flow(
    start_path: &str,
    script: &str,
    transport: Arc<MockTransport>,
    store: Arc<dyn SessionStore>,
) -> FlowRun {
    let (output, final_path) = run_script(start_path, script, transport.clone(), store);
    FlowRun {
        output,
        final_path,
        requests: transport.requests(),
    }
}

/// Drives the app with any transport and returns `(output, final_path)`.
pub fn run_script(
    start_path: &str,
    script: &str,
    transport: Arc<dyn Transport>,
    store: Arc<dyn SessionStore>,
) -> (String, String) {
    use salary_assistant::navigation::Location;

    let interaction = ScriptInteraction::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
    let mut app = App::new(
        NavigationController::new(MemoryHistory::new(start_path)),
        interaction,
        transport,
        store,
        LocaleConfig::default(),
    );
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("build runtime");
    runtime.block_on(app.run()).expect("app run");

    let final_path = app.navigation().location().current_path();
    let output = String::from_utf8(app.into_interaction().into_output()).expect("utf8 output");
    (output, final_path)
}

pub fn memory_store() -> Arc<dyn SessionStore> {
    Arc::new(MemoryStore::new())
}
