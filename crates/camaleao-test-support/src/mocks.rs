//! In-memory fakes for the UI ports.
//!
//! Every fake records what it was asked to do so suites can assert on
//! request counts and payloads. Scripted responses are consumed in order;
//! an exhausted script answers with a transport error.

use async_trait::async_trait;
use camaleao_api_models::{
    Credentials, DuplicateEnvelope, DuplicateRequest, LookupEnvelope, LookupRequest,
};
use camaleao_ui::core::auth::{Session, SignUpOutcome};
use camaleao_ui::core::error::ServiceError;
use camaleao_ui::core::ports::{
    AuthGateway, Clipboard, Clock, DuplicationService, LookupService, Notifier, TokenStore,
};
use camaleao_ui::models::{Notice, NoticeKind};
use chrono::{DateTime, TimeZone, Utc};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

type InFlightHook = Box<dyn Fn()>;

fn exhausted() -> ServiceError {
    ServiceError::Transport("no scripted response".to_string())
}

/// Scripted campaign lookup webhook.
#[derive(Default)]
pub struct FakeLookup {
    responses: RefCell<VecDeque<Result<LookupEnvelope, ServiceError>>>,
    requests: RefCell<Vec<LookupRequest>>,
    in_flight: Option<InFlightHook>,
}

impl FakeLookup {
    /// Fake answering with `responses` in order.
    #[must_use]
    pub fn scripted(responses: impl IntoIterator<Item = Result<LookupEnvelope, ServiceError>>) -> Self {
        Self {
            responses: RefCell::new(responses.into_iter().collect()),
            ..Self::default()
        }
    }

    /// Run `hook` while each request is in flight.
    #[must_use]
    pub fn with_in_flight(mut self, hook: impl Fn() + 'static) -> Self {
        self.in_flight = Some(Box::new(hook));
        self
    }

    /// Requests received so far.
    #[must_use]
    pub fn requests(&self) -> Vec<LookupRequest> {
        self.requests.borrow().clone()
    }

    /// Number of requests received.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.requests.borrow().len()
    }
}

#[async_trait(?Send)]
impl LookupService for FakeLookup {
    async fn lookup(&self, request: &LookupRequest) -> Result<LookupEnvelope, ServiceError> {
        self.requests.borrow_mut().push(request.clone());
        if let Some(hook) = &self.in_flight {
            hook();
        }
        self.responses.borrow_mut().pop_front().unwrap_or_else(|| Err(exhausted()))
    }
}

/// Scripted duplication webhook.
#[derive(Default)]
pub struct FakeDuplication {
    responses: RefCell<VecDeque<Result<DuplicateEnvelope, ServiceError>>>,
    requests: RefCell<Vec<DuplicateRequest>>,
    in_flight: Option<InFlightHook>,
}

impl FakeDuplication {
    /// Fake answering with `responses` in order.
    #[must_use]
    pub fn scripted(
        responses: impl IntoIterator<Item = Result<DuplicateEnvelope, ServiceError>>,
    ) -> Self {
        Self {
            responses: RefCell::new(responses.into_iter().collect()),
            ..Self::default()
        }
    }

    /// Run `hook` while each request is in flight.
    #[must_use]
    pub fn with_in_flight(mut self, hook: impl Fn() + 'static) -> Self {
        self.in_flight = Some(Box::new(hook));
        self
    }

    /// Requests received so far.
    #[must_use]
    pub fn requests(&self) -> Vec<DuplicateRequest> {
        self.requests.borrow().clone()
    }

    /// Number of requests received.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.requests.borrow().len()
    }
}

#[async_trait(?Send)]
impl DuplicationService for FakeDuplication {
    async fn duplicate(
        &self,
        request: &DuplicateRequest,
    ) -> Result<DuplicateEnvelope, ServiceError> {
        self.requests.borrow_mut().push(request.clone());
        if let Some(hook) = &self.in_flight {
            hook();
        }
        self.responses.borrow_mut().pop_front().unwrap_or_else(|| Err(exhausted()))
    }
}

/// Collects every notice instead of showing it.
#[derive(Default)]
pub struct RecordingNotifier {
    notices: RefCell<Vec<Notice>>,
}

impl RecordingNotifier {
    /// All notices, oldest first.
    #[must_use]
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.borrow().clone()
    }

    /// Kinds of all notices, oldest first.
    #[must_use]
    pub fn kinds(&self) -> Vec<NoticeKind> {
        self.notices.borrow().iter().map(|notice| notice.kind).collect()
    }

    /// Most recent notice.
    #[must_use]
    pub fn last(&self) -> Option<Notice> {
        self.notices.borrow().last().cloned()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.borrow_mut().push(notice);
    }
}

/// Clipboard that records writes or refuses them.
#[derive(Default)]
pub struct FakeClipboard {
    refuse: bool,
    writes: RefCell<Vec<String>>,
}

impl FakeClipboard {
    /// Clipboard whose writes always fail.
    #[must_use]
    pub fn refusing() -> Self {
        Self {
            refuse: true,
            ..Self::default()
        }
    }

    /// Text written so far.
    #[must_use]
    pub fn writes(&self) -> Vec<String> {
        self.writes.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Clipboard for FakeClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ServiceError> {
        if self.refuse {
            return Err(ServiceError::Rejected("permission denied".to_string()));
        }
        self.writes.borrow_mut().push(text.to_string());
        Ok(())
    }
}

/// Clock that only moves when told to.
pub struct ManualClock {
    now_ms: Cell<u64>,
}

impl ManualClock {
    /// Clock reading `start_ms` milliseconds after the epoch.
    #[must_use]
    pub const fn at(start_ms: u64) -> Self {
        Self {
            now_ms: Cell::new(start_ms),
        }
    }

    /// Move the clock forward.
    pub fn advance(&self, ms: u64) {
        self.now_ms.set(self.now_ms.get() + ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now_ms.get()
    }

    fn now_utc(&self) -> DateTime<Utc> {
        let millis = i64::try_from(self.now_ms.get()).unwrap_or(i64::MAX);
        Utc.timestamp_millis_opt(millis).single().unwrap_or_default()
    }
}

/// Profile store holding at most one token.
#[derive(Default)]
pub struct FakeTokenStore {
    stored: RefCell<Option<String>>,
    load_error: Option<ServiceError>,
    save_error: Option<ServiceError>,
    loads: Cell<usize>,
    writes: RefCell<Vec<String>>,
}

impl FakeTokenStore {
    /// Store already holding `token`.
    #[must_use]
    pub fn holding(token: &str) -> Self {
        Self {
            stored: RefCell::new(Some(token.to_string())),
            ..Self::default()
        }
    }

    /// Store whose reads fail with `error`.
    #[must_use]
    pub fn failing_loads(error: ServiceError) -> Self {
        Self {
            load_error: Some(error),
            ..Self::default()
        }
    }

    /// Store whose writes fail with `error`.
    #[must_use]
    pub fn failing_saves(error: ServiceError) -> Self {
        Self {
            save_error: Some(error),
            ..Self::default()
        }
    }

    /// Number of reads.
    #[must_use]
    pub fn loads(&self) -> usize {
        self.loads.get()
    }

    /// Tokens written so far.
    #[must_use]
    pub fn writes(&self) -> Vec<String> {
        self.writes.borrow().clone()
    }
}

#[async_trait(?Send)]
impl TokenStore for FakeTokenStore {
    async fn load_token(&self, _session: &Session) -> Result<Option<String>, ServiceError> {
        self.loads.set(self.loads.get() + 1);
        if let Some(error) = &self.load_error {
            return Err(error.clone());
        }
        self.stored.borrow().clone().map_or(Err(ServiceError::NotFound), |token| Ok(Some(token)))
    }

    async fn save_token(&self, _session: &Session, token: &str) -> Result<(), ServiceError> {
        self.writes.borrow_mut().push(token.to_string());
        if let Some(error) = &self.save_error {
            return Err(error.clone());
        }
        *self.stored.borrow_mut() = Some(token.to_string());
        Ok(())
    }
}

/// Identity service with fixed answers.
pub struct FakeAuth {
    sign_in: Result<Session, ServiceError>,
    sign_up: Result<SignUpOutcome, ServiceError>,
    calls: RefCell<Vec<Credentials>>,
}

impl FakeAuth {
    /// Fake answering sign-in and sign-up with the given results.
    #[must_use]
    pub fn new(
        sign_in: Result<Session, ServiceError>,
        sign_up: Result<SignUpOutcome, ServiceError>,
    ) -> Self {
        Self {
            sign_in,
            sign_up,
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Credentials received by sign-in and sign-up.
    #[must_use]
    pub fn calls(&self) -> Vec<Credentials> {
        self.calls.borrow().clone()
    }
}

#[async_trait(?Send)]
impl AuthGateway for FakeAuth {
    async fn sign_in(&self, credentials: &Credentials) -> Result<Session, ServiceError> {
        self.calls.borrow_mut().push(credentials.clone());
        self.sign_in.clone()
    }

    async fn sign_up(&self, credentials: &Credentials) -> Result<SignUpOutcome, ServiceError> {
        self.calls.borrow_mut().push(credentials.clone());
        self.sign_up.clone()
    }

    async fn sign_out(&self, _session: &Session) -> Result<(), ServiceError> {
        Ok(())
    }
}
