//! Session controller
//!
//! One kiosk session: screen state machine, cart, identity, transcript.
//! Every mutation funnels through a named operation here so the detection
//! task and the display layer never race on ad-hoc state. The detector
//! runs only while the session sits on the home screen; the controller
//! starts and cancels it on every transition.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::cart::{CartLedger, CartSummary};
use crate::catalog::Catalog;
use crate::chatbot::{self, BotReply, Transcript};
use crate::config::Config;
use crate::detection::{self, DetectionSimulator, DetectorHandle};
use crate::navigation::{self, RouteGuidance};
use crate::payment::{PaymentMethod, TransactionRecord};
use shared::i18n::Language;
use shared::models::purchase::{sample_history, PurchaseRecord};
use shared::models::{validate_otp, validate_phone, CartLine, CatalogItem, UserIdentity};
use shared::KioskError;

/// Kiosk screens, one active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Screen {
    Login,
    Home,
    Search,
    Navigation,
    Comparison,
    ScannedCart,
    Scanner,
    Payment,
    Success,
}

impl Screen {
    pub fn as_str(&self) -> &'static str {
        match self {
            Screen::Login => "LOGIN",
            Screen::Home => "HOME",
            Screen::Search => "SEARCH",
            Screen::Navigation => "NAVIGATION",
            Screen::Comparison => "COMPARISON",
            Screen::ScannedCart => "SCANNED_CART",
            Screen::Scanner => "SCANNER",
            Screen::Payment => "PAYMENT",
            Screen::Success => "SUCCESS",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mutable per-session state, shared with the detection task.
#[derive(Debug)]
pub struct SessionState {
    pub screen: Screen,
    pub cart: CartLedger,
    /// Navigation target chosen from search, comparison, or the assistant.
    pub selected_item: Option<CatalogItem>,
    pub user: UserIdentity,
    pub transcript: Transcript,
    pub language: Language,
}

impl SessionState {
    fn new(language: Language) -> Self {
        Self {
            screen: Screen::Login,
            cart: CartLedger::new(),
            selected_item: None,
            user: UserIdentity::Guest,
            transcript: Transcript::new(),
            language,
        }
    }
}

pub type SharedState = Arc<Mutex<SessionState>>;

/// Lock the session state, recovering the data from a poisoned lock.
pub(crate) fn lock_state(state: &SharedState) -> MutexGuard<'_, SessionState> {
    state.lock().unwrap_or_else(|e| e.into_inner())
}

/// Drives one kiosk session end to end.
pub struct SessionController {
    state: SharedState,
    catalog: Arc<Catalog>,
    config: Config,
    detector: Option<DetectorHandle>,
    rng: StdRng,
}

impl SessionController {
    pub fn new(catalog: Catalog, config: Config) -> Self {
        let rng = match config.detection_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            state: Arc::new(Mutex::new(SessionState::new(config.language))),
            catalog: Arc::new(catalog),
            config,
            detector: None,
            rng,
        }
    }

    /// Shared handle for observers (and the detection task).
    pub fn state(&self) -> SharedState {
        Arc::clone(&self.state)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn screen(&self) -> Screen {
        lock_state(&self.state).screen
    }

    pub fn cart_summary(&self) -> CartSummary {
        lock_state(&self.state).cart.summary()
    }

    // ========================================================================
    // Login / identity
    // ========================================================================

    pub fn login_guest(&mut self) {
        lock_state(&self.state).user = UserIdentity::Guest;
        tracing::info!("guest session started");
        self.goto(Screen::Home);
    }

    /// Phone login: number and verification code are both checked at this
    /// boundary. The OTP itself is not verified against anything; the demo
    /// accepts any well-formed code.
    pub fn login_phone(&mut self, number: &str, otp: &str) -> Result<(), KioskError> {
        validate_phone(number)?;
        validate_otp(otp)?;
        lock_state(&self.state).user = UserIdentity::PhoneVerified {
            phone_number: number.trim().to_string(),
        };
        tracing::info!("phone session started");
        self.goto(Screen::Home);
        Ok(())
    }

    pub fn register(&mut self, number: &str, full_name: &str) -> Result<(), KioskError> {
        validate_phone(number)?;
        lock_state(&self.state).user = UserIdentity::Registered {
            phone_number: number.trim().to_string(),
            full_name: full_name.trim().to_string(),
        };
        tracing::info!("registered session started");
        self.goto(Screen::Home);
        Ok(())
    }

    // ========================================================================
    // Screen transitions
    // ========================================================================

    /// Move to `screen`, starting or stopping the detection simulator as
    /// the home screen is entered or left.
    pub fn goto(&mut self, screen: Screen) {
        let previous = {
            let mut state = lock_state(&self.state);
            let previous = state.screen;
            state.screen = screen;
            previous
        };
        if previous != screen {
            tracing::debug!(from = %previous, to = %screen, "screen transition");
        }

        if screen == Screen::Home {
            self.start_detector();
        } else {
            self.stop_detector();
        }
    }

    fn start_detector(&mut self) {
        if !self.config.auto_detect || self.detector.is_some() {
            return;
        }
        // Detection needs a runtime; synchronous callers simply go without.
        if tokio::runtime::Handle::try_current().is_err() {
            return;
        }
        self.detector = Some(DetectionSimulator::spawn(
            self.state(),
            Arc::clone(&self.catalog),
            self.config.detector_config(),
            self.config.detection_seed,
        ));
    }

    fn stop_detector(&mut self) {
        if let Some(handle) = self.detector.take() {
            handle.cancel();
        }
    }

    /// Tear the session down, waiting for any running detector task to
    /// finish. Dropping the controller also cancels the task but does
    /// not wait for it.
    pub async fn shutdown(mut self) {
        if let Some(handle) = self.detector.take() {
            handle.shutdown().await;
        }
    }

    // ========================================================================
    // Shopping
    // ========================================================================

    /// Pick a navigation target and show the route to it.
    pub fn select_item(&mut self, id: &str) -> Option<RouteGuidance> {
        let item = self.catalog.get(id)?.clone();
        let guidance = navigation::guidance_for(&item.aisle);
        lock_state(&self.state).selected_item = Some(item);
        self.goto(Screen::Navigation);
        Some(guidance)
    }

    /// Manual detection button: one random item straight into the cart.
    pub fn simulate_scan(&mut self) -> Option<CartLine> {
        let weight_range = self.config.detector_config().weight_range;
        let mut state = lock_state(&self.state);
        let line =
            detection::scan_random(&mut state.cart, &self.catalog, &mut self.rng, weight_range);
        if let Some(line) = &line {
            tracing::info!(id = %line.id(), name = %line.item.name, "manual scan added item");
        }
        line
    }

    /// Barcode entry on the scanner screen. Unknown codes are a tolerated
    /// miss, not an error.
    pub fn scan_barcode(&mut self, code: &str) -> Option<CartLine> {
        let mut state = lock_state(&self.state);
        let line = detection::scan_barcode(&mut state.cart, &self.catalog, code);
        match &line {
            Some(line) => {
                tracing::info!(id = %line.id(), barcode = code, "barcode scan added item")
            }
            None => tracing::warn!(barcode = code, "barcode not recognized"),
        }
        line
    }

    pub fn update_quantity(&mut self, id: &str, quantity: u32) -> Result<(), KioskError> {
        lock_state(&self.state).cart.set_quantity(id, quantity)
    }

    pub fn remove_item(&mut self, id: &str) {
        lock_state(&self.state).cart.remove(id);
    }

    // ========================================================================
    // Checkout
    // ========================================================================

    /// Enter the payment screen. The only user-visible refusal in the
    /// flow: an empty cart cannot check out.
    pub fn proceed_to_payment(&mut self) -> Result<(), KioskError> {
        if lock_state(&self.state).cart.is_empty() {
            return Err(KioskError::EmptyCart);
        }
        self.goto(Screen::Payment);
        Ok(())
    }

    /// Settle the bill and move to the success screen.
    pub fn confirm_payment(
        &mut self,
        method: PaymentMethod,
    ) -> Result<TransactionRecord, KioskError> {
        let record = {
            let state = lock_state(&self.state);
            if state.screen != Screen::Payment {
                return Err(KioskError::screen_mismatch(
                    Screen::Payment.as_str(),
                    state.screen.as_str(),
                ));
            }
            TransactionRecord::build(&state.cart, method)?
        };
        self.goto(Screen::Success);
        Ok(record)
    }

    /// Leave the store after a successful payment. Full session reset.
    pub fn exit_after_payment(&mut self) {
        self.reset();
    }

    pub fn logout(&mut self) {
        tracing::info!("session logged out");
        self.reset();
    }

    fn reset(&mut self) {
        self.stop_detector();
        let mut state = lock_state(&self.state);
        state.cart.clear();
        state.selected_item = None;
        state.user = UserIdentity::Guest;
        state.transcript.clear();
        state.screen = Screen::Login;
    }

    // ========================================================================
    // Assistant / language
    // ========================================================================

    /// Append a user message, compute the reply, append it, return it.
    pub fn send_chat(&mut self, text: &str) -> BotReply {
        let reply = chatbot::respond(&self.catalog, text);
        let mut state = lock_state(&self.state);
        state.transcript.push_user(text);
        state.transcript.push_bot(reply.clone());
        reply
    }

    pub fn set_language(&mut self, language: Language) {
        lock_state(&self.state).language = language;
    }

    /// Past purchases for the profile screen. Guests have none.
    pub fn purchase_history(&self) -> Vec<PurchaseRecord> {
        match lock_state(&self.state).user {
            UserIdentity::Guest => Vec::new(),
            _ => sample_history(),
        }
    }
}

impl Drop for SessionController {
    fn drop(&mut self) {
        self.stop_detector();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::money::format_rm;

    fn controller() -> SessionController {
        let config = Config {
            auto_detect: false,
            detection_seed: Some(99),
            ..Config::default()
        };
        SessionController::new(Catalog::load(), config)
    }

    #[test]
    fn test_guest_login_reaches_home() {
        let mut session = controller();
        assert_eq!(session.screen(), Screen::Login);
        session.login_guest();
        assert_eq!(session.screen(), Screen::Home);
    }

    #[test]
    fn test_phone_login_validates_at_the_boundary() {
        let mut session = controller();

        let err = session.login_phone("12345", "123456").unwrap_err();
        assert!(matches!(err, KioskError::InvalidPhoneNumber(_)));
        assert_eq!(session.screen(), Screen::Login);

        let err = session.login_phone("0123456789", "12ab56").unwrap_err();
        assert!(matches!(err, KioskError::InvalidOtp(_)));
        assert_eq!(session.screen(), Screen::Login);

        session.login_phone("0123456789", "123456").unwrap();
        assert_eq!(session.screen(), Screen::Home);
        let state = session.state();
        let state = lock_state(&state);
        assert_eq!(state.user.phone_number(), Some("0123456789"));
    }

    #[test]
    fn test_simulate_scan_and_totals() {
        let mut session = controller();
        session.login_guest();

        let line = session.simulate_scan().unwrap();
        assert_eq!(line.quantity, 1);
        assert!(line.weight.is_some());

        let summary = session.cart_summary();
        assert_eq!(summary.lines, 1);
        assert_eq!(
            format_rm(summary.total),
            format_rm(summary.subtotal + summary.tax)
        );
    }

    #[test]
    fn test_empty_cart_cannot_reach_payment() {
        let mut session = controller();
        session.login_guest();

        let err = session.proceed_to_payment().unwrap_err();
        assert!(matches!(err, KioskError::EmptyCart));
        assert_eq!(session.screen(), Screen::Home);
    }

    #[test]
    fn test_confirm_payment_requires_payment_screen() {
        let mut session = controller();
        session.login_guest();
        session.simulate_scan();

        let err = session.confirm_payment(PaymentMethod::Cash).unwrap_err();
        assert!(matches!(err, KioskError::ScreenMismatch { .. }));
    }

    #[test]
    fn test_full_checkout_flow_resets_session() {
        let mut session = controller();
        session.login_guest();
        session.simulate_scan();
        session.scan_barcode("8234567890123").unwrap();

        session.proceed_to_payment().unwrap();
        assert_eq!(session.screen(), Screen::Payment);

        let record = session.confirm_payment(PaymentMethod::Card).unwrap();
        assert_eq!(session.screen(), Screen::Success);
        assert_eq!(record.payment_method, "CARD");
        assert!(!record.items.is_empty());

        session.exit_after_payment();
        assert_eq!(session.screen(), Screen::Login);
        assert_eq!(session.cart_summary().lines, 0);
        let state = session.state();
        let state = lock_state(&state);
        assert_eq!(state.user, UserIdentity::Guest);
        assert_eq!(state.transcript.messages().len(), 1);
    }

    #[test]
    fn test_select_item_navigates_with_guidance() {
        let mut session = controller();
        session.login_guest();

        let guidance = session.select_item("6").unwrap();
        assert_eq!(session.screen(), Screen::Navigation);
        assert_eq!(guidance.distance_m, 25);

        assert!(session.select_item("no-such-id").is_none());
    }

    #[test]
    fn test_purchase_history_is_member_only() {
        let mut session = controller();
        session.login_guest();
        assert!(session.purchase_history().is_empty());

        session.login_phone("0123456789", "123456").unwrap();
        let history = session.purchase_history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].points_earned, 45);
    }

    #[test]
    fn test_send_chat_appends_both_sides() {
        let mut session = controller();
        session.login_guest();

        let reply = session.send_chat("payment help");
        assert!(reply.text.starts_with("For payment issues:"));

        let state = session.state();
        let state = lock_state(&state);
        // greeting + user + bot
        assert_eq!(state.transcript.messages().len(), 3);
    }
}
