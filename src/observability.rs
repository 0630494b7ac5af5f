use biometrics::{Collector, Counter, Moments};

pub(crate) static CLIENT_REQUESTS: Counter = Counter::new("sidekick.client.requests");
pub(crate) static CLIENT_REQUEST_ERRORS: Counter = Counter::new("sidekick.client.request_errors");
pub(crate) static CLIENT_REQUEST_DURATION: Moments =
    Moments::new("sidekick.client.request_duration_seconds");

pub(crate) static CHAT_TURNS: Counter = Counter::new("sidekick.session.chat_turns");
pub(crate) static CHAT_TURN_ERRORS: Counter = Counter::new("sidekick.session.chat_turn_errors");
pub(crate) static SUMMARIZE_REQUESTS: Counter = Counter::new("sidekick.session.summarize_requests");
pub(crate) static SUMMARIZE_ERRORS: Counter = Counter::new("sidekick.session.summarize_errors");

/// Register this crate's biometrics with the provided collector.
pub fn register_biometrics(collector: Collector) {
    collector.register_counter(&CLIENT_REQUESTS);
    collector.register_counter(&CLIENT_REQUEST_ERRORS);
    collector.register_moments(&CLIENT_REQUEST_DURATION);

    collector.register_counter(&CHAT_TURNS);
    collector.register_counter(&CHAT_TURN_ERRORS);
    collector.register_counter(&SUMMARIZE_REQUESTS);
    collector.register_counter(&SUMMARIZE_ERRORS);
}
