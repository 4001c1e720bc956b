use std::fmt::Display;
use std::str::FromStr;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct Config {
    /// How many days after the event date the first post-event reminder
    /// should be sent to the organizer
    pub post_event_reminder_initial_delay_days: i64,
    /// Duration in millis between follow-up reminders when the organizer
    /// keeps ignoring them
    pub post_event_reminder_follow_up_interval: i64,
    /// How many reminders an organizer receives at most for one event
    pub post_event_reminder_max_follow_up_attempts: u32,
    /// Where outgoing email payloads are POSTed. When not set, emails
    /// are kept in memory instead of being delivered.
    pub mail_gateway_url: Option<String>,
}

impl Config {
    pub fn new() -> Self {
        Self {
            post_event_reminder_initial_delay_days: parse_env_var(
                "POST_EVENT_REMINDER_INITIAL_DELAY_DAYS",
                2,
            ),
            post_event_reminder_follow_up_interval: parse_env_var(
                "POST_EVENT_REMINDER_FOLLOW_UP_INTERVAL_MILLIS",
                1000 * 60 * 60 * 24, // 24 hours
            ),
            post_event_reminder_max_follow_up_attempts: parse_env_var(
                "POST_EVENT_REMINDER_MAX_FOLLOW_UP_ATTEMPTS",
                7,
            ),
            mail_gateway_url: std::env::var("MAIL_GATEWAY_URL").ok(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_env_var<T: FromStr + Display>(var_name: &str, default: T) -> T {
    match std::env::var(var_name) {
        Err(_) => default,
        Ok(raw) => match raw.parse::<T>() {
            Ok(value) => value,
            Err(_) => {
                warn!(
                    "The given {}: {} is not valid, falling back to the default: {}.",
                    var_name, raw, default
                );
                default
            }
        },
    }
}
