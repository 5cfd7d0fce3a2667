//! Simulated asynchronous workflows.
//!
//! Every "network call" in the product (login, form submission, bulk import)
//! is a timer: submitting registers a job with a fixed delay, and polling
//! reports `pending` until the deadline passes, then `success` with the
//! prepared result and a user-facing notification. There is no failure state.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use serde_json::Value;
use uuid::Uuid;

pub struct Job {
    pub kind: &'static str,
    submitted_at: Instant,
    delay: Duration,
    result: Value,
    notification: Value,
}

pub enum Phase<'a> {
    Pending { progress: u8 },
    Success { result: &'a Value, notification: &'a Value },
}

impl Job {
    pub fn phase_at(&self, now: Instant) -> Phase<'_> {
        let elapsed = now.saturating_duration_since(self.submitted_at);
        if elapsed >= self.delay {
            return Phase::Success {
                result: &self.result,
                notification: &self.notification,
            };
        }
        // delay > 0 on this branch; hold at 99 until the deadline flips it.
        let pct = (elapsed.as_millis() * 100 / self.delay.as_millis()) as u8;
        Phase::Pending {
            progress: pct.min(99),
        }
    }
}

#[derive(Default)]
pub struct Registry {
    jobs: HashMap<String, Job>,
}

impl Registry {
    pub fn submit(
        &mut self,
        kind: &'static str,
        delay: Duration,
        result: Value,
        notification: Value,
    ) -> String {
        self.submit_at(kind, delay, result, notification, Instant::now())
    }

    fn submit_at(
        &mut self,
        kind: &'static str,
        delay: Duration,
        result: Value,
        notification: Value,
        now: Instant,
    ) -> String {
        let id = Uuid::new_v4().to_string();
        self.jobs.insert(
            id.clone(),
            Job {
                kind,
                submitted_at: now,
                delay,
                result,
                notification,
            },
        );
        id
    }

    pub fn get(&self, id: &str) -> Option<&Job> {
        self.jobs.get(id)
    }
}
