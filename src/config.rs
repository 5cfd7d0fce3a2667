//! Runtime configuration, read once from the environment at startup.
//!
//! The only tunables are the simulated-workflow delays. Defaults mirror the
//! product's timers; `EDUMANAGERD_SIM_DELAY_MS` overrides all of them at
//! once (the test suite pins it to zero), and each workflow has its own
//! override on top of that.

use std::time::Duration;

const DEFAULT_LOGIN_DELAY_MS: u64 = 2000;
const DEFAULT_SUBMIT_DELAY_MS: u64 = 1000;
const DEFAULT_IMPORT_DELAY_MS: u64 = 1400;

#[derive(Debug, Clone, Copy)]
pub struct Config {
    pub login_delay_ms: u64,
    pub submit_delay_ms: u64,
    pub import_delay_ms: u64,
}

impl Config {
    pub fn from_env() -> Config {
        let global = env_ms("EDUMANAGERD_SIM_DELAY_MS");
        Config {
            login_delay_ms: resolve(
                env_ms("EDUMANAGERD_LOGIN_DELAY_MS"),
                global,
                DEFAULT_LOGIN_DELAY_MS,
            ),
            submit_delay_ms: resolve(
                env_ms("EDUMANAGERD_SUBMIT_DELAY_MS"),
                global,
                DEFAULT_SUBMIT_DELAY_MS,
            ),
            import_delay_ms: resolve(
                env_ms("EDUMANAGERD_IMPORT_DELAY_MS"),
                global,
                DEFAULT_IMPORT_DELAY_MS,
            ),
        }
    }

    pub fn login_delay(&self) -> Duration {
        Duration::from_millis(self.login_delay_ms)
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn import_delay(&self) -> Duration {
        Duration::from_millis(self.import_delay_ms)
    }
}

fn resolve(specific: Option<u64>, global: Option<u64>, default: u64) -> u64 {
    specific.or(global).unwrap_or(default)
}

fn env_ms(key: &str) -> Option<u64> {
    std::env::var(key).ok().and_then(|v| v.trim().parse().ok())
}
