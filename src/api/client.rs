use crate::config::Config;
use crate::error::AppError;
use crate::roster::champion::{Champion, ChampionId};
use governor::{Quota, RateLimiter, state::{InMemoryState, NotKeyed}, clock::{Clock, DefaultClock}};
use std::num::NonZeroU32;
use std::thread;
use std::time::Duration;
use tracing::{debug, info, warn};

use super::endpoints::{self, CHAMPIONS_ENDPOINT, RANDOMIZE_TEAMS_ENDPOINT, SELECTION_ENDPOINT};
use super::models::{parse_roster, SelectionRequest};
use super::RosterBackend;

const USER_AGENT: &str = concat!("champ_roster/", env!("CARGO_PKG_VERSION"));
const MAX_RETRIES: u32 = 3;
const RETRY_BACKOFF: Duration = Duration::from_millis(2000);

pub struct RosterApiClient {
    config: Config,
    rate_limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,
    retry_backoff: Duration,
}

impl RosterApiClient {
    pub fn new(config: Config) -> Self {
        let per_second = NonZeroU32::new(config.requests_per_second).unwrap_or(NonZeroU32::MIN);
        let rate_limiter = RateLimiter::direct(Quota::per_second(per_second));
        RosterApiClient {
            config,
            rate_limiter,
            retry_backoff: RETRY_BACKOFF,
        }
    }

    /// Base wait after a 429; the n-th retry waits n times this.
    pub fn with_retry_backoff(mut self, backoff: Duration) -> Self {
        self.retry_backoff = backoff;
        self
    }

    fn wait_for_slot(&self) {
        while let Err(not_until) = self.rate_limiter.check() {
            thread::sleep(not_until.wait_time_from(DefaultClock::default().now()));
        }
    }

    fn execute_request<F>(&self, url: &str, send: F) -> Result<String, AppError>
    where
        F: Fn() -> Result<ureq::Response, ureq::Error>,
    {
        let mut retry_count = 0;

        loop {
            self.wait_for_slot();
            debug!("Requesting {}", url);

            match send() {
                Ok(resp) => {
                    return resp.into_string().map_err(|e| {
                        AppError::HttpError(e.to_string())
                    });
                }
                Err(ureq::Error::Status(429, _)) => {
                    if retry_count >= MAX_RETRIES {
                        return Err(AppError::RateLimited);
                    }
                    let wait = self.retry_backoff * (retry_count + 1);
                    warn!("Rate limited on {}, waiting {}ms before retry", url, wait.as_millis());
                    thread::sleep(wait);
                    retry_count += 1;
                }
                Err(e) => {
                    return Err(AppError::HttpError(e.to_string()));
                }
            }
        }
    }
}

impl RosterBackend for RosterApiClient {
    fn fetch_roster(&self) -> Result<Vec<Champion>, AppError> {
        let url = endpoints::url(&self.config.api_url, CHAMPIONS_ENDPOINT);

        let body = self.execute_request(&url, || {
            ureq::get(&url).set("User-Agent", USER_AGENT).call()
        })?;
        let champions = parse_roster(&body).map_err(|e| {
            AppError::JsonError(e.to_string())
        })?;

        info!("Fetched {} champions from {}", champions.len(), url);
        Ok(champions)
    }

    fn notify_selection(&self, id: ChampionId) -> Result<(), AppError> {
        let url = endpoints::url(&self.config.api_url, SELECTION_ENDPOINT);
        let request = SelectionRequest { champion_id: id.0 };

        self.execute_request(&url, || {
            ureq::post(&url)
                .set("User-Agent", USER_AGENT)
                .send_json(&request)
        })?;
        Ok(())
    }

    fn notify_randomize_teams(&self) -> Result<(), AppError> {
        let url = endpoints::url(&self.config.api_url, RANDOMIZE_TEAMS_ENDPOINT);

        self.execute_request(&url, || {
            ureq::post(&url).set("User-Agent", USER_AGENT).call()
        })?;
        Ok(())
    }
}
