use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use std::time::Duration;
use tower_governor::governor::GovernorConfig;
use tower_governor::key_extractor::PeerIpKeyExtractor;

use crate::config::RateLimitingConfig;

pub type PeerGovernorConfig = GovernorConfig<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>>;

// The limiter keeps one entry per peer IP; evict stale ones periodically.
pub fn start_rate_limit_cleanup(conf: &Arc<PeerGovernorConfig>, config: &RateLimitingConfig) {
    let governor_limiter = conf.limiter().clone();
    let interval = Duration::from_secs(config.cleanup_interval_seconds.max(1));
    std::thread::spawn(move || {
        loop {
            std::thread::sleep(interval);
            tracing::debug!(tracked_peers = governor_limiter.len(), "Evicting stale rate limit entries");
            governor_limiter.retain_recent();
        }
    });
}
