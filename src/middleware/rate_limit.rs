use governor::{clock::QuantaInstant, middleware::NoOpMiddleware};
use std::{net::IpAddr, sync::Arc, time::Duration};
use tower_governor::{
    errors::GovernorError,
    governor::{GovernorConfig, GovernorConfigBuilder},
    key_extractor::KeyExtractor,
};

use axum::http::Request;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IpKeyExtractor;

impl KeyExtractor for IpKeyExtractor {
    type Key = IpAddr;

    fn extract<T>(&self, req: &Request<T>) -> Result<Self::Key, GovernorError> {
        let headers = req.headers();

        // 1. Check Cloudflare header first
        // If we're behind Cloudflare, the real IP is in 'cf-connecting-ip'.
        // We trust this because we assume the server only accepts traffic from CF.
        if let Some(ip) = headers
            .get("cf-connecting-ip")
            .and_then(|h| h.to_str().ok())
            .and_then(|s| s.parse::<IpAddr>().ok())
        {
            return Ok(ip);
        }

        // 2. Check X-Forwarded-For as backup
        // Standard proxy header. We take the first IP in the list as it's the client.
        if let Some(ip) = headers
            .get("x-forwarded-for")
            .and_then(|h| h.to_str().ok())
            .and_then(|s| s.split(',').next())
            .and_then(|s| s.trim().parse::<IpAddr>().ok())
        {
            return Ok(ip);
        }

        // 3. Fallback to localhost
        // Mostly for local dev where the headers are missing. In prod this puts
        // unknown IPs in one shared bucket, which beats rejecting them outright.
        Ok("127.0.0.1".parse().unwrap())
    }
}

// Type aliases for sanity
// Using NoOpMiddleware<QuantaInstant> because that's what the default builder gives us.
pub type LoginConfig = GovernorConfig<IpKeyExtractor, NoOpMiddleware<QuantaInstant>>;
pub type SignupConfig = GovernorConfig<IpKeyExtractor, NoOpMiddleware<QuantaInstant>>;

pub fn create_login_config() -> Arc<LoginConfig> {
    // 5 attempts per 15 minutes per IP.
    // Standard brute-force protection. Tight enough to annoy attackers, loose
    // enough for typos.
    Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(IpKeyExtractor)
            .period(Duration::from_secs(180)) // 180s * 5 = 15 mins
            .burst_size(5)
            .finish()
            .unwrap(),
    )
}

pub fn create_signup_config() -> Arc<SignupConfig> {
    // 10 signups per hour per IP. Nobody legitimately needs more accounts
    // than that in an hour.
    Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(IpKeyExtractor)
            .period(Duration::from_secs(360)) // 360s * 10 = 1 hour
            .burst_size(10)
            .finish()
            .unwrap(),
    )
}
