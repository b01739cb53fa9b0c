//! Yahoo session bootstrap: a consent cookie, then a crumb issued for that cookie.

use crate::core::{PulseError, net};
use reqwest::header::{COOKIE, SET_COOKIE};

impl super::PulseClient {
    /// Bootstraps the Yahoo session unless a crumb is already held.
    ///
    /// Concurrent callers share one bootstrap.
    pub(crate) async fn ensure_credentials(&self) -> Result<(), PulseError> {
        if self.has_crumb().await {
            return Ok(());
        }

        let _bootstrap = self.credential_fetch_lock.lock().await;
        // The task holding the lock before us may have finished the job.
        if self.has_crumb().await {
            return Ok(());
        }

        let stored = self.state.read().await.cookie.clone();
        let cookie = match stored {
            Some(c) => c,
            None => self.fetch_consent_cookie().await?,
        };
        let crumb = self.fetch_crumb(&cookie).await?;

        let mut state = self.state.write().await;
        state.cookie = Some(cookie);
        state.crumb = Some(crumb);
        Ok(())
    }

    pub(crate) async fn clear_crumb(&self) {
        self.state.write().await.crumb = None;
    }

    pub(crate) async fn crumb(&self) -> Option<String> {
        self.state.read().await.crumb.clone()
    }

    async fn has_crumb(&self) -> bool {
        self.state.read().await.crumb.is_some()
    }

    /// Returns the `name=value` pair of the consent cookie.
    async fn fetch_consent_cookie(&self) -> Result<String, PulseError> {
        let resp = self.http.get(self.cookie_url.clone()).send().await?;
        let header = resp
            .headers()
            .get(SET_COOKIE)
            .ok_or_else(|| PulseError::Auth(format!("no Set-Cookie from {}", self.cookie_url)))?
            .to_str()
            .map_err(|_| PulseError::Auth("consent cookie is not valid header text".into()))?;
        cookie_pair(header)
    }

    async fn fetch_crumb(&self, cookie: &str) -> Result<String, PulseError> {
        let resp = self
            .http
            .get(self.crumb_url.clone())
            .header(COOKIE, cookie)
            .send()
            .await?;
        let body = net::ensure_success(resp)?.text().await?;
        parse_crumb(&body)
    }
}

fn cookie_pair(set_cookie: &str) -> Result<String, PulseError> {
    set_cookie
        .split(';')
        .next()
        .map(str::trim)
        .filter(|pair| pair.contains('='))
        .map(str::to_string)
        .ok_or_else(|| PulseError::Auth(format!("malformed consent cookie: {set_cookie}")))
}

fn parse_crumb(body: &str) -> Result<String, PulseError> {
    let crumb = body.trim();
    // An HTML page or JSON error instead of a bare token means the cookie was refused.
    if crumb.is_empty() || crumb.contains(['{', '<']) {
        return Err(PulseError::Auth(format!("crumb endpoint returned {crumb:?}")));
    }
    Ok(crumb.to_string())
}
