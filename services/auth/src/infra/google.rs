use serde::Deserialize;

use crate::domain::repository::GoogleUserinfoPort;
use crate::domain::types::GoogleProfile;
use crate::error::AuthServiceError;

/// Wire shape of the Google userinfo response.
#[derive(Debug, Deserialize)]
struct UserinfoResponse {
    id: String,
    email: String,
    name: String,
    picture: Option<String>,
    #[serde(default)]
    verified_email: bool,
}

/// Google userinfo client over HTTP.
#[derive(Clone)]
pub struct HttpGoogleClient {
    http: reqwest::Client,
    userinfo_url: String,
}

impl HttpGoogleClient {
    pub fn new(http: reqwest::Client, userinfo_url: String) -> Self {
        Self { http, userinfo_url }
    }
}

impl GoogleUserinfoPort for HttpGoogleClient {
    async fn fetch(&self, bearer_token: &str) -> Result<GoogleProfile, AuthServiceError> {
        let response = self
            .http
            .get(&self.userinfo_url)
            .bearer_auth(bearer_token)
            .send()
            .await
            .map_err(|e| AuthServiceError::Internal(anyhow::anyhow!("userinfo request: {e}")))?;

        if response.status() == reqwest::StatusCode::UNAUTHORIZED
            || response.status() == reqwest::StatusCode::FORBIDDEN
        {
            return Err(AuthServiceError::GoogleRejected);
        }
        if !response.status().is_success() {
            return Err(AuthServiceError::Internal(anyhow::anyhow!(
                "userinfo returned {}",
                response.status()
            )));
        }

        let info: UserinfoResponse = response
            .json()
            .await
            .map_err(|e| AuthServiceError::Internal(anyhow::anyhow!("userinfo body: {e}")))?;

        Ok(GoogleProfile {
            id: info.id,
            email: info.email,
            name: info.name,
            picture: info.picture,
            verified_email: info.verified_email,
        })
    }
}
