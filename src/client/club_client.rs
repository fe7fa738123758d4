use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::constants::{CLUB_JOIN_PATH, USER_INFO_UPDATE_PATH};
use crate::error::{ClubError, ClubResult};
use crate::models::{ClubPage, UserPatch};
use crate::query::ClubListQuery;

pub struct ClubClient {
    client: reqwest::Client,
    base_url: String,
}

impl ClubClient {
    pub fn new(token: &str, base_url: String) -> ClubResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|_| ClubError::TokenError("token is not a valid header value".to_string()))?,
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: for<'de> Deserialize<'de>>(&self, url: &str) -> ClubResult<T> {
        let response = self.client.get(url).send().await?;
        Self::check_status(url, response).await
    }

    async fn post_json<T: for<'de> Deserialize<'de>>(
        &self,
        url: &str,
        body: &Value,
    ) -> ClubResult<T> {
        let response = self.client.post(url).json(body).send().await?;
        Self::check_status(url, response).await
    }

    async fn check_status<T: for<'de> Deserialize<'de>>(
        url: &str,
        response: reqwest::Response,
    ) -> ClubResult<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClubError::ApiError(format!(
                "{} returned {}: {}",
                url, status, body
            )));
        }
        Ok(response.json().await?)
    }

    /// Fetch one page of the club listing for the given query.
    pub async fn list_clubs(&self, query: &ClubListQuery) -> ClubResult<ClubPage> {
        let url = query.url(&self.base_url);
        self.get_json(&url).await
    }

    /// Request membership in a club. The backend decides acceptance; the
    /// client only reports that the request was submitted.
    pub async fn join_club(&self, club_id: &str) -> ClubResult<()> {
        let url = format!("{}{}", self.base_url.trim_end_matches('/'), CLUB_JOIN_PATH);
        let body = json!({ "clubId": club_id });

        #[derive(Debug, Deserialize)]
        struct JoinResponse {
            success: bool,
        }

        let data: JoinResponse = self.post_json(&url, &body).await?;
        if !data.success {
            return Err(ClubError::ApiError(format!(
                "join request for club {} was rejected",
                club_id
            )));
        }
        Ok(())
    }

    /// Submit updated profile fields. Only the provided fields are sent;
    /// the response carries whichever fields the backend changed.
    pub async fn update_user_info(
        &self,
        name: Option<&str>,
        email: Option<&str>,
        image: Option<&str>,
    ) -> ClubResult<UserPatch> {
        let url = format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            USER_INFO_UPDATE_PATH
        );

        let mut input = json!({});
        if let Some(name) = name {
            input["name"] = json!(name);
        }
        if let Some(email) = email {
            input["email"] = json!(email);
        }
        if let Some(image) = image {
            input["image"] = json!(image);
        }

        #[derive(Debug, Deserialize)]
        struct UpdateResponse {
            data: UserPatch,
        }

        let data: UpdateResponse = self.post_json(&url, &input).await?;
        Ok(data.data)
    }
}
