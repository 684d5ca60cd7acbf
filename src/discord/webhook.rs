//! Executing a webhook with a date poll.

use chrono::NaiveDate;
use reqwest::{StatusCode, Url};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{WebhookError, WebhookResult};
use crate::log;
use crate::picker::format_date;

use super::poll::{MAX_ANSWERS, Poll};
use super::snowflake::Snowflake;

/// JSON body of an execute-webhook request.
#[derive(Debug, Serialize)]
pub struct WebhookParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    pub poll: Poll,
}

impl WebhookParams {
    /// Build a poll with one answer per date, in the order given.
    pub fn for_dates(config: &Config, dates: &[NaiveDate]) -> Self {
        let mut poll = Poll::new(
            config.question.clone(),
            config.duration,
            config.allow_multiselect,
        );
        for date in dates {
            poll.add_answer(format_date(*date, &config.layout));
        }

        Self {
            content: config.content.clone(),
            username: config.username.clone(),
            avatar_url: config.avatar_url.clone(),
            poll,
        }
    }
}

/// The message Discord created, returned when `wait=true`.
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookMessage {
    pub id: Snowflake,
    #[serde(default)]
    pub channel_id: Option<Snowflake>,
}

/// Client for one webhook URL.
#[derive(Debug, Clone)]
pub struct WebhookClient {
    http: reqwest::Client,
    url: Url,
}

impl WebhookClient {
    pub fn new(url: Url) -> Self {
        Self {
            http: reqwest::Client::new(),
            url,
        }
    }

    /// Webhook URL with `wait=true`, so Discord answers with the message.
    pub fn execute_url(&self) -> Url {
        let mut url = self.url.clone();
        url.query_pairs_mut().append_pair("wait", "true");
        url
    }

    /// Post the params once.
    ///
    /// Anything but `200 OK` is an error carrying the response body. A
    /// successful response whose body is not a message is logged and yields
    /// `None`.
    pub async fn send(&self, params: &WebhookParams) -> WebhookResult<Option<WebhookMessage>> {
        let answers = params.poll.answers().len();
        if answers > MAX_ANSWERS {
            log::log(&format!(
                "Warning: poll has {} answers, Discord accepts at most {}",
                answers, MAX_ANSWERS
            ));
        }
        log::log(&format!(
            "--> poll '{}' with {} answers, {}h, multiselect={}",
            params.poll.question(),
            answers,
            params.poll.duration(),
            params.poll.allow_multiselect()
        ));

        let resp = self
            .http
            .post(self.execute_url())
            .json(params)
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;
        log::log_response(status.as_u16(), &body);

        if status != StatusCode::OK {
            return Err(WebhookError::Rejected { status, body });
        }

        match serde_json::from_str::<WebhookMessage>(&body) {
            Ok(message) => Ok(Some(message)),
            Err(e) => {
                log::log(&format!("Could not parse webhook response: {}", e));
                Ok(None)
            }
        }
    }
}

/// Result of handing the picked dates to the webhook.
#[derive(Debug)]
pub enum PostOutcome {
    /// Nothing was selected, so no request was made
    Skipped,
    /// The poll was posted; the created message, if Discord returned one
    Posted(Option<WebhookMessage>),
}

/// Post one poll for `dates`, or nothing at all when `dates` is empty.
pub async fn post_dates(config: &Config, dates: &[NaiveDate]) -> WebhookResult<PostOutcome> {
    if dates.is_empty() {
        log::log("No dates selected, webhook skipped");
        return Ok(PostOutcome::Skipped);
    }

    let params = WebhookParams::for_dates(config, dates);
    let client = WebhookClient::new(config.webhook.clone());
    let message = client.send(&params).await?;
    Ok(PostOutcome::Posted(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    fn config(webhook: &str) -> Config {
        Config {
            webhook: Url::parse(webhook).unwrap(),
            layout: "%a, %d %b %y".to_string(),
            question: "WHEN?".to_string(),
            duration: 24,
            allow_multiselect: true,
            content: None,
            username: Some("scheduler".to_string()),
            avatar_url: None,
        }
    }

    fn dates() -> Vec<NaiveDate> {
        vec![
            NaiveDate::from_ymd_opt(2026, 10, 16).unwrap(),
            NaiveDate::from_ymd_opt(2026, 10, 17).unwrap(),
        ]
    }

    #[test]
    fn test_params_payload() {
        let params = WebhookParams::for_dates(&config("https://example.com/hook"), &dates());
        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(
            value,
            json!({
                "username": "scheduler",
                "poll": {
                    "question": { "text": "WHEN?" },
                    "answers": [
                        { "answer_id": 1, "poll_media": { "text": "Fri, 16 Oct 26" } },
                        { "answer_id": 2, "poll_media": { "text": "Sat, 17 Oct 26" } }
                    ],
                    "duration": 24,
                    "allow_multiselect": true
                }
            })
        );
    }

    #[test]
    fn test_execute_url_keeps_existing_query() {
        let client = WebhookClient::new(Url::parse("https://example.com/hook?thread_id=42").unwrap());
        assert_eq!(
            client.execute_url().as_str(),
            "https://example.com/hook?thread_id=42&wait=true"
        );
    }

    #[tokio::test]
    async fn test_send_returns_created_message() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/webhooks/1/token")
            .match_query(Matcher::UrlEncoded("wait".into(), "true".into()))
            .match_header("content-type", "application/json")
            .match_body(Matcher::PartialJson(json!({
                "username": "scheduler",
                "poll": { "question": { "text": "WHEN?" }, "duration": 24 }
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id":"175928847299117063","channel_id":"212581406344216578"}"#)
            .create_async()
            .await;

        let cfg = config(&format!("{}/api/webhooks/1/token", server.url()));
        let client = WebhookClient::new(cfg.webhook.clone());
        let message = client
            .send(&WebhookParams::for_dates(&cfg, &dates()))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(message.id, Snowflake(175928847299117063));
        assert_eq!(message.channel_id, Some(Snowflake(212581406344216578)));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_send_rejection_includes_body() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/api/webhooks/1/token")
            .match_query(Matcher::Any)
            .with_status(400)
            .with_body("bad request")
            .create_async()
            .await;

        let cfg = config(&format!("{}/api/webhooks/1/token", server.url()));
        let client = WebhookClient::new(cfg.webhook.clone());
        let err = client
            .send(&WebhookParams::for_dates(&cfg, &dates()))
            .await
            .unwrap_err();

        assert!(matches!(&err, WebhookError::Rejected { status, .. } if *status == StatusCode::BAD_REQUEST));
        assert!(err.to_string().contains("bad request"));
    }

    #[tokio::test]
    async fn test_send_tolerates_unexpected_success_body() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/hook")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("ok")
            .create_async()
            .await;

        let cfg = config(&format!("{}/hook", server.url()));
        let client = WebhookClient::new(cfg.webhook.clone());
        let message = client
            .send(&WebhookParams::for_dates(&cfg, &dates()))
            .await
            .unwrap();
        assert!(message.is_none());
    }

    #[tokio::test]
    async fn test_empty_selection_sends_nothing() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let cfg = config(&format!("{}/hook", server.url()));
        let outcome = post_dates(&cfg, &[]).await.unwrap();

        assert!(matches!(outcome, PostOutcome::Skipped));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_post_dates_sends_one_poll() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/hook")
            .match_query(Matcher::UrlEncoded("wait".into(), "true".into()))
            .match_body(Matcher::PartialJson(json!({
                "poll": { "question": { "text": "WHEN?" } }
            })))
            .with_status(200)
            .with_body(r#"{"id":"175928847299117063"}"#)
            .expect(1)
            .create_async()
            .await;

        let cfg = config(&format!("{}/hook", server.url()));
        let outcome = post_dates(&cfg, &dates()).await.unwrap();

        match outcome {
            PostOutcome::Posted(Some(message)) => {
                assert_eq!(message.id, Snowflake(175928847299117063));
                assert!(message.channel_id.is_none());
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
        mock.assert_async().await;
    }
}
