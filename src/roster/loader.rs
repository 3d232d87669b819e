/// People API roster loader
///
/// Issues a single GET for a fixed-size batch of people and hands back the
/// ordered list. There is no retry and no partial-result handling: any
/// failure yields a `LoadError` and no people.

use reqwest::{StatusCode, Url};
use serde::Deserialize;

use super::LoadError;
use crate::state::data::Person;

/// Public people directory endpoint
pub const DEFAULT_API_URL: &str = "https://randomuser.me/api/";

/// Number of people requested per load
pub const DEFAULT_RESULTS: usize = 12;

/// What to ask the people API for
#[derive(Debug, Clone, PartialEq)]
pub struct RosterRequest {
    pub base_url: String,
    /// Batch size N, fixed by the request rather than discovered
    pub results: usize,
    /// Optional nationality filter, e.g. "us" or "gb,fr"
    pub nationality: Option<String>,
    /// Optional seed for a reproducible batch
    pub seed: Option<String>,
}

impl Default for RosterRequest {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            results: DEFAULT_RESULTS,
            nationality: None,
            seed: None,
        }
    }
}

impl RosterRequest {
    /// Build the request URL with its query parameters
    pub fn url(&self) -> Result<Url, LoadError> {
        let mut url = Url::parse(&self.base_url).map_err(|e| LoadError::Url(e.to_string()))?;

        {
            let mut query = url.query_pairs_mut();
            query.append_pair("results", &self.results.to_string());
            if let Some(nat) = &self.nationality {
                query.append_pair("nat", nat);
            }
            if let Some(seed) = &self.seed {
                query.append_pair("seed", seed);
            }
        }

        Ok(url)
    }
}

/// Response envelope: `{"results": [...], "info": {...}}`
/// or `{"error": "..."}` when the API rejects the request
#[derive(Deserialize, Debug)]
struct Envelope {
    #[serde(default)]
    results: Option<Vec<Person>>,
    #[serde(default)]
    error: Option<String>,
}

/// Fetch one roster batch
///
/// Takes owned arguments so the future can be handed to a background task.
pub async fn load_roster(
    client: reqwest::Client,
    request: RosterRequest,
) -> Result<Vec<Person>, LoadError> {
    let url = request.url()?;
    println!("🌐 Fetching roster: {}", url);

    let response = client.get(url).send().await?;
    check_status(response.status())?;

    let body = response.text().await?;
    let people = parse_roster(&body, request.results)?;

    println!("✅ Loaded {} people", people.len());
    Ok(people)
}

/// Any non-2xx status is a load failure
pub fn check_status(status: StatusCode) -> Result<(), LoadError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(LoadError::Status {
            code: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
        })
    }
}

/// Decode a response body into at most `expected` people, in order
pub fn parse_roster(body: &str, expected: usize) -> Result<Vec<Person>, LoadError> {
    let envelope: Envelope = serde_json::from_str(body)?;

    if let Some(message) = envelope.error {
        return Err(LoadError::Api(message));
    }

    let mut people = envelope
        .results
        .ok_or_else(|| LoadError::Decode("missing `results` array".to_string()))?;

    if people.len() > expected {
        people.truncate(expected);
    } else if people.len() < expected {
        eprintln!(
            "⚠️  Requested {} people, API returned {}",
            expected,
            people.len()
        );
    }

    Ok(people)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::test_server::{client, serve_once};

    fn people_json(names: &[(&str, &str)]) -> String {
        let results: Vec<String> = names
            .iter()
            .map(|(first, last)| {
                format!(
                    r#"{{"name":{{"title":"Ms","first":"{}","last":"{}"}},"email":"{}@example.com"}}"#,
                    first,
                    last,
                    first.to_lowercase()
                )
            })
            .collect();
        format!(
            r#"{{"results":[{}],"info":{{"seed":"abc","results":{},"page":1,"version":"1.4"}}}}"#,
            results.join(","),
            names.len()
        )
    }

    #[test]
    fn test_default_url() {
        let url = RosterRequest::default().url().unwrap();
        assert_eq!(url.as_str(), "https://randomuser.me/api/?results=12");
    }

    #[test]
    fn test_url_with_nationality_and_seed() {
        let request = RosterRequest {
            nationality: Some("us".to_string()),
            seed: Some("gallery".to_string()),
            ..RosterRequest::default()
        };
        let url = request.url().unwrap();
        assert_eq!(
            url.as_str(),
            "https://randomuser.me/api/?results=12&nat=us&seed=gallery"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let request = RosterRequest {
            base_url: "not a url".to_string(),
            ..RosterRequest::default()
        };
        assert!(matches!(request.url(), Err(LoadError::Url(_))));
    }

    #[test]
    fn test_check_status() {
        assert!(check_status(StatusCode::OK).is_ok());
        assert_eq!(
            check_status(StatusCode::NOT_FOUND),
            Err(LoadError::Status {
                code: 404,
                reason: "Not Found".to_string()
            })
        );
    }

    #[test]
    fn test_parse_keeps_order() {
        let body = people_json(&[("Anna", "Smith"), ("Dana", "Mann"), ("Bob", "Brown")]);
        let people = parse_roster(&body, 3).unwrap();

        let names: Vec<String> = people.iter().map(|p| p.full_name()).collect();
        assert_eq!(names, vec!["Anna Smith", "Dana Mann", "Bob Brown"]);
    }

    #[test]
    fn test_parse_truncates_to_batch_size() {
        let body = people_json(&[("A", "A"), ("B", "B"), ("C", "C")]);
        let people = parse_roster(&body, 2).unwrap();
        assert_eq!(people.len(), 2);
        assert_eq!(people[1].name.first, "B");
    }

    #[test]
    fn test_parse_api_error() {
        let body = r#"{"error":"Uh oh, something has gone wrong. Please tweet us @randomapi about the issue. Thank you."}"#;
        assert!(matches!(parse_roster(body, 12), Err(LoadError::Api(_))));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(parse_roster("<html>", 12), Err(LoadError::Decode(_))));
        assert!(matches!(parse_roster("{}", 12), Err(LoadError::Decode(_))));
    }

    #[tokio::test]
    async fn test_load_roster_success() {
        let body = people_json(&[("Anna", "Smith"), ("Dana", "Mann")]);
        let base_url = serve_once("200 OK", "application/json", body.into_bytes()).await;

        let request = RosterRequest {
            base_url,
            results: 2,
            ..RosterRequest::default()
        };
        let people = load_roster(client(), request).await.unwrap();

        assert_eq!(people.len(), 2);
        assert_eq!(people[0].full_name(), "Anna Smith");
    }

    #[tokio::test]
    async fn test_load_roster_non_success_status() {
        let base_url = serve_once("500 Internal Server Error", "text/plain", Vec::new()).await;

        let request = RosterRequest {
            base_url,
            ..RosterRequest::default()
        };
        let result = load_roster(client(), request).await;

        assert!(matches!(result, Err(LoadError::Status { code: 500, .. })));
    }

    #[tokio::test]
    async fn test_failed_load_yields_empty_gallery() {
        use crate::state::gallery::Gallery;
        use rand::{rngs::StdRng, SeedableRng};

        let base_url = serve_once("503 Service Unavailable", "text/plain", Vec::new()).await;
        let request = RosterRequest {
            base_url,
            ..RosterRequest::default()
        };

        let mut gallery = Gallery::with_rng(StdRng::seed_from_u64(3));
        gallery.apply_load(load_roster(client(), request).await);

        assert_eq!(gallery.tiles().len(), 0);
        assert_eq!(gallery.overlays().len(), 0);
        assert_eq!(gallery.diagnostics().len(), 1);
    }

    #[tokio::test]
    async fn test_load_roster_connection_refused() {
        // Bind then drop to get a port nothing listens on
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let request = RosterRequest {
            base_url: format!("http://{}/api/", addr),
            ..RosterRequest::default()
        };
        let result = load_roster(client(), request).await;

        assert!(matches!(result, Err(LoadError::Network(_))));
    }
}
