//! Request templates and the requests rendered from them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::template::{TemplateError, render_template};
use crate::ports::EnvironmentStore;

/// HTTP methods a template may use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    #[default]
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "PATCH" => Ok(Self::Patch),
            "DELETE" => Ok(Self::Delete),
            other => Err(TemplateError::Parse(format!("unsupported method '{other}'"))),
        }
    }
}

/// A request header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub name: String,
    pub value: String,
}

impl Header {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A request whose url, header values, and body may contain `{{variable}}`
/// placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestTemplate {
    #[serde(default = "default_template_name")]
    pub name: String,
    #[serde(default)]
    pub method: HttpMethod,
    pub url: String,
    #[serde(default)]
    pub headers: Vec<Header>,
    #[serde(default)]
    pub body: Option<String>,
}

fn default_template_name() -> String {
    "request".to_string()
}

impl RequestTemplate {
    /// The franchise-creation call the pre-request hook prepares variables for.
    pub fn create_franchise() -> Self {
        Self {
            name: "Create franchise".to_string(),
            method: HttpMethod::Post,
            url: "{{base_url}}/api/franchises".to_string(),
            headers: vec![Header::new("Content-Type", "application/json")],
            body: Some("{\n  \"name\": \"{{franchise_name}}\"\n}".to_string()),
        }
    }

    /// Parse a template from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, TemplateError> {
        serde_json::from_str(json).map_err(|e| TemplateError::Parse(e.to_string()))
    }

    /// Substitute environment variables into the url, header values, and body.
    ///
    /// With `strict` set, any placeholder left unresolved is an error; otherwise
    /// unresolved names are reported on the returned request.
    pub fn render(
        &self,
        store: &dyn EnvironmentStore,
        strict: bool,
    ) -> Result<RenderedRequest, TemplateError> {
        let mut unresolved: Vec<String> = Vec::new();
        let mut take = |text: &str| {
            let rendered = render_template(text, store);
            for name in rendered.unresolved {
                if !unresolved.contains(&name) {
                    unresolved.push(name);
                }
            }
            rendered.text
        };

        let url = take(&self.url);
        let headers = self
            .headers
            .iter()
            .map(|h| Header::new(h.name.clone(), take(&h.value)))
            .collect();
        let body = self.body.as_deref().map(&mut take);

        if strict && !unresolved.is_empty() {
            return Err(TemplateError::Unresolved(unresolved));
        }

        tracing::debug!(template = %self.name, %url, unresolved = unresolved.len(), "rendered request template");

        Ok(RenderedRequest {
            method: self.method,
            url,
            headers,
            body,
            unresolved,
        })
    }
}

/// A request ready to send.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<Header>,
    pub body: Option<String>,
    /// Placeholders that had no value when rendering.
    pub unresolved: Vec<String>,
}

impl fmt::Display for RenderedRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.method, self.url)?;
        for header in &self.headers {
            writeln!(f, "{}: {}", header.name, header.value)?;
        }
        if let Some(body) = &self.body {
            writeln!(f)?;
            writeln!(f, "{body}")?;
        }
        Ok(())
    }
}

/// What came back from sending a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseSummary {
    pub status: u16,
    pub body: String,
}

impl ResponseSummary {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Parse the body as JSON, if it is JSON.
    pub fn json(&self) -> Option<serde_json::Value> {
        serde_json::from_str(&self.body).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EnvValue, Environment};

    fn env() -> Environment {
        let mut env = Environment::new("test");
        env.set("base_url", "http://localhost:8080".into());
        env.set("franchise_name", "fra7".into());
        env.set("random_number", EnvValue::Number(7));
        env
    }

    #[test]
    fn test_create_franchise_template_renders() {
        let request = RequestTemplate::create_franchise().render(&env(), true).unwrap();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.url, "http://localhost:8080/api/franchises");
        assert_eq!(request.body.as_deref(), Some("{\n  \"name\": \"fra7\"\n}"));
        assert!(request.unresolved.is_empty());
    }

    #[test]
    fn test_render_lenient_reports_unresolved() {
        let template = RequestTemplate {
            name: "t".into(),
            method: HttpMethod::Get,
            url: "{{base_url}}/api/franchises/{{franchise_id}}".into(),
            headers: vec![Header::new("Authorization", "Bearer {{token}}")],
            body: None,
        };
        let request = template.render(&env(), false).unwrap();
        assert_eq!(request.url, "http://localhost:8080/api/franchises/{{franchise_id}}");
        assert_eq!(request.unresolved, ["franchise_id", "token"]);
    }

    #[test]
    fn test_render_strict_fails_on_unresolved() {
        let mut template = RequestTemplate::create_franchise();
        template.body = Some("{{franchise_name}} {{unknown}}".into());
        assert_eq!(
            template.render(&env(), true),
            Err(TemplateError::Unresolved(vec!["unknown".into()]))
        );
    }

    #[test]
    fn test_from_json_defaults() {
        let template = RequestTemplate::from_json(r#"{"url": "{{base_url}}/api/franchises"}"#).unwrap();
        assert_eq!(template.method, HttpMethod::Post);
        assert_eq!(template.name, "request");
        assert!(template.headers.is_empty());
        assert!(template.body.is_none());

        assert!(matches!(
            RequestTemplate::from_json("{"),
            Err(TemplateError::Parse(_))
        ));
    }

    #[test]
    fn test_method_parsing() {
        assert_eq!("put".parse::<HttpMethod>().unwrap(), HttpMethod::Put);
        assert!("TRACE".parse::<HttpMethod>().is_err());
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_response_summary() {
        let response = ResponseSummary {
            status: 201,
            body: r#"{"code": "201", "data": {"id": "abc"}}"#.into(),
        };
        assert!(response.is_success());
        assert_eq!(response.json().unwrap()["data"]["id"], "abc");

        let plain = ResponseSummary {
            status: 500,
            body: "oops".into(),
        };
        assert!(!plain.is_success());
        assert!(plain.json().is_none());
    }
}
