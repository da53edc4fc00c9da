//! Transport-independent description of a single API call.

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

use crate::error::{Error, Result};

/// Ordered query string. Absent optional parameters are never written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(mut self, key: &str, value: impl ToString) -> Self {
        self.pairs.push((key.to_string(), value.to_string()));
        self
    }

    pub fn push_opt<V: ToString>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.push(key, value),
            None => self,
        }
    }

    /// Adds `page` and `per_page`, falling back to page 1 and `default_per_page`.
    pub fn paginate(self, page: Option<u32>, per_page: Option<u32>, default_per_page: u32) -> Self {
        self.push("page", page.unwrap_or(1))
            .push("per_page", per_page.unwrap_or(default_per_page))
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.pairs.iter().enumerate() {
            if i > 0 {
                f.write_str("&")?;
            }
            write!(
                f,
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )?;
        }
        Ok(())
    }
}

/// One outbound request: method, path under the base URL, query and JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Query,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Query::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    pub fn query(mut self, query: Query) -> Self {
        self.query = query;
        self
    }

    /// Attaches a JSON body. Fails only if `body` cannot be represented as JSON.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self> {
        self.body = Some(serde_json::to_value(body).map_err(Error::Encode)?);
        Ok(self)
    }

    /// Path plus query string, e.g. `/v1/customers?page=2&per_page=5`.
    pub fn path_and_query(&self) -> String {
        if self.query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, self.query)
        }
    }
}

impl fmt::Display for ApiRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path_and_query())
    }
}

/// Builds `/v1/<resource>/<id>/<suffix...>` with the identifier percent-encoded.
///
/// Empty, `.` and `..` identifiers are rejected: URL normalisation would turn
/// them into a different endpoint (`/v1/address/` is the list route).
pub fn resource_path(base: &str, reference: &str, suffix: &[&str]) -> Result<String> {
    if matches!(reference.trim(), "" | "." | "..") {
        return Err(Error::InvalidReference(reference.to_string()));
    }

    let mut path = format!("{}/{}", base, urlencoding::encode(reference));
    for part in suffix {
        path.push('/');
        path.push_str(part);
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    #[test]
    fn test_query_omits_absent_values() {
        let query = Query::new()
            .paginate(None, None, 20)
            .push_opt("coin_id", None::<&str>);

        assert_eq!(query.to_string(), "page=1&per_page=20");
        assert!(query.get("coin_id").is_none());
        assert!(!query.to_string().contains("undefined"));
    }

    #[test]
    fn test_query_keeps_insertion_order() {
        let query = Query::new()
            .paginate(Some(2), Some(5), 10)
            .push_opt("blacklisted", Some(true));

        assert_eq!(query.to_string(), "page=2&per_page=5&blacklisted=true");
    }

    #[test]
    fn test_query_encodes_values() {
        let query = Query::new().push("account", "01 23&4");
        assert_eq!(query.to_string(), "account=01%2023%264");
    }

    #[test]
    fn test_path_and_query_without_query_has_no_question_mark() {
        let request = ApiRequest::get("/v1/balances");
        assert_eq!(request.path_and_query(), "/v1/balances");
        assert_eq!(request.to_string(), "GET /v1/balances");
    }

    #[test]
    fn test_request_display_with_query() {
        let request =
            ApiRequest::get("/v1/customers").query(Query::new().paginate(Some(2), Some(5), 10));
        assert_eq!(request.to_string(), "GET /v1/customers?page=2&per_page=5");
    }

    #[test]
    fn test_json_body() {
        #[derive(Serialize)]
        struct Body {
            code: &'static str,
        }

        let request = ApiRequest::post("/v1/address")
            .json(&Body { code: "ETH" })
            .unwrap();
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.body, Some(json!({"code": "ETH"})));
    }

    #[test]
    fn test_json_body_that_is_not_json_is_encode_error() {
        use std::collections::HashMap;

        let mut body = HashMap::new();
        body.insert((1, 2), "tuple keys are not JSON object keys");

        let err = ApiRequest::post("/v1/address").json(&body).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Encode);
    }

    #[test]
    fn test_resource_path_encodes_reference() {
        assert_eq!(
            resource_path("/v1/address", "ADDR_abc", &[]).unwrap(),
            "/v1/address/ADDR_abc"
        );
        assert_eq!(
            resource_path("/v1/links", "LINK 1/x", &["enable"]).unwrap(),
            "/v1/links/LINK%201%2Fx/enable"
        );
        assert_eq!(
            resource_path("/v1/customers", "CUS_1", &["transactions"]).unwrap(),
            "/v1/customers/CUS_1/transactions"
        );
    }

    #[test]
    fn test_resource_path_rejects_references_that_change_the_route() {
        for reference in ["", " ", ".", ".."] {
            let err = resource_path("/v1/customers", reference, &[]).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidReference, "{:?}", reference);
        }

        // Dots inside an identifier are fine.
        assert_eq!(
            resource_path("/v1/customers", "CUS.1", &[]).unwrap(),
            "/v1/customers/CUS.1"
        );
        assert_eq!(
            resource_path("/v1/customers", "...", &[]).unwrap(),
            "/v1/customers/..."
        );
    }
}
