use crate::error::{ApiError, Result};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_LENGTH, CONTENT_TYPE};
use reqwest::Method;
use std::collections::HashMap;
use url::Url;

/// Params is the string-keyed, string-valued input to every API call.
pub type Params = HashMap<String, String>;

/// Serialize parameters into the JSON object text sent as request body.
pub fn encode(params: &Params) -> Result<String> {
    serde_json::to_string(params).map_err(ApiError::InvalidParameters)
}

/// A fully formed POST request, ready to be handed to the transport.
///
/// Built once per call and consumed by [`RequestDescriptor::into_request`];
/// there are no setters.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    url: Url,
    headers: HeaderMap,
    body: String,
}

impl RequestDescriptor {
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Always POST
    pub fn method(&self) -> Method {
        Method::POST
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Length of the encoded body in UTF-8 bytes, as sent in `Content-Length`
    pub fn content_length(&self) -> usize {
        self.body.len()
    }

    /// Convert into a transport request
    pub fn into_request(self) -> reqwest::Request {
        let mut request = reqwest::Request::new(Method::POST, self.url);
        *request.headers_mut() = self.headers;
        *request.body_mut() = Some(self.body.into());
        request
    }
}

/// Build a JSON POST request for `url` carrying `params` as its body.
///
/// No network activity happens here. An unparseable URL yields
/// [`ApiError::InvalidUrl`], an encoding failure [`ApiError::InvalidParameters`].
pub fn build_request(url: &str, params: &Params) -> Result<RequestDescriptor> {
    let parsed = Url::parse(url).map_err(|source| ApiError::InvalidUrl {
        url: url.to_string(),
        source,
    })?;

    let body = encode(params)?;

    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(CONTENT_LENGTH, HeaderValue::from(body.len()));

    Ok(RequestDescriptor {
        url: parsed,
        headers,
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::distributions::{Alphanumeric, DistString};
    use rand::Rng;

    fn params(pairs: &[(&str, &str)]) -> Params {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_encode_is_json_object() {
        let body = encode(&params(&[("mobile_api_key", "abc"), ("user_name", "jane")])).unwrap();
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["mobile_api_key"], "abc");
        assert_eq!(value["user_name"], "jane");
        assert_eq!(value.as_object().unwrap().len(), 2);
    }

    #[test]
    fn test_encode_empty_params() {
        assert_eq!(encode(&Params::new()).unwrap(), "{}");
    }

    #[test]
    fn test_encode_parse_back_random_maps() {
        let mut rng = rand::thread_rng();
        for _ in 0..32 {
            let mut original = Params::new();
            for _ in 0..rng.gen_range(0..8) {
                let key_len = rng.gen_range(1..12);
                let key = Alphanumeric.sample_string(&mut rng, key_len);
                let value: String = (0..rng.gen_range(0..16))
                    .map(|_| rng.gen::<char>())
                    .collect();
                original.insert(key, value);
            }

            let body = encode(&original).unwrap();
            let decoded: Params = serde_json::from_str(&body).unwrap();
            assert_eq!(decoded, original);
        }
    }

    #[test]
    fn test_build_request_rejects_invalid_urls() {
        let p = params(&[("mobile_api_key", "abc")]);
        for url in ["", "not a url", "/api/jwt", "http://", "://missing-scheme"] {
            let err = build_request(url, &p).unwrap_err();
            assert!(
                matches!(err, ApiError::InvalidUrl { .. }),
                "expected InvalidUrl for {:?}, got {:?}",
                url,
                err
            );
        }
    }

    #[test]
    fn test_build_request_headers_and_method() {
        let req = build_request(
            "http://localhost:3000/api/jwt",
            &params(&[("mobile_api_key", "abc"), ("user_name", "jane")]),
        )
        .unwrap();

        assert_eq!(req.method(), Method::POST);
        assert_eq!(req.url().as_str(), "http://localhost:3000/api/jwt");
        assert_eq!(req.headers()[CONTENT_TYPE], "application/json");
        assert_eq!(
            req.headers()[CONTENT_LENGTH],
            req.body().len().to_string().as_str()
        );
    }

    #[test]
    fn test_content_length_counts_utf8_bytes() {
        let req = build_request(
            "http://localhost:3000/api/jwt",
            &params(&[("user_name", "Zoë 李")]),
        )
        .unwrap();

        let chars = req.body().chars().count();
        assert!(req.content_length() > chars);
        assert_eq!(
            req.headers()[CONTENT_LENGTH],
            req.content_length().to_string().as_str()
        );
    }

    #[test]
    fn test_into_request() {
        let req = build_request("https://cc.example.com/api/queue", &params(&[("mobile_api_key", "k")]))
            .unwrap();
        let body = req.body().to_string();

        let http = req.into_request();
        assert_eq!(http.method(), Method::POST);
        assert_eq!(http.url().path(), "/api/queue");
        assert_eq!(http.headers()[CONTENT_TYPE], "application/json");
        let bytes = http.body().and_then(|b| b.as_bytes()).unwrap();
        assert_eq!(bytes, body.as_bytes());
    }
}
