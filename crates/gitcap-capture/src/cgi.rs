//! CGI request fields.
//!
//! A smart-HTTP server invokes the shim once per request with the request
//! line and headers translated into environment variables and the body on
//! stdin, per the CGI convention.

use crate::{CaptureError, Result};
use std::env;
use std::io::Read;

/// The environment-derived fields of one CGI request.
#[derive(Debug, Clone, Default)]
pub struct CgiRequest {
    /// `REQUEST_METHOD`.
    pub method: String,
    /// `PATH_INFO` - repository path plus service suffix.
    pub path_info: String,
    /// `QUERY_STRING`.
    pub query_string: String,
    /// `CONTENT_TYPE`.
    pub content_type: String,
    /// Declared body length, 0 when absent.
    pub content_length: usize,
    /// Raw `CONTENT_LENGTH` value, verbatim, for the metadata record.
    pub content_length_raw: String,
    /// `REMOTE_ADDR`.
    pub remote_addr: String,
    /// `HTTP_USER_AGENT`.
    pub user_agent: String,
}

impl CgiRequest {
    /// Reads the request fields from the process environment.
    ///
    /// Missing variables become empty strings; a `CONTENT_LENGTH` that is
    /// present but unparsable is an error.
    pub fn from_env() -> Result<Self> {
        let content_length_raw = var_or_empty("CONTENT_LENGTH");
        let content_length = if content_length_raw.is_empty() {
            0
        } else {
            content_length_raw
                .trim()
                .parse()
                .map_err(|_| CaptureError::InvalidContentLength(content_length_raw.clone()))?
        };

        Ok(Self {
            method: var_or_empty("REQUEST_METHOD"),
            path_info: var_or_empty("PATH_INFO"),
            query_string: var_or_empty("QUERY_STRING"),
            content_type: var_or_empty("CONTENT_TYPE"),
            content_length,
            content_length_raw,
            remote_addr: var_or_empty("REMOTE_ADDR"),
            user_agent: var_or_empty("HTTP_USER_AGENT"),
        })
    }

    /// Returns true for POST requests, the only ones carrying push/fetch data.
    #[must_use]
    pub fn is_post(&self) -> bool {
        self.method == "POST"
    }

    /// Reads exactly the declared number of body bytes from `reader`.
    pub fn read_body<R: Read>(&self, reader: &mut R) -> Result<Vec<u8>> {
        if self.content_length == 0 {
            return Ok(Vec::new());
        }
        let mut body = vec![0u8; self.content_length];
        reader.read_exact(&mut body)?;
        Ok(body)
    }
}

fn var_or_empty(name: &str) -> String {
    env::var(name).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_body_exact_length() {
        let request = CgiRequest {
            content_length: 5,
            ..CgiRequest::default()
        };
        let mut input = Cursor::new(b"hello, extra bytes ignored".to_vec());
        assert_eq!(request.read_body(&mut input).unwrap(), b"hello");
    }

    #[test]
    fn test_read_body_zero_length() {
        let request = CgiRequest::default();
        let mut input = Cursor::new(b"never read".to_vec());
        assert!(request.read_body(&mut input).unwrap().is_empty());
    }

    #[test]
    fn test_read_body_short_input_fails() {
        let request = CgiRequest {
            content_length: 100,
            ..CgiRequest::default()
        };
        let mut input = Cursor::new(b"short".to_vec());
        assert!(request.read_body(&mut input).is_err());
    }

    #[test]
    fn test_is_post() {
        let mut request = CgiRequest {
            method: "POST".to_string(),
            ..CgiRequest::default()
        };
        assert!(request.is_post());

        request.method = "GET".to_string();
        assert!(!request.is_post());
    }
}
