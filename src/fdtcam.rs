use crate::constants::{PARAM_CGI, REQUEST_TIMEOUT_SECS};
use crate::error::{FdtError, Result};
use crate::protocol::{cgi_path, check_reply, parse_vars};
use log::debug;
use reqwest::StatusCode;
use std::collections::HashMap;
use tokio::time::Duration;

/// HTTP client for a single FDT camera.
///
/// Construction does not touch the network; every command issues one GET
/// against the camera's CGI interface.
pub struct FdtCam {
    pub(crate) host: String,
    pub(crate) port: u16,
    pub(crate) username: Option<String>,
    pub(crate) password: Option<String>,
    pub(crate) base_url: String,
    pub(crate) http: reqwest::Client,
}

impl FdtCam {
    pub fn new(
        host: impl Into<String>,
        port: &str,
        username: Option<String>,
        password: Option<String>,
    ) -> Result<Self> {
        Self::with_timeout(
            host,
            port,
            username,
            password,
            Duration::from_secs(REQUEST_TIMEOUT_SECS),
        )
    }

    pub fn with_timeout(
        host: impl Into<String>,
        port: &str,
        username: Option<String>,
        password: Option<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let host = host.into();
        if host.trim().is_empty() {
            return Err(FdtError::ConfigError("Camera host is empty".to_string()));
        }

        let port: u16 = port
            .trim()
            .parse()
            .map_err(|_| FdtError::ConfigError(format!("Invalid port: {}", port)))?;

        // Cameras are addressed directly, never through a system proxy.
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .no_proxy()
            .build()?;

        Ok(Self {
            base_url: format!("http://{}:{}", host, port),
            host,
            port,
            username,
            password,
            http,
        })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    pub(crate) async fn get_raw(&self, path: &str) -> Result<Vec<u8>> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);

        let mut request = self.http.get(&url);
        if let Some(username) = &self.username {
            request = request.basic_auth(username, Some(self.password.as_deref().unwrap_or("")));
        }

        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            return Err(FdtError::AuthenticationError(format!(
                "{} rejected credentials",
                self.host
            )));
        }
        if !status.is_success() {
            return Err(FdtError::ConnectionError(format!(
                "{} answered {} for {}",
                self.host, status, path
            )));
        }

        Ok(response.bytes().await?.to_vec())
    }

    pub(crate) async fn get_text(&self, path: &str) -> Result<String> {
        let body = self.get_raw(path).await?;
        Ok(String::from_utf8_lossy(&body).into_owned())
    }

    /// Runs a `get<cmd>` param command and returns its variables.
    pub(crate) async fn get_command(&self, cmd: &str) -> Result<HashMap<String, String>> {
        let path = cgi_path(PARAM_CGI, &[("cmd", cmd.to_string())]);
        let body = self.get_text(&path).await?;
        Ok(parse_vars(&body))
    }

    /// Runs a `set<cmd>` param command.
    pub(crate) async fn set_command(&self, cmd: &str, params: &[(&str, String)]) -> Result<()> {
        let mut all = Vec::with_capacity(params.len() + 1);
        all.push(("cmd", cmd.to_string()));
        all.extend(params.iter().cloned());

        let body = self.get_text(&cgi_path(PARAM_CGI, &all)).await?;
        check_reply(&body)
    }

    /// Runs a standalone CGI script and checks its reply.
    pub(crate) async fn run_cgi(&self, script: &str, params: &[(&str, String)]) -> Result<()> {
        let body = self.get_text(&cgi_path(script, params)).await?;
        check_reply(&body)
    }
}
