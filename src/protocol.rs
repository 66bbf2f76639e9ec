use crate::constants::{REPLY_ERROR, REPLY_OK};
use crate::error::{FdtError, Result};
use std::collections::HashMap;

/// Builds a CGI request path. Hi3510 firmware expects the parameters in the
/// order given and without percent-encoding, so values are written as-is.
pub fn cgi_path(script: &str, params: &[(&str, String)]) -> String {
    if params.is_empty() {
        return script.to_string();
    }

    let query = params
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join("&");
    format!("{}?{}", script, query)
}

/// Parses a `getXXX` reply made of `var name="value";` lines.
pub fn parse_vars(body: &str) -> HashMap<String, String> {
    let mut vars = HashMap::new();

    for line in body.lines() {
        let line = line.trim();
        let Some(rest) = line.strip_prefix("var ") else {
            continue;
        };
        let Some((key, value)) = rest.split_once('=') else {
            continue;
        };

        let value = value.trim().trim_end_matches(';').trim();
        let value = value
            .strip_prefix('"')
            .and_then(|v| v.strip_suffix('"'))
            .unwrap_or(value);

        vars.insert(key.trim().to_string(), value.to_string());
    }

    vars
}

/// Checks the reply of a `setXXX` command.
pub fn check_reply(body: &str) -> Result<()> {
    let body = body.trim();
    if body.starts_with(REPLY_ERROR) {
        return Err(FdtError::ProtocolError(format!(
            "Device rejected command: {}",
            body
        )));
    }
    if !body.is_empty() && !body.starts_with(REPLY_OK) {
        log::debug!("Unexpected set reply, treating as success: {}", body);
    }
    Ok(())
}

pub fn parse_flag(vars: &HashMap<String, String>, key: &str) -> Result<bool> {
    match vars.get(key).map(String::as_str) {
        Some("1") => Ok(true),
        Some("0") => Ok(false),
        Some(other) => Err(FdtError::ProtocolError(format!(
            "Invalid value for {}: {}",
            key, other
        ))),
        None => Err(FdtError::ProtocolError(format!("Missing {} in reply", key))),
    }
}
