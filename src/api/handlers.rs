//! Route handlers.

use super::app::AppState;
use super::error::ApiError;
use crate::models::{PrefixLength, SubnetInfo};
use crate::processing::compute_subnet;
use axum::{
    extract::{ConnectInfo, Query, State},
    http::{header, HeaderMap},
    Json,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::net::SocketAddr;

/// Request metadata echoed back by `/info`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HttpInfo {
    /// Request headers, `Host` excluded, values in arrival order.
    pub header: BTreeMap<String, Vec<String>>,
    /// Value of the `Host` header.
    pub host: String,
    /// Peer address as `ip:port`.
    pub remote_addr: String,
}

/// `GET /`: the caller's IP address as plain text.
pub async fn remote_ip(ConnectInfo(remote): ConnectInfo<SocketAddr>) -> String {
    log::debug!("remote_ip() for {remote}");
    remote.ip().to_string()
}

/// `GET /info`: the request headers plus host and peer address.
pub async fn http_info(
    ConnectInfo(remote): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
) -> Json<HttpInfo> {
    log::debug!("http_info() for {remote}");
    let mut header_map: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (name, value) in headers.iter() {
        if *name == header::HOST {
            continue;
        }
        header_map
            .entry(name.as_str().to_string())
            .or_default()
            .push(String::from_utf8_lossy(value.as_bytes()).into_owned());
    }
    let host = headers
        .get(header::HOST)
        .map(|h| String::from_utf8_lossy(h.as_bytes()).into_owned())
        .unwrap_or_default();

    Json(HttpInfo {
        header: header_map,
        host,
        remote_addr: remote.to_string(),
    })
}

/// `GET /ipcalc?ip=<address>&cidr=<prefix>`: subnet details for the address.
///
/// Exactly the two parameters `ip` and `cidr` are accepted. When a name repeats, its first
/// value is used.
pub async fn ip_calc(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<SubnetInfo>, ApiError> {
    log::debug!("ip_calc() params={:?}", params);

    let mut names: Vec<&str> = Vec::new();
    for (name, _) in params.iter() {
        if !names.contains(&name.as_str()) {
            names.push(name.as_str());
        }
    }
    if names.len() != 2 {
        return Err(ApiError::bad_request(format!(
            "wrong number of arguments: {}",
            names.len()
        )));
    }

    let mut ip: Option<&str> = None;
    let mut cidr: Option<&str> = None;
    for (name, value) in params.iter() {
        match name.as_str() {
            "ip" => {
                ip.get_or_insert(value.as_str());
            }
            "cidr" => {
                cidr.get_or_insert(value.as_str());
            }
            other => {
                return Err(ApiError::bad_request(format!(
                    "wrong argument provided: {other}"
                )))
            }
        }
    }
    let (Some(ip), Some(cidr)) = (ip, cidr) else {
        return Err(ApiError::bad_request("ip and cidr must be provided"));
    };

    let len: PrefixLength = cidr.parse()?;
    let min = state.config.min_prefix_len;
    if len.get() < min {
        return Err(ApiError::bad_request(format!(
            "invalid or too low (<{min}) cidr: {len}"
        )));
    }

    let info = compute_subnet(ip, i64::from(len.get()))?;
    log::info!(
        "ipcalc {ip}/{len} -> {network_cidr}",
        network_cidr = info.network_cidr
    );
    Ok(Json(info))
}
