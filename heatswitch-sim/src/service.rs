//! JSON request/response boundary used by the web frontend and the CLI.
//!
//! Every call is independent: the body is parsed, computed and encoded in one
//! go, and a failure never carries a partial result.

use std::fs;
use std::io::{self, Read};

use anyhow::Context;
use heatswitch_model::{
    BuildingClass, SimulationInput, SimulationResult, SubsidyBonuses, SubsidyInput, SubsidyResult,
};
use serde::Serialize;
use tracing::{debug, warn};

use crate::comparison::simulate;
use crate::errors::{RequestError, SubsidyError};
use crate::general::calculate_subsidy;

/// Status, content type and body handed back to the request handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub content_type: &'static str,
    pub body: String,
}

impl Response {
    pub fn from_result(result: Result<String, RequestError>) -> Self {
        match result {
            Ok(body) => Self {
                status: 200,
                content_type: "application/json",
                body,
            },
            Err(err) => {
                warn!(error = ?err, "request failed");
                Self {
                    status: err.status(),
                    content_type: "text/plain; charset=utf-8",
                    body: err.to_string(),
                }
            }
        }
    }
}

fn encode<T: Serialize>(value: &T, pretty: bool) -> Result<String, RequestError> {
    let encoded = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    encoded.map_err(RequestError::Encode)
}

pub fn parse_simulation_request(body: &str) -> Result<SimulationInput, RequestError> {
    serde_json::from_str(body).map_err(RequestError::Malformed)
}

pub fn parse_subsidy_request(body: &str) -> Result<SubsidyInput, RequestError> {
    serde_json::from_str(body).map_err(RequestError::Malformed)
}

/// Read a request body from a file, or from stdin for `-`.
pub fn read_request_body(path: &str) -> anyhow::Result<String> {
    if path == "-" {
        let mut body = String::new();
        io::stdin()
            .read_to_string(&mut body)
            .context("Failed to read request from stdin")?;
        return Ok(body);
    }
    fs::read_to_string(path).with_context(|| format!("Failed to read request file: {}", path))
}

/// Body of a comparison request in, body of a [`SimulationResult`] out.
pub fn handle_simulation_request(body: &str, pretty: bool) -> Result<String, RequestError> {
    let input = parse_simulation_request(body)?;
    let result = simulate(&input);
    debug!(rows = result.rows.len(), "simulation request served");
    encode(&result, pretty)
}

/// Body of a subsidy request in, body of a [`SubsidyResult`] out.
pub fn handle_subsidy_request(body: &str, pretty: bool) -> Result<String, RequestError> {
    let input = parse_subsidy_request(body)?;
    let result = calculate_subsidy(&input)?;
    encode(&result, pretty)
}

/// Subsidy estimate and comparison in one pass: the rounded grant replaces
/// the request's heat pump subsidy before simulating.
pub fn simulate_with_subsidy(
    mut input: SimulationInput,
    building_class: BuildingClass,
    bonuses: SubsidyBonuses,
) -> Result<(SubsidyResult, SimulationResult), SubsidyError> {
    let subsidy = calculate_subsidy(&SubsidyInput::for_comparison(
        &input,
        building_class,
        bonuses,
    ))?;
    input.apply_subsidy(&subsidy);
    Ok((subsidy, simulate(&input)))
}
