use napi::Result as NapiResult;
use napi_derive::napi;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Buy-to-let yield
// ---------------------------------------------------------------------------

#[napi]
pub fn compute_yield(input_json: String) -> NapiResult<String> {
    let input: vastgoed_core::rental_yield::YieldInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    vastgoed_core::rental_yield::validate_input(&input).map_err(to_napi_error)?;
    let output = vastgoed_core::rental_yield::compute_yield(&input);
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn compute_quick_scan(input_json: String) -> NapiResult<String> {
    let input: vastgoed_core::rental_yield::QuickScanInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    vastgoed_core::rental_yield::validate_quick_scan(&input).map_err(to_napi_error)?;
    let output = vastgoed_core::rental_yield::compute_quick_scan(&input);
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// WWS rent points
// ---------------------------------------------------------------------------

/// Returns the JSON string `null` when the floor area is missing: the
/// valuation is underdetermined, which the UI renders as "fill in the floor
/// area", not as an error.
#[napi]
pub fn compute_rent_points(input_json: String) -> NapiResult<String> {
    let input: vastgoed_core::rent_points::RentPointInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    vastgoed_core::rent_points::validate_input(&input).map_err(to_napi_error)?;
    let output = vastgoed_core::rent_points::compute_points(&input);
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Compound growth
// ---------------------------------------------------------------------------

#[napi]
pub fn compute_compound(input_json: String) -> NapiResult<String> {
    let input: vastgoed_core::compound_growth::CompoundGrowthInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    vastgoed_core::compound_growth::validate_input(&input).map_err(to_napi_error)?;
    let output = vastgoed_core::compound_growth::compute_compound(&input);
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Lease
// ---------------------------------------------------------------------------

#[napi]
pub fn compute_lease_simple(input_json: String) -> NapiResult<String> {
    compute_lease(input_json, vastgoed_core::lease::LeaseMode::Simple)
}

#[napi]
pub fn compute_lease_balloon(input_json: String) -> NapiResult<String> {
    compute_lease(input_json, vastgoed_core::lease::LeaseMode::Balloon)
}

fn compute_lease(
    input_json: String,
    mode: vastgoed_core::lease::LeaseMode,
) -> NapiResult<String> {
    let input: vastgoed_core::lease::LeaseInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    vastgoed_core::lease::validate_input(&input).map_err(to_napi_error)?;
    let output = vastgoed_core::lease::compute_lease(&input, mode);
    serde_json::to_string(&output).map_err(to_napi_error)
}
