//! Output areas for the backend-driven features.
//!
//! Each feature splits into a guard that turns raw form input into a request
//! (or an immediate message), and a renderer that turns the backend reply into
//! the text shown on the page. [`Panel`] sequences requests so that only the
//! latest trigger may write its output.

use crate::errors::ClientError;
use crate::models::{
    FootprintReport, FootprintRequest, NearbyQuery, NearbyReport, Prediction, SoilReport,
    SoilRequest, Upload,
};
use crate::ui::escape_html;
use serde::Serialize;

pub const UPLOAD_PROMPT: &str = "Please upload an image.";
pub const CLASSIFYING: &str = "Classifying...";
pub const SOIL_PROMPT: &str = "Please enter both values.";
pub const NEARBY_PROMPT: &str = "Please enter both latitude and longitude.";
pub const SEARCHING: &str = "Searching...";
pub const NO_CENTERS: &str = "No recycling centers found nearby.";

/// Content of an output element. `Markup` is already escaped HTML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "content", rename_all = "snake_case")]
pub enum Output {
    #[default]
    Empty,
    Text(String),
    Markup(String),
}

impl Output {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn error(err: &ClientError) -> Self {
        Self::Text(format!("Error: {err}"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

#[derive(Debug, Clone, Default)]
pub struct Panel {
    output: Output,
    issued: u64,
}

impl Panel {
    pub fn output(&self) -> &Output {
        &self.output
    }

    /// Shows `output` now and supersedes anything still in flight.
    pub fn show(&mut self, output: Output) {
        self.issued += 1;
        self.output = output;
    }

    /// Starts a request. The current output stays up unless `pending` is given.
    pub fn begin(&mut self, pending: Option<Output>) -> Ticket {
        self.issued += 1;
        if let Some(pending) = pending {
            self.output = pending;
        }
        Ticket(self.issued)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.issued
    }

    /// Applies a reply; returns false when a newer trigger superseded `ticket`.
    pub fn settle(&mut self, ticket: Ticket, output: Output) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.output = output;
        true
    }
}

pub fn classify_request(upload: Option<Upload>) -> Result<Upload, Output> {
    match upload {
        Some(upload) if !upload.file_name.is_empty() => Ok(upload),
        _ => Err(Output::text(UPLOAD_PROMPT)),
    }
}

pub fn render_classification(reply: Result<Prediction, ClientError>) -> Output {
    let prediction = match reply {
        Ok(prediction) => prediction,
        Err(err) => return Output::error(&err),
    };

    let mut markup = format!(
        "Detected Waste Category: <strong>{}</strong>",
        escape_html(&prediction.prediction)
    );
    let details = [
        ("Waste Type", &prediction.waste_type),
        ("Recycling", &prediction.recycling_process),
        ("Dustbin", &prediction.dustbin),
    ];
    for (label, value) in details {
        if let Some(value) = value {
            markup.push_str(&format!("<br>{label}: {}", escape_html(value)));
        }
    }
    Output::Markup(markup)
}

/// Both fields are forwarded untouched once neither is empty.
pub fn soil_request(ph: &str, potash_level: &str) -> Result<SoilRequest, Output> {
    if ph.is_empty() || potash_level.is_empty() {
        return Err(Output::text(SOIL_PROMPT));
    }
    Ok(SoilRequest {
        ph: ph.to_string(),
        potash_level: potash_level.to_string(),
    })
}

pub fn render_soil(reply: Result<SoilReport, ClientError>) -> Output {
    match reply {
        Ok(report) => Output::Text(report.result),
        Err(err) => Output::error(&err),
    }
}

pub fn footprint_request(electricity: &str, water: &str, transport: &str) -> FootprintRequest {
    FootprintRequest {
        electricity: parse_number(electricity),
        water: parse_number(water),
        transport: parse_number(transport),
    }
}

pub fn render_footprint(reply: Result<FootprintReport, ClientError>) -> Output {
    match reply {
        Ok(report) => Output::Text(format!("Estimated Carbon Footprint:\n{}", report.footprint)),
        Err(err) => Output::error(&err),
    }
}

pub fn nearby_request(lat: &str, lon: &str, center_type: &str) -> Result<NearbyQuery, Output> {
    let (lat, lon) = (lat.trim(), lon.trim());
    if lat.is_empty() || lon.is_empty() {
        return Err(Output::text(NEARBY_PROMPT));
    }
    let center_type = match center_type.trim() {
        "" => "general".to_string(),
        value => value.to_lowercase(),
    };
    Ok(NearbyQuery {
        lat: lat.to_string(),
        lon: lon.to_string(),
        center_type,
    })
}

pub fn render_nearby(reply: Result<NearbyReport, ClientError>) -> Output {
    let report = match reply {
        Ok(report) => report,
        Err(err) => return Output::error(&err),
    };
    if report.centers.is_empty() {
        return Output::text(NO_CENTERS);
    }
    let lines: Vec<String> = report
        .centers
        .iter()
        .map(|center| {
            format!(
                "{} ({}) at {:.4}, {:.4}",
                center.name, center.center_type, center.lat, center.lon
            )
        })
        .collect();
    Output::Text(lines.join("\n"))
}

/// Reads the longest leading decimal number, falling back to 0.
///
/// Leading whitespace is skipped and trailing garbage ignored, so `"12kwh"`
/// reads as 12. Empty, unparsable and non-finite input all yield 0.
pub fn parse_number(raw: &str) -> f64 {
    let trimmed = raw.trim_start();
    let len = numeric_prefix_len(trimmed.as_bytes());
    trimmed[..len]
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .map(|value| if value == 0.0 { 0.0 } else { value })
        .unwrap_or(0.0)
}

/// Length of `[+-] digits [. digits] [(e|E) [+-] digits]` at the start of
/// `bytes`, or 0 when the mantissa has no digit. An exponent marker without
/// digits is left out of the prefix.
fn numeric_prefix_len(bytes: &[u8]) -> usize {
    let digits_end =
        |start: usize| start + bytes[start..].iter().take_while(|b| b.is_ascii_digit()).count();

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_end = digits_end(end);
    let mut mantissa_digits = int_end - end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_end(end + 1);
        mantissa_digits += frac_end - end - 1;
        end = frac_end;
    }
    if mantissa_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_start = end + 1;
        if matches!(bytes.get(exp_start), Some(b'+' | b'-')) {
            exp_start += 1;
        }
        let exp_end = digits_end(exp_start);
        if exp_end > exp_start {
            end = exp_end;
        }
    }
    end
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecyclingCenter;

    fn upload(name: &str) -> Upload {
        Upload {
            file_name: name.to_string(),
            content_type: Some("image/png".to_string()),
            bytes: vec![1, 2, 3],
        }
    }

    #[test]
    fn classify_guard_requires_a_file() {
        assert_eq!(classify_request(None).unwrap_err(), Output::text(UPLOAD_PROMPT));
        assert_eq!(
            classify_request(Some(upload(""))).unwrap_err(),
            Output::text(UPLOAD_PROMPT)
        );
        assert!(classify_request(Some(upload("bottle.png"))).is_ok());
    }

    #[test]
    fn classification_renders_label_markup() {
        let output = render_classification(Ok(Prediction {
            prediction: "Plastic".into(),
            waste_type: None,
            recycling_process: None,
            dustbin: None,
        }));
        assert_eq!(
            output,
            Output::Markup("Detected Waste Category: <strong>Plastic</strong>".into())
        );
    }

    #[test]
    fn classification_appends_known_details_escaped() {
        let output = render_classification(Ok(Prediction {
            prediction: "<glass>".into(),
            waste_type: Some("Glass Waste".into()),
            recycling_process: None,
            dustbin: Some("Blue Bin".into()),
        }));
        assert_eq!(
            output,
            Output::Markup(
                "Detected Waste Category: <strong>&lt;glass&gt;</strong><br>Waste Type: Glass Waste<br>Dustbin: Blue Bin"
                    .into()
            )
        );
    }

    #[test]
    fn server_errors_render_verbatim() {
        let err = ClientError::Server("X".into());
        assert_eq!(render_classification(Err(ClientError::Server("X".into()))), Output::text("Error: X"));
        assert_eq!(render_soil(Err(ClientError::Server("X".into()))), Output::text("Error: X"));
        assert_eq!(render_footprint(Err(err)), Output::text("Error: X"));
    }

    #[test]
    fn decode_errors_render_message() {
        let err = serde_json::from_str::<SoilReport>("not json").unwrap_err();
        let message = err.to_string();
        assert_eq!(
            render_soil(Err(ClientError::Decode(err))),
            Output::Text(format!("Error: {message}"))
        );
    }

    #[test]
    fn soil_guard_requires_both_values() {
        assert_eq!(soil_request("", "low").unwrap_err(), Output::text(SOIL_PROMPT));
        assert_eq!(soil_request("6.5", "").unwrap_err(), Output::text(SOIL_PROMPT));
        assert_eq!(
            soil_request("6.5", "low").unwrap(),
            SoilRequest {
                ph: "6.5".into(),
                potash_level: "low".into()
            }
        );
    }

    #[test]
    fn soil_result_is_rendered_verbatim() {
        let output = render_soil(Ok(SoilReport {
            result: "Soil Type: Neutral Soil\n".into(),
        }));
        assert_eq!(output, Output::text("Soil Type: Neutral Soil\n"));
    }

    #[test]
    fn footprint_defaults_missing_values_to_zero() {
        let request = footprint_request("", "10", "5");
        assert_eq!(
            request,
            FootprintRequest {
                electricity: 0.0,
                water: 10.0,
                transport: 5.0
            }
        );
    }

    #[test]
    fn footprint_renders_heading() {
        let output = render_footprint(Ok(FootprintReport {
            footprint: "42 kg CO2".into(),
        }));
        assert_eq!(output, Output::text("Estimated Carbon Footprint:\n42 kg CO2"));
    }

    #[test]
    fn parse_number_reads_leading_digits() {
        assert_eq!(parse_number("12.5"), 12.5);
        assert_eq!(parse_number("  7"), 7.0);
        assert_eq!(parse_number("12kwh"), 12.0);
        assert_eq!(parse_number("3.5e2 litres"), 350.0);
        assert_eq!(parse_number("1e"), 1.0);
        assert_eq!(parse_number("-4"), -4.0);
        assert_eq!(parse_number(".5"), 0.5);
    }

    #[test]
    fn parse_number_falls_back_to_zero() {
        assert_eq!(parse_number(""), 0.0);
        assert_eq!(parse_number("abc"), 0.0);
        assert_eq!(parse_number("-"), 0.0);
        assert_eq!(parse_number("1e999"), 0.0);
        assert!(parse_number("-0").is_sign_positive());
        assert_eq!(parse_number("."), 0.0);
        assert_eq!(parse_number("e5"), 0.0);
    }

    #[test]
    fn parse_number_stops_at_grammar_boundary() {
        assert_eq!(parse_number("+7"), 7.0);
        assert_eq!(parse_number("5."), 5.0);
        assert_eq!(parse_number("1.2.3"), 1.2);
        assert_eq!(parse_number("12.5e+3x"), 12500.0);
        assert_eq!(parse_number("4e-"), 4.0);
        assert_eq!(parse_number("2--3"), 2.0);
    }

    #[test]
    fn parse_number_is_linear_on_long_input() {
        let n = 200_000;
        let digits_then_markers = "1".repeat(n) + &"e".repeat(n);
        let started = std::time::Instant::now();
        assert_eq!(parse_number(&digits_then_markers), 0.0);
        assert_eq!(parse_number(&("3".to_string() + &"e".repeat(n))), 3.0);
        assert!(started.elapsed() < std::time::Duration::from_secs(2));
    }

    #[test]
    fn nearby_guard_and_type_default() {
        assert_eq!(nearby_request("", "1", "").unwrap_err(), Output::text(NEARBY_PROMPT));
        let query = nearby_request("12.9", "77.6", "").unwrap();
        assert_eq!(query.center_type, "general");
        let query = nearby_request("12.9", "77.6", "Plastic").unwrap();
        assert_eq!(query.center_type, "plastic");
    }

    #[test]
    fn nearby_lists_centers() {
        let output = render_nearby(Ok(NearbyReport {
            centers: vec![RecyclingCenter {
                name: "Eco Recycling Hub".into(),
                lat: 12.91,
                lon: 77.61,
                center_type: "plastic".into(),
            }],
        }));
        assert_eq!(output, Output::text("Eco Recycling Hub (plastic) at 12.9100, 77.6100"));
        assert_eq!(
            render_nearby(Ok(NearbyReport { centers: vec![] })),
            Output::text(NO_CENTERS)
        );
    }

    #[test]
    fn stale_ticket_cannot_overwrite_newer_output() {
        let mut panel = Panel::default();
        let first = panel.begin(Some(Output::text(CLASSIFYING)));
        let second = panel.begin(Some(Output::text(CLASSIFYING)));

        assert!(panel.settle(second, Output::text("second")));
        assert!(!panel.settle(first, Output::text("first")));
        assert_eq!(panel.output(), &Output::text("second"));
    }

    #[test]
    fn guard_message_supersedes_in_flight_request() {
        let mut panel = Panel::default();
        let ticket = panel.begin(Some(Output::text(CLASSIFYING)));
        panel.show(Output::text(UPLOAD_PROMPT));

        assert!(!panel.is_current(ticket));
        assert!(!panel.settle(ticket, Output::text("late")));
        assert_eq!(panel.output(), &Output::text(UPLOAD_PROMPT));
    }

    #[test]
    fn begin_without_pending_keeps_previous_output() {
        let mut panel = Panel::default();
        panel.show(Output::text("Soil Type: Neutral Soil"));
        let ticket = panel.begin(None);
        assert_eq!(panel.output(), &Output::text("Soil Type: Neutral Soil"));
        assert!(panel.settle(ticket, Output::text("Soil Type: Acidic Soil")));
        assert_eq!(panel.output(), &Output::text("Soil Type: Acidic Soil"));
    }
}
