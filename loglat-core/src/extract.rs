use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Where the latency value lives on a matched line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum ExtractionPolicy {
    /// Last whitespace-delimited field.
    #[default]
    LastField,

    /// Zero-based whitespace-delimited field, for logs with positional
    /// date/time columns in front of the reading.
    FieldIndex { index: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("line has no fields")]
    NoFields,

    #[error("line has no field at index {index}")]
    MissingField { index: usize },

    #[error("no float: {token}")]
    NotANumber { token: String },
}

impl ExtractError {
    /// The offending token, when there was one.
    pub fn token(&self) -> Option<&str> {
        match self {
            Self::NotANumber { token } => Some(token),
            _ => None,
        }
    }
}

impl ExtractionPolicy {
    pub fn token<'a>(&self, line: &'a str) -> Result<&'a str, ExtractError> {
        match *self {
            Self::LastField => line.split_whitespace().next_back().ok_or(ExtractError::NoFields),
            Self::FieldIndex { index } => line
                .split_whitespace()
                .nth(index)
                .ok_or(ExtractError::MissingField { index }),
        }
    }

    /// Parse the selected token as a single-precision float.
    ///
    /// Finite-looking tokens beyond the `f32` range are rejected rather than
    /// saturated to infinity.
    pub fn extract(&self, line: &str) -> Result<f32, ExtractError> {
        let token = self.token(line)?;
        let not_a_number = || ExtractError::NotANumber {
            token: token.to_string(),
        };

        let value = token.parse::<f32>().map_err(|_| not_a_number())?;
        if value.is_infinite() && !spells_infinity(token) {
            return Err(not_a_number());
        }
        Ok(value)
    }
}

fn spells_infinity(token: &str) -> bool {
    let unsigned = token.strip_prefix(['+', '-']).unwrap_or(token);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

#[cfg(test)]
mod tests {
    use super::{ExtractError, ExtractionPolicy};
    use pretty_assertions::assert_eq;

    const LINE: &str = "2024-01-01 10:00:00 GET /api 200 0.120";

    #[test]
    fn last_field_is_the_default() {
        assert_eq!(ExtractionPolicy::default(), ExtractionPolicy::LastField);
        assert_eq!(ExtractionPolicy::LastField.extract(LINE), Ok(0.120_f32));
    }

    #[test]
    fn last_field_ignores_trailing_whitespace() {
        assert_eq!(ExtractionPolicy::LastField.extract("GET 1.5  \t"), Ok(1.5));
    }

    #[test]
    fn field_index_reads_positional_column() {
        let policy = ExtractionPolicy::FieldIndex { index: 4 };
        assert_eq!(policy.extract(LINE), Ok(200.0));
    }

    #[test]
    fn field_index_past_the_end_is_missing() {
        let policy = ExtractionPolicy::FieldIndex { index: 9 };
        assert_eq!(
            policy.extract(LINE),
            Err(ExtractError::MissingField { index: 9 })
        );
    }

    #[test]
    fn non_numeric_token_is_reported() {
        let err = ExtractionPolicy::LastField
            .extract("GET /api 200 N/A")
            .unwrap_err();
        assert_eq!(err.token(), Some("N/A"));
        assert_eq!(err.to_string(), "no float: N/A");
    }

    #[test]
    fn out_of_range_token_is_not_a_number() {
        for token in ["1e39", "-1e40", "340282370000000000000000000000000000000000"] {
            let line = format!("GET /api 200 {token}");
            let err = ExtractionPolicy::LastField.extract(&line).unwrap_err();
            assert_eq!(err.token(), Some(token));
        }
    }

    #[test]
    fn largest_finite_value_is_accepted() {
        assert_eq!(
            ExtractionPolicy::LastField.extract("GET 3.4028235e38"),
            Ok(f32::MAX)
        );
    }

    #[test]
    fn spelled_out_infinity_is_kept() {
        assert_eq!(
            ExtractionPolicy::LastField.extract("GET inf"),
            Ok(f32::INFINITY)
        );
        assert_eq!(
            ExtractionPolicy::LastField.extract("GET -Infinity"),
            Ok(f32::NEG_INFINITY)
        );
    }

    #[test]
    fn blank_line_has_no_fields() {
        assert_eq!(
            ExtractionPolicy::LastField.extract("   "),
            Err(ExtractError::NoFields)
        );
    }
}
