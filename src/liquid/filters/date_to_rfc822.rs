use std::fmt;

use chrono::{DateTime, FixedOffset};
use liquid_core::parser::{FilterArguments, ParameterReflection, ParseFilter};
use liquid_core::{Error, FilterReflection, Result as LiquidResult, Runtime, Value, ValueView};

use crate::front_matter::types::DATE_FORMAT;

/// DateToRfc822 filter implementation
#[derive(Debug, Clone)]
pub struct DateToRfc822Filter;

impl fmt::Display for DateToRfc822Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "date_to_rfc822")
    }
}

fn parse_date(date_str: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(date_str)
        .or_else(|_| DateTime::parse_from_str(date_str, DATE_FORMAT))
        // Liquid's own date scalars print in this layout
        .or_else(|_| DateTime::parse_from_str(date_str, "%Y-%m-%d %H:%M:%S %z"))
        .ok()
}

impl liquid_core::Filter for DateToRfc822Filter {
    fn evaluate(&self, input: &dyn ValueView, _runtime: &dyn Runtime) -> LiquidResult<Value> {
        let date_str = input.to_kstr();
        let date = parse_date(date_str.trim()).ok_or_else(|| {
            Error::with_msg(format!("date_to_rfc822: invalid date '{}'", date_str))
        })?;

        Ok(Value::scalar(date.to_rfc2822()))
    }
}

/// Parse filter factory for date_to_rfc822
#[derive(Debug, Clone)]
pub struct DateToRfc822FilterParser;

impl FilterReflection for DateToRfc822FilterParser {
    fn name(&self) -> &str {
        "date_to_rfc822"
    }

    fn description(&self) -> &str {
        "Formats a date for RSS feeds (RFC 822)"
    }

    fn positional_parameters(&self) -> &'static [ParameterReflection] {
        &[]
    }

    fn keyword_parameters(&self) -> &'static [ParameterReflection] {
        &[]
    }
}

impl ParseFilter for DateToRfc822FilterParser {
    fn parse(&self, _args: FilterArguments) -> LiquidResult<Box<dyn liquid_core::Filter>> {
        Ok(Box::new(DateToRfc822Filter))
    }

    fn reflection(&self) -> &dyn FilterReflection {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use liquid_core::runtime::RuntimeBuilder;
    use liquid_core::Filter;

    fn evaluate(input: &str) -> LiquidResult<Value> {
        let runtime = RuntimeBuilder::new().build();
        DateToRfc822Filter.evaluate(Value::scalar(input.to_string()).as_view(), &runtime)
    }

    #[test]
    fn formats_fixed_layout_date() {
        let out = evaluate("2024-01-02T03:04:05+02:00").unwrap();
        let out = out.to_kstr();
        assert!(out.starts_with("Tue, "));
        assert!(out.ends_with("Jan 2024 03:04:05 +0200"));
    }

    #[test]
    fn rejects_garbage() {
        assert!(evaluate("yesterday").is_err());
    }
}
