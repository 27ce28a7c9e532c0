use std::fmt;

use liquid_core::parser::{FilterArguments, ParameterReflection, ParseFilter};
use liquid_core::runtime::Expression;
use liquid_core::{FilterReflection, Result as LiquidResult, Runtime, Value, ValueView};

use super::args::{array_values, single_argument};

/// Keeps the pages whose `type` equals the argument
#[derive(Debug)]
pub struct FilterByTypeFilter {
    page_type: Expression,
}

impl fmt::Display for FilterByTypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "filter_by_type: {}", self.page_type)
    }
}

impl liquid_core::Filter for FilterByTypeFilter {
    fn evaluate(&self, input: &dyn ValueView, runtime: &dyn Runtime) -> LiquidResult<Value> {
        let wanted = self.page_type.evaluate(runtime)?.to_kstr().to_string();
        let pages = array_values("filter_by_type", input)?;

        let matching = pages
            .into_iter()
            .filter(|page| {
                page.as_object()
                    .and_then(|obj| obj.get("type"))
                    .map_or(false, |t| t.to_kstr().as_str() == wanted)
            })
            .collect();

        Ok(Value::Array(matching))
    }
}

#[derive(Debug, Clone)]
pub struct FilterByTypeFilterParser;

const PARAMETERS: &[ParameterReflection] = &[ParameterReflection {
    name: "type",
    description: "Page type to keep",
    is_optional: false,
}];

impl FilterReflection for FilterByTypeFilterParser {
    fn name(&self) -> &str {
        "filter_by_type"
    }

    fn description(&self) -> &str {
        "Keeps the pages of an array whose type matches"
    }

    fn positional_parameters(&self) -> &'static [ParameterReflection] {
        PARAMETERS
    }

    fn keyword_parameters(&self) -> &'static [ParameterReflection] {
        &[]
    }
}

impl ParseFilter for FilterByTypeFilterParser {
    fn parse(&self, args: FilterArguments) -> LiquidResult<Box<dyn liquid_core::Filter>> {
        let page_type = single_argument("filter_by_type", args)?;
        Ok(Box::new(FilterByTypeFilter { page_type }))
    }

    fn reflection(&self) -> &dyn FilterReflection {
        self
    }
}
