use liquid_core::parser::FilterArguments;
use liquid_core::runtime::Expression;
use liquid_core::{Error, Result as LiquidResult, Runtime, Value, ValueView};

/// Take the one positional argument a filter accepts
pub fn single_argument(filter: &str, mut args: FilterArguments) -> LiquidResult<Expression> {
    let arity_error = || Error::with_msg(format!("{} expects exactly one argument", filter));

    let expr = args.positional.next().ok_or_else(arity_error)?;
    if args.positional.next().is_some() || args.keyword.next().is_some() {
        return Err(arity_error());
    }

    Ok(expr)
}

/// Evaluate a count argument to a non-negative integer
pub fn evaluate_count(
    filter: &str,
    expr: &Expression,
    runtime: &dyn Runtime,
) -> LiquidResult<usize> {
    let value = expr.evaluate(runtime)?;

    value
        .as_scalar()
        .and_then(|scalar| scalar.to_integer())
        .and_then(|n| usize::try_from(n).ok())
        .ok_or_else(|| {
            Error::with_msg(format!(
                "{} expects a non-negative integer, got '{}'",
                filter,
                value.to_kstr()
            ))
        })
}

/// Copy the items of an array input
pub fn array_values(filter: &str, input: &dyn ValueView) -> LiquidResult<Vec<Value>> {
    input
        .as_array()
        .map(|array| array.values().map(|v| v.to_value()).collect())
        .ok_or_else(|| Error::with_msg(format!("{} expects an array input", filter)))
}
