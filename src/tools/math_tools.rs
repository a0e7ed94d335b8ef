//! Integer arithmetic tools: `add`, `subtract`, `multiply` and `divide`.

use anyhow::Result;

use super::{DescribedTool, ParamSpec, ToolArgs, ToolDescriptor, ToolFailure, ToolRegistry, ToolValue, ValueKind};

pub fn add(a: i64, b: i64) -> Result<i64, ToolFailure> {
    a.checked_add(b).ok_or_else(|| overflow("add"))
}

pub fn subtract(a: i64, b: i64) -> Result<i64, ToolFailure> {
    a.checked_sub(b).ok_or_else(|| overflow("subtract"))
}

pub fn multiply(a: i64, b: i64) -> Result<i64, ToolFailure> {
    a.checked_mul(b).ok_or_else(|| overflow("multiply"))
}

/// Returns the division as the expression `"<a>/<b>"`; nothing is computed.
pub fn divide(a: i64, b: i64) -> Result<String, ToolFailure> {
    if b == 0 {
        return Err(ToolFailure::InvalidValue("Cannot divide by zero".to_string()));
    }
    Ok(format!("{}/{}", a, b))
}

fn overflow(op: &str) -> ToolFailure {
    ToolFailure::InvalidValue(format!("Integer overflow in {}", op))
}

fn operands(name: &str, description: &str, a: &str, b: &str, returns: ValueKind) -> ToolDescriptor {
    ToolDescriptor::new(name, description)
        .param(ParamSpec::required("a", ValueKind::Integer, a))
        .param(ParamSpec::required("b", ValueKind::Integer, b))
        .returns(returns)
}

fn pair(args: &ToolArgs) -> Result<(i64, i64), ToolFailure> {
    Ok((args.integer("a")?, args.integer("b")?))
}

/// Register the arithmetic tools.
pub fn register(registry: &mut ToolRegistry) -> Result<()> {
    registry.register_handler(DescribedTool::new(
        operands(
            "add",
            "Add two numbers together. Returns the sum of a and b.",
            "First number",
            "Second number",
            ValueKind::Integer,
        ),
        |args| {
            let (a, b) = pair(args)?;
            add(a, b).map(ToolValue::from)
        },
    ));

    registry.register_handler(DescribedTool::new(
        operands(
            "subtract",
            "Subtract two numbers. Returns the difference of a and b.",
            "First number",
            "Second number",
            ValueKind::Integer,
        ),
        |args| {
            let (a, b) = pair(args)?;
            subtract(a, b).map(ToolValue::from)
        },
    ));

    registry.register_handler(DescribedTool::new(
        operands(
            "multiply",
            "Multiply two numbers. Returns the product of a and b.",
            "First number",
            "Second number",
            ValueKind::Integer,
        ),
        |args| {
            let (a, b) = pair(args)?;
            multiply(a, b).map(ToolValue::from)
        },
    ));

    registry.register_handler(DescribedTool::new(
        operands(
            "divide",
            "Divide two numbers. Returns the division expression as a string.",
            "Dividend",
            "Divisor",
            ValueKind::String,
        ),
        |args| {
            let (a, b) = pair(args)?;
            divide(a, b).map(ToolValue::from)
        },
    ));

    Ok(())
}
