use std::fmt::{self, Display, Formatter, Write};

use crate::{
    ast::{
        BinaryOperator, CompoundOperator, Expr, NumberLiteral, Program, Statement, UnaryOperator,
    },
    util::num::format_float,
};

const INDENT: &str = "    ";

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        use BinaryOperator::{Add, And, Div, Equal, Greater, IntDiv, Less, Mod, Mul, NotEqual, Or, Pow, Sub};
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            IntDiv => "//",
            Mod => "%",
            Pow => "**",
            Equal => "==",
            NotEqual => "!=",
            Greater => ">",
            Less => "<",
            And => "and",
            Or => "or",
        };
        f.write_str(operator)
    }
}

impl Display for UnaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negate => f.write_str("-"),
            Self::Not => f.write_str("not "),
        }
    }
}

impl Display for CompoundOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Add => "+=",
            Self::Sub => "-=",
            Self::Union => "++=",
            Self::Difference => "--=",
            Self::SymmetricDifference => "~~=",
        };
        f.write_str(operator)
    }
}

impl Display for NumberLiteral {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(r) => f.write_str(&format_float(*r)),
        }
    }
}

/// Writes `items` separated by `", "`.
fn write_list<T: Display>(f: &mut Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

/// Writes a parenthesized tuple; a single element keeps its trailing comma.
fn write_tuple<T: Display>(f: &mut Formatter<'_>, items: &[T]) -> fmt::Result {
    f.write_char('(')?;
    write_list(f, items)?;
    if items.len() == 1 {
        f.write_char(',')?;
    }
    f.write_char(')')
}

impl Display for Expr {
    /// Binary and unary operations are fully parenthesized so that the output
    /// never depends on precedence.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number { value, .. } => write!(f, "{value}"),
            Self::String { value, .. } => write!(f, "\"{value}\""),
            Self::Boolean { value, .. } => write!(f, "{value}"),
            Self::Variable { name, .. } => f.write_str(name),
            Self::BinaryOp { left, op, right, .. } => write!(f, "({left} {op} {right})"),
            Self::UnaryOp { op, expr, .. } => write!(f, "{op}({expr})"),
            Self::ListLiteral { elements, .. } => {
                f.write_char('[')?;
                write_list(f, elements)?;
                f.write_char(']')
            },
            Self::TupleLiteral { elements, .. } => write_tuple(f, elements),
            Self::SetLiteral { elements, .. } => {
                f.write_char('{')?;
                write_list(f, elements)?;
                f.write_char('}')
            },
            Self::MapLiteral { entries, .. } => {
                f.write_char('{')?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_char('}')
            },
            Self::Index { target, index, .. } => write!(f, "{target}[{index}]"),
            Self::Call { callee, arguments, .. } => {
                write!(f, "{callee}(")?;
                write_list(f, arguments)?;
                f.write_char(')')
            },
            Self::AttributeAccess { target, name, .. } => write!(f, "{target}.{name}"),
            Self::PostfixIncrement { name, .. } => write!(f, "{name}++"),
            Self::PostfixDecrement { name, .. } => write!(f, "{name}--"),
            Self::TuplePattern { names, .. } => write_tuple(f, names),
        }
    }
}

/// Writes a block body one level deeper than `depth`.
fn write_block(f: &mut Formatter<'_>, body: &[Statement], depth: usize) -> fmt::Result {
    for statement in body {
        write_statement(f, statement, depth + 1)?;
    }
    Ok(())
}

fn write_statement(f: &mut Formatter<'_>, statement: &Statement, depth: usize) -> fmt::Result {
    let indent = INDENT.repeat(depth);
    f.write_str(&indent)?;

    match statement {
        Statement::Assign { target, value, .. } => writeln!(f, "{target} = {value}"),
        Statement::CompoundAssign { name, op, value, .. } => writeln!(f, "{name} {op} {value}"),
        Statement::Print { values, sep, end, .. } => {
            f.write_str("print")?;
            if !values.is_empty() {
                f.write_char(' ')?;
                write_list(f, values)?;
            }
            if sep.is_some() || end.is_some() {
                f.write_str(" with")?;
                if let Some(sep) = sep {
                    write!(f, " sep {sep}")?;
                }
                if let Some(end) = end {
                    write!(f, " end {end}")?;
                }
            }
            writeln!(f)
        },
        Statement::Expression { expr, .. } => writeln!(f, "{expr}"),
        Statement::If { condition,
                        then_branch,
                        else_branch,
                        .. } => {
            writeln!(f, "if {condition}")?;
            write_block(f, then_branch, depth)?;
            if let Some(else_branch) = else_branch {
                writeln!(f, "{indent}else")?;
                write_block(f, else_branch, depth)?;
            }
            writeln!(f, "{indent}end")
        },
        Statement::While { condition, body, .. } => {
            writeln!(f, "while {condition}")?;
            write_block(f, body, depth)?;
            writeln!(f, "{indent}end")
        },
        Statement::ForEach { variable,
                             iterable,
                             body,
                             .. } => {
            writeln!(f, "for {variable} in {iterable}")?;
            write_block(f, body, depth)?;
            writeln!(f, "{indent}end")
        },
        Statement::FunctionDef(def) => {
            write!(f, "function {}(", def.name)?;
            write_list(f, &def.params)?;
            writeln!(f, ")")?;
            write_block(f, &def.body, depth)?;
            writeln!(f, "{indent}end")
        },
        Statement::Return { value: Some(value), .. } => writeln!(f, "return {value}"),
        Statement::Return { value: None, .. } => writeln!(f, "return"),
        Statement::Break { .. } => writeln!(f, "break"),
        Statement::Continue { .. } => writeln!(f, "continue"),
        Statement::Import { module, .. } => writeln!(f, "import {module}"),
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_statement(f, self, 0)
    }
}

impl Display for Program {
    /// Renders the program as source text, one statement per line with
    /// block bodies indented by four spaces.
    ///
    /// # Example
    /// ```
    /// use quirk::parse;
    ///
    /// let program = parse("if x > 1\nprint x * 2\nend").unwrap();
    ///
    /// assert_eq!(program.to_string(), "if (x > 1)\n    print (x * 2)\nend\n");
    /// ```
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write_statement(f, statement, 0)?;
        }
        Ok(())
    }
}
