use std::rc::Rc;

/// Source-level rendering of the syntax tree.
///
/// Printing a [`Program`] yields source text that parses back into an
/// equivalent program.
pub mod display;

/// A numeric literal as written in source code.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumberLiteral {
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A 64-bit floating-point literal.
    Float(f64),
}

impl From<i64> for NumberLiteral {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for NumberLiteral {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Every variant carries the line it starts on, used for diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// An integer or float literal.
    Number {
        /// The literal value.
        value: NumberLiteral,
        /// Line number in the source code.
        line:  usize,
    },
    /// A string literal.
    String {
        /// The contents, without the quotes.
        value: String,
        /// Line number in the source code.
        line:  usize,
    },
    /// `true` or `false`.
    Boolean {
        /// The literal value.
        value: bool,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary operation.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A unary operation (`-x`, `not x`).
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// `[a, b, c]`
    ListLiteral {
        /// Elements of the list.
        elements: Vec<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// `(a, b, c)` or `()`
    TupleLiteral {
        /// Elements of the tuple.
        elements: Vec<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// `{a, b, c}`
    SetLiteral {
        /// Elements of the set.
        elements: Vec<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// `{k: v, ...}`
    MapLiteral {
        /// Key and value expressions in source order.
        entries: Vec<(Self, Self)>,
        /// Line number in the source code.
        line:    usize,
    },
    /// Indexing expression, such as `items[2]` or `table["key"]`.
    Index {
        /// The indexed value.
        target: Box<Self>,
        /// The index or key.
        index:  Box<Self>,
        /// Line number in the source code.
        line:   usize,
    },
    /// Call expression, such as `square(3)` or `math.square(3)`.
    Call {
        /// The expression producing the callee.
        callee:    Box<Self>,
        /// Arguments to the function.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// Attribute access, such as `math.pi`.
    AttributeAccess {
        /// The value whose attribute is read.
        target: Box<Self>,
        /// The attribute name.
        name:   String,
        /// Line number in the source code.
        line:   usize,
    },
    /// `x++`
    PostfixIncrement {
        /// Name of the incremented variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// `x--`
    PostfixDecrement {
        /// Name of the decremented variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// The target of a tuple assignment, such as `(a, b)` in `(a, b) = pair`.
    TuplePattern {
        /// The names bound positionally.
        names: Vec<String>,
        /// Line number in the source code.
        line:  usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use quirk::ast::Expr;
    ///
    /// let expr = Expr::Variable { name: "x".to_string(),
    ///                             line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Number { line, .. }
            | Self::String { line, .. }
            | Self::Boolean { line, .. }
            | Self::Variable { line, .. }
            | Self::BinaryOp { line, .. }
            | Self::UnaryOp { line, .. }
            | Self::ListLiteral { line, .. }
            | Self::TupleLiteral { line, .. }
            | Self::SetLiteral { line, .. }
            | Self::MapLiteral { line, .. }
            | Self::Index { line, .. }
            | Self::Call { line, .. }
            | Self::AttributeAccess { line, .. }
            | Self::PostfixIncrement { line, .. }
            | Self::PostfixDecrement { line, .. }
            | Self::TuplePattern { line, .. } => *line,
        }
    }
}

/// Represents a user-defined function definition.
///
/// Definitions are shared between the syntax tree, the function table and
/// any variable holding the function, so they live behind an [`Rc`].
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// The name of the function.
    pub name:   String,
    /// The parameter names, bound positionally on call.
    pub params: Vec<String>,
    /// The statements executed when the function is called.
    pub body:   Vec<Statement>,
    /// Line number in the source code.
    pub line:   usize,
}

/// Represents a statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `target = value`, where the target is a [`Expr::Variable`] or an
    /// [`Expr::TuplePattern`].
    Assign {
        /// The assignment target.
        target: Expr,
        /// The assigned expression.
        value:  Expr,
        /// Line number in the source code.
        line:   usize,
    },
    /// `name op= value`
    CompoundAssign {
        /// The name of the variable.
        name:  String,
        /// The compound operator.
        op:    CompoundOperator,
        /// The right-hand side.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// `print a, b with sep ", " end "!"`
    Print {
        /// The printed expressions.
        values: Vec<Expr>,
        /// Separator override.
        sep:    Option<Expr>,
        /// Terminator override.
        end:    Option<Expr>,
        /// Line number in the source code.
        line:   usize,
    },
    /// A standalone expression evaluated for its effect.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// `if cond ... [else ...] end`
    If {
        /// The condition.
        condition:   Expr,
        /// Statements executed when the condition is truthy.
        then_branch: Vec<Self>,
        /// Statements executed otherwise.
        else_branch: Option<Vec<Self>>,
        /// Line number in the source code.
        line:        usize,
    },
    /// `while cond ... end`
    While {
        /// The loop condition, re-evaluated before each iteration.
        condition: Expr,
        /// The loop body.
        body:      Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// `for name in iterable ... end`
    ForEach {
        /// The loop variable.
        variable: String,
        /// The iterated expression.
        iterable: Expr,
        /// The loop body.
        body:     Vec<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// `function name(params) ... end`
    FunctionDef(Rc<FunctionDef>),
    /// `return [value]`
    Return {
        /// The returned expression; `None` returns `none`.
        value: Option<Expr>,
        /// Line number in the source code.
        line:  usize,
    },
    /// `break`
    Break {
        /// Line number in the source code.
        line: usize,
    },
    /// `continue`
    Continue {
        /// Line number in the source code.
        line: usize,
    },
    /// `import name`
    Import {
        /// The module name.
        module: String,
        /// Line number in the source code.
        line:   usize,
    },
}

impl Statement {
    /// Gets the line number from `self`.
    #[must_use]
    pub fn line_number(&self) -> usize {
        match self {
            Self::FunctionDef(def) => def.line,
            Self::Assign { line, .. }
            | Self::CompoundAssign { line, .. }
            | Self::Print { line, .. }
            | Self::Expression { line, .. }
            | Self::If { line, .. }
            | Self::While { line, .. }
            | Self::ForEach { line, .. }
            | Self::Return { line, .. }
            | Self::Break { line }
            | Self::Continue { line }
            | Self::Import { line, .. } => *line,
        }
    }
}

/// A parsed source file: the sequence of its top-level statements.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// Top-level statements in source order.
    pub statements: Vec<Statement>,
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// True division (`/`)
    Div,
    /// Floor division (`//`)
    IntDiv,
    /// Modulo (`%`)
    Mod,
    /// Exponentiation (`**`)
    Pow,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Greater than (`>`)
    Greater,
    /// Less than (`<`)
    Less,
    /// Logical and (`and`)
    And,
    /// Logical or (`or`)
    Or,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (`-x`).
    Negate,
    /// Logical NOT (`not x`).
    Not,
}

/// Represents the operator of a compound assignment.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CompoundOperator {
    /// `+=`
    Add,
    /// `-=`
    Sub,
    /// `++=`, in-place set union.
    Union,
    /// `--=`, in-place set difference.
    Difference,
    /// `~~=`, in-place symmetric difference.
    SymmetricDifference,
}

impl CompoundOperator {
    /// The arithmetic operator applied by `+=` and `-=`, or `None` for the
    /// in-place set operators.
    #[must_use]
    pub const fn arithmetic(self) -> Option<BinaryOperator> {
        match self {
            Self::Add => Some(BinaryOperator::Add),
            Self::Sub => Some(BinaryOperator::Sub),
            Self::Union | Self::Difference | Self::SymmetricDifference => None,
        }
    }
}
