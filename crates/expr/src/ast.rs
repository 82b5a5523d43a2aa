use crate::EvalError;

/// A node of a parsed expression tree.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Node {
    Number(f64),
    Var,
    Neg(Box<Node>),
    Binary {
        op: BinaryOp,
        lhs: Box<Node>,
        rhs: Box<Node>,
    },
    Call {
        func: Func,
        args: Vec<Node>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

/// Built-in functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Func {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sinh,
    Cosh,
    Tanh,
    Exp,
    Ln,
    Log,
    Log10,
    Log2,
    Sqrt,
    Cbrt,
    Abs,
    Floor,
    Ceil,
    Sign,
    Pow,
    Min,
    Max,
}

impl Func {
    /// Looks up a built-in function by name.
    pub(crate) fn lookup(name: &str) -> Option<Self> {
        let func = match name {
            "sin" => Self::Sin,
            "cos" => Self::Cos,
            "tan" => Self::Tan,
            "asin" => Self::Asin,
            "acos" => Self::Acos,
            "atan" => Self::Atan,
            "sinh" => Self::Sinh,
            "cosh" => Self::Cosh,
            "tanh" => Self::Tanh,
            "exp" => Self::Exp,
            "ln" => Self::Ln,
            "log" => Self::Log,
            "log10" => Self::Log10,
            "log2" => Self::Log2,
            "sqrt" => Self::Sqrt,
            "cbrt" => Self::Cbrt,
            "abs" => Self::Abs,
            "floor" => Self::Floor,
            "ceil" => Self::Ceil,
            "sign" => Self::Sign,
            "pow" => Self::Pow,
            "min" => Self::Min,
            "max" => Self::Max,
            _ => return None,
        };
        Some(func)
    }

    pub(crate) fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Asin => "asin",
            Self::Acos => "acos",
            Self::Atan => "atan",
            Self::Sinh => "sinh",
            Self::Cosh => "cosh",
            Self::Tanh => "tanh",
            Self::Exp => "exp",
            Self::Ln => "ln",
            Self::Log => "log",
            Self::Log10 => "log10",
            Self::Log2 => "log2",
            Self::Sqrt => "sqrt",
            Self::Cbrt => "cbrt",
            Self::Abs => "abs",
            Self::Floor => "floor",
            Self::Ceil => "ceil",
            Self::Sign => "sign",
            Self::Pow => "pow",
            Self::Min => "min",
            Self::Max => "max",
        }
    }

    /// Human-readable argument count, used in arity errors.
    pub(crate) fn expected_args(self) -> &'static str {
        match self {
            Self::Log => "1 or 2",
            Self::Pow | Self::Min | Self::Max => "2",
            _ => "1",
        }
    }

    pub(crate) fn accepts(self, count: usize) -> bool {
        match self {
            Self::Log => count == 1 || count == 2,
            Self::Pow | Self::Min | Self::Max => count == 2,
            _ => count == 1,
        }
    }

    #[allow(clippy::float_cmp)]
    fn apply(self, args: &[f64], x: f64) -> Result<f64, EvalError> {
        let domain = |arg: f64| EvalError::Domain {
            op: self.name(),
            arg,
            x,
        };

        let a = args[0];
        let value = match self {
            Self::Sin => a.sin(),
            Self::Cos => a.cos(),
            Self::Tan => a.tan(),
            Self::Asin | Self::Acos if !(-1.0..=1.0).contains(&a) => return Err(domain(a)),
            Self::Asin => a.asin(),
            Self::Acos => a.acos(),
            Self::Atan => a.atan(),
            Self::Sinh => a.sinh(),
            Self::Cosh => a.cosh(),
            Self::Tanh => a.tanh(),
            Self::Exp => a.exp(),
            Self::Ln | Self::Log | Self::Log10 | Self::Log2 if a <= 0.0 => return Err(domain(a)),
            Self::Ln => a.ln(),
            Self::Log => match args.get(1) {
                None => a.ln(),
                Some(&base) if base <= 0.0 || (base - 1.0).abs() < f64::EPSILON => {
                    return Err(domain(base));
                }
                Some(&base) => a.log(base),
            },
            Self::Log10 => a.log10(),
            Self::Log2 => a.log2(),
            Self::Sqrt if a < 0.0 => return Err(domain(a)),
            Self::Sqrt => a.sqrt(),
            Self::Cbrt => a.cbrt(),
            Self::Abs => a.abs(),
            Self::Floor => a.floor(),
            Self::Ceil => a.ceil(),
            Self::Sign => {
                if a == 0.0 {
                    0.0
                } else {
                    a.signum()
                }
            }
            Self::Pow => power(a, args[1], x)?,
            Self::Min => a.min(args[1]),
            Self::Max => a.max(args[1]),
        };
        Ok(value)
    }
}

/// Real power; fails where the result has no real value.
fn power(base: f64, exponent: f64, x: f64) -> Result<f64, EvalError> {
    let value = base.powf(exponent);
    if value.is_nan() && !base.is_nan() && !exponent.is_nan() {
        return Err(EvalError::Domain {
            op: "^",
            arg: base,
            x,
        });
    }
    Ok(value)
}

impl Node {
    /// Evaluates the tree with the variable bound to `x`.
    #[allow(clippy::float_cmp)]
    pub(crate) fn eval(&self, x: f64) -> Result<f64, EvalError> {
        match self {
            Node::Number(value) => Ok(*value),
            Node::Var => Ok(x),
            Node::Neg(inner) => Ok(-inner.eval(x)?),
            Node::Binary { op, lhs, rhs } => {
                let lhs = lhs.eval(x)?;
                let rhs = rhs.eval(x)?;
                match op {
                    BinaryOp::Add => Ok(lhs + rhs),
                    BinaryOp::Sub => Ok(lhs - rhs),
                    BinaryOp::Mul => Ok(lhs * rhs),
                    BinaryOp::Div if rhs == 0.0 => Err(EvalError::DivisionByZero { x }),
                    BinaryOp::Div => Ok(lhs / rhs),
                    BinaryOp::Pow => power(lhs, rhs, x),
                }
            }
            Node::Call { func, args } => {
                let values = args
                    .iter()
                    .map(|arg| arg.eval(x))
                    .collect::<Result<Vec<_>, _>>()?;
                func.apply(&values, x)
            }
        }
    }
}
