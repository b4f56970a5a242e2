use anyhow::{anyhow, Context, Result};
use frac_core::{Fraction, Operand};
use serde::Serialize;
use std::cmp::Ordering;
use std::str::FromStr;

/// Binary operator accepted by `frac calc`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
        }
    }

    pub fn apply(self, lhs: Fraction, rhs: Operand) -> frac_core::Result<Fraction> {
        match self {
            BinaryOp::Add => lhs.checked_add(rhs),
            BinaryOp::Sub => lhs.checked_sub(rhs),
            BinaryOp::Mul => lhs.checked_mul(rhs),
            BinaryOp::Div => lhs.checked_div(rhs),
        }
    }
}

impl FromStr for BinaryOp {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "+" | "add" => Ok(BinaryOp::Add),
            "-" | "sub" => Ok(BinaryOp::Sub),
            "*" | "x" | "mul" => Ok(BinaryOp::Mul),
            "/" | "div" => Ok(BinaryOp::Div),
            other => Err(anyhow!("Unknown operator '{}', expected one of + - * /", other)),
        }
    }
}

/// Every rendering of a single value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub fraction: Fraction,
    pub canonical: String,
    pub mixed: String,
    pub float: f64,
    pub integer: i64,
}

impl Report {
    pub fn new(fraction: Fraction, precision: i32) -> Self {
        Report {
            fraction,
            canonical: fraction.to_str(),
            mixed: fraction.to_mixed_string(),
            float: fraction.to_float_with_precision(precision),
            integer: fraction.to_int(),
        }
    }

    fn render(&self) -> String {
        format!(
            "Fraction: {}\nMixed:    {}\nFloat:    {}\nInteger:  {}",
            self.canonical, self.mixed, self.float, self.integer
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub lhs: Fraction,
    pub rhs: Fraction,
    pub ordering: &'static str,
}

impl Comparison {
    fn render(&self) -> String {
        format!("{} {} {}", self.lhs, self.ordering, self.rhs)
    }
}

/// Output of one subcommand, rendered as text or JSON
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    Report(Report),
    Comparison(Comparison),
}

impl Outcome {
    pub fn render(&self, format: &str) -> Result<String> {
        match format {
            "json" => Ok(serde_json::to_string_pretty(self)?),
            _ => Ok(match self {
                Outcome::Report(report) => report.render(),
                Outcome::Comparison(comparison) => comparison.render(),
            }),
        }
    }
}

fn parse_fraction(text: &str) -> Result<Fraction> {
    text.parse::<Operand>()
        .map(Operand::into_fraction)
        .with_context(|| format!("Failed to parse '{}'", text))
}

pub fn show(text: &str, precision: i32) -> Result<Outcome> {
    let fraction = parse_fraction(text)?;
    Ok(Outcome::Report(Report::new(fraction, precision)))
}

pub fn calc(lhs: &str, op: &str, rhs: &str, precision: i32) -> Result<Outcome> {
    let op: BinaryOp = op.parse()?;
    let lhs = parse_fraction(lhs)?;
    let rhs: Operand = rhs
        .parse()
        .with_context(|| format!("Failed to parse '{}'", rhs))?;

    log::debug!("evaluating {} {} {:?}", lhs, op.symbol(), rhs);
    let result = op
        .apply(lhs, rhs)
        .with_context(|| format!("Failed to evaluate {} {} {}", lhs, op.symbol(), rhs.into_fraction()))?;
    Ok(Outcome::Report(Report::new(result, precision)))
}

pub fn compare(lhs: &str, rhs: &str) -> Result<Outcome> {
    let lhs = parse_fraction(lhs)?;
    let rhs = parse_fraction(rhs)?;
    let ordering = match lhs.cmp(&rhs) {
        Ordering::Less => "<",
        Ordering::Equal => "=",
        Ordering::Greater => ">",
    };
    Ok(Outcome::Comparison(Comparison { lhs, rhs, ordering }))
}

pub fn approx(value: f64, max_denominator: i64, precision: i32) -> Result<Outcome> {
    let fraction = Fraction::from_float_with_max_denominator(value, max_denominator)
        .with_context(|| format!("Failed to approximate {}", value))?;
    log::debug!("{} ~= {} (max denominator {})", value, fraction, max_denominator);
    Ok(Outcome::Report(Report::new(fraction, precision)))
}
