//! Filter expressions evaluated against record batches
//!
//! A trimmed expression language over column values. Comparisons against a
//! null slot yield a null mask slot, which the filter kernel drops, so a
//! missing value never satisfies a comparison.

use std::collections::HashSet;

use arrow::array::{Array, ArrayRef, BooleanArray, Int32Array, Int64Array, StringArray};
use arrow::compute::kernels::cmp::{eq, gt};
use arrow::compute::{and, is_not_null};
use arrow::record_batch::RecordBatch;

use crate::error::{Result, TsvReaderError};
use crate::filter::core::{BatchFilter, filter_record_batch};

/// Represents a filter expression over record batch columns
#[derive(Debug, Clone)]
pub enum Expr {
    /// Column equals a literal value
    Eq(String, LiteralValue),

    /// Column is greater than a literal value
    Gt(String, LiteralValue),

    /// Column is not null
    IsNotNull(String),

    /// Logical AND of expressions
    And(Vec<Expr>),
}

/// Represents a literal value that can be used in filter expressions
#[derive(Debug, Clone)]
pub enum LiteralValue {
    /// Integer value
    Int(i64),

    /// String value
    String(String),
}

impl Expr {
    /// Returns a set of all column names required by this expression
    #[must_use]
    pub fn required_columns(&self) -> HashSet<String> {
        let mut columns = HashSet::new();
        self.collect_required_columns(&mut columns);
        columns
    }

    fn collect_required_columns(&self, columns: &mut HashSet<String>) {
        match self {
            Self::Eq(col, _) | Self::Gt(col, _) | Self::IsNotNull(col) => {
                columns.insert(col.clone());
            }
            Self::And(exprs) => {
                for expr in exprs {
                    expr.collect_required_columns(columns);
                }
            }
        }
    }
}

/// A filter that evaluates an expression against a record batch
#[derive(Debug, Clone)]
pub struct ExpressionFilter {
    expr: Expr,
}

impl ExpressionFilter {
    /// Create a new expression filter
    #[must_use]
    pub fn new(expr: Expr) -> Self {
        Self { expr }
    }

    /// Evaluate the filter's expression to a boolean mask over the batch
    pub fn mask(&self, batch: &RecordBatch) -> Result<BooleanArray> {
        self.evaluate_expr(batch, &self.expr)
    }

    fn evaluate_expr(&self, batch: &RecordBatch, expr: &Expr) -> Result<BooleanArray> {
        match expr {
            Expr::And(exprs) => self.evaluate_and_expression(batch, exprs),

            Expr::Eq(col_name, literal_value) => {
                Self::evaluate_eq_expression(batch, col_name, literal_value)
            }

            Expr::Gt(col_name, literal_value) => {
                Self::evaluate_gt_expression(batch, col_name, literal_value)
            }

            Expr::IsNotNull(col_name) => {
                let column = Self::column(batch, col_name)?;
                Ok(is_not_null(column.as_ref())?)
            }
        }
    }

    /// Evaluates a logical AND expression
    fn evaluate_and_expression(&self, batch: &RecordBatch, exprs: &[Expr]) -> Result<BooleanArray> {
        if exprs.is_empty() {
            return Ok(BooleanArray::from(vec![true; batch.num_rows()]));
        }

        let mut result = self.evaluate_expr(batch, &exprs[0])?;
        for expr in &exprs[1..] {
            let mask = self.evaluate_expr(batch, expr)?;
            result = and(&result, &mask)?;
        }
        Ok(result)
    }

    /// Evaluates an equality comparison expression
    fn evaluate_eq_expression(
        batch: &RecordBatch,
        col_name: &str,
        literal_value: &LiteralValue,
    ) -> Result<BooleanArray> {
        let column = Self::column(batch, col_name)?;

        match literal_value {
            LiteralValue::String(s) => {
                let values = Self::downcast::<StringArray>(column, col_name, "String")?;
                let literal = StringArray::from(vec![s.as_str(); values.len()]);
                Ok(eq(values, &literal)?)
            }
            LiteralValue::Int(n) => Self::compare_int(column, col_name, *n, eq),
        }
    }

    /// Evaluates a greater-than comparison expression
    fn evaluate_gt_expression(
        batch: &RecordBatch,
        col_name: &str,
        literal_value: &LiteralValue,
    ) -> Result<BooleanArray> {
        let column = Self::column(batch, col_name)?;

        match literal_value {
            LiteralValue::Int(n) => Self::compare_int(column, col_name, *n, gt),
            LiteralValue::String(_) => Err(TsvReaderError::FilterError(format!(
                "Unsupported literal type for greater-than comparison on column '{col_name}'"
            ))),
        }
    }

    /// Compares an integer column against a constant literal array
    fn compare_int(
        column: &ArrayRef,
        col_name: &str,
        n: i64,
        op: fn(&dyn arrow::array::Datum, &dyn arrow::array::Datum) -> arrow::error::Result<BooleanArray>,
    ) -> Result<BooleanArray> {
        if let Some(values) = column.as_any().downcast_ref::<Int32Array>() {
            let n = i32::try_from(n).map_err(|_| {
                TsvReaderError::FilterError(format!(
                    "Literal {n} out of range for Int32 column '{col_name}'"
                ))
            })?;
            let literal = Int32Array::from(vec![n; values.len()]);
            Ok(op(values, &literal)?)
        } else if let Some(values) = column.as_any().downcast_ref::<Int64Array>() {
            let literal = Int64Array::from(vec![n; values.len()]);
            Ok(op(values, &literal)?)
        } else {
            Err(TsvReaderError::FilterError(format!(
                "Column '{col_name}' is not an integer array"
            )))
        }
    }

    fn column<'a>(batch: &'a RecordBatch, col_name: &str) -> Result<&'a ArrayRef> {
        let idx = batch.schema().index_of(col_name).map_err(|_| {
            TsvReaderError::FilterError(format!("Column {col_name} not found in batch"))
        })?;
        Ok(batch.column(idx))
    }

    fn downcast<'a, T: Array + 'static>(
        column: &'a ArrayRef,
        col_name: &str,
        type_label: &str,
    ) -> Result<&'a T> {
        column.as_any().downcast_ref::<T>().ok_or_else(|| {
            TsvReaderError::FilterError(format!("Column '{col_name}' is not a {type_label} array"))
        })
    }
}

impl BatchFilter for ExpressionFilter {
    fn filter(&self, batch: &RecordBatch) -> Result<RecordBatch> {
        let mask = self.mask(batch)?;
        filter_record_batch(batch, &mask)
    }

    fn required_columns(&self) -> HashSet<String> {
        self.expr.required_columns()
    }
}
