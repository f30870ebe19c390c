use std::sync::{Arc, RwLock};

use indexmap::IndexMap;
use serde_json::{Map, Value};
use tracing::trace;

use crate::{
    executor::{Connection, EngineError, MemExpr, MemPlan, PreparedStatement, Step},
    parser::ast::{BinaryOp, OpCategory},
};

type Tables = IndexMap<String, Vec<Map<String, Value>>>;

/// In-memory reference engine for tests and prototyping.
///
/// Tables hold JSON object rows. Statements arrive as rendered text (the
/// dialect the renderer emits), get parsed into a `MemPlan` at prepare time,
/// and execute as scan, nested-loop join, filter, project. Comparisons
/// involving NULL are never satisfied, SQL-style.
#[derive(Debug, Default, Clone)]
pub struct MemoryEngine {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_table(&self, name: &str) {
        self.tables.write().unwrap().entry(name.to_string()).or_default();
    }

    /// Seed a row directly, bypassing the statement path.
    pub fn insert_row(&self, table: &str, row: Value) -> Result<(), EngineError> {
        let Value::Object(map) = row else {
            return Err(EngineError::new("row must be a JSON object"));
        };

        let mut tables = self.tables.write().unwrap();
        let Some(rows) = tables.get_mut(table) else {
            return Err(EngineError::new(format!("no such table: {}", table)));
        };
        rows.push(map);
        Ok(())
    }

    pub fn table_len(&self, table: &str) -> usize {
        self.tables.read().unwrap().get(table).map(Vec::len).unwrap_or(0)
    }
}

impl Connection for MemoryEngine {
    type Statement = MemoryStatement;

    fn prepare(&self, statement: &str) -> Result<MemoryStatement, EngineError> {
        let plan = MemPlan::parse(statement)
            .map_err(|error| EngineError::new(error.to_string()))?;

        {
            let tables = self.tables.read().unwrap();
            let mut referenced = vec![];
            match &plan {
                MemPlan::Select { table, joins, .. } => {
                    referenced.push(table.clone());
                    referenced.extend(joins.iter().map(|(t, _)| t.clone()));
                }
                MemPlan::Insert { table, .. } => referenced.push(table.clone()),
            }
            for table in referenced {
                if !tables.contains_key(&table) {
                    return Err(EngineError::new(format!("no such table: {}", table)));
                }
            }
        }

        let placeholders = plan.placeholder_count();
        trace!(statement, placeholders, "statement prepared");

        Ok(MemoryStatement {
            tables: Arc::clone(&self.tables),
            plan,
            binds: vec![None; placeholders],
            results: None,
            cursor: 0,
            done: false,
        })
    }
}

/// Cursor state for one prepared statement of the memory engine.
pub struct MemoryStatement {
    tables: Arc<RwLock<Tables>>,
    plan: MemPlan,
    binds: Vec<Option<Value>>,
    results: Option<Vec<Vec<Value>>>,
    cursor: usize,
    done: bool,
}

impl PreparedStatement for MemoryStatement {
    fn bind(&mut self, position: usize, value: &Value) -> Result<(), EngineError> {
        if position == 0 || position > self.binds.len() {
            return Err(EngineError::new(format!("bind position {} out of range", position)));
        }
        self.binds[position - 1] = Some(value.clone());
        Ok(())
    }

    fn step(&mut self) -> Result<Step, EngineError> {
        match &self.plan {
            MemPlan::Insert { .. } => {
                if self.done {
                    return Ok(Step::Done);
                }
                self.run_insert()?;
                self.done = true;
                Ok(Step::Done)
            }
            MemPlan::Select { .. } => {
                if self.results.is_none() {
                    self.results = Some(self.run_select()?);
                }
                let Some(results) = &self.results else {
                    return Err(EngineError::new("cursor is not materialized"));
                };
                if self.cursor < results.len() {
                    self.cursor += 1;
                    Ok(Step::Row)
                } else {
                    Ok(Step::Done)
                }
            }
        }
    }

    fn column(&self, index: usize) -> Result<Value, EngineError> {
        let Some(results) = &self.results else {
            return Err(EngineError::new("no current row"));
        };
        if self.cursor == 0 || self.cursor > results.len() {
            return Err(EngineError::new("no current row"));
        }
        results[self.cursor - 1].get(index).cloned()
            .ok_or_else(|| EngineError::new(format!("column index {} out of range", index)))
    }

    fn reset(&mut self) -> Result<(), EngineError> {
        self.cursor = 0;
        self.results = None;
        self.done = false;
        Ok(())
    }
}

impl MemoryStatement {
    fn bound(&self, index: usize) -> Result<&Value, EngineError> {
        self.binds.get(index).and_then(Option::as_ref)
            .ok_or_else(|| EngineError::new(format!("parameter {} is not bound", index + 1)))
    }

    fn run_insert(&self) -> Result<(), EngineError> {
        let MemPlan::Insert { table, columns, .. } = &self.plan else {
            return Err(EngineError::new("statement is not an insert"));
        };

        let mut row = Map::new();
        for (index, column) in columns.iter().enumerate() {
            row.insert(column.clone(), self.bound(index)?.clone());
        }

        let mut tables = self.tables.write().unwrap();
        let Some(rows) = tables.get_mut(table) else {
            return Err(EngineError::new(format!("no such table: {}", table)));
        };
        rows.push(row);
        Ok(())
    }

    fn run_select(&self) -> Result<Vec<Vec<Value>>, EngineError> {
        let MemPlan::Select { outputs, table, joins, filter, .. } = &self.plan else {
            return Err(EngineError::new("statement is not a select"));
        };

        let tables = self.tables.read().unwrap();
        let base = tables.get(table)
            .ok_or_else(|| EngineError::new(format!("no such table: {}", table)))?;

        let mut rows: Vec<Map<String, Value>> =
            base.iter().map(|row| Self::prefix_row(table, row)).collect();

        for (join_table, on) in joins {
            let right_rows = tables.get(join_table)
                .ok_or_else(|| EngineError::new(format!("no such table: {}", join_table)))?;

            let mut joined = vec![];
            for left in &rows {
                for right in right_rows {
                    let mut candidate = left.clone();
                    candidate.extend(Self::prefix_row(join_table, right));
                    if Self::truthy(&self.eval(on, &candidate)?) {
                        joined.push(candidate);
                    }
                }
            }
            rows = joined;
        }

        let mut kept = vec![];
        for row in rows {
            let keep = match filter {
                Some(filter) => Self::truthy(&self.eval(filter, &row)?),
                None => true,
            };
            if keep {
                kept.push(row);
            }
        }

        let projected: Vec<Vec<Value>> = kept.iter()
            .map(|row| {
                outputs.iter()
                    .map(|output| Self::lookup(row, output.table.as_deref(), &output.name))
                    .collect()
            })
            .collect();

        trace!(rows = projected.len(), "select materialized");

        Ok(projected)
    }

    fn prefix_row(table: &str, row: &Map<String, Value>) -> Map<String, Value> {
        row.iter()
            .map(|(key, value)| (format!("{}.{}", table, key), value.clone()))
            .collect()
    }

    /// Qualified lookups hit their exact key; bare names match when exactly
    /// one visible column carries that name.
    fn lookup(row: &Map<String, Value>, table: Option<&str>, name: &str) -> Value {
        if let Some(table) = table {
            return row.get(&format!("{}.{}", table, name)).cloned().unwrap_or(Value::Null);
        }

        let mut matches = row.iter()
            .filter(|(key, _)| key.rsplit('.').next() == Some(name));

        match (matches.next(), matches.next()) {
            (Some((_, value)), None) => value.clone(),
            _ => Value::Null,
        }
    }

    fn eval(&self, expr: &MemExpr, row: &Map<String, Value>) -> Result<Value, EngineError> {
        match expr {
            MemExpr::Column { table, name } => Ok(Self::lookup(row, table.as_deref(), name)),
            MemExpr::Placeholder(index) => self.bound(*index).cloned(),
            MemExpr::Binary { op, left, right } => {
                let left = self.eval(left, row)?;
                let right = self.eval(right, row)?;
                Self::eval_binary(*op, &left, &right)
            }
        }
    }

    fn eval_binary(op: BinaryOp, left: &Value, right: &Value) -> Result<Value, EngineError> {
        match op.category() {
            OpCategory::Equality | OpCategory::Ordering => Ok(Value::Bool(Self::compare(op, left, right))),
            OpCategory::Boolean => {
                let left = Self::truthy(left);
                let right = Self::truthy(right);
                Ok(Value::Bool(match op {
                    BinaryOp::And => left && right,
                    _ => left || right,
                }))
            }
            OpCategory::Arithmetic => Self::arithmetic(op, left, right),
        }
    }

    fn compare(op: BinaryOp, left: &Value, right: &Value) -> bool {
        use std::cmp::Ordering;

        if left.is_null() || right.is_null() {
            return false;
        }

        let ordering = match (left, right) {
            (Value::Number(a), Value::Number(b)) => {
                match (a.as_f64(), b.as_f64()) {
                    (Some(a), Some(b)) => a.partial_cmp(&b),
                    _ => None,
                }
            }
            (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
            (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
            _ => None,
        };

        match (op, ordering) {
            (BinaryOp::Eq, Some(Ordering::Equal)) => true,
            (BinaryOp::NotEq, Some(Ordering::Equal)) => false,
            (BinaryOp::NotEq, Some(_)) => true,
            (BinaryOp::Lt, Some(Ordering::Less)) => true,
            (BinaryOp::LtEq, Some(Ordering::Less | Ordering::Equal)) => true,
            (BinaryOp::Gt, Some(Ordering::Greater)) => true,
            (BinaryOp::GtEq, Some(Ordering::Greater | Ordering::Equal)) => true,
            _ => false,
        }
    }

    fn arithmetic(op: BinaryOp, left: &Value, right: &Value) -> Result<Value, EngineError> {
        let (Value::Number(a), Value::Number(b)) = (left, right) else {
            return Err(EngineError::new("arithmetic on non-numeric values"));
        };

        if let (Some(a), Some(b)) = (a.as_i64(), b.as_i64()) {
            let result = match op {
                BinaryOp::Add => a.checked_add(b),
                BinaryOp::Sub => a.checked_sub(b),
                BinaryOp::Mul => a.checked_mul(b),
                BinaryOp::Div => a.checked_div(b),
                BinaryOp::Mod => a.checked_rem(b),
                _ => None,
            };
            return result.map(|value| Value::Number(value.into()))
                .ok_or_else(|| EngineError::new("integer arithmetic failed"));
        }

        let (Some(a), Some(b)) = (a.as_f64(), b.as_f64()) else {
            return Err(EngineError::new("arithmetic on non-numeric values"));
        };
        let result = match op {
            BinaryOp::Add => a + b,
            BinaryOp::Sub => a - b,
            BinaryOp::Mul => a * b,
            BinaryOp::Div => a / b,
            _ => return Err(EngineError::new("unsupported float arithmetic")),
        };

        serde_json::Number::from_f64(result)
            .map(Value::Number)
            .ok_or_else(|| EngineError::new("float arithmetic produced a non-finite value"))
    }

    fn truthy(value: &Value) -> bool {
        matches!(value, Value::Bool(true))
    }
}
