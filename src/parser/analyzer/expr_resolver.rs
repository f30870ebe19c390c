use crate::{
    parser::{
        analyzer::{AnalysisContext, ColumnResolver, ParamSlot, ResolveError},
        ast::{ColumnRef, ScalarExpr},
    },
    schema::ScalarType,
};

pub struct ExprResolver;

impl ExprResolver {
    /// Resolve and type-check one expression, appending a binding slot for
    /// every placeholder and literal in left-to-right (textual) order.
    ///
    /// Binary operands must already have the same scalar type; there is no
    /// implicit widening. The result type comes from the operator's
    /// promotion table.
    pub fn resolve(expr: &ScalarExpr, ctx: &mut AnalysisContext) -> Result<ScalarType, ResolveError> {
        match expr {
            ScalarExpr::Literal(literal) => {
                ctx.analyzed.parameters.push(ParamSlot::literal(literal.clone()));
                Ok(literal.scalar_type())
            }
            ScalarExpr::Parameter(placeholder) => {
                ctx.analyzed.parameters.push(ParamSlot::named(&placeholder.name, placeholder.ty));
                Ok(placeholder.ty)
            }
            ScalarExpr::Column(column) => {
                Ok(ColumnResolver::resolve(column, ctx.schema)?.ty)
            }
            ScalarExpr::Binary { op, left, right } => {
                let left_ty = Self::resolve(left, ctx)?;
                let right_ty = Self::resolve(right, ctx)?;

                if left_ty != right_ty {
                    return Err(ResolveError::OperandTypeMismatch {
                        op: *op,
                        left: left_ty,
                        right: right_ty,
                    });
                }

                op.result_type(left_ty).ok_or(ResolveError::UnsupportedOperand {
                    op: *op,
                    operands: left_ty,
                })
            }
        }
    }

    /// First column reference in an expression, if any. Insert value lists
    /// must not contain one.
    pub fn find_column_ref(expr: &ScalarExpr) -> Option<&ColumnRef> {
        match expr {
            ScalarExpr::Column(column) => Some(column),
            ScalarExpr::Binary { left, right, .. } => {
                Self::find_column_ref(left).or_else(|| Self::find_column_ref(right))
            }
            ScalarExpr::Literal(_) | ScalarExpr::Parameter(_) => None,
        }
    }
}
