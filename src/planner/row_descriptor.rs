use serde::{Deserialize, Serialize};

use crate::{parser::analyzer::AnalyzedStatement, schema::ScalarType};

/// One result field: the tag it is read back under and its resolved scalar
/// type. Every field is may-be-absent at access time, whether or not the
/// annotation carried a trailing `?`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowField {
    pub tag: String,
    pub ty: ScalarType,
}

/// Ordered result-row descriptor; field order matches the select list
/// exactly. Insert statements compile to an empty descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RowDescriptor {
    pub fields: Vec<RowField>,
}

impl RowDescriptor {
    /// Pure projection of the selected-column set; uniqueness of tags was
    /// already enforced during resolution.
    pub fn from_analysis(analyzed: &AnalyzedStatement) -> Self {
        RowDescriptor {
            fields: analyzed.selected.iter()
                .map(|selected| RowField { tag: selected.tag.clone(), ty: selected.ty })
                .collect(),
        }
    }

    pub fn position_of(&self, tag: &str) -> Option<usize> {
        self.fields.iter().position(|field| field.tag == tag)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::analyzer::SelectedColumn;

    fn descriptor() -> RowDescriptor {
        let analyzed = AnalyzedStatement {
            selected: vec![
                SelectedColumn {
                    tag: "orders.id".to_string(),
                    table: "orders".to_string(),
                    column: "id".to_string(),
                    ty: ScalarType::Int,
                },
                SelectedColumn {
                    tag: "total".to_string(),
                    table: "orders".to_string(),
                    column: "price".to_string(),
                    ty: ScalarType::Float,
                },
            ],
            ..Default::default()
        };
        RowDescriptor::from_analysis(&analyzed)
    }

    #[test]
    fn test_field_order_matches_selection() {
        let descriptor = descriptor();

        let tags: Vec<&str> = descriptor.fields.iter().map(|f| f.tag.as_str()).collect();
        assert_eq!(tags, vec!["orders.id", "total"]);
    }

    #[test]
    fn test_position_of() {
        let descriptor = descriptor();

        assert_eq!(descriptor.position_of("orders.id"), Some(0));
        assert_eq!(descriptor.position_of("total"), Some(1));
        assert_eq!(descriptor.position_of("price"), None);
    }
}
