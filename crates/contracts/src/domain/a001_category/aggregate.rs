use crate::domain::common::{Entity, EntityId};
use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

/// Catalog category; `parent_id` forms a tree the console does not check for cycles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub parent_id: Option<EntityId>,
    #[serde(alias = "is_active", default = "default_true")]
    pub active: bool,
}

impl Category {
    pub fn is_subcategory(&self) -> bool {
        self.parent_id.is_some()
    }
}

impl Entity for Category {
    fn id(&self) -> &EntityId {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn element_name() -> &'static str {
        "Categoría"
    }

    fn list_name() -> &'static str {
        "Categorías"
    }
}

/// Node of `GET /categories/tree`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTreeNode {
    #[serde(flatten)]
    pub category: Category,
    #[serde(default)]
    pub children: Vec<CategoryTreeNode>,
}

impl CategoryTreeNode {
    /// Depth-first walk yielding each category with its depth.
    pub fn flatten(nodes: &[CategoryTreeNode]) -> Vec<(usize, &Category)> {
        fn walk<'a>(nodes: &'a [CategoryTreeNode], depth: usize, out: &mut Vec<(usize, &'a Category)>) {
            for node in nodes {
                out.push((depth, &node.category));
                walk(&node.children, depth + 1, out);
            }
        }
        let mut out = Vec::new();
        walk(nodes, 0, &mut out);
        out
    }
}

/// Resolve the display name of a parent category: "-" without parent, "N/A" when unknown.
pub fn parent_name(categories: &[Category], parent_id: Option<&EntityId>) -> String {
    match parent_id {
        None => "-".to_string(),
        Some(id) => categories
            .iter()
            .find(|c| &c.id == id)
            .map(|c| c.name.clone())
            .unwrap_or_else(|| "N/A".to_string()),
    }
}
