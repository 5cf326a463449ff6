use serde::Serialize;

use crate::domain::category::models::Category;

pub mod create_category;
pub mod delete_category;
pub mod get_category;
pub mod update_category;

const NAME_MAX_LENGTH: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryData {
    pub id: i64,
    pub name: String,
}

impl From<&Category> for CategoryData {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id.0,
            name: category.name.clone(),
        }
    }
}
