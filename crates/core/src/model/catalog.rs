use std::sync::Arc;

use crate::model::category::{Category, CategoryError, CategoryRecord};
use crate::model::ids::CategoryId;
use crate::policy::QuizPolicy;

/// The loaded, ordered set of categories.
///
/// Sessions refer to a category by id only; lookups always go through the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    categories: Vec<Arc<Category>>,
}

impl Catalog {
    /// Build a catalog, enforcing unique ids and the policy's question count.
    ///
    /// # Errors
    ///
    /// Returns `CategoryError::DuplicateCategory` or `CategoryError::WrongQuestionCount`.
    pub fn new(categories: Vec<Category>, policy: &QuizPolicy) -> Result<Self, CategoryError> {
        let mut checked: Vec<Arc<Category>> = Vec::with_capacity(categories.len());
        for category in categories {
            if checked.iter().any(|c| c.id() == category.id()) {
                return Err(CategoryError::DuplicateCategory(category.id().clone()));
            }
            if category.question_count() != policy.question_count() {
                return Err(CategoryError::WrongQuestionCount {
                    id: category.id().clone(),
                    expected: policy.question_count(),
                    got: category.question_count(),
                });
            }
            checked.push(Arc::new(category));
        }
        Ok(Self {
            categories: checked,
        })
    }

    /// Validate wire records into a catalog. The first invalid record fails the whole load.
    ///
    /// # Errors
    ///
    /// Returns the first `CategoryError` encountered.
    pub fn from_records(
        records: Vec<CategoryRecord>,
        policy: &QuizPolicy,
    ) -> Result<Self, CategoryError> {
        let categories = records
            .into_iter()
            .map(Category::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(categories, policy)
    }

    #[must_use]
    pub fn get(&self, id: &CategoryId) -> Option<&Arc<Category>> {
        self.categories.iter().find(|c| c.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: &CategoryId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Category>> {
        self.categories.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Sum of question counts across every category.
    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.categories.iter().map(|c| c.question_count()).sum()
    }
}
