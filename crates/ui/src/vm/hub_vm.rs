use quiz_core::model::{Catalog, CategoryId};

use crate::vm::markdown_vm::markdown_to_html;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryCardVm {
    pub id: CategoryId,
    pub title: String,
    pub description: String,
    pub question_count_label: String,
    pub has_briefing: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HubStatsVm {
    pub categories: usize,
    pub questions: usize,
}

#[must_use]
pub fn map_category_cards(catalog: &Catalog) -> Vec<CategoryCardVm> {
    catalog
        .iter()
        .map(|category| CategoryCardVm {
            id: category.id().clone(),
            title: category.title().to_string(),
            description: category.description().to_string(),
            question_count_label: format!("{} Questions", category.question_count()),
            has_briefing: category.has_briefing(),
        })
        .collect()
}

#[must_use]
pub fn map_hub_stats(catalog: &Catalog) -> HubStatsVm {
    HubStatsVm {
        categories: catalog.len(),
        questions: catalog.total_questions(),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BriefingVm {
    pub id: CategoryId,
    pub title: String,
    pub paragraphs_html: Vec<String>,
}

/// Briefing text for one category; `None` for an unknown id.
#[must_use]
pub fn map_briefing(catalog: &Catalog, id: &CategoryId) -> Option<BriefingVm> {
    let category = catalog.get(id)?;
    Some(BriefingVm {
        id: category.id().clone(),
        title: category.title().to_string(),
        paragraphs_html: category
            .briefing()
            .iter()
            .map(|paragraph| markdown_to_html(paragraph))
            .collect(),
    })
}
