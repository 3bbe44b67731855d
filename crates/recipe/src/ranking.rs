use serde::Serialize;
use viralcarrot_shared::recipe::Recipe;

pub const PAGE_SIZE: usize = 6;

/// One page of ranked recipes.
#[derive(Serialize, Default, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub recipes: Vec<Recipe>,
    pub total: usize,
    pub page: usize,
    pub has_more: bool,
}

/// Originals first, then higher `match_score`. The sort is stable.
pub fn rank(recipes: &mut [Recipe]) {
    recipes.sort_by(|a, b| {
        a.is_external
            .cmp(&b.is_external)
            .then_with(|| b.match_score.total_cmp(&a.match_score))
    });
}

/// Pages are 1-based, anything lower reads as the first page.
pub fn paginate(recipes: Vec<Recipe>, page: usize, page_size: usize) -> Page {
    let page = page.max(1);
    let page_size = page_size.max(1);
    let total = recipes.len();
    let start = (page - 1).saturating_mul(page_size);

    Page {
        recipes: recipes.into_iter().skip(start).take(page_size).collect(),
        total,
        page,
        has_more: page.saturating_mul(page_size) < total,
    }
}

pub fn aggregate(
    synthesized: Vec<Recipe>,
    external: Vec<Recipe>,
    page: usize,
    page_size: usize,
) -> Page {
    let mut recipes = synthesized;
    recipes.extend(external);
    rank(&mut recipes);

    paginate(recipes, page, page_size)
}
