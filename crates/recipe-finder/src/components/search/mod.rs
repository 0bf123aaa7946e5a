//! Search components: the search card with quick tags, and the results panel.

mod empty_state;
mod result_card;
mod results_view;
mod search_card;

pub use empty_state::EmptyState;
pub use result_card::ResultCard;
pub use results_view::ResultsView;
pub use search_card::{QuickTags, SearchCard};
