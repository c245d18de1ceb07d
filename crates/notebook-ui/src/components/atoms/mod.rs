//! Shared UI atoms used across the shell and views.

pub(crate) mod empty_state;
pub(crate) mod search_input;
pub(crate) mod tag_select;

pub(crate) use empty_state::EmptyState;
pub(crate) use search_input::SearchInput;
pub(crate) use tag_select::TagSelect;
