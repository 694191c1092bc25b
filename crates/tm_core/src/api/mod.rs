pub mod roster_json;

pub use roster_json::{
    search_roster_json, sort_roster_json, SearchRequest, SearchResponse, SortRequest, SortResponse,
};
