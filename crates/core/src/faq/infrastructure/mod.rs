pub mod token_overlap_matcher;
