pub mod faq_table;
pub mod match_candidate;
pub mod question_matcher;
