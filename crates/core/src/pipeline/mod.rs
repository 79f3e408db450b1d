pub mod ask_question_use_case;
pub mod segment_clips_use_case;
