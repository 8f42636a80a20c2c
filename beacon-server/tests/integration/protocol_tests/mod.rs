pub mod test_malformed_frame_gets_error;
pub mod test_unknown_type_gets_error;
