pub mod test_duplicate_username_is_rejected;
pub mod test_second_join_from_same_connection_is_rejected;
