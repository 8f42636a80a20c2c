pub mod test_ice_resend_is_forwarded_every_time;
