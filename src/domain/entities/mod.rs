pub mod waitlist_signup;
