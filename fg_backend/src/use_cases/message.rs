pub mod generate_reply_use_case;
