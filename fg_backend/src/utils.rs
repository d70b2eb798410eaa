pub mod parse_json_request;
