pub mod classify;
pub mod explain;

pub(crate) fn print_pretty_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{}", s),
        Err(e) => {
            eprintln!("JSON serialization error: {}", e);
            match serde_json::to_string(value) {
                Ok(s) => println!("{}", s),
                Err(_) => println!("{{\"ok\":false,\"error\":\"JSON_SERIALIZATION_FAILED\"}}"),
            }
        }
    }
}
