/// Loads a local `.env` if present. Returns whether one was found.
pub fn load_dotenv() -> bool {
    dotenv::dotenv().is_ok()
}
