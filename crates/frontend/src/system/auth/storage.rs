use web_sys::window;

const ACCESS_TOKEN_KEY: &str = "auth_access_token";
const REFRESH_TOKEN_KEY: &str = "auth_refresh_token";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

pub fn get_item(key: &str) -> Option<String> {
    get_local_storage()?.get_item(key).ok()?
}

pub fn set_item(key: &str, value: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(key, value);
    }
}

pub fn remove_item(key: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(key);
    }
}

pub fn save_access_token(token: &str) {
    set_item(ACCESS_TOKEN_KEY, token);
}

pub fn get_access_token() -> Option<String> {
    get_item(ACCESS_TOKEN_KEY)
}

pub fn save_refresh_token(token: &str) {
    set_item(REFRESH_TOKEN_KEY, token);
}

pub fn get_refresh_token() -> Option<String> {
    get_item(REFRESH_TOKEN_KEY)
}

/// Clear all authentication tokens
pub fn clear_tokens() {
    remove_item(ACCESS_TOKEN_KEY);
    remove_item(REFRESH_TOKEN_KEY);
}
