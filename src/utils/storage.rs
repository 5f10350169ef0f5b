use web_sys::{window, Storage};

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Lee un valor plano (sin JSON) de localStorage
pub fn get_string(key: &str) -> Option<String> {
    let storage = get_local_storage()?;
    storage.get_item(key).ok()?
}

pub fn set_string(key: &str, value: &str) -> Result<(), String> {
    let storage = get_local_storage().ok_or("No se pudo acceder a localStorage")?;
    storage.set_item(key, value)
        .map_err(|_| "Error guardando en localStorage".to_string())?;
    Ok(())
}

pub fn remove_key(key: &str) -> Result<(), String> {
    let storage = get_local_storage().ok_or("No se pudo acceder a localStorage")?;
    storage.remove_item(key)
        .map_err(|_| "Error eliminando de localStorage".to_string())?;
    Ok(())
}
