//! JSON helpers for files kept in ~/.snake/.

use std::fs;
use std::io;
use std::path::PathBuf;

use crate::core::error::Result;

/// Get the ~/.snake/ directory path, creating it if needed.
pub fn snake_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    let dir = home_dir.join(".snake");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the full path for a file in ~/.snake/.
pub fn data_path(filename: &str) -> io::Result<PathBuf> {
    Ok(snake_dir()?.join(filename))
}

/// Load a JSON file from ~/.snake/, returning `T::default()` if missing or invalid.
pub fn load_json_or_default<T: Default + serde::de::DeserializeOwned>(filename: &str) -> T {
    let path = match data_path(filename) {
        Ok(p) => p,
        Err(_) => return T::default(),
    };
    match fs::read_to_string(&path) {
        Ok(json) => serde_json::from_str(&json).unwrap_or_else(|e| {
            log::warn!("Ignoring unreadable {}: {}", path.display(), e);
            T::default()
        }),
        Err(_) => T::default(),
    }
}

/// Save a value as pretty-printed JSON to ~/.snake/.
pub fn save_json<T: serde::Serialize>(filename: &str, data: &T) -> Result<()> {
    let path = data_path(filename)?;
    let json = serde_json::to_string_pretty(data)?;
    fs::write(&path, json)?;
    log::debug!("Saved {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snake_dir_exists() {
        let dir = snake_dir().expect("snake_dir should succeed");
        assert!(dir.exists());
        assert!(dir.ends_with(".snake"));
    }

    #[test]
    fn test_data_path_format() {
        let path = data_path("test.json").expect("data_path should succeed");
        assert!(path.to_string_lossy().ends_with(".snake/test.json"));
    }

    #[test]
    fn test_load_missing_returns_default() {
        let val: Vec<String> = load_json_or_default("nonexistent_test_file_12345.json");
        assert!(val.is_empty());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let data = vec!["hello".to_string(), "world".to_string()];
        save_json("persistence_test.json", &data).expect("save should succeed");

        let loaded: Vec<String> = load_json_or_default("persistence_test.json");
        assert_eq!(loaded, data);

        // Cleanup
        let path = data_path("persistence_test.json").unwrap();
        fs::remove_file(path).ok();
    }
}
