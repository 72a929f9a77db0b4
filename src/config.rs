use std::fs;
use std::path::Path;

use crate::game::GameSettings;

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

/// Loads game settings from a YAML file. A missing file yields defaults;
/// a present but invalid file is an error.
pub fn load_settings(path: &str) -> Result<GameSettings, String> {
    if !Path::new(path).exists() {
        return Ok(GameSettings::default());
    }

    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read settings file {}: {}", path, e))?;
    let settings: GameSettings = serde_yaml_ng::from_str(&content)
        .map_err(|e| format!("Failed to parse settings file {}: {}", path, e))?;

    settings
        .validate()
        .map_err(|e| format!("Settings validation error: {}", e))?;

    Ok(settings)
}

pub fn save_settings(path: &str, settings: &GameSettings) -> Result<(), String> {
    settings
        .validate()
        .map_err(|e| format!("Settings validation error: {}", e))?;

    let content = serde_yaml_ng::to_string(settings)
        .map_err(|e| format!("Failed to serialize settings: {}", e))?;

    fs::write(path, content).map_err(|e| format!("Failed to write settings file {}: {}", path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::RuleSet;

    fn get_temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("gridsnake_settings_{}.yaml", random_number));
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let settings = load_settings("/nonexistent/gridsnake_settings.yaml").unwrap();
        assert_eq!(settings, GameSettings::default());
    }

    #[test]
    fn test_settings_round_trip() {
        let path = get_temp_file_path();
        let settings = GameSettings {
            grid_width: 40,
            rule_set: RuleSet::Classic,
            ..GameSettings::default()
        };

        save_settings(&path, &settings).unwrap();
        let loaded = load_settings(&path).unwrap();
        assert_eq!(loaded, settings);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_invalid_file_is_rejected() {
        let path = get_temp_file_path();
        fs::write(&path, "grid_width: not_a_number").unwrap();

        let result = load_settings(&path);
        assert!(result.is_err());

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_invalid_settings_are_not_saved() {
        let path = get_temp_file_path();
        let settings = GameSettings {
            grid_width: 5,
            ..GameSettings::default()
        };

        let result = save_settings(&path, &settings);
        assert!(result.is_err());
        assert!(!Path::new(&path).exists());
    }
}
