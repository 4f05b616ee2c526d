use std::{fs, path::Path};

use crate::{TabularError, TabularMdp, TabularSchema};

/// Load a process schema from YAML on disk.
pub fn load_yaml(path: impl AsRef<Path>) -> Result<TabularSchema, TabularError> {
    let yaml = fs::read_to_string(path)?;
    let schema: TabularSchema = serde_yaml::from_str(&yaml)?;
    Ok(schema)
}

/// Load and compile a process from a YAML file.
pub fn compile_yaml(path: impl AsRef<Path>) -> Result<TabularMdp, TabularError> {
    let schema = load_yaml(path)?;
    schema.compile()
}

/// Serialize and write a process schema to YAML.
pub fn save_yaml(path: impl AsRef<Path>, schema: &TabularSchema) -> Result<(), TabularError> {
    let yaml = serde_yaml::to_string(schema)?;
    fs::write(path, yaml)?;
    Ok(())
}

/// Load a process schema from JSON on disk.
pub fn load_json(path: impl AsRef<Path>) -> Result<TabularSchema, TabularError> {
    let json = fs::read_to_string(path)?;
    let schema: TabularSchema = serde_json::from_str(&json)?;
    Ok(schema)
}

/// Serialize and write a process schema to JSON.
pub fn save_json(path: impl AsRef<Path>, schema: &TabularSchema) -> Result<(), TabularError> {
    let json = serde_json::to_string_pretty(schema)?;
    fs::write(path, json)?;
    Ok(())
}
