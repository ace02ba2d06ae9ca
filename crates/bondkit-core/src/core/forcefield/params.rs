use super::harmonic_bond::{BondTerm, DEFAULT_FORCE_NAME, HarmonicBondForce};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParamLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("CSV error for '{path}': {source}")]
    Csv { path: String, source: csv::Error },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("TOML serialization error for '{path}': {source}")]
    TomlWrite {
        path: String,
        source: toml::ser::Error,
    },
    #[error("Unsupported parameter file format for '{0}' (expected .toml or .csv)")]
    UnsupportedFormat(String),
    #[error("Invalid force group {group} in '{path}' (must be between 0 and 31)")]
    InvalidForceGroup { path: String, group: i64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamFormat {
    Toml,
    Csv,
}

impl ParamFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "toml" => Some(Self::Toml),
            "csv" => Some(Self::Csv),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct BondForceDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default)]
    force_group: i64,
    #[serde(default)]
    periodic: bool,
    #[serde(default)]
    bonds: Vec<BondTerm>,
}

/// Reads and writes `HarmonicBondForce` parameter files.
///
/// TOML files carry the force attributes plus a `[[bonds]]` array; CSV files
/// hold one bond per row under a `particle_a,particle_b,length,k` header.
/// Bonds are appended in file order, so row `i` becomes bond index `i`.
pub struct BondForceFile;

impl BondForceFile {
    pub fn load(path: &Path) -> Result<HarmonicBondForce, ParamLoadError> {
        match ParamFormat::from_path(path) {
            Some(ParamFormat::Toml) => Self::load_toml(path),
            Some(ParamFormat::Csv) => Self::load_csv(path),
            None => Err(ParamLoadError::UnsupportedFormat(display_path(path))),
        }
    }

    pub fn save(force: &HarmonicBondForce, path: &Path) -> Result<(), ParamLoadError> {
        match ParamFormat::from_path(path) {
            Some(ParamFormat::Toml) => Self::save_toml(force, path),
            Some(ParamFormat::Csv) => Self::save_csv(force, path),
            None => Err(ParamLoadError::UnsupportedFormat(display_path(path))),
        }
    }

    fn load_toml(path: &Path) -> Result<HarmonicBondForce, ParamLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| ParamLoadError::Io {
            path: display_path(path),
            source: e,
        })?;
        let document: BondForceDocument =
            toml::from_str(&content).map_err(|e| ParamLoadError::Toml {
                path: display_path(path),
                source: e,
            })?;

        let mut force = HarmonicBondForce::new();
        force.set_name(document.name.unwrap_or_else(|| DEFAULT_FORCE_NAME.to_string()));
        let invalid_group = || ParamLoadError::InvalidForceGroup {
            path: display_path(path),
            group: document.force_group,
        };
        let group = u8::try_from(document.force_group).map_err(|_| invalid_group())?;
        force.set_force_group(group).map_err(|_| invalid_group())?;
        force.set_uses_periodic_boundary_conditions(document.periodic);
        for bond in document.bonds {
            force.add_bond(bond.particle_a, bond.particle_b, bond.length, bond.k);
        }
        Ok(force)
    }

    fn load_csv(path: &Path) -> Result<HarmonicBondForce, ParamLoadError> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(path)
            .map_err(|e| ParamLoadError::Csv {
                path: display_path(path),
                source: e,
            })?;

        let mut force = HarmonicBondForce::new();
        for result in reader.deserialize::<BondTerm>() {
            let bond = result.map_err(|e| ParamLoadError::Csv {
                path: display_path(path),
                source: e,
            })?;
            force.add_bond(bond.particle_a, bond.particle_b, bond.length, bond.k);
        }
        Ok(force)
    }

    fn save_toml(force: &HarmonicBondForce, path: &Path) -> Result<(), ParamLoadError> {
        let document = BondForceDocument {
            name: Some(force.name().to_string()),
            force_group: i64::from(force.force_group()),
            periodic: force.uses_periodic_boundary_conditions(),
            bonds: force.bonds().to_vec(),
        };
        let content = toml::to_string(&document).map_err(|e| ParamLoadError::TomlWrite {
            path: display_path(path),
            source: e,
        })?;
        std::fs::write(path, content).map_err(|e| ParamLoadError::Io {
            path: display_path(path),
            source: e,
        })
    }

    fn save_csv(force: &HarmonicBondForce, path: &Path) -> Result<(), ParamLoadError> {
        let mut writer = csv::Writer::from_path(path).map_err(|e| ParamLoadError::Csv {
            path: display_path(path),
            source: e,
        })?;
        for bond in force.bonds() {
            writer.serialize(bond).map_err(|e| ParamLoadError::Csv {
                path: display_path(path),
                source: e,
            })?;
        }
        writer.flush().map_err(|e| ParamLoadError::Io {
            path: display_path(path),
            source: e,
        })
    }
}

fn display_path(path: &Path) -> String {
    path.to_string_lossy().to_string()
}
