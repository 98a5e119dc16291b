use std::{
    collections::BTreeMap,
    env,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use dirs::home_dir;

use crate::errors::{FinanceError, Result};

use super::{GoalStore, SAVINGS_GOAL_KEY};

const DEFAULT_DIR_NAME: &str = ".finance_core";
const PREFS_FILE: &str = "preferences.json";
const TMP_SUFFIX: &str = "tmp";

/// Returns the application data directory, defaulting to `~/.finance_core`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("FINANCE_CORE_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// File-backed store of named scalar preference slots.
///
/// Values are narrowed to `f32` on write, mirroring the precision of the
/// host key-value slots the store abstracts; callers must tolerate the
/// rounding when reading back.
#[derive(Debug, Clone)]
pub struct JsonPreferences {
    path: PathBuf,
}

impl JsonPreferences {
    /// Creates a store rooted at `base`, or at [`app_data_dir`] when `None`.
    pub fn new(base: Option<PathBuf>) -> Result<Self> {
        let root = base.unwrap_or_else(app_data_dir);
        fs::create_dir_all(&root)?;
        Ok(Self {
            path: root.join(PREFS_FILE),
        })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the named slot, or `None` when it has never been written.
    pub fn get(&self, key: &str) -> Result<Option<f32>> {
        Ok(self.read_slots()?.get(key).copied())
    }

    /// Writes the named slot, replacing any prior value.
    pub fn put(&self, key: &str, value: f32) -> Result<()> {
        let mut slots = self.read_slots()?;
        slots.insert(key.to_string(), value);
        let json = serde_json::to_string_pretty(&slots)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn read_slots(&self) -> Result<BTreeMap<String, f32>> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(BTreeMap::new())
        }
    }
}

impl GoalStore for JsonPreferences {
    fn load(&self) -> Result<f64> {
        Ok(self
            .get(SAVINGS_GOAL_KEY)?
            .map(f64::from)
            .unwrap_or(0.0))
    }

    fn save(&self, target: f64) -> Result<()> {
        if !target.is_finite() || target < 0.0 {
            return Err(FinanceError::InvalidAmount(format!(
                "savings target must be non-negative, got {target}"
            )));
        }
        self.put(SAVINGS_GOAL_KEY, target as f32)
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn prefs_with_temp_dir() -> (JsonPreferences, TempDir) {
        let temp = TempDir::new().expect("temp dir");
        let prefs =
            JsonPreferences::new(Some(temp.path().to_path_buf())).expect("preferences store");
        (prefs, temp)
    }

    #[test]
    fn load_defaults_to_zero_without_a_file() {
        let (prefs, _guard) = prefs_with_temp_dir();
        assert_eq!(prefs.load().expect("load default"), 0.0);
        assert!(!prefs.path().exists());
    }

    #[test]
    fn save_then_load_roundtrips_at_f32_precision() {
        let (prefs, _guard) = prefs_with_temp_dir();
        prefs.save(1234.5678).expect("save target");

        let loaded = prefs.load().expect("load target");
        assert_eq!(loaded, f64::from(1234.5678_f32));
    }

    #[test]
    fn save_overwrites_prior_value() {
        let (prefs, _guard) = prefs_with_temp_dir();
        prefs.save(100.0).expect("first save");
        prefs.save(250.0).expect("second save");

        assert_eq!(prefs.load().expect("load target"), 250.0);
    }

    #[test]
    fn negative_target_is_rejected_without_touching_storage() {
        let (prefs, _guard) = prefs_with_temp_dir();
        prefs.save(500.0).expect("save target");

        let err = prefs.save(-1.0).expect_err("negative target must fail");
        assert!(matches!(err, FinanceError::InvalidAmount(_)));
        assert_eq!(prefs.load().expect("load target"), 500.0);
    }

    #[test]
    fn slots_other_than_the_goal_are_preserved() {
        let (prefs, _guard) = prefs_with_temp_dir();
        prefs.put("theme_scale", 1.5).expect("write slot");
        prefs.save(800.0).expect("save target");

        assert_eq!(prefs.get("theme_scale").expect("read slot"), Some(1.5));
        assert_eq!(prefs.load().expect("load target"), 800.0);
    }

    #[test]
    fn corrupt_file_surfaces_a_persistence_error() {
        let (prefs, _guard) = prefs_with_temp_dir();
        fs::write(prefs.path(), "not json").expect("write corrupt file");

        let err = prefs.load().expect_err("corrupt file must fail");
        assert!(matches!(err, FinanceError::Persistence(_)));
    }
}
