use std::cell::{
    RefCell,
    RefMut
};
use std::fs::File;
use std::io::BufReader;

use serde::Deserialize;
use tracing::info;

use crate::manager::managererror::ManagerError;
use crate::manager::manager::{
    IManager,
    Manager
};
use crate::math::smoothingspline::spline1dseg::Spline1dSeg;
use crate::math::smoothingspline::spline1dsegmanager::Spline1dSegManager;


#[derive(Deserialize)]
struct ConfigurationJsonProp {
    #[serde(default)]
    spline_segment: Vec<serde_json::Value>
}

pub struct Configuration {
    spline_segment_manager_cell: RefCell<Manager<Spline1dSeg>>
}


impl Configuration {
    pub fn new() -> Configuration {
        let spline_segment_manager = Spline1dSegManager::new();
        Configuration {
            spline_segment_manager_cell: RefCell::new(spline_segment_manager)
        }
    }

    pub fn spline_segment_manager(&self) -> RefMut<'_, Manager<Spline1dSeg>> {
        self.spline_segment_manager_cell.borrow_mut()
    }

    pub fn from_reader(&self, file_path: &str) -> Result<(), ManagerError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_prop: ConfigurationJsonProp = serde_json::from_reader(reader)?;
        let spline_segment_manager = self.spline_segment_manager_cell.borrow_mut();
        spline_segment_manager.insert_obj_from_json_vec(&json_prop.spline_segment)?;
        info!(
            path = file_path,
            spline_segments = spline_segment_manager.len(),
            "configuration loaded"
        );
        Ok(())
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use super::*;

    fn write_config(file_name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("{}_{}", std::process::id(), file_name));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn loads_spline_segments() {
        let path = write_config(
            "smoothingspline_configuration_loads.json",
            r#"{
                "spline_segment": [
                    { "name": "lateral", "params": [1.0, 2.0, 3.0] },
                    { "name": "kappa", "order": 3 }
                ]
            }"#
        );
        let config = Configuration::new();
        config.from_reader(path.to_str().unwrap()).unwrap();

        let manager = config.spline_segment_manager();
        assert_eq!(2, manager.len());
        let lateral = manager.get("lateral").unwrap();
        assert_eq!(6.0, lateral.value(1.0));
        assert_eq!(3, manager.get("kappa").unwrap().order());
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn failing_entry_leaves_configuration_empty() {
        let path = write_config(
            "smoothingspline_configuration_atomic.json",
            r#"{
                "spline_segment": [
                    { "name": "lateral", "params": [1.0, 2.0, 3.0] },
                    { "name": "broken", "params": [] }
                ]
            }"#
        );
        let config = Configuration::new();
        let result = config.from_reader(path.to_str().unwrap());
        assert!(matches!(result, Err(ManagerError::PolynomialError(_))));
        assert_eq!(0, config.spline_segment_manager().len());
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn missing_file_is_io_error() {
        let config = Configuration::new();
        let result = config.from_reader("/nonexistent/smoothingspline/config.json");
        assert!(matches!(result, Err(ManagerError::IOError(_))));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let path = write_config("smoothingspline_configuration_malformed.json", "{ not json");
        let config = Configuration::new();
        let result = config.from_reader(path.to_str().unwrap());
        assert!(matches!(result, Err(ManagerError::JsonParseError(_))));
        fs::remove_file(path).unwrap();
    }
}
