use serde::Deserialize;

use crate::manager::manager::Manager;
use crate::manager::managererror::ManagerError;
use crate::math::smoothingspline::spline1dseg::Spline1dSeg;

// 一個具名 segment 只能給係數或只給 order（全零），兩者擇一
#[derive(Deserialize)]
struct Spline1dSegJsonProp {
    params: Option<Vec<f64>>,
    order: Option<usize>
}


fn get_spline_1d_seg_from_json(json_value: serde_json::Value) -> Result<Spline1dSeg, ManagerError> {
    let segment_props: Spline1dSegJsonProp = ManagerError::from_json_or_json_parse_error(json_value)?;
    let segment = match (segment_props.params, segment_props.order) {
        (Some(params), None) => Spline1dSeg::from_params(params)?,
        (None, Some(order)) => Spline1dSeg::new(order)?,
        (Some(_), Some(_)) => {
            return Err(ManagerError::json_custom("spline segment takes either `params` or `order`, not both"));
        },
        (None, None) => {
            return Err(ManagerError::json_custom("spline segment needs `params` or `order`"));
        }
    };
    Ok(segment)
}


pub struct Spline1dSegManager;


impl Spline1dSegManager {
    pub fn new() -> Manager<Spline1dSeg> {
        Manager::new(get_spline_1d_seg_from_json)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::manager::manager::IManager;
    use crate::math::polynomial::polynomialerror::PolynomialError;

    #[test]
    fn insert_from_params_and_order() {
        let manager = Spline1dSegManager::new();
        manager
            .insert_obj_from_json_vec(&[
                json!({ "name": "lateral", "params": [1.0, 2.0, 3.0] }),
                json!({ "name": "speed", "order": 5 }),
            ])
            .unwrap();

        assert_eq!(2, manager.len());
        let lateral = manager.get("lateral").unwrap();
        assert_eq!(6.0, lateral.value(1.0));
        assert_eq!(8.0, lateral.derivative(1.0));
        let speed = manager.get("speed").unwrap();
        assert_eq!(5, speed.order());
        assert_eq!(0.0, speed.third_order_derivative(2.0));
    }

    #[test]
    fn missing_name_is_reported() {
        let manager = Spline1dSegManager::new();
        let result = manager.get("curvature");
        assert!(matches!(result, Err(ManagerError::NameNotFoundError(name)) if name == "curvature"));
    }

    #[test]
    fn empty_params_are_rejected() {
        let manager = Spline1dSegManager::new();
        let result = manager.insert_obj_from_json(json!({ "name": "empty", "params": [] }));
        assert!(matches!(
            result,
            Err(ManagerError::PolynomialError(PolynomialError::InvalidParams))
        ));
        assert_eq!(0, manager.len());
    }

    #[test]
    fn negative_order_is_a_parse_error() {
        let manager = Spline1dSegManager::new();
        let result = manager.insert_obj_from_json(json!({ "name": "bad", "order": -1 }));
        assert!(matches!(result, Err(ManagerError::JsonParseError(_))));
    }

    #[test]
    fn malformed_params_are_not_replaced_by_order() {
        let manager = Spline1dSegManager::new();
        let result = manager.insert_obj_from_json(json!({ "name": "x", "params": "oops", "order": 3 }));
        assert!(matches!(result, Err(ManagerError::JsonParseError(_))));
        assert!(manager.get("x").is_err());
    }

    #[test]
    fn params_and_order_together_are_rejected() {
        let manager = Spline1dSegManager::new();
        let result = manager.insert_obj_from_json(json!({ "name": "x", "params": [1.0, 2.0], "order": 1 }));
        assert!(matches!(result, Err(ManagerError::JsonParseError(_))));
        assert_eq!(0, manager.len());
    }

    #[test]
    fn neither_params_nor_order_is_rejected() {
        let manager = Spline1dSegManager::new();
        let result = manager.insert_obj_from_json(json!({ "name": "x" }));
        assert!(matches!(result, Err(ManagerError::JsonParseError(_))));
    }

    #[test]
    fn failing_entry_registers_nothing_from_its_batch() {
        let manager = Spline1dSegManager::new();
        let result = manager.insert_obj_from_json_vec(&[
            json!({ "name": "lateral", "params": [1.0, 2.0, 3.0] }),
            json!({ "name": "empty", "params": [] }),
        ]);
        assert!(matches!(
            result,
            Err(ManagerError::PolynomialError(PolynomialError::InvalidParams))
        ));
        assert_eq!(0, manager.len());
        assert!(matches!(manager.get("lateral"), Err(ManagerError::NameNotFoundError(_))));
    }

    #[test]
    fn missing_name_field_is_a_parse_error() {
        let manager = Spline1dSegManager::new();
        let result = manager.insert_obj_from_json(json!({ "params": [1.0] }));
        assert!(matches!(result, Err(ManagerError::JsonParseError(_))));
    }
}
