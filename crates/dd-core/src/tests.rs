//! Unit tests for dd-core primitives.

#[cfg(test)]
mod ids {
    use crate::{NodeId, RobotId};

    #[test]
    fn index_roundtrip() {
        let id = NodeId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(NodeId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(NodeId(0) < NodeId(1));
        assert!(RobotId(100) > RobotId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(NodeId::INVALID.0, u32::MAX);
        assert_eq!(RobotId::INVALID.0, u32::MAX);
        assert_eq!(NodeId::default(), NodeId::INVALID);
    }

    #[test]
    fn depot_is_node_zero() {
        assert_eq!(NodeId::DEPOT, NodeId(0));
        assert!(NodeId(0).is_depot());
        assert!(!NodeId(3).is_depot());
    }

    #[test]
    fn display_is_bare_number() {
        assert_eq!(NodeId(7).to_string(), "7");
        assert_eq!(RobotId(0).to_string(), "0");
    }
}

#[cfg(test)]
mod order {
    use crate::{NodeId, Order};

    #[test]
    fn from_pair() {
        let o = Order::from((4, 3));
        assert_eq!(o, Order::new(NodeId(4), 3));
        assert!(!o.is_empty());
        assert!(Order::from((2, 0)).is_empty());
    }

    #[test]
    fn pluralised_display() {
        assert_eq!(Order::from((4, 1)).to_string(), "1 package to node 4");
        assert_eq!(Order::from((4, 2)).to_string(), "2 packages to node 4");
    }
}

#[cfg(test)]
mod config {
    use crate::{DdError, SimConfig};

    #[test]
    fn default_is_valid() {
        let cfg = SimConfig::default();
        assert_eq!(cfg.node_count, 11);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn rejects_single_node() {
        let cfg = SimConfig { node_count: 1, ..SimConfig::default() };
        assert!(matches!(cfg.validate(), Err(DdError::Config(_))));
    }

    #[test]
    fn rejects_connectivity_out_of_range() {
        let cfg = SimConfig { connectivity: 1.5, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
        let cfg = SimConfig { connectivity: -0.1, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_zero_capacity_and_zero_robots() {
        let cfg = SimConfig { robot_capacity: 0, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
        let cfg = SimConfig { robot_count: 0, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
    }
}

#[cfg(test)]
mod rng {
    use crate::DayRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = DayRng::new(12345);
        let mut r2 = DayRng::new(12345);
        for _ in 0..100 {
            let a: f64 = r1.random();
            let b: f64 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_days_differ() {
        assert_ne!(DayRng::day_seed(1, 0), DayRng::day_seed(1, 1));
        let mut r0 = DayRng::for_day(1, 0);
        let mut r1 = DayRng::for_day(1, 1);
        let a: u64 = r0.random();
        let b: u64 = r1.random();
        assert_ne!(a, b, "seeds for adjacent days should diverge");
    }

    #[test]
    fn day_zero_keeps_global_seed() {
        assert_eq!(DayRng::day_seed(99, 0), 99);
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = DayRng::new(0);
        for _ in 0..1000 {
            let v: u32 = rng.gen_range(0..=2);
            assert!(v <= 2);
        }
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = DayRng::new(0);
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
    }

    #[test]
    fn gen_bool_nan_never_fires() {
        let mut rng = DayRng::new(0);
        assert!((0..100).all(|_| !rng.gen_bool(f64::NAN)));
        assert!(rng.gen_bool(2.0));
    }
}
