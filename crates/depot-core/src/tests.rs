//! Unit tests for depot-core primitives.

#[cfg(test)]
mod ids {
    use crate::{ChargerId, ShuttleId};

    #[test]
    fn index_roundtrip() {
        let id = ShuttleId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(ShuttleId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(ShuttleId(1) < ShuttleId(2));
        assert!(ChargerId(100) > ChargerId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(ShuttleId::INVALID.0, u32::MAX);
        assert_eq!(ChargerId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(ShuttleId(7).to_string(), "ShuttleId(7)");
        assert_eq!(ChargerId(0).to_string(), "ChargerId(0)");
    }
}

#[cfg(test)]
mod time {
    use crate::{Minute, PlanParams, DEFAULT_HORIZON_MINUTES};

    #[test]
    fn minute_arithmetic() {
        let t = Minute(10);
        assert_eq!(t + 5, Minute(15));
        assert_eq!(t.offset(3), Minute(13));
        assert_eq!(Minute(15) - Minute(10), 5);
        assert_eq!(Minute(15).since(Minute(10)), 5);
    }

    #[test]
    fn minute_display() {
        assert_eq!(Minute(17).to_string(), "t17");
        assert_eq!(Minute::ZERO.to_string(), "t0");
    }

    #[test]
    fn params_default_horizon() {
        let params = PlanParams::with_max_wait(30);
        assert_eq!(params.max_wait_minutes, 30);
        assert_eq!(params.horizon_minutes, DEFAULT_HORIZON_MINUTES);
        assert_eq!(params.horizon(), Minute(100_000));
    }
}

#[cfg(test)]
mod shuttle {
    use crate::{Minute, Shuttle, ShuttleId};

    #[test]
    fn valid_record() {
        let s = Shuttle::new(ShuttleId(3), 9, Minute(7), 2).unwrap();
        assert_eq!(s.id(), ShuttleId(3));
        assert_eq!(s.priority(), 9);
        assert_eq!(s.arrival(), Minute(7));
        assert_eq!(s.service_minutes(), 2);
    }

    #[test]
    fn zero_id_rejected() {
        assert!(Shuttle::new(ShuttleId(0), 1, Minute(0), 1).is_err());
    }

    #[test]
    fn sentinel_id_rejected() {
        assert!(Shuttle::new(ShuttleId::INVALID, 1, Minute(0), 1).is_err());
    }

    #[test]
    fn negative_priority_allowed() {
        // Priorities are plain integers; lower-than-zero just means "last".
        let s = Shuttle::new(ShuttleId(1), -5, Minute(0), 0).unwrap();
        assert_eq!(s.priority(), -5);
    }
}
