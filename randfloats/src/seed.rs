use chrono::{DateTime, Utc};

/// Seed derived from the current wall-clock time, like `srand(time(NULL))`.
pub fn clock_seed() -> u32 {
    seed_from_time(Utc::now())
}

/// Whole seconds since the Unix epoch, truncated to 32 bits.
pub fn seed_from_time(now: DateTime<Utc>) -> u32 {
    now.timestamp() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch_is_zero() {
        assert_eq!(seed_from_time(DateTime::UNIX_EPOCH), 0);
    }

    #[test]
    fn test_second_resolution() {
        let start = DateTime::from_timestamp(1_760_000_000, 0).unwrap();
        let later = DateTime::from_timestamp(1_760_000_000, 999_999_999).unwrap();
        assert_eq!(seed_from_time(start), 1_760_000_000);
        assert_eq!(seed_from_time(start), seed_from_time(later));
    }

    #[test]
    fn test_truncates_to_32_bits() {
        let far = DateTime::from_timestamp(u32::MAX as i64 + 5, 0).unwrap();
        assert_eq!(seed_from_time(far), 4);
        let before_epoch = DateTime::from_timestamp(-1, 0).unwrap();
        assert_eq!(seed_from_time(before_epoch), u32::MAX);
    }

    #[test]
    fn test_clock_seed_tracks_now() {
        let before = seed_from_time(Utc::now());
        let seed = clock_seed();
        let after = seed_from_time(Utc::now());
        assert!(before <= seed && seed <= after);
    }
}
