// src/store/ids.rs
//! Record id generation

use uuid::Uuid;

/// Derive a fresh record id from a random UUID: the first four hex digits
/// of each of its five groups, truncated to ten digits and read as base-16.
///
/// Uniqueness is probabilistic: ids are 40 bits and new ids are not
/// checked against existing rows. Adequate for a personal notebook, not a
/// guarantee.
pub fn new_record_id() -> u64 {
    let uuid = Uuid::new_v4().hyphenated().to_string();
    let digits: String = uuid
        .split('-')
        .flat_map(|group| group.chars().take(4))
        .take(10)
        .collect();
    u64::from_str_radix(&digits, 16).expect("uuid groups are hex digits")
}
