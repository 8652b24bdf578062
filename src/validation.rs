use soroban_sdk::Vec;

use crate::types::MAX_BPS;

/// True iff the value is a well-formed basis-point weight (0..=10000).
pub fn validate_percentage(percentage: u32) -> bool {
    percentage <= MAX_BPS
}

/// True iff every element passes validate_percentage. Deliberately does
/// not require the elements to sum to 10000.
pub fn validate_percentages(percentages: &Vec<u32>) -> bool {
    for percentage in percentages.iter() {
        if !validate_percentage(percentage) {
            return false;
        }
    }
    true
}
