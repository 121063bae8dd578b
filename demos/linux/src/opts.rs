//! Option-token resolution for the sensor configuration.
//!
//! Unrecognized tokens degrade to a documented default with a logged
//! warning instead of failing: the poller is a diagnostic tool and should
//! come up with usable settings on any input.

use log::warn;
use tcs34725::{Gain, IntegrationTime};

/// Resolve an integration-time option token.
///
/// Valid tokens are `2.4`, `24`, `50`, `101`, `154` and `700`; anything
/// else logs a warning and falls back to the 2.4ms default.
pub fn resolve_integration_time(token: &str) -> IntegrationTime {
    match token {
        "2.4" => IntegrationTime::Ms2_4,
        "24" => IntegrationTime::Ms24,
        "50" => IntegrationTime::Ms50,
        "101" => IntegrationTime::Ms101,
        "154" => IntegrationTime::Ms154,
        "700" => IntegrationTime::Ms700,
        _ => {
            warn!(
                "Invalid integration time option: {}, defaulting to 2.4ms",
                token
            );
            IntegrationTime::Ms2_4
        }
    }
}

/// Resolve a gain option token.
///
/// Valid tokens are `1`, `4`, `16` and `60`; anything else logs a warning
/// and falls back to the 4x default.
pub fn resolve_gain(token: &str) -> Gain {
    match token {
        "1" => Gain::X1,
        "4" => Gain::X4,
        "16" => Gain::X16,
        "60" => Gain::X60,
        _ => {
            warn!("Invalid gain option: {}, defaulting to 4X", token);
            Gain::X4
        }
    }
}
