// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The power signal sent to a panel server.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A power signal understood by the Pterodactyl client API.
///
/// Each variant maps to exactly one lowercase wire token, which is the value
/// of the `signal` form field in a power request.
///
/// # Examples
///
/// ```
/// use ptero_power::PowerSignal;
///
/// assert_eq!(PowerSignal::Start.as_str(), "start");
/// assert_eq!(PowerSignal::Kill.as_str(), "kill");
/// assert_eq!("restart".parse::<PowerSignal>().unwrap(), PowerSignal::Restart);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PowerSignal {
    /// Boot the server.
    Start,
    /// Shut the server down gracefully.
    Stop,
    /// Stop and then start the server.
    Restart,
    /// Terminate the server process immediately.
    Kill,
}

impl PowerSignal {
    /// Returns the wire token sent to the panel.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Stop => "stop",
            Self::Restart => "restart",
            Self::Kill => "kill",
        }
    }
}

impl fmt::Display for PowerSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PowerSignal {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "start" => Ok(Self::Start),
            "stop" => Ok(Self::Stop),
            "restart" => Ok(Self::Restart),
            "kill" => Ok(Self::Kill),
            _ => Err(Error::InvalidSignal(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [PowerSignal; 4] = [
        PowerSignal::Start,
        PowerSignal::Stop,
        PowerSignal::Restart,
        PowerSignal::Kill,
    ];

    #[test]
    fn wire_tokens() {
        assert_eq!(PowerSignal::Start.as_str(), "start");
        assert_eq!(PowerSignal::Stop.as_str(), "stop");
        assert_eq!(PowerSignal::Restart.as_str(), "restart");
        assert_eq!(PowerSignal::Kill.as_str(), "kill");
    }

    #[test]
    fn tokens_are_distinct() {
        for a in ALL {
            for b in ALL {
                assert_eq!(a == b, a.as_str() == b.as_str());
            }
        }
    }

    #[test]
    fn from_str_round_trip() {
        for signal in ALL {
            assert_eq!(signal.as_str().parse::<PowerSignal>().unwrap(), signal);
        }
    }

    #[test]
    fn from_str_is_case_insensitive() {
        assert_eq!("START".parse::<PowerSignal>().unwrap(), PowerSignal::Start);
        assert_eq!("Kill".parse::<PowerSignal>().unwrap(), PowerSignal::Kill);
    }

    #[test]
    fn from_str_invalid() {
        let result = "reboot".parse::<PowerSignal>();
        assert!(matches!(result, Err(Error::InvalidSignal(s)) if s == "reboot"));
    }

    #[test]
    fn serde_uses_wire_tokens() {
        assert_eq!(
            serde_json::to_string(&PowerSignal::Restart).unwrap(),
            "\"restart\""
        );
        let parsed: PowerSignal = serde_json::from_str("\"stop\"").unwrap();
        assert_eq!(parsed, PowerSignal::Stop);
    }

    #[test]
    fn display_matches_token() {
        for signal in ALL {
            assert_eq!(signal.to_string(), signal.as_str());
        }
    }
}
