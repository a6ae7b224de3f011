use serde::{Deserialize, Serialize};

// Command set understood by the LED daemon's remote-control interface.
// The two value-carrying variants hold the raw slider string: the daemon owns
// interpretation, we only concatenate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum LedEvent {
    GainBrightLocal,
    GainBrightRemote,
    GainValue(String),   // 0..=100
    BrightValue(String), // 0.0..=1.0, step 0.02
    GradientPos,
    GradientNeg,
    DisplayChangePos,
    DisplayChangeNeg,
    ReverseGradientToggle,
}

impl LedEvent {
    /// Fixed symbol the control script matches on.
    pub fn symbol(&self) -> &'static str {
        match self {
            LedEvent::GainBrightLocal => "E_GAIN_BRIGHT_LOCAL",
            LedEvent::GainBrightRemote => "E_GAIN_BRIGHT_REMOTE",
            LedEvent::GainValue(_) => "E_GAIN_VALUE",
            LedEvent::BrightValue(_) => "E_BRIGHT_VALUE",
            LedEvent::GradientPos => "E_GRADIENT_POS",
            LedEvent::GradientNeg => "E_GRADIENT_NEG",
            LedEvent::DisplayChangePos => "E_DISPLAY_CHANGE_POS",
            LedEvent::DisplayChangeNeg => "E_DISPLAY_CHANGE_NEG",
            LedEvent::ReverseGradientToggle => "E_REVERSE_GRADIENT_TOGGLE",
        }
    }

    /// Positional argument handed to the control script: the symbol, with the
    /// raw value appended for gain/brightness updates. No separator; the
    /// script splits on the known symbol prefix (e.g. `E_GAIN_VALUE75`).
    pub fn script_arg(&self) -> String {
        match self {
            LedEvent::GainValue(v) | LedEvent::BrightValue(v) => {
                format!("{}{}", self.symbol(), v)
            }
            _ => self.symbol().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_events_have_bare_symbols() {
        assert_eq!(LedEvent::GainBrightLocal.script_arg(), "E_GAIN_BRIGHT_LOCAL");
        assert_eq!(LedEvent::GradientNeg.script_arg(), "E_GRADIENT_NEG");
        assert_eq!(
            LedEvent::ReverseGradientToggle.script_arg(),
            "E_REVERSE_GRADIENT_TOGGLE"
        );
    }

    #[test]
    fn value_events_append_raw_value() {
        assert_eq!(
            LedEvent::GainValue("75".to_string()).script_arg(),
            "E_GAIN_VALUE75"
        );
        assert_eq!(
            LedEvent::BrightValue("0.74".to_string()).script_arg(),
            "E_BRIGHT_VALUE0.74"
        );
    }

    #[test]
    fn malformed_values_pass_through_uninterpreted() {
        assert_eq!(
            LedEvent::GainValue("banana".to_string()).script_arg(),
            "E_GAIN_VALUEbanana"
        );
        assert_eq!(
            LedEvent::BrightValue(String::new()).script_arg(),
            "E_BRIGHT_VALUE"
        );
    }

    #[test]
    fn events_serialize_tagged() {
        let json = serde_json::to_value(LedEvent::GainValue("30".to_string())).unwrap();
        assert_eq!(json["type"], "GainValue");
        assert_eq!(json["value"], "30");
    }
}
